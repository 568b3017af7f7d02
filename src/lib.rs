pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod server;
pub mod site;
pub mod spreadsheet;

pub use wine_catalog_common as common;
