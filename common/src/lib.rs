//! Wine Catalog Common Library
//!
//! Чистая логика каталога без ввода-вывода: типы строк и позиций,
//! группировка по категориям, склонение фразы про годы.

pub mod types;
pub mod shaper;
pub mod year_phrase;

pub use types::{CatalogRow, Price, Wine};
pub use shaper::{shape_catalog, Catalog, CategoryGroup};
pub use year_phrase::{get_year_phrase, year_form, years_since, YearForm};
