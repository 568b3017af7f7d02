//! Сборка страницы: таблица -> каталог -> HTML -> файл

use crate::config::Config;
use crate::error::Result;
use crate::render::{write_page, CatalogPage, PageRenderer};
use crate::spreadsheet;
use chrono::{Datelike, NaiveDate};
use std::path::PathBuf;
use wine_catalog_common::{get_year_phrase, shape_catalog, years_since, Catalog};

/// Итог сборки
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_path: PathBuf,
    pub categories: Vec<String>,
    pub wine_count: usize,
    pub best_count: usize,
    pub years_text: String,
}

/// Прочитать таблицу и сгруппировать строки
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    let rows = spreadsheet::load_rows(
        &config.catalog_path,
        config.sheet.as_deref(),
        &config.columns,
    )?;
    Ok(shape_catalog(rows))
}

pub fn year_phrase_for(config: &Config, today: NaiveDate) -> String {
    get_year_phrase(years_since(config.founded_year, today.year()))
}

/// Собрать страницу из уже сгруппированного каталога
pub fn render_catalog<R: PageRenderer>(
    config: &Config,
    catalog: &Catalog,
    renderer: &R,
    today: NaiveDate,
) -> Result<BuildReport> {
    let years_text = year_phrase_for(config, today);
    let page = CatalogPage::new(catalog, years_text.clone());
    let html = renderer.render(&page)?;

    write_page(&config.output_path, &html)?;

    let best_count = catalog
        .categories
        .iter()
        .map(|c| c.best_wines().count())
        .sum();

    tracing::info!(
        output = %config.output_path.display(),
        categories = catalog.len(),
        wines = catalog.wine_count(),
        "страница собрана"
    );

    Ok(BuildReport {
        output_path: config.output_path.clone(),
        categories: catalog.category_names().into_iter().map(String::from).collect(),
        wine_count: catalog.wine_count(),
        best_count,
        years_text,
    })
}

/// Полный цикл сборки
pub fn build_site<R: PageRenderer>(config: &Config, renderer: &R, today: NaiveDate) -> Result<BuildReport> {
    let catalog = load_catalog(config)?;
    render_catalog(config, &catalog, renderer, today)
}
