//! Сборка HTML-страницы каталога
//!
//! Шаблонизатор спрятан за трейтом `PageRenderer`, чтобы сборку
//! можно было проверять без askama.

mod view;

pub use view::{CatalogPage, CategoryView, WineView};

use crate::error::Result;
use askama::Template;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub trait PageRenderer {
    fn render(&self, page: &CatalogPage) -> Result<String>;
}

/// Рендер через скомпилированный `templates/template.html`
#[derive(Debug, Clone, Copy, Default)]
pub struct AskamaRenderer;

impl PageRenderer for AskamaRenderer {
    fn render(&self, page: &CatalogPage) -> Result<String> {
        Ok(Template::render(page)?)
    }
}

/// Перезаписать файл страницы
///
/// Файл сброшен на диск и закрыт к моменту возврата.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(html.as_bytes())?;
    writer.flush()?;

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    tracing::debug!(path = %path.display(), bytes = html.len(), "страница записана");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use wine_catalog_common::{shape_catalog, CatalogRow, Price};

    fn sample_page() -> CatalogPage {
        let catalog = shape_catalog(vec![
            CatalogRow {
                category: "Белые вина".into(),
                name: "Гевюрцтраминер".into(),
                variety: "Гевюрцтраминер".into(),
                price: Price::Amount(699.0),
                image: "images/gew.png".into(),
            },
            CatalogRow {
                category: "Белые вина".into(),
                name: "Ркацители <Кахетия>".into(),
                variety: "Ркацители".into(),
                price: Price::Amount(499.0),
                image: "images/rkaciteli.png".into(),
            },
            CatalogRow {
                category: "Напитки".into(),
                name: "Коньяк".into(),
                variety: String::new(),
                price: Price::blank(),
                image: String::new(),
            },
        ]);
        CatalogPage::new(&catalog, "Уже 106 лет с вами!")
    }

    #[test]
    fn test_page_view_model() {
        let page = sample_page();
        assert_eq!(page.categories.len(), 2);
        assert_eq!(page.categories[0].wines.len(), 2);
        assert_eq!(page.categories[1].wines.len(), 1);
        assert_eq!(page.categories[0].wines[0].price, "699");
        assert!(!page.categories[0].wines[0].best_price);
        assert!(page.categories[0].wines[1].best_price);
        assert_eq!(page.categories[1].wines[0].price, "");
    }

    #[test]
    fn test_askama_render() {
        let html = AskamaRenderer.render(&sample_page()).unwrap();

        assert!(html.contains("Уже 106 лет с вами!"));
        assert!(html.contains("Белые вина"));
        assert!(html.contains("Напитки"));
        assert!(html.contains("gew.png"));
        // экранирование HTML
        assert!(html.contains("Ркацители &lt;Кахетия&gt;"));
        assert!(!html.contains("<Кахетия>"));
        assert_eq!(html.matches("Выгодное предложение").count(), 2);
    }

    #[test]
    fn test_category_order_preserved_in_html() {
        let html = AskamaRenderer.render(&sample_page()).unwrap();
        let white = html.find("Белые вина").unwrap();
        let drinks = html.find("Напитки").unwrap();
        assert!(white < drinks);
    }

    #[test]
    fn test_render_is_deterministic() {
        let page = sample_page();
        assert_eq!(
            AskamaRenderer.render(&page).unwrap(),
            AskamaRenderer.render(&page).unwrap()
        );
    }

    #[test]
    fn test_write_page_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site").join("index.html");

        write_page(&path, "<p>старая версия, подлиннее</p>").unwrap();
        write_page(&path, "<p>новая</p>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>новая</p>");
    }
}
