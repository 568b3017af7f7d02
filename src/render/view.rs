use askama::Template;
use wine_catalog_common::{Catalog, CategoryGroup, Wine};

/// Контекст шаблона страницы
#[derive(Template, Debug, Clone, PartialEq)]
#[template(path = "template.html")]
pub struct CatalogPage {
    pub years_text: String,
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub name: String,
    pub wines: Vec<WineView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WineView {
    pub image: String,
    pub name: String,
    pub variety: String,
    pub price: String,
    pub best_price: bool,
}

impl CatalogPage {
    pub fn new(catalog: &Catalog, years_text: impl Into<String>) -> Self {
        Self {
            years_text: years_text.into(),
            categories: catalog.categories.iter().map(CategoryView::from).collect(),
        }
    }
}

impl From<&CategoryGroup> for CategoryView {
    fn from(group: &CategoryGroup) -> Self {
        Self {
            name: group.name.clone(),
            wines: group.wines.iter().map(WineView::from).collect(),
        }
    }
}

impl From<&Wine> for WineView {
    fn from(wine: &Wine) -> Self {
        Self {
            image: wine.image.clone(),
            name: wine.name.clone(),
            variety: wine.variety.clone(),
            price: wine.price.to_string(),
            best_price: wine.best_price,
        }
    }
}
