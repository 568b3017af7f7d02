//! Группировка строк по категориям и отметка «выгодно»
//!
//! Порядок категорий: порядок первого появления в таблице.
//! Порядок позиций внутри категории: порядок строк.

use crate::types::{CatalogRow, Price, Wine};
use serde::{Deserialize, Serialize};

/// Категория с её позициями
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub name: String,
    pub wines: Vec<Wine>,
}

impl CategoryGroup {
    /// Минимальная цена категории
    ///
    /// Если есть хотя бы одна числовая цена, минимум ищется среди чисел.
    /// Иначе берётся лексикографически меньший текст.
    pub fn min_price(&self) -> Option<Price> {
        let min_amount = self
            .wines
            .iter()
            .filter_map(|w| w.price.amount())
            .min_by(|a, b| a.total_cmp(b));

        if let Some(amount) = min_amount {
            return Some(Price::Amount(amount));
        }

        self.wines
            .iter()
            .filter_map(|w| match &w.price {
                Price::Text(s) => Some(s.as_str()),
                Price::Amount(_) => None,
            })
            .min()
            .map(|s| Price::Text(s.to_string()))
    }

    pub fn best_wines(&self) -> impl Iterator<Item = &Wine> {
        self.wines.iter().filter(|w| w.best_price)
    }

    fn mark_best_prices(&mut self) {
        let Some(min) = self.min_price() else {
            return;
        };
        for wine in &mut self.wines {
            wine.best_price = wine.price == min;
        }
    }
}

/// Каталог, сгруппированный по категориям
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<CategoryGroup>,
}

impl Catalog {
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn get(&self, category: &str) -> Option<&CategoryGroup> {
        self.categories.iter().find(|c| c.name == category)
    }

    pub fn wine_count(&self) -> usize {
        self.categories.iter().map(|c| c.wines.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Строки таблицы -> каталог с отмеченными минимальными ценами
pub fn shape_catalog(rows: impl IntoIterator<Item = CatalogRow>) -> Catalog {
    let mut categories: Vec<CategoryGroup> = Vec::new();

    for row in rows {
        let category = row.category.trim().to_string();
        let wine = Wine {
            image: row.image,
            name: row.name,
            variety: row.variety,
            price: row.price,
            category: category.clone(),
            best_price: false,
        };

        match categories.iter_mut().find(|c| c.name == category) {
            Some(group) => group.wines.push(wine),
            None => categories.push(CategoryGroup {
                name: category,
                wines: vec![wine],
            }),
        }
    }

    for group in &mut categories {
        group.mark_best_prices();
    }

    Catalog { categories }
}
