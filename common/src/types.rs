//! Типы каталога
//!
//! - CatalogRow: строка таблицы после нормализации пустых ячеек
//! - Price: цена (число или исходный текст ячейки)
//! - Wine: позиция каталога с вычисленным флагом «выгодно»

use serde::{Deserialize, Serialize};
use std::fmt;

/// Цена позиции
///
/// Пустая ячейка хранится как `Text("")`, нечисловой текст остаётся как есть.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl Price {
    /// Пустая цена
    pub fn blank() -> Self {
        Price::Text(String::new())
    }

    /// Разбор текстового значения ячейки
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Price::Amount(value),
            _ => Price::Text(raw.to_string()),
        }
    }

    pub fn from_number(value: f64) -> Self {
        if value.is_finite() {
            Price::Amount(value)
        } else {
            Price::Text(value.to_string())
        }
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Amount(v) => Some(*v),
            Price::Text(_) => None,
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::blank()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 1290.0 печатается как "1290"
            Price::Amount(v) => write!(f, "{}", v),
            Price::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Строка таблицы
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogRow {
    pub category: String,     // Категория
    pub name: String,         // Название
    pub variety: String,      // Сорт
    pub price: Price,         // Цена
    pub image: String,        // Картинка
}

/// Позиция каталога
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wine {
    pub image: String,
    pub name: String,
    pub variety: String,
    pub price: Price,
    pub category: String,

    /// Цена равна минимальной в категории
    #[serde(default)]
    pub best_price: bool,
}
