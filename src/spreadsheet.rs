//! Чтение каталога из таблицы (calamine)
//!
//! Первая строка листа считается заголовком, колонки ищутся по имени.
//! Пустые ячейки превращаются в пустые строки.

use crate::config::ColumnNames;
use crate::error::{CatalogError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use wine_catalog_common::{CatalogRow, Price};

/// Позиции нужных колонок в строке заголовков
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    category: usize,
    name: usize,
    variety: usize,
    price: usize,
    image: usize,
}

impl ColumnIndex {
    fn resolve(header: &[Data], columns: &ColumnNames) -> Result<Self> {
        let find = |wanted: &str| {
            header
                .iter()
                .position(|cell| cell_text(Some(cell)).trim() == wanted.trim())
                .ok_or_else(|| CatalogError::MissingColumn(wanted.to_string()))
        };

        Ok(Self {
            category: find(&columns.category)?,
            name: find(&columns.name)?,
            variety: find(&columns.variety)?,
            price: find(&columns.price)?,
            image: find(&columns.image)?,
        })
    }
}

/// Открыть книгу и прочитать строки каталога
pub fn load_rows(path: &Path, sheet: Option<&str>, columns: &ColumnNames) -> Result<Vec<CatalogRow>> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;

    let (sheet_name, range) = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(CatalogError::SheetNotFound(name.to_string()));
            }
            (name.to_string(), workbook.worksheet_range(name)?)
        }
        None => {
            let first = workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| CatalogError::SheetNotFound(path.display().to_string()))?;
            let range = workbook
                .worksheet_range_at(0)
                .ok_or_else(|| CatalogError::SheetNotFound(first.clone()))??;
            (first, range)
        }
    };

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet_name,
        height = range.height(),
        width = range.width(),
        "лист открыт"
    );

    rows_from_range(&range, columns).map_err(|e| match e {
        CatalogError::EmptySheet(_) => CatalogError::EmptySheet(sheet_name),
        other => other,
    })
}

/// Диапазон ячеек -> строки каталога
pub fn rows_from_range(range: &Range<Data>, columns: &ColumnNames) -> Result<Vec<CatalogRow>> {
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| CatalogError::EmptySheet(String::new()))?;
    let index = ColumnIndex::resolve(header, columns)?;

    let mut result = Vec::new();
    let mut skipped = 0usize;

    for cells in rows {
        if is_blank_row(cells) {
            skipped += 1;
            continue;
        }

        result.push(CatalogRow {
            category: cell_text(cells.get(index.category)),
            name: cell_text(cells.get(index.name)),
            variety: cell_text(cells.get(index.variety)),
            price: cell_price(cells.get(index.price)),
            image: cell_text(cells.get(index.image)),
        });
    }

    tracing::debug!(rows = result.len(), skipped, "строки прочитаны");
    Ok(result)
}

/// Текст ячейки; пустая или отсутствующая ячейка -> ""
pub fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(Data::Int(i)) => i.to_string(),
        // 10.0 -> "10"
        Some(Data::Float(f)) => f.to_string(),
        Some(other) => other.to_string(),
    }
}

pub fn cell_price(cell: Option<&Data>) -> Price {
    match cell {
        None | Some(Data::Empty) => Price::blank(),
        Some(Data::Int(i)) => Price::Amount(*i as f64),
        Some(Data::Float(f)) => Price::from_number(*f),
        Some(Data::String(s)) => Price::parse(s),
        Some(other) => Price::Text(other.to_string()),
    }
}

fn is_blank_row(cells: &[Data]) -> bool {
    cells.iter().all(|cell| match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    })
}
