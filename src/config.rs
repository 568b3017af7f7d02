use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Переменная окружения с путём к таблице (приоритетнее файла настроек)
pub const CATALOG_PATH_ENV: &str = "WINE_CATALOG_PATH";

/// Имя файла настроек в рабочей директории
pub const LOCAL_CONFIG_FILE: &str = "wine-catalog.json";

/// Названия колонок в строке заголовков
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub category: String,
    pub name: String,
    pub variety: String,
    pub price: String,
    pub image: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            category: "Категория".into(),
            name: "Название".into(),
            variety: "Сорт".into(),
            price: "Цена".into(),
            image: "Картинка".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Таблица с каталогом (.xlsx / .xls / .ods)
    pub catalog_path: PathBuf,
    /// Имя листа; по умолчанию первый лист
    pub sheet: Option<String>,
    pub columns: ColumnNames,
    /// Куда писать готовую страницу
    pub output_path: PathBuf,
    pub bind_addr: String,
    /// Корень раздачи статики
    pub serve_root: PathBuf,
    /// Год основания (от него считается «Уже N лет с вами!»)
    pub founded_year: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("wine3.xlsx"),
            sheet: None,
            columns: ColumnNames::default(),
            output_path: PathBuf::from("index.html"),
            bind_addr: "0.0.0.0:8000".into(),
            serve_root: PathBuf::from("."),
            founded_year: 1920,
        }
    }
}

impl Config {
    /// Загрузка настроек
    ///
    /// 1. явно указанный файл (должен существовать)
    /// 2. `./wine-catalog.json`
    /// 3. `<config_dir>/wine-catalog/config.json`
    /// 4. значения по умолчанию
    ///
    /// После этого применяется `WINE_CATALOG_PATH`.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CatalogError::FileNotFound(path.display().to_string()));
                }
                Self::from_file(path)?
            }
            None => match Self::discover() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_catalog_override(std::env::var(CATALOG_PATH_ENV).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CatalogError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "настройки загружены");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Глобальный файл настроек пользователя
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wine-catalog").join("config.json"))
    }

    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        Self::user_config_path().filter(|p| p.exists())
    }

    /// Непустое значение переменной окружения заменяет путь к таблице
    pub fn apply_catalog_override(&mut self, value: Option<String>) {
        if let Some(path) = value.filter(|v| !v.trim().is_empty()) {
            self.catalog_path = PathBuf::from(path);
        }
    }
}
