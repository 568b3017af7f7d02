use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Ошибка настроек: {0}")]
    Config(String),

    #[error("Файл не найден: {0}")]
    FileNotFound(String),

    #[error("Ошибка чтения таблицы: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Лист не найден: {0}")]
    SheetNotFound(String),

    #[error("Лист пуст (нет строки заголовков): {0}")]
    EmptySheet(String),

    #[error("В таблице нет колонки «{0}»")]
    MissingColumn(String),

    #[error("Ошибка шаблона: {0}")]
    Render(#[from] askama::Error),

    #[error("Не удалось занять адрес {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
