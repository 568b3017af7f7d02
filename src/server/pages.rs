//! Служебные страницы сервера: ошибки и листинг каталога

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::path::Path;
use walkdir::WalkDir;

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub code: u16,
    pub message: &'static str,
}

impl ErrorPage {
    pub fn new(status: StatusCode) -> Self {
        let message = match status {
            StatusCode::BAD_REQUEST => "Некорректный запрос",
            StatusCode::NOT_FOUND => "Файл не найден",
            StatusCode::NOT_IMPLEMENTED => "Метод не поддерживается",
            other => other.canonical_reason().unwrap_or("Ошибка"),
        };
        Self {
            code: status.as_u16(),
            message,
        }
    }
}

pub struct ListingEntry {
    pub href: String,
    pub name: String,
}

/// Листинг каталога, записи отсортированы по имени
#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingPage {
    pub url_path: String,
    pub entries: Vec<ListingEntry>,
}

impl ListingPage {
    pub fn read(dir: &Path, url_path: &str) -> std::io::Result<Self> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            let name = entry.file_name().to_string_lossy().to_string();
            let mut href = urlencoding::encode(&name).into_owned();

            let name = if entry.file_type().is_dir() {
                href.push('/');
                format!("{}/", name)
            } else {
                name
            };
            entries.push(ListingEntry { href, name });
        }

        Ok(Self {
            url_path: url_path.to_string(),
            entries,
        })
    }
}

pub fn html_response<T: Template>(status: StatusCode, page: &T) -> Response {
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "не удалось отрисовать служебную страницу");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub fn error_response(status: StatusCode) -> Response {
    html_response(status, &ErrorPage::new(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_error_page() {
        let html = ErrorPage::new(StatusCode::NOT_FOUND).render().unwrap();
        assert!(html.contains("Ошибка 404"));
        assert!(html.contains("Файл не найден"));

        let page = ErrorPage::new(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(page.code, 405);
        assert_eq!(page.message, "Method Not Allowed");
    }

    #[test]
    fn test_listing_sorted_and_escaped() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("b.html"), "b").unwrap();
        std::fs::write(dir.path().join("a <1>.png"), "a").unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();

        let page = ListingPage::read(dir.path(), "/").unwrap();
        let names: Vec<&str> = page.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a <1>.png", "b.html", "images/"]);
        assert_eq!(page.entries[0].href, "a%20%3C1%3E.png");
        assert_eq!(page.entries[2].href, "images/");

        let html = page.render().unwrap();
        assert!(html.contains("a &lt;1&gt;.png"));
        assert!(!html.contains("a <1>.png"));
        assert!(html.contains("Содержимое каталога"));
        assert!(html.contains("href=\"images/\""));
    }

    #[test]
    fn test_listing_cyrillic_href() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("вино.png"), "x").unwrap();

        let page = ListingPage::read(dir.path(), "/images/").unwrap();
        assert_eq!(page.entries[0].href, "%D0%B2%D0%B8%D0%BD%D0%BE.png");
    }

    #[test]
    fn test_error_response_status() {
        let response = error_response(StatusCode::NOT_IMPLEMENTED);
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
