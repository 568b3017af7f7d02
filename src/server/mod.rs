//! Статический HTTP-сервер (axum + tower-http `ServeDir`)
//!
//! Файлы отдаёт `ServeDir`; каталоги без `index.html` получают листинг,
//! остальное 404. Работает на однопоточном рантайме.

mod pages;
mod path;

pub use pages::{error_response, html_response, ErrorPage, ListingEntry, ListingPage};
pub use path::{decode_path, is_servable, resolve_path};

use crate::error::{CatalogError, Result};
use axum::extract::{Request, State};
use axum::handler::Handler;
use axum::http::{Method, StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info, warn, Level};

pub struct StaticServer {
    listener: TcpListener,
    root: PathBuf,
}

impl StaticServer {
    pub async fn bind(addr: &str, root: impl Into<PathBuf>) -> Result<Self> {
        let listener = TcpListener::bind(addr).await.map_err(|source| CatalogError::Bind {
            addr: addr.to_string(),
            source,
        })?;

        Ok(Self {
            listener,
            root: root.into(),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Раздавать файлы, пока процесс не остановят
    ///
    /// Ошибки `accept` axum логирует и продолжает приём.
    pub async fn serve_forever(self) -> Result<()> {
        info!(addr = %self.local_addr()?, root = %self.root.display(), "сервер запущен");
        axum::serve(self.listener, router(self.root)).await?;
        Ok(())
    }
}

pub fn router(root: PathBuf) -> Router {
    let files = ServeDir::new(&root)
        .append_index_html_on_directories(true)
        .fallback(listing_or_not_found.with_state(root));

    Router::new()
        .fallback_service(files)
        .layer(middleware::from_fn(reject_unservable))
        .layer(TraceLayer::new_for_http().on_response(DefaultOnResponse::new().level(Level::INFO)))
}

/// Только GET/HEAD и пути без `..`, `\` и NUL
async fn reject_unservable(request: Request, next: Next) -> Response {
    if request.method() != Method::GET && request.method() != Method::HEAD {
        return error_response(StatusCode::NOT_IMPLEMENTED);
    }

    if !is_servable(&decode_path(request.uri().path())) {
        return error_response(StatusCode::NOT_FOUND);
    }

    next.run(request).await
}

/// Вызывается, когда `ServeDir` не нашёл файл
async fn listing_or_not_found(State(root): State<PathBuf>, uri: Uri) -> Response {
    let url_path = decode_path(uri.path());
    let Some(dir) = resolve_path(&root, &url_path) else {
        return error_response(StatusCode::NOT_FOUND);
    };

    if !url_path.ends_with('/') || !dir.is_dir() {
        return error_response(StatusCode::NOT_FOUND);
    }

    match ListingPage::read(&dir, &url_path) {
        Ok(page) => html_response(StatusCode::OK, &page),
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "не удалось прочитать каталог");
            error_response(StatusCode::NOT_FOUND)
        }
    }
}
