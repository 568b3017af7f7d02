//! URL-путь запроса -> путь на диске

use std::path::{Path, PathBuf};

/// Percent-декодирование пути (невалидный UTF-8 заменяется)
pub fn decode_path(raw: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

/// Путь можно отдавать: нет `..`, обратных слешей и NUL
pub fn is_servable(url_path: &str) -> bool {
    url_path
        .split('/')
        .all(|segment| segment != ".." && !segment.contains('\\') && !segment.contains('\0'))
}

/// Декодированный URL-путь -> путь внутри `root`
pub fn resolve_path(root: &Path, url_path: &str) -> Option<PathBuf> {
    if !is_servable(url_path) {
        return None;
    }

    let path = url_path
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .fold(root.to_path_buf(), |path, segment| path.join(segment));
    Some(path)
}
