//! Static file serving.

use axum::{
    Router,
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::fs;
use tracing::warn;

use crate::state::AppState;

/// Create the static files router.
pub fn router() -> Router<AppState> {
    Router::new().route("/static/{*path}", get(serve_static))
}

/// Serve a file from the configured static directory.
async fn serve_static(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');
    if !is_safe_path(path) {
        return not_found();
    }

    let file_path = state.static_dir().join(path);

    let content = match fs::read(&file_path).await {
        Ok(content) => content,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %file_path.display(), error = %e, "failed to read static file");
            }
            return not_found();
        }
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime_from_path(&file_path)),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        Body::from(content),
    )
        .into_response()
}

/// Reject traversal and NUL bytes.
fn is_safe_path(path: &str) -> bool {
    !path.is_empty() && !path.split('/').any(|segment| segment == "..") && !path.contains('\0')
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

fn mime_from_path(path: &std::path::Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("woff2") => "font/woff2",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_rejected() {
        assert!(!is_safe_path("../Cargo.toml"));
        assert!(!is_safe_path("css/../../secret"));
        assert!(!is_safe_path("a\0b"));
        assert!(!is_safe_path(""));
    }

    #[test]
    fn test_plain_paths_allowed() {
        assert!(is_safe_path("css/site.css"));
        assert!(is_safe_path("img/logo..svg"));
    }

    #[test]
    fn test_mime_from_path() {
        assert_eq!(mime_from_path(std::path::Path::new("site.css")), "text/css");
        assert_eq!(
            mime_from_path(std::path::Path::new("blob.bin")),
            "application/octet-stream"
        );
    }
}
