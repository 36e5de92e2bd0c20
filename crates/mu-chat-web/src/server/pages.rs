//! Page fallback — client-side routes get `index.html`, anything else is
//! logged and answered with 404.

use std::path::PathBuf;

use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

use mu_chat_core::site::Route;

pub async fn spa_fallback(uri: Uri, index_html: PathBuf) -> Response {
    let path = uri.path();

    if path.starts_with("/api/") {
        warn!("404 Error: unknown API endpoint: {}", path);
        return (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response();
    }

    let status = match Route::from_path(path) {
        Some(_) => StatusCode::OK,
        None => {
            warn!("404 Error: User attempted to access non-existent route: {}", path);
            StatusCode::NOT_FOUND
        }
    };

    match tokio::fs::read_to_string(&index_html).await {
        Ok(body) => (status, Html(body)).into_response(),
        Err(_) => (status, Html(PLACEHOLDER_PAGE)).into_response(),
    }
}

const PLACEHOLDER_PAGE: &str = "<!doctype html>\
<html><head><title>Murang'a University Chatbot Assistant</title></head>\
<body><p>The site frontend has not been built yet.</p></body></html>";

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn dist_with_index() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<div id=\"main\"></div>").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_known_routes_serve_index() {
        let dist = dist_with_index();
        for path in ["/", "/chatbot"] {
            let response =
                spa_fallback(path.parse().unwrap(), dist.path().join("index.html")).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_text(response).await, "<div id=\"main\"></div>");
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_with_index() {
        let dist = dist_with_index();
        let response = spa_fallback(
            "/admissions/2025".parse().unwrap(),
            dist.path().join("index.html"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "<div id=\"main\"></div>");
    }

    #[tokio::test]
    async fn test_unknown_api_is_json_404() {
        let dist = dist_with_index();
        let response =
            spa_fallback("/api/messages".parse().unwrap(), dist.path().join("index.html")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("not found"));
    }

    #[tokio::test]
    async fn test_missing_build_serves_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let response = spa_fallback("/chatbot".parse().unwrap(), dir.path().join("index.html")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("has not been built"));
    }
}
