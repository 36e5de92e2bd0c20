//! Web server — Axum router + shared state.

pub mod api;
pub mod pages;

use std::path::PathBuf;
use std::sync::Arc;

use axum::handler::HandlerWithoutStateExt;
use axum::http::Uri;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use mu_chat_core::config::Config;
use mu_chat_core::site::SiteInfo;

/// Shared application state — immutable after startup.
pub struct AppState {
    pub config: Config,
    pub site: SiteInfo,
    pub frontend_dist: PathBuf,
}

pub fn router(state: Arc<AppState>) -> Router {
    let index_html = state.frontend_dist.join("index.html");
    let fallback = move |uri: Uri| pages::spa_fallback(uri, index_html.clone());

    let app = Router::new()
        .merge(api::routes())
        .with_state(state.clone());

    // Static assets first, then client-side routes / not found
    let app = if state.frontend_dist.is_dir() {
        app.fallback_service(
            ServeDir::new(&state.frontend_dist).not_found_service(fallback.into_service()),
        )
    } else {
        app.fallback(fallback)
    };

    // Layers go last so the fallback is wrapped too
    app.layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn state(frontend_dist: PathBuf) -> Arc<AppState> {
        Arc::new(AppState {
            config: Config::default(),
            site: SiteInfo::default(),
            frontend_dist,
        })
    }

    #[tokio::test]
    async fn test_fallback_is_cors_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>mu</html>").unwrap();
        let app = router(state(dir.path().to_path_buf()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/no-such-page")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn test_missing_dist_fallback_is_cors_wrapped() {
        let app = router(state(PathBuf::from("/nonexistent/mu-chat-dist")));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/chatbot")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
