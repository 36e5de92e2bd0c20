//! REST API endpoints — read-only site content and chat settings.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use mu_chat_core::config::ChatProfile;
use mu_chat_core::site::SiteInfo;

use super::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/site", get(get_site))
        .route("/api/chat/{profile}", get(get_chat_settings))
}

// --- Site content ---

async fn get_site(State(state): State<Arc<AppState>>) -> Json<SiteInfo> {
    Json(state.site.clone())
}

// --- Chat settings per surface ---

async fn get_chat_settings(
    State(state): State<Arc<AppState>>,
    Path(profile): Path<String>,
) -> (StatusCode, Json<Value>) {
    match profile.parse::<ChatProfile>() {
        Ok(profile) => (StatusCode::OK, Json(json!(state.config.settings(profile)))),
        Err(e) => (StatusCode::NOT_FOUND, Json(json!({"error": e}))),
    }
}
