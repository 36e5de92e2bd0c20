//! HTTP fetch calls to the static server's read-only API.

use gloo_net::http::Request;

use mu_chat_core::config::{ChatProfile, ChatSettings};
use mu_chat_core::site::SiteInfo;

pub async fn fetch_site() -> Result<SiteInfo, String> {
    let resp = Request::get("/api/site")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("GET /api/site: {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn fetch_chat_settings(profile: ChatProfile) -> Result<ChatSettings, String> {
    let url = format!("/api/chat/{}", profile.as_str());
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("GET {}: {}", url, resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}
