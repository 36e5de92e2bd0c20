//! mu-chat-web — Axum static-site server entry point.
//! Serves the WASM frontend plus read-only site/chat configuration.

mod server;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use mu_chat_core::config::Config;
use mu_chat_core::site::SiteInfo;

use server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match Config::load_from_dir(&project_root) {
        Ok(config) => config,
        Err(e) => {
            warn!("Using default config: {:#}", e);
            Config {
                project_root: project_root.clone(),
                ..Config::default()
            }
        }
    };

    let frontend_dist = config.resolve_frontend_dist();
    if !frontend_dist.is_dir() {
        warn!(
            "Frontend not built at {}; pages will be placeholders",
            frontend_dist.display()
        );
    }

    let port = config.port;
    let state = Arc::new(AppState {
        site: SiteInfo::new(&config.university_name),
        config,
        frontend_dist,
    });
    let app = server::router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    eprintln!("\n  Open http://localhost:{} to visit the site\n", port);

    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            warn!("Ctrl+C handler unavailable; running until killed");
            std::future::pending::<()>().await;
        }
        info!("Shutdown signal received");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    info!("Server stopped.");
    Ok(())
}
