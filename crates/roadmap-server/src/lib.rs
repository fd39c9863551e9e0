//! HTTP server for the roadmap site.
//!
//! Serves the rendered pages plus a small JSON API for navigation, page
//! summaries and the per-section "understood" toggle.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use roadmap_config::Config;
//! use roadmap_server::{run_server, server_config_from_config};
//! use roadmap_site::Site;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None, None)?;
//!     let site = Arc::new(Site::load(&config)?);
//!     run_server(server_config_from_config(&config, "1.0.0".to_owned()), site).await
//! }
//! ```
//!
//! # Routes
//!
//! ```text
//! GET  /                                          career goals page
//! GET  /{page}                                    topic page
//! GET  /assets/*                                  browser bundle (assets_dir)
//! GET  /api/navigation                            { items: [{ label, path }] }
//! GET  /api/pages/{page}                          { title, description, sections }
//! POST /api/pages/{page}/sections/{index}/toggle  { index, hidden }
//! ```
//!
//! API `{page}` slugs are page paths without the leading slash; the root page
//! is `index`.

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use roadmap_site::Site;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory for persisted reader state.
    pub state_dir: PathBuf,
    /// Directory served under `/assets`.
    pub assets_dir: PathBuf,
    /// Application version (part of page `ETag`s).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            state_dir: PathBuf::from(".roadmap/state"),
            assets_dir: PathBuf::from("assets"),
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener fails.
pub async fn run_server(
    config: ServerConfig,
    site: Arc<Site>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::with_fs_stores(
        site,
        &config.state_dir,
        config.version.clone(),
    ));
    let app = app::create_router(state, &config.assets_dir);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, state_dir = %config.state_dir.display(), "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the site config.
#[must_use]
pub fn server_config_from_config(config: &roadmap_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        state_dir: config.content_resolved.state_dir.clone(),
        assets_dir: config.content_resolved.assets_dir.clone(),
        version,
    }
}
