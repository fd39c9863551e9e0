//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::http::Uri;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router, serving the browser bundle from
/// `assets_dir`.
pub(crate) fn create_router(state: Arc<AppState>, assets_dir: &Path) -> Router {
    let api_routes = Router::new()
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/pages/{page}", get(handlers::pages::get_page_summary))
        .route(
            "/api/pages/{page}/sections/{index}/toggle",
            post(handlers::sections::toggle_section),
        );

    let page_routes = Router::new()
        .route("/", get(handlers::pages::get_root_page))
        .route("/{page}", get(handlers::pages::get_page));

    Router::new()
        .merge(api_routes)
        .merge(page_routes)
        .merge(static_files::static_router(assets_dir))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

async fn not_found(uri: Uri) -> ServerError {
    ServerError::PageNotFound(uri.path().to_owned())
}
