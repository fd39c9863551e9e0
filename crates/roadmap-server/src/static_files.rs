//! Static file serving.
//!
//! Serves the browser bundle (`roadmap.js` plus the wasm-bindgen output)
//! under `/assets`.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// URL prefix the document shell loads its script from.
pub(crate) const ASSETS_PREFIX: &str = "/assets";

/// Create router for static file serving.
///
/// Pages still render when `assets_dir` is missing; they just lose the
/// browser behavior.
pub(crate) fn static_router(assets_dir: &Path) -> Router<Arc<AppState>> {
    let mut router = Router::new();

    if assets_dir.exists() {
        router = router.nest_service(ASSETS_PREFIX, ServeDir::new(assets_dir));
    } else {
        tracing::warn!(
            dir = %assets_dir.display(),
            "Assets directory not found, serving pages without the browser bundle"
        );
    }

    router
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_router_without_dir() {
        let _router: Router<Arc<AppState>> = static_router(Path::new("/nonexistent/assets"));
    }
}
