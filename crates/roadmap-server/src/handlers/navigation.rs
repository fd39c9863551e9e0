//! Navigation API endpoint.
//!
//! Returns the top-level page links in configured order.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use roadmap_site::NavLink;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Page links.
    items: Vec<NavLink>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(State(state): State<Arc<AppState>>) -> Json<NavigationResponse> {
    let items = state.site.navigation();
    Json(NavigationResponse { items })
}
