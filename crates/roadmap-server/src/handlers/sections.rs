//! Section toggle endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for POST /api/pages/{page}/sections/{index}/toggle.
#[derive(Serialize)]
pub(crate) struct ToggleResponse {
    /// Section index.
    index: usize,
    /// New hidden state.
    hidden: bool,
}

/// Handle POST /api/pages/{page}/sections/{index}/toggle.
pub(crate) async fn toggle_section(
    Path((slug, index)): Path<(String, usize)>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ToggleResponse>, ServerError> {
    let page = state
        .page_by_slug(&slug)
        .ok_or_else(|| ServerError::PageNotFound(slug.clone()))?;
    let store = state
        .store(&page.info.path)
        .ok_or_else(|| ServerError::PageNotFound(page.info.path.clone()))?;

    let hidden = state.site.toggle_section(&page.info.path, index, store)?;

    Ok(Json(ToggleResponse { index, hidden }))
}
