//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roadmap_site::SiteError;
use roadmap_storage::StorageError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No page at the given path.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Section index past the end of the page.
    #[error("Section {index} not found on {path}")]
    SectionNotFound {
        /// Page path.
        path: String,
        /// Requested index.
        index: usize,
    },

    /// Reader state could not be persisted.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Content failed to load.
    #[error("Site error: {0}")]
    Site(SiteError),
}

impl From<SiteError> for ServerError {
    fn from(e: SiteError) -> Self {
        match e {
            SiteError::PageNotFound(path) => Self::PageNotFound(path),
            SiteError::SectionOutOfRange { path, index, .. } => {
                Self::SectionNotFound { path, index }
            }
            SiteError::Storage(e) => Self::Storage(e),
            other @ SiteError::Content(_) => Self::Site(other),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path}),
            ),
            Self::SectionNotFound { path, index } => (
                StatusCode::NOT_FOUND,
                json!({"error": "Section not found", "path": path, "index": index}),
            ),
            Self::Storage(e) => {
                tracing::error!(error = %e, "Failed to persist state");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
            Self::Site(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
