//! Page endpoints.
//!
//! Serves the rendered HTML documents and the JSON page summary.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use md5::{Digest, Md5};
use roadmap_site::SectionSummary;
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/pages/{page}.
#[derive(Serialize)]
pub(crate) struct PageResponse {
    /// Page title.
    title: String,
    /// Page description.
    description: String,
    /// Sections with their hidden state.
    sections: Vec<SectionSummary>,
}

/// Handle GET /.
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    render_html("/", &state, &headers)
}

/// Handle GET /{page}.
pub(crate) async fn get_page(
    Path(page): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    render_html(&format!("/{page}"), &state, &headers)
}

/// Handle GET /api/pages/{page}.
pub(crate) async fn get_page_summary(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageResponse>, ServerError> {
    let page = state
        .page_by_slug(&slug)
        .ok_or_else(|| ServerError::PageNotFound(slug.clone()))?;
    let store = state
        .store(&page.info.path)
        .ok_or_else(|| ServerError::PageNotFound(page.info.path.clone()))?;
    let sections = state.site.sections(&page.info.path, store)?;

    Ok(Json(PageResponse {
        title: page.info.title.clone(),
        description: page.info.description.clone(),
        sections,
    }))
}

fn render_html(path: &str, state: &AppState, headers: &HeaderMap) -> Result<Response, ServerError> {
    let page = state
        .site
        .page(path)
        .ok_or_else(|| ServerError::PageNotFound(path.to_owned()))?;
    let store = state
        .store(&page.info.path)
        .ok_or_else(|| ServerError::PageNotFound(path.to_owned()))?;
    let rendered = state.site.render(&page.info.path, store)?;

    let etag = compute_etag(&state.version, &rendered.html);
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "no-cache".to_owned()),
        ],
        Html(rendered.html),
    )
        .into_response())
}

/// Compute `ETag` from version and content.
///
/// MD5 truncated to 64 bits (16 hex chars). Hidden-section state is part of
/// the rendered HTML, so toggling changes the tag.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_etag_includes_version() {
        assert_ne!(compute_etag("1.0.0", "content"), compute_etag("1.0.1", "content"));
    }

    #[test]
    fn test_compute_etag_includes_content() {
        assert_ne!(compute_etag("1.0.0", "a"), compute_etag("1.0.0", "b"));
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        assert_eq!(etag.len(), 18);
    }

    #[test]
    fn test_page_response_serialization() {
        let response = PageResponse {
            title: "Node Fundamentals".to_owned(),
            description: String::new(),
            sections: vec![SectionSummary {
                index: 0,
                title: "Event Loop".to_owned(),
                hidden: true,
            }],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["title"], "Node Fundamentals");
        assert_eq!(json["sections"][0]["index"], 0);
        assert_eq!(json["sections"][0]["title"], "Event Loop");
        assert_eq!(json["sections"][0]["hidden"], true);
    }
}
