//! Site registry and page rendering.

use roadmap_config::Config;
use roadmap_content::ContentError;
use roadmap_navigation::{AnchorRegistry, SideNavigation};
use roadmap_renderer::{ContentRenderer, escape_html, render_aside, render_goals};
use roadmap_storage::{HiddenSections, KeyValueStore, StorageError};
use serde::Serialize;

use crate::document::render_document;
use crate::page::{Page, PageContent, PageInfo};

/// Site error.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No page is registered under the path.
    #[error("Page not found: {0}")]
    PageNotFound(String),
    /// Section index past the end of the page.
    #[error("Section {index} out of range for {path} ({len} sections)")]
    SectionOutOfRange {
        /// Page path.
        path: String,
        /// Requested index.
        index: usize,
        /// Number of sections on the page.
        len: usize,
    },
    /// Content file could not be loaded.
    #[error(transparent)]
    Content(#[from] ContentError),
    /// Reader state could not be written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A top navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Link text.
    pub label: String,
    /// URL path.
    pub path: String,
    /// Whether this is the current page.
    #[serde(skip)]
    pub active: bool,
}

/// Per-section summary returned alongside a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    /// Section index.
    pub index: usize,
    /// Section title.
    pub title: String,
    /// Whether the reader marked it understood.
    pub hidden: bool,
}

/// Result of [`Site::render`].
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Full HTML document.
    pub html: String,
    /// Page title.
    pub title: String,
    /// Sections in order; empty for goal pages.
    pub sections: Vec<SectionSummary>,
}

/// Ordered page registry.
///
/// Immutable after loading; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct Site {
    pages: Vec<Page>,
}

impl Site {
    /// Load every configured page's content.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Content`] for the first page whose content file
    /// can't be read or parsed.
    pub fn load(config: &Config) -> Result<Self, SiteError> {
        let pages = config
            .pages
            .iter()
            .map(|page| {
                let info = PageInfo::from_config(config, page);
                let loaded = Page::load(info)?;
                tracing::debug!(
                    path = %loaded.info.path,
                    sections = loaded.sections().len(),
                    "Loaded page"
                );
                Ok(loaded)
            })
            .collect::<Result<Vec<_>, SiteError>>()?;

        tracing::info!(pages = pages.len(), "Site loaded");
        Ok(Self { pages })
    }

    /// Build from already loaded pages.
    #[must_use]
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Pages in navigation order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Look up a page by URL path. A trailing slash is ignored.
    #[must_use]
    pub fn page(&self, path: &str) -> Option<&Page> {
        let path = normalize(path);
        self.pages.iter().find(|p| p.info.path == path)
    }

    /// Top-level links in configured order, none active.
    #[must_use]
    pub fn navigation(&self) -> Vec<NavLink> {
        self.navigation_for("")
    }

    fn navigation_for(&self, current: &str) -> Vec<NavLink> {
        self.pages
            .iter()
            .map(|p| NavLink {
                label: p.info.label.clone(),
                path: p.info.path.clone(),
                active: p.info.path == current,
            })
            .collect()
    }

    /// Section summaries for `path` with hidden state read from `store`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::PageNotFound`] for unknown paths.
    pub fn sections(
        &self,
        path: &str,
        store: &dyn KeyValueStore,
    ) -> Result<Vec<SectionSummary>, SiteError> {
        let page = self.require_page(path)?;
        let hidden = HiddenSections::load(store);
        Ok(summaries(page, &hidden))
    }

    /// Render the full HTML document for `path`.
    ///
    /// `store` holds this page's hidden-sections state.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::PageNotFound`] for unknown paths.
    pub fn render(&self, path: &str, store: &dyn KeyValueStore) -> Result<RenderedPage, SiteError> {
        let page = self.require_page(path)?;
        let hidden = HiddenSections::load(store);

        let body = match &page.content {
            PageContent::Sections(sections) => {
                let anchors = AnchorRegistry::new();
                let content = ContentRenderer::new(anchors.clone()).render(sections, &hidden);
                let entries = SideNavigation::new(anchors).entries(sections);

                let mut body = String::with_capacity(content.len() + 1024);
                body.push_str(r#"<section class="flex flex-col w-full"><div class="w-full grid grid-cols-main gap-10 relative">"#);
                render_aside(&page.info.title, &entries, &mut body);
                body.push_str(&content);
                body.push_str("</div></section>");
                body
            }
            PageContent::Goals(goals) => {
                let mut body = String::new();
                body.push_str(r#"<div class="career-goals">"#);
                if !page.info.description.is_empty() {
                    body.push_str(r#"<p class="text-white/50 text-sm mb-4">"#);
                    body.push_str(&escape_html(&page.info.description));
                    body.push_str("</p>");
                }
                render_goals(goals, &mut body);
                body.push_str("</div>");
                body
            }
        };

        let links = self.navigation_for(&page.info.path);
        let html = render_document(&page.info.title, &page.info.path, &links, &body);
        tracing::debug!(path = %page.info.path, bytes = html.len(), "Rendered page");

        Ok(RenderedPage {
            html,
            title: page.info.title.clone(),
            sections: summaries(page, &hidden),
        })
    }

    /// Flip the hidden state of section `index` on `path` and persist it.
    /// Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::PageNotFound`] for unknown paths,
    /// [`SiteError::SectionOutOfRange`] for indices past the last section and
    /// [`SiteError::Storage`] if the store rejects the write.
    pub fn toggle_section(
        &self,
        path: &str,
        index: usize,
        store: &dyn KeyValueStore,
    ) -> Result<bool, SiteError> {
        let page = self.require_page(path)?;
        let len = page.sections().len();
        if index >= len {
            return Err(SiteError::SectionOutOfRange {
                path: page.info.path.clone(),
                index,
                len,
            });
        }
        Ok(HiddenSections::toggle_and_save(store, index)?)
    }

    fn require_page(&self, path: &str) -> Result<&Page, SiteError> {
        self.page(path)
            .ok_or_else(|| SiteError::PageNotFound(path.to_owned()))
    }
}

fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

fn summaries(page: &Page, hidden: &HiddenSections) -> Vec<SectionSummary> {
    page.sections()
        .iter()
        .enumerate()
        .map(|(index, section)| SectionSummary {
            index,
            title: section.title.clone(),
            hidden: hidden.is_hidden(index),
        })
        .collect()
}
