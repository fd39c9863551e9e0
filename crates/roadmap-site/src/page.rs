//! Page definitions and loaded page content.

use std::path::PathBuf;

use roadmap_config::{Config, PageConfig};
use roadmap_content::{ContentError, Goal, Section, load_goals, load_sections};
use roadmap_storage::page_namespace;

/// Where a page's content comes from and how it is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    /// Sections file rendered with side navigation.
    Topic {
        /// Content file path.
        content: PathBuf,
    },
    /// Goals file rendered as cards.
    Goals {
        /// Content file path.
        content: PathBuf,
    },
}

impl PageKind {
    /// Content file path.
    #[must_use]
    pub fn content(&self) -> &PathBuf {
        match self {
            Self::Topic { content } | Self::Goals { content } => content,
        }
    }
}

/// One routable page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// URL path.
    pub path: String,
    /// Top navigation label.
    pub label: String,
    /// Page title.
    pub title: String,
    /// Page description.
    pub description: String,
    /// Content source.
    pub kind: PageKind,
}

impl PageInfo {
    /// Build from a `[[pages]]` entry, resolving the content path.
    #[must_use]
    pub fn from_config(config: &Config, page: &PageConfig) -> Self {
        let content = config.content_path(page);
        let kind = match page.kind {
            roadmap_config::PageKind::Topic => PageKind::Topic { content },
            roadmap_config::PageKind::Goals => PageKind::Goals { content },
        };
        Self {
            path: page.path.clone(),
            label: page.label.clone(),
            title: page.title().to_owned(),
            description: page.description.clone(),
            kind,
        }
    }

    /// Storage namespace for this page's reader state.
    #[must_use]
    pub fn namespace(&self) -> String {
        page_namespace(&self.path)
    }
}

/// Loaded page body.
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    /// Topic sections.
    Sections(Vec<Section>),
    /// Career goals.
    Goals(Vec<Goal>),
}

/// A page with its content loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Definition.
    pub info: PageInfo,
    /// Body.
    pub content: PageContent,
}

impl Page {
    /// Read the page's content file.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the file can't be read or parsed.
    pub fn load(info: PageInfo) -> Result<Self, ContentError> {
        let content = match &info.kind {
            PageKind::Topic { content } => PageContent::Sections(load_sections(content)?),
            PageKind::Goals { content } => PageContent::Goals(load_goals(content)?),
        };
        Ok(Self { info, content })
    }

    /// Sections of a topic page; empty for goal pages.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        match &self.content {
            PageContent::Sections(sections) => sections,
            PageContent::Goals(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_config_resolves_content() {
        let config = Config::default();
        let info = PageInfo::from_config(&config, &config.pages[0]);

        assert_eq!(info.path, "/");
        assert_eq!(info.title, "Career Goals");
        assert!(matches!(info.kind, PageKind::Goals { .. }));
        assert!(info.kind.content().ends_with("goals.json"));
        assert_eq!(info.namespace(), "index");
    }

    #[test]
    fn test_load_topic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("node.json");
        std::fs::write(&path, r#"[{"title": "Event Loop", "description": "", "blocks": []}]"#)
            .unwrap();
        let info = PageInfo {
            path: "/node".to_owned(),
            label: "Node".to_owned(),
            title: "Node".to_owned(),
            description: String::new(),
            kind: PageKind::Topic { content: path },
        };

        let page = Page::load(info).unwrap();

        assert_eq!(page.sections().len(), 1);
        assert_eq!(page.sections()[0].title, "Event Loop");
    }

    #[test]
    fn test_load_missing_file() {
        let info = PageInfo {
            path: "/x".to_owned(),
            label: "X".to_owned(),
            title: "X".to_owned(),
            description: String::new(),
            kind: PageKind::Goals {
                content: PathBuf::from("/nonexistent/goals.json"),
            },
        };

        assert!(matches!(Page::load(info), Err(ContentError::Io { .. })));
    }
}
