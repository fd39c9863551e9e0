//! Page registry entries.

use serde::Deserialize;

use crate::ConfigError;

/// What a page shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Reference page built from a sections file.
    #[default]
    Topic,
    /// Career goals cards built from a goals file.
    Goals,
}

/// One `[[pages]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageConfig {
    /// URL path, starting with `/`.
    pub path: String,
    /// Link text in the top navigation.
    pub label: String,
    /// Page title; defaults to the label.
    #[serde(default)]
    pub title: Option<String>,
    /// Page description.
    #[serde(default)]
    pub description: String,
    /// Page kind.
    #[serde(default)]
    pub kind: PageKind,
    /// Content file, relative to the content directory.
    pub content: String,
}

impl PageConfig {
    fn new(path: &str, label: &str, description: &str, kind: PageKind, content: &str) -> Self {
        Self {
            path: path.to_owned(),
            label: label.to_owned(),
            title: None,
            description: description.to_owned(),
            kind,
            content: content.to_owned(),
        }
    }

    /// Title shown in the aside header and the document `<title>`.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.label)
    }

    pub(crate) fn validate(&self, position: usize) -> Result<(), ConfigError> {
        let field = |name: &str| format!("pages[{position}].{name}");
        crate::require_non_empty(&self.label, &field("label"))?;
        crate::require_non_empty(&self.content, &field("content"))?;
        if !self.path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "{} must start with /",
                field("path")
            )));
        }
        if self.path.len() > 1 && self.path.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "{} must not end with /",
                field("path")
            )));
        }
        Ok(())
    }
}

/// Pages served when the config file has no `[[pages]]` entries.
pub(crate) fn default_pages() -> Vec<PageConfig> {
    vec![
        PageConfig::new("/", "Career Goals", "", PageKind::Goals, "goals.json"),
        PageConfig::new(
            "/fundamentals",
            "Fundamentals of Frontend Development",
            "Content...",
            PageKind::Topic,
            "fundamentals.json",
        ),
        PageConfig::new(
            "/javascript-fundamentals",
            "JavaScript Fundamentals",
            "JavaScript Fundamentals encompasses the core concepts and features of JavaScript, a leading programming language in web development.",
            PageKind::Topic,
            "javascript-fundamentals.json",
        ),
        PageConfig::new(
            "/react-fundamentals",
            "React Fundamentals",
            "",
            PageKind::Topic,
            "react-fundamentals.json",
        ),
        PageConfig::new(
            "/typescript-fundamentals",
            "TypeScript Fundamentals",
            "",
            PageKind::Topic,
            "typescript-fundamentals.json",
        ),
        PageConfig::new(
            "/node-fundamentals",
            "Node Fundamentals",
            "Node.js is a powerful, open-source, server-side runtime environment built on Chrome's V8 JavaScript engine. It enables developers to build scalable and efficient network applications using JavaScript.",
            PageKind::Topic,
            "node-fundamentals.json",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_pages_mirror_routes() {
        let paths: Vec<String> = default_pages().into_iter().map(|p| p.path).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/fundamentals",
                "/javascript-fundamentals",
                "/react-fundamentals",
                "/typescript-fundamentals",
                "/node-fundamentals",
            ]
        );
    }

    #[test]
    fn test_title_defaults_to_label() {
        let mut page = PageConfig::new("/a", "Label", "", PageKind::Topic, "a.json");
        assert_eq!(page.title(), "Label");
        page.title = Some("Custom".to_owned());
        assert_eq!(page.title(), "Custom");
    }

    #[test]
    fn test_validate_path() {
        let page = |path: &str| PageConfig::new(path, "x", "", PageKind::Topic, "x.json");
        assert!(page("/").validate(0).is_ok());
        assert!(page("/ok").validate(0).is_ok());

        let err = page("relative").validate(2).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: pages[2].path must start with /");
        assert!(page("/trailing/").validate(0).is_err());
    }

    #[test]
    fn test_validate_empty_fields() {
        let err = PageConfig::new("/a", "", "", PageKind::Topic, "a.json")
            .validate(0)
            .unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: pages[0].label cannot be empty");

        assert!(
            PageConfig::new("/a", "A", "", PageKind::Topic, "")
                .validate(0)
                .is_err()
        );
    }

    #[test]
    fn test_parse_kind() {
        let page: PageConfig = toml::from_str(
            r#"
path = "/"
label = "Goals"
kind = "goals"
content = "goals.yaml"
"#,
        )
        .unwrap();
        assert_eq!(page.kind, PageKind::Goals);
        assert_eq!(page.description, "");
    }
}
