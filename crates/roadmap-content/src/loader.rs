//! Content file loading.
//!
//! Content files are JSON or YAML, selected by file extension. The loader is a
//! pure consumer: it deserializes and logs lint warnings, nothing more.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::goal::Goal;
use crate::schema::{Section, lint_sections};

/// Content loading error.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Content file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parse error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// File extension is neither JSON nor YAML.
    #[error("Unsupported content format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Serialization format of a content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl ContentFormat {
    /// Detect the format from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, ContentError> {
        Ok(match self {
            Self::Json => serde_json::from_str(text)?,
            Self::Yaml => serde_yaml::from_str(text)?,
        })
    }
}

/// Parse a section list from text.
///
/// # Errors
///
/// Returns `ContentError::Json` or `ContentError::Yaml` if the text does not
/// match the schema.
pub fn parse_sections(text: &str, format: ContentFormat) -> Result<Vec<Section>, ContentError> {
    format.parse(text)
}

/// Parse a goal list from text.
///
/// # Errors
///
/// Returns `ContentError::Json` or `ContentError::Yaml` if the text does not
/// match the schema.
pub fn parse_goals(text: &str, format: ContentFormat) -> Result<Vec<Goal>, ContentError> {
    format.parse(text)
}

/// Load a section list from a content file.
///
/// Entries with empty titles are logged as warnings and kept.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension or
/// does not match the schema.
pub fn load_sections(path: &Path) -> Result<Vec<Section>, ContentError> {
    let (text, format) = read(path)?;
    let sections = parse_sections(&text, format)?;

    for warning in lint_sections(&sections) {
        tracing::warn!(
            file = %path.display(),
            location = %warning.location,
            "{}",
            warning.message
        );
    }
    tracing::debug!(file = %path.display(), sections = sections.len(), "Loaded sections");

    Ok(sections)
}

/// Load a goal list from a content file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension or
/// does not match the schema.
pub fn load_goals(path: &Path) -> Result<Vec<Goal>, ContentError> {
    let (text, format) = read(path)?;
    let goals = parse_goals(&text, format)?;
    tracing::debug!(file = %path.display(), goals = goals.len(), "Loaded goals");
    Ok(goals)
}

fn read(path: &Path) -> Result<(String, ContentFormat), ContentError> {
    let format = ContentFormat::from_path(path)
        .ok_or_else(|| ContentError::UnsupportedFormat(path.to_path_buf()))?;
    let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((text, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Meta;
    use pretty_assertions::assert_eq;

    const SECTIONS_YAML: &str = r"
- title: Event Loop
  description: Handles asynchronous operations.
  blocks:
    - title: Code Signature
      meta: signature
      codeSample: console.log('Start');
    - title: Pros
      meta: positive
      subBlocks:
        - title: Efficient
          description: Non-blocking.
";

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ContentFormat::from_path(Path::new("a/b.json")),
            Some(ContentFormat::Json)
        );
        assert_eq!(
            ContentFormat::from_path(Path::new("b.yml")),
            Some(ContentFormat::Yaml)
        );
        assert_eq!(
            ContentFormat::from_path(Path::new("b.yaml")),
            Some(ContentFormat::Yaml)
        );
        assert_eq!(ContentFormat::from_path(Path::new("b.js")), None);
        assert_eq!(ContentFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_parse_sections_yaml() {
        let sections = parse_sections(SECTIONS_YAML, ContentFormat::Yaml).unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Event Loop");
        assert_eq!(sections[0].blocks[0].meta, Some(Meta::Signature));
        assert_eq!(
            sections[0].blocks[1].sub_blocks()[0].description.as_deref(),
            Some("Non-blocking.")
        );
    }

    #[test]
    fn test_load_sections_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("node.json");
        std::fs::write(
            &path,
            r#"[{ "title": "Streams", "description": "", "blocks": [] }]"#,
        )
        .unwrap();

        let sections = load_sections(&path).unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Streams");
        assert!(sections[0].blocks.is_empty());
    }

    #[test]
    fn test_load_goals_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("goals.yaml");
        std::fs::write(&path, "- goal: Books read\n  current: 3\n  target: 12\n").unwrap();

        let goals = load_goals(&path).unwrap();

        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].goal, "Books read");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_sections(Path::new("/nonexistent/content.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/content.json"));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let err = load_sections(Path::new("content.js")).unwrap_err();
        assert!(matches!(err, ContentError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_sections("{ not json", ContentFormat::Json).unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }
}
