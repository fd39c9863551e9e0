//! Configuration management for the roadmap site.
//!
//! Parses `roadmap.toml` with serde and discovers it in the current directory
//! or its parents. CLI settings are applied on top via [`CliSettings`].
//!
//! ```toml
//! [server]
//! host = "${ROADMAP_HOST:-127.0.0.1}"
//! port = 3000
//!
//! [content]
//! dir = "content"
//! state_dir = ".roadmap/state"
//! assets_dir = "assets"
//!
//! [[pages]]
//! path = "/node-fundamentals"
//! label = "Node Fundamentals"
//! content = "node-fundamentals.json"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` expands to the value of VAR, errors if unset
//! - `${VAR:-default}` expands to VAR if set, otherwise uses default
//!
//! Expanded fields: `server.host`, `content.dir`, `content.state_dir`,
//! `content.assets_dir`.

mod expand;
mod page;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use page::{PageConfig, PageKind};

/// CLI settings that override configuration file values.
///
/// Only `Some` fields override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override content directory.
    pub content_dir: Option<PathBuf>,
    /// Override state directory.
    pub state_dir: Option<PathBuf>,
    /// Override browser assets directory.
    pub assets_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "roadmap.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Pages in navigation order.
    pub pages: Vec<PageConfig>,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    dir: Option<String>,
    state_dir: Option<String>,
    assets_dir: Option<String>,
}

/// Resolved content locations.
#[derive(Debug, Default, Clone)]
pub struct ContentConfig {
    /// Directory holding the page content files.
    pub dir: PathBuf,
    /// Directory holding persisted reader state.
    pub state_dir: PathBuf,
    /// Directory served under `/assets` (the wasm-bindgen output and its
    /// `roadmap.js` loader).
    pub assets_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g. `server.host`).
        field: String,
        /// Error message (e.g. `${ROADMAP_HOST} not set`).
        message: String,
    },
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `roadmap.toml` in the current directory and its parents, falling
    /// back to defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, or if
    /// parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Absolute path of a page's content file.
    #[must_use]
    pub fn content_path(&self, page: &PageConfig) -> PathBuf {
        self.content_resolved.dir.join(&page.content)
    }

    /// Look up a page by URL path.
    #[must_use]
    pub fn page(&self, path: &str) -> Option<&PageConfig> {
        self.pages.iter().find(|p| p.path == path)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(dir) = &settings.content_dir {
            self.content_resolved.dir.clone_from(dir);
        }
        if let Some(dir) = &settings.state_dir {
            self.content_resolved.state_dir.clone_from(dir);
        }
        if let Some(dir) = &settings.assets_dir {
            self.content_resolved.assets_dir.clone_from(dir);
        }
    }

    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            content: ContentConfigRaw::default(),
            pages: page::default_pages(),
            content_resolved: ContentConfig {
                dir: base.join("content"),
                state_dir: base.join(".roadmap").join("state"),
                assets_dir: base.join("assets"),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&text)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any check fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_pages()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_pages(&self) -> Result<(), ConfigError> {
        if self.pages.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[pages]] entry is required".to_owned(),
            ));
        }

        let mut seen = HashSet::new();
        let mut namespaces = HashMap::new();
        for (position, page) in self.pages.iter().enumerate() {
            page.validate(position)?;
            if !seen.insert(page.path.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate page path {}",
                    page.path
                )));
            }
            // Page state is stored per namespace, so two paths must not share one.
            let namespace = roadmap_storage::page_namespace(&page.path);
            if let Some(other) = namespaces.get(&namespace) {
                return Err(ConfigError::Validation(format!(
                    "pages {other} and {} share state namespace {namespace}",
                    page.path
                )));
            }
            namespaces.insert(namespace, page.path.as_str());
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        if let Some(dir) = &self.content.dir {
            self.content.dir = Some(expand::expand_env(dir, "content.dir")?);
        }
        if let Some(dir) = &self.content.state_dir {
            self.content.state_dir = Some(expand::expand_env(dir, "content.state_dir")?);
        }
        if let Some(dir) = &self.content.assets_dir {
            self.content.assets_dir = Some(expand::expand_env(dir, "content.assets_dir")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.content_resolved = ContentConfig {
            dir: config_dir.join(self.content.dir.as_deref().unwrap_or("content")),
            state_dir: self
                .content
                .state_dir
                .as_deref()
                .map_or_else(|| config_dir.join(".roadmap").join("state"), |d| config_dir.join(d)),
            assets_dir: config_dir.join(self.content.assets_dir.as_deref().unwrap_or("assets")),
        };
    }
}
