//! CLI error types.

use roadmap_config::ConfigError;
use roadmap_site::SiteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Server(String),
}
