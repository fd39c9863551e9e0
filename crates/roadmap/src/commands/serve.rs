//! `roadmap serve` command implementation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use roadmap_config::{CliSettings, Config};
use roadmap_server::{run_server, server_config_from_config};
use roadmap_site::Site;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover roadmap.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(long, env = "ROADMAP_CONTENT_DIR")]
    content_dir: Option<PathBuf>,

    /// Directory for persisted reader state (overrides config).
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Browser bundle directory served under /assets (overrides config).
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request traces and content warnings).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content fails to load, or the
    /// server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            content_dir: self.content_dir,
            state_dir: self.state_dir,
            assets_dir: self.assets_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        ensure_state_dir(&config.content_resolved.state_dir)?;

        let site = Arc::new(Site::load(&config)?);

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Content directory: {}",
            config.content_resolved.dir.display()
        ));
        output.info(&format!(
            "State directory: {}",
            config.content_resolved.state_dir.display()
        ));
        output.info(&format!(
            "Assets directory: {}",
            config.content_resolved.assets_dir.display()
        ));
        output.info(&format!("Pages: {}", site.pages().len()));

        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config, site)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}

/// Ensure the state directory exists with a `.gitignore`.
fn ensure_state_dir(state_dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(state_dir)?;

    let gitignore_path = state_dir.join(".gitignore");
    if !gitignore_path.exists() {
        let _ = std::fs::write(&gitignore_path, "# Automatically created by roadmap\n*\n");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_state_dir_creates_gitignore() {
        let dir = tempfile::tempdir().unwrap();
        let state_dir = dir.path().join(".roadmap/state");

        ensure_state_dir(&state_dir).unwrap();

        let gitignore = std::fs::read_to_string(state_dir.join(".gitignore")).unwrap();
        assert!(gitignore.ends_with("*\n"));
    }

    #[test]
    fn test_ensure_state_dir_keeps_existing_gitignore() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".gitignore"), "custom\n").unwrap();

        ensure_state_dir(dir.path()).unwrap();

        let gitignore = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore, "custom\n");
    }
}
