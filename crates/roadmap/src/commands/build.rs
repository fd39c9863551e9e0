//! `roadmap build` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use roadmap_config::{CliSettings, Config};
use roadmap_site::Site;
use roadmap_storage::{FsStore, KeyValueStore, MemoryStore};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the generated pages.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Content directory (overrides config).
    #[arg(long, env = "ROADMAP_CONTENT_DIR")]
    content_dir: Option<PathBuf>,

    /// Browser bundle directory copied to `{output_dir}/assets` (overrides
    /// config).
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Bake the server's persisted section state into the pages instead of
    /// rendering every section visible.
    #[arg(long)]
    with_state: bool,

    /// Path to configuration file (default: auto-discover roadmap.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content fails to load, or a page
    /// can't be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            assets_dir: self.assets_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Content: {}",
            config.content_resolved.dir.display()
        ));
        output.info(&format!("Output: {}", self.output_dir.display()));

        let site = Site::load(&config)?;
        let state_dir = self
            .with_state
            .then_some(config.content_resolved.state_dir.as_path());
        let written = write_site(&site, &self.output_dir, state_dir)?;

        let assets_dir = &config.content_resolved.assets_dir;
        if assets_dir.is_dir() {
            let copied = copy_assets(assets_dir, &self.output_dir.join("assets"))?;
            output.info(&format!("Copied {copied} asset files"));
        } else {
            output.warning(&format!(
                "Assets directory {} not found, pages will load without the browser bundle",
                assets_dir.display()
            ));
        }

        output.success(&format!("Built {} pages", written.len()));
        Ok(())
    }
}

/// Render every page to `{output_dir}{path}/index.html`.
///
/// With `state_dir`, hidden sections come from the server's state files;
/// otherwise every section renders visible.
fn write_site(
    site: &Site,
    output_dir: &Path,
    state_dir: Option<&Path>,
) -> Result<Vec<PathBuf>, CliError> {
    let mut written = Vec::with_capacity(site.pages().len());
    for page in site.pages() {
        let store: Box<dyn KeyValueStore> = match state_dir {
            Some(dir) => Box::new(FsStore::in_dir(dir, &page.info.namespace())),
            None => Box::new(MemoryStore::new()),
        };
        let rendered = site.render(&page.info.path, store.as_ref())?;

        let target = page_output_path(output_dir, &page.info.path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, rendered.html)?;
        tracing::info!(path = %page.info.path, file = %target.display(), "Wrote page");
        written.push(target);
    }
    Ok(written)
}

/// Copy the browser bundle directory tree. Returns the number of files copied.
fn copy_assets(from: &Path, to: &Path) -> Result<usize, CliError> {
    std::fs::create_dir_all(to)?;
    let mut copied = 0;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += copy_assets(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn page_output_path(output_dir: &Path, page_path: &str) -> PathBuf {
    let mut target = output_dir.to_path_buf();
    for segment in page_path.split('/').filter(|s| !s.is_empty()) {
        target.push(segment);
    }
    target.join("index.html")
}

#[cfg(test)]
mod tests {
    use roadmap_content::{Block, Section};
    use roadmap_site::{Page, PageContent, PageInfo, PageKind};
    use roadmap_storage::HiddenSections;

    use super::*;
    use pretty_assertions::assert_eq;

    fn topic(path: &str, sections: Vec<Section>) -> Page {
        Page {
            info: PageInfo {
                path: path.to_owned(),
                label: path.to_owned(),
                title: path.to_owned(),
                description: String::new(),
                kind: PageKind::Topic {
                    content: PathBuf::from("unused.json"),
                },
            },
            content: PageContent::Sections(sections),
        }
    }

    fn section(title: &str) -> Section {
        Section {
            title: title.to_owned(),
            blocks: vec![Block {
                title: format!("{title} block"),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_page_output_path() {
        let out = Path::new("/out");

        assert_eq!(page_output_path(out, "/"), PathBuf::from("/out/index.html"));
        assert_eq!(
            page_output_path(out, "/node-fundamentals"),
            PathBuf::from("/out/node-fundamentals/index.html")
        );
    }

    #[test]
    fn test_write_site_writes_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::from_pages(vec![
            topic("/", vec![section("Intro")]),
            topic("/node", vec![section("Event Loop")]),
        ]);

        let written = write_site(&site, dir.path(), None).unwrap();

        assert_eq!(written.len(), 2);
        let node = std::fs::read_to_string(dir.path().join("node/index.html")).unwrap();
        assert!(node.contains("Event Loop"));
        assert!(node.contains(r#"data-page="/node""#));
    }

    #[test]
    fn test_copy_assets_keeps_tree() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        std::fs::create_dir_all(assets.join("snippets")).unwrap();
        std::fs::write(assets.join("roadmap.js"), "mount();").unwrap();
        std::fs::write(assets.join("snippets").join("helper.js"), "").unwrap();

        let out = dir.path().join("out").join("assets");
        let copied = copy_assets(&assets, &out).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(
            std::fs::read_to_string(out.join("roadmap.js")).unwrap(),
            "mount();"
        );
        assert!(out.join("snippets").join("helper.js").exists());
    }

    #[test]
    fn test_write_site_with_state_hides_sections() {
        let dir = tempfile::tempdir().unwrap();
        let state = dir.path().join("state");
        HiddenSections::toggle_and_save(&FsStore::in_dir(&state, "node"), 0).unwrap();
        let site = Site::from_pages(vec![topic("/node", vec![section("Event Loop")])]);

        write_site(&site, &dir.path().join("out"), Some(&state)).unwrap();
        let html = std::fs::read_to_string(dir.path().join("out/node/index.html")).unwrap();

        assert!(html.contains("Understood"));
        assert!(!html.contains("Event Loop block"));
    }
}
