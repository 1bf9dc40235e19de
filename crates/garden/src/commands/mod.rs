//! Command implementations for the garden CLI
//!
//! Each command module handles the CLI interface and delegates to
//! garden-core for actual implementation.

pub mod check;
pub mod resolve;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use garden_core::{MemoryStore, SiteConfig};

/// Site options shared by every command.
///
/// Flags override the configuration file, which overrides the defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct SiteArgs {
    /// Configuration file (default: `_garden.yml` next to the store or above)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Locale for generated labels
    #[arg(long)]
    pub locale: Option<String>,

    /// Also resolve placeholders inside transcluded content
    #[arg(long)]
    pub recursive: bool,
}

impl SiteArgs {
    /// Build the effective configuration for a store at `store_path`.
    pub fn site_config(&self, store_path: &Path) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => {
                let dir = match store_path.parent() {
                    Some(dir) if !dir.as_os_str().is_empty() => dir,
                    _ => Path::new("."),
                };
                let (found, config) = SiteConfig::discover(dir)
                    .with_context(|| format!("Failed to discover config from {}", dir.display()))?;
                if let Some(found) = found {
                    debug!(path = %found.display(), "Using configuration file");
                }
                config
            }
        };

        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if self.recursive {
            config.transclusion.recursive = true;
        }
        Ok(config)
    }
}

/// Load the JSON content index at `path`.
pub fn load_store(path: &Path) -> Result<MemoryStore> {
    MemoryStore::load(path).with_context(|| format!("Failed to load store: {}", path.display()))
}
