/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Site configuration for rendering.
 */

//! Site configuration.
//!
//! Configuration lives in `_garden.yml` (or `_garden.yaml`) next to the
//! content index or in one of its parent directories:
//!
//! ```yaml
//! locale: en-US
//! transclusion:
//!   recursive: false
//! ```
//!
//! Every key is optional; a missing file means all defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GardenError, Result};
use crate::i18n::DEFAULT_LOCALE;

const CONFIG_FILE_NAMES: [&str; 2] = ["_garden.yml", "_garden.yaml"];

/// Parsed site configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Locale for generated labels.
    pub locale: String,

    pub transclusion: TransclusionConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransclusionConfig {
    /// Also resolve placeholders found inside freshly inlined content.
    ///
    /// Off by default: only placeholders written in the page itself are
    /// resolved, and inlined content is taken as the target rendered it.
    pub recursive: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            transclusion: TransclusionConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| GardenError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty file is a valid, all-defaults configuration
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Search `start_dir` and its parents for a configuration file.
    ///
    /// Returns the defaults when none is found.
    pub fn discover(start_dir: impl AsRef<Path>) -> Result<(Option<PathBuf>, Self)> {
        match Self::find_config_file(start_dir.as_ref()) {
            Some(path) => {
                let config = Self::load(&path)?;
                Ok((Some(path), config))
            }
            None => Ok((None, Self::default())),
        }
    }

    fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
        let mut current = Some(start_dir);
        while let Some(dir) = current {
            for name in CONFIG_FILE_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
            current = dir.parent();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.locale, "en-US");
        assert!(!config.transclusion.recursive);
    }

    #[test]
    fn test_parse_partial() {
        let config = SiteConfig::parse("locale: fr-FR\n").unwrap();
        assert_eq!(config.locale, "fr-FR");
        assert!(!config.transclusion.recursive);

        let config = SiteConfig::parse("transclusion:\n  recursive: true\n").unwrap();
        assert_eq!(config.locale, "en-US");
        assert!(config.transclusion.recursive);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(SiteConfig::parse("  \n").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_load_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_garden.yml");
        std::fs::write(&path, "transclusion: [1, 2").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, GardenError::Config { .. }));
    }

    #[test]
    fn test_discover_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("content").join("notes");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("_garden.yaml"), "locale: de-DE\n").unwrap();

        let (path, config) = SiteConfig::discover(&nested).unwrap();
        assert_eq!(path, Some(dir.path().join("_garden.yaml")));
        assert_eq!(config.locale, "de-DE");
    }

    #[test]
    fn test_discover_none() {
        let dir = tempfile::tempdir().unwrap();
        // Parents of a temp dir are not expected to carry a garden config
        let (path, config) = SiteConfig::discover(dir.path()).unwrap();
        if path.is_none() {
            assert_eq!(config, SiteConfig::default());
        }
    }
}
