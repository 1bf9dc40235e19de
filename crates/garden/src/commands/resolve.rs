/*
 * resolve.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Resolve command implementation
 */

//! Resolve command implementation.
//!
//! `garden resolve` renders the transclusions of one stored document and
//! writes the resulting tree, as JSON or as a compact outline.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use garden_core::{Slug, render_document};
use garden_hast::outline;

use super::{SiteArgs, load_store};

/// Arguments for the resolve command
#[derive(Debug)]
pub struct ResolveArgs {
    /// JSON content index
    pub store: PathBuf,
    /// Document to resolve
    pub slug: String,
    pub site: SiteArgs,
    /// Output file (stdout when absent)
    pub output: Option<PathBuf>,
    /// Print an outline instead of JSON
    pub outline: bool,
}

/// Execute the resolve command
pub fn execute(args: ResolveArgs) -> Result<()> {
    let store = load_store(&args.store)?;
    let config = args.site.site_config(&args.store)?;
    let slug = Slug::new(&args.slug);

    let rendered = render_document(&slug, &store, &config)
        .with_context(|| format!("Failed to resolve {}", slug))?;

    let mut text = if args.outline {
        outline(&rendered.root.children)
    } else {
        serde_json::to_string_pretty(&rendered.root).context("Failed to serialize tree")?
    };
    text.push('\n');

    match &args.output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!(slug = %slug, output = %path.display(), "Resolved document");
        }
        None => {
            std::io::stdout()
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    if !rendered.warnings.is_empty() {
        info!(
            slug = %slug,
            warnings = rendered.warnings.len(),
            "Resolved with circular transclusions skipped"
        );
    }
    Ok(())
}
