/*
 * check.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Check command implementation
 */

//! Check command implementation.
//!
//! `garden check` resolves every document of a store in parallel and lists
//! the circular transclusions it had to skip. Circular transclusions are not
//! errors, so the command succeeds whenever the store itself is valid.

use std::path::PathBuf;

use anyhow::Result;
use rayon::prelude::*;
use tracing::info;

use garden_core::{RenderedTree, render_document};

use super::{SiteArgs, load_store};

/// Arguments for the check command
#[derive(Debug)]
pub struct CheckArgs {
    pub store: PathBuf,
    pub site: SiteArgs,
}

/// Execute the check command
pub fn execute(args: CheckArgs) -> Result<()> {
    let store = load_store(&args.store)?;
    let config = args.site.site_config(&args.store)?;

    let slugs = store.slugs();
    info!(documents = slugs.len(), "Checking store");

    // Every render works on its own copy; the store is shared read-only
    let rendered: Vec<RenderedTree> = slugs
        .par_iter()
        .map(|slug| render_document(slug, &store, &config))
        .collect::<garden_core::Result<_>>()?;

    let mut circular = 0;
    for tree in &rendered {
        for warning in &tree.warnings {
            println!("{}: {}", tree.slug, warning);
            circular += 1;
        }
    }

    println!(
        "Checked {} documents: {} circular transclusions",
        rendered.len(),
        circular
    );
    Ok(())
}
