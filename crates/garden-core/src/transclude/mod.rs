/*
 * transclude/mod.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transclusion resolution.
 */

//! Transclusion resolution.
//!
//! A transclusion placeholder asks for content of another document to be
//! inlined at render time: a registered block (`#^id`), a heading-delimited
//! section (`#id`) or a whole page. Resolution walks the page top-down and,
//! for each placeholder:
//!
//! 1. determines the target document (the page itself when unspecified);
//! 2. consults the [`CycleGuard`]; a document already on the resolution
//!    path is replaced by a visible notice and a warning;
//! 3. looks the target up in the [`DocumentStore`](crate::store::DocumentStore);
//! 4. extracts and normalizes the referenced content and replaces the
//!    placeholder's children with it, followed by a link to the original.
//!
//! A missing target, block or heading leaves the placeholder unchanged.
//! No failure aborts the render.
//!
//! By default inlined content is not walked again, so placeholders inside
//! it stay as the target rendered them. [`TranscludeResolver::recursive`]
//! walks inlined content too, with the cycle path extended by its source.

mod cycle;
mod extract;
mod reference;
mod resolve;

pub use cycle::CycleGuard;
pub use extract::{Extracted, extract, locate_section};
pub use reference::{Placeholder, Reference, TRANSCLUDE_CLASS};
pub use resolve::{ResolveReport, TranscludeResolver};
