//! Transclusion resolution for rendered garden documents
//!
//! This crate turns the transclusion placeholders of a rendered page into the
//! content they reference: a single block, a heading-delimited section or a
//! whole page of another document.
//!
//! # Architecture
//!
//! - [`DocumentStore`] - Read-only lookup of every document's rendered state
//! - [`RenderContext`] - Per-page mutable state passed through transforms
//! - [`TransformPipeline`] - Ordered tree transforms run over a page
//! - [`TranscludeResolver`] - The placeholder walk itself
//! - [`NodeNormalizer`] - Rewrites inlined content for its new location
//!
//! # Example
//!
//! ```ignore
//! use garden_core::{MemoryStore, SiteConfig, Slug, render_document};
//!
//! let store = MemoryStore::load("content.json")?;
//! let (_, config) = SiteConfig::discover(".")?;
//! let rendered = render_document(&Slug::new("notes/index"), &store, &config)?;
//!
//! for warning in &rendered.warnings {
//!     eprintln!("{}", warning);
//! }
//! ```

pub mod config;
pub mod error;
pub mod i18n;
pub mod normalize;
pub mod render;
pub mod slug;
pub mod store;
pub mod transclude;
pub mod transform;
pub mod transforms;

// Re-export commonly used types
pub use config::{SiteConfig, TransclusionConfig};
pub use error::{GardenError, Result, TranscludeWarning};
pub use i18n::{Translation, i18n};
pub use normalize::{LinkRebaser, NodeNormalizer};
pub use render::{
    RenderContext, RenderedTree, default_pipeline, render_document, render_transcludes,
    render_with_pipeline,
};
pub use slug::Slug;
pub use store::{Document, DocumentStore, Frontmatter, MemoryStore};
pub use transclude::{Placeholder, Reference, TranscludeResolver};
pub use transform::{TransformPipeline, TreeTransform};
pub use transforms::TranscludeResolveTransform;
