/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render context and entry points for resolving a page.
 */

//! Render context and entry points for resolving a page.
//!
//! The `RenderContext` is the mutable state passed through all transforms:
//! - Transforms read documents from the store
//! - Transforms read the site configuration
//! - Transforms record non-fatal warnings

use garden_hast::Root;

use crate::config::SiteConfig;
use crate::error::{GardenError, Result, TranscludeWarning};
use crate::slug::Slug;
use crate::store::DocumentStore;
use crate::transform::TransformPipeline;
use crate::transforms::TranscludeResolveTransform;

/// Context for rendering a single page.
pub struct RenderContext<'a> {
    /// The page being rendered
    pub slug: Slug,

    /// Every document of the site, read-only
    pub store: &'a dyn DocumentStore,

    pub config: &'a SiteConfig,

    /// Non-fatal warnings collected during transforms
    pub warnings: Vec<TranscludeWarning>,
}

impl<'a> RenderContext<'a> {
    pub fn new(slug: Slug, store: &'a dyn DocumentStore, config: &'a SiteConfig) -> Self {
        Self {
            slug,
            store,
            config,
            warnings: Vec::new(),
        }
    }

    /// Add a non-fatal warning.
    ///
    /// Warnings are reported after rendering completes. They don't stop
    /// rendering.
    pub fn add_warning(&mut self, warning: TranscludeWarning) {
        self.warnings.push(warning);
    }
}

/// A page with its transclusions resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTree {
    pub slug: Slug,
    pub root: Root,
    pub warnings: Vec<TranscludeWarning>,
}

/// The pipeline run for every page.
pub fn default_pipeline() -> TransformPipeline {
    let mut pipeline = TransformPipeline::new();
    pipeline.push(Box::new(TranscludeResolveTransform::new()));
    pipeline
}

/// Resolve the transclusions of `tree`, the rendered tree of page `slug`.
///
/// The input tree is not modified; the result holds a copy.
pub fn render_transcludes(
    tree: &Root,
    slug: &Slug,
    store: &dyn DocumentStore,
    config: &SiteConfig,
) -> Result<RenderedTree> {
    render_with_pipeline(&default_pipeline(), tree, slug, store, config)
}

/// Like [`render_transcludes`], with a caller-supplied pipeline.
pub fn render_with_pipeline(
    pipeline: &TransformPipeline,
    tree: &Root,
    slug: &Slug,
    store: &dyn DocumentStore,
    config: &SiteConfig,
) -> Result<RenderedTree> {
    let mut root = tree.clone();
    let mut ctx = RenderContext::new(slug.clone(), store, config);
    pipeline.execute(&mut root, &mut ctx)?;

    Ok(RenderedTree {
        slug: ctx.slug,
        root,
        warnings: ctx.warnings,
    })
}

/// Render a document of the store by slug.
///
/// A document without a rendered tree renders as an empty page.
///
/// # Errors
///
/// Returns [`GardenError::UnknownDocument`] if `slug` is not in the store.
pub fn render_document(
    slug: &Slug,
    store: &dyn DocumentStore,
    config: &SiteConfig,
) -> Result<RenderedTree> {
    let document = store
        .lookup(slug)
        .ok_or_else(|| GardenError::UnknownDocument(slug.clone()))?;
    let empty = Root::default();
    let tree = document.tree.as_ref().unwrap_or(&empty);
    render_transcludes(tree, slug, store, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Document, MemoryStore};
    use garden_hast::{Element, Node};

    #[test]
    fn test_add_warning() {
        let store = MemoryStore::new();
        let config = SiteConfig::default();
        let mut ctx = RenderContext::new(Slug::new("a"), &store, &config);
        ctx.add_warning(TranscludeWarning::Circular {
            origin: Slug::new("a"),
            target: Slug::new("a"),
        });
        assert_eq!(ctx.warnings.len(), 1);
    }

    #[test]
    fn test_render_transcludes_leaves_input_alone() {
        let store = MemoryStore::new();
        let config = SiteConfig::default();
        let tree = Root::new(vec![Node::from(Element::new("p").with_text("hi"))]);

        let rendered = render_transcludes(&tree, &Slug::new("a"), &store, &config).unwrap();
        assert_eq!(rendered.root, tree);
        assert_eq!(rendered.slug, Slug::new("a"));
        assert!(rendered.warnings.is_empty());
    }

    #[test]
    fn test_render_document_unknown_slug() {
        let store = MemoryStore::new();
        let config = SiteConfig::default();
        let result = render_document(&Slug::new("missing"), &store, &config);
        assert!(matches!(result, Err(GardenError::UnknownDocument(_))));
    }

    #[test]
    fn test_render_document_without_tree() {
        let store = MemoryStore::from_documents(vec![Document::new("a")]).unwrap();
        let config = SiteConfig::default();
        let rendered = render_document(&Slug::new("a"), &store, &config).unwrap();
        assert!(rendered.root.children.is_empty());
    }

    #[test]
    fn test_default_pipeline_names() {
        assert_eq!(default_pipeline().transform_names(), vec!["transclude-resolve"]);
    }
}
