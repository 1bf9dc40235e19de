/*
 * transform.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Ordered tree transforms run over one page.
 */

//! Ordered tree transforms run over one page.
//!
//! A page is rendered by handing its own copy of the tree to each
//! [`TreeTransform`] of a [`TransformPipeline`] in turn. Transforms share the
//! page's [`RenderContext`]: they look documents up in the store, read the
//! site configuration and leave warnings behind for the caller.
//!
//! ```ignore
//! struct DropComments;
//!
//! impl TreeTransform for DropComments {
//!     fn name(&self) -> &str { "drop-comments" }
//!
//!     fn transform(&self, root: &mut Root, _ctx: &mut RenderContext) -> Result<()> {
//!         root.children.retain(|node| {
//!             node.as_element().is_none_or(|el| !el.has_class("comment"))
//!         });
//!         Ok(())
//!     }
//! }
//!
//! let mut pipeline = default_pipeline();
//! pipeline.push(Box::new(DropComments));
//! let rendered = render_with_pipeline(&pipeline, &tree, &slug, &store, &config)?;
//! ```

use garden_hast::Root;

use crate::Result;
use crate::render::RenderContext;

/// One step of page rendering.
///
/// A pipeline is shared by every page rendered from it, possibly on several
/// threads at once, hence `Send + Sync`.
pub trait TreeTransform: Send + Sync {
    /// Short kebab-case name, used in logs.
    fn name(&self) -> &str;

    /// Rewrite `root`, the tree of the page `ctx.slug`.
    ///
    /// # Errors
    ///
    /// An error aborts the render of this page.
    fn transform(&self, root: &mut Root, ctx: &mut RenderContext) -> Result<()>;
}

/// Transforms applied to a page, first added runs first.
pub struct TransformPipeline {
    steps: Vec<Box<dyn TreeTransform>>,
}

impl TransformPipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a transform; it runs after every transform already present.
    pub fn push(&mut self, step: Box<dyn TreeTransform>) {
        self.steps.push(step);
    }

    /// Run each transform over `root` in order, stopping at the first
    /// failure.
    pub fn execute(&self, root: &mut Root, ctx: &mut RenderContext) -> Result<()> {
        for step in &self.steps {
            tracing::debug!(transform = step.name(), slug = %ctx.slug, "Running transform");
            step.transform(root, ctx)?;
        }
        Ok(())
    }

    pub fn transform_names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name()).collect()
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}
