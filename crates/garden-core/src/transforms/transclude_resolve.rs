/*
 * transclude_resolve.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that replaces transclusion placeholders with their content.
 */

//! Transclusion resolution transform.
//!
//! Wraps a [`TranscludeResolver`] so that resolution runs as one step of a
//! [`TransformPipeline`](crate::transform::TransformPipeline). The locale and
//! the recursive flag come from the site configuration on the render
//! context; cycle warnings are moved onto the context.

use garden_hast::Root;

use crate::Result;
use crate::i18n::i18n;
use crate::normalize::{LinkRebaser, NodeNormalizer};
use crate::render::RenderContext;
use crate::transclude::TranscludeResolver;
use crate::transform::TreeTransform;

pub struct TranscludeResolveTransform {
    normalizer: Box<dyn NodeNormalizer>,
}

impl TranscludeResolveTransform {
    /// Create a transform that rebases links with [`LinkRebaser`].
    pub fn new() -> Self {
        Self::with_normalizer(Box::new(LinkRebaser))
    }

    pub fn with_normalizer(normalizer: Box<dyn NodeNormalizer>) -> Self {
        Self { normalizer }
    }
}

impl Default for TranscludeResolveTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeTransform for TranscludeResolveTransform {
    fn name(&self) -> &str {
        "transclude-resolve"
    }

    fn transform(&self, root: &mut Root, ctx: &mut RenderContext) -> Result<()> {
        let translation = i18n(&ctx.config.locale);
        let resolver = TranscludeResolver::new(ctx.store, self.normalizer.as_ref(), translation)
            .recursive(ctx.config.transclusion.recursive);

        let report = resolver.resolve(root, &ctx.slug);
        tracing::debug!(
            slug = %ctx.slug,
            inlined = report.inlined,
            warnings = report.warnings.len(),
            "Resolved transclusions"
        );

        for warning in report.warnings {
            ctx.add_warning(warning);
        }
        Ok(())
    }
}
