/*
 * transforms/mod.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Tree transforms for the render pipeline.
 */

//! Tree transforms for the render pipeline.
//!
//! - [`TranscludeResolveTransform`] - Inlines the content named by
//!   transclusion placeholders
//!
//! These transforms implement [`TreeTransform`](crate::transform::TreeTransform)
//! and can be added to a [`TransformPipeline`](crate::transform::TransformPipeline).

mod transclude_resolve;

pub use transclude_resolve::TranscludeResolveTransform;
