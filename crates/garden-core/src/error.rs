//! Error types for garden-core

use thiserror::Error;

use crate::slug::Slug;

#[derive(Error, Debug)]
pub enum GardenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document store: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration in {path}: {message}")]
    Config { path: String, message: String },

    #[error("Duplicate document slug: {0}")]
    DuplicateSlug(Slug),

    #[error("Unknown document: {0}")]
    UnknownDocument(Slug),

    /// A pipeline step that could not complete.
    #[error("Transform error: {0}")]
    Transform(String),
}

pub type Result<T> = std::result::Result<T, GardenError>;

/// A non-fatal problem found while resolving transclusions.
///
/// Warnings are collected on the render context; they never abort a render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscludeWarning {
    #[error("Skipping circular transclusion: {origin} -> {target}")]
    Circular { origin: Slug, target: Slug },
}
