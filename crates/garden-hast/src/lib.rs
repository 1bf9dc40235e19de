/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * HTML syntax tree types for rendered garden documents.
 *
 * This crate provides pure data type definitions for the element trees
 * that cross the boundary between the document store and the render
 * stages. It has minimal dependencies (serde, hashlink) and can be used
 * by any crate that needs to read or build rendered documents.
 */

pub mod attr;
pub mod node;
pub mod outline;

// Re-export commonly used types at the crate root
pub use attr::{AttrValue, Attributes};
pub use node::{
    ANCHOR, BLOCKQUOTE, Element, HEADING_1, LIST_ITEM, Node, PARAGRAPH, Root, Text, UNORDERED_LIST,
};
pub use outline::outline;
