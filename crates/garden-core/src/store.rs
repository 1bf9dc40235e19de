/*
 * store.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Read-only access to the rendered documents of a site.
 */

//! Document store.
//!
//! The store owns every rendered document of a site. Resolving a page only
//! ever reads from it: the page being resolved works on its own copy of its
//! tree, so a document other pages transclude from is never modified.
//!
//! [`MemoryStore`] can be loaded from a JSON content index, which is an
//! array of documents:
//!
//! ```json
//! [
//!   {
//!     "slug": "notes/a",
//!     "frontmatter": { "title": "A" },
//!     "blocks": { "quote1": { "tag": "p", "children": [{ "text": "Hello" }] } },
//!     "tree": { "children": [] }
//!   }
//! ]
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use garden_hast::{Element, Root};
use serde::{Deserialize, Serialize};

use crate::error::{GardenError, Result};
use crate::slug::Slug;

/// Document metadata from frontmatter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub slug: Slug,

    #[serde(default)]
    pub frontmatter: Frontmatter,

    /// Elements annotated with a block id, keyed by that id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<HashMap<String, Element>>,

    /// The rendered tree, when the document has been through the render
    /// pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<Root>,
}

impl Document {
    pub fn new(slug: impl Into<Slug>) -> Self {
        Self {
            slug: slug.into(),
            frontmatter: Frontmatter::default(),
            blocks: None,
            tree: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.frontmatter.title = Some(title.into());
        self
    }

    pub fn with_tree(mut self, tree: Root) -> Self {
        self.tree = Some(tree);
        self
    }

    pub fn with_block(mut self, id: impl Into<String>, block: Element) -> Self {
        self.blocks
            .get_or_insert_with(HashMap::new)
            .insert(id.into(), block);
        self
    }

    /// Look up an element by block id.
    pub fn block(&self, id: &str) -> Option<&Element> {
        self.blocks.as_ref()?.get(id)
    }
}

/// Read-only lookup of documents by slug.
///
/// Stores must be `Send + Sync` so that several documents can be resolved
/// in parallel against one shared store.
pub trait DocumentStore: Send + Sync {
    fn lookup(&self, slug: &Slug) -> Option<&Document>;
}

/// A document store held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<Slug, Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from documents, rejecting duplicate slugs.
    pub fn from_documents(documents: impl IntoIterator<Item = Document>) -> Result<Self> {
        let mut store = Self::new();
        for doc in documents {
            if store.documents.contains_key(&doc.slug) {
                return Err(GardenError::DuplicateSlug(doc.slug));
            }
            store.insert(doc);
        }
        Ok(store)
    }

    /// Read a JSON content index (an array of documents).
    pub fn from_json(reader: impl Read) -> Result<Self> {
        let documents: Vec<Document> = serde_json::from_reader(reader)?;
        Self::from_documents(documents)
    }

    /// Load a JSON content index from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_json(std::io::BufReader::new(file))
    }

    /// Insert a document, replacing any document with the same slug.
    pub fn insert(&mut self, document: Document) -> Option<Document> {
        self.documents.insert(document.slug.clone(), document)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// All slugs in the store, sorted.
    pub fn slugs(&self) -> Vec<&Slug> {
        let mut slugs: Vec<&Slug> = self.documents.keys().collect();
        slugs.sort();
        slugs
    }
}

impl DocumentStore for MemoryStore {
    fn lookup(&self, slug: &Slug) -> Option<&Document> {
        self.documents.get(slug)
    }
}
