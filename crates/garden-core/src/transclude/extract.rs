/*
 * extract.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Selection of the content a reference points at.
 */

//! Content extraction.
//!
//! Extraction borrows from the target document; nothing is copied until
//! [`Extracted::into_fragment`] normalizes the selection for the page it is
//! being inlined into.

use std::ops::Range;

use garden_hast::{Element, HEADING_1, Node, UNORDERED_LIST};

use crate::i18n::Translation;
use crate::normalize::NodeNormalizer;
use crate::slug::Slug;
use crate::store::Document;
use crate::transclude::reference::Reference;

/// Content selected from a target document.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted<'a> {
    /// A registered block. A list item must be wrapped in a list before it
    /// can stand on its own.
    Block { node: &'a Element, wrap_in_list: bool },
    /// A heading and the content nested under it.
    Section(&'a [Node]),
    /// A whole page, introduced by a generated heading.
    Page { heading: Element, body: &'a [Node] },
}

impl<'a> Extracted<'a> {
    /// Whether the selection needs a structural fix-up before use.
    pub fn needs_list_wrap(&self) -> bool {
        matches!(self, Extracted::Block { wrap_in_list: true, .. })
    }

    /// Copy the selection out of the target and normalize it, as one
    /// fragment, for use inside `current`.
    pub fn into_fragment(
        self,
        normalizer: &dyn NodeNormalizer,
        current: &Slug,
        target: &Slug,
    ) -> Vec<Node> {
        match self {
            Extracted::Block { node, wrap_in_list } => {
                let block = if wrap_in_list {
                    Element::new(UNORDERED_LIST).with_child(node.clone())
                } else {
                    node.clone()
                };
                normalizer.normalize_fragment(&[Node::from(block)], current, target)
            }
            Extracted::Section(nodes) => normalizer.normalize_fragment(nodes, current, target),
            Extracted::Page { heading, body } => {
                let mut nodes = Vec::with_capacity(body.len() + 1);
                nodes.push(Node::from(heading));
                nodes.extend_from_slice(body);
                normalizer.normalize_fragment(&nodes, current, target)
            }
        }
    }
}

/// Select the content of `document` that `reference` points at.
///
/// Returns `None` when there is nothing to inline: an unknown block or
/// heading id, or a document without a rendered tree.
pub fn extract<'a>(
    document: &'a Document,
    reference: &Reference,
    translation: &Translation,
) -> Option<Extracted<'a>> {
    match reference {
        Reference::Block(id) => extract_block(document, id),
        Reference::Header(id) => extract_section(document, id),
        Reference::Page => extract_page(document, translation),
    }
}

fn extract_block<'a>(document: &'a Document, id: &str) -> Option<Extracted<'a>> {
    let node = document.block(id)?;
    Some(Extracted::Block {
        node,
        wrap_in_list: node.is_list_item(),
    })
}

fn extract_section<'a>(document: &'a Document, id: &str) -> Option<Extracted<'a>> {
    let children = &document.tree.as_ref()?.children;
    let range = locate_section(children, id)?;
    Some(Extracted::Section(&children[range]))
}

fn extract_page<'a>(document: &'a Document, translation: &Translation) -> Option<Extracted<'a>> {
    let body = &document.tree.as_ref()?.children;
    let title = match &document.frontmatter.title {
        Some(title) => title.clone(),
        None => translation
            .transcludes
            .transclude_of(document.slug.as_str()),
    };
    Some(Extracted::Page {
        heading: Element::new(HEADING_1).with_text(title),
        body,
    })
}

/// Find the section introduced by the heading with id `id`.
///
/// Only top-level headings are considered. The section starts at the first
/// heading whose id matches and ends before the next heading of the same
/// or a higher level (a depth less than or equal to the start's), or at
/// the end of `children`. Deeper headings belong to the section.
pub fn locate_section(children: &[Node], id: &str) -> Option<Range<usize>> {
    let mut start: Option<(usize, u8)> = None;

    for (i, node) in children.iter().enumerate() {
        let Some(el) = node.as_element() else {
            continue;
        };
        let Some(depth) = el.heading_depth() else {
            continue;
        };

        match start {
            None => {
                if el.id() == Some(id) {
                    start = Some((i, depth));
                }
            }
            Some((start_idx, start_depth)) => {
                if depth <= start_depth {
                    return Some(start_idx..i);
                }
            }
        }
    }

    start.map(|(start_idx, _)| start_idx..children.len())
}
