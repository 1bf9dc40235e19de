/*
 * reference.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Placeholder recognition and reference parsing.
//!
//! A transclusion placeholder is written by the markdown stage as
//!
//! ```text
//! blockquote.transclude{data-block=#^quote1}
//!   a.internal.transclude-inner{href=./notes/a data-slug=notes/a}
//! ```
//!
//! The reference string is parsed once into a [`Reference`] so that the
//! extractors never look at its syntax again.

use garden_hast::{BLOCKQUOTE, Element};

use crate::slug::Slug;

/// Class marking a blockquote as a transclusion placeholder.
pub const TRANSCLUDE_CLASS: &str = "transclude";

const BLOCK_PREFIX: &str = "#^";
const HEADER_PREFIX: &str = "#";

/// What part of the target document to inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// `#^id`: a single element registered under a block id.
    Block(String),
    /// `#id`: a heading and everything nested beneath it.
    Header(String),
    /// Anything else: the whole page.
    Page,
}

impl Reference {
    pub fn parse(reference: Option<&str>) -> Self {
        let Some(reference) = reference else {
            return Reference::Page;
        };

        if let Some(id) = reference.strip_prefix(BLOCK_PREFIX) {
            Reference::Block(id.to_string())
        } else if let Some(id) = reference.strip_prefix(HEADER_PREFIX) {
            Reference::Header(id.to_string())
        } else {
            Reference::Page
        }
    }
}

/// A parsed transclusion placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub target: Slug,
    pub reference: Reference,
    /// Link to the original, reused for the attribution link.
    pub href: Option<String>,
}

impl Placeholder {
    /// Whether `element` has the shape of a placeholder.
    pub fn matches(element: &Element) -> bool {
        element.tag == BLOCKQUOTE && element.has_class(TRANSCLUDE_CLASS)
    }

    /// Parse a placeholder found in the document `current`.
    ///
    /// The target defaults to `current` when the inner link has no
    /// `data-slug`. The reference is read from the inner link, falling back
    /// to the blockquote itself. Returns `None` for elements that are not
    /// placeholders, including a transclude blockquote without inner link.
    pub fn parse(element: &Element, current: &Slug) -> Option<Self> {
        if !Self::matches(element) {
            return None;
        }
        let inner = element.first_element_child()?;

        let target = inner
            .attr_str("data-slug")
            .map_or_else(|| current.clone(), Slug::new);
        let reference = Reference::parse(
            inner
                .attr_str("data-block")
                .or_else(|| element.attr_str("data-block")),
        );

        Some(Self {
            target,
            reference,
            href: inner.attr_str("href").map(String::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(inner: Element) -> Element {
        Element::new(BLOCKQUOTE)
            .with_class(TRANSCLUDE_CLASS)
            .with_child(inner)
    }

    #[test]
    fn test_parse_reference() {
        assert_eq!(
            Reference::parse(Some("#^quote1")),
            Reference::Block("quote1".to_string())
        );
        assert_eq!(
            Reference::parse(Some("#intro")),
            Reference::Header("intro".to_string())
        );
        assert_eq!(Reference::parse(None), Reference::Page);
        assert_eq!(Reference::parse(Some("")), Reference::Page);
        assert_eq!(Reference::parse(Some("quote1")), Reference::Page);
        assert_eq!(Reference::parse(Some("#^")), Reference::Block(String::new()));
    }

    #[test]
    fn test_parse_placeholder() {
        let el = placeholder(
            Element::new("a")
                .with_attr("href", "./notes/a")
                .with_attr("data-slug", "notes/a")
                .with_attr("data-block", "#^quote1"),
        );

        let parsed = Placeholder::parse(&el, &Slug::new("index")).unwrap();
        assert_eq!(parsed.target, Slug::new("notes/a"));
        assert_eq!(parsed.reference, Reference::Block("quote1".to_string()));
        assert_eq!(parsed.href.as_deref(), Some("./notes/a"));
    }

    #[test]
    fn test_target_defaults_to_current() {
        let el = placeholder(Element::new("a").with_attr("data-block", "#intro"));
        let parsed = Placeholder::parse(&el, &Slug::new("notes/self")).unwrap();
        assert_eq!(parsed.target, Slug::new("notes/self"));
        assert_eq!(parsed.href, None);
    }

    #[test]
    fn test_reference_falls_back_to_blockquote() {
        let el = placeholder(Element::new("a").with_attr("data-slug", "b"))
            .with_attr("data-block", "#^x");
        let parsed = Placeholder::parse(&el, &Slug::new("a")).unwrap();
        assert_eq!(parsed.reference, Reference::Block("x".to_string()));
    }

    #[test]
    fn test_not_a_placeholder() {
        let current = Slug::new("a");
        let plain_quote = Element::new(BLOCKQUOTE).with_child(Element::new("p"));
        let wrong_tag = Element::new("div")
            .with_class(TRANSCLUDE_CLASS)
            .with_child(Element::new("a"));
        let no_inner = Element::new(BLOCKQUOTE)
            .with_class(TRANSCLUDE_CLASS)
            .with_text("text only");

        assert!(Placeholder::parse(&plain_quote, &current).is_none());
        assert!(Placeholder::parse(&wrong_tag, &current).is_none());
        assert!(Placeholder::parse(&no_inner, &current).is_none());
    }
}
