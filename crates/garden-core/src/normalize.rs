/*
 * normalize.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Rewriting of links in content moved between documents.
 */

//! Normalization of content moved between documents.
//!
//! Links inside a rendered document are written relative to that document.
//! When an element is inlined into another page those links must be
//! rewritten, or they would resolve against the wrong folder.
//!
//! [`LinkRebaser`] rewrites `href` and `src` attributes:
//!
//! - relative URLs (`./img.png`, `../other`) are rebased so they resolve to
//!   the same place from the new page;
//! - fragment-only links (`#heading`) are pointed at the source page, since
//!   the heading they name lives there. When a whole fragment is normalized
//!   at once ([`NodeNormalizer::normalize_fragment`]) links to ids inlined
//!   in that same fragment stay local.
//!
//! Every rewritten element records the slug its links are now relative to
//! in a `data-link-base` attribute. Later passes rebase from that slug
//! instead of the transclusion target, so normalizing twice is a no-op and
//! content that is transcluded again stays correct.

use std::collections::HashSet;

use garden_hast::{Element, Node};

use crate::slug::{Slug, is_relative_url, rebase_url, resolve_relative};

/// Attribute recording which document an element's links are relative to.
pub const LINK_BASE_ATTR: &str = "data-link-base";

const URL_ATTRS: [&str; 2] = ["href", "src"];

/// Rewrites extracted content so it stays valid inside another document.
///
/// Implementations return a fresh copy and never modify their input.
pub trait NodeNormalizer: Send + Sync {
    /// Normalize an element taken from `target` for use inside `current`.
    fn normalize_element(&self, element: &Element, current: &Slug, target: &Slug) -> Element;

    /// Normalize any node. Text leaves carry no links and are copied as is.
    fn normalize(&self, node: &Node, current: &Slug, target: &Slug) -> Node {
        match node {
            Node::Element(el) => Node::Element(self.normalize_element(el, current, target)),
            Node::Text(_) => node.clone(),
        }
    }

    /// Normalize a sequence of nodes that is inlined as one piece.
    fn normalize_fragment(&self, nodes: &[Node], current: &Slug, target: &Slug) -> Vec<Node> {
        nodes
            .iter()
            .map(|node| self.normalize(node, current, target))
            .collect()
    }
}

/// The default normalizer: rebases relative and fragment links.
///
/// Element ids are kept as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkRebaser;

impl NodeNormalizer for LinkRebaser {
    fn normalize_element(&self, element: &Element, current: &Slug, target: &Slug) -> Element {
        let mut out = element.clone();
        rebase_element(&mut out, current, target, &HashSet::new());
        out
    }

    fn normalize_fragment(&self, nodes: &[Node], current: &Slug, target: &Slug) -> Vec<Node> {
        let mut inlined = HashSet::new();
        collect_ids(nodes, &mut inlined);

        nodes
            .iter()
            .map(|node| match node {
                Node::Element(el) => {
                    let mut out = el.clone();
                    rebase_element(&mut out, current, target, &inlined);
                    Node::Element(out)
                }
                Node::Text(_) => node.clone(),
            })
            .collect()
    }
}

fn collect_ids<'a>(nodes: &'a [Node], ids: &mut HashSet<&'a str>) {
    for node in nodes {
        if let Node::Element(el) = node {
            if let Some(id) = el.id() {
                ids.insert(id);
            }
            collect_ids(&el.children, ids);
        }
    }
}

/// Rebase the links of `el` and its descendants. Fragment links naming an
/// id in `inlined` are left alone.
fn rebase_element(el: &mut Element, current: &Slug, target: &Slug, inlined: &HashSet<&str>) {
    let base = el.attr_str(LINK_BASE_ATTR).map_or_else(|| target.clone(), Slug::new);

    if &base != current {
        let mut rewritten = false;
        for name in URL_ATTRS {
            let new_value = match el.attr_str(name) {
                Some(url) if is_relative_url(url) => Some(rebase_url(url, current, &base)),
                Some(url) if is_external_fragment(name, url, inlined) => {
                    Some(format!("{}{}", resolve_relative(current, &base), url))
                }
                _ => None,
            };
            if let Some(value) = new_value {
                el.set_attr(name, value);
                rewritten = true;
            }
        }
        if rewritten {
            el.set_attr(LINK_BASE_ATTR, current.as_str());
        }
    }

    for child in el.children.iter_mut() {
        if let Node::Element(child) = child {
            rebase_element(child, current, target, inlined);
        }
    }
}

fn is_external_fragment(attr: &str, url: &str, inlined: &HashSet<&str>) -> bool {
    attr == "href"
        && url
            .strip_prefix('#')
            .is_some_and(|id| !id.is_empty() && !inlined.contains(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str) -> Element {
        Element::new("a").with_attr("href", href).with_text("x")
    }

    #[test]
    fn test_rebases_relative_links() {
        let current = Slug::new("index");
        let target = Slug::new("notes/b");
        let el = Element::new("p")
            .with_child(link("./c"))
            .with_child(Element::new("img").with_attr("src", "../img/cat.png"));

        let out = LinkRebaser.normalize_element(&el, &current, &target);

        let a = out.children[0].as_element().unwrap();
        assert_eq!(a.attr_str("href"), Some("./notes/c"));
        assert_eq!(a.attr_str(LINK_BASE_ATTR), Some("index"));
        let img = out.children[1].as_element().unwrap();
        assert_eq!(img.attr_str("src"), Some("./img/cat.png"));
        // The paragraph itself had nothing to rewrite
        assert_eq!(out.attr(LINK_BASE_ATTR), None);
    }

    #[test]
    fn test_fragment_links_point_at_source_page() {
        let current = Slug::new("a/page");
        let target = Slug::new("notes/b");
        let out = LinkRebaser.normalize_element(&link("#details"), &current, &target);
        assert_eq!(out.attr_str("href"), Some("../notes/b#details"));
    }

    #[test]
    fn test_absolute_and_external_links_untouched() {
        let current = Slug::new("index");
        let target = Slug::new("notes/b");
        for href in ["https://example.com", "/abs/path", "./notes/index", "#"] {
            let out = LinkRebaser.normalize_element(&link(href), &current, &target);
            assert_eq!(out, link(href), "href {href} should not change");
        }
    }

    #[test]
    fn test_same_document_is_untouched() {
        let slug = Slug::new("notes/b");
        let el = Element::new("p").with_child(link("./c")).with_child(link("#x"));
        assert_eq!(LinkRebaser.normalize_element(&el, &slug, &slug), el);
    }

    #[test]
    fn test_normalizing_twice_is_a_no_op() {
        let current = Slug::new("x/y");
        let target = Slug::new("notes/deep/b");
        let el = Element::new("div")
            .with_child(link("../c"))
            .with_child(link("#frag"))
            .with_child(Element::new("img").with_attr("src", "./i.png"));

        let once = LinkRebaser.normalize_element(&el, &current, &target);
        let twice = LinkRebaser.normalize_element(&once, &current, &target);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_retransclusion_rebases_from_recorded_base() {
        // notes/b is inlined into a/page, then a/page's content is inlined
        // into index. The link must still reach notes/c.
        let b = Slug::new("notes/b");
        let page = Slug::new("a/page");
        let index = Slug::new("index");

        let into_page = LinkRebaser.normalize_element(&link("./c"), &page, &b);
        assert_eq!(into_page.attr_str("href"), Some("../notes/c"));

        let into_index = LinkRebaser.normalize_element(&into_page, &index, &page);
        assert_eq!(into_index.attr_str("href"), Some("./notes/c"));
        assert_eq!(into_index.attr_str(LINK_BASE_ATTR), Some("index"));
    }

    #[test]
    fn test_fragment_links_to_inlined_ids_stay_local() {
        let current = Slug::new("index");
        let target = Slug::new("notes/b");
        let nodes = vec![
            Node::from(Element::new("h2").with_attr("id", "intro").with_text("Intro")),
            Node::from(
                Element::new("p")
                    .with_child(link("#intro"))
                    .with_child(link("#elsewhere")),
            ),
        ];

        let out = LinkRebaser.normalize_fragment(&nodes, &current, &target);

        let p = out[1].as_element().unwrap();
        let local = p.children[0].as_element().unwrap();
        assert_eq!(local.attr_str("href"), Some("#intro"));
        assert_eq!(local.attr(LINK_BASE_ATTR), None);
        let away = p.children[1].as_element().unwrap();
        assert_eq!(away.attr_str("href"), Some("./notes/b#elsewhere"));

        assert_eq!(LinkRebaser.normalize_fragment(&out, &current, &target), out);
    }

    #[test]
    fn test_text_nodes_copied() {
        let node = Node::text("plain");
        let out = LinkRebaser.normalize(&node, &Slug::new("a"), &Slug::new("b"));
        assert_eq!(out, node);
    }
}
