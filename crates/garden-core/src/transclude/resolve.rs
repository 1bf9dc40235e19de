/*
 * resolve.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Replacement of transclusion placeholders with the content they name.
 */

use garden_hast::{ANCHOR, Element, Node, PARAGRAPH, Root};

use crate::error::TranscludeWarning;
use crate::i18n::Translation;
use crate::normalize::NodeNormalizer;
use crate::slug::Slug;
use crate::store::DocumentStore;
use crate::transclude::cycle::CycleGuard;
use crate::transclude::extract::extract;
use crate::transclude::reference::Placeholder;

/// Outcome of resolving one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// Placeholders replaced by inlined content.
    pub inlined: usize,
    pub warnings: Vec<TranscludeWarning>,
}

/// Walks a page and replaces its transclusion placeholders.
///
/// The resolver only reads from the store. It mutates the tree it is
/// given, so callers pass their own copy of the page.
pub struct TranscludeResolver<'a> {
    store: &'a dyn DocumentStore,
    normalizer: &'a dyn NodeNormalizer,
    translation: &'a Translation,
    recursive: bool,
}

impl<'a> TranscludeResolver<'a> {
    pub fn new(
        store: &'a dyn DocumentStore,
        normalizer: &'a dyn NodeNormalizer,
        translation: &'a Translation,
    ) -> Self {
        Self {
            store,
            normalizer,
            translation,
            recursive: false,
        }
    }

    /// Also walk freshly inlined content, extending the cycle path with the
    /// document it came from.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Resolve every placeholder in `root`, the tree of the page `slug`.
    pub fn resolve(&self, root: &mut Root, slug: &Slug) -> ResolveReport {
        let mut guard = CycleGuard::new(slug.clone());
        let mut report = ResolveReport::default();
        self.resolve_nodes(&mut root.children, &mut guard, &mut report);
        report
    }

    fn resolve_nodes(
        &self,
        nodes: &mut [Node],
        guard: &mut CycleGuard,
        report: &mut ResolveReport,
    ) {
        for node in nodes.iter_mut() {
            if let Node::Element(el) = node {
                self.resolve_element(el, guard, report);
            }
        }
    }

    fn resolve_element(
        &self,
        el: &mut Element,
        guard: &mut CycleGuard,
        report: &mut ResolveReport,
    ) {
        let Some(placeholder) = Placeholder::parse(el, guard.current()) else {
            self.resolve_nodes(&mut el.children, guard, report);
            return;
        };

        let target = &placeholder.target;
        if !guard.enter(target) {
            let origin = guard.current().clone();
            tracing::warn!(
                origin = %origin,
                target = %target,
                "Skipping circular transclusion: {} -> {}",
                origin,
                target
            );
            el.children = vec![circular_notice(&origin, target)];
            report.warnings.push(TranscludeWarning::Circular {
                origin,
                target: target.clone(),
            });
            return;
        }

        // Anything that cannot be resolved leaves the placeholder untouched
        if let Some(fragment) = self.inline(&placeholder, guard.page()) {
            el.children = fragment;
            report.inlined += 1;
            if self.recursive {
                self.resolve_nodes(&mut el.children, guard, report);
            }
        }

        guard.exit();
    }

    /// The normalized content for `placeholder` followed by the attribution
    /// link, or `None` when there is nothing to inline.
    fn inline(&self, placeholder: &Placeholder, page: &Slug) -> Option<Vec<Node>> {
        let document = self.store.lookup(&placeholder.target)?;
        let extracted = extract(document, &placeholder.reference, self.translation)?;

        let mut fragment = extracted.into_fragment(self.normalizer, page, &document.slug);
        fragment.push(attribution_link(
            placeholder.href.as_deref(),
            self.translation.transcludes.link_to_original,
        ));
        Some(fragment)
    }
}

/// The link back to the transcluded document.
fn attribution_link(href: Option<&str>, label: &str) -> Node {
    let mut link = Element::new(ANCHOR);
    if let Some(href) = href {
        link.set_attr("href", href);
    }
    link.with_attr("class", vec!["internal", "transclude-src"])
        .with_text(label)
        .into()
}

/// Shown in place of content that would include itself.
fn circular_notice(origin: &Slug, target: &Slug) -> Node {
    Element::new(PARAGRAPH)
        .with_attr("style", "color: var(--secondary);")
        .with_attr("data-origin", origin.as_str())
        .with_attr("data-target", target.as_str())
        .with_text(format!("Circular transclusion detected: {}", target))
        .into()
}
