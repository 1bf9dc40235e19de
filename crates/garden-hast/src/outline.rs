/*
 * outline.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Compact single-line outline of a node sequence.
 */

//! Compact outline of element trees.
//!
//! The outline is a debugging aid, not markup. Each element is written as
//! `tag#id.class{name=value}[children]` and each text leaf as a quoted
//! string, e.g. `p.note["Hello"], a{href=./b}["Link"]`.

use crate::node::{Element, Node};

/// Outline a sequence of nodes on one line.
pub fn outline(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_nodes(nodes, &mut out);
    out
}

fn write_nodes(nodes: &[Node], out: &mut String) {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match node {
            Node::Text(t) => out.push_str(&format!("{:?}", t.text)),
            Node::Element(el) => write_element(el, out),
        }
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push_str(&el.tag);
    if let Some(id) = el.id() {
        out.push('#');
        out.push_str(id);
    }
    for class in el.classes() {
        out.push('.');
        out.push_str(class);
    }

    let rest: Vec<String> = el
        .attributes
        .iter()
        .filter(|(name, _)| name.as_str() != "id" && name.as_str() != "class")
        .map(|(name, value)| format!("{}={}", name, value.to_markup_string()))
        .collect();
    if !rest.is_empty() {
        out.push('{');
        out.push_str(&rest.join(" "));
        out.push('}');
    }

    if !el.children.is_empty() {
        out.push('[');
        write_nodes(&el.children, out);
        out.push(']');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_nested() {
        let nodes = vec![
            Element::new("p")
                .with_attr("id", "intro")
                .with_class("note")
                .with_text("Hello")
                .into(),
            Element::new("a")
                .with_attr("href", "./b")
                .with_text("Link")
                .into(),
        ];

        insta::assert_snapshot!(outline(&nodes), @r#"p#intro.note["Hello"], a{href=./b}["Link"]"#);
    }

    #[test]
    fn test_outline_empty_element() {
        let nodes = vec![Node::from(Element::new("hr"))];
        assert_eq!(outline(&nodes), "hr");
    }
}
