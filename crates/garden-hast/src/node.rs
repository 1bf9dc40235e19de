/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Element tree nodes.
 */

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

use crate::attr::{AttrValue, Attributes};

pub const ANCHOR: &str = "a";
pub const BLOCKQUOTE: &str = "blockquote";
pub const HEADING_1: &str = "h1";
pub const LIST_ITEM: &str = "li";
pub const PARAGRAPH: &str = "p";
pub const UNORDERED_LIST: &str = "ul";

/// A node in a rendered document tree.
///
/// Serialized untagged: an element is `{ "tag", "attributes", "children" }`
/// and a text leaf is `{ "text" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(Text),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "LinkedHashMap::is_empty")]
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
}

/// The root of a rendered document: an ordered sequence of top-level nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Root {
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            text: value.into(),
        })
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(t) => t.text.clone(),
            Node::Element(el) => el.text_content(),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: append a class to the `class` token list.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let mut classes: Vec<String> = self.classes().map(String::from).collect();
        classes.push(class.into());
        self.set_attr("class", classes);
        self
    }

    /// Builder: append a child node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builder: append a text child.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::text(text));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// A string-valued attribute. List-valued attributes return `None`.
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(AttrValue::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.replace(name.into(), value.into());
    }

    pub fn id(&self) -> Option<&str> {
        self.attr_str("id")
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").into_iter().flat_map(AttrValue::tokens)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Heading depth for `h1`..`h6` (1 is the highest level), `None` otherwise.
    pub fn heading_depth(&self) -> Option<u8> {
        match self.tag.as_str() {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            "h5" => Some(5),
            "h6" => Some(6),
            _ => None,
        }
    }

    pub fn is_list_item(&self) -> bool {
        self.tag == LIST_ITEM
    }

    /// The first child that is an element.
    pub fn first_element_child(&self) -> Option<&Element> {
        self.children.iter().find_map(Node::as_element)
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_accessors() {
        let el = Element::new("blockquote")
            .with_class("transclude")
            .with_class("internal")
            .with_attr("data-block", "#^quote1")
            .with_text("body");

        assert!(el.has_class("transclude"));
        assert!(el.has_class("internal"));
        assert!(!el.has_class("callout"));
        assert_eq!(el.attr_str("data-block"), Some("#^quote1"));
        assert_eq!(el.attr_str("class"), None);
        assert_eq!(el.text_content(), "body");
    }

    #[test]
    fn test_heading_depth() {
        assert_eq!(Element::new("h1").heading_depth(), Some(1));
        assert_eq!(Element::new("h6").heading_depth(), Some(6));
        assert_eq!(Element::new("h7").heading_depth(), None);
        assert_eq!(Element::new("th1").heading_depth(), None);
        assert_eq!(Element::new("p").heading_depth(), None);
    }

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut el = Element::new("a")
            .with_attr("href", "./one")
            .with_attr("title", "t");
        el.set_attr("href", "./two");

        let keys: Vec<&str> = el.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["href", "title"]);
        assert_eq!(el.attr_str("href"), Some("./two"));
    }

    #[test]
    fn test_first_element_child_skips_text() {
        let el = Element::new("blockquote")
            .with_text("\n")
            .with_child(Element::new("a").with_attr("href", "./b"));

        assert_eq!(el.first_element_child().map(|c| c.tag.as_str()), Some("a"));
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "children": [
                { "tag": "p", "attributes": { "id": "x", "class": ["a", "b"] },
                  "children": [ { "text": "Hello" } ] },
                { "text": "tail" }
            ]
        }"#;
        let root: Root = serde_json::from_str(json).unwrap();

        assert_eq!(root.children.len(), 2);
        let p = root.children[0].as_element().unwrap();
        assert_eq!(p.tag, "p");
        assert_eq!(p.id(), Some("x"));
        assert_eq!(p.classes().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(root.children[1], Node::text("tail"));
    }

    #[test]
    fn test_serialize_omits_empty_fields() {
        let node = Node::from(Element::new("hr"));
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"tag":"hr"}"#);
    }
}
