/*
 * attr.rs
 * Copyright (c) 2025 Posit, PBC
 */

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// Element attributes, kept in insertion order.
pub type Attributes = LinkedHashMap<String, AttrValue>;

/// The value of a single element attribute.
///
/// Most attributes hold a string. Token-list attributes such as `class`
/// hold a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    List(Vec<String>),
}

impl AttrValue {
    /// The value as a string, if it is not a list.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::List(_) => None,
        }
    }

    /// Iterate over the tokens of this value.
    ///
    /// A list yields its items; a string is split on whitespace, so
    /// `class="a b"` and `class=["a", "b"]` read the same.
    pub fn tokens(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            AttrValue::Text(s) => Box::new(s.split_whitespace()),
            AttrValue::List(items) => Box::new(items.iter().map(String::as_str)),
        }
    }

    /// Render the value the way it would appear in markup.
    pub fn to_markup_string(&self) -> String {
        match self {
            AttrValue::Text(s) => s.clone(),
            AttrValue::List(items) => items.join(" "),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(items: Vec<String>) -> Self {
        AttrValue::List(items)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(items: Vec<&str>) -> Self {
        AttrValue::List(items.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_from_string_and_list() {
        let text = AttrValue::from("internal  transclude-src");
        let list = AttrValue::from(vec!["internal", "transclude-src"]);

        assert_eq!(
            text.tokens().collect::<Vec<_>>(),
            vec!["internal", "transclude-src"]
        );
        assert_eq!(
            list.tokens().collect::<Vec<_>>(),
            vec!["internal", "transclude-src"]
        );
    }

    #[test]
    fn test_as_str_only_for_text() {
        assert_eq!(AttrValue::from("./page").as_str(), Some("./page"));
        assert_eq!(AttrValue::from(vec!["a"]).as_str(), None);
    }

    #[test]
    fn test_untagged_deserialize() {
        let text: AttrValue = serde_json::from_str(r#""notes/a""#).unwrap();
        let list: AttrValue = serde_json::from_str(r#"["transclude"]"#).unwrap();

        assert_eq!(text, AttrValue::Text("notes/a".to_string()));
        assert_eq!(list, AttrValue::List(vec!["transclude".to_string()]));
    }

    #[test]
    fn test_to_markup_string() {
        assert_eq!(AttrValue::from(vec!["a", "b"]).to_markup_string(), "a b");
        assert_eq!(AttrValue::from("x").to_markup_string(), "x");
    }
}
