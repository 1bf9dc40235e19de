/*
 * slug.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document identifiers and relative URL arithmetic.
 */

//! Document identifiers and relative URL arithmetic.
//!
//! A [`Slug`] is the full, globally unique identifier of a document:
//! a `/`-separated path without a leading slash, such as `notes/rust`,
//! `notes/index` or `index`. Pages are served from their simplified slug,
//! so `notes/index` lives at `notes/` and `index` at the site root.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Create a slug, trimming any surrounding slashes.
    pub fn new(slug: impl AsRef<str>) -> Self {
        Slug(slug.as_ref().trim_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Segments of the folder enclosing this document.
    pub fn folder(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = self.segments().collect();
        segments.pop();
        segments
    }

    /// The URL path a document is served from, relative to the site root.
    ///
    /// A trailing `index` segment is dropped: `notes/index` becomes `notes/`
    /// and `index` becomes `/`.
    pub fn simplify(&self) -> String {
        let trimmed = self.0.strip_suffix("index").unwrap_or(&self.0);
        if trimmed.is_empty() {
            "/".to_string()
        } else if trimmed.len() < self.0.len() && !trimmed.ends_with('/') {
            // `reindex` is a page, not a folder index
            self.0.clone()
        } else {
            trimmed.to_string()
        }
    }

    /// Relative path from this document back to the site root.
    ///
    /// `.` for top-level documents, one `..` per enclosing folder otherwise.
    pub fn path_to_root(&self) -> String {
        let depth = self.folder().len();
        if depth == 0 {
            ".".to_string()
        } else {
            vec![".."; depth].join("/")
        }
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Slug {
    fn from(s: String) -> Self {
        Slug::new(s)
    }
}

impl From<&str> for Slug {
    fn from(s: &str) -> Self {
        Slug::new(s)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

/// Join URL segments with single slashes.
///
/// Empty and bare `/` segments are skipped. A leading slash on the first
/// segment and a trailing slash on the last segment are preserved.
pub fn join_segments(segments: &[&str]) -> String {
    let Some(first) = segments.first() else {
        return String::new();
    };

    let mut joined = segments
        .iter()
        .filter(|s| !s.is_empty() && **s != "/")
        .map(|s| s.trim_matches('/'))
        .collect::<Vec<_>>()
        .join("/");

    if first.starts_with('/') {
        joined.insert(0, '/');
    }
    if segments.last().is_some_and(|s| s.ends_with('/')) && !joined.ends_with('/') {
        joined.push('/');
    }
    joined
}

/// URL of `target` as seen from the page of `current`.
pub fn resolve_relative(current: &Slug, target: &Slug) -> String {
    join_segments(&[&current.path_to_root(), &target.simplify()])
}

/// Whether `url` is a document-relative link that must be rebased when the
/// element carrying it moves to another document.
///
/// Relative links start with `.`; links ending in `index` and links to
/// `.md`/`.html` files are addressed differently and are left alone.
pub fn is_relative_url(url: &str) -> bool {
    url.starts_with('.')
        && !url.ends_with("index")
        && !matches!(file_extension(url), Some(".md" | ".html"))
}

fn file_extension(url: &str) -> Option<&str> {
    let dot = url.rfind('.')?;
    let ext = &url[dot..];
    (ext.len() > 1 && ext[1..].chars().all(|c| c.is_ascii_alphanumeric())).then_some(ext)
}

/// Rewrite a URL that was relative to `target` so that it resolves to the
/// same place from `current`.
///
/// The path part is resolved against the folder of `target` (collapsing
/// `.` and `..`), then prefixed with the way back to the root from
/// `current`. Query and fragment suffixes are carried over unchanged.
pub fn rebase_url(url: &str, current: &Slug, target: &Slug) -> String {
    let split = url.find(['?', '#']).unwrap_or(url.len());
    let (path, suffix) = url.split_at(split);

    let mut resolved: Vec<&str> = target.folder();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }

    let mut joined = resolved.join("/");
    if path.ends_with('/') || path == "." || path == ".." {
        joined.push('/');
    }

    let mut rebased = join_segments(&[&current.path_to_root(), &joined]);
    rebased.push_str(suffix);
    rebased
}
