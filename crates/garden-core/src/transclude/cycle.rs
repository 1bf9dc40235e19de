/*
 * cycle.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::slug::Slug;

/// Tracks the chain of documents on the current resolution path.
///
/// The chain starts with the page being rendered. Entering a document that
/// is already on the chain means the content would include itself.
/// Leaving a document removes it again, so two sibling placeholders that
/// inline the same target are not mistaken for a cycle.
#[derive(Debug, Clone)]
pub struct CycleGuard {
    path: Vec<Slug>,
}

impl CycleGuard {
    pub fn new(page: Slug) -> Self {
        Self { path: vec![page] }
    }

    /// The page being rendered.
    pub fn page(&self) -> &Slug {
        &self.path[0]
    }

    /// The document whose content is currently being walked.
    pub fn current(&self) -> &Slug {
        &self.path[self.path.len() - 1]
    }

    pub fn contains(&self, slug: &Slug) -> bool {
        self.path.contains(slug)
    }

    /// Push `slug` onto the path. Returns `false`, leaving the path
    /// unchanged, when `slug` is already on it.
    pub fn enter(&mut self, slug: &Slug) -> bool {
        if self.contains(slug) {
            return false;
        }
        self.path.push(slug.clone());
        true
    }

    /// Pop the most recently entered document. The page itself stays.
    pub fn exit(&mut self) -> Option<Slug> {
        if self.path.len() > 1 {
            self.path.pop()
        } else {
            None
        }
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_on_path() {
        let guard = CycleGuard::new(Slug::new("a"));
        assert!(guard.contains(&Slug::new("a")));
        assert_eq!(guard.page(), guard.current());
    }

    #[test]
    fn test_enter_and_exit() {
        let mut guard = CycleGuard::new(Slug::new("a"));
        assert!(guard.enter(&Slug::new("b")));
        assert_eq!(guard.current(), &Slug::new("b"));
        assert!(!guard.enter(&Slug::new("a")));
        assert!(!guard.enter(&Slug::new("b")));
        assert_eq!(guard.depth(), 2);

        assert_eq!(guard.exit(), Some(Slug::new("b")));
        assert!(guard.enter(&Slug::new("b")));
    }

    #[test]
    fn test_exit_keeps_page() {
        let mut guard = CycleGuard::new(Slug::new("a"));
        assert_eq!(guard.exit(), None);
        assert_eq!(guard.page(), &Slug::new("a"));
    }
}
