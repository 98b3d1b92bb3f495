//! Bookmark filters
//!
//! A filter decides whether a bookmark is kept in a listing. Filters passed
//! together to [`Bookmarks::list_with_filters`](crate::Bookmarks::list_with_filters)
//! are combined with AND.

use crate::models::Bookmark;

/// Predicate over a bookmark
pub trait BookmarkFilter {
    fn accept(&self, bookmark: &Bookmark) -> bool;
}

impl<F> BookmarkFilter for F
where
    F: Fn(&Bookmark) -> bool,
{
    fn accept(&self, bookmark: &Bookmark) -> bool {
        self(bookmark)
    }
}

/// Keeps bookmarks whose name starts with a prefix
#[derive(Debug, Clone)]
pub struct PrefixFilter {
    prefix: String,
}

impl PrefixFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl BookmarkFilter for PrefixFilter {
    fn accept(&self, bookmark: &Bookmark) -> bool {
        bookmark.name.starts_with(&self.prefix)
    }
}

/// Keeps bookmarks whose path lies under a directory
///
/// This is a plain string prefix test on the stored path.
#[derive(Debug, Clone)]
pub struct ChildrenDirFilter {
    dir: String,
}

impl ChildrenDirFilter {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

impl BookmarkFilter for ChildrenDirFilter {
    fn accept(&self, bookmark: &Bookmark) -> bool {
        bookmark.path.starts_with(&self.dir)
    }
}
