//! In-memory bookmark map
//!
//! `Bookmarks` owns every name→path pair. It has no notion of files; see
//! [`JsonPersistence`](crate::storage::JsonPersistence) for loading and
//! saving, and [`Store`](crate::Store) for the load-mutate-save cycle.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{BookmarkError, BookmarkResult};
use crate::filter::BookmarkFilter;
use crate::matcher::{self, MatchResult};
use crate::models::Bookmark;

/// Name→path bookmark map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bookmarks {
    data: HashMap<String, String>,
}

impl Bookmarks {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Get the bookmark with exactly this name
    pub fn get(&self, name: &str) -> Option<Bookmark> {
        self.data
            .get(name)
            .map(|path| Bookmark::new(name, path.as_str()))
    }

    /// Add a bookmark
    ///
    /// Fails with `AlreadyExists` if the name is taken; the map is unchanged.
    pub fn add(&mut self, name: &str, path: &str) -> BookmarkResult<()> {
        if self.data.contains_key(name) {
            return Err(BookmarkError::AlreadyExists(name.to_string()));
        }
        self.data.insert(name.to_string(), path.to_string());
        Ok(())
    }

    /// Delete a bookmark
    ///
    /// Fails with `NotFound` if the name is absent; the map is unchanged.
    pub fn delete(&mut self, name: &str) -> BookmarkResult<Bookmark> {
        match self.data.remove(name) {
            Some(path) => Ok(Bookmark::new(name, path)),
            None => Err(BookmarkError::NotFound(name.to_string())),
        }
    }

    /// List bookmarks accepted by every filter, sorted by name
    pub fn list_with_filters(&self, filters: &[&dyn BookmarkFilter]) -> Vec<Bookmark> {
        let mut res: Vec<Bookmark> = self
            .data
            .iter()
            .map(|(name, path)| Bookmark::new(name.as_str(), path.as_str()))
            .filter(|bm| filters.iter().all(|f| f.accept(bm)))
            .collect();
        res.sort_by(|a, b| a.name.cmp(&b.name));
        res
    }

    /// List every bookmark, sorted by name
    pub fn list_all(&self) -> Vec<Bookmark> {
        self.list_with_filters(&[])
    }

    /// Resolve a name or name prefix
    ///
    /// See [`matcher`](crate::matcher) for the resolution rules.
    pub fn find(&self, name: &str) -> BookmarkResult<MatchResult> {
        matcher::resolve(&self.data, name)
    }
}

impl FromIterator<(String, String)> for Bookmarks {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::filter::{ChildrenDirFilter, PrefixFilter};

    fn bookmarks(entries: &[(&str, &str)]) -> Bookmarks {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_list_all() {
        let b = bookmarks(&[("aaa1", "bbb1"), ("aaa", "bbb")]);

        let got = b.list_with_filters(&[]);
        assert_eq!(
            got,
            vec![Bookmark::new("aaa", "bbb"), Bookmark::new("aaa1", "bbb1")]
        );
        assert_eq!(got.len(), b.len());
        assert_eq!(b.list_all(), got);
    }

    #[test]
    fn test_list_with_prefix_filter() {
        let b = bookmarks(&[("aaa", "bbb"), ("aaa1", "bbb1"), ("ccc", "ddd")]);

        let prefix = PrefixFilter::new("a");
        let got = b.list_with_filters(&[&prefix]);
        assert_eq!(
            got,
            vec![Bookmark::new("aaa", "bbb"), Bookmark::new("aaa1", "bbb1")]
        );
    }

    #[test]
    fn test_list_with_children_filter() {
        let b = bookmarks(&[("aaa", "bbb"), ("aaa1", "bbb1"), ("aaa2", "abb")]);

        let children = ChildrenDirFilter::new("b");
        let got = b.list_with_filters(&[&children]);
        assert_eq!(
            got,
            vec![Bookmark::new("aaa", "bbb"), Bookmark::new("aaa1", "bbb1")]
        );
    }

    #[test]
    fn test_list_with_prefix_and_children_filter() {
        let b = bookmarks(&[("aaa", "bbb"), ("aaa1", "bbb1"), ("aaa2", "abb")]);

        let prefix = PrefixFilter::new("a");
        let children = ChildrenDirFilter::new("a");
        let filters: [&dyn BookmarkFilter; 2] = [&prefix, &children];
        let got = b.list_with_filters(&filters);
        assert_eq!(got, vec![Bookmark::new("aaa2", "abb")]);
    }

    #[test]
    fn test_list_filter_order_does_not_matter() {
        let b = bookmarks(&[("aaa", "/x/1"), ("abb", "/y/2"), ("baa", "/x/3")]);

        let prefix = PrefixFilter::new("a");
        let children = ChildrenDirFilter::new("/x");
        let forward: [&dyn BookmarkFilter; 2] = [&prefix, &children];
        let backward: [&dyn BookmarkFilter; 2] = [&children, &prefix];
        assert_eq!(b.list_with_filters(&forward), b.list_with_filters(&backward));
        assert_eq!(b.list_with_filters(&forward), vec![Bookmark::new("aaa", "/x/1")]);
    }

    #[test]
    fn test_list_duplicate_filter_is_idempotent() {
        let b = bookmarks(&[("aaa", "bbb"), ("abc", "ccc"), ("bcd", "ddd")]);

        let prefix = PrefixFilter::new("a");
        let once: [&dyn BookmarkFilter; 1] = [&prefix];
        let twice: [&dyn BookmarkFilter; 2] = [&prefix, &prefix];
        assert_eq!(b.list_with_filters(&once), b.list_with_filters(&twice));
    }

    #[test]
    fn test_list_with_closure_filter() {
        let b = bookmarks(&[("aaa", "/src"), ("bbb", "/doc")]);

        let ends_with_src = |bm: &Bookmark| bm.path.ends_with("src");
        let got = b.list_with_filters(&[&ends_with_src]);
        assert_eq!(got, vec![Bookmark::new("aaa", "/src")]);
    }

    #[test]
    fn test_add() {
        let mut b = bookmarks(&[("aaa", "bbb")]);

        b.add("aaa1", "ccc").unwrap();

        assert_eq!(b, bookmarks(&[("aaa", "bbb"), ("aaa1", "ccc")]));
    }

    #[test]
    fn test_add_existing_fails_without_mutation() {
        let mut b = bookmarks(&[("aaa", "bbb")]);

        let err = b.add("aaa", "ccc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(b, bookmarks(&[("aaa", "bbb")]));
    }

    #[test]
    fn test_delete() {
        let mut b = bookmarks(&[("aaa", "bbb")]);

        let removed = b.delete("aaa").unwrap();
        assert_eq!(removed, Bookmark::new("aaa", "bbb"));
        assert!(b.is_empty());
    }

    #[test]
    fn test_delete_missing_fails_without_mutation() {
        let mut b = bookmarks(&[("aaa", "bbb")]);

        let err = b.delete("aaa1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(b, bookmarks(&[("aaa", "bbb")]));
    }

    #[test]
    fn test_distinct_names_are_independent() {
        let mut b = Bookmarks::new();
        b.add("one", "/1").unwrap();
        b.add("two", "/2").unwrap();

        assert_eq!(b.get("one"), Some(Bookmark::new("one", "/1")));
        assert_eq!(b.get("two"), Some(Bookmark::new("two", "/2")));

        b.delete("one").unwrap();
        assert!(!b.contains("one"));
        assert_eq!(b.get("two"), Some(Bookmark::new("two", "/2")));
    }

    #[test]
    fn test_find_delegates_to_matcher() {
        let b = bookmarks(&[
            ("aaa", "bbb"),
            ("aab1", "ccc"),
            ("aab2", "ddd"),
            ("abc", "eee"),
        ]);

        assert_eq!(b.find("aaa").unwrap().best, Bookmark::new("aaa", "bbb"));
        assert_eq!(b.find("aa").unwrap().best, Bookmark::new("aaa", "bbb"));
        assert_eq!(b.find("aab").unwrap_err().kind(), ErrorKind::MoreThanOneMatch);
        assert_eq!(b.find("zzz").unwrap_err().kind(), ErrorKind::PrefixNotFound);
    }

    #[test]
    fn test_serde_is_flat_object() {
        let b = bookmarks(&[("aaa", "/x")]);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"aaa":"/x"}"#);

        let parsed: Bookmarks = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, b);
    }
}
