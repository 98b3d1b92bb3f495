//! Name resolution
//!
//! Resolves a query to a bookmark in this order:
//!
//! 1. An exact name match wins outright.
//! 2. Otherwise every bookmark whose name starts with the query is a
//!    candidate. Candidates are ordered by name length, then by name. The
//!    shortest candidate wins unless another candidate has the same length,
//!    in which case the query is ambiguous.

use std::collections::HashMap;

use crate::error::{BookmarkError, BookmarkResult};
use crate::models::Bookmark;

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The resolved bookmark
    pub best: Bookmark,
    /// All prefix matches in (length, name) order; empty for an exact match
    pub candidates: Vec<Bookmark>,
}

impl MatchResult {
    pub fn is_exact(&self) -> bool {
        self.candidates.is_empty()
    }
}

pub(crate) fn resolve(data: &HashMap<String, String>, query: &str) -> BookmarkResult<MatchResult> {
    if let Some(path) = data.get(query) {
        return Ok(MatchResult {
            best: Bookmark::new(query, path.as_str()),
            candidates: Vec::new(),
        });
    }

    let mut candidates: Vec<Bookmark> = data
        .iter()
        .filter(|(name, _)| name.starts_with(query))
        .map(|(name, path)| Bookmark::new(name.as_str(), path.as_str()))
        .collect();

    if candidates.is_empty() {
        return Err(BookmarkError::PrefixNotFound(query.to_string()));
    }

    sort_by_length_then_name(&mut candidates);

    let shortest = candidates[0].name.len();
    let tied = candidates
        .iter()
        .take_while(|b| b.name.len() == shortest)
        .count();

    if tied > 1 {
        return Err(BookmarkError::MoreThanOneMatch {
            prefix: query.to_string(),
            candidates,
        });
    }

    Ok(MatchResult {
        best: candidates[0].clone(),
        candidates,
    })
}

fn sort_by_length_then_name(bookmarks: &mut [Bookmark]) {
    bookmarks.sort_by(|a, b| {
        a.name
            .len()
            .cmp(&b.name.len())
            .then_with(|| a.name.cmp(&b.name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sample() -> HashMap<String, String> {
        data(&[
            ("aaa", "bbb"),
            ("aab1", "ccc"),
            ("aab2", "ddd"),
            ("abc", "eee"),
        ])
    }

    #[test]
    fn test_exact_match() {
        let result = resolve(&sample(), "aaa").unwrap();
        assert_eq!(result.best, Bookmark::new("aaa", "bbb"));
        assert!(result.candidates.is_empty());
        assert!(result.is_exact());
    }

    #[test]
    fn test_exact_match_beats_shorter_prefix_candidates() {
        let d = data(&[("ab", "1"), ("abc", "2"), ("abcd", "3")]);
        let result = resolve(&d, "abc").unwrap();
        assert_eq!(result.best.path, "2");
        assert!(result.is_exact());
    }

    #[test]
    fn test_prefix_not_found() {
        let err = resolve(&sample(), "b").unwrap_err();
        assert_eq!(err, BookmarkError::PrefixNotFound("b".into()));

        let err = resolve(&sample(), "zzz").unwrap_err();
        assert_eq!(err, BookmarkError::PrefixNotFound("zzz".into()));
    }

    #[test]
    fn test_prefix_not_found_on_empty_data() {
        let err = resolve(&HashMap::new(), "a").unwrap_err();
        assert!(matches!(err, BookmarkError::PrefixNotFound(_)));
    }

    #[test]
    fn test_shortest_wins() {
        let result = resolve(&sample(), "aa").unwrap();
        assert_eq!(result.best, Bookmark::new("aaa", "bbb"));
        assert_eq!(
            result.candidates,
            vec![
                Bookmark::new("aaa", "bbb"),
                Bookmark::new("aab1", "ccc"),
                Bookmark::new("aab2", "ddd"),
            ]
        );
    }

    #[test]
    fn test_single_prefix_match() {
        let result = resolve(&sample(), "ab").unwrap();
        assert_eq!(result.best, Bookmark::new("abc", "eee"));
        assert_eq!(result.candidates, vec![Bookmark::new("abc", "eee")]);
        assert!(!result.is_exact());
    }

    #[test]
    fn test_tie_is_ambiguous() {
        let err = resolve(&sample(), "aab").unwrap_err();
        assert_eq!(
            err,
            BookmarkError::MoreThanOneMatch {
                prefix: "aab".into(),
                candidates: vec![Bookmark::new("aab1", "ccc"), Bookmark::new("aab2", "ddd")],
            }
        );
    }

    #[test]
    fn test_three_way_tie_reports_all_candidates() {
        let d = data(&[("xa", "1"), ("xc", "3"), ("xb", "2"), ("xlong", "4")]);
        let err = resolve(&d, "x").unwrap_err();
        let names: Vec<_> = err.candidates().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["xa", "xb", "xc", "xlong"]);
    }

    #[test]
    fn test_tie_behind_unique_shortest_is_not_ambiguous() {
        let d = data(&[("p", "0"), ("pa", "1"), ("pb", "2")]);
        let result = resolve(&d, "").unwrap();
        assert_eq!(result.best.name, "p");
        assert_eq!(result.candidates.len(), 3);
    }
}
