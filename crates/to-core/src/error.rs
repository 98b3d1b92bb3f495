//! Bookmark operation errors
//!
//! These are ordinary results of store operations (duplicate name, missing
//! name, unresolvable prefix). They are never fatal inside the library; the
//! caller decides how to report them.

use thiserror::Error;

use crate::models::Bookmark;

/// Category of a [`BookmarkError`], for callers that only need to branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PrefixNotFound,
    AlreadyExists,
    MoreThanOneMatch,
}

/// Errors returned by bookmark operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookmarkError {
    /// Delete of a name that is not bookmarked
    #[error("bookmark {0} not found")]
    NotFound(String),

    /// No bookmark name begins with the query
    #[error("bookmark with prefix {0:?} not found")]
    PrefixNotFound(String),

    /// Add of a name that is already bookmarked
    #[error("bookmark {0} already exists")]
    AlreadyExists(String),

    /// Two or more equally short names begin with the query
    ///
    /// `candidates` holds every prefix match, sorted by (length, name).
    #[error("bookmark with {prefix:?} prefix has more than 1 matches")]
    MoreThanOneMatch {
        prefix: String,
        candidates: Vec<Bookmark>,
    },
}

impl BookmarkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookmarkError::NotFound(_) => ErrorKind::NotFound,
            BookmarkError::PrefixNotFound(_) => ErrorKind::PrefixNotFound,
            BookmarkError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            BookmarkError::MoreThanOneMatch { .. } => ErrorKind::MoreThanOneMatch,
        }
    }

    /// Candidates of an ambiguous match, empty for every other kind
    pub fn candidates(&self) -> &[Bookmark] {
        match self {
            BookmarkError::MoreThanOneMatch { candidates, .. } => candidates,
            _ => &[],
        }
    }
}

/// Result type for bookmark operations
pub type BookmarkResult<T> = Result<T, BookmarkError>;
