//! Data models for to
//!
//! A bookmark is a name pointing at a directory path. The path is stored as
//! given; it is never checked against the filesystem.

use serde::{Deserialize, Serialize};

/// A named directory bookmark
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Bookmark {
    /// Unique key, e.g. `proj`
    pub name: String,
    /// Target path, usually absolute
    pub path: String,
}

impl Bookmark {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
