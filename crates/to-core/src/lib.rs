//! to Core Library
//!
//! This crate provides the core functionality for `to`, a directory
//! bookmarking tool: short names for filesystem paths, resolved back by exact
//! name or by the shortest unambiguous prefix.
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let mut store = Store::open_with_config(&config)?;
//!
//! // Bookmark a directory
//! store.add("proj", "/home/me/src/proj")?;
//!
//! // Resolve by prefix
//! let hit = store.find("pr")?;
//!
//! // List bookmarks under a directory
//! let under = ChildrenDirFilter::new("/home/me/src");
//! let list = store.list_with_filters(&[&under]);
//! ```
//!
//! # Modules
//!
//! - `store`: Unified storage interface (main entry point)
//! - `bookmarks`: The in-memory name→path map
//! - `matcher`: Exact-then-shortest-prefix resolution
//! - `filter`: Listing filters
//! - `models`: The `Bookmark` type
//! - `storage`: JSON file persistence
//! - `config`: Application configuration

pub mod bookmarks;
pub mod config;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod models;
pub mod storage;
pub mod store;

pub use bookmarks::Bookmarks;
pub use config::Config;
pub use error::{BookmarkError, BookmarkResult, ErrorKind};
pub use filter::{BookmarkFilter, ChildrenDirFilter, PrefixFilter};
pub use matcher::MatchResult;
pub use models::Bookmark;
pub use storage::{JsonPersistence, StorageError, StorageResult};
pub use store::Store;
