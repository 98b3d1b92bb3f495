//! Unified storage interface
//!
//! The `Store` ties the configuration, the bookmark file and the in-memory
//! map together. Every successful mutation is written back to disk
//! immediately; failed mutations leave both memory and disk untouched.
//!
//! ## Usage
//!
//! ```ignore
//! let config = Config::load()?;
//! let mut store = Store::open_with_config(&config)?;  // Loads existing bookmarks, or none
//!
//! store.add("proj", "/home/me/src/proj")?;
//!
//! let hit = store.find("pr")?;
//! println!("{}", hit.best.path);
//! ```

use anyhow::{Context, Result};
use tracing::info;

use crate::bookmarks::Bookmarks;
use crate::config::Config;
use crate::filter::BookmarkFilter;
use crate::matcher::MatchResult;
use crate::models::Bookmark;
use crate::storage::JsonPersistence;

/// Bookmark store backed by a JSON file
pub struct Store {
    bookmarks: Bookmarks,
    persistence: JsonPersistence,
}

impl Store {
    /// Open the store with a specific configuration
    ///
    /// Creates the data directory if needed. A missing bookmark file is an
    /// empty store; a malformed one is an error.
    pub fn open_with_config(config: &Config) -> Result<Self> {
        config.ensure_data_dir()?;

        let persistence = JsonPersistence::from_config(config);
        let bookmarks = persistence.load().context("Failed to load bookmarks")?;

        Ok(Self {
            bookmarks,
            persistence,
        })
    }

    /// Read-only access to the in-memory map
    pub fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    /// Add a bookmark and save
    ///
    /// A taken name surfaces as [`BookmarkError::AlreadyExists`](crate::BookmarkError)
    /// inside the returned error.
    pub fn add(&mut self, name: &str, path: &str) -> Result<()> {
        self.bookmarks.add(name, path)?;
        self.save()?;
        info!("Added bookmark {} -> {}", name, path);
        Ok(())
    }

    /// Delete a bookmark and save
    pub fn delete(&mut self, name: &str) -> Result<Bookmark> {
        let removed = self.bookmarks.delete(name)?;
        self.save()?;
        info!("Deleted bookmark {}", name);
        Ok(removed)
    }

    /// Resolve a name or name prefix
    pub fn find(&self, name: &str) -> Result<MatchResult> {
        Ok(self.bookmarks.find(name)?)
    }

    /// List bookmarks accepted by every filter, sorted by name
    pub fn list_with_filters(&self, filters: &[&dyn BookmarkFilter]) -> Vec<Bookmark> {
        self.bookmarks.list_with_filters(filters)
    }

    /// Write the current map to disk
    pub fn save(&self) -> Result<()> {
        self.persistence
            .save(&self.bookmarks)
            .context("Failed to save bookmarks")
    }
}
