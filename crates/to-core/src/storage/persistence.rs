//! Bookmark file persistence
//!
//! Bookmarks are stored as a single JSON object mapping name to path:
//!
//! ```text
//! {"proj":"/home/me/src/proj","dl":"/home/me/Downloads"}
//! ```
//!
//! The whole file is rewritten on every save, through a temp file and a
//! rename so the target is never left half-written.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::{StorageError, StorageResult};
use crate::bookmarks::Bookmarks;
use crate::config::Config;

/// Reads and writes the bookmark file
#[derive(Debug, Clone)]
pub struct JsonPersistence {
    path: PathBuf,
}

impl JsonPersistence {
    /// Create a persistence handler for an explicit file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a persistence handler for the configured database file
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.db_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the bookmark file exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load bookmarks from disk
    ///
    /// A file that cannot be opened (typically: first run) yields an empty
    /// map. A file that opens but cannot be read or parsed is an error.
    pub fn load(&self) -> StorageResult<Bookmarks> {
        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) => {
                if e.kind() == io::ErrorKind::NotFound {
                    debug!("No bookmark file at {:?}, starting empty", self.path);
                } else {
                    warn!("Cannot open {:?} ({}), starting empty", self.path, e);
                }
                return Ok(Bookmarks::new());
            }
        };

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|source| StorageError::ReadError {
                path: self.path.clone(),
                source,
            })?;

        let bookmarks: Bookmarks =
            serde_json::from_str(&content).map_err(|source| StorageError::InvalidFormat {
                path: self.path.clone(),
                source,
            })?;

        debug!("Loaded {} bookmarks from {:?}", bookmarks.len(), self.path);
        Ok(bookmarks)
    }

    /// Save bookmarks to disk, replacing the previous file
    pub fn save(&self, bookmarks: &Bookmarks) -> StorageResult<()> {
        let bytes = serde_json::to_vec(bookmarks).map_err(StorageError::Serialize)?;
        atomic_write(&self.path, &bytes)?;
        debug!("Saved {} bookmarks to {:?}", bookmarks.len(), self.path);
        Ok(())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|e| StorageError::from_io(e, path.to_path_buf()))?;

    Ok(())
}
