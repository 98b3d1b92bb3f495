//! Storage layer
//!
//! Loads and saves the bookmark map as a JSON file. The file is read in full
//! at startup and rewritten in full after every change.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::JsonPersistence;
