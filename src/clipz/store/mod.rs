//! # Storage Layer
//!
//! This module defines the key-value store abstraction clipz persists into. The
//! [`KeyValueStore`] trait is deliberately tiny: string keys map to string values,
//! nothing more. Everything above it (record layout, ordering, ids) lives in
//! [`crate::storage`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One file per key: `{key}.json` inside the data directory
//!   - Writes go through a temp file and a rename, so a crash never leaves a
//!     half-written entry behind
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate a write quota and an unavailable store
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! ~/.local/share/clipz/
//! ├── clipboard-items.json         # The record collection (JSON array)
//! ├── clipboard-items.seeded.json  # Sample-data marker (first-run policy only)
//! └── config.json                  # Configuration
//! ```

use crate::error::{ClipzError, Result};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// A durable, string-keyed store.
///
/// Reads of missing keys are not errors; they return `Ok(None)`.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any prior value
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is a no-op
    fn remove_item(&mut self, key: &str) -> Result<()>;

    /// Where the value for `key` lives, for stores backed by files
    fn item_path(&self, key: &str) -> Option<PathBuf>;
}

/// Keys double as file names, so they are restricted to a portable alphabet.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(ClipzError::Store(format!("Invalid store key: {:?}", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_portable_keys() {
        assert!(validate_key("clipboard-items").is_ok());
        assert!(validate_key("clipboard-items.seeded").is_ok());
        assert!(validate_key("snippets_2").is_ok());
    }

    #[test]
    fn rejects_path_like_keys() {
        assert!(validate_key("").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("with space").is_err());
    }
}
