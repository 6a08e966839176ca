//! # Persistence Adapter
//!
//! [`ClipStorage`] is the single source of truth for the clip collection. It keeps
//! the whole collection as one JSON array under one store key and performs every
//! mutation as a full read-modify-write cycle.
//!
//! The store is treated as unreliable. Nothing in here returns an error:
//! - a missing, malformed or unreadable entry reads as an empty collection
//! - a failed write is logged and dropped
//!
//! There is no concurrency guard. Two processes adding at the same time can
//! clobber each other's write; the last writer wins.

use crate::model::Clip;
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::{debug, error};

pub const DEFAULT_STORAGE_KEY: &str = "clipboard-items";
/// Appended to the collection key to name the first-run seeding marker.
pub const SEEDED_MARKER_SUFFIX: &str = ".seeded";

pub struct ClipStorage<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ClipStorage<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn entry_key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn entry_path(&self) -> Option<PathBuf> {
        self.store.item_path(&self.key)
    }

    /// The stored string as-is, or `None` when absent or unreadable.
    pub fn raw(&self) -> Option<String> {
        self.store.get_item(&self.key).ok().flatten()
    }

    /// Reads the full collection, newest first.
    pub fn list(&self) -> Vec<Clip> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!(key = %self.key, error = %e, "Error loading clipboard items");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Clip>>(&raw) {
            Ok(clips) => clips,
            Err(e) => {
                error!(key = %self.key, error = %e, "Error loading clipboard items");
                Vec::new()
            }
        }
    }

    /// Overwrites the stored collection. Failures are logged, never returned.
    pub fn persist(&mut self, clips: &[Clip]) {
        let raw = match serde_json::to_string(clips) {
            Ok(raw) => raw,
            Err(e) => {
                error!(key = %self.key, error = %e, "Error saving clipboard items");
                return;
            }
        };
        if let Err(e) = self.store.set_item(&self.key, &raw) {
            error!(key = %self.key, error = %e, "Error saving clipboard items");
        }
    }

    /// Prepends a new clip holding the trimmed `content`.
    ///
    /// Empty content is accepted here; rejecting it is the caller's job.
    pub fn add(&mut self, content: &str) -> Clip {
        self.add_at(content, Utc::now())
    }

    pub fn add_at(&mut self, content: &str, now: DateTime<Utc>) -> Clip {
        let mut clips = self.list();
        let clip = Clip::new(next_id(now, &clips), content.trim(), now);
        clips.insert(0, clip.clone());
        self.persist(&clips);
        debug!(id = %clip.id, chars = clip.char_count(), "clip added");
        clip
    }

    /// Removes the clip with `id`. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) {
        let mut clips = self.list();
        let before = clips.len();
        clips.retain(|clip| clip.id != id);
        self.persist(&clips);
        debug!(id, removed = before - clips.len(), "clip delete");
    }
}

/// Ids are the creation time in epoch milliseconds, bumped past the largest
/// numeric id already stored so they stay unique and increasing.
///
/// A stored id of `i64::MAX` cannot be bumped and is left out of the search;
/// the new id still differs from it.
fn next_id(now: DateTime<Utc>, existing: &[Clip]) -> String {
    let now_ms = now.timestamp_millis();
    let max_existing = existing
        .iter()
        .filter_map(|clip| clip.id.parse::<i64>().ok())
        .filter_map(|id| id.checked_add(1))
        .max();
    let id = match max_existing {
        Some(next) if next > now_ms => next,
        _ => now_ms,
    };
    id.to_string()
}
