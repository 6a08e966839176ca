use crate::error::{ClipzError, Result};
use crate::index::{find, index_clips, ClipSelector, DisplayClip};
use crate::storage::ClipStorage;
use crate::store::KeyValueStore;

pub fn indexed_clips<S: KeyValueStore>(storage: &ClipStorage<S>) -> Vec<DisplayClip> {
    index_clips(storage.list())
}

/// Resolves every selector against the current collection.
///
/// Fails on the first selector that matches nothing.
pub fn clips_by_selectors<S: KeyValueStore>(
    storage: &ClipStorage<S>,
    selectors: &[ClipSelector],
) -> Result<Vec<DisplayClip>> {
    let indexed = indexed_clips(storage);

    selectors
        .iter()
        .map(|sel| {
            find(&indexed, sel)
                .cloned()
                .ok_or_else(|| ClipzError::Api(format!("Clip {} not found", sel)))
        })
        .collect()
}
