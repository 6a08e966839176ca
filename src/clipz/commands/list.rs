use crate::commands::CmdResult;
use crate::error::Result;
use crate::storage::ClipStorage;
use crate::store::KeyValueStore;

use super::helpers::indexed_clips;

/// Lists the stored clips as they are, without seeding samples.
pub fn run<S: KeyValueStore>(storage: &ClipStorage<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_clips(indexed_clips(storage)))
}
