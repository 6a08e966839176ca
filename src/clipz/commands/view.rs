use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::ClipSelector;
use crate::storage::ClipStorage;
use crate::store::KeyValueStore;

use super::helpers::clips_by_selectors;

pub fn run<S: KeyValueStore>(
    storage: &ClipStorage<S>,
    selectors: &[ClipSelector],
) -> Result<CmdResult> {
    let clips = clips_by_selectors(storage, selectors)?;
    Ok(CmdResult::default().with_listed_clips(clips))
}
