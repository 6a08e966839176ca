use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{ClipSelector, DisplayClip};
use crate::storage::ClipStorage;
use crate::store::KeyValueStore;

use super::helpers::{clips_by_selectors, indexed_clips};

const DELETED_PREVIEW_CHARS: usize = 40;

/// Deletes the clips the selectors point at. Unknown indexes are errors, and
/// nothing is deleted when any selector fails to resolve.
pub fn run<S: KeyValueStore>(
    storage: &mut ClipStorage<S>,
    selectors: &[ClipSelector],
) -> Result<CmdResult> {
    let targets = clips_by_selectors(storage, selectors)?;
    let mut result = CmdResult::default();

    for dc in targets {
        storage.delete(&dc.clip.id);
        result.add_message(deleted_message(&dc));
        result.affected_clips.push(dc.clip);
    }

    Ok(result)
}

/// Deletes by id. An id that is not stored is a no-op, not an error.
pub fn by_id<S: KeyValueStore>(storage: &mut ClipStorage<S>, id: &str) -> Result<CmdResult> {
    let existing = indexed_clips(storage)
        .into_iter()
        .find(|dc| dc.clip.id == id);
    storage.delete(id);

    let mut result = CmdResult::default();
    if let Some(dc) = existing {
        result.add_message(deleted_message(&dc));
        result.affected_clips.push(dc.clip);
    }
    Ok(result)
}

fn deleted_message(dc: &DisplayClip) -> CmdMessage {
    CmdMessage::success(format!(
        "Clip deleted ({}): {}",
        dc.index,
        crate::model::preview(&dc.clip.content, DELETED_PREVIEW_CHARS)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_by_display_index() {
        let mut storage = ClipStorage::new(StoreFixture::new().with_clips(3).build());
        let before = storage.list();

        let result = run(&mut storage, &[ClipSelector::Index(2)]).unwrap();

        assert_eq!(result.affected_clips, vec![before[1].clone()]);
        assert_eq!(storage.list(), vec![before[0].clone(), before[2].clone()]);
    }

    #[test]
    fn deletes_several_selectors_resolved_up_front() {
        let mut storage = ClipStorage::new(StoreFixture::new().with_clips(3).build());
        let before = storage.list();

        run(&mut storage, &[ClipSelector::Index(1), ClipSelector::Index(2)]).unwrap();

        assert_eq!(storage.list(), vec![before[2].clone()]);
    }

    #[test]
    fn unknown_index_fails_and_deletes_nothing() {
        let mut storage = ClipStorage::new(StoreFixture::new().with_clips(2).build());
        let before = storage.list();

        let res = run(&mut storage, &[ClipSelector::Index(1), ClipSelector::Index(9)]);

        assert!(res.is_err());
        assert_eq!(storage.list(), before);
    }

    #[test]
    fn by_id_of_absent_clip_is_noop() {
        let mut storage = ClipStorage::new(StoreFixture::new().with_clips(2).build());
        let before = storage.list();

        let result = by_id(&mut storage, "missing").unwrap();

        assert!(result.affected_clips.is_empty());
        assert_eq!(storage.list(), before);
    }

    #[test]
    fn by_id_removes_the_clip() {
        let mut storage = ClipStorage::new(StoreFixture::new().with_clip("7", "bye").build());
        let result = by_id(&mut storage, "7").unwrap();

        assert_eq!(result.affected_clips[0].content, "bye");
        assert_eq!(result.messages[0].content, "Clip deleted (1): bye");
        assert!(storage.list().is_empty());
    }
}
