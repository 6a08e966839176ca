//! Initial board load.
//!
//! Loading is a plain list, except that an empty collection may be replaced by
//! the sample clips, depending on [`SampleDataPolicy`]. With `on-empty`, a user
//! who deletes every clip sees the samples again on the next load.

use crate::commands::CmdResult;
use crate::config::SampleDataPolicy;
use crate::error::Result;
use crate::index::index_clips;
use crate::samples::sample_clips;
use crate::storage::{ClipStorage, SEEDED_MARKER_SUFFIX};
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};
use tracing::{debug, error};

pub fn run<S: KeyValueStore>(
    storage: &mut ClipStorage<S>,
    policy: SampleDataPolicy,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let mut clips = storage.list();

    let should_seed = match policy {
        SampleDataPolicy::OnEmpty => clips.is_empty(),
        SampleDataPolicy::FirstRun => {
            let first_run = !has_seeded_marker(storage);
            if first_run {
                mark_seeded(storage);
            }
            first_run && clips.is_empty()
        }
        SampleDataPolicy::Never => false,
    };

    if should_seed {
        clips = sample_clips(now);
        storage.persist(&clips);
        debug!(count = clips.len(), "seeded sample clips");
    }

    Ok(CmdResult::default().with_listed_clips(index_clips(clips)))
}

fn marker_key<S: KeyValueStore>(storage: &ClipStorage<S>) -> String {
    format!("{}{}", storage.entry_key(), SEEDED_MARKER_SUFFIX)
}

fn has_seeded_marker<S: KeyValueStore>(storage: &ClipStorage<S>) -> bool {
    matches!(storage.store().get_item(&marker_key(storage)), Ok(Some(_)))
}

fn mark_seeded<S: KeyValueStore>(storage: &mut ClipStorage<S>) {
    let key = marker_key(storage);
    let stamp = crate::model::timestamp::format(&Utc::now());
    if let Err(e) = storage.store_mut().set_item(&key, &stamp) {
        error!(key = %key, error = %e, "Error saving sample-data marker");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use chrono::Duration;

    fn empty() -> ClipStorage<InMemoryStore> {
        ClipStorage::new(InMemoryStore::new())
    }

    #[test]
    fn empty_store_seeds_three_samples() {
        let mut storage = empty();
        let now = Utc::now();
        let result = run(&mut storage, SampleDataPolicy::OnEmpty, now).unwrap();

        let ids: Vec<&str> = result
            .listed_clips
            .iter()
            .map(|dc| dc.clip.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        let ages: Vec<Duration> = result
            .listed_clips
            .iter()
            .map(|dc| now - dc.clip.created_at)
            .collect();
        assert_eq!(
            ages,
            vec![
                Duration::minutes(30),
                Duration::minutes(75),
                Duration::minutes(160)
            ]
        );
    }

    #[test]
    fn seeded_samples_are_persisted() {
        let mut storage = empty();
        let result = run(&mut storage, SampleDataPolicy::OnEmpty, Utc::now()).unwrap();

        let stored = storage.list();
        let listed: Vec<_> = result.listed_clips.into_iter().map(|dc| dc.clip).collect();
        assert_eq!(stored, listed);
    }

    #[test]
    fn non_empty_store_is_left_alone() {
        let mut storage = ClipStorage::new(StoreFixture::new().with_clips(1).build());
        let before = storage.raw();

        let result = run(&mut storage, SampleDataPolicy::OnEmpty, Utc::now()).unwrap();

        assert_eq!(result.listed_clips.len(), 1);
        assert_eq!(storage.raw(), before);
    }

    #[test]
    fn on_empty_reseeds_after_everything_was_deleted() {
        let mut storage = empty();
        let first = run(&mut storage, SampleDataPolicy::OnEmpty, Utc::now()).unwrap();
        for dc in &first.listed_clips {
            storage.delete(&dc.clip.id);
        }

        let second = run(&mut storage, SampleDataPolicy::OnEmpty, Utc::now()).unwrap();
        assert_eq!(second.listed_clips.len(), 3);
    }

    #[test]
    fn first_run_seeds_only_once() {
        let mut storage = empty();
        let first = run(&mut storage, SampleDataPolicy::FirstRun, Utc::now()).unwrap();
        assert_eq!(first.listed_clips.len(), 3);
        for dc in &first.listed_clips {
            storage.delete(&dc.clip.id);
        }

        let second = run(&mut storage, SampleDataPolicy::FirstRun, Utc::now()).unwrap();
        assert!(second.listed_clips.is_empty());
    }

    #[test]
    fn first_run_with_existing_data_never_seeds_later() {
        let mut storage = ClipStorage::new(StoreFixture::new().with_clip("9", "mine").build());
        run(&mut storage, SampleDataPolicy::FirstRun, Utc::now()).unwrap();
        storage.delete("9");

        let result = run(&mut storage, SampleDataPolicy::FirstRun, Utc::now()).unwrap();
        assert!(result.listed_clips.is_empty());
    }

    #[test]
    fn never_policy_does_not_seed() {
        let mut storage = empty();
        let result = run(&mut storage, SampleDataPolicy::Never, Utc::now()).unwrap();
        assert!(result.listed_clips.is_empty());
        assert!(storage.raw().is_none());
    }

    #[test]
    fn corrupt_store_loads_as_samples() {
        let mut storage = ClipStorage::new(StoreFixture::new().with_raw("[{broken").build());
        let result = run(&mut storage, SampleDataPolicy::OnEmpty, Utc::now()).unwrap();
        assert_eq!(result.listed_clips.len(), 3);
    }

    #[test]
    fn unavailable_store_still_shows_samples() {
        let mut storage = ClipStorage::new(InMemoryStore::unavailable());
        let result = run(&mut storage, SampleDataPolicy::OnEmpty, Utc::now()).unwrap();
        assert_eq!(result.listed_clips.len(), 3);
    }
}
