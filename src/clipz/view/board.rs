use crate::api::ClipzApi;
use crate::clipboard::Clipboard;
use crate::commands::CmdMessage;
use crate::error::ClipzError;
use crate::model::{preview, Clip};
use crate::store::KeyValueStore;
use tracing::error;

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save the text, please try again.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete the text, please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardState {
    Loading,
    Ready(Vec<Clip>),
}

/// The list view: every clip, newest first.
///
/// After mounting, the board never re-reads storage. It trusts the results of
/// its own add/delete calls, so another process writing the same store goes
/// unnoticed until the next mount.
#[derive(Debug)]
pub struct Board {
    state: BoardState,
    preview_chars: usize,
}

impl Board {
    pub fn new(preview_chars: usize) -> Self {
        Self {
            state: BoardState::Loading,
            preview_chars,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, BoardState::Loading)
    }

    /// Clips on the board; empty while loading.
    pub fn items(&self) -> &[Clip] {
        match &self.state {
            BoardState::Loading => &[],
            BoardState::Ready(items) => items,
        }
    }

    /// True once loaded with nothing to show.
    pub fn is_empty(&self) -> bool {
        matches!(&self.state, BoardState::Ready(items) if items.is_empty())
    }

    pub fn find(&self, id: &str) -> Option<&Clip> {
        self.items().iter().find(|clip| clip.id == id)
    }

    /// Loads the clips. A failed load leaves an empty, ready board.
    pub fn mount<S: KeyValueStore>(&mut self, api: &mut ClipzApi<S>) {
        let items = match api.load_clips() {
            Ok(result) => result.listed_clips.into_iter().map(|dc| dc.clip).collect(),
            Err(e) => {
                error!(error = %e, "Error loading items");
                Vec::new()
            }
        };
        self.state = BoardState::Ready(items);
    }

    /// Saves `content` and puts the new clip at the top of the board.
    pub fn add<S: KeyValueStore>(
        &mut self,
        api: &mut ClipzApi<S>,
        content: &str,
    ) -> Result<(Clip, Vec<CmdMessage>), CmdMessage> {
        match api.add_clip(content) {
            Ok(mut result) => {
                let Some(clip) = result.affected_clips.pop() else {
                    return Err(CmdMessage::error(SAVE_FAILED_MESSAGE));
                };
                if let BoardState::Ready(items) = &mut self.state {
                    items.insert(0, clip.clone());
                }
                Ok((clip, result.messages))
            }
            Err(ClipzError::Validation(msg)) => Err(CmdMessage::warning(msg)),
            Err(e) => {
                error!(error = %e, "Failed to add item");
                Err(CmdMessage::error(SAVE_FAILED_MESSAGE))
            }
        }
    }

    /// Deletes the clip with `id` once `confirm` agrees.
    ///
    /// Returns `None` when the user declines: nothing happens and nothing is said.
    pub fn delete<S, F>(
        &mut self,
        api: &mut ClipzApi<S>,
        id: &str,
        confirm: F,
    ) -> Option<Vec<CmdMessage>>
    where
        S: KeyValueStore,
        F: FnOnce(&Clip) -> bool,
    {
        let clip = self.find(id)?.clone();
        if !confirm(&clip) {
            return None;
        }

        match api.delete_clip_by_id(id) {
            Ok(result) => {
                if let BoardState::Ready(items) = &mut self.state {
                    items.retain(|c| c.id != id);
                }
                Some(result.messages)
            }
            Err(e) => {
                error!(error = %e, id, "Failed to delete item");
                Some(vec![CmdMessage::error(DELETE_FAILED_MESSAGE)])
            }
        }
    }

    /// Copies a clip's full content. Failures are logged and produce no message.
    pub fn copy<C: Clipboard>(&self, id: &str, clipboard: &mut C) -> Option<CmdMessage> {
        let clip = self.find(id)?;
        match clipboard.copy(&clip.content) {
            Ok(()) => Some(CmdMessage::success(format!(
                "Copied to clipboard!\n\nContent: {}",
                preview(&clip.content, self.preview_chars)
            ))),
            Err(e) => {
                error!(error = %e, id, "Failed to copy");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ClipzPaths;
    use crate::commands::MessageLevel;
    use crate::config::{ClipzConfig, SampleDataPolicy};
    use crate::error::Result;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingClipboard {
        copied: Vec<String>,
        fail: bool,
    }

    impl Clipboard for RecordingClipboard {
        fn copy(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(ClipzError::Api("no clipboard".into()));
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    fn api_with(store: InMemoryStore, policy: SampleDataPolicy) -> ClipzApi<InMemoryStore> {
        let config = ClipzConfig {
            sample_data: policy,
            ..ClipzConfig::default()
        };
        ClipzApi::new(
            store,
            config,
            ClipzPaths {
                data_dir: PathBuf::from("/tmp/clipz-board"),
            },
        )
    }

    fn mounted(policy: SampleDataPolicy) -> (Board, ClipzApi<InMemoryStore>) {
        let mut api = api_with(InMemoryStore::new(), policy);
        let mut board = Board::new(100);
        board.mount(&mut api);
        (board, api)
    }

    #[test]
    fn starts_loading_then_becomes_ready() {
        let mut api = api_with(InMemoryStore::new(), SampleDataPolicy::OnEmpty);
        let mut board = Board::new(100);
        assert!(board.is_loading());
        assert!(!board.is_empty());

        board.mount(&mut api);

        assert!(!board.is_loading());
        assert_eq!(board.items().len(), 3);
    }

    #[test]
    fn mount_on_empty_store_without_samples_is_empty_state() {
        let (board, _api) = mounted(SampleDataPolicy::Never);
        assert!(board.is_empty());
    }

    #[test]
    fn add_prepends_returned_clip() {
        let (mut board, mut api) = mounted(SampleDataPolicy::OnEmpty);

        let (clip, messages) = board.add(&mut api, "  fresh  ").unwrap();

        assert_eq!(clip.content, "fresh");
        assert_eq!(board.items()[0], clip);
        assert_eq!(board.items().len(), 4);
        assert_eq!(messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn blank_add_is_rejected_and_state_kept() {
        let (mut board, mut api) = mounted(SampleDataPolicy::OnEmpty);
        let before = board.items().to_vec();

        let msg = board.add(&mut api, "   ").unwrap_err();

        assert_eq!(msg.content, "Please enter some text.");
        assert_eq!(board.items(), before.as_slice());
    }

    #[test]
    fn board_does_not_reread_storage_after_mount() {
        let (mut board, mut api) = mounted(SampleDataPolicy::Never);
        board.add(&mut api, "mine").unwrap();

        // Another writer empties the store behind the board's back
        let _ = api.delete_clip_by_id(&board.items()[0].id.clone());

        assert_eq!(board.items().len(), 1);
    }

    #[test]
    fn declined_delete_does_nothing() {
        let (mut board, mut api) = mounted(SampleDataPolicy::OnEmpty);
        let id = board.items()[0].id.clone();

        let outcome = board.delete(&mut api, &id, |_| false);

        assert!(outcome.is_none());
        assert_eq!(board.items().len(), 3);
        assert_eq!(api.list_clips().unwrap().listed_clips.len(), 3);
    }

    #[test]
    fn confirmed_delete_removes_from_board_and_store() {
        let (mut board, mut api) = mounted(SampleDataPolicy::OnEmpty);
        let id = board.items()[1].id.clone();

        let mut asked_about = None;
        board.delete(&mut api, &id, |clip| {
            asked_about = Some(clip.id.clone());
            true
        });

        assert_eq!(asked_about.as_deref(), Some(id.as_str()));
        let ids: Vec<&str> = board.items().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(api.list_clips().unwrap().listed_clips.len(), 2);
    }

    #[test]
    fn deleting_the_only_clip_shows_empty_state() {
        let (mut board, mut api) = mounted(SampleDataPolicy::Never);
        let (clip, _) = board.add(&mut api, "only one").unwrap();

        board.delete(&mut api, &clip.id, |_| true);

        assert!(board.is_empty());
        assert!(api.list_clips().unwrap().listed_clips.is_empty());
    }

    #[test]
    fn delete_of_unknown_id_never_asks() {
        let (mut board, mut api) = mounted(SampleDataPolicy::OnEmpty);
        let outcome = board.delete(&mut api, "nope", |_| panic!("should not ask"));
        assert!(outcome.is_none());
    }

    #[test]
    fn copy_acknowledges_with_preview() {
        let (mut board, mut api) = mounted(SampleDataPolicy::Never);
        let long = "q".repeat(130);
        let (clip, _) = board.add(&mut api, &long).unwrap();
        let mut clipboard = RecordingClipboard::default();

        let msg = board.copy(&clip.id, &mut clipboard).unwrap();

        assert_eq!(clipboard.copied, vec![long]);
        assert!(msg.content.starts_with("Copied to clipboard!"));
        assert!(msg.content.ends_with(&format!("{}...", "q".repeat(100))));
    }

    #[test]
    fn copy_of_short_clip_has_no_ellipsis() {
        let (board, _api) = mounted(SampleDataPolicy::OnEmpty);
        let mut clipboard = RecordingClipboard::default();
        let msg = board.copy("2", &mut clipboard).unwrap();
        assert!(!msg.content.ends_with("..."));
    }

    #[test]
    fn failed_copy_is_silent() {
        let (board, _api) = mounted(SampleDataPolicy::OnEmpty);
        let mut clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        assert!(board.copy("1", &mut clipboard).is_none());
    }
}
