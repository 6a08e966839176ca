use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ClipzError, Result};
use crate::model::preview;
use crate::storage::ClipStorage;
use crate::store::KeyValueStore;

pub const EMPTY_CONTENT_MESSAGE: &str = "Please enter some text.";

/// Saves `content` as a new clip. Content that is empty once trimmed is rejected
/// before it reaches the storage adapter.
pub fn run<S: KeyValueStore>(
    storage: &mut ClipStorage<S>,
    content: &str,
    preview_chars: usize,
) -> Result<CmdResult> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ClipzError::Validation(EMPTY_CONTENT_MESSAGE.to_string()));
    }

    let clip = storage.add(trimmed);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Text saved!\n\nPreview: {}",
        preview(&clip.content, preview_chars)
    )));
    Ok(result.with_affected_clips(vec![clip]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn storage() -> ClipStorage<InMemoryStore> {
        ClipStorage::new(InMemoryStore::new())
    }

    #[test]
    fn saves_trimmed_content() {
        let mut storage = storage();
        let result = run(&mut storage, "  hello  ", 100).unwrap();

        assert_eq!(result.affected_clips.len(), 1);
        assert_eq!(result.affected_clips[0].content, "hello");
        assert_eq!(storage.list()[0].content, "hello");
    }

    #[test]
    fn rejects_blank_content_without_touching_storage() {
        let mut storage = storage();
        let err = run(&mut storage, " \n\t ", 100).unwrap_err();

        assert!(matches!(err, ClipzError::Validation(_)));
        assert!(storage.raw().is_none());
    }

    #[test]
    fn acknowledgment_carries_preview() {
        let mut storage = storage();
        let long = "z".repeat(120);
        let result = run(&mut storage, &long, 100).unwrap();

        let msg = &result.messages[0];
        assert_eq!(msg.level, crate::commands::MessageLevel::Success);
        assert!(msg.content.starts_with("Text saved!"));
        assert!(msg.content.ends_with(&format!("{}...", "z".repeat(100))));
    }

    #[test]
    fn adds_exactly_one_clip_per_call() {
        let mut storage = storage();
        run(&mut storage, "a", 100).unwrap();
        run(&mut storage, "b", 100).unwrap();

        let contents: Vec<String> = storage.list().into_iter().map(|c| c.content).collect();
        assert_eq!(contents, vec!["b", "a"]);
    }
}
