use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::storage::ClipStorage;
use crate::store::KeyValueStore;

/// Reports where the clip collection is stored.
pub fn run<S: KeyValueStore>(storage: &ClipStorage<S>) -> Result<CmdResult> {
    match storage.entry_path() {
        Some(path) => Ok(CmdResult::default().with_paths(vec![path])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!(
                "Clips are kept in memory under '{}'",
                storage.entry_key()
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileStore;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    #[test]
    fn file_store_reports_entry_file() {
        let dir = TempDir::new().unwrap();
        let storage = ClipStorage::new(FileStore::new(dir.path().to_path_buf()));

        let result = run(&storage).unwrap();
        assert_eq!(
            result.paths,
            vec![dir.path().join("clipboard-items.json")]
        );
    }

    #[test]
    fn memory_store_has_no_path() {
        let storage = ClipStorage::new(InMemoryStore::new());
        let result = run(&storage).unwrap();
        assert!(result.paths.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
