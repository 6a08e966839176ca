use super::{validate_key, KeyValueStore};
use crate::error::{ClipzError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const ENTRY_EXT: &str = ".json";

/// Key-value store keeping one file per key inside a data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}{}", key, ENTRY_EXT))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ClipzError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ClipzError::Io)?;
        Ok(Some(content))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.ensure_dir()?;

        let target = self.entry_path(key);
        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(ClipzError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ClipzError::Io(e));
        }
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(ClipzError::Io)?;
        }
        Ok(())
    }

    fn item_path(&self, key: &str) -> Option<PathBuf> {
        validate_key(key).ok()?;
        Some(self.entry_path(key))
    }
}
