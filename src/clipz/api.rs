//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for clipz operations, whatever UI drives them.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw selector strings become [`ClipSelector`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no view state. The board in [`crate::view`]
//! keeps its own copy of the clips and updates it from what these calls return.
//!
//! ## Generic Over KeyValueStore
//!
//! `ClipzApi<S: KeyValueStore>` owns the store handle it was given:
//! - Production: `ClipzApi<FileStore>`
//! - Testing: `ClipzApi<InMemoryStore>`

use crate::commands;
use crate::config::ClipzConfig;
use crate::error::{ClipzError, Result};
use crate::index::ClipSelector;
use crate::storage::ClipStorage;
use crate::store::KeyValueStore;
use chrono::Utc;

pub struct ClipzApi<S: KeyValueStore> {
    storage: ClipStorage<S>,
    config: ClipzConfig,
    paths: commands::ClipzPaths,
}

impl<S: KeyValueStore> ClipzApi<S> {
    pub fn new(store: S, config: ClipzConfig, paths: commands::ClipzPaths) -> Self {
        let storage = ClipStorage::with_key(store, config.storage_key.clone());
        Self {
            storage,
            config,
            paths,
        }
    }

    /// Initial load for a board, seeding samples per the configured policy.
    pub fn load_clips(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.storage, self.config.sample_data, Utc::now())
    }

    pub fn list_clips(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.storage)
    }

    pub fn add_clip(&mut self, content: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.storage, content, self.config.preview_chars)
    }

    pub fn view_clips<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.storage, &selectors)
    }

    pub fn delete_clips<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.storage, &selectors)
    }

    pub fn delete_clip_by_id(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::by_id(&mut self.storage, id)
    }

    pub fn store_path(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.storage)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn settings(&self) -> &ClipzConfig {
        &self.config
    }

    pub fn paths(&self) -> &commands::ClipzPaths {
        &self.paths
    }

    pub fn storage(&self) -> &ClipStorage<S> {
        &self.storage
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ClipSelector>> {
    inputs
        .iter()
        .map(|s| s.as_ref().parse::<ClipSelector>().map_err(ClipzError::Api))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{ClipzPaths, CmdMessage, CmdResult, MessageLevel};
