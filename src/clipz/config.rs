use crate::error::{ClipzError, Result};
use crate::storage::{DEFAULT_STORAGE_KEY, SEEDED_MARKER_SUFFIX};
use crate::store::validate_key;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PREVIEW_CHARS: usize = 100;
const DEFAULT_MAX_CONTENT_CHARS: usize = 5000;
const DEFAULT_CARD_LINES: usize = 4;

/// Keys accepted by `clipz config`, in display order.
pub const CONFIG_KEYS: [&str; 5] = [
    "storage-key",
    "preview-chars",
    "max-content-chars",
    "sample-data",
    "card-lines",
];

/// When the sample clips get written into an empty store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SampleDataPolicy {
    /// Every time the collection is found empty on load
    #[default]
    OnEmpty,
    /// Only the first time the store is ever loaded
    FirstRun,
    Never,
}

impl fmt::Display for SampleDataPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SampleDataPolicy::OnEmpty => "on-empty",
            SampleDataPolicy::FirstRun => "first-run",
            SampleDataPolicy::Never => "never",
        };
        f.write_str(s)
    }
}

impl FromStr for SampleDataPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "on-empty" => Ok(SampleDataPolicy::OnEmpty),
            "first-run" => Ok(SampleDataPolicy::FirstRun),
            "never" => Ok(SampleDataPolicy::Never),
            other => Err(format!(
                "Invalid sample-data value: {} (expected on-empty, first-run or never)",
                other
            )),
        }
    }
}

/// Configuration for clipz, stored in `config.json` inside the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClipzConfig {
    /// Store key holding the clip collection
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Characters shown in copy/save acknowledgments
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// Input cap of the creation dialog
    #[serde(default = "default_max_content_chars")]
    pub max_content_chars: usize,

    #[serde(default)]
    pub sample_data: SampleDataPolicy,

    /// Content lines shown per card before it fades out
    #[serde(default = "default_card_lines")]
    pub card_lines: usize,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

fn default_max_content_chars() -> usize {
    DEFAULT_MAX_CONTENT_CHARS
}

fn default_card_lines() -> usize {
    DEFAULT_CARD_LINES
}

impl Default for ClipzConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
            sample_data: SampleDataPolicy::default(),
            card_lines: DEFAULT_CARD_LINES,
        }
    }
}

impl ClipzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ClipzError::Io)?;
        let mut config: ClipzConfig =
            serde_json::from_str(&content).map_err(ClipzError::Serialization)?;
        if let Err(e) = validate_storage_key(&config.storage_key) {
            warn!(key = %config.storage_key, error = %e, "Ignoring unusable storage key");
            config.storage_key = default_storage_key();
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ClipzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ClipzError::Serialization)?;
        fs::write(config_path, content).map_err(ClipzError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "preview-chars" => Some(self.preview_chars.to_string()),
            "max-content-chars" => Some(self.max_content_chars.to_string()),
            "sample-data" => Some(self.sample_data.to_string()),
            "card-lines" => Some(self.card_lines.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "storage-key" => {
                validate_storage_key(value).map_err(|e| e.to_string())?;
                self.storage_key = value.to_string();
            }
            "preview-chars" => self.preview_chars = parse_positive(key, value)?,
            "max-content-chars" => self.max_content_chars = parse_positive(key, value)?,
            "sample-data" => self.sample_data = value.parse()?,
            "card-lines" => self.card_lines = parse_positive(key, value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

/// A storage key must be a valid store key that collides with neither the
/// config file nor a seeding marker.
pub fn validate_storage_key(key: &str) -> Result<()> {
    validate_key(key)?;
    let stem = CONFIG_FILENAME.trim_end_matches(".json");
    if key.eq_ignore_ascii_case(stem) || key.ends_with(SEEDED_MARKER_SUFFIX) {
        return Err(ClipzError::Store(format!("Reserved store key: {:?}", key)));
    }
    Ok(())
}

fn parse_positive(key: &str, value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} must be a positive number, got: {}", key, value)),
    }
}
