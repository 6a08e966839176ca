use crate::config::ClipzConfig;
use crate::index::DisplayClip;
use crate::model::Clip;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod load;
pub mod paths;
pub mod view;

#[derive(Debug, Clone)]
pub struct ClipzPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_clips: Vec<Clip>,
    pub listed_clips: Vec<DisplayClip>,
    pub paths: Vec<PathBuf>,
    pub config: Option<ClipzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_clips(mut self, clips: Vec<Clip>) -> Self {
        self.affected_clips = clips;
        self
    }

    pub fn with_listed_clips(mut self, clips: Vec<DisplayClip>) -> Self {
        self.listed_clips = clips;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: ClipzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
