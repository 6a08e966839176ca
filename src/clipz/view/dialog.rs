use crate::commands::add::EMPTY_CONTENT_MESSAGE;
use crate::commands::CmdMessage;
use crate::model::Clip;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open,
    Submitting,
}

/// Keys the dialog reacts to. Everything else is text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKey {
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Nothing to submit; the dialog stays open with its text
    Invalid(CmdMessage),
    /// Saved and closed
    Saved(Clip, Vec<CmdMessage>),
    /// The save failed; the dialog is open again with the text kept
    Failed(CmdMessage),
    /// Submit while closed or already submitting
    Ignored,
}

/// The "add text" dialog.
///
/// `Closed -> Open -> Submitting -> Closed`, with `Submitting -> Open` when
/// the save fails. While submitting, nothing closes the dialog.
#[derive(Debug)]
pub struct AddDialog {
    state: DialogState,
    text: String,
    max_chars: usize,
}

impl AddDialog {
    pub fn new(max_chars: usize) -> Self {
        Self {
            state: DialogState::Closed,
            text: String::new(),
            max_chars,
        }
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != DialogState::Closed
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Opens with an empty text. Opening an open dialog keeps its text.
    pub fn open(&mut self) {
        if self.state == DialogState::Closed {
            self.text.clear();
            self.state = DialogState::Open;
        }
    }

    /// Replaces the text, cut to `max_chars` characters. Ignored unless open.
    pub fn input(&mut self, text: &str) {
        if self.state != DialogState::Open {
            return;
        }
        self.text = text.chars().take(self.max_chars).collect();
    }

    pub fn cancel(&mut self) {
        self.close_unless_submitting();
    }

    pub fn key(&mut self, key: DialogKey) {
        match key {
            DialogKey::Escape => self.close_unless_submitting(),
        }
    }

    pub fn backdrop_click(&mut self) {
        self.close_unless_submitting();
    }

    /// Submits the text through `save`.
    ///
    /// Blank text never reaches `save`. On success the dialog closes and its
    /// text is cleared; on failure it reopens with the text intact.
    pub fn submit<F>(&mut self, save: F) -> DialogOutcome
    where
        F: FnOnce(&str) -> Result<(Clip, Vec<CmdMessage>), CmdMessage>,
    {
        if self.state != DialogState::Open {
            return DialogOutcome::Ignored;
        }
        if self.text.trim().is_empty() {
            return DialogOutcome::Invalid(CmdMessage::warning(EMPTY_CONTENT_MESSAGE));
        }

        self.state = DialogState::Submitting;
        match save(&self.text) {
            Ok((clip, messages)) => {
                self.text.clear();
                self.state = DialogState::Closed;
                DialogOutcome::Saved(clip, messages)
            }
            Err(msg) => {
                self.state = DialogState::Open;
                DialogOutcome::Failed(msg)
            }
        }
    }

    fn close_unless_submitting(&mut self) {
        if self.state == DialogState::Open {
            self.text.clear();
            self.state = DialogState::Closed;
        }
    }
}
