use crate::error::{ClipzError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;
use uuid::Uuid;

/// How an editor session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// The editor exited normally; holds the buffer as written
    Saved(String),
    /// The editor exited with a non-zero status (e.g. `:cq` in vim)
    Aborted,
}

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(ClipzError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
///
/// The editor setting may carry arguments (`code --wait`), so it is split on
/// whitespace before spawning.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<EditorOutcome> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| ClipzError::Api("Editor command is empty".to_string()))?;

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| ClipzError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Ok(EditorOutcome::Aborted);
    }

    let text = fs::read_to_string(path).map_err(ClipzError::Io)?;
    Ok(EditorOutcome::Saved(text))
}

/// Opens an editor on a temporary file holding `initial`.
pub fn edit_text(initial: &str) -> Result<EditorOutcome> {
    let temp_file = env::temp_dir().join(format!("clipz-{}.txt", Uuid::new_v4()));
    fs::write(&temp_file, initial).map_err(ClipzError::Io)?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);
    result
}
