use crate::error::{ClipzError, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Something text can be copied into.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard, reached through the platform's copy tool.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses wl-copy, xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to(&[Tool::new("pbcopy", &[])], text)
    }

    #[cfg(target_os = "linux")]
    {
        pipe_to(
            &[
                Tool::new("wl-copy", &[]),
                Tool::new("xclip", &["-selection", "clipboard"]),
                Tool::new("xsel", &["--clipboard", "--input"]),
            ],
            text,
        )
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to(&[Tool::new("clip", &[])], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(ClipzError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

/// A copy command line.
#[allow(dead_code)]
struct Tool {
    program: &'static str,
    args: &'static [&'static str],
}

#[allow(dead_code)]
impl Tool {
    const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

/// Tries each tool in turn until one takes `text` and exits cleanly.
#[allow(dead_code)]
fn pipe_to(tools: &[Tool], text: &str) -> Result<()> {
    let mut failures = Vec::new();

    for tool in tools {
        match run_tool(tool, text) {
            Ok(()) => return Ok(()),
            Err(e) => {
                debug!(program = tool.program, error = %e, "clipboard tool failed");
                failures.push(e);
            }
        }
    }

    let names: Vec<&str> = tools.iter().map(|t| t.program).collect();
    Err(ClipzError::Api(format!(
        "No clipboard tool worked ({}). Install one of: {}",
        failures.join("; "),
        names.join(", ")
    )))
}

#[allow(dead_code)]
fn run_tool(tool: &Tool, text: &str) -> std::result::Result<(), String> {
    let program = tool.program;
    let mut child = Command::new(program)
        .args(tool.args.iter())
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| format!("{}: {}", program, e))?;

    // The child is always reaped, even when the write fails.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child
        .wait()
        .map_err(|e| format!("{}: failed to wait: {}", program, e))?;

    if !status.success() {
        return Err(format!("{} exited with {}", program, status));
    }
    written.map_err(|e| format!("{}: failed to write: {}", program, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tools_report_every_candidate() {
        let err = pipe_to(
            &[
                Tool::new("clipz-no-such-tool-a", &[]),
                Tool::new("clipz-no-such-tool-b", &["--flag"]),
            ],
            "text",
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("clipz-no-such-tool-a"));
        assert!(msg.contains("clipz-no-such-tool-b"));
    }

    #[cfg(unix)]
    #[test]
    fn failing_tool_falls_through_to_the_next() {
        let result = pipe_to(
            &[
                Tool::new("false", &[]),
                Tool::new("sh", &["-c", "cat > /dev/null"]),
            ],
            "text",
        );
        assert!(result.is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn every_failure_is_reported() {
        let err = pipe_to(
            &[Tool::new("false", &[]), Tool::new("clipz-no-such-tool", &[])],
            "text",
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("false exited with"));
        assert!(msg.contains("clipz-no-such-tool"));
    }
}
