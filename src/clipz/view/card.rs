use crate::model::Clip;
use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LOADING_TITLE: &str = "Loading...";
pub const LOADING_CHARS: &str = "-- chars";

/// Card geometry, in terminal columns and content lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub width: usize,
    pub max_lines: usize,
}

impl CardLayout {
    pub fn new(width: usize, max_lines: usize) -> Self {
        Self {
            width: width.max(1),
            max_lines: max_lines.max(1),
        }
    }
}

/// What one card on the board shows.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CardView {
    pub index: Option<usize>,
    pub id: Option<String>,
    pub time_ago: String,
    pub chars_label: String,
    pub lines: Vec<String>,
    /// More content exists than `lines` shows
    pub overflow: bool,
    pub placeholder: bool,
}

impl CardView {
    pub fn from_clip(clip: &Clip, index: usize, now: DateTime<Utc>, layout: CardLayout) -> Self {
        let all_lines = wrap(&clip.content, layout.width);
        let overflow = all_lines.len() > layout.max_lines;
        let lines = all_lines.into_iter().take(layout.max_lines).collect();

        Self {
            index: Some(index),
            id: Some(clip.id.clone()),
            time_ago: time_ago(clip.created_at, now),
            chars_label: chars_label(clip.char_count()),
            lines,
            overflow,
            placeholder: false,
        }
    }

    /// The card shown while the board is loading.
    pub fn placeholder() -> Self {
        Self {
            index: None,
            id: None,
            time_ago: LOADING_TITLE.to_string(),
            chars_label: LOADING_CHARS.to_string(),
            lines: Vec::new(),
            overflow: false,
            placeholder: true,
        }
    }
}

pub fn chars_label(count: usize) -> String {
    format!("{} chars", count)
}

/// "30 minutes ago" style age. Future timestamps read as "now".
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(created_at);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

/// Word-wraps `text` to `width` columns. Explicit newlines are kept, words
/// wider than a line are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(!line.is_empty());

            if line_width + gap + word_width <= width {
                if gap == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += gap + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if line_width + w > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += w;
            }
        }

        lines.push(line);
    }

    lines
}
