//! # Rendering
//!
//! Turns view state and command results into styled terminal text.
//!
//! Every public `render_*` function detects color support on stdout; the
//! `*_with_color` variants take an explicit choice and are what the tests use,
//! so assertions never deal with ANSI codes.

use super::styles::{names, CLIPZ_THEME};
use super::templates::{BOARD, CONFIG, FULL_CLIP, MESSAGES, TEMPLATES, TEXT_LIST};
use chrono::{DateTime, Utc};
use clipz::api::{CmdMessage, MessageLevel};
use clipz::config::{ClipzConfig, CONFIG_KEYS};
use clipz::index::DisplayClip;
use clipz::view::card::{chars_label, time_ago};
use clipz::view::{Board, CardLayout, CardView};
use console::Term;
use minijinja::{Environment, Error, Value};
use serde::Serialize;

pub const LINE_WIDTH: usize = 100;
pub const CARD_INDENT: &str = "    ";
pub const HEADER: &str = "📋 Clipboard Manager";
pub const EMPTY_TITLE: &str = "📝 No saved text yet";
pub const EMPTY_HINT: &str = "Run `clipz add <text>` to save your first piece of text.";
pub const FADE_MARKER: &str = "···";
/// Placeholder cards shown while the board loads
pub const PLACEHOLDER_CARDS: usize = 3;

#[derive(Serialize)]
struct BoardData {
    header: &'static str,
    empty: bool,
    empty_title: &'static str,
    empty_hint: &'static str,
    cards: Vec<CardView>,
    indent: &'static str,
    fade_marker: &'static str,
}

#[derive(Serialize)]
struct FullClipEntry {
    index: usize,
    id: String,
    time_ago: String,
    chars_label: String,
    content: String,
}

#[derive(Serialize)]
struct FullClipData {
    clips: Vec<FullClipEntry>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

fn colors_supported() -> bool {
    Term::stdout().features().colors_supported()
}

/// Card geometry for the current terminal.
pub fn card_layout(card_lines: usize) -> CardLayout {
    let columns = Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(LINE_WIDTH);
    CardLayout::new(
        columns.min(LINE_WIDTH).saturating_sub(CARD_INDENT.len()),
        card_lines,
    )
}

fn environment(use_color: bool) -> Result<Environment<'static>, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        CLIPZ_THEME.apply(&name, &value.to_string(), use_color)
    });
    for (name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

fn render_template<T: Serialize>(name: &str, data: &T, use_color: bool) -> Result<String, Error> {
    let env = environment(use_color)?;
    env.get_template(name)?.render(data)
}

pub fn render_board(board: &Board, layout: CardLayout, now: DateTime<Utc>) -> String {
    render_board_with_color(board, layout, now, colors_supported())
}

pub fn render_board_with_color(
    board: &Board,
    layout: CardLayout,
    now: DateTime<Utc>,
    use_color: bool,
) -> String {
    let cards = if board.is_loading() {
        vec![CardView::placeholder(); PLACEHOLDER_CARDS]
    } else {
        board
            .items()
            .iter()
            .enumerate()
            .map(|(i, clip)| CardView::from_clip(clip, i + 1, now, layout))
            .collect()
    };

    let data = BoardData {
        header: HEADER,
        empty: board.is_empty(),
        empty_title: EMPTY_TITLE,
        empty_hint: EMPTY_HINT,
        cards,
        indent: CARD_INDENT,
        fade_marker: FADE_MARKER,
    };

    render_template(BOARD, &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_full_clips(clips: &[DisplayClip], now: DateTime<Utc>) -> String {
    render_full_clips_with_color(clips, now, colors_supported())
}

pub fn render_full_clips_with_color(
    clips: &[DisplayClip],
    now: DateTime<Utc>,
    use_color: bool,
) -> String {
    let data = FullClipData {
        clips: clips
            .iter()
            .map(|dc| FullClipEntry {
                index: dc.index,
                id: dc.clip.id.clone(),
                time_ago: time_ago(dc.clip.created_at, now),
                chars_label: chars_label(dc.clip.char_count()),
                content: dc.clip.content.clone(),
            })
            .collect(),
    };

    render_template(FULL_CLIP, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_with_color(messages, colors_supported())
}

pub fn render_messages_with_color(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout using the template system.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_config(config: &ClipzConfig) -> String {
    render_config_with_color(config, colors_supported())
}

pub fn render_config_with_color(config: &ClipzConfig, use_color: bool) -> String {
    let data = ConfigData {
        entries: CONFIG_KEYS
            .iter()
            .map(|&key| ConfigEntry {
                key,
                value: config.get(key).unwrap_or_default(),
            })
            .collect(),
    };

    render_template(CONFIG, &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    render_text_list_with_color(lines, empty_message, colors_supported())
}

pub fn render_text_list_with_color(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_template(TEXT_LIST, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}
