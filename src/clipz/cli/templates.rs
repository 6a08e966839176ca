//! # CLI Templates
//!
//! Output is rendered from minijinja templates kept as standalone files, so
//! they can be edited and diffed apart from the code, and embedded here as
//! string constants.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`: a line holding
//! only a block tag produces no output, every other line produces exactly one.
//! Layout math (wrapping, widths, relative times) happens in Rust; templates
//! only place the results and pick styles by name.

/// Every template, registered under its file name so templates can include
/// each other.
pub const TEMPLATES: [(&str, &str); 6] = [
    (BOARD, include_str!("templates/board.tmp")),
    (CARD, include_str!("templates/card.tmp")),
    (FULL_CLIP, include_str!("templates/full_clip.tmp")),
    (MESSAGES, include_str!("templates/messages.tmp")),
    (CONFIG, include_str!("templates/config.tmp")),
    (TEXT_LIST, include_str!("templates/text_list.tmp")),
];

pub const BOARD: &str = "board.tmp";
pub const CARD: &str = "card.tmp";
pub const FULL_CLIP: &str = "full_clip.tmp";
pub const MESSAGES: &str = "messages.tmp";
pub const CONFIG: &str = "config.tmp";
pub const TEXT_LIST: &str = "text_list.tmp";
