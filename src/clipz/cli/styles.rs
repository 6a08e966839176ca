//! Styles for the clipz CLI.
//!
//! Templates never name colors. They name what a piece of text *is* (a card
//! index, a timestamp, an error) through the `style` filter, and the theme maps
//! those names to `console` styles. Changing the look means changing this file
//! only.
//!
//! An unknown style name renders with a `(!?)` marker in front, so a typo in a
//! template shows up in the output instead of silently dropping the style.
//! The theme is built once through `once_cell::sync::Lazy`.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const HEADER: &str = "header";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const TIME: &str = "time";
    pub const INDEX: &str = "index";
    pub const CONTENT: &str = "content";
    pub const FADE: &str = "fade";
    pub const CHARS: &str = "chars";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const EMPTY: &str = "empty";
    pub const KEY: &str = "key";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

/// Named `console` styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style. ANSI codes are only emitted with `use_color`.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static CLIPZ_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    let accent = Style::new().color256(214);

    Theme::new()
        .add(names::HEADER, Style::new().bold())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, Style::new().color256(240))
        .add(names::TIME, muted.clone().italic())
        .add(names::INDEX, accent.clone().bold())
        .add(names::CONTENT, Style::new())
        .add(names::FADE, Style::new().color256(240))
        .add(names::CHARS, muted.clone())
        .add(names::PLACEHOLDER, muted.clone().italic())
        .add(names::EMPTY, muted)
        .add(names::KEY, accent)
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, Style::new().color256(245))
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_returns_text_unchanged() {
        assert_eq!(CLIPZ_THEME.apply(names::ERROR, "boom", false), "boom");
    }

    #[test]
    fn color_mode_emits_ansi() {
        let styled = CLIPZ_THEME.apply(names::SUCCESS, "ok", true);
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("ok"));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(CLIPZ_THEME.apply("typo", "hi", false), "(!?) hi");
    }
}
