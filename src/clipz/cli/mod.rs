//! # CLI
//!
//! This is **one possible UI client** for clipz. It is the only place that
//! knows about terminal I/O, prompts and exit codes.
//!
//! ## The Board in a Terminal
//!
//! Running `clipz` with no arguments shows the board, the same as `clipz list`.
//! Cards are numbered newest first and commands take those numbers
//! (`clipz copy 1`) or an explicit id (`clipz copy id:1714557630123`).
//!
//! ## Where `add` Gets Its Text
//!
//! 1. **Arguments**: `clipz add some text`
//! 2. **Piped input**: `pbpaste | clipz add`
//! 3. **Editor**: `clipz add` on a terminal opens `$EDITOR`. Quitting the
//!    editor with an error status cancels; saving nothing offers to reopen it.
//!
//! ## Module Structure
//!
//! - `commands`: per-command handlers
//! - `prompt`: yes/no confirmation
//! - `render`: template rendering
//! - `setup`: argument parsing via clap
//! - `styles`: the theme
//! - `templates`: embedded templates

mod commands;
mod prompt;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
