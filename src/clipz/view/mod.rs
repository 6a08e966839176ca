//! # Presentation Layer
//!
//! UI-agnostic view state. Nothing here prints; a client (the CLI, or anything
//! else) drives these types with user events and renders what they expose.
//!
//! - [`board::Board`]: the list view. Goes from `Loading` to `Ready` once, then
//!   stays `Ready`, patching its items from the results of add/delete calls.
//! - [`dialog::AddDialog`]: the creation dialog state machine.
//! - [`card::CardView`]: what a single card shows.
//!
//! Acknowledgments and failures come back as [`CmdMessage`](crate::commands::CmdMessage)s
//! for the client to show in whatever blocking way it has.

pub mod board;
pub mod card;
pub mod dialog;

pub use board::{Board, BoardState};
pub use card::{CardLayout, CardView};
pub use dialog::{AddDialog, DialogKey, DialogOutcome, DialogState};
