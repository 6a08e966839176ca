//! # Clipz Architecture
//!
//! Clipz keeps short pieces of text ("clips") on a board of cards: add one,
//! copy it back, delete it. The library holds everything except the terminal;
//! the `clipz` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, prompts the user    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation Layer (view/)                                 │
//! │  - Board, creation dialog and card state                    │
//! │  - Turns API results into user-facing messages              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Command Layer (commands/*.rs)         │
//! │  - Thin facade, selectors parsed into ClipSelectors         │
//! │  - Validation, seeding, structured CmdResults               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Adapter (storage.rs) over a KeyValueStore (store/) │
//! │  - One JSON array under one key, newest first               │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! The storage adapter never fails from the caller's point of view. A missing
//! or corrupt entry reads as an empty collection and a failed write is logged
//! and dropped. Only validation and selector errors travel up as
//! [`error::ClipzError`].
//!
//! ## Testing Strategy
//!
//! Commands and the adapter carry most of the unit tests, run against
//! [`store::memory::InMemoryStore`] and its fixtures. The view types are tested
//! as plain state machines. The binary is covered by `tests/` through
//! `assert_cmd`.
//!
//! ## Module Overview
//!
//! - **[`api`]**: facade, the entry point for clients
//! - **[`commands`]**: one module per operation
//! - **[`view`]**: board, dialog and card state
//! - **[`storage`]**: collection adapter over a key-value store
//! - **[`store`]**: key-value backends
//! - **[`model`]**: `Clip` and its wire format
//! - **[`index`]**: display indexes and selectors
//! - **[`config`]**: user settings
//! - **[`samples`]**: the sample clips shown on first use
//! - **[`clipboard`]**, **[`editor`]**: OS integration
//! - **[`error`]**: error type

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod model;
pub mod samples;
pub mod storage;
pub mod store;
pub mod view;
