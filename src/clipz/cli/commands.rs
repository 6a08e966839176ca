//! # CLI Commands
//!
//! One handler per subcommand. Handlers build the view state they need, call
//! into it, and print what comes back; they hold no logic of their own beyond
//! picking where input comes from.

use super::prompt::confirm;
use super::render::{
    card_layout, print_messages, render_board, render_config, render_full_clips,
    render_text_list,
};
use super::setup::{Cli, Commands};
use chrono::Utc;
use clap::Parser;
use clipz::api::{ClipzApi, ClipzPaths, CmdMessage, ConfigAction};
use clipz::clipboard::SystemClipboard;
use clipz::config::ClipzConfig;
use clipz::editor::{edit_text, EditorOutcome};
use clipz::error::{ClipzError, Result};
use clipz::model::{preview, Clip};
use clipz::store::fs::FileStore;
use clipz::view::{AddDialog, Board, DialogKey, DialogOutcome};
use directories::ProjectDirs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CLIPZ_LOG";
const CONFIRM_PREVIEW_CHARS: usize = 40;

struct AppContext {
    api: ClipzApi<FileStore>,
}

impl AppContext {
    fn config(&self) -> &ClipzConfig {
        self.api.settings()
    }

    /// A board with the collection loaded, samples included when due.
    fn mounted_board(&mut self) -> Board {
        let mut board = Board::new(self.config().preview_chars);
        board.mount(&mut self.api);
        board
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::List) => handle_list(&mut ctx),
        Some(Commands::Add { text }) => handle_add(&mut ctx, text),
        Some(Commands::View { selectors }) => handle_view(&mut ctx, &selectors),
        Some(Commands::Copy { selector }) => handle_copy(&mut ctx, &selector),
        Some(Commands::Delete { selectors, yes }) => handle_delete(&mut ctx, &selectors, yes),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "clipz=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(home) = &cli.home {
        return Ok(home.clone());
    }
    ProjectDirs::from("com", "clipz", "clipz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ClipzError::Api("Could not determine the data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir(cli)?;
    let config = ClipzConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "Unreadable config, using defaults");
        ClipzConfig::default()
    });
    debug!(data_dir = %data_dir.display(), "context ready");

    let store = FileStore::new(data_dir.clone());
    let api = ClipzApi::new(store, config, ClipzPaths { data_dir });
    Ok(AppContext { api })
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let board = ctx.mounted_board();
    let layout = card_layout(ctx.config().card_lines);
    print!("{}", render_board(&board, layout, Utc::now()));
    Ok(())
}

fn handle_add(ctx: &mut AppContext, text: Vec<String>) -> Result<()> {
    let mut board = ctx.mounted_board();
    let mut dialog = AddDialog::new(ctx.config().max_content_chars);
    dialog.open();

    let outcome = if !text.is_empty() {
        submit_text(&mut dialog, &text.join(" "), |t| board.add(&mut ctx.api, t))
    } else if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        submit_text(&mut dialog, &buffer, |t| board.add(&mut ctx.api, t))
    } else {
        let reopen = |msg: &CmdMessage| {
            print_messages(std::slice::from_ref(msg));
            confirm("Open the editor again?").unwrap_or(false)
        };
        match run_editor_dialog(&mut dialog, edit_text, reopen, |t| {
            board.add(&mut ctx.api, t)
        })? {
            Some(outcome) => outcome,
            None => return Ok(()),
        }
    };

    match outcome {
        DialogOutcome::Saved(_, messages) => {
            print_messages(&messages);
            Ok(())
        }
        DialogOutcome::Invalid(msg) => Err(ClipzError::Validation(msg.content)),
        DialogOutcome::Failed(msg) => Err(ClipzError::Api(msg.content)),
        DialogOutcome::Ignored => Ok(()),
    }
}

/// Feeds one piece of text through the dialog, warning when it gets cut.
fn submit_text<S>(dialog: &mut AddDialog, text: &str, save: S) -> DialogOutcome
where
    S: FnOnce(&str) -> std::result::Result<(Clip, Vec<CmdMessage>), CmdMessage>,
{
    warn_if_cut(dialog, text);
    dialog.input(text);
    dialog.submit(save)
}

fn warn_if_cut(dialog: &AddDialog, text: &str) {
    if text.chars().count() > dialog.max_chars() {
        print_messages(&[CmdMessage::warning(format!(
            "Text is longer than {} characters and was cut.",
            dialog.max_chars()
        ))]);
    }
}

/// Runs the dialog with an external editor as its text field.
///
/// The editor aborting is the Escape key. A rejected or failed submit asks
/// `reopen` whether to go back to the editor with the current text; declining
/// cancels the dialog. Returns `None` when the dialog was cancelled.
fn run_editor_dialog<E, R, S>(
    dialog: &mut AddDialog,
    mut edit: E,
    mut reopen: R,
    mut save: S,
) -> Result<Option<DialogOutcome>>
where
    E: FnMut(&str) -> Result<EditorOutcome>,
    R: FnMut(&CmdMessage) -> bool,
    S: FnMut(&str) -> std::result::Result<(Clip, Vec<CmdMessage>), CmdMessage>,
{
    loop {
        let text = match edit(dialog.text())? {
            EditorOutcome::Saved(text) => text,
            EditorOutcome::Aborted => {
                dialog.key(DialogKey::Escape);
                return Ok(None);
            }
        };

        warn_if_cut(dialog, &text);
        dialog.input(&text);

        match dialog.submit(&mut save) {
            DialogOutcome::Invalid(msg) | DialogOutcome::Failed(msg) => {
                if reopen(&msg) {
                    continue;
                }
                dialog.cancel();
                return Ok(None);
            }
            outcome => return Ok(Some(outcome)),
        }
    }
}

fn handle_view(ctx: &mut AppContext, selectors: &[String]) -> Result<()> {
    ctx.mounted_board();
    let result = ctx.api.view_clips(selectors)?;
    print!("{}", render_full_clips(&result.listed_clips, Utc::now()));
    Ok(())
}

fn handle_copy(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let board = ctx.mounted_board();
    let result = ctx.api.view_clips(&[selector])?;

    let mut clipboard = SystemClipboard;
    for dc in &result.listed_clips {
        if let Some(msg) = board.copy(&dc.clip.id, &mut clipboard) {
            print_messages(&[msg]);
        }
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: &[String], yes: bool) -> Result<()> {
    let mut board = ctx.mounted_board();
    // Resolve everything up front so indexes don't shift between deletes
    let targets = ctx.api.view_clips(selectors)?.listed_clips;

    for dc in targets {
        let confirmed = |clip: &Clip| {
            yes || confirm(&format!(
                "Delete this text?\n  {}. {}\n",
                dc.index,
                preview(&clip.content, CONFIRM_PREVIEW_CHARS)
            ))
            .unwrap_or(false)
        };
        if let Some(messages) = board.delete(&mut ctx.api, &dc.clip.id, confirmed) {
            print_messages(&messages);
        }
    }
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.store_path()?;
    let lines: Vec<String> = result
        .paths
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    if !lines.is_empty() {
        print!("{}", render_text_list(&lines, ""));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
