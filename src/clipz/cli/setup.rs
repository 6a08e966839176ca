use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clipz", bin_name = "clipz", version)]
#[command(about = "Keep short pieces of text around and copy them back", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true, env = "CLIPZ_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the board
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Save a new piece of text
    #[command(visible_alias = "a", alias = "n", display_order = 2)]
    Add {
        /// Text to save (read from stdin or the editor when omitted)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Show clips in full
    #[command(alias = "v", display_order = 3)]
    View {
        /// Indexes of the clips (e.g. 1 2 id:1714557630123)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Copy a clip to the system clipboard
    #[command(alias = "cp", display_order = 4)]
    Copy {
        /// Index of the clip (e.g. 1 or id:1714557630123)
        selector: String,
    },

    /// Delete one or more clips
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Indexes of the clips (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Print the path of the file holding the clips
    #[command(display_order = 6)]
    Path,

    /// Get or set configuration
    #[command(display_order = 7)]
    Config {
        /// Configuration key (e.g., preview-chars)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
