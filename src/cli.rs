use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::storage::paths::ENV_DATA_DIR;

#[derive(Parser)]
#[command(name = "duke")]
#[command(about = "Duke - A terminal-based task manager for todos, deadlines and events", long_about = None)]
pub struct Cli {
    /// Directory holding tasks.json and history.jsonl
    #[arg(long, global = true, env = ENV_DATA_DIR)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive console session (default)
    Repl,

    /// Launch interactive TUI
    Tui,

    /// Run a single command, e.g. `duke exec deadline report /by 2021-08-04 2359`
    Exec {
        /// Command text
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },
}
