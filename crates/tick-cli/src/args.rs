use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CategoryCommands, HistoryCommands, ItemCommands, ListCommands};

/// Command-line interface for the tick checklist manager
///
/// Tick keeps every checklist as a markdown document under a data directory,
/// split into active lists, saved templates and history. Items carry a
/// tri-state check mark, a priority and optional comments.
#[derive(Parser)]
#[command(version, about, name = "tick")]
pub struct Args {
    /// Data directory holding the checklist documents. Defaults to
    /// $XDG_DATA_HOME/tick
    #[arg(long, global = true, env = "TICK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the tick CLI
///
/// With no command, the active lists are shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage checklists
    #[command(alias = "l")]
    List {
        #[command(subcommand)]
        command: ListCommands,
    },
    /// Manage the items of a checklist
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Manage categories
    #[command(alias = "c")]
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Manage the history partition
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Show list and item counts
    Stats,
    /// Show checklists with a target date, soonest first
    Targets,
    /// Check every document and the category registry for problems
    Check,
    /// Print every checklist and category as JSON
    Export,
}
