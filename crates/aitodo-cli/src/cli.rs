//! Command-line definition (clap derive).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// aitodo - local "AI" to-do list
///
/// Categories and urgency come from a fixed keyword table; nothing leaves
/// this machine.
#[derive(Parser, Debug)]
#[command(name = "aitodo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true, env = "AITODO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Snapshot file, overrides `snapshot_path` from the config
    #[arg(long, global = true, env = "AITODO_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging (otherwise controlled by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task. Category is detected from the text unless given.
    Add {
        #[arg(required = true)]
        text: Vec<String>,

        /// work, personal, urgent or other
        #[arg(long)]
        category: Option<String>,

        /// normal or urgent
        #[arg(long)]
        priority: Option<String>,

        /// Skip detection; missing category/priority default to other/normal
        #[arg(long)]
        plain: bool,
    },

    /// Suggest a task from a seed (or from the time of day when empty)
    Suggest {
        seed: Vec<String>,

        /// Add the suggestion right away
        #[arg(long)]
        add: bool,
    },

    /// Toggle a task between active and completed
    #[command(alias = "done")]
    Toggle { id: String },

    /// Replace a task's text (blank text is ignored)
    Edit {
        id: String,

        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Re-run category and urgency detection on a task's current text
    Reclassify { id: String },

    /// Delete a task
    #[command(alias = "rm")]
    Delete { id: String },

    /// Remove every completed task
    ClearCompleted,

    /// List tasks
    #[command(alias = "ls")]
    List {
        /// all, active or completed
        #[arg(long, default_value = "all")]
        filter: String,
    },

    /// Write all tasks to todo-export-<date>.json
    Export {
        /// Target directory, overrides `export_dir` from the config
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Print the document instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Show totals and completion percentage
    Stats,
}
