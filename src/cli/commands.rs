//! CLI command definitions

use crate::domain::MAX_WINDOW_DAYS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodj")]
#[command(about = "Command-line mood journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Entries file (overrides MOODJ_FILE and the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Config file (default: MOODJ_CONFIG or ./moodj.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a journal entry
    Add {
        /// Mood from 1 (worst) to 10 (best)
        #[arg(short, long)]
        mood: String,

        /// Entry date (YYYY-MM-DD, today, yesterday, monday, ...); default today
        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short, long, default_value = "")]
        notes: String,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// List entries, newest first
    List {
        /// Only entries on this date
        #[arg(long, conflicts_with_all = ["range", "tag"])]
        date: Option<String>,

        /// Only entries in "<date> to <date>" (inclusive)
        #[arg(long, conflicts_with = "tag")]
        range: Option<String>,

        /// Only entries carrying this tag (case-insensitive)
        #[arg(long)]
        tag: Option<String>,

        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one entry in full
    Show {
        /// Position from `list` or entry id
        target: String,
    },

    /// Change fields of an entry; omitted fields are kept
    Edit {
        /// Position from `list` or entry id
        target: String,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        mood: Option<String>,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        notes: Option<String>,

        /// Comma-separated tags, replacing the current ones
        #[arg(long)]
        tags: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Position from `list` or entry id
        target: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Mood statistics (default: the configured number of recent days)
    Stats {
        /// "<date> to <date>" (inclusive)
        #[arg(long, conflicts_with = "days")]
        range: Option<String>,

        /// Number of days ending today
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_DAYS)))]
        days: Option<u32>,
    },

    /// Write all entries to a text file
    Export {
        /// Destination file
        path: PathBuf,
    },

    /// Delete every entry and the entries file
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the effective configuration
    Config,

    /// Interactive menu (the default without a command)
    Menu,
}
