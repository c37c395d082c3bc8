//! Error types for moodj

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Main error type for moodj
#[derive(Debug, Error)]
pub enum MoodjError {
    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("No tag entered")]
    EmptyTag,

    #[error("Entry not found: {0}")]
    EntryNotFound(Uuid),

    #[error("Position {position} is out of range (1-{count})")]
    PositionOutOfRange { position: usize, count: usize },

    #[error("Invalid entry reference: {0}")]
    InvalidTarget(String),

    #[error("Failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to export to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl MoodjError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodjError::InvalidMood(_)
            | MoodjError::InvalidDate(_)
            | MoodjError::InvalidRange(_)
            | MoodjError::EmptyTag
            | MoodjError::InvalidTarget(_) => 3,
            MoodjError::EntryNotFound(_) | MoodjError::PositionOutOfRange { .. } => 4,
            _ => 1,
        }
    }

    /// Whether the error came from bad operator input (as opposed to I/O)
    pub fn is_validation(&self) -> bool {
        self.exit_code() == 3
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodjError::InvalidMood(value) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Mood must be a whole number from 1 (worst) to 10 (best).\n\
                    Example: moodj add --mood 7 --title \"Ok day\"",
                    value
                )
            }
            MoodjError::InvalidDate(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • YYYY-MM-DD (e.g., 2025-01-17) or YYYY/MM/DD\n\
                    • today, yesterday, tomorrow\n\
                    • monday, ..., sunday (most recent, today included)\n\
                    • last monday, last friday, etc.",
                    value
                )
            }
            MoodjError::InvalidRange(msg) => {
                format!(
                    "Invalid date range: {}\n\n\
                    Expected format: <date> to <date>\n\
                    Example: moodj list --range \"2025-01-01 to 2025-01-31\"",
                    msg
                )
            }
            MoodjError::PositionOutOfRange { .. } | MoodjError::EntryNotFound(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Run 'moodj list' to see current positions\n\
                    • Refer to an entry by its full id instead",
                    self
                )
            }
            MoodjError::TomlDeserialize(e) => {
                format!(
                    "Failed to parse config file: {}\n\n\
                    Valid keys: data_file, stats_days",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodjError
pub type Result<T> = std::result::Result<T, MoodjError>;
