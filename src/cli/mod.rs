//! CLI layer - Command-line interface

pub mod commands;
pub mod menu;
pub mod output;

pub use commands::{Cli, Commands};
pub use menu::{confirm, Menu};
pub use output::{format_entry_detail, format_entry_list, format_stats};
