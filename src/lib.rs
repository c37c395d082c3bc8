//! moodj - Command-line mood journal
//!
//! Dated entries with a mood score, title, notes and tags, kept in a JSON
//! file. Entries can be listed, filtered by date, range or tag, edited,
//! deleted, exported as text and summarized.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodjError;
