//! Domain layer - Entry model, filters and aggregation

pub mod collection;
pub mod date_input;
pub mod entry;
pub mod export;
pub mod range;
pub mod stats;

pub use collection::EntryCollection;
pub use date_input::{parse_date, DateInput};
pub use entry::{parse_tags, JournalEntry, Mood};
pub use range::{DateRange, MAX_WINDOW_DAYS};
pub use stats::{MoodStats, TagStats};
