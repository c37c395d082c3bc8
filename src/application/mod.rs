//! Application layer - Use cases and orchestration

pub mod journal;
pub mod selection;

pub use journal::{Added, EntryUpdate, JournalService, Listing, NewEntry};
pub use selection::EntryTarget;
