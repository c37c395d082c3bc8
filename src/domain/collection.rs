//! In-memory entry collection with ordering and filters

use crate::domain::entry::JournalEntry;
use crate::domain::range::DateRange;
use crate::error::{MoodjError, Result};
use chrono::NaiveDate;
use uuid::Uuid;

/// Owns every entry. Storage order is creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryCollection {
    entries: Vec<JournalEntry>,
}

impl EntryCollection {
    pub fn new(entries: Vec<JournalEntry>) -> Self {
        EntryCollection { entries }
    }

    /// Entries in storage order
    pub fn as_slice(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    pub fn get(&self, id: Uuid) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Swap in a new value for the entry with the same id
    pub fn replace(&mut self, entry: JournalEntry) -> Result<()> {
        let slot = self
            .entries
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or(MoodjError::EntryNotFound(entry.id))?;
        *slot = entry;
        Ok(())
    }

    pub fn remove(&mut self, id: Uuid) -> Result<JournalEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(MoodjError::EntryNotFound(id))?;
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Newest date first; same-day entries newest-created first
    pub fn sorted(&self) -> Vec<&JournalEntry> {
        self.sorted_where(|_| true)
    }

    pub fn on_date(&self, date: NaiveDate) -> Vec<&JournalEntry> {
        self.sorted_where(|e| e.date == date)
    }

    pub fn in_range(&self, range: &DateRange) -> Vec<&JournalEntry> {
        self.sorted_where(|e| range.contains(e.date))
    }

    /// Entries carrying `tag`, compared case-insensitively.
    /// A leading `#` on the query is ignored.
    pub fn with_tag(&self, tag: &str) -> Result<Vec<&JournalEntry>> {
        let query = tag.trim();
        let query = query.strip_prefix('#').unwrap_or(query).trim();
        if query.is_empty() {
            return Err(MoodjError::EmptyTag);
        }
        Ok(self.sorted_where(|e| e.has_tag(query)))
    }

    fn sorted_where<F>(&self, keep: F) -> Vec<&JournalEntry>
    where
        F: Fn(&JournalEntry) -> bool,
    {
        let mut picked: Vec<(usize, &JournalEntry)> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| keep(e))
            .collect();
        picked.sort_by(|(ia, a), (ib, b)| b.date.cmp(&a.date).then(ib.cmp(ia)));
        picked.into_iter().map(|(_, e)| e).collect()
    }
}
