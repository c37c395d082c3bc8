//! Journal service: the entry collection plus its persistence

use crate::application::selection::EntryTarget;
use crate::domain::export::write_entries;
use crate::domain::{
    parse_date, parse_tags, DateRange, EntryCollection, JournalEntry, Mood, MoodStats,
};
use crate::error::{MoodjError, Result};
use crate::infrastructure::EntryRepository;
use chrono::NaiveDate;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use uuid::Uuid;

/// Raw operator input for a new entry
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub date: Option<String>,
    pub mood: String,
    pub title: String,
    pub notes: String,
    pub tags: Option<String>,
}

/// A created entry, and whether its date fell back to today.
///
/// The entry is in the collection even when `save_error` is set; it is
/// written by the next successful save.
#[derive(Debug)]
pub struct Added {
    pub entry: JournalEntry,
    pub date_fallback: bool,
    pub save_error: Option<MoodjError>,
}

/// Raw operator input for an edit. `None` or blank leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub date: Option<String>,
    pub mood: Option<String>,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<String>,
}

impl EntryUpdate {
    pub fn is_empty(&self) -> bool {
        [&self.date, &self.mood, &self.title, &self.notes, &self.tags]
            .iter()
            .all(|f| given(f).is_none())
    }
}

fn given(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.trim().is_empty())
}

/// Which entries a listing shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    All,
    OnDate(NaiveDate),
    Range(DateRange),
    Tag(String),
}

/// Owns the entries for the life of the process.
///
/// Every successful mutation is saved immediately. When a save fails the
/// mutation stays applied in memory and the `Save` error is returned.
pub struct JournalService<R: EntryRepository> {
    repository: R,
    entries: EntryCollection,
}

impl<R: EntryRepository> JournalService<R> {
    /// Load entries through the repository. The second value is a warning
    /// to show the operator when loading degraded.
    pub fn open(repository: R) -> (Self, Option<String>) {
        let outcome = repository.load();
        let service = JournalService {
            repository,
            entries: EntryCollection::new(outcome.entries),
        };
        (service, outcome.warning)
    }

    pub fn entries(&self) -> &EntryCollection {
        &self.entries
    }

    pub fn location(&self) -> &Path {
        self.repository.location()
    }

    pub fn save(&self) -> Result<()> {
        self.repository.save(self.entries.as_slice())
    }

    /// Save on the way out, unless the journal is empty and has no file.
    /// Keeps an exit right after `reset` from writing back an empty file.
    pub fn sync(&self) -> Result<()> {
        if self.entries.is_empty() && !self.location().exists() {
            log::debug!("nothing to write to {}", self.location().display());
            return Ok(());
        }
        self.save()
    }

    /// Validate and append a new entry. Only validation errors are returned
    /// as `Err`; a failed save is reported through `Added::save_error`.
    pub fn add(&mut self, new: NewEntry, today: NaiveDate) -> Result<Added> {
        let mood: Mood = new.mood.parse()?;

        let (date, date_fallback) = match given(&new.date) {
            None => (today, false),
            Some(raw) => match parse_date(raw, today) {
                Ok(date) => (date, false),
                Err(_) => (today, true),
            },
        };

        let tags = new.tags.as_deref().map(parse_tags).unwrap_or_default();
        let entry = JournalEntry::new(date, mood, new.title.trim(), new.notes, tags);

        log::debug!("adding entry {} dated {}", entry.id, entry.date);
        self.entries.push(entry.clone());
        let save_error = self.save().err();

        Ok(Added {
            entry,
            date_fallback,
            save_error,
        })
    }

    pub fn list(&self, listing: &Listing) -> Result<Vec<&JournalEntry>> {
        Ok(match listing {
            Listing::All => self.entries.sorted(),
            Listing::OnDate(date) => self.entries.on_date(*date),
            Listing::Range(range) => self.entries.in_range(range),
            Listing::Tag(tag) => self.entries.with_tag(tag)?,
        })
    }

    pub fn get(&self, id: Uuid) -> Result<&JournalEntry> {
        self.entries.get(id).ok_or(MoodjError::EntryNotFound(id))
    }

    /// Resolve a target against the ids last shown, checking it still exists
    pub fn resolve(&self, target: EntryTarget, shown: &[Uuid]) -> Result<Uuid> {
        let id = target.resolve(shown)?;
        self.get(id).map(|e| e.id)
    }

    /// Replace the given fields of one entry. Nothing changes unless every
    /// supplied field is valid.
    pub fn edit(&mut self, id: Uuid, update: EntryUpdate, today: NaiveDate) -> Result<JournalEntry> {
        let mut entry = self.get(id)?.clone();

        if let Some(raw) = given(&update.date) {
            entry.date = parse_date(raw, today)?;
        }
        if let Some(raw) = given(&update.mood) {
            entry.mood = raw.parse()?;
        }
        if let Some(raw) = given(&update.title) {
            entry.title = raw.trim().to_string();
        }
        if let Some(raw) = given(&update.notes) {
            entry.notes = raw.to_string();
        }
        if let Some(raw) = given(&update.tags) {
            entry.tags = parse_tags(raw);
        }

        self.entries.replace(entry.clone())?;
        log::debug!("edited entry {}", id);
        self.save()?;
        Ok(entry)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<JournalEntry> {
        let removed = self.entries.remove(id)?;
        log::debug!("deleted entry {}", id);
        self.save()?;
        Ok(removed)
    }

    /// Drop every entry and the backing file
    pub fn reset(&mut self) -> Result<()> {
        self.entries.clear();
        self.repository.remove()?;
        log::info!("journal reset: {}", self.location().display());
        Ok(())
    }

    /// Write every entry, newest first, to `destination`
    pub fn export(&self, destination: &Path) -> Result<usize> {
        let export_err = |source: std::io::Error| MoodjError::Export {
            path: destination.to_path_buf(),
            source,
        };

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(export_err)?;
            }
        }

        let file = File::create(destination).map_err(export_err)?;
        let mut writer = BufWriter::new(file);
        let count = write_entries(&mut writer, self.entries.sorted()).map_err(export_err)?;

        log::debug!("exported {} entries to {}", count, destination.display());
        Ok(count)
    }

    pub fn stats(&self, range: DateRange) -> MoodStats {
        MoodStats::compute(self.entries.as_slice(), range)
    }
}
