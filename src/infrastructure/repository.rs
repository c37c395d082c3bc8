//! JSON file persistence for journal entries

use crate::domain::JournalEntry;
use crate::error::{MoodjError, Result};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Result of loading the backing store.
///
/// Loading never fails outright: an unreadable store yields no entries and a
/// warning for the operator.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub entries: Vec<JournalEntry>,
    pub warning: Option<String>,
}

/// Abstract persistence for the entry collection
pub trait EntryRepository {
    /// Where the entries live, for messages
    fn location(&self) -> &Path;

    /// Read every entry; missing or broken storage yields an empty list
    fn load(&self) -> LoadOutcome;

    /// Replace the stored entries with `entries`
    fn save(&self, entries: &[JournalEntry]) -> Result<()>;

    /// Delete the backing storage; absent storage is not an error
    fn remove(&self) -> Result<()>;
}

/// Entries stored as a pretty-printed JSON array in one file
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    pub path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: PathBuf) -> Self {
        JsonFileRepository { path }
    }

    /// Path the unreadable file is copied to before it can be overwritten
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|s| s.to_os_string())
            .unwrap_or_else(|| "entries.json".into());
        name.push(".bak");
        self.path.with_file_name(name)
    }

    fn degraded(&self, reason: String) -> LoadOutcome {
        let backup = self.backup_path();
        let kept = match fs::copy(&self.path, &backup) {
            Ok(_) => format!("the unreadable file was copied to {}", backup.display()),
            Err(e) => format!("could not back up the file ({})", e),
        };
        let warning = format!(
            "Could not read {}: {}. Starting with an empty journal; {}.",
            self.path.display(),
            reason,
            kept
        );
        log::warn!("{}", warning);
        LoadOutcome {
            entries: Vec::new(),
            warning: Some(warning),
        }
    }

    /// Write to a temp file next to the target, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn write_atomic(&self, content: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.moodj-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("entries.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        #[cfg(windows)]
        {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        Ok(())
    }
}

impl EntryRepository for JsonFileRepository {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> LoadOutcome {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} does not exist yet", self.path.display());
                return LoadOutcome::default();
            }
            Err(e) => return self.degraded(e.to_string()),
        };

        if contents.trim().is_empty() {
            return LoadOutcome::default();
        }

        let parsed: Option<Vec<JournalEntry>> = match serde_json::from_str(&contents) {
            Ok(parsed) => parsed,
            Err(e) => return self.degraded(e.to_string()),
        };

        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        let mut duplicates = 0;
        for entry in parsed.unwrap_or_default() {
            if seen.insert(entry.id) {
                entries.push(entry);
            } else {
                duplicates += 1;
            }
        }

        log::debug!(
            "loaded {} entries from {}",
            entries.len(),
            self.path.display()
        );

        let warning = (duplicates > 0).then(|| {
            format!(
                "Ignored {} entries with duplicate ids in {}",
                duplicates,
                self.path.display()
            )
        });
        if let Some(w) = &warning {
            log::warn!("{}", w);
        }

        LoadOutcome { entries, warning }
    }

    fn save(&self, entries: &[JournalEntry]) -> Result<()> {
        let content = serde_json::to_string_pretty(entries)?;
        self.write_atomic(&content).map_err(|source| MoodjError::Save {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("saved {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MoodjError::Io(e)),
        }
    }
}
