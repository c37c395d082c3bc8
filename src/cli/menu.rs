//! Interactive numbered menu

use crate::application::{EntryTarget, EntryUpdate, JournalService, Listing, NewEntry};
use crate::cli::output::{format_entry_detail, format_entry_list, format_stats, numbered};
use crate::domain::{parse_date, DateRange, Mood};
use crate::error::Result;
use crate::infrastructure::EntryRepository;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use uuid::Uuid;

const MENU: &str = "\
Mood Journal
  1) Add entry
  2) List entries
  3) List by date
  4) List by tag
  5) Edit entry
  6) Delete entry
  7) Statistics
  8) Export
  9) Reset journal
  0) Exit
";

/// Default export file offered by the menu
pub const DEFAULT_EXPORT_FILE: &str = "moodj-export.txt";

/// Ask a yes/no question. Anything but `y`/`yes` (or end of input) is no.
pub fn confirm<I: BufRead, O: Write>(input: &mut I, output: &mut O, question: &str) -> io::Result<bool> {
    write!(output, "{} (y/N): ", question)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Menu session over any line-based input and text output.
pub struct Menu<'a, R: EntryRepository, I: BufRead, O: Write> {
    service: &'a mut JournalService<R>,
    input: I,
    output: O,
    stats_days: u32,
    clock: fn() -> NaiveDate,
    /// Ids of the list most recently printed, in display order
    shown: Vec<Uuid>,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<'a, R: EntryRepository, I: BufRead, O: Write> Menu<'a, R, I, O> {
    pub fn new(service: &'a mut JournalService<R>, input: I, output: O, stats_days: u32) -> Self {
        Menu {
            service,
            input,
            output,
            stats_days,
            clock: local_today,
            shown: Vec::new(),
        }
    }

    /// Pin "today" to a fixed source
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// Run until the operator exits or input ends. The journal is saved on
    /// the way out; a failed final save is the only error returned.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "\n{}Choose an option: ", MENU)?;
            self.output.flush()?;

            let choice = match self.read_line() {
                Ok(Some(choice)) => choice,
                Ok(None) => {
                    writeln!(self.output)?;
                    break;
                }
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    writeln!(self.output, "Could not read that line: {}", e)?;
                    continue;
                }
                Err(e) => {
                    log::warn!("stopped reading menu input: {}", e);
                    break;
                }
            };

            let result = match choice.trim() {
                "1" => self.add(),
                "2" => self.list_all(),
                "3" => self.list_by_date(),
                "4" => self.list_by_tag(),
                "5" => self.edit(),
                "6" => self.delete(),
                "7" => self.statistics(),
                "8" => self.export(),
                "9" => self.reset(),
                "0" | "q" | "quit" | "exit" => break,
                other => {
                    writeln!(self.output, "Unknown option '{}'.", other)?;
                    Ok(())
                }
            };

            if let Err(e) = result {
                log::debug!("menu action failed: {:?}", e);
                writeln!(self.output, "{}", e)?;
            }
        }

        self.service.sync()?;
        writeln!(self.output, "Saved. Goodbye.")?;
        Ok(())
    }

    fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Keep asking until a valid mood is given. `allow_blank` returns
    /// `Some(None)` on an empty answer; `None` means input ended.
    fn prompt_mood(&mut self, label: &str, allow_blank: bool) -> io::Result<Option<Option<Mood>>> {
        loop {
            let Some(raw) = self.prompt(label)? else {
                return Ok(None);
            };
            if allow_blank && raw.trim().is_empty() {
                return Ok(Some(None));
            }
            match raw.parse::<Mood>() {
                Ok(mood) => return Ok(Some(Some(mood))),
                Err(_) => writeln!(
                    self.output,
                    "Mood must be a whole number from {} to {}.",
                    Mood::MIN,
                    Mood::MAX
                )?,
            }
        }
    }

    /// Print a listing and remember its order for later selection
    fn show(&mut self, listing: &Listing) -> Result<()> {
        let entries = self.service.list(listing)?;
        self.shown = entries.iter().map(|e| e.id).collect();
        let text = format_entry_list(&numbered(&entries));
        writeln!(self.output, "{}", text.trim_end())?;
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let today = self.today();
        let Some(date) = self.prompt("Date (YYYY-MM-DD, blank for today): ")? else {
            return Ok(());
        };
        let Some(Some(mood)) = self.prompt_mood("Mood (1-10): ", false)? else {
            return Ok(());
        };
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(());
        };
        let Some(notes) = self.prompt("Notes: ")? else {
            return Ok(());
        };
        let Some(tags) = self.prompt("Tags (comma-separated): ")? else {
            return Ok(());
        };

        let added = self.service.add(
            NewEntry {
                date: Some(date.clone()),
                mood: mood.to_string(),
                title,
                notes,
                tags: Some(tags),
            },
            today,
        )?;

        if added.date_fallback {
            writeln!(
                self.output,
                "Could not read date '{}'; using today ({}).",
                date.trim(),
                added.entry.date.format("%Y-%m-%d")
            )?;
        }
        writeln!(self.output, "Entry added.")?;
        if let Some(e) = added.save_error {
            writeln!(self.output, "{}", e)?;
            writeln!(self.output, "The entry is kept and will be saved on exit.")?;
        }
        Ok(())
    }

    fn list_all(&mut self) -> Result<()> {
        self.show(&Listing::All)
    }

    fn list_by_date(&mut self) -> Result<()> {
        let today = self.today();
        let Some(raw) = self.prompt("Date or range (<date> to <date>): ")? else {
            return Ok(());
        };

        let listing = if raw.to_lowercase().contains(" to ") {
            Listing::Range(DateRange::parse(&raw, today)?)
        } else {
            Listing::OnDate(parse_date(&raw, today)?)
        };
        self.show(&listing)
    }

    fn list_by_tag(&mut self) -> Result<()> {
        let Some(tag) = self.prompt("Tag: ")? else {
            return Ok(());
        };
        self.show(&Listing::Tag(tag))
    }

    /// Ask which entry to act on, showing the full list first if nothing
    /// has been listed yet.
    fn select(&mut self, verb: &str) -> Result<Option<Uuid>> {
        if self.service.entries().is_empty() {
            writeln!(self.output, "No entries found")?;
            return Ok(None);
        }
        if self.shown.is_empty() {
            self.list_all()?;
        }
        let Some(raw) = self.prompt(&format!("Entry number to {}: ", verb))? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let target: EntryTarget = raw.parse()?;
        self.service.resolve(target, &self.shown).map(Some)
    }

    fn edit(&mut self) -> Result<()> {
        let today = self.today();
        let Some(id) = self.select("edit")? else {
            return Ok(());
        };
        let current = self.service.get(id)?.clone();
        writeln!(self.output, "{}", format_entry_detail(&current).trim_end())?;
        writeln!(self.output, "Leave a field blank to keep it.")?;

        let date = loop {
            let Some(raw) = self.prompt(&format!("Date [{}]: ", current.date.format("%Y-%m-%d")))? else {
                return Ok(());
            };
            if raw.trim().is_empty() {
                break None;
            }
            match parse_date(&raw, today) {
                Ok(_) => break Some(raw),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        };
        let Some(mood) = self.prompt_mood(&format!("Mood [{}]: ", current.mood), true)? else {
            return Ok(());
        };
        let Some(title) = self.prompt(&format!("Title [{}]: ", current.title))? else {
            return Ok(());
        };
        let Some(notes) = self.prompt("Notes [keep]: ")? else {
            return Ok(());
        };
        let Some(tags) = self.prompt(&format!("Tags [{}]: ", current.tags.join(", ")))? else {
            return Ok(());
        };

        let update = EntryUpdate {
            date,
            mood: mood.map(|m| m.to_string()),
            title: Some(title),
            notes: Some(notes),
            tags: Some(tags),
        };
        if update.is_empty() {
            writeln!(self.output, "Nothing changed.")?;
            return Ok(());
        }

        self.service.edit(id, update, today)?;
        writeln!(self.output, "Entry updated.")?;
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let Some(id) = self.select("delete")? else {
            return Ok(());
        };
        let entry = self.service.get(id)?;
        let question = format!(
            "Delete '{}' from {}?",
            entry.title,
            entry.date.format("%Y-%m-%d")
        );
        if !confirm(&mut self.input, &mut self.output, &question)? {
            writeln!(self.output, "Cancelled.")?;
            return Ok(());
        }
        self.service.delete(id)?;
        writeln!(self.output, "Entry deleted.")?;
        Ok(())
    }

    fn statistics(&mut self) -> Result<()> {
        let today = self.today();
        let label = format!(
            "Range (<date> to <date>, blank for last {} days): ",
            self.stats_days
        );
        let Some(raw) = self.prompt(&label)? else {
            return Ok(());
        };
        let range = if raw.trim().is_empty() {
            DateRange::last_days(self.stats_days, today)
        } else {
            DateRange::parse(&raw, today)?
        };
        let stats = self.service.stats(range);
        writeln!(self.output, "{}", format_stats(&stats).trim_end())?;
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        let Some(raw) = self.prompt(&format!("Export file [{}]: ", DEFAULT_EXPORT_FILE))? else {
            return Ok(());
        };
        let path = match raw.trim() {
            "" => DEFAULT_EXPORT_FILE,
            given => given,
        };
        let count = self.service.export(path.as_ref())?;
        writeln!(self.output, "Exported {} entries to {}.", count, path)?;
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        let question = format!(
            "Delete all {} entries and {}?",
            self.service.entries().len(),
            self.service.location().display()
        );
        if !confirm(&mut self.input, &mut self.output, &question)? {
            writeln!(self.output, "Cancelled.")?;
            return Ok(());
        }
        self.service.reset()?;
        self.shown.clear();
        writeln!(self.output, "Journal reset.")?;
        Ok(())
    }
}
