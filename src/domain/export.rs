//! Plain-text export format

use crate::domain::entry::JournalEntry;
use std::io::{self, Write};

/// Line written after every exported entry
pub const SEPARATOR: &str = "----------------------------------------";

/// Write one block per entry, in the order given. Returns the number written.
pub fn write_entries<'a, W, I>(writer: &mut W, entries: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a JournalEntry>,
{
    let mut written = 0;
    for entry in entries {
        writeln!(writer, "Date: {}", entry.date.format("%Y-%m-%d"))?;
        writeln!(writer, "Mood: {}", entry.mood)?;
        writeln!(writer, "Title: {}", entry.title)?;
        writeln!(writer, "Tags: {}", entry.tags.join(", "))?;
        writeln!(writer, "Notes:")?;
        writeln!(writer, "{}", entry.notes)?;
        writeln!(writer, "{}", SEPARATOR)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::{parse_tags, Mood};
    use chrono::NaiveDate;

    #[test]
    fn test_separator_is_forty_dashes() {
        assert_eq!(SEPARATOR.len(), 40);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_block_format() {
        let entry = JournalEntry::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Mood::new(7).unwrap(),
            "Ok day",
            "Walked the dog.\nSlept early.",
            parse_tags("work,home"),
        );
        let mut out = Vec::new();
        let n = write_entries(&mut out, [&entry]).unwrap();
        assert_eq!(n, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "Date: 2024-01-01\nMood: 7\nTitle: Ok day\nTags: work, home\nNotes:\n\
                 Walked the dog.\nSlept early.\n{}\n",
                SEPARATOR
            )
        );
    }

    #[test]
    fn test_empty_tags_and_notes() {
        let entry = JournalEntry::new(
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            Mood::new(3).unwrap(),
            "",
            "",
            Vec::new(),
        );
        let mut out = Vec::new();
        write_entries(&mut out, [&entry]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Tags: \n"));
        assert!(text.contains("Notes:\n\n"));
    }

    #[test]
    fn test_no_entries_writes_nothing() {
        let mut out = Vec::new();
        let n = write_entries(&mut out, std::iter::empty()).unwrap();
        assert_eq!(n, 0);
        assert!(out.is_empty());
    }
}
