//! Output formatting utilities

use crate::domain::{JournalEntry, MoodStats};

/// Format numbered entries for display. Positions are 1-based.
pub fn format_entry_list(rows: &[(usize, &JournalEntry)]) -> String {
    if rows.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (position, entry) in rows {
        let title = if entry.title.is_empty() {
            "(untitled)"
        } else {
            entry.title.as_str()
        };
        output.push_str(&format!(
            "{:>3}. {}  mood {:>2}/10  {}",
            position,
            entry.date.format("%Y-%m-%d"),
            entry.mood,
            title
        ));
        if !entry.tags.is_empty() {
            output.push_str(&format!("  [{}]", entry.tags.join(", ")));
        }
        output.push('\n');
    }
    output
}

/// Number entries 1..n in the order given
pub fn numbered<'a>(entries: &[&'a JournalEntry]) -> Vec<(usize, &'a JournalEntry)> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| (i + 1, *e))
        .collect()
}

/// Full view of a single entry
pub fn format_entry_detail(entry: &JournalEntry) -> String {
    let mut output = format!(
        "Id:    {}\nDate:  {}\nMood:  {}/10\nTitle: {}\nTags:  {}\n",
        entry.id,
        entry.date.format("%Y-%m-%d"),
        entry.mood,
        entry.title,
        entry.tags.join(", ")
    );
    if !entry.notes.is_empty() {
        output.push_str("Notes:\n");
        output.push_str(&entry.notes);
        if !entry.notes.ends_with('\n') {
            output.push('\n');
        }
    }
    output
}

pub fn format_stats(stats: &MoodStats) -> String {
    let mut output = format!("Statistics for {}\n", stats.range);

    let (Some(average), Some(min), Some(max)) = (stats.average, stats.min, stats.max) else {
        output.push_str("No entries in range\n");
        return output;
    };

    output.push_str(&format!("Entries:      {}\n", stats.count));
    output.push_str(&format!("Average mood: {:.2}\n", average));
    output.push_str(&format!("Lowest mood:  {}\n", min));
    output.push_str(&format!("Highest mood: {}\n", max));

    output.push_str("\nMood distribution:\n");
    for (i, n) in stats.histogram.iter().enumerate().rev() {
        output.push_str(&format!("  {:>2} | {} {}\n", i + 1, "#".repeat(*n), n));
    }

    if !stats.tags.is_empty() {
        output.push_str("\nTags:\n");
        let width = stats.tags.iter().map(|t| t.tag.len()).max().unwrap_or(0);
        for tag in &stats.tags {
            output.push_str(&format!(
                "  {:<width$}  {} {}, avg {:.2}\n",
                tag.tag,
                tag.count,
                if tag.count == 1 { "entry" } else { "entries" },
                tag.average,
                width = width
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{parse_tags, DateRange, Mood};
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(date: NaiveDate, mood: i64, title: &str, tags: &str) -> JournalEntry {
        JournalEntry::new(date, Mood::new(mood).unwrap(), title, "", parse_tags(tags))
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let a = entry(ymd(2024, 1, 3), 3, "Bad day", "");
        let b = entry(ymd(2024, 1, 1), 7, "Ok day", "work,home");
        let output = format_entry_list(&numbered(&[&a, &b]));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "  1. 2024-01-03  mood  3/10  Bad day");
        assert_eq!(lines[1], "  2. 2024-01-01  mood  7/10  Ok day  [work, home]");
    }

    #[test]
    fn test_format_untitled() {
        let a = entry(ymd(2024, 1, 3), 10, "", "");
        let output = format_entry_list(&[(4, &a)]);
        assert!(output.starts_with("  4. 2024-01-03  mood 10/10  (untitled)"));
    }

    #[test]
    fn test_format_detail() {
        let mut a = entry(ymd(2024, 1, 3), 3, "Bad day", "work");
        a.notes = "rain all day".to_string();
        let output = format_entry_detail(&a);
        assert!(output.contains(&a.id.to_string()));
        assert!(output.contains("Mood:  3/10"));
        assert!(output.contains("Tags:  work"));
        assert!(output.ends_with("Notes:\nrain all day\n"));
    }

    #[test]
    fn test_format_stats_empty() {
        let range = DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 31)).unwrap();
        let stats = MoodStats::compute(std::iter::empty(), range);
        assert_eq!(
            format_stats(&stats),
            "Statistics for 2024-01-01 to 2024-01-31\nNo entries in range\n"
        );
    }

    #[test]
    fn test_format_stats() {
        let entries = vec![
            entry(ymd(2024, 1, 1), 7, "", "work"),
            entry(ymd(2024, 1, 2), 4, "", "work,home"),
        ];
        let range = DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 31)).unwrap();
        let output = format_stats(&MoodStats::compute(&entries, range));

        assert!(output.contains("Entries:      2"));
        assert!(output.contains("Average mood: 5.50"));
        assert!(output.contains("Lowest mood:  4"));
        assert!(output.contains("Highest mood: 7"));
        assert!(output.contains("   7 | # 1"));
        assert!(output.contains("work  2 entries, avg 5.50"));
        assert!(output.contains("home  1 entry, avg 4.00"));
    }
}
