//! Mood statistics over a date range

use crate::domain::entry::{JournalEntry, Mood};
use crate::domain::range::DateRange;
use std::collections::HashMap;

/// Mood figures for one tag
#[derive(Debug, Clone, PartialEq)]
pub struct TagStats {
    /// Spelling of the first occurrence seen
    pub tag: String,
    pub count: usize,
    pub average: f64,
}

/// Aggregate over the entries whose date falls in `range`
#[derive(Debug, Clone, PartialEq)]
pub struct MoodStats {
    pub range: DateRange,
    pub count: usize,
    /// `None` when no entries fall in range
    pub average: Option<f64>,
    pub min: Option<Mood>,
    pub max: Option<Mood>,
    /// Ordered by count descending, then tag name
    pub tags: Vec<TagStats>,
    /// `histogram[i]` counts entries with mood `i + 1`
    pub histogram: [usize; 10],
}

impl MoodStats {
    /// Compute over `entries`, keeping only those inside `range`
    pub fn compute<'a, I>(entries: I, range: DateRange) -> Self
    where
        I: IntoIterator<Item = &'a JournalEntry>,
    {
        let mut count = 0usize;
        let mut total = 0u64;
        let mut min: Option<Mood> = None;
        let mut max: Option<Mood> = None;
        let mut histogram = [0usize; 10];
        // lowercase tag -> (display, count, mood total)
        let mut per_tag: HashMap<String, (String, usize, u64)> = HashMap::new();

        for entry in entries.into_iter().filter(|e| range.contains(e.date)) {
            let mood = entry.mood;
            count += 1;
            total += u64::from(mood.value());
            min = Some(min.map_or(mood, |m| m.min(mood)));
            max = Some(max.map_or(mood, |m| m.max(mood)));
            histogram[usize::from(mood.value() - 1)] += 1;

            for tag in &entry.tags {
                let slot = per_tag
                    .entry(tag.to_lowercase())
                    .or_insert_with(|| (tag.clone(), 0, 0));
                slot.1 += 1;
                slot.2 += u64::from(mood.value());
            }
        }

        let average = (count > 0).then(|| total as f64 / count as f64);

        let mut tags: Vec<TagStats> = per_tag
            .into_values()
            .map(|(tag, n, sum)| TagStats {
                tag,
                count: n,
                average: sum as f64 / n as f64,
            })
            .collect();
        tags.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.tag.to_lowercase().cmp(&b.tag.to_lowercase()))
        });

        MoodStats {
            range,
            count,
            average,
            min,
            max,
            tags,
            histogram,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
