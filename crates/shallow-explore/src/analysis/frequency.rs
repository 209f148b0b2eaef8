//! Value frequencies for categorical columns and their histogram text.
//!
//! Counts live in a `HashMap`, so entries with equal counts come out of
//! [`FrequencyTable::rank`] in an unspecified order. Only the count ordering
//! is guaranteed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of entries shown in a histogram.
pub const DEFAULT_TOP_N: usize = 10;

/// Default length of the longest histogram bar.
pub const DEFAULT_BAR_WIDTH: usize = 75;

const KEY_WIDTH: usize = 20;
const KEY_TRUNCATE_AT: usize = 17;
const BAR_GLYPH: &str = "☐";

/// One distinct value and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub value: String,
    pub count: usize,
}

/// Occurrence count per distinct string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count every value, empty strings included.
    pub fn count<S: AsRef<str>>(values: &[S]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for value in values {
            *counts.entry(value.as_ref().to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of distinct values.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Entries sorted by count, most frequent first.
    pub fn rank(&self) -> Vec<FrequencyEntry> {
        let mut entries: Vec<FrequencyEntry> = self
            .counts
            .iter()
            .map(|(value, &count)| FrequencyEntry {
                value: value.clone(),
                count,
            })
            .collect();
        sort_by_frequency(&mut entries);
        entries
    }
}

/// Sort entries by descending count. Stable, so re-sorting a ranked list
/// leaves it unchanged.
pub fn sort_by_frequency(entries: &mut [FrequencyEntry]) {
    entries.sort_by(|a, b| b.count.cmp(&a.count));
}

/// Render the default histogram (top 10, bars capped at 75).
pub fn render_histogram(ranked: &[FrequencyEntry]) -> String {
    render_histogram_with(ranked, DEFAULT_TOP_N, DEFAULT_BAR_WIDTH)
}

/// Render a horizontal histogram of an already ranked list.
///
/// Shows at most `top_n` entries. Bars are drawn at their raw count unless the
/// largest count exceeds `bar_width`, in which case every bar is scaled so the
/// largest one is exactly `bar_width` long. The trailer reports the number of
/// distinct values in `ranked`, not just the displayed ones.
pub fn render_histogram_with(ranked: &[FrequencyEntry], top_n: usize, bar_width: usize) -> String {
    let mut out = String::from("Horizontal Histogram");
    if ranked.len() > top_n {
        if top_n == DEFAULT_TOP_N {
            out.push_str(" - Top Ten");
        } else {
            out.push_str(&format!(" - Top {top_n}"));
        }
    }
    out.push_str("\n\n");

    let max = ranked.first().map(|e| e.count).unwrap_or(0);
    for entry in ranked.iter().take(top_n) {
        let bar = BAR_GLYPH.repeat(bar_length(entry.count, max, bar_width));
        out.push_str(&format!(
            "{:>width$}: {} ({})\n",
            display_key(&entry.value),
            bar,
            entry.count,
            width = KEY_WIDTH
        ));
    }

    out.push_str(&format!(
        "{:>width$}: {}\n",
        "Unique Strings",
        ranked.len(),
        width = KEY_WIDTH
    ));
    out
}

fn bar_length(count: usize, max: usize, bar_width: usize) -> usize {
    if max > bar_width {
        ((count as f64 / max as f64) * bar_width as f64) as usize
    } else {
        count
    }
}

fn display_key(key: &str) -> String {
    if key.chars().count() > KEY_WIDTH {
        let head: String = key.chars().take(KEY_TRUNCATE_AT).collect();
        format!("{head}...")
    } else {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(value: &str, count: usize) -> FrequencyEntry {
        FrequencyEntry {
            value: value.to_string(),
            count,
        }
    }

    // ==================== count / rank tests ====================

    #[test]
    fn test_count_values() {
        let table = FrequencyTable::count(&["x", "y", "x"]);
        assert_eq!(table.rank(), vec![entry("x", 2), entry("y", 1)]);
        assert_eq!(table.distinct(), 2);
    }

    #[test]
    fn test_count_includes_empty_strings() {
        let table = FrequencyTable::count(&["", "a", ""]);
        assert_eq!(table.rank()[0], entry("", 2));
    }

    #[test]
    fn test_rank_descending() {
        let table = FrequencyTable::count(&["b", "a", "a", "c", "a", "b"]);
        let ranked = table.rank();
        assert_eq!(ranked[0], entry("a", 3));
        assert_eq!(ranked[1], entry("b", 2));
        assert_eq!(ranked[2], entry("c", 1));
    }

    #[test]
    fn test_rank_is_idempotent() {
        let table = FrequencyTable::count(&["p", "q", "q", "r", "s", "s", "s", "t"]);
        let ranked = table.rank();
        let mut reranked = ranked.clone();
        sort_by_frequency(&mut reranked);
        assert_eq!(ranked, reranked);
    }

    #[test]
    fn test_rank_empty() {
        let table = FrequencyTable::count::<&str>(&[]);
        assert_eq!(table.distinct(), 0);
        assert!(table.rank().is_empty());
    }

    // ==================== histogram tests ====================

    #[test]
    fn test_histogram_small() {
        let out = render_histogram(&[entry("x", 2), entry("y", 1)]);
        let expected = format!(
            "Horizontal Histogram\n\n{:>20}: ☐☐ (2)\n{:>20}: ☐ (1)\n{:>20}: 2\n",
            "x", "y", "Unique Strings"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_histogram_top_ten_title_and_limit() {
        let ranked: Vec<FrequencyEntry> = (0..12).map(|i| entry(&format!("v{i}"), 12 - i)).collect();
        let out = render_histogram(&ranked);
        assert!(out.starts_with("Horizontal Histogram - Top Ten\n\n"));
        // title line, blank line, 10 entries, trailer
        assert_eq!(out.lines().count(), 13);
        assert!(out.contains("v9"));
        assert!(!out.contains("v10"));
        assert!(out.ends_with(&format!("{:>20}: 12\n", "Unique Strings")));
    }

    #[test]
    fn test_histogram_exactly_ten_has_plain_title() {
        let ranked: Vec<FrequencyEntry> = (0..10).map(|i| entry(&format!("v{i}"), 1)).collect();
        let out = render_histogram(&ranked);
        assert!(out.starts_with("Horizontal Histogram\n\n"));
    }

    #[test]
    fn test_histogram_scales_long_bars() {
        let out = render_histogram(&[entry("big", 150), entry("half", 75), entry("tiny", 1)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2].matches('☐').count(), 75);
        assert_eq!(lines[3].matches('☐').count(), 37);
        assert_eq!(lines[4].matches('☐').count(), 0);
        assert!(lines[4].ends_with("tiny:  (1)"));
    }

    #[test]
    fn test_histogram_no_scaling_at_limit() {
        let out = render_histogram(&[entry("a", 75), entry("b", 10)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2].matches('☐').count(), 75);
        assert_eq!(lines[3].matches('☐').count(), 10);
    }

    #[test]
    fn test_histogram_truncates_long_keys() {
        let out = render_histogram(&[entry("abcdefghijklmnopqrstuvwxyz", 1)]);
        assert!(out.contains("\nabcdefghijklmnopq...: ☐ (1)\n"));

        // 20 characters is still shown in full
        let out = render_histogram(&[entry("abcdefghijklmnopqrst", 1)]);
        assert!(out.contains("abcdefghijklmnopqrst: ☐ (1)"));
    }

    #[test]
    fn test_histogram_truncates_on_char_boundary() {
        let key = "é".repeat(25);
        let out = render_histogram(&[entry(&key, 1)]);
        assert!(out.contains(&format!("{}...", "é".repeat(17))));
    }

    #[test]
    fn test_histogram_empty() {
        let out = render_histogram(&[]);
        assert_eq!(
            out,
            format!("Horizontal Histogram\n\n{:>20}: 0\n", "Unique Strings")
        );
    }

    #[test]
    fn test_histogram_custom_top_n() {
        let ranked: Vec<FrequencyEntry> = (0..5).map(|i| entry(&format!("k{i}"), 5 - i)).collect();
        let out = render_histogram_with(&ranked, 3, 75);
        assert!(out.starts_with("Horizontal Histogram - Top 3\n\n"));
        assert!(!out.contains("k3"));
    }
}
