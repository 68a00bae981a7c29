//! Frequency tables and raw counts.

use std::collections::BTreeMap;

/// Occurrence count per extracted name, iterated in alphabetical order.
pub type FrequencyTable = BTreeMap<String, usize>;

/// Builds a frequency table from a sequence of names.
pub fn frequency_table<I, S>(names: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table = FrequencyTable::new();
    for name in names {
        *table.entry(name.into()).or_insert(0) += 1;
    }
    table
}

/// Counts non-overlapping occurrences of `needle` as a raw substring.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
///
/// Sources are read as text, so every newline convention counts the same.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Number of pieces produced by splitting on `\n`.
///
/// Empty text is one line, and a trailing newline adds a final empty line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}
