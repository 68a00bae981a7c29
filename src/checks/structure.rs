//! Structural tag balance.

use std::fmt;

use crate::checks::{CheckKind, Finding};
use crate::config::BALANCED_TAGS;
use crate::parse::count_occurrences;

/// Opening versus closing occurrences of one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBalance {
    /// Tag name without brackets, e.g. `div`
    pub tag: &'static str,
    /// Occurrences of `<tag`
    pub opening: usize,
    /// Occurrences of `</tag`
    pub closing: usize,
}

impl TagBalance {
    /// Counts `<tag` and `</tag` as raw substrings of `html`.
    pub fn count(html: &str, tag: &'static str) -> Self {
        Self {
            tag,
            opening: count_occurrences(html, &format!("<{}", tag)),
            closing: count_occurrences(html, &format!("</{}", tag)),
        }
    }

    pub fn is_balanced(&self) -> bool {
        self.opening == self.closing
    }

    /// Opening count minus closing count.
    // Counts are bounded by document length, far below i64::MAX
    #[allow(clippy::cast_possible_wrap)]
    pub fn difference(&self) -> i64 {
        self.opening as i64 - self.closing as i64
    }
}

impl fmt::Display for TagBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Opening <{}>: {}", self.tag, self.opening)?;
        writeln!(f, "Closing </{}>: {}", self.tag, self.closing)?;
        if self.is_balanced() {
            writeln!(f, "Balance: PASS")
        } else {
            writeln!(f, "Balance: MISMATCH (diff: {})", self.difference())
        }
    }
}

/// Balance of every structural tag, in configured order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureBalance {
    pub tags: Vec<TagBalance>,
}

/// Counts opening and closing forms of the structural tags.
pub fn check_structure(html: &str) -> StructureBalance {
    StructureBalance {
        tags: BALANCED_TAGS
            .iter()
            .map(|&tag| TagBalance::count(html, tag))
            .collect(),
    }
}

impl Finding for StructureBalance {
    fn kind(&self) -> CheckKind {
        CheckKind::Structure
    }

    fn passed(&self) -> bool {
        self.tags.iter().all(TagBalance::is_balanced)
    }
}

impl fmt::Display for StructureBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.tags {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}
