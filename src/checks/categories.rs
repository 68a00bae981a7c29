//! Product category census.

use std::fmt;

use crate::checks::{CheckKind, Finding};
use crate::parse::{extract_categories, frequency_table, FrequencyTable};

/// Number of products per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCensus {
    /// Category to product count, alphabetical
    pub counts: FrequencyTable,
    /// All category labels found, duplicates included
    pub total: usize,
}

/// Counts products per `data-cat` category.
pub fn check_categories(html: &str) -> CategoryCensus {
    let categories = extract_categories(html);
    let total = categories.len();
    CategoryCensus {
        counts: frequency_table(categories),
        total,
    }
}

impl Finding for CategoryCensus {
    fn kind(&self) -> CheckKind {
        CheckKind::Categories
    }

    fn passed(&self) -> bool {
        true
    }
}

impl fmt::Display for CategoryCensus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, count) in &self.counts {
            writeln!(f, "  {}: {} products", category, count)?;
        }
        writeln!(f, "  Total: {} products", self.total)
    }
}
