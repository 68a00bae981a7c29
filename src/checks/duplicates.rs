//! Duplicate product listings.

use std::fmt;

use crate::checks::{CheckKind, Finding};
use crate::parse::{extract_product_labels, frequency_table, FrequencyTable};

/// Product labels that appear more than once in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateProducts {
    /// Label to occurrence count, only for counts greater than 1
    pub duplicates: FrequencyTable,
}

/// Finds product labels listed more than once.
pub fn check_duplicate_products(html: &str) -> DuplicateProducts {
    let mut duplicates = frequency_table(extract_product_labels(html));
    duplicates.retain(|_, count| *count > 1);
    DuplicateProducts { duplicates }
}

impl Finding for DuplicateProducts {
    fn kind(&self) -> CheckKind {
        CheckKind::DuplicateProducts
    }

    fn passed(&self) -> bool {
        self.duplicates.is_empty()
    }
}

impl fmt::Display for DuplicateProducts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.duplicates.is_empty() {
            return writeln!(f, "PASS: No duplicate products found!");
        }
        writeln!(f, "FOUND {} duplicated products:", self.duplicates.len())?;
        for (name, count) in &self.duplicates {
            writeln!(f, "  {}: {}x", name, count)?;
        }
        Ok(())
    }
}
