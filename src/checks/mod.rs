//! The audit checks.
//!
//! Each check reads the loaded site sources and produces a typed finding.
//! Findings render their own report lines (via `Display`) and know whether
//! they passed. Checks are independent of each other; running them in a
//! different order only changes the report's section order.

mod categories;
mod coverage;
mod duplicates;
mod essentials;
mod file_stats;
mod structure;

use std::fmt;

use strum_macros::{Display as StrumDisplay, EnumIter as EnumIterMacro};

pub use categories::{check_categories, CategoryCensus};
pub use coverage::{check_function_coverage, FunctionCoverage};
pub use duplicates::{check_duplicate_products, DuplicateProducts};
pub use essentials::{check_essential_elements, ElementPresence, EssentialElements};
pub use file_stats::{check_file_stats, FileStats};
pub use structure::{check_structure, StructureBalance, TagBalance};

/// The checks, in report order.
///
/// The `Display` form is the section title printed in the report header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, StrumDisplay)]
pub enum CheckKind {
    #[strum(to_string = "Product Duplicates")]
    DuplicateProducts,
    #[strum(to_string = "JS Function Coverage")]
    FunctionCoverage,
    #[strum(to_string = "HTML Structure")]
    Structure,
    #[strum(to_string = "File Stats")]
    FileStats,
    #[strum(to_string = "Essential Elements")]
    EssentialElements,
    #[strum(to_string = "Category Counts")]
    Categories,
}

/// A check result that can be rendered as a report section body.
pub trait Finding: fmt::Display {
    /// Which check produced this finding.
    fn kind(&self) -> CheckKind;

    /// Whether the check found nothing to complain about.
    ///
    /// Informational checks always pass.
    fn passed(&self) -> bool;
}
