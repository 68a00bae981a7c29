//! Report assembly and rendering.
//!
//! The report is built once from the loaded sources and rendered as plain
//! text: one section per check, each introduced by a `=== Title ===` header,
//! sections separated by a blank line. Rendering is deterministic, so
//! unchanged inputs always produce byte-identical output.

use std::fmt;

use log::{debug, warn};

use crate::checks::{
    check_categories, check_duplicate_products, check_essential_elements, check_file_stats,
    check_function_coverage, check_structure, CategoryCensus, CheckKind, DuplicateProducts,
    EssentialElements, FileStats, Finding, FunctionCoverage, StructureBalance,
};
use crate::sources::SiteSources;

/// Findings of every check for one pair of site sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub duplicates: DuplicateProducts,
    pub coverage: FunctionCoverage,
    pub structure: StructureBalance,
    pub file_stats: FileStats,
    pub essentials: EssentialElements,
    pub categories: CategoryCensus,
}

impl AuditReport {
    /// Runs all checks against the loaded sources.
    pub fn from_sources(sources: &SiteSources) -> Self {
        let html = sources.document.as_str();
        let js = sources.script.as_str();

        let report = Self {
            duplicates: check_duplicate_products(html),
            coverage: check_function_coverage(html, js),
            structure: check_structure(html),
            file_stats: check_file_stats(html, js),
            essentials: check_essential_elements(html),
            categories: check_categories(html),
        };

        for finding in report.findings() {
            if finding.passed() {
                debug!("Check passed: {}", finding.kind());
            } else {
                warn!("Check failed: {}", finding.kind());
            }
        }

        report
    }

    /// All findings in report order.
    pub fn findings(&self) -> [&dyn Finding; 6] {
        [
            &self.duplicates,
            &self.coverage,
            &self.structure,
            &self.file_stats,
            &self.essentials,
            &self.categories,
        ]
    }

    /// Checks that found problems, in report order.
    pub fn failures(&self) -> Vec<CheckKind> {
        self.findings()
            .iter()
            .filter(|finding| !finding.passed())
            .map(|finding| finding.kind())
            .collect()
    }

    /// Renders the full text report.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, finding) in self.findings().iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "=== {} ===", finding.kind())?;
            write!(f, "{}", finding)?;
        }
        Ok(())
    }
}
