//! Source file sizes.

use std::fmt;

use crate::checks::{CheckKind, Finding};
use crate::parse::line_count;

/// Line counts of both sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    /// Lines in the HTML document
    pub document_lines: usize,
    /// Lines in the script
    pub script_lines: usize,
}

/// Counts the lines of each source, splitting on `\n`.
pub fn check_file_stats(html: &str, js: &str) -> FileStats {
    FileStats {
        document_lines: line_count(html),
        script_lines: line_count(js),
    }
}

impl Finding for FileStats {
    fn kind(&self) -> CheckKind {
        CheckKind::FileStats
    }

    fn passed(&self) -> bool {
        true
    }
}

impl fmt::Display for FileStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HTML: {} lines", self.document_lines)?;
        writeln!(f, "JS: {} lines", self.script_lines)
    }
}
