//! Click handlers without a matching script function.

use std::collections::BTreeSet;
use std::fmt;

use crate::checks::{CheckKind, Finding};
use crate::parse::{extract_click_handlers, extract_declared_functions};

/// Handler names called from the document versus functions declared in the script.
///
/// A purely syntactic name match: bodies, arity and unused declarations are
/// not looked at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionCoverage {
    /// Distinct callees of inline `onclick` handlers
    pub called: BTreeSet<String>,
    /// Distinct names declared with `function` in the script
    pub defined: BTreeSet<String>,
    /// `called` minus `defined`
    pub missing: BTreeSet<String>,
}

/// Finds click handlers whose function is not declared in the script.
pub fn check_function_coverage(html: &str, js: &str) -> FunctionCoverage {
    let called = extract_click_handlers(html);
    let defined = extract_declared_functions(js);
    let missing = called.difference(&defined).cloned().collect();
    FunctionCoverage {
        called,
        defined,
        missing,
    }
}

impl Finding for FunctionCoverage {
    fn kind(&self) -> CheckKind {
        CheckKind::FunctionCoverage
    }

    fn passed(&self) -> bool {
        self.missing.is_empty()
    }
}

impl fmt::Display for FunctionCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Functions called in HTML: {}", self.called.len())?;
        writeln!(f, "Functions defined in JS: {}", self.defined.len())?;
        if self.missing.is_empty() {
            return writeln!(f, "PASS: All functions called in HTML are defined in JS!");
        }
        writeln!(f, "MISSING functions ({}):", self.missing.len())?;
        for name in &self.missing {
            writeln!(f, "  ❌ {}", name)?;
        }
        Ok(())
    }
}
