//! site_audit library: static consistency checks for a small website.
//!
//! This library audits one HTML document against one script file and reports:
//! duplicated product listings, click handlers with no declared function,
//! unbalanced structural tags, file sizes, missing essential element
//! identifiers, and a per-category product census.
//!
//! # Example
//!
//! ```no_run
//! use site_audit::{run_audit, Config};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     base_dir: PathBuf::from("site"),
//!     ..Default::default()
//! };
//!
//! let report = run_audit(&config)?;
//! print!("{}", report.render());
//! # Ok(())
//! # }
//! ```

pub mod checks;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod output;
pub mod parse;
pub mod report;
pub mod sources;

// Re-export public API
pub use checks::{CheckKind, Finding};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AuditError, InitializationError};
pub use report::AuditReport;
pub use sources::SiteSources;

/// Loads the site sources named by `config` and runs every check.
///
/// Failed checks are findings, not errors: the report is returned either way.
///
/// # Errors
///
/// Returns `AuditError::ReadInput` if either source cannot be read; no check
/// runs in that case.
pub fn run_audit(config: &Config) -> Result<AuditReport, AuditError> {
    let sources = SiteSources::load(config)?;
    Ok(AuditReport::from_sources(&sources))
}
