//! Loading of the site sources.
//!
//! Both files are read in full before any check runs. A read failure is fatal
//! and leaves nothing behind; the checks only ever see fully loaded text.

use std::fs;
use std::path::Path;

use log::info;

use crate::config::Config;
use crate::error_handling::AuditError;
use crate::parse::normalize_newlines;

/// The two texts every check reads from.
///
/// Immutable for the lifetime of the run; checks borrow from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSources {
    /// Full contents of the HTML document
    pub document: String,
    /// Full contents of the script
    pub script: String,
}

impl SiteSources {
    /// Wraps already-loaded texts, e.g. for auditing in-memory content.
    pub fn new(document: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            script: script.into(),
        }
    }

    /// Reads the document and then the script named by `config`.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::ReadInput` for the first file that is missing,
    /// unreadable, or not valid UTF-8.
    pub fn load(config: &Config) -> Result<Self, AuditError> {
        let document = read_source("document", &config.document_path())?;
        let script = read_source("script", &config.script_path())?;
        Ok(Self { document, script })
    }
}

fn read_source(kind: &'static str, path: &Path) -> Result<String, AuditError> {
    let text = fs::read_to_string(path).map_err(|source| AuditError::ReadInput {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded {} {} ({} bytes)", kind, path.display(), text.len());
    Ok(normalize_newlines(text))
}
