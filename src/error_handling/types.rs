//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for the audit run.
///
/// Any of these aborts the run before a report is produced.
#[derive(Error, Debug)]
pub enum AuditError {
    /// A site source is missing, unreadable, or not valid UTF-8 text.
    #[error("Failed to read {kind} '{}'", path.display())]
    ReadInput {
        /// Which source failed ("document" or "script")
        kind: &'static str,
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_input_message_names_path() {
        let err = AuditError::ReadInput {
            kind: "document",
            path: PathBuf::from("site/index.html"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let message = err.to_string();
        assert!(message.contains("document"));
        assert!(message.contains("site/index.html"));
    }

    #[test]
    fn test_read_input_exposes_source() {
        use std::error::Error as _;

        let err = AuditError::ReadInput {
            kind: "script",
            path: PathBuf::from("script.js"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let source = err.source().expect("ReadInput should carry its io::Error");
        assert_eq!(source.to_string(), "denied");
    }
}
