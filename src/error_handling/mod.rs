//! Error handling.
//!
//! This module provides the error types surfaced by the audit:
//! - **Initialization errors**: the logger could not be installed
//! - **Audit errors**: a site source could not be read
//!
//! An extraction that matches nothing is never an error; checks treat it as
//! an empty result.

mod types;

// Re-export public API
pub use types::{AuditError, InitializationError};
