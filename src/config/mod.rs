//! Application configuration and constants.
//!
//! This module provides:
//! - Fixed audit constants (default file names, extraction patterns, tag kinds)
//! - The list of essential element identifiers
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
