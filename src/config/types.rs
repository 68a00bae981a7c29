//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_BASE_DIR, DEFAULT_DOCUMENT_FILE, DEFAULT_SCRIPT_FILE};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Audit configuration.
///
/// Parsed from the command line by the binary, or built programmatically
/// (usually via `..Default::default()`) when the crate is used as a library.
/// The defaults audit `./index.html` against `./script.js`.
///
/// # Examples
///
/// ```bash
/// # Audit the site in the current directory
/// site_audit
///
/// # Audit a site checked out elsewhere
/// site_audit ../imperial
///
/// # Non-default file names
/// site_audit ../imperial --document home.html --script app.js
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "site_audit",
    about = "Checks a site's HTML and script for duplicates, missing handlers, tag balance and required elements."
)]
pub struct Config {
    /// Directory containing the site sources
    #[arg(value_parser, default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// HTML document file name, relative to the base directory
    #[arg(long, default_value = DEFAULT_DOCUMENT_FILE)]
    pub document: String,

    /// Script file name, relative to the base directory
    #[arg(long, default_value = DEFAULT_SCRIPT_FILE)]
    pub script: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Full path of the HTML document.
    pub fn document_path(&self) -> PathBuf {
        self.base_dir.join(&self.document)
    }

    /// Full path of the script.
    pub fn script_path(&self) -> PathBuf {
        self.base_dir.join(&self.script)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            document: DEFAULT_DOCUMENT_FILE.to_string(),
            script: DEFAULT_SCRIPT_FILE.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
