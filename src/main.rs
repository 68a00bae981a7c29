//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the report to stdout (a closed pipe is not an error)
//!
//! The exit status is 0 whenever a report is printed, even if checks failed.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use site_audit::initialization::init_logger_with;
use site_audit::output::IgnoreBrokenPipe;
use site_audit::{run_audit, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let report = match run_audit(&config).context("Failed to load site sources") {
        Ok(report) => report,
        Err(e) => {
            eprintln!("site_audit error: {:#}", e);
            process::exit(1);
        }
    };

    let mut stdout = IgnoreBrokenPipe::new(io::stdout().lock());
    write!(stdout, "{}", report.render()).context("Failed to write report")?;
    stdout.flush().context("Failed to write report")?;

    let failures = report.failures();
    if failures.is_empty() {
        info!("All checks passed");
    } else {
        let names: Vec<String> = failures.iter().map(ToString::to_string).collect();
        info!("{} check(s) failed: {}", failures.len(), names.join(", "));
    }

    Ok(())
}
