//! Shared command-line plumbing for `recall-setup` and `recall-compile`.
//!
//! # Responsibility
//! - Define the flags both binaries accept.
//! - Turn those flags into a `RecallConfig`, a target date and a logger.

use chrono::NaiveDate;
use clap::Args;
use recall_core::config::DEFAULT_BASE_DIR;
use recall_core::{default_log_level, init_logging, init_stderr_logging, today, RecallConfig};
use serde::Serialize;
use std::path::PathBuf;

/// Flags common to both binaries.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Root directory of the notes hierarchy.
    #[arg(long, env = "RECALL_BASE_DIR", default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// Target date in YYYY-MM-DD format (defaults to today).
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Log level: trace, debug, info, warn or error (defaults per build mode).
    #[arg(long, env = "RECALL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logs go to stderr when unset.
    #[arg(long, env = "RECALL_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Print the run report as JSON instead of human-readable lines.
    #[arg(long)]
    pub json: bool,
}

impl CommonArgs {
    pub fn config(&self) -> RecallConfig {
        RecallConfig::new(&self.base_dir)
    }

    pub fn target_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(today)
    }

    /// Explicit `--log-level`, else the build-mode default.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or_else(|| default_log_level())
    }

    /// Starts file or stderr logging according to the flags.
    pub fn init_logging(&self) -> Result<(), String> {
        match &self.log_dir {
            Some(dir) => {
                let dir = dir
                    .to_str()
                    .ok_or_else(|| format!("log dir is not valid UTF-8: {}", dir.display()))?;
                init_logging(self.log_level(), dir)
            }
            None => init_stderr_logging(self.log_level()),
        }
    }
}

/// Parses a `YYYY-MM-DD` date argument.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| format!("expected YYYY-MM-DD, got `{value}`: {err}"))
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let rendered = serde_json::to_string_pretty(value).map_err(|err| err.to_string())?;
    println!("{rendered}");
    Ok(())
}
