//! Core logic for recall: weekly note scaffolding and summary compilation.
//! Both binaries are thin shells over this crate.

pub mod calendar;
pub mod config;
pub mod error;
pub mod fsutil;
pub mod logging;
pub mod markdown;
pub mod model;
pub mod service;
pub mod template;

pub use calendar::week::{locate_week_dir, today, WeekSpan};
pub use config::RecallConfig;
pub use error::{RecallError, RecallResult};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status};
pub use markdown::document::{extract_section, MarkdownDocument};
pub use model::section::{DailySection, WeeklySection};
pub use service::compile_service::{CompileOutcome, CompileReport, CompileService, WeeklyDigest};
pub use service::scaffold_service::{CreatedFile, CreatedKind, ScaffoldReport, ScaffoldService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
