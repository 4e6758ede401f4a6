//! Explicit configuration for recall operations.
//!
//! # Responsibility
//! - Carry the notes base directory into services as a value.
//! - Derive every well-known path under the base in one place.
//!
//! # Invariants
//! - Core code never consults a process-wide base directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default base directory, relative to the working directory.
pub const DEFAULT_BASE_DIR: &str = "Recall";
/// Templates directory name under the base directory.
pub const TEMPLATES_DIR_NAME: &str = "Templates";
/// Daily template file name.
pub const DAILY_TEMPLATE_FILE: &str = "daily-template.md";
/// Weekly template file name.
pub const WEEKLY_TEMPLATE_FILE: &str = "weekly-template.md";

/// Configuration shared by the scaffolder and the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecallConfig {
    /// Root of the year/quarter/week hierarchy.
    pub base_dir: PathBuf,
}

impl RecallConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.base_dir.join(TEMPLATES_DIR_NAME)
    }

    pub fn daily_template_path(&self) -> PathBuf {
        self.templates_dir().join(DAILY_TEMPLATE_FILE)
    }

    pub fn weekly_template_path(&self) -> PathBuf {
        self.templates_dir().join(WEEKLY_TEMPLATE_FILE)
    }

    /// `<base>/<year>`
    pub fn year_dir(&self, year: i32) -> PathBuf {
        self.base_dir.join(year.to_string())
    }

    /// `<base>/<year>/Q<quarter>`
    pub fn quarter_dir(&self, year: i32, quarter: u32) -> PathBuf {
        self.year_dir(year).join(format!("Q{quarter}"))
    }
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR)
    }
}
