//! Error taxonomy shared by scaffolding and compilation.
//!
//! # Responsibility
//! - Give every fatal condition a distinct, path-carrying variant.
//! - Keep I/O failures attributable to the file that caused them.
//!
//! # Invariants
//! - "No daily notes" is not an error; it is reported through
//!   `CompileOutcome::NoDailyNotes`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

pub type RecallResult<T> = Result<T, RecallError>;

/// Failure raised by recall core operations.
#[derive(Debug)]
pub enum RecallError {
    /// No `Week<NN>-*` directory exists in the resolved quarter directory.
    WeekNotFound { week: u32, year: i32 },
    /// The week directory has no `daily/` subdirectory.
    DailyDirNotFound(PathBuf),
    /// The week directory has no `week*-summary.md` file.
    SummaryNotFound(PathBuf),
    /// A template file disappeared between creation and read.
    TemplateNotFound(PathBuf),
    /// Filesystem read/write failure.
    Io { path: PathBuf, source: io::Error },
}

impl RecallError {
    /// Wraps an I/O error together with the path it occurred on.
    pub(crate) fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl Display for RecallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WeekNotFound { week, year } => {
                write!(f, "could not find directory for week {week} of {year}")
            }
            Self::DailyDirNotFound(path) => {
                write!(f, "daily notes directory not found: {}", path.display())
            }
            Self::SummaryNotFound(path) => {
                write!(f, "weekly summary template not found in {}", path.display())
            }
            Self::TemplateNotFound(path) => write!(f, "template not found: {}", path.display()),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl Error for RecallError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
