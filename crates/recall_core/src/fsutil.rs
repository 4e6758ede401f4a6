//! Filesystem helpers for non-destructive writes.
//!
//! # Invariants
//! - `write_if_absent` never truncates or replaces an existing file.
//! - `atomic_write` leaves either the old or the new file visible, never a
//!   partial one.

use crate::error::{RecallError, RecallResult};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Creates `dir` (and parents) when missing. Returns `true` if it was created.
pub fn ensure_dir(dir: &Path) -> RecallResult<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|err| RecallError::io(dir, err))?;
    Ok(true)
}

/// Writes `contents` to `path` only when no file exists there yet.
///
/// Uses create-new open semantics, so a file appearing between the check and
/// the write is left intact. Returns `true` if the file was written.
pub fn write_if_absent(path: &Path, contents: &str) -> RecallResult<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(RecallError::io(path, err)),
    };
    file.write_all(contents.as_bytes())
        .map_err(|err| RecallError::io(path, err))?;
    Ok(true)
}

/// Writes `data` to `path` via temp file and rename.
pub fn atomic_write(path: &Path, data: &[u8]) -> RecallResult<()> {
    let tmp = path.with_extension("tmp");
    let mut file = File::create(&tmp).map_err(|err| RecallError::io(&tmp, err))?;
    file.write_all(data)
        .map_err(|err| RecallError::io(&tmp, err))?;
    file.sync_data().map_err(|err| RecallError::io(&tmp, err))?;
    fs::rename(&tmp, path).map_err(|err| RecallError::io(path, err))?;
    Ok(())
}

pub fn read_text(path: &Path) -> RecallResult<String> {
    fs::read_to_string(path).map_err(|err| RecallError::io(path, err))
}

#[cfg(test)]
mod tests {
    use super::{atomic_write, ensure_dir, write_if_absent};
    use std::fs;

    #[test]
    fn write_if_absent_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.md");

        assert!(write_if_absent(&path, "first").unwrap());
        assert!(!write_if_absent(&path, "second").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn ensure_dir_reports_creation_once() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        assert!(ensure_dir(&nested).unwrap());
        assert!(!ensure_dir(&nested).unwrap());
    }

    #[test]
    fn atomic_write_replaces_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("week01-summary_draft.md");

        atomic_write(&path, b"one").unwrap();
        atomic_write(&path, b"two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "two");
        assert!(!dir.path().join("week01-summary_draft.tmp").exists());
    }
}
