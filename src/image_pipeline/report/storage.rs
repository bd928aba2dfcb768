//! Durable, all-or-nothing report storage.
//!
//! A finished document is written to a temporary file next to its target and
//! renamed into place, so a failed write never leaves a partial report under
//! the report's name.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::image_pipeline::common::error::{ReportError, Result};

/// Stores `contents` as `dir/file_name`, replacing any previous file of that name.
pub fn persist_report(dir: &Path, file_name: &str, contents: &[u8]) -> Result<PathBuf> {
    let target = dir.join(file_name);
    let write_failure =
        |e: std::io::Error| ReportError::WriteFailure(format!("{}: {}", target.display(), e));

    let mut staged = NamedTempFile::new_in(dir).map_err(write_failure)?;
    staged.write_all(contents).map_err(write_failure)?;
    staged.as_file().sync_all().map_err(write_failure)?;
    debug!("Staged {} bytes at {}", contents.len(), staged.path().display());

    staged.persist(&target).map_err(|e| write_failure(e.error))?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_replaces() {
        let dir = tempfile::tempdir().unwrap();

        let first = persist_report(dir.path(), "report.txt", b"first").unwrap();
        let second = persist_report(dir.path(), "report.txt", b"second").unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second).unwrap(), b"second");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_directory_is_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-there");

        let result = persist_report(&missing, "report.txt", b"data");

        assert!(matches!(result, Err(ReportError::WriteFailure(_))));
        assert!(!missing.exists());
    }
}
