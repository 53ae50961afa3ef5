//! Artifact writing: rendered results into the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{IoError, IoResult};

/// Write one rendered artifact under `dir`, creating the directory if
/// needed. Returns the full path written.
pub fn write_artifact(dir: &Path, name: &str, bytes: &[u8]) -> IoResult<PathBuf> {
    fs::create_dir_all(dir)
        .map_err(|e| IoError::Write(format!("{}: {e}", dir.display())))?;
    let path = dir.join(name);
    fs::write(&path, bytes).map_err(|e| IoError::Write(format!("{}: {e}", path.display())))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_into_a_fresh_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("artifacts");
        let path = write_artifact(&out, "result.json", b"{}").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"{}");
    }

    #[test]
    fn unwritable_target_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("blocker");
        fs::write(&file, b"x").unwrap();
        // Using an existing file as a directory must fail.
        let err = write_artifact(&file, "result.json", b"{}").unwrap_err();
        assert!(matches!(err, IoError::Write(_)));
    }
}
