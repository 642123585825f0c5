//! Filesystem primitives for discovery: path math, scoped working-directory
//! changes, pattern-matched file location, and archive extraction.

pub mod archive;
pub mod dirstack;
pub mod locate;
pub mod paths;

pub use archive::{extract_zip, EntryOutcome};
pub use dirstack::DirStack;
pub use locate::locate;

use std::fs;
use std::io;
use std::path::Path;

/// Create `path` and its parents, ignoring "already exists" only when the
/// existing path is in fact a directory.
pub fn mkdir_p(path: &Path) -> io::Result<()> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mkdir_p_creates_nested_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/lot/of/nested/dirs");
        mkdir_p(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_mkdir_p_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("dir");
        mkdir_p(&nested).unwrap();
        mkdir_p(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_mkdir_p_rejects_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("occupied");
        fs::write(&file, "not a directory").unwrap();
        assert!(mkdir_p(&file).is_err());
    }
}
