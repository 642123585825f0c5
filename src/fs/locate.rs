use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::FsError;
use crate::fs::paths;

/// Locate files under `root` whose name matches the glob `pattern`.
///
/// Recursive mode walks the tree top-down with unbounded depth and matches
/// every regular file's name; non-recursive mode is a single glob expansion
/// of `root/pattern`. Results are absolute, each file appears once, and with
/// `sort` the list is ordered ascending by full path so discovery order is
/// stable across runs regardless of directory-entry ordering.
pub fn locate(
    root: &Path,
    pattern: &str,
    recursive: bool,
    sort: bool,
) -> Result<Vec<PathBuf>, FsError> {
    let root = paths::abspath(root)?;

    let mut found = if recursive {
        let matcher =
            Pattern::new(pattern).map_err(|source| FsError::pattern(pattern, source))?;
        let mut files = Vec::new();
        for entry in WalkDir::new(&root) {
            let entry = entry.map_err(|source| FsError::scan(&root, source))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if matcher.matches(&entry.file_name().to_string_lossy()) {
                files.push(entry.into_path());
            }
        }
        files
    } else {
        let expr = root.join(pattern);
        let entries = glob::glob(&expr.to_string_lossy())
            .map_err(|source| FsError::pattern(pattern, source))?;
        let mut files = Vec::new();
        for entry in entries {
            files.push(entry.map_err(|source| FsError::glob(pattern, source))?);
        }
        files
    };

    if sort && !found.is_empty() {
        found.sort();
    }

    Ok(found)
}
