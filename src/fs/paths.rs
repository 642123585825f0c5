use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::FsError;

/// Absolute path of the process working directory.
pub fn current_dir() -> Result<PathBuf, FsError> {
    env::current_dir().map_err(|source| FsError::CurrentDir { source })
}

/// Absolute form of `path`: joined onto the current directory when relative,
/// then lexically normalized. The path is not required to exist and symlinks
/// are not resolved.
pub fn abspath(path: &Path) -> Result<PathBuf, FsError> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&current_dir()?.join(path)))
    }
}

/// Lexical normalization: drops `.` components and folds `..` into the
/// preceding component without consulting the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut normalized =
        if let Some(component @ Component::Prefix(..)) = components.peek().copied() {
            components.next();
            PathBuf::from(component.as_os_str())
        } else {
            PathBuf::new()
        };

    for component in components {
        match component {
            Component::Prefix(_) => {}
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(name) => normalized.push(name),
        }
    }

    normalized
}

/// Absolute directory containing `path`.
pub fn dirname(path: &Path) -> Result<PathBuf, FsError> {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    abspath(parent)
}

/// Final component of `path` as a string. With `with_extension` false the
/// extension after the last interior dot is stripped; a leading dot alone
/// does not count as an extension. Paths without a final component (such as
/// `/` or `..`) yield the empty string.
pub fn filename(path: &Path, with_extension: bool) -> String {
    let mut name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return String::new(),
    };

    if !with_extension {
        if let Some(dot) = name.rfind('.') {
            if dot > 0 {
                name.truncate(dot);
            }
        }
    }

    name
}

/// `path` made relative to the current working directory by stripping the
/// working directory as a component-wise prefix. A path outside the current
/// directory is returned unchanged in absolute form, so callers must not
/// assume the result is relative.
pub fn relpath(path: &Path) -> Result<PathBuf, FsError> {
    let current = current_dir()?;
    let absolute = abspath(path)?;
    match absolute.strip_prefix(&current) {
        Ok(stripped) => Ok(stripped.to_path_buf()),
        Err(_) => Ok(absolute),
    }
}
