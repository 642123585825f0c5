use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::FsError;
use crate::fs::paths;

/// LIFO stack of working-directory contexts.
///
/// The first `pushd` captures the pre-existing working directory as a
/// permanent anchor, so one matching `popd` per `pushd` restores the
/// directory the process started the scope in. Nested scopes are supported.
/// The process working directory is a global resource, so a `DirStack` must
/// not be shared across threads.
#[derive(Debug, Default)]
pub struct DirStack {
    stack: Vec<PathBuf>,
}

impl DirStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the working directory to `path`, remembering where we were.
    pub fn pushd(&mut self, path: &Path) -> Result<(), FsError> {
        let path = paths::abspath(path)?;
        if self.stack.is_empty() {
            self.stack.push(paths::current_dir()?);
        }

        self.stack.push(path.clone());
        debug!("pushd {}", path.display());
        env::set_current_dir(&path).map_err(|source| FsError::change_dir(path, source))
    }

    /// Go back one entry in the stack.
    ///
    /// Pops the top entry and restores the working directory to the entry
    /// below it. If the pop empties the stack, the working directory is left
    /// where it is: the anchor is only ever restored by an explicit pop down
    /// to it, never implicitly.
    pub fn popd(&mut self) -> Result<(), FsError> {
        if self.stack.pop().is_some() {
            if let Some(top) = self.stack.last() {
                debug!("popd -> {}", top.display());
                env::set_current_dir(top)
                    .map_err(|source| FsError::change_dir(top.clone(), source))?;
            }
        }
        Ok(())
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
