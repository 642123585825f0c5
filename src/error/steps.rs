use std::path::PathBuf;
use thiserror::Error;

use super::FsError;

#[derive(Error, Debug)]
pub enum StepError {
    #[error("step definition module '{module}' not found on the search path (located at '{path}')")]
    ModuleNotFound { module: String, path: PathBuf },

    #[error("failed to load step definitions '{module}' from '{path}': {source}")]
    LoadFailed {
        module: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Fs(#[from] FsError),
}

impl StepError {
    pub fn module_not_found(module: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::ModuleNotFound {
            module: module.into(),
            path: path.into(),
        }
    }

    pub fn load_failed(
        module: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::LoadFailed {
            module: module.into(),
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failed_display() {
        let source = std::io::Error::from(std::io::ErrorKind::InvalidData);
        let err = StepError::load_failed("login", "/steps/login.steps", source);
        let message = err.to_string();
        assert!(message.contains("'login'"));
        assert!(message.contains("/steps/login.steps"));
    }

    #[test]
    fn test_module_not_found_display() {
        let err = StepError::module_not_found("ghost", "/steps/ghost.steps");
        assert!(err.to_string().contains("'ghost'"));
        assert!(err.to_string().contains("not found on the search path"));
    }
}
