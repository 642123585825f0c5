use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsError {
    #[error("failed to scan directory '{path}': {source}")]
    Scan {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("failed to expand pattern '{pattern}': {source}")]
    Glob {
        pattern: String,
        source: glob::GlobError,
    },

    #[error("could not determine the current directory: {source}")]
    CurrentDir { source: std::io::Error },

    #[error("failed to change directory to '{path}': {source}")]
    ChangeDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FsError {
    pub fn scan(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Scan {
            path: path.into(),
            source,
        }
    }

    pub fn pattern(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }

    pub fn glob(pattern: impl Into<String>, source: glob::GlobError) -> Self {
        Self::Glob {
            pattern: pattern.into(),
            source,
        }
    }

    pub fn change_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ChangeDir {
            path: path.into(),
            source,
        }
    }
}
