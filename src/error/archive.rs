use std::path::PathBuf;
use thiserror::Error;

use super::FsError;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("failed to open archive '{path}': {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read archive '{path}': {source}")]
    Read {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("failed to read archive entry #{index}: {source}")]
    Entry {
        index: usize,
        source: zip::result::ZipError,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Fs(#[from] FsError),
}

impl ArchiveError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn entry(index: usize, source: zip::result::ZipError) -> Self {
        Self::Entry { index, source }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }
}
