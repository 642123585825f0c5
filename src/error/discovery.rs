use std::path::PathBuf;
use thiserror::Error;

use super::FsError;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("base path not found: {path}")]
    BasePathNotFound { path: PathBuf },

    #[error("cannot load features from '{path}': not an existing file or directory")]
    FeatureLoading { path: PathBuf },

    #[error(transparent)]
    Fs(#[from] FsError),
}

impl DiscoveryError {
    pub fn base_path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::BasePathNotFound { path: path.into() }
    }

    pub fn feature_loading(path: impl Into<PathBuf>) -> Self {
        Self::FeatureLoading { path: path.into() }
    }
}
