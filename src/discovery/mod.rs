//! Discovery orchestration: base-path resolution and the loader that turns a
//! base directory into feature files and a populated step registry.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{DiscoveryError, StepError};
use crate::fs::{locate, paths};
use crate::steps::{StepLoader, StepRegistry};

/// Glob pattern matching feature files.
pub const FEATURE_FILE_PATTERN: &str = "*.feature";

/// Resolve a user-supplied base path into the discovery root.
///
/// An existing directory resolves to its absolute form. An existing regular
/// file resolves to its containing directory, with the file itself
/// remembered as an explicit feature file (single-feature-file invocations).
/// Anything else fails fast with the original argument in the error, before
/// any scanning begins.
pub fn find_base_path(base_path: &Path) -> Result<(PathBuf, Option<PathBuf>), DiscoveryError> {
    if base_path.is_dir() {
        Ok((paths::abspath(base_path)?, None))
    } else if base_path.is_file() {
        let feature_file = paths::abspath(base_path)?;
        Ok((paths::dirname(base_path)?, Some(feature_file)))
    } else {
        Err(DiscoveryError::base_path_not_found(base_path))
    }
}

/// Finds feature files and step definitions along a base directory.
pub struct FeatureLoader {
    base_dir: PathBuf,
}

impl FeatureLoader {
    pub fn new(base_dir: &Path) -> Result<Self, DiscoveryError> {
        Ok(Self {
            base_dir: paths::abspath(base_dir)?,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Run a step-loading pass over the base directory.
    ///
    /// The registry is cleared first and repopulated from the current
    /// on-disk state, so no stale definitions survive between passes.
    /// Returns the number of modules loaded.
    pub fn find_and_load_step_definitions(
        &self,
        registry: &mut StepRegistry,
    ) -> Result<usize, StepError> {
        registry.clear();
        let loaded = StepLoader::new().load_all(&self.base_dir, registry)?;
        info!(
            "loaded {loaded} step definition module(s) from {}",
            self.base_dir.display()
        );
        Ok(loaded)
    }

    /// Turn an ordered list of explicit arguments into feature files.
    ///
    /// Files are taken as given; directories contribute their recursive,
    /// sorted feature files; the first argument that is neither fails the
    /// whole call, discarding anything collected so far.
    pub fn load_feature_files(&self, feature_paths: &[PathBuf]) -> Result<Vec<PathBuf>, DiscoveryError> {
        let mut feature_files = Vec::new();
        if feature_paths.is_empty() {
            return Ok(feature_files);
        }

        if let [single] = feature_paths {
            if single.is_file() {
                feature_files.push(single.clone());
                return Ok(feature_files);
            }
        }

        for path in feature_paths {
            if path.is_file() {
                feature_files.push(path.clone());
            } else if path.is_dir() {
                feature_files.extend(self.find_feature_files(Some(path))?);
            } else {
                return Err(DiscoveryError::feature_loading(path));
            }
        }

        Ok(feature_files)
    }

    /// Recursive, sorted feature-file discovery under `path`, defaulting to
    /// the base directory.
    pub fn find_feature_files(&self, path: Option<&Path>) -> Result<Vec<PathBuf>, DiscoveryError> {
        let root = path.unwrap_or(&self.base_dir);
        Ok(locate(root, FEATURE_FILE_PATTERN, true, true)?)
    }
}
