use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StepError;
use crate::fs::{locate, paths};
use crate::steps::registry::{StepModule, StepRegistry};

/// Extension of step-definition files.
pub const STEP_FILE_EXTENSION: &str = "steps";

/// Glob pattern matching step-definition files.
pub const STEP_FILE_PATTERN: &str = "*.steps";

/// Why a located file was skipped instead of loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The derived module name was empty, so there is nothing to register
    /// the file under. This is the only load failure that is recovered.
    EmptyModuleName,
}

/// Outcome of loading a single located step-definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(String),
    Skipped(SkipReason),
}

/// Loads step-definition files into a [`StepRegistry`].
///
/// The loader resolves module names through an explicit search path. While a
/// file is being loaded its containing directory is prepended to that path
/// and removed again afterwards, so sibling modules can be resolved without
/// the directory leaking into later loads.
#[derive(Debug, Default)]
pub struct StepLoader {
    search_path: Vec<PathBuf>,
}

impl StepLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.steps` file under `root` (recursive, sorted) into
    /// `registry`, replacing entries already present under the same name.
    /// Returns the number of modules loaded.
    ///
    /// A file whose derived module name is empty is skipped; any other
    /// failure aborts the pass with the module name and source path in the
    /// error.
    pub fn load_all(
        &mut self,
        root: &Path,
        registry: &mut StepRegistry,
    ) -> Result<usize, StepError> {
        let files = locate(root, STEP_FILE_PATTERN, true, true)?;

        let mut loaded = 0;
        for file in &files {
            let dir = paths::dirname(file)?;
            self.search_path.insert(0, dir.clone());

            let outcome = self.load_file(file, registry);

            // The prepended directory comes off per file, even when the
            // load failed.
            if let Some(position) = self.search_path.iter().position(|entry| entry == &dir) {
                self.search_path.remove(position);
            }

            match outcome? {
                LoadOutcome::Loaded(name) => {
                    debug!("loaded step definitions '{name}' from {}", file.display());
                    loaded += 1;
                }
                LoadOutcome::Skipped(SkipReason::EmptyModuleName) => {
                    debug!("skipping '{}': empty module name", file.display());
                }
            }
        }

        Ok(loaded)
    }

    fn load_file(
        &mut self,
        file: &Path,
        registry: &mut StepRegistry,
    ) -> Result<LoadOutcome, StepError> {
        let name = paths::filename(file, false);
        if name.is_empty() {
            return Ok(LoadOutcome::Skipped(SkipReason::EmptyModuleName));
        }

        let path = self
            .resolve(&name)
            .ok_or_else(|| StepError::module_not_found(&name, file))?;

        // Always read the current on-disk contents, so editing a step file
        // between passes is picked up without restarting the process.
        let source = fs::read_to_string(&path)
            .map_err(|source| StepError::load_failed(&name, &path, source))?;

        registry.insert(StepModule {
            name: name.clone(),
            path,
            source,
        });

        Ok(LoadOutcome::Loaded(name))
    }

    /// Resolve a module name to a source file through the search path.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.search_path
            .iter()
            .map(|dir| dir.join(format!("{name}.{STEP_FILE_EXTENSION}")))
            .find(|candidate| candidate.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_load_all_registers_every_module() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join("auth")).unwrap();
        std::fs::write(root.join("basic.steps"), "Given a thing").unwrap();
        std::fs::write(root.join("auth/login.steps"), "Given a user").unwrap();

        let mut registry = StepRegistry::new();
        let loaded = StepLoader::new().load_all(root, &mut registry).unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(registry.get("basic").unwrap().source, "Given a thing");
        assert_eq!(registry.get("login").unwrap().source, "Given a user");
    }

    #[test]
    fn test_load_all_rereads_changed_sources() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("login.steps"), "first pass").unwrap();

        let mut registry = StepRegistry::new();
        StepLoader::new().load_all(root, &mut registry).unwrap();
        assert_eq!(registry.get("login").unwrap().source, "first pass");

        std::fs::write(root.join("login.steps"), "second pass").unwrap();
        StepLoader::new().load_all(root, &mut registry).unwrap();

        assert_eq!(registry.get("login").unwrap().source, "second pass");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_search_path_is_cleaned_up_per_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("one.steps"), "").unwrap();
        std::fs::write(root.join("two.steps"), "").unwrap();

        let mut loader = StepLoader::new();
        let mut registry = StepRegistry::new();
        loader.load_all(root, &mut registry).unwrap();

        assert!(loader.search_path.is_empty());
    }

    #[test]
    fn test_separator_boundary_path_is_skipped() {
        let mut loader = StepLoader::new();
        let mut registry = StepRegistry::new();

        // A path with no final component derives an empty module name.
        let outcome = loader.load_file(Path::new("/"), &mut registry).unwrap();

        assert_eq!(outcome, LoadOutcome::Skipped(SkipReason::EmptyModuleName));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unreadable_module_aborts_the_pass() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("binary.steps"), [0xffu8, 0xfe, 0x00, 0x01]).unwrap();
        std::fs::write(root.join("zz_later.steps"), "never reached").unwrap();

        let mut registry = StepRegistry::new();
        let err = StepLoader::new()
            .load_all(root, &mut registry)
            .unwrap_err();

        assert!(err.to_string().contains("'binary'"));
        assert!(!registry.contains("zz_later"));
    }

    #[test]
    fn test_empty_root_loads_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = StepRegistry::new();
        let loaded = StepLoader::new()
            .load_all(temp_dir.path(), &mut registry)
            .unwrap();

        assert_eq!(loaded, 0);
        assert!(registry.is_empty());
    }
}
