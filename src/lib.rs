//! Feature Runner
//!
//! Discovery and loading layer of a behaviour-driven test runner: resolves a
//! base path, locates feature files and step-definition files on disk, loads
//! step definitions into an explicit registry, and extracts scaffolding
//! archives into a target directory.
pub mod cli;
pub mod discovery;
pub mod error;
pub mod fs;
pub mod logging;
pub mod output;
pub mod steps;

pub use discovery::{find_base_path, FeatureLoader, FEATURE_FILE_PATTERN};
pub use error::{Error, Result};
pub use fs::DirStack;
pub use steps::{StepLoader, StepRegistry};
