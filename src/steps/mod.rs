//! Step-definition loading: an explicit registry of loaded modules and the
//! loader that fills it from `*.steps` files on disk.

pub mod loader;
pub mod registry;

pub use loader::{LoadOutcome, SkipReason, StepLoader, STEP_FILE_EXTENSION, STEP_FILE_PATTERN};
pub use registry::{StepModule, StepRegistry};
