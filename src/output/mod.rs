pub mod manifest;

pub use manifest::{DiscoveryManifest, StepModuleSummary};
