use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::ReportFormat;
use crate::steps::StepRegistry;

#[derive(Debug, Clone, Serialize)]
pub struct StepModuleSummary {
    pub name: String,
    pub path: PathBuf,
}

/// What a discovery pass found: the resolved base directory, the ordered
/// feature files handed to the execution engine, and the step modules now
/// sitting in the registry.
#[derive(Debug, Serialize)]
pub struct DiscoveryManifest {
    pub base_dir: PathBuf,
    pub feature_files: Vec<PathBuf>,
    pub step_modules: Vec<StepModuleSummary>,
}

impl DiscoveryManifest {
    pub fn new(base_dir: &Path, feature_files: Vec<PathBuf>, registry: &StepRegistry) -> Self {
        let mut step_modules: Vec<StepModuleSummary> = registry
            .modules()
            .map(|module| StepModuleSummary {
                name: module.name.clone(),
                path: module.path.clone(),
            })
            .collect();
        step_modules.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            base_dir: base_dir.to_path_buf(),
            feature_files,
            step_modules,
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(self)?)),
            ReportFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("base dir: {}\n", self.base_dir.display()));

        out.push_str(&format!("features ({}):\n", self.feature_files.len()));
        for feature in &self.feature_files {
            out.push_str(&format!("  {}\n", feature.display()));
        }

        out.push_str(&format!("step modules ({}):\n", self.step_modules.len()));
        for module in &self.step_modules {
            out.push_str(&format!("  {} ({})\n", module.name, module.path.display()));
        }

        out
    }
}
