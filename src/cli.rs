use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::FsError;
use crate::fs::paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "feature-runner")]
#[command(about = "Behaviour-driven test runner - discover features and load step definitions", long_about = None)]
pub struct Args {
    /// Feature files or directories to run; discovered under the base path
    /// when omitted
    #[arg(value_name = "FEATURE")]
    pub features: Vec<PathBuf>,

    /// Base path where features and step definitions live
    #[arg(short = 'b', long, default_value = "features", value_name = "PATH")]
    pub base_path: PathBuf,

    /// Comma separated list of scenarios to run (passed to the execution
    /// engine)
    #[arg(short = 's', long, value_name = "NAMES")]
    pub scenarios: Option<String>,

    /// Stop at the first failing feature (passed to the execution engine)
    #[arg(short = 'a', long)]
    pub abort_fail: bool,

    /// Report format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Explicit feature arguments in absolute form, preserving order.
    pub fn feature_paths(&self) -> Result<Vec<PathBuf>, FsError> {
        self.features.iter().map(|f| paths::abspath(f)).collect()
    }
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}
