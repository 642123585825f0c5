use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use feature_runner_core::output::DiscoveryManifest;
use feature_runner_core::{cli, logging};
use feature_runner_core::{find_base_path, FeatureLoader, StepRegistry};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet));

    // Run configuration this layer only collects; the execution engine
    // interprets it.
    debug!(
        scenarios = ?args.scenarios,
        abort_fail = args.abort_fail,
        "run configuration collected"
    );

    let (base_dir, explicit_feature) =
        find_base_path(&args.base_path).context("failed to resolve base path")?;

    let loader = FeatureLoader::new(&base_dir)?;
    let mut registry = StepRegistry::new();
    loader
        .find_and_load_step_definitions(&mut registry)
        .context("failed to load step definitions")?;

    let requested = args.feature_paths()?;
    let feature_files = if !requested.is_empty() {
        loader
            .load_feature_files(&requested)
            .context("failed to load feature files")?
    } else if let Some(feature) = explicit_feature {
        vec![feature]
    } else {
        loader
            .find_feature_files(None)
            .context("failed to find feature files")?
    };

    let manifest = DiscoveryManifest::new(&base_dir, feature_files, &registry);
    let report = manifest.render(args.format)?;

    match args.output_file {
        Some(path) => std::fs::write(&path, report)
            .with_context(|| format!("failed to write report to {}", path.display()))?,
        None => print!("{report}"),
    }

    Ok(())
}
