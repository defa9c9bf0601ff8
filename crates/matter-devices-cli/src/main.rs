// crates/matter-devices-cli/src/main.rs

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use log::{error, info};
use matter_devices_xml::{PipelineOutput, PipelineReport, convert, write_json_file};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// File names of the intermediate stage dumps.
const DEVICE_TYPES_DUMP: &str = "matter-devices.json";
const CLUSTERS_DUMP: &str = "matter-clusters.json";
const MERGED_DUMP: &str = "matter-based.json";
const FILTERED_DUMP: &str = "matter.json";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the conversion described by `cli` and writes every requested file.
fn run(cli: &Cli) -> Result<PipelineReport> {
    let config = cli.pipeline_config()?;

    let output = convert(&cli.devices, &cli.clusters, &config).with_context(|| {
        format!(
            "Failed to convert {} with clusters from {}",
            cli.devices.display(),
            cli.clusters.display()
        )
    })?;

    if let Some(dump_dir) = &cli.dump_dir {
        dump_stages(dump_dir, &output)?;
    }

    write_json_file(&cli.output, &output.projected)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    let report = output.report;
    info!(
        "Wrote {} device types to {} ({} parsed, {} clusters, {} unresolved references)",
        report.projected,
        cli.output.display(),
        report.device_types,
        report.clusters,
        report.unresolved_references
    );
    Ok(report)
}

/// Writes the extracted, merged and filtered stages next to each other.
fn dump_stages(dir: &Path, output: &PipelineOutput) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    write_json_file(dir.join(DEVICE_TYPES_DUMP), &output.device_types)?;
    write_json_file(dir.join(CLUSTERS_DUMP), &output.clusters)?;
    write_json_file(dir.join(MERGED_DUMP), &output.merged)?;
    write_json_file(dir.join(FILTERED_DUMP), &output.filtered)?;

    info!("Wrote intermediate stages to {}", dir.display());
    Ok(())
}
