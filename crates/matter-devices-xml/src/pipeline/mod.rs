// crates/matter-devices-xml/src/pipeline/mod.rs

//! Handles the logic of turning extracted records into projected devices.
//!
//! This module contains the `run_pipeline` orchestrator and sub-modules for
//! each stage: merge, filter and project.

use crate::config::PipelineConfig;
use crate::error::MatterXmlError;
use crate::parser;
use crate::types::{ClusterRecord, DeviceTypeRecord, PipelineOutput, PipelineReport};
use log::{debug, info};
use std::fs;
use std::path::Path;

// --- Sub-modules ---

pub mod filter;
pub mod merge;
pub mod project;

/// Runs merge, the three filter stages and projection over extracted records.
///
/// Every intermediate stage is returned so callers can inspect or dump it.
///
/// # Errors
/// Fails only when the duplicate-cluster policy rejects the input.
pub fn run_pipeline(
    device_types: Vec<DeviceTypeRecord>,
    clusters: Vec<ClusterRecord>,
    config: &PipelineConfig,
) -> Result<PipelineOutput, MatterXmlError> {
    info!("Device types parsed: {}", device_types.len());
    info!("Clusters parsed: {}", clusters.len());

    // --- Join ---
    let outcome = merge::merge_device_clusters(&device_types, &clusters, config.duplicate_clusters)?;

    // --- Filter ---
    let (filtered, after_device_exclusion) =
        filter::apply_filters_counted(outcome.devices.clone(), config);

    info!("Device types with commands: {}", filtered.len());
    for device in &filtered {
        debug!("  {}", device.name.as_deref().unwrap_or("<unnamed>"));
    }

    // --- Project ---
    let projected = project::project_devices(&filtered, &config.vendor_prefix);

    let report = PipelineReport {
        device_types: device_types.len(),
        clusters: clusters.len(),
        unresolved_references: outcome.unresolved.len(),
        after_device_exclusion,
        after_pruning: filtered.len(),
        projected: projected.len(),
    };

    Ok(PipelineOutput {
        device_types,
        clusters,
        merged: outcome.devices,
        unresolved: outcome.unresolved,
        filtered,
        projected,
        report,
    })
}

/// Loads the device-type document and the cluster directory, then runs the pipeline.
///
/// If the device-type document lives inside `clusters_dir` it is not
/// scanned a second time as a cluster file.
pub fn convert(
    device_types_path: impl AsRef<Path>,
    clusters_dir: impl AsRef<Path>,
    config: &PipelineConfig,
) -> Result<PipelineOutput, MatterXmlError> {
    let device_types_path = device_types_path.as_ref();
    let clusters_dir = clusters_dir.as_ref();

    let device_types = parser::load_device_types(device_types_path)?;

    let clusters = match device_types_path.file_name() {
        Some(file_name) if is_inside(device_types_path, clusters_dir) => {
            parser::load_clusters_dir_skipping(clusters_dir, file_name)?
        }
        _ => parser::load_clusters_dir(clusters_dir)?,
    };

    run_pipeline(device_types, clusters, config)
}

/// Whether `file` sits directly inside `dir`. Paths that cannot be
/// canonicalized are treated as unrelated.
fn is_inside(file: &Path, dir: &Path) -> bool {
    let parent = fs::canonicalize(file)
        .ok()
        .and_then(|f| f.parent().map(Path::to_path_buf));
    match (parent, fs::canonicalize(dir).ok()) {
        (Some(parent), Some(dir)) => parent == dir,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommandRecord;

    fn cluster(name: &str, commands: &[&str]) -> ClusterRecord {
        ClusterRecord {
            id: None,
            name: Some(name.into()),
            commands: commands
                .iter()
                .map(|c| CommandRecord {
                    code: None,
                    name: Some(c.to_string()),
                })
                .collect(),
        }
    }

    fn device(name: &str, clusters: &[&str]) -> DeviceTypeRecord {
        DeviceTypeRecord {
            id: None,
            name: Some(name.into()),
            clusters: clusters.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_report_counts() {
        let devices = vec![
            device("MA-rootdevice", &["OnOff"]),
            device("MA-dimmablelight", &["OnOff", "Groups", "Unknown"]),
            device("MA-bridgednode", &["Groups"]),
        ];
        let clusters = vec![cluster("OnOff", &["On", "Off"]), cluster("Groups", &["AddGroup"])];

        let output = run_pipeline(devices, clusters, &PipelineConfig::default()).unwrap();

        assert_eq!(
            output.report,
            PipelineReport {
                device_types: 3,
                clusters: 2,
                unresolved_references: 1,
                after_device_exclusion: 2,
                after_pruning: 1,
                projected: 1,
            }
        );
        assert_eq!(output.merged.len(), 3);
        assert_eq!(output.projected[0].devicetype, "dimmablelight");
        assert_eq!(output.projected[0].commands, vec!["Off", "On"]);
    }

    #[test]
    fn test_empty_input() {
        let output = run_pipeline(Vec::new(), Vec::new(), &PipelineConfig::default()).unwrap();
        assert!(output.projected.is_empty());
        assert_eq!(output.report, PipelineReport::default());
    }
}
