// crates/matter-devices-xml/src/pipeline/filter.rs

//! The three exclusion stages applied to merged devices.
//!
//! The stages must run in the order of [`apply_filters`]: emptiness pruning
//! looks at the cluster set left after cluster exclusion.

use crate::config::PipelineConfig;
use crate::types::MergedDeviceRecord;
use log::info;
use std::collections::BTreeSet;

/// Stage 1: drops devices whose name exactly matches an excluded name.
///
/// Devices without a name are kept.
pub fn exclude_device_types(
    devices: Vec<MergedDeviceRecord>,
    excluded: &BTreeSet<String>,
) -> Vec<MergedDeviceRecord> {
    devices
        .into_iter()
        .filter(|device| {
            device
                .name
                .as_ref()
                .is_none_or(|name| !excluded.contains(name))
        })
        .collect()
}

/// Stage 2: drops clusters whose name exactly matches an excluded name.
pub fn exclude_clusters(
    devices: Vec<MergedDeviceRecord>,
    excluded: &BTreeSet<String>,
) -> Vec<MergedDeviceRecord> {
    devices
        .into_iter()
        .map(|device| MergedDeviceRecord {
            clusters: device
                .clusters
                .into_iter()
                .filter(|cluster| {
                    cluster
                        .name
                        .as_ref()
                        .is_none_or(|name| !excluded.contains(name))
                })
                .collect(),
            ..device
        })
        .collect()
}

/// Stage 3: drops clusters without commands, then devices without clusters.
pub fn prune_empty(devices: Vec<MergedDeviceRecord>) -> Vec<MergedDeviceRecord> {
    devices
        .into_iter()
        .map(|device| MergedDeviceRecord {
            clusters: device
                .clusters
                .into_iter()
                .filter(|cluster| !cluster.commands.is_empty())
                .collect(),
            ..device
        })
        .filter(|device| !device.clusters.is_empty())
        .collect()
}

/// Runs all three stages in order.
pub fn apply_filters(
    devices: Vec<MergedDeviceRecord>,
    config: &PipelineConfig,
) -> Vec<MergedDeviceRecord> {
    apply_filters_counted(devices, config).0
}

/// Like [`apply_filters`], also returning how many devices were left after
/// device-type exclusion.
pub(crate) fn apply_filters_counted(
    devices: Vec<MergedDeviceRecord>,
    config: &PipelineConfig,
) -> (Vec<MergedDeviceRecord>, usize) {
    let devices = exclude_device_types(devices, &config.excluded_device_types);
    let after_device_exclusion = devices.len();
    info!("Device types after exclusion: {}", after_device_exclusion);

    let devices = exclude_clusters(devices, &config.excluded_clusters);
    (prune_empty(devices), after_device_exclusion)
}
