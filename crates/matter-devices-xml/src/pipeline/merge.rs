// crates/matter-devices-xml/src/pipeline/merge.rs

//! Resolves each device type's cluster-name references to cluster records.

use crate::config::DuplicateClusterPolicy;
use crate::error::MatterXmlError;
use crate::types::{ClusterRecord, DeviceTypeRecord, MergedDeviceRecord, UnresolvedReference};
use log::{info, warn};
use std::collections::BTreeMap;

/// The merged devices plus every reference that could not be resolved.
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    pub devices: Vec<MergedDeviceRecord>,
    pub unresolved: Vec<UnresolvedReference>,
}

/// Builds the name-keyed cluster map used by the join.
///
/// Clusters without a name cannot be referenced and are left out.
pub(crate) fn build_cluster_map<'a>(
    clusters: &'a [ClusterRecord],
    policy: DuplicateClusterPolicy,
) -> Result<BTreeMap<&'a str, &'a ClusterRecord>, MatterXmlError> {
    let mut cluster_map: BTreeMap<&str, &ClusterRecord> = BTreeMap::new();

    for cluster in clusters {
        let Some(name) = cluster.name.as_deref() else {
            continue;
        };
        if cluster_map.insert(name, cluster).is_some() {
            match policy {
                DuplicateClusterPolicy::LastWins => {
                    warn!("Cluster '{}' is defined more than once; using the last definition", name);
                }
                DuplicateClusterPolicy::Reject => {
                    return Err(MatterXmlError::DuplicateCluster { name: name.into() });
                }
            }
        }
    }

    Ok(cluster_map)
}

/// Joins device types with clusters by cluster name.
///
/// Every device type yields exactly one merged record, in input order. Its
/// clusters follow the device's own reference order. A reference with no
/// matching cluster is logged, reported in the outcome and omitted.
///
/// # Errors
/// Returns `MatterXmlError::DuplicateCluster` only under
/// `DuplicateClusterPolicy::Reject`.
pub fn merge_device_clusters(
    devices: &[DeviceTypeRecord],
    clusters: &[ClusterRecord],
    policy: DuplicateClusterPolicy,
) -> Result<MergeOutcome, MatterXmlError> {
    let cluster_map = build_cluster_map(clusters, policy)?;
    let mut outcome = MergeOutcome::default();

    for device in devices {
        let mut merged = MergedDeviceRecord {
            id: device.id.clone(),
            name: device.name.clone(),
            clusters: Vec::with_capacity(device.clusters.len()),
        };

        for cluster_name in &device.clusters {
            match cluster_map.get(cluster_name.as_str()) {
                Some(cluster) => merged.clusters.push((*cluster).clone()),
                None => {
                    info!(
                        "Device type '{}' references unknown cluster '{}'",
                        device.name.as_deref().unwrap_or("<unnamed>"),
                        cluster_name
                    );
                    outcome.unresolved.push(UnresolvedReference {
                        device: device.name.clone(),
                        cluster: cluster_name.clone(),
                    });
                }
            }
        }

        outcome.devices.push(merged);
    }

    Ok(outcome)
}
