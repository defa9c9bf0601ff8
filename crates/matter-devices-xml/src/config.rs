// crates/matter-devices-xml/src/config.rs

//! Pipeline configuration: which device types and clusters to exclude, the
//! vendor prefix stripped during projection, and the duplicate-cluster policy.

use crate::error::MatterXmlError;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Base device types that never produce a template.
pub const DEFAULT_EXCLUDED_DEVICE_TYPES: &[&str] = &[
    "MA-rootdevice",
    "MA-controlbridge",
    "MA-network-infrastructure-manager",
    "MA-thread-border-router",
    "MA-all-clusters-app",
    "MA-secondary-network-interface",
];

/// Administrative clusters present on nearly every device type.
pub const DEFAULT_EXCLUDED_CLUSTERS: &[&str] = &["Groups", "Identify"];

/// Prefix carried by every device-type name in the Matter XML.
pub const DEFAULT_VENDOR_PREFIX: &str = "MA-";

/// What the merge stage does when two clusters share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateClusterPolicy {
    /// The cluster read last replaces earlier ones. A warning is logged.
    #[default]
    LastWins,
    /// Fail with `MatterXmlError::DuplicateCluster`.
    Reject,
}

/// Settings for a pipeline run.
///
/// Deserializable from JSON; omitted keys keep their default value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub excluded_device_types: BTreeSet<String>,
    pub excluded_clusters: BTreeSet<String>,
    pub vendor_prefix: String,
    pub duplicate_clusters: DuplicateClusterPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            excluded_device_types: DEFAULT_EXCLUDED_DEVICE_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excluded_clusters: DEFAULT_EXCLUDED_CLUSTERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            vendor_prefix: DEFAULT_VENDOR_PREFIX.into(),
            duplicate_clusters: DuplicateClusterPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// A configuration that excludes nothing.
    pub fn empty() -> Self {
        Self {
            excluded_device_types: BTreeSet::new(),
            excluded_clusters: BTreeSet::new(),
            ..Self::default()
        }
    }

    /// Parses a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, MatterXmlError> {
        serde_json::from_str(json).map_err(MatterXmlError::ConfigParsing)
    }
}
