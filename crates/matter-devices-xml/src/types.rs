// crates/matter-devices-xml/src/types.rs

//! Public, ergonomic data structures produced by each pipeline stage.
//!
//! Every record serializes to JSON with the field names used by the
//! downstream tooling. Optional fields that were absent in the XML are
//! omitted from the JSON.

use serde::Serialize;

// --- Extraction Output ---

/// A `<deviceType>` as extracted from the device-type document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DeviceTypeRecord {
    /// `<deviceId>`, lower-cased (e.g., "0x0101").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `<name>` (e.g., "MA-dimmablelight").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cluster names from `clusters/include[@cluster]`, in document order.
    pub clusters: Vec<String>,
}

/// A `<cluster>` as extracted from one of the cluster documents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ClusterRecord {
    /// `<code>`, lower-cased (e.g., "0x0006").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `<name>`, the key used to resolve device-type references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// All `<command>` children, in document order.
    pub commands: Vec<CommandRecord>,
}

/// A `<command>` element, copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CommandRecord {
    /// `@code` (e.g., "0x00").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// `@name` (e.g., "Off").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// --- Merge Output ---

/// A device type with its cluster references resolved to full clusters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MergedDeviceRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub clusters: Vec<ClusterRecord>,
}

/// A device type referenced a cluster name that no cluster document defines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    /// The device type's name, if it had one.
    pub device: Option<String>,
    /// The cluster name that could not be resolved.
    pub cluster: String,
}

// --- Projection Output ---

/// The final output unit: one template-ready device type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedDevice {
    /// Normalized device name (e.g., "dimmablelight").
    pub devicetype: String,
    /// Command names across all clusters, sorted and unique.
    pub commands: Vec<String>,
}

// --- Pipeline Summary ---

/// Counts reported after a run, for sanity-checking the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PipelineReport {
    pub device_types: usize,
    pub clusters: usize,
    pub unresolved_references: usize,
    /// Devices left after the device-type exclusion stage.
    pub after_device_exclusion: usize,
    /// Devices left after emptiness pruning.
    pub after_pruning: usize,
    pub projected: usize,
}

/// Every intermediate stage of a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    pub device_types: Vec<DeviceTypeRecord>,
    pub clusters: Vec<ClusterRecord>,
    pub merged: Vec<MergedDeviceRecord>,
    pub unresolved: Vec<UnresolvedReference>,
    pub filtered: Vec<MergedDeviceRecord>,
    pub projected: Vec<ProjectedDevice>,
    pub report: PipelineReport,
}
