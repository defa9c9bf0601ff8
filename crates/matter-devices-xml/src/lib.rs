// src/lib.rs

#![doc = "Converts Matter device-type and cluster XML definitions into a flat JSON model."]
#![doc = ""]
#![doc = "The pipeline runs strictly left to right:"]
#![doc = "- extraction: `load_device_types` and `load_clusters_dir` read the XML documents;"]
#![doc = "- join: `merge_device_clusters` resolves cluster names to cluster records;"]
#![doc = "- filters: `apply_filters` drops excluded device types, excluded clusters, then empty entries;"]
#![doc = "- projection: `project_devices` yields sorted, unique command names per device type."]
#![doc = ""]
#![doc = "`convert` runs everything; `write_json_file` is the output sink."]

// --- Crate Modules ---

mod config;
mod error;
mod model;
mod parser;
mod pipeline;
mod types;
mod writer;

// --- Public API Re-exports ---

pub use config::{
    DEFAULT_EXCLUDED_CLUSTERS, DEFAULT_EXCLUDED_DEVICE_TYPES, DEFAULT_VENDOR_PREFIX,
    DuplicateClusterPolicy, PipelineConfig,
};
pub use error::MatterXmlError;
pub use parser::{
    load_clusters, load_clusters_dir, load_clusters_dir_skipping, load_clusters_from_str,
    load_device_types, load_device_types_from_str,
};
pub use pipeline::filter::{apply_filters, exclude_clusters, exclude_device_types, prune_empty};
pub use pipeline::merge::{MergeOutcome, merge_device_clusters};
pub use pipeline::project::{normalize_device_name, project_device, project_devices};
pub use pipeline::{convert, run_pipeline};
pub use types::{
    ClusterRecord, CommandRecord, DeviceTypeRecord, MergedDeviceRecord, PipelineOutput,
    PipelineReport, ProjectedDevice, UnresolvedReference,
};
pub use writer::{to_json_string, to_json_vec, write_json_file};
