//! Internal `serde` data structures that map directly to the Matter XML documents.
//!
//! Two document shapes are understood: the device-type document (repeated
//! `<deviceType>` elements) and the cluster documents (repeated `<cluster>`
//! elements). Only the elements the pipeline reads are modelled; everything
//! else in the documents is ignored by the deserializer. These structs are
//! not intended for direct public use.

pub mod cluster;
pub mod common;
pub mod device_type;

// Re-export key components for internal use
pub use cluster::{Cluster, ClusterDocument};
pub use common::TextElement;
pub use device_type::{DeviceType, DeviceTypeDocument};
