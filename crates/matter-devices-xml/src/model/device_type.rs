// crates/matter-devices-xml/src/model/device_type.rs

//! Contains model structs for the device-type document
//! (`<configurator><deviceType>...</deviceType>...</configurator>`).

use super::common::TextElement;
use serde::Deserialize;

/// The root element of the device-type document. The root's own name is not
/// checked.
#[derive(Debug, Deserialize, Default)]
pub struct DeviceTypeDocument {
    #[serde(rename = "deviceType", default)]
    pub device_type: Vec<DeviceType>,
}

/// Represents one `<deviceType>` element.
///
/// Repeated `<deviceId>`, `<name>` or `<clusters>` children are collected;
/// only the first of each is read.
#[derive(Debug, Deserialize, Default)]
pub struct DeviceType {
    #[serde(rename = "deviceId", default)]
    pub device_id: Vec<TextElement>, // e.g., "0x0101"

    #[serde(rename = "name", default)]
    pub name: Vec<TextElement>, // e.g., "MA-dimmablelight"

    #[serde(rename = "clusters", default)]
    pub clusters: Vec<ClusterIncludes>,
}

/// Represents `<clusters>`, the list of clusters a device type supports.
#[derive(Debug, Deserialize, Default)]
pub struct ClusterIncludes {
    #[serde(rename = "include", default)]
    pub include: Vec<Include>,
}

/// Represents `<include cluster="On/Off" client="false" server="true" .../>`.
#[derive(Debug, Deserialize, Default)]
pub struct Include {
    #[serde(rename = "@cluster", default)]
    pub cluster: Option<String>,
}
