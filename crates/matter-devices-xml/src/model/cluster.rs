// crates/matter-devices-xml/src/model/cluster.rs

//! Contains model structs for a cluster document
//! (`<configurator><cluster>...</cluster>...</configurator>`).

use super::common::TextElement;
use serde::Deserialize;

/// The root element of a cluster document. Documents without any `<cluster>`
/// (enum-only files, the device-type document) deserialize to an empty list.
#[derive(Debug, Deserialize, Default)]
pub struct ClusterDocument {
    #[serde(rename = "cluster", default)]
    pub cluster: Vec<Cluster>,
}

/// Represents one `<cluster>` element.
///
/// `name` and `code` are single-valued; a repeated element is collected and
/// only the first occurrence is read.
#[derive(Debug, Deserialize, Default)]
pub struct Cluster {
    #[serde(rename = "name", default)]
    pub name: Vec<TextElement>,

    /// The cluster id as written in the document (e.g., "0x0006").
    #[serde(rename = "code", default)]
    pub code: Vec<TextElement>,

    #[serde(rename = "command", default)]
    pub command: Vec<Command>,
}

/// Represents `<command source="client" code="0x00" name="Off" ...>`.
#[derive(Debug, Deserialize, Default)]
pub struct Command {
    #[serde(rename = "@code", default)]
    pub code: Option<String>,

    #[serde(rename = "@name", default)]
    pub name: Option<String>,
}
