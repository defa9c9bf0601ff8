// crates/matter-devices-xml/src/model/common.rs

//! Contains helper structs shared by both document shapes.

use serde::Deserialize;

/// Represents a text-only element such as `<name>On/Off</name>` or
/// `<deviceId editable="false">0x0100</deviceId>`.
///
/// Attributes on the element are ignored.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct TextElement {
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl TextElement {
    /// Returns the trimmed text, or `None` when the element is empty.
    pub fn text(&self) -> Option<&str> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }
}
