// crates/matter-devices-xml/src/writer.rs

//! Serializes pipeline stages to JSON.
//!
//! Output uses 4-space indentation, keeps non-ASCII characters as-is and ends
//! with a newline. The same input always produces the same bytes.

use crate::error::MatterXmlError;
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Serializes `value` into indented JSON bytes.
pub fn to_json_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, MatterXmlError> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}

/// Serializes `value` into an indented JSON string.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String, MatterXmlError> {
    let bytes = to_json_vec(value)?;
    String::from_utf8(bytes).map_err(|e| MatterXmlError::JsonSerializing(serde_json::Error::custom(e)))
}

/// Writes `value` as indented JSON to `path`, replacing any existing file.
pub fn write_json_file<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    value: &T,
) -> Result<(), MatterXmlError> {
    let path = path.as_ref();
    let bytes = to_json_vec(value)?;
    fs::write(path, bytes).map_err(|e| MatterXmlError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectedDevice;

    #[test]
    fn test_four_space_indent() {
        let devices = vec![ProjectedDevice {
            devicetype: "dimmablelight".into(),
            commands: vec!["Off".into(), "On".into()],
        }];
        let json = to_json_string(&devices).unwrap();
        let expected = r#"[
    {
        "devicetype": "dimmablelight",
        "commands": [
            "Off",
            "On"
        ]
    }
]
"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let device = ProjectedDevice {
            devicetype: "照明".into(),
            commands: vec!["Ein".into(), "Öffnen".into()],
        };
        let json = to_json_string(&device).unwrap();
        assert!(json.contains("\"照明\""));
        assert!(json.contains("\"Öffnen\""));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_empty_list() {
        let devices: Vec<ProjectedDevice> = Vec::new();
        assert_eq!(to_json_string(&devices).unwrap(), "[]\n");
    }
}
