// crates/matter-devices-xml/src/pipeline/project.rs

//! Reduces merged devices to the flat `{devicetype, commands}` output shape.

use crate::types::{MergedDeviceRecord, ProjectedDevice};
use log::warn;
use std::collections::BTreeSet;

/// Turns a device-type name into an identifier-safe `devicetype`.
///
/// Strips `vendor_prefix` from the start, replaces spaces with underscores
/// and lower-cases the result: `"MA-Dimmable Light"` -> `"dimmable_light"`.
pub fn normalize_device_name(name: &str, vendor_prefix: &str) -> String {
    let name = if vendor_prefix.is_empty() {
        name
    } else {
        name.strip_prefix(vendor_prefix).unwrap_or(name)
    };
    name.trim().replace(' ', "_").to_lowercase()
}

/// Projects one device, or `None` if it has no usable name or no named commands.
pub fn project_device(device: &MergedDeviceRecord, vendor_prefix: &str) -> Option<ProjectedDevice> {
    let devicetype = device
        .name
        .as_deref()
        .map(|name| normalize_device_name(name, vendor_prefix))
        .filter(|normalized| !normalized.is_empty());

    let Some(devicetype) = devicetype else {
        warn!(
            "Skipping device type {} without a usable name",
            device.id.as_deref().unwrap_or("<no id>")
        );
        return None;
    };

    let commands: BTreeSet<&str> = device
        .clusters
        .iter()
        .flat_map(|cluster| cluster.commands.iter())
        .filter_map(|command| command.name.as_deref())
        .collect();

    if commands.is_empty() {
        warn!("Skipping device type '{}' without named commands", devicetype);
        return None;
    }

    Some(ProjectedDevice {
        devicetype,
        commands: commands.into_iter().map(String::from).collect(),
    })
}

/// Projects every device, keeping the input order.
pub fn project_devices(devices: &[MergedDeviceRecord], vendor_prefix: &str) -> Vec<ProjectedDevice> {
    devices
        .iter()
        .filter_map(|device| project_device(device, vendor_prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClusterRecord, CommandRecord};

    fn cluster(name: &str, commands: &[&str]) -> ClusterRecord {
        ClusterRecord {
            id: None,
            name: Some(name.into()),
            commands: commands
                .iter()
                .map(|c| CommandRecord {
                    code: Some("0x00".into()),
                    name: Some(c.to_string()),
                })
                .collect(),
        }
    }

    fn device(name: Option<&str>, clusters: Vec<ClusterRecord>) -> MergedDeviceRecord {
        MergedDeviceRecord {
            id: Some("0x0101".into()),
            name: name.map(String::from),
            clusters,
        }
    }

    #[test]
    fn test_normalize_device_name() {
        assert_eq!(normalize_device_name("MA-dimmablelight", "MA-"), "dimmablelight");
        assert_eq!(normalize_device_name("MA-Dimmable Light", "MA-"), "dimmable_light");
        assert_eq!(
            normalize_device_name("MA-color-temperature-light", "MA-"),
            "color-temperature-light"
        );
        // Only a leading prefix is stripped.
        assert_eq!(normalize_device_name("Light MA-x", "MA-"), "light_ma-x");
        assert_eq!(normalize_device_name("MA-x", ""), "ma-x");
    }

    #[test]
    fn test_commands_are_sorted_and_unique() {
        let merged = device(
            Some("MA-extendedcolorlight"),
            vec![
                cluster("OnOff", &["Toggle", "Off", "On"]),
                cluster("Scenes", &["On", "AddScene"]),
                cluster("Lowercase", &["off"]),
            ],
        );
        let projected = project_device(&merged, "MA-").unwrap();
        assert_eq!(projected.devicetype, "extendedcolorlight");
        // Case-sensitive: "off" and "Off" are distinct; uppercase sorts first.
        assert_eq!(projected.commands, vec!["AddScene", "Off", "On", "Toggle", "off"]);
    }

    #[test]
    fn test_device_without_name_is_skipped() {
        let merged = device(None, vec![cluster("OnOff", &["On"])]);
        assert_eq!(project_device(&merged, "MA-"), None);

        // A name that is only the prefix normalizes to nothing.
        let merged = device(Some("MA-"), vec![cluster("OnOff", &["On"])]);
        assert_eq!(project_device(&merged, "MA-"), None);
    }

    #[test]
    fn test_device_without_named_commands_is_skipped() {
        let merged = device(
            Some("MA-light"),
            vec![ClusterRecord {
                id: None,
                name: Some("OnOff".into()),
                commands: vec![CommandRecord {
                    code: Some("0x00".into()),
                    name: None,
                }],
            }],
        );
        assert_eq!(project_device(&merged, "MA-"), None);
    }

    #[test]
    fn test_project_devices_keeps_order() {
        let devices = vec![
            device(Some("MA-zeta"), vec![cluster("OnOff", &["On"])]),
            device(None, vec![cluster("OnOff", &["On"])]),
            device(Some("MA-alpha"), vec![cluster("OnOff", &["Off"])]),
        ];
        let projected = project_devices(&devices, "MA-");
        let names: Vec<_> = projected.iter().map(|p| p.devicetype.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }
}
