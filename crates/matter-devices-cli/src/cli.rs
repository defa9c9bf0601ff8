//! CLI argument parsing for matter-devices

use anyhow::{Context, Result};
use clap::Parser;
use matter_devices_xml::{DuplicateClusterPolicy, PipelineConfig};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "matter-devices")]
#[command(version)]
#[command(about = "Converts Matter device-type and cluster XML into a device/command JSON list", long_about = None)]
pub struct Cli {
    /// XML document containing the <deviceType> definitions
    #[arg(long = "devices", value_name = "FILE")]
    pub devices: PathBuf,

    /// Directory of cluster XML documents
    #[arg(long = "clusters", value_name = "DIR")]
    pub clusters: PathBuf,

    /// Where to write the resulting JSON
    #[arg(short, long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// JSON configuration file (exclusion lists, vendor prefix, duplicate policy)
    #[arg(short, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Additional device-type name to exclude (repeatable)
    #[arg(long = "exclude-device", value_name = "NAME")]
    pub exclude_devices: Vec<String>,

    /// Additional cluster name to exclude (repeatable)
    #[arg(long = "exclude-cluster", value_name = "NAME")]
    pub exclude_clusters: Vec<String>,

    /// Fail when two clusters share a name instead of keeping the last one
    #[arg(long = "reject-duplicate-clusters")]
    pub reject_duplicate_clusters: bool,

    /// Also write the intermediate stages as JSON into this directory
    #[arg(long = "dump-dir", value_name = "DIR")]
    pub dump_dir: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the pipeline configuration: file (or defaults), then command-line additions.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                PipelineConfig::from_json_str(&json)
                    .with_context(|| format!("Failed to load config {}", path.display()))?
            }
            None => PipelineConfig::default(),
        };

        config
            .excluded_device_types
            .extend(self.exclude_devices.iter().cloned());
        config
            .excluded_clusters
            .extend(self.exclude_clusters.iter().cloned());
        if self.reject_duplicate_clusters {
            config.duplicate_clusters = DuplicateClusterPolicy::Reject;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const REQUIRED: [&str; 7] = [
        "matter-devices",
        "--devices",
        "matter-devices.xml",
        "--clusters",
        "xml",
        "--output",
        "devicetype.json",
    ];

    #[test]
    fn test_required_arguments() {
        let cli = Cli::try_parse_from(REQUIRED).unwrap();
        assert_eq!(cli.devices, PathBuf::from("matter-devices.xml"));
        assert_eq!(cli.clusters, PathBuf::from("xml"));
        assert_eq!(cli.output, PathBuf::from("devicetype.json"));
        assert!(cli.config.is_none());
        assert!(!cli.verbose);

        assert!(Cli::try_parse_from(["matter-devices", "--devices", "a.xml"]).is_err());
    }

    #[test]
    fn test_default_config_when_no_file() {
        let cli = Cli::try_parse_from(REQUIRED).unwrap();
        assert_eq!(cli.pipeline_config().unwrap(), PipelineConfig::default());
    }

    #[test]
    fn test_command_line_exclusions_are_added() {
        let args = REQUIRED.iter().copied().chain([
            "--exclude-device",
            "MA-bridgednode",
            "--exclude-cluster",
            "Scenes Management",
            "--exclude-cluster",
            "Descriptor",
            "--reject-duplicate-clusters",
        ]);
        let config = Cli::try_parse_from(args).unwrap().pipeline_config().unwrap();

        assert!(config.excluded_device_types.contains("MA-bridgednode"));
        assert!(config.excluded_device_types.contains("MA-rootdevice"));
        assert!(config.excluded_clusters.contains("Scenes Management"));
        assert!(config.excluded_clusters.contains("Descriptor"));
        assert!(config.excluded_clusters.contains("Groups"));
        assert_eq!(config.duplicate_clusters, DuplicateClusterPolicy::Reject);
    }

    #[test]
    fn test_config_file_replaces_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "excluded_clusters": ["Descriptor"], "vendor_prefix": "" }"#).unwrap();

        let path_str = path.to_str().unwrap();
        let args = REQUIRED.iter().copied().chain(["--config", path_str]);
        let config = Cli::try_parse_from(args).unwrap().pipeline_config().unwrap();

        assert_eq!(config.excluded_clusters.len(), 1);
        assert!(config.excluded_clusters.contains("Descriptor"));
        assert_eq!(config.vendor_prefix, "");
    }

    #[test]
    fn test_unreadable_config_file() {
        let args = REQUIRED
            .iter()
            .copied()
            .chain(["--config", "/nonexistent/config.json"]);
        let err = Cli::try_parse_from(args).unwrap().pipeline_config().unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
