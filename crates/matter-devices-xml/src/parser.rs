// crates/matter-devices-xml/src/parser.rs

use crate::error::MatterXmlError;
use crate::model;
use crate::types::{ClusterRecord, CommandRecord, DeviceTypeRecord};
use log::{debug, trace};
use quick_xml::Reader;
use quick_xml::errors::serialize::DeError;
use quick_xml::events::Event;
use serde::de::DeserializeOwned;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Parses the device-type document and extracts one record per top-level
/// `<deviceType>` element, in document order.
///
/// Extraction is best-effort: a missing `<deviceId>` or `<name>` leaves the
/// field `None`, and an `<include>` without a `cluster` attribute is skipped.
///
/// # Errors
/// Returns `MatterXmlError::XmlParsing` if the document is not well-formed,
/// including content after the root element.
pub fn load_device_types_from_str(xml_content: &str) -> Result<Vec<DeviceTypeRecord>, MatterXmlError> {
    let document: model::DeviceTypeDocument = parse_document(xml_content)?;
    Ok(extract_device_types(document))
}

/// Parses one cluster document and extracts one record per top-level
/// `<cluster>` element, in document order.
///
/// # Errors
/// Returns `MatterXmlError::XmlParsing` if the document is not well-formed,
/// including content after the root element.
pub fn load_clusters_from_str(xml_content: &str) -> Result<Vec<ClusterRecord>, MatterXmlError> {
    let document: model::ClusterDocument = parse_document(xml_content)?;
    Ok(extract_clusters(document))
}

/// Reads and parses the device-type document at `path`.
pub fn load_device_types(path: impl AsRef<Path>) -> Result<Vec<DeviceTypeRecord>, MatterXmlError> {
    let path = path.as_ref();
    let xml_content = read_file(path)?;
    let document: model::DeviceTypeDocument =
        parse_document(&xml_content).map_err(|e| MatterXmlError::document(path, e))?;
    let records = extract_device_types(document);
    debug!("Parsed {} device types from {}", records.len(), path.display());
    Ok(records)
}

/// Reads and parses a single cluster document at `path`.
pub fn load_clusters(path: impl AsRef<Path>) -> Result<Vec<ClusterRecord>, MatterXmlError> {
    let path = path.as_ref();
    let xml_content = read_file(path)?;
    let document: model::ClusterDocument =
        parse_document(&xml_content).map_err(|e| MatterXmlError::document(path, e))?;
    let records = extract_clusters(document);
    trace!("Parsed {} clusters from {}", records.len(), path.display());
    Ok(records)
}

/// Reads every `.xml` file in `dir` and concatenates their clusters.
///
/// Files are processed in file-name order so the result does not depend on
/// the platform's directory listing order. Any file that fails to parse
/// aborts the whole scan.
pub fn load_clusters_dir(dir: impl AsRef<Path>) -> Result<Vec<ClusterRecord>, MatterXmlError> {
    load_clusters_from_files(cluster_files(dir.as_ref(), None)?)
}

/// Like [`load_clusters_dir`], but ignores the file named `skip_file_name`.
///
/// Used when the device-type document sits in the cluster directory.
pub fn load_clusters_dir_skipping(
    dir: impl AsRef<Path>,
    skip_file_name: impl AsRef<OsStr>,
) -> Result<Vec<ClusterRecord>, MatterXmlError> {
    load_clusters_from_files(cluster_files(dir.as_ref(), Some(skip_file_name.as_ref()))?)
}

fn load_clusters_from_files(files: Vec<PathBuf>) -> Result<Vec<ClusterRecord>, MatterXmlError> {
    let mut clusters = Vec::new();
    for path in &files {
        clusters.extend(load_clusters(path)?);
    }
    debug!("Parsed {} clusters from {} files", clusters.len(), files.len());
    Ok(clusters)
}

/// Lists the `.xml` files directly inside `dir`, sorted by file name.
fn cluster_files(dir: &Path, skip: Option<&OsStr>) -> Result<Vec<PathBuf>, MatterXmlError> {
    let entries = fs::read_dir(dir).map_err(|e| MatterXmlError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MatterXmlError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() || !has_xml_extension(&path) {
            continue;
        }
        if skip.is_some_and(|skip| path.file_name() == Some(skip)) {
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn has_xml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}

/// Deserializes a whole document.
///
/// The deserializer stops at the end of the root element, so the rest of the
/// input is scanned separately and anything but whitespace, comments and
/// processing instructions after the root is rejected.
fn parse_document<T: DeserializeOwned>(xml_content: &str) -> Result<T, DeError> {
    let document = quick_xml::de::from_str(xml_content)?;
    check_trailing_content(xml_content)?;
    Ok(document)
}

fn check_trailing_content(xml_content: &str) -> Result<(), DeError> {
    let mut reader = Reader::from_str(xml_content);
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut root_closed = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => return Ok(()),
            Event::Start(_) if !root_closed => depth += 1,
            Event::End(_) if !root_closed => {
                depth = depth.saturating_sub(1);
                root_closed = depth == 0;
            }
            Event::Empty(_) if !root_closed && depth == 0 => root_closed = true,
            _ if !root_closed => {}
            Event::Text(ref text) if text.iter().all(u8::is_ascii_whitespace) => {}
            Event::Comment(_) | Event::PI(_) => {}
            _ => {
                return Err(DeError::Custom(format!(
                    "junk after document element at position {}",
                    reader.buffer_position()
                )));
            }
        }
        buf.clear();
    }
}

fn read_file(path: &Path) -> Result<String, MatterXmlError> {
    fs::read_to_string(path).map_err(|e| MatterXmlError::io(path, e))
}

// --- Model to Record Extraction ---

fn extract_device_types(document: model::DeviceTypeDocument) -> Vec<DeviceTypeRecord> {
    document
        .device_type
        .iter()
        .map(extract_device_type)
        .collect()
}

fn extract_device_type(model: &model::DeviceType) -> DeviceTypeRecord {
    let clusters: Vec<String> = model
        .clusters
        .first()
        .map(|c| {
            c.include
                .iter()
                .filter_map(|include| include.cluster.clone())
                .filter(|name| !name.is_empty())
                .collect()
        })
        .unwrap_or_default();

    DeviceTypeRecord {
        id: model
            .device_id
            .first()
            .and_then(model::TextElement::text)
            .map(str::to_lowercase),
        name: model
            .name
            .first()
            .and_then(model::TextElement::text)
            .map(String::from),
        clusters,
    }
}

fn extract_clusters(document: model::ClusterDocument) -> Vec<ClusterRecord> {
    document.cluster.iter().map(extract_cluster).collect()
}

fn extract_cluster(model: &model::Cluster) -> ClusterRecord {
    let commands = model
        .command
        .iter()
        .map(|cmd| CommandRecord {
            code: cmd.code.clone(),
            name: cmd.name.clone(),
        })
        .collect();

    ClusterRecord {
        id: model
            .code
            .first()
            .and_then(model::TextElement::text)
            .map(str::to_lowercase),
        name: model
            .name
            .first()
            .and_then(model::TextElement::text)
            .map(String::from),
        commands,
    }
}
