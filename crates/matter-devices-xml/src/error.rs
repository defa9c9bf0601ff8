// crates/matter-devices-xml/src/error.rs

use quick_xml::errors::serialize::DeError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading, merging or writing device data.
///
/// Missing fields inside an otherwise well-formed document are not errors:
/// they surface as `None` on the extracted records.
#[derive(Debug)]
pub enum MatterXmlError {
    /// An error from the underlying `quick-xml` deserializer (string input).
    XmlParsing(DeError),

    /// A file on disk could not be deserialized at all.
    Document { path: PathBuf, source: DeError },

    /// A file or directory could not be read.
    Io { path: PathBuf, source: io::Error },

    /// Two clusters share a name and the merge policy forbids it.
    DuplicateCluster { name: String },

    /// An error from `serde_json` while producing output.
    JsonSerializing(serde_json::Error),

    /// The configuration document was not valid.
    ConfigParsing(serde_json::Error),
}

impl MatterXmlError {
    /// Attaches a file path to a deserializer error.
    pub(crate) fn document(path: impl Into<PathBuf>, source: DeError) -> Self {
        MatterXmlError::Document {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MatterXmlError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<DeError> for MatterXmlError {
    fn from(e: DeError) -> Self {
        MatterXmlError::XmlParsing(e)
    }
}

impl From<serde_json::Error> for MatterXmlError {
    fn from(e: serde_json::Error) -> Self {
        MatterXmlError::JsonSerializing(e)
    }
}

impl fmt::Display for MatterXmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatterXmlError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            MatterXmlError::Document { path, source } => {
                write!(f, "XML parsing error in {}: {}", path.display(), source)
            }
            MatterXmlError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            MatterXmlError::DuplicateCluster { name } => {
                write!(f, "Cluster name defined more than once: {}", name)
            }
            MatterXmlError::JsonSerializing(e) => write!(f, "JSON serializing error: {}", e),
            MatterXmlError::ConfigParsing(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for MatterXmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatterXmlError::XmlParsing(e) => Some(e),
            MatterXmlError::Document { source, .. } => Some(source),
            MatterXmlError::Io { source, .. } => Some(source),
            MatterXmlError::JsonSerializing(e) | MatterXmlError::ConfigParsing(e) => Some(e),
            MatterXmlError::DuplicateCluster { .. } => None,
        }
    }
}
