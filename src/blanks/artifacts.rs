//! Document artifact I/O
//!
//! Documents travel as JSON-encoded region trees (see [`crate::blanks::ast`]).
//! A template is only ever opened read-only; filled output is written as a
//! separate artifact, and only after the whole document has been computed.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::blanks::ast::Document;

#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactError {
    /// The template artifact could not be opened or read.
    MissingTemplate(String),
    /// The artifact bytes did not decode as a document.
    Malformed(String),
    /// The output artifact could not be written.
    WriteFailed(String),
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactError::MissingTemplate(path) => {
                write!(f, "template not found: {path}")
            }
            ArtifactError::Malformed(msg) => {
                write!(f, "malformed document artifact: {msg}")
            }
            ArtifactError::WriteFailed(msg) => {
                write!(f, "failed to write output artifact: {msg}")
            }
        }
    }
}

impl std::error::Error for ArtifactError {}

/// Decode a document from its JSON artifact bytes.
pub fn document_from_bytes(bytes: &[u8]) -> Result<Document, ArtifactError> {
    serde_json::from_slice(bytes).map_err(|err| ArtifactError::Malformed(err.to_string()))
}

/// Encode a document into JSON artifact bytes.
pub fn document_to_bytes(document: &Document) -> Result<Vec<u8>, ArtifactError> {
    serde_json::to_vec_pretty(document).map_err(|err| ArtifactError::Malformed(err.to_string()))
}

/// Read a document artifact from disk.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document, ArtifactError> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .map_err(|_| ArtifactError::MissingTemplate(path.display().to_string()))?;
    document_from_bytes(&bytes)
}

/// Write a document artifact to disk in one shot.
pub fn save_document<P: AsRef<Path>>(document: &Document, path: P) -> Result<(), ArtifactError> {
    let bytes = document_to_bytes(document)?;
    fs::write(path.as_ref(), bytes).map_err(|err| ArtifactError::WriteFailed(err.to_string()))
}
