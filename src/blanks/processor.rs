//! File-level processing API
//!
//! The boundary consumed by callers that hold documents as files or raw
//! bytes: extract a placeholder sequence, or fill a template into a new
//! output artifact. Extraction is deterministic for identical content; a
//! fill never modifies its template and writes its output only after the
//! whole filled document exists in memory, so an aborted fill leaves no
//! partial artifact behind.

use std::fmt;
use std::path::Path;

use crate::blanks::artifacts::{self, ArtifactError};
use crate::blanks::filling::{self, AnswerMap, FillError};
use crate::blanks::placeholders::Placeholder;
use crate::blanks::scanning;

#[derive(Debug, Clone, PartialEq)]
pub enum ProcessError {
    Artifact(ArtifactError),
    Fill(FillError),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Artifact(err) => write!(f, "{err}"),
            ProcessError::Fill(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ProcessError {}

impl From<ArtifactError> for ProcessError {
    fn from(err: ArtifactError) -> Self {
        ProcessError::Artifact(err)
    }
}

impl From<FillError> for ProcessError {
    fn from(err: FillError) -> Self {
        ProcessError::Fill(err)
    }
}

/// Extract the ordered placeholder sequence from a document artifact on disk.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Vec<Placeholder>, ProcessError> {
    let document = artifacts::load_document(path)?;
    Ok(scanning::extract(&document))
}

/// Extract the ordered placeholder sequence from raw artifact bytes.
pub fn extract_bytes(bytes: &[u8]) -> Result<Vec<Placeholder>, ProcessError> {
    let document = artifacts::document_from_bytes(bytes)?;
    Ok(scanning::extract(&document))
}

/// Fill a template artifact and write the result as a new artifact.
pub fn fill_file<P: AsRef<Path>, Q: AsRef<Path>>(
    template: P,
    output: Q,
    placeholders: &[Placeholder],
    answers: &AnswerMap,
) -> Result<(), ProcessError> {
    let document = artifacts::load_document(template)?;
    let filled = filling::fill(&document, placeholders, answers)?;
    artifacts::save_document(&filled, output)?;
    Ok(())
}

/// Fill raw template bytes into new artifact bytes.
pub fn fill_bytes(
    bytes: &[u8],
    placeholders: &[Placeholder],
    answers: &AnswerMap,
) -> Result<Vec<u8>, ProcessError> {
    let document = artifacts::document_from_bytes(bytes)?;
    let filled = filling::fill(&document, placeholders, answers)?;
    Ok(artifacts::document_to_bytes(&filled)?)
}
