//! Export types, errors and filename policy.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder written for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Office Open XML word-processing document
    #[default]
    Docx,
    /// Plain UTF-8 text
    Text,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Text => "txt",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Docx => write!(f, "Word (DOCX)"),
            ExportFormat::Text => write!(f, "Plain text"),
        }
    }
}

/// A generated document ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// Suggested file name, already sanitized
    pub filename: String,
    /// Format of `bytes`
    pub format: ExportFormat,
    /// File content
    pub bytes: Vec<u8>,
}

impl ExportedDocument {
    /// Write the document into `dir`, creating it if needed.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(dir)
            .map_err(|e| ExportError::FileCreationFailed(format!("{}: {}", dir.display(), e)))?;

        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        tracing::info!("Saved {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// User-facing reasons an export is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExportValidation {
    /// Microcycle export without a selected microcycle
    #[error("Please select a microcycle to export.")]
    NoMicrocycleSelected,

    /// Nothing to put in the document
    #[error("No entries available to export.")]
    NoEntries,

    /// Entry id not in the store
    #[error("The selected session no longer exists.")]
    EntryNotFound,
}

/// Errors during document export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export refused before any document was produced
    #[error(transparent)]
    Validation(#[from] ExportValidation),

    /// XML generation error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Document container error
    #[error("Archive error: {0}")]
    ArchiveError(String),

    /// Failed to create the export file or directory
    #[error("Failed to create file: {0}")]
    FileCreationFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ExportError {
    /// The validation reason, if this error is one.
    pub fn validation(&self) -> Option<ExportValidation> {
        match self {
            ExportError::Validation(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Make a string safe to use as a file name component.
///
/// Characters illegal on common filesystems become `_`; everything else is
/// kept as-is. An empty result becomes `undated`.
pub fn sanitize_file_component(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() {
        "undated".to_string()
    } else {
        cleaned
    }
}

/// File name for a single-session export.
pub fn session_filename(date: &str, format: ExportFormat) -> String {
    format!(
        "Training_Session_{}.{}",
        sanitize_file_component(date),
        format.extension()
    )
}

/// File name for a microcycle export.
pub fn microcycle_filename(microcycle: u32, format: ExportFormat) -> String {
    format!("Training_Microcycle_{}.{}", microcycle, format.extension())
}

/// Render an optional number, or the placeholder when absent.
pub(crate) fn display_number(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Render an optional duration with its unit, or the placeholder when absent.
pub(crate) fn display_minutes(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{} minutes", v))
}
