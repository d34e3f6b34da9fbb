//! Error types for PDF extraction

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting text from a PDF
#[derive(Error, Debug)]
pub enum PdfError {
    /// Path does not point at an existing file
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not a PDF or is corrupt
    #[error("Failed to load PDF: {0}")]
    Load(String),

    /// Document is encrypted
    #[error("PDF is encrypted")]
    Encrypted,

    /// No page produced any text (e.g. a scanned document)
    #[error("No extractable text in {0} page(s)")]
    NoText(usize),
}

impl From<lopdf::Error> for PdfError {
    fn from(e: lopdf::Error) -> Self {
        PdfError::Load(e.to_string())
    }
}
