use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level per-page text step; assembling pages
/// into document text (and the too-little-text check) lives in
/// `clausecheck-extract`.
pub trait PdfBackend: Send + Sync {
    /// Extract the text of every page, in page order. Pages with no text
    /// yield empty strings.
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, BackendError>;
}
