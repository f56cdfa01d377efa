use std::path::Path;

use clausecheck_core::{BackendError, PdfBackend};

/// [`PdfBackend`] over the `pdf-extract` crate.
///
/// `pdf-extract` renders the whole document as one string with form-feed
/// characters between pages; splitting on those restores the per-page texts
/// the extraction pipeline works with.
#[derive(Debug, Default)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for PdfExtractBackend {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, BackendError> {
        let text = pdf_extract::extract_text(path)
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?;
        Ok(text.split('\x0c').map(str::to_string).collect())
    }
}
