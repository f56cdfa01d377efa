use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use thiserror::Error;

use clausecheck_core::{
    BackendError, DocumentContent, ImageFormat, MIN_PDF_TEXT_CHARS, PdfBackend,
};

pub mod pdf;

pub use pdf::PdfExtractBackend;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("{0}")]
    Backend(#[from] BackendError),
    #[error("PDF has no text. Use a screenshot instead.")]
    NoText,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extract the concatenated page text of a PDF.
///
/// Pages are concatenated in page order; pages yielding no text contribute
/// nothing. Scanned documents produce little or no text, so a trimmed
/// aggregate below [`MIN_PDF_TEXT_CHARS`] fails with [`ExtractError::NoText`].
pub fn extract_pdf_text(path: &Path, backend: &dyn PdfBackend) -> Result<String, ExtractError> {
    let pages = backend.extract_pages(path)?;

    let mut text = String::new();
    for page in &pages {
        if !page.is_empty() {
            text.push_str(page);
        }
    }

    if text.trim().chars().count() < MIN_PDF_TEXT_CHARS {
        return Err(ExtractError::NoText);
    }
    Ok(text)
}

/// Read an uploaded image back from disk and package its raw bytes as a
/// base64 data URL. No downscaling or format validation is done.
pub fn encode_image(path: &Path, format: ImageFormat) -> Result<DocumentContent, ExtractError> {
    let bytes = std::fs::read(path)?;
    let data_url = format!(
        "data:{};base64,{}",
        format.mime_type(),
        BASE64.encode(&bytes)
    );
    Ok(DocumentContent::Image { data_url })
}
