pub mod backend;
pub mod report;
pub mod sanitize;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend};
pub use report::{AnalysisReport, ReportError};
pub use sanitize::sanitize_filename;

/// Character budget for document text embedded in an analysis prompt.
/// Text beyond this is dropped from the prompt but still returned to the
/// caller in `full_text`.
pub const PROMPT_CHAR_BUDGET: usize = 15_000;

/// Minimum trimmed character count for a PDF to count as text-bearing.
/// Below this the document is almost certainly a scan and the caller is
/// told to upload a screenshot instead.
pub const MIN_PDF_TEXT_CHARS: usize = 10;

/// How an uploaded file will be handled, selected by extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Image(ImageFormat),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

impl DocumentKind {
    /// Select the handling path from the filename extension
    /// (case-insensitive). Returns `None` for unsupported types.
    pub fn from_filename(filename: &str) -> Option<DocumentKind> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if lower.ends_with(".png") {
            Some(DocumentKind::Image(ImageFormat::Png))
        } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
            Some(DocumentKind::Image(ImageFormat::Jpeg))
        } else {
            None
        }
    }
}

/// Content extracted from an uploaded document, ready for prompt assembly.
#[derive(Debug, Clone)]
pub enum DocumentContent {
    /// Concatenated per-page text of a PDF.
    Text(String),
    /// Raw image bytes packaged as a base64 data URL.
    Image { data_url: String },
}

impl DocumentContent {
    /// The untruncated extracted text, as injected into `full_text`.
    /// Images carry no extracted text.
    pub fn full_text(&self) -> &str {
        match self {
            DocumentContent::Text(text) => text,
            DocumentContent::Image { .. } => "",
        }
    }
}
