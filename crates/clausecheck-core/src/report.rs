use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("model returned invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("model response violates the report shape: {0}")]
    Shape(String),
}

/// The analysis produced by the model, plus the extracted document text.
///
/// The model is instructed to return exactly `summary`, `red_flags` and
/// `rating`; `full_text` is injected afterwards so the caller can resend it
/// as chat context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: String,
    pub red_flags: Vec<String>,
    pub rating: i64,
    #[serde(default)]
    pub full_text: String,
}

impl AnalysisReport {
    /// Parse the model's JSON text, treating it as an untrusted mapping:
    /// the three required keys must be present with the right types, and
    /// `rating` must be within the 1-10 scale the prompt asks for.
    pub fn from_model_json(text: &str) -> Result<AnalysisReport, ReportError> {
        let report: AnalysisReport = serde_json::from_str(text)?;
        if !(1..=10).contains(&report.rating) {
            return Err(ReportError::Shape(format!(
                "rating {} is outside 1-10",
                report.rating
            )));
        }
        Ok(report)
    }
}
