//! High-level model operations: document analysis and context-bound Q&A.

use clausecheck_core::{AnalysisReport, DocumentContent};

use crate::OpenAiError;
use crate::client::OpenAiClient;
use crate::prompt::{analysis_messages, chat_messages};

/// Analyze an uploaded document and return the structured report.
///
/// One model round trip in JSON mode; the response text is parsed and the
/// untruncated extracted text is injected as `full_text` (empty for
/// images). Failures propagate unchanged — no retry, no partial result.
pub async fn analyze_document(
    client: &OpenAiClient,
    content: &DocumentContent,
) -> Result<AnalysisReport, OpenAiError> {
    let answer = client
        .chat_completion(analysis_messages(content), true)
        .await?;

    let mut report = AnalysisReport::from_model_json(&answer)?;
    report.full_text = content.full_text().to_string();
    Ok(report)
}

/// Answer a question using only the supplied contract text. Returns the
/// model's raw answer verbatim.
pub async fn answer_question(
    client: &OpenAiClient,
    context: &str,
    question: &str,
) -> Result<String, OpenAiError> {
    client
        .chat_completion(chat_messages(context, question), false)
        .await
}
