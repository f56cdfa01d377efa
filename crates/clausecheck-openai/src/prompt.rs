//! Fixed prompts and message assembly for the two model operations.

use clausecheck_core::{DocumentContent, PROMPT_CHAR_BUDGET};

use crate::client::{ContentPart, ImageUrl, Message};

/// System instruction for document analysis. The model must answer in
/// strict JSON so the response can be parsed into an `AnalysisReport`.
pub const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are an expert AI Lawyer. Analyze the document provided.
Return a JSON response with:
1. "summary": A simple 3-sentence summary of what this document is.
2. "red_flags": A list of 3-5 risky clauses, weird fees, or important details found.
3. "rating": A safety/clarity score from 1-10 (10 is safe).
Output strictly valid JSON."#;

/// System instruction for the chat endpoint.
pub const CHAT_SYSTEM_PROMPT: &str = "You are a helpful AI lawyer. Answer the user's question based ONLY on the contract text provided below. Keep answers short and direct.";

/// Truncate to at most `max_chars` characters (not bytes), so the cut can
/// never split a UTF-8 sequence.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Messages for the analysis call: the fixed system prompt plus the
/// document content as the user message. PDF text is truncated to the
/// prompt budget; images are sent as a two-part instruction + data URL.
pub fn analysis_messages(content: &DocumentContent) -> Vec<Message> {
    let user = match content {
        DocumentContent::Text(text) => Message::user(format!(
            "Analyze this contract text:\n\n{}",
            truncate_chars(text, PROMPT_CHAR_BUDGET)
        )),
        DocumentContent::Image { data_url } => Message::user_parts(vec![
            ContentPart::Text {
                text: "Analyze this image of a document.".to_string(),
            },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: data_url.clone(),
                },
            },
        ]),
    };

    vec![Message::system(ANALYSIS_SYSTEM_PROMPT), user]
}

/// Messages for the chat call: the context-bound system instruction plus
/// the contract text and question embedded in one user message.
pub fn chat_messages(context: &str, question: &str) -> Vec<Message> {
    vec![
        Message::system(CHAT_SYSTEM_PROMPT),
        Message::user(format!(
            "Contract Text:\n{context}\n\nUser Question: {question}"
        )),
    ]
}
