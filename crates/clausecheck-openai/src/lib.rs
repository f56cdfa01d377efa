use thiserror::Error;

pub mod analysis;
pub mod client;
pub mod prompt;

// Re-export for convenience
pub use analysis::{analyze_document, answer_question};
pub use client::{ContentPart, ImageUrl, Message, OpenAiClient};

/// Default chat-completions endpoint; override with `OPENAI_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model; override with `OPENAI_MODEL`.
pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("OpenAI API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },
    #[error("model response contained no message content")]
    EmptyResponse,
    #[error("{0}")]
    Report(#[from] clausecheck_core::ReportError),
}
