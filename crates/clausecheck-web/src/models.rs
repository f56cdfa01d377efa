use serde::{Deserialize, Serialize};

/// Body of a `/chat` request. Both fields must be present (and non-empty)
/// for a model call; otherwise the canned fallback answer is returned.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: Option<String>,
    /// The full extracted contract text, resent by the caller on every
    /// request since no session state is kept.
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatAnswer {
    pub answer: String,
}
