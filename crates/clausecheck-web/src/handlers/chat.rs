use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::{ChatAnswer, ChatRequest};
use crate::state::AppState;

/// Canned answer when the caller did not supply both fields. Returned with
/// a 200, not an error; the frontend shows it as a normal assistant reply.
pub const FALLBACK_ANSWER: &str = "I can only answer questions about text-based PDFs right now.";

pub async fn chat(State(state): State<Arc<AppState>>, Json(req): Json<ChatRequest>) -> Response {
    let (question, context) = match (req.question, req.context) {
        (Some(q), Some(c)) if !q.is_empty() && !c.is_empty() => (q, c),
        _ => {
            return Json(ChatAnswer {
                answer: FALLBACK_ANSWER.to_string(),
            })
            .into_response();
        }
    };

    match clausecheck_openai::answer_question(&state.openai, &context, &question).await {
        Ok(answer) => Json(ChatAnswer { answer }).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}
