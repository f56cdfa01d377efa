use std::path::PathBuf;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use clausecheck_core::{AnalysisReport, DocumentContent, DocumentKind};
use clausecheck_extract::PdfExtractBackend;

use crate::state::AppState;
use crate::upload;

pub async fn analyze(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    match handle_analyze(state, multipart).await {
        Ok(report) => Json(report).into_response(),
        Err((status, message)) => {
            (status, Json(serde_json::json!({ "error": message }))).into_response()
        }
    }
}

async fn handle_analyze(
    state: Arc<AppState>,
    multipart: Multipart,
) -> Result<AnalysisReport, (StatusCode, String)> {
    let file = upload::parse_multipart(multipart)
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e))?;

    let kind = DocumentKind::from_filename(&file.filename).ok_or((
        StatusCode::BAD_REQUEST,
        "File type not supported.".to_string(),
    ))?;

    let path = upload::save_upload(&state.upload_dir, &file).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to store upload: {}", e),
        )
    })?;

    let content = match kind {
        DocumentKind::Pdf => {
            let text = extract_pdf_blocking(path)
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, e))?;
            DocumentContent::Text(text)
        }
        DocumentKind::Image(format) => {
            clausecheck_extract::encode_image(&path, format).map_err(|e| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to read upload: {}", e),
                )
            })?
        }
    };

    clausecheck_openai::analyze_document(&state.openai, &content)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "analysis failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })
}

/// PDF parsing is CPU-bound; keep it off the async workers.
async fn extract_pdf_blocking(path: PathBuf) -> Result<String, String> {
    tokio::task::spawn_blocking(move || {
        clausecheck_extract::extract_pdf_text(&path, &PdfExtractBackend::new())
            .map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::router;
    use crate::test_util::test_state;

    const BOUNDARY: &str = "clausecheck-test-boundary";

    fn multipart_request(field: &str, filename: &str, data: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn error_of(response: axum::response::Response) -> (StatusCode, String) {
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (
            status,
            value["error"].as_str().unwrap_or_default().to_string(),
        )
    }

    #[tokio::test]
    async fn missing_file_field_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let response = router(test_state(&dir))
            .oneshot(multipart_request("attachment", "contract.pdf", b"%PDF-1.4"))
            .await
            .unwrap();

        let (status, message) = error_of(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "No file part");
    }

    #[tokio::test]
    async fn unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let response = router(test_state(&dir))
            .oneshot(multipart_request("file", "contract.docx", b"PK\x03\x04"))
            .await
            .unwrap();

        let (status, message) = error_of(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "File type not supported.");

        // Rejected before any extraction or model call; nothing stored yet
        // is fine, but the request must not 500.
    }

    #[tokio::test]
    async fn unreadable_pdf_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let response = router(test_state(&dir))
            .oneshot(multipart_request("file", "contract.pdf", b"this is not a pdf"))
            .await
            .unwrap();

        let (status, _) = error_of(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
