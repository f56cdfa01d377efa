use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

mod handlers;
mod models;
mod state;
mod upload;

use clausecheck_openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiClient};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; model calls will fail");
    }
    let base_url =
        std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let upload_dir =
        PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()));
    std::fs::create_dir_all(&upload_dir)?;

    let state = Arc::new(AppState {
        openai: OpenAiClient::new(api_key, base_url, model.clone()),
        upload_dir: upload_dir.clone(),
    });

    let app = router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, model = %model, upload_dir = %upload_dir.display(), "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<AppState>) -> axum::Router {
    // Contracts scanned to PDF can be large; raise the default body cap.
    let body_limit = axum::extract::DefaultBodyLimit::max(500 * 1024 * 1024);

    axum::Router::new()
        .route("/analyze", axum::routing::post(handlers::analyze::analyze))
        .route("/chat", axum::routing::post(handlers::chat::chat))
        .route("/health", axum::routing::get(handlers::health))
        .layer(body_limit)
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}
