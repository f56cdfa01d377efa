use std::path::PathBuf;

use clausecheck_openai::OpenAiClient;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub openai: OpenAiClient,
    pub upload_dir: PathBuf,
}
