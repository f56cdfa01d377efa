use std::path::{Path, PathBuf};

use axum::extract::Multipart;

use clausecheck_core::sanitize_filename;

/// A single uploaded file from the multipart form.
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Parse the multipart form, expecting one `file` field.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<UploadedFile, String> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read form field: {}", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                if filename.is_empty() {
                    return Err("No selected file".to_string());
                }
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file data: {}", e))?
                    .to_vec();

                file = Some(UploadedFile { filename, data });
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    file.ok_or_else(|| "No file part".to_string())
}

/// Persist an upload under a collision-free storage key.
///
/// Caller-supplied names are sanitized and prefixed with a random token so
/// concurrent uploads of the same filename cannot overwrite each other.
/// Stored files are never cleaned up by the service; disk hygiene belongs
/// to the deployment.
pub fn save_upload(upload_dir: &Path, file: &UploadedFile) -> std::io::Result<PathBuf> {
    let path = upload_dir.join(storage_key(&file.filename));
    std::fs::write(&path, &file.data)?;
    Ok(path)
}

fn storage_key(filename: &str) -> String {
    format!("{:016x}_{}", fastrand::u64(..), sanitize_filename(filename))
}
