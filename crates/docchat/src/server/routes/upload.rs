//! Upload endpoint: document intake, extraction, context append

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tokio::task::spawn_blocking;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::server::state::AppState;

/// Successful upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text: String,
}

/// POST /api/upload - extract one file's text and append it to the
/// context store
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("file_{}.bin", Uuid::new_v4()));

        let declared_type = field.content_type().map(|s| s.to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::BadRequest(format!("Failed to read file: {}", e)))?;

        tracing::info!("Processing file: {} ({} bytes)", filename, data.len());

        // Fall back to the filename extension when the part declares no
        // type; the extractor registry itself never guesses.
        let media_type = match declared_type {
            Some(declared) => declared,
            None => mime_guess::from_path(&filename)
                .first_raw()
                .map(|m| m.to_string())
                .ok_or_else(|| {
                    Error::UnsupportedMediaType(format!("no declared type for '{}'", filename))
                })?,
        };

        let text = extract_text(&state, &filename, &media_type, data.to_vec()).await?;

        state.store().append(&text).await?;

        tracing::info!("Ingested '{}' ({} chars of text)", filename, text.len());

        return Ok(Json(UploadResponse { text }));
    }

    Err(Error::BadRequest("No file uploaded".to_string()))
}

/// Run extraction on the blocking pool; PDF and OOXML decoding is
/// CPU-bound and must not stall unrelated requests. The upload buffer
/// is consumed by the task and dropped when extraction finishes,
/// success or failure.
async fn extract_text(
    state: &AppState,
    filename: &str,
    media_type: &str,
    data: Vec<u8>,
) -> Result<String> {
    let state = state.clone();
    let filename = filename.to_string();
    let media_type = media_type.to_string();

    spawn_blocking(move || {
        let result = state.registry().extract(&data, &media_type);
        if let Err(ref e) = result {
            tracing::warn!("Extraction failed for '{}': {}", filename, e);
        }
        result
    })
    .await
    .map_err(|e| Error::Internal(format!("Extraction task failed: {}", e)))?
}
