//! Multipart image upload and shared image-update plumbing.
//!
//! Admin screens upload an image first, receiving an object key and public
//! URL; record create/update requests then reference the key through the
//! explicit keep/replace/clear operation.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use mashwar_core::media::{self, ImageUpdate};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for a stored upload.
#[derive(Debug, Serialize)]
pub struct UploadedImage {
    pub key: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// POST /api/v1/admin/uploads
///
/// Accepts a multipart body with a `file` field, sniffs it as an allowed
/// image, and stores it under a fresh uuid key.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Could not read upload: {e}")))?;

        let info = media::validate_image_bytes(&bytes)?;
        let key = format!("{}.{}", Uuid::new_v4(), info.extension);

        state
            .store
            .put_object(&key, bytes.to_vec(), info.content_type())
            .await?;
        let url = state.store.public_url(&key);

        tracing::info!(
            key = %key,
            width = info.width,
            height = info.height,
            "Image uploaded"
        );

        return Ok((
            StatusCode::CREATED,
            Json(DataResponse {
                data: UploadedImage {
                    key,
                    url,
                    width: info.width,
                    height: info.height,
                },
            }),
        ));
    }

    Err(AppError::BadRequest(
        "Missing 'file' field in multipart body".to_string(),
    ))
}

/// Translate an [`ImageUpdate`] into the new `image_url` column value:
/// `None` for keep, `Some(Some(url))` for replace, `Some(None)` for clear.
pub fn resolve_image_update(state: &AppState, update: &ImageUpdate) -> Option<Option<String>> {
    match update {
        ImageUpdate::Keep => None,
        ImageUpdate::Replace { key } => Some(Some(state.store.public_url(key))),
        ImageUpdate::Clear => Some(None),
    }
}

/// Best-effort deletion of a previously stored image by its public URL.
/// URLs not owned by the active store (e.g. after a backend migration) are
/// left alone.
pub async fn delete_stored_image(state: &AppState, url: Option<&str>) {
    let Some(url) = url else { return };
    let Some(key) = state.store.key_for_url(url) else {
        tracing::debug!(url, "Image URL not owned by the active store; skipping delete");
        return;
    };
    if let Err(e) = state.store.delete_object(&key).await {
        tracing::warn!(key = %key, error = %e, "Failed to delete superseded image");
    }
}
