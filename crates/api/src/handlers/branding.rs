//! Admin handlers for application branding (singleton settings row).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use mashwar_core::error::CoreError;
use mashwar_core::media::ImageUpdate;
use mashwar_db::models::branding::UpdateBranding;
use mashwar_db::repositories::BrandingRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::uploads::{delete_stored_image, resolve_image_update};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/branding
///
/// Returns the branding settings, creating the row with defaults on first
/// access.
pub async fn get(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let branding = BrandingRepo::get_or_init(&state.pool).await?;
    Ok(Json(DataResponse { data: branding }))
}

/// PUT /api/v1/admin/branding
///
/// Patches branding fields; the logo goes through the explicit
/// keep/replace/clear operation, deleting any superseded object.
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateBranding>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.app_name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "App name must not be empty".to_string(),
            )));
        }
    }

    let existing = BrandingRepo::get_or_init(&state.pool).await?;
    let mut branding = BrandingRepo::update(&state.pool, &input).await?;

    if let Some(logo_url) = resolve_image_update(&state, &input.logo) {
        branding = BrandingRepo::set_logo_url(&state.pool, logo_url.as_deref()).await?;
        if !matches!(input.logo, ImageUpdate::Keep) {
            delete_stored_image(&state, existing.logo_url.as_deref()).await;
        }
    }

    tracing::info!("Branding settings updated");

    Ok(Json(DataResponse { data: branding }))
}
