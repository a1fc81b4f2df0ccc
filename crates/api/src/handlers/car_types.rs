//! Admin handlers for the `/admin/car-types` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use mashwar_core::catalog::validate_slug;
use mashwar_core::error::CoreError;
use mashwar_core::media::ImageUpdate;
use mashwar_core::types::DbId;
use mashwar_db::models::car_type::{CarType, CreateCarType, UpdateCarType};
use mashwar_db::repositories::CarTypeRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::uploads::{delete_stored_image, resolve_image_update};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/car-types
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let car_types = CarTypeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: car_types }))
}

/// POST /api/v1/admin/car-types
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCarType>,
) -> AppResult<impl IntoResponse> {
    validate_slug(&input.slug)?;
    if input.label.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Label must not be empty".to_string(),
        )));
    }

    let car_type = CarTypeRepo::create(&state.pool, &input).await?;

    tracing::info!(car_type_id = car_type.id, slug = %car_type.slug, "Car type created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: car_type })))
}

/// GET /api/v1/admin/car-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let car_type = find_existing(&state, id).await?;
    Ok(Json(DataResponse { data: car_type }))
}

/// PUT /api/v1/admin/car-types/{id}
///
/// Scalar fields are patched; the image goes through the explicit
/// keep/replace/clear operation, deleting any superseded object.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCarType>,
) -> AppResult<impl IntoResponse> {
    let existing = find_existing(&state, id).await?;

    let mut car_type = CarTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CarType", id)))?;

    if let Some(image_url) = resolve_image_update(&state, &input.image) {
        car_type = CarTypeRepo::set_image_url(&state.pool, id, image_url.as_deref())
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("CarType", id)))?;
        if !matches!(input.image, ImageUpdate::Keep) {
            delete_stored_image(&state, existing.image_url.as_deref()).await;
        }
    }

    tracing::info!(car_type_id = id, "Car type updated");

    Ok(Json(DataResponse { data: car_type }))
}

/// DELETE /api/v1/admin/car-types/{id}
///
/// Models cascade in the database; the stored image is removed
/// best-effort.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = find_existing(&state, id).await?;

    if !CarTypeRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("CarType", id)));
    }
    delete_stored_image(&state, existing.image_url.as_deref()).await;

    tracing::info!(car_type_id = id, slug = %existing.slug, "Car type deleted");

    Ok(StatusCode::NO_CONTENT)
}

async fn find_existing(state: &AppState, id: DbId) -> AppResult<CarType> {
    CarTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CarType", id)))
}
