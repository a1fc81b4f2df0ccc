//! Admin handlers for the `/admin/car-models` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use mashwar_core::catalog::validate_slug;
use mashwar_core::error::CoreError;
use mashwar_core::media::ImageUpdate;
use mashwar_core::types::DbId;
use mashwar_db::models::car_model::{CarModel, CreateCarModel, UpdateCarModel};
use mashwar_db::repositories::{CarModelRepo, CarTypeRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::uploads::{delete_stored_image, resolve_image_update};
use crate::response::DataResponse;
use crate::state::AppState;

/// Filter parameters for listing car models.
#[derive(Debug, Deserialize)]
pub struct ListModelsParams {
    pub car_type_id: Option<DbId>,
}

/// GET /api/v1/admin/car-models (?car_type_id)
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListModelsParams>,
) -> AppResult<impl IntoResponse> {
    let models = match params.car_type_id {
        Some(car_type_id) => CarModelRepo::list_by_type(&state.pool, car_type_id).await?,
        None => CarModelRepo::list(&state.pool).await?,
    };
    Ok(Json(DataResponse { data: models }))
}

/// POST /api/v1/admin/car-models
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCarModel>,
) -> AppResult<impl IntoResponse> {
    validate_slug(&input.slug)?;
    if input.label.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Label must not be empty".to_string(),
        )));
    }
    // Resolve the owning type first so an unknown id is a 404 rather than
    // a foreign-key error.
    if CarTypeRepo::find_by_id(&state.pool, input.car_type_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::not_found(
            "CarType",
            input.car_type_id,
        )));
    }

    let model = CarModelRepo::create(&state.pool, &input).await?;

    tracing::info!(
        car_model_id = model.id,
        slug = %model.slug,
        car_type_id = model.car_type_id,
        "Car model created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: model })))
}

/// GET /api/v1/admin/car-models/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let model = find_existing(&state, id).await?;
    Ok(Json(DataResponse { data: model }))
}

/// PUT /api/v1/admin/car-models/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCarModel>,
) -> AppResult<impl IntoResponse> {
    let existing = find_existing(&state, id).await?;

    let mut model = CarModelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CarModel", id)))?;

    if let Some(image_url) = resolve_image_update(&state, &input.image) {
        model = CarModelRepo::set_image_url(&state.pool, id, image_url.as_deref())
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("CarModel", id)))?;
        if !matches!(input.image, ImageUpdate::Keep) {
            delete_stored_image(&state, existing.image_url.as_deref()).await;
        }
    }

    tracing::info!(car_model_id = id, "Car model updated");

    Ok(Json(DataResponse { data: model }))
}

/// DELETE /api/v1/admin/car-models/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = find_existing(&state, id).await?;

    if !CarModelRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("CarModel", id)));
    }
    delete_stored_image(&state, existing.image_url.as_deref()).await;

    tracing::info!(car_model_id = id, slug = %existing.slug, "Car model deleted");

    Ok(StatusCode::NO_CONTENT)
}

async fn find_existing(state: &AppState, id: DbId) -> AppResult<CarModel> {
    CarModelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CarModel", id)))
}
