//! Public catalog handlers feeding the wizard's first two steps.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use mashwar_core::error::CoreError;
use mashwar_db::repositories::{CarModelRepo, CarTypeRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/catalog/car-types
///
/// List car types in display order, slug as the public identifier.
pub async fn list_car_types(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let options = CarTypeRepo::list_options(&state.pool).await?;
    Ok(Json(DataResponse { data: options }))
}

/// GET /api/v1/catalog/car-types/{slug}/models
///
/// List a car type's models in display order. An unknown type is a 404; a
/// known type with no models is an empty list (the wizard synthesizes a
/// default model for it).
pub async fn list_car_models(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    if CarTypeRepo::find_by_slug(&state.pool, &slug).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CarType",
            key: slug,
        }));
    }
    let options = CarModelRepo::list_options_by_type_slug(&state.pool, &slug).await?;
    Ok(Json(DataResponse { data: options }))
}
