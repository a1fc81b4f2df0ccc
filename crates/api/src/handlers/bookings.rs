//! Admin handlers for the booking archive.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use mashwar_core::error::CoreError;
use mashwar_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use mashwar_core::types::DbId;
use mashwar_db::repositories::BookingRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, Page};
use crate::state::AppState;

/// Pagination parameters for listing bookings.
#[derive(Debug, Deserialize)]
pub struct ListBookingsParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/admin/bookings (?limit, offset)
///
/// Newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListBookingsParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);

    let items = BookingRepo::list(&state.pool, limit, offset).await?;
    let total = BookingRepo::count(&state.pool).await?;

    tracing::debug!(count = items.len(), total, "Listed bookings");

    Ok(Json(DataResponse {
        data: Page { items, total },
    }))
}

/// GET /api/v1/admin/bookings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Booking", id)))?;
    Ok(Json(DataResponse { data: booking }))
}

/// DELETE /api/v1/admin/bookings/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !BookingRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Booking", id)));
    }
    tracing::info!(booking_id = id, "Booking deleted");
    Ok(StatusCode::NO_CONTENT)
}
