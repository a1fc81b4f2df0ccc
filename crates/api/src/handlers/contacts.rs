//! Admin handlers for the collected customer contact list.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use mashwar_core::error::CoreError;
use mashwar_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use mashwar_core::types::DbId;
use mashwar_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, Page};
use crate::state::AppState;

/// Pagination parameters for listing contacts.
#[derive(Debug, Deserialize)]
pub struct ListContactsParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/admin/contacts (?limit, offset)
///
/// Newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListContactsParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);

    let items = ContactRepo::list(&state.pool, limit, offset).await?;
    let total = ContactRepo::count(&state.pool).await?;

    tracing::debug!(count = items.len(), total, "Listed contacts");

    Ok(Json(DataResponse {
        data: Page { items, total },
    }))
}

/// DELETE /api/v1/admin/contacts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Contact", id)));
    }
    tracing::info!(contact_id = id, "Contact deleted");
    Ok(StatusCode::NO_CONTENT)
}
