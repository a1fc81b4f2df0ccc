//! Route definitions for the booking wizard sessions.
//!
//! Mounted at `/booking-sessions` by `api_routes()`.
//!
//! ```text
//! POST   /                       create_session
//! GET    /{id}                   get_session
//! DELETE /{id}                   abandon_session
//! PUT    /{id}/fields            update_fields
//! POST   /{id}/advance           advance
//! POST   /{id}/go-back           go_back
//! POST   /{id}/refresh-models    refresh_models
//! POST   /{id}/submit            submit
//! ```

use axum::routing::{delete, post, put};
use axum::Router;

use crate::handlers::wizard;
use crate::state::AppState;

/// Booking wizard routes -- mounted at `/booking-sessions`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(wizard::create_session))
        .route(
            "/{id}",
            delete(wizard::abandon_session).get(wizard::get_session),
        )
        .route("/{id}/fields", put(wizard::update_fields))
        .route("/{id}/advance", post(wizard::advance))
        .route("/{id}/go-back", post(wizard::go_back))
        .route("/{id}/refresh-models", post(wizard::refresh_models))
        .route("/{id}/submit", post(wizard::submit))
}
