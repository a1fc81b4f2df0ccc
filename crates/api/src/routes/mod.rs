pub mod admin;
pub mod catalog;
pub mod health;
pub mod wizard;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /catalog/car-types                      list car types (public)
/// /catalog/car-types/{slug}/models        list a type's models (public)
///
/// /booking-sessions                       create wizard session
/// /booking-sessions/{id}                  get, abandon
/// /booking-sessions/{id}/fields           partial draft update (PUT)
/// /booking-sessions/{id}/advance          validate current step, move on
/// /booking-sessions/{id}/go-back          unconditional back
/// /booking-sessions/{id}/refresh-models   fetch models for the car type
/// /booking-sessions/{id}/submit           validate all, persist, hand off
///
/// /admin/car-types[/{id}]                 catalog type CRUD
/// /admin/car-models[/{id}]                catalog model CRUD
/// /admin/branding                         app branding (GET, PUT)
/// /admin/contacts[/{id}]                  contact list, delete
/// /admin/bookings[/{id}]                  booking archive
/// /admin/uploads                          multipart image upload
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public catalog feeding the wizard's first two steps.
        .nest("/catalog", catalog::router())
        // Booking wizard sessions.
        .nest("/booking-sessions", wizard::router())
        // Admin panel (car types, car models, branding, contacts, bookings).
        .nest("/admin", admin::router())
}
