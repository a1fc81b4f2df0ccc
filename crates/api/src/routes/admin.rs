//! Admin panel routes -- mounted at `/admin`.
//!
//! The admin surface is unauthenticated by design; it is expected to be
//! deployed behind a private network boundary.
//!
//! ```text
//! GET/POST        /car-types              list, create
//! GET/PUT/DELETE  /car-types/{id}         get, update, delete
//! GET/POST        /car-models             list (?car_type_id), create
//! GET/PUT/DELETE  /car-models/{id}        get, update, delete
//! GET/PUT         /branding               get, update
//! GET             /contacts               list (?limit, offset)
//! DELETE          /contacts/{id}          delete
//! GET             /bookings               list (?limit, offset)
//! GET/DELETE      /bookings/{id}          get, delete
//! POST            /uploads                multipart image upload
//! ```

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;

use mashwar_core::media::MAX_UPLOAD_BYTES;

use crate::handlers::{bookings, branding, car_models, car_types, contacts, uploads};
use crate::state::AppState;

/// Slack for multipart framing on top of the image size cap.
const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 64 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/car-types", get(car_types::list).post(car_types::create))
        .route(
            "/car-types/{id}",
            get(car_types::get_by_id)
                .put(car_types::update)
                .delete(car_types::delete),
        )
        .route("/car-models", get(car_models::list).post(car_models::create))
        .route(
            "/car-models/{id}",
            get(car_models::get_by_id)
                .put(car_models::update)
                .delete(car_models::delete),
        )
        .route("/branding", get(branding::get).put(branding::update))
        .route("/contacts", get(contacts::list))
        .route("/contacts/{id}", delete(contacts::delete))
        .route("/bookings", get(bookings::list))
        .route(
            "/bookings/{id}",
            get(bookings::get_by_id).delete(bookings::delete),
        )
        .route(
            "/uploads",
            post(uploads::upload_image).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
}
