//! Public catalog routes feeding the wizard -- mounted at `/catalog`.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/car-types", get(catalog::list_car_types))
        .route("/car-types/{slug}/models", get(catalog::list_car_models))
}
