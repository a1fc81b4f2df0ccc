//! Car model entity model and DTOs.

use mashwar_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `car_models` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarModel {
    pub id: DbId,
    pub car_type_id: DbId,
    pub slug: String,
    pub label: String,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new car model.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCarModel {
    pub car_type_id: DbId,
    pub slug: String,
    pub label: String,
    pub image_url: Option<String>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing car model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCarModel {
    pub label: Option<String>,
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub image: mashwar_core::media::ImageUpdate,
}
