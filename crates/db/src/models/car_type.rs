//! Car type entity model and DTOs.

use mashwar_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `car_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarType {
    pub id: DbId,
    pub slug: String,
    pub label: String,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Wizard-facing catalog entry: slug as the public identifier.
///
/// Shared by car type and car model listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CatalogOption {
    pub id: String,
    pub label: String,
    pub image_url: Option<String>,
}

/// DTO for creating a new car type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCarType {
    pub slug: String,
    pub label: String,
    pub image_url: Option<String>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing car type. Image changes go through the
/// explicit [`mashwar_core::media::ImageUpdate`] operation instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCarType {
    pub label: Option<String>,
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub image: mashwar_core::media::ImageUpdate,
}
