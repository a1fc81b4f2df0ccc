//! Application branding settings (singleton row).

use mashwar_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single row of the `branding_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BrandingSettings {
    pub id: DbId,
    pub app_name: String,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub updated_at: Timestamp,
}

/// DTO for updating branding. Logo changes go through the explicit
/// [`mashwar_core::media::ImageUpdate`] operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBranding {
    pub app_name: Option<String>,
    pub tagline: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub logo: mashwar_core::media::ImageUpdate,
}
