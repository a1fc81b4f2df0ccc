//! Repository for the singleton `branding_settings` row.

use sqlx::PgPool;

use crate::models::branding::{BrandingSettings, UpdateBranding};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, app_name, tagline, logo_url, primary_color, secondary_color, updated_at";

/// Fixed primary key of the singleton row.
const SINGLETON_ID: i64 = 1;

/// Default application name used when the row is first created.
const DEFAULT_APP_NAME: &str = "مشوار";

/// Default theme colors.
const DEFAULT_PRIMARY_COLOR: &str = "#1a7f5a";
const DEFAULT_SECONDARY_COLOR: &str = "#f5b82e";

/// Provides access to the application branding settings.
pub struct BrandingRepo;

impl BrandingRepo {
    /// Fetch the branding row, creating it with defaults on first access.
    pub async fn get_or_init(pool: &PgPool) -> Result<BrandingSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO branding_settings \
                (id, app_name, primary_color, secondary_color) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE SET id = branding_settings.id \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BrandingSettings>(&query)
            .bind(SINGLETON_ID)
            .bind(DEFAULT_APP_NAME)
            .bind(DEFAULT_PRIMARY_COLOR)
            .bind(DEFAULT_SECONDARY_COLOR)
            .fetch_one(pool)
            .await
    }

    /// Update branding fields. Only non-`None` fields are applied; the
    /// logo is updated separately via [`Self::set_logo_url`].
    pub async fn update(
        pool: &PgPool,
        input: &UpdateBranding,
    ) -> Result<BrandingSettings, sqlx::Error> {
        // Ensure the row exists before updating it.
        Self::get_or_init(pool).await?;
        let query = format!(
            "UPDATE branding_settings SET \
                app_name = COALESCE($2, app_name), \
                tagline = COALESCE($3, tagline), \
                primary_color = COALESCE($4, primary_color), \
                secondary_color = COALESCE($5, secondary_color), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BrandingSettings>(&query)
            .bind(SINGLETON_ID)
            .bind(&input.app_name)
            .bind(&input.tagline)
            .bind(&input.primary_color)
            .bind(&input.secondary_color)
            .fetch_one(pool)
            .await
    }

    /// Set or clear the logo URL.
    pub async fn set_logo_url(
        pool: &PgPool,
        logo_url: Option<&str>,
    ) -> Result<BrandingSettings, sqlx::Error> {
        Self::get_or_init(pool).await?;
        let query = format!(
            "UPDATE branding_settings SET logo_url = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BrandingSettings>(&query)
            .bind(SINGLETON_ID)
            .bind(logo_url)
            .fetch_one(pool)
            .await
    }
}
