//! Repository for the `car_types` table.

use mashwar_core::types::DbId;
use sqlx::PgPool;

use crate::models::car_type::{CarType, CatalogOption, CreateCarType, UpdateCarType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, label, image_url, sort_order, created_at, updated_at";

/// Provides CRUD operations for car types.
pub struct CarTypeRepo;

impl CarTypeRepo {
    /// Insert a new car type, returning the created row.
    ///
    /// If `sort_order` is `None`, defaults to 0.
    pub async fn create(pool: &PgPool, input: &CreateCarType) -> Result<CarType, sqlx::Error> {
        let query = format!(
            "INSERT INTO car_types (slug, label, image_url, sort_order) \
             VALUES ($1, $2, $3, COALESCE($4, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarType>(&query)
            .bind(&input.slug)
            .bind(&input.label)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a car type by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CarType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_types WHERE id = $1");
        sqlx::query_as::<_, CarType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a car type by its catalog slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<CarType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_types WHERE slug = $1");
        sqlx::query_as::<_, CarType>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all car types in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<CarType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_types ORDER BY sort_order, label");
        sqlx::query_as::<_, CarType>(&query).fetch_all(pool).await
    }

    /// List wizard-facing catalog options (slug as public id), in display
    /// order.
    pub async fn list_options(pool: &PgPool) -> Result<Vec<CatalogOption>, sqlx::Error> {
        sqlx::query_as::<_, CatalogOption>(
            "SELECT slug AS id, label, image_url FROM car_types ORDER BY sort_order, label",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a car type. Only non-`None` fields in `input` are applied;
    /// the image is updated separately via [`Self::set_image_url`].
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCarType,
    ) -> Result<Option<CarType>, sqlx::Error> {
        let query = format!(
            "UPDATE car_types SET \
                label = COALESCE($2, label), \
                sort_order = COALESCE($3, sort_order), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarType>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Set or clear the image URL.
    pub async fn set_image_url(
        pool: &PgPool,
        id: DbId,
        image_url: Option<&str>,
    ) -> Result<Option<CarType>, sqlx::Error> {
        let query = format!(
            "UPDATE car_types SET image_url = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarType>(&query)
            .bind(id)
            .bind(image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a car type (models cascade). Returns whether a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM car_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
