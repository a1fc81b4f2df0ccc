//! Repository for the `car_models` table.

use mashwar_core::types::DbId;
use sqlx::PgPool;

use crate::models::car_model::{CarModel, CreateCarModel, UpdateCarModel};
use crate::models::car_type::CatalogOption;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, car_type_id, slug, label, image_url, sort_order, created_at, updated_at";

/// Provides CRUD operations for car models.
pub struct CarModelRepo;

impl CarModelRepo {
    /// Insert a new car model, returning the created row.
    ///
    /// If `sort_order` is `None`, defaults to 0.
    pub async fn create(pool: &PgPool, input: &CreateCarModel) -> Result<CarModel, sqlx::Error> {
        let query = format!(
            "INSERT INTO car_models (car_type_id, slug, label, image_url, sort_order) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarModel>(&query)
            .bind(input.car_type_id)
            .bind(&input.slug)
            .bind(&input.label)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a car model by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CarModel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_models WHERE id = $1");
        sqlx::query_as::<_, CarModel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a car model by its catalog slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<CarModel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_models WHERE slug = $1");
        sqlx::query_as::<_, CarModel>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all car models in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<CarModel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_models ORDER BY sort_order, label");
        sqlx::query_as::<_, CarModel>(&query).fetch_all(pool).await
    }

    /// List car models belonging to one car type, in display order.
    pub async fn list_by_type(
        pool: &PgPool,
        car_type_id: DbId,
    ) -> Result<Vec<CarModel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM car_models \
             WHERE car_type_id = $1 \
             ORDER BY sort_order, label"
        );
        sqlx::query_as::<_, CarModel>(&query)
            .bind(car_type_id)
            .fetch_all(pool)
            .await
    }

    /// List wizard-facing model options for a car type selected by slug,
    /// in display order.
    pub async fn list_options_by_type_slug(
        pool: &PgPool,
        car_type_slug: &str,
    ) -> Result<Vec<CatalogOption>, sqlx::Error> {
        sqlx::query_as::<_, CatalogOption>(
            "SELECT m.slug AS id, m.label, m.image_url \
             FROM car_models m \
             JOIN car_types t ON t.id = m.car_type_id \
             WHERE t.slug = $1 \
             ORDER BY m.sort_order, m.label",
        )
        .bind(car_type_slug)
        .fetch_all(pool)
        .await
    }

    /// Update a car model. Only non-`None` fields in `input` are applied;
    /// the image is updated separately via [`Self::set_image_url`].
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCarModel,
    ) -> Result<Option<CarModel>, sqlx::Error> {
        let query = format!(
            "UPDATE car_models SET \
                label = COALESCE($2, label), \
                sort_order = COALESCE($3, sort_order), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarModel>(&query)
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
    ) -> Result<Option<CarModel>, sqlx::Error> {
        let query = format!(
            "UPDATE car_models SET image_url = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarModel>(&query)
            .bind(id)
            .bind(image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a car model. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM car_models WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
