//! Repository for the `bookings` table.

use mashwar_core::types::DbId;
use sqlx::PgPool;

use crate::models::booking::{Booking, NewBooking};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, car_type, car_model, car_type_label, car_model_label, \
     passengers, bags, pickup_address, pickup_lat, pickup_lon, \
     dropoff_address, dropoff_lat, dropoff_lon, first_name, phone_number, created_at";

/// Provides persistence operations for finished booking requests.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a completed booking, returning the stored row.
    pub async fn create(pool: &PgPool, input: &NewBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings \
                (car_type, car_model, car_type_label, car_model_label, \
                 passengers, bags, pickup_address, pickup_lat, pickup_lon, \
                 dropoff_address, dropoff_lat, dropoff_lon, first_name, phone_number) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(&input.car_type)
            .bind(&input.car_model)
            .bind(&input.car_type_label)
            .bind(&input.car_model_label)
            .bind(input.passengers)
            .bind(input.bags)
            .bind(&input.pickup_address)
            .bind(input.pickup_lat)
            .bind(input.pickup_lon)
            .bind(&input.dropoff_address)
            .bind(input.dropoff_lat)
            .bind(input.dropoff_lon)
            .bind(&input.first_name)
            .bind(&input.phone_number)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List bookings, newest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count all bookings.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Delete a booking. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
