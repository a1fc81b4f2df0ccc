//! Repository for the `contacts` table.

use mashwar_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::Contact;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, phone_number, created_at";

/// Provides persistence operations for the customer contact list.
pub struct ContactRepo;

impl ContactRepo {
    /// Whether a contact with this phone number already exists.
    pub async fn exists_by_phone(pool: &PgPool, phone_number: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM contacts WHERE phone_number = $1)")
                .bind(phone_number)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Insert a new contact, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        first_name: &str,
        phone_number: &str,
    ) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (first_name, phone_number) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(first_name)
            .bind(phone_number)
            .fetch_one(pool)
            .await
    }

    /// List contacts, newest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contacts \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count all contacts.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Delete a contact. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
