//! Customer contact model and DTOs.

use mashwar_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `contacts` table. Contacts are deduplicated by phone
/// number at submit time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub first_name: String,
    pub phone_number: String,
    pub created_at: Timestamp,
}
