//! Booking record model and DTOs.

use mashwar_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `bookings` table: the finalized ride request plus the
/// catalog labels resolved at submit time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub car_type: String,
    pub car_model: String,
    pub car_type_label: String,
    pub car_model_label: String,
    pub passengers: i32,
    pub bags: i32,
    pub pickup_address: String,
    pub pickup_lat: Option<f64>,
    pub pickup_lon: Option<f64>,
    pub dropoff_address: String,
    pub dropoff_lat: Option<f64>,
    pub dropoff_lon: Option<f64>,
    pub first_name: String,
    pub phone_number: String,
    pub created_at: Timestamp,
}

/// Insert payload for a new booking.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub car_type: String,
    pub car_model: String,
    pub car_type_label: String,
    pub car_model_label: String,
    pub passengers: i32,
    pub bags: i32,
    pub pickup_address: String,
    pub pickup_lat: Option<f64>,
    pub pickup_lon: Option<f64>,
    pub dropoff_address: String,
    pub dropoff_lat: Option<f64>,
    pub dropoff_lon: Option<f64>,
    pub first_name: String,
    pub phone_number: String,
}
