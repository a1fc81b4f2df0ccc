//! Booking draft payload and typed field identifiers.

use serde::{Deserialize, Serialize};

/// Geographic coordinates attached to a location when geocoding supplied
/// them. They are optional and pass through unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A pickup or drop-off location: free-text address plus optional
/// coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// The in-progress booking payload accumulated by the wizard.
///
/// Owned exclusively by one wizard session; lives only in memory and is
/// discarded after a successful submit or an abandon. Each field is either
/// in its default state or satisfies its validation rule -- invalid values
/// are rejected at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    /// Car type catalog slug (e.g. `"sedan"`). Empty until step 1 completes.
    pub car_type: String,
    /// Car model catalog slug, or the synthesized `"<car_type>-default"`
    /// when the selected type has no catalog models.
    pub car_model: String,
    pub passengers: i32,
    pub bags: i32,
    pub pickup: Location,
    pub dropoff: Location,
    pub first_name: String,
    pub phone_number: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            car_type: String::new(),
            car_model: String::new(),
            passengers: 1,
            bags: 0,
            pickup: Location::default(),
            dropoff: Location::default(),
            first_name: String::new(),
            phone_number: String::new(),
        }
    }
}

/// Typed identifier for every validated draft field.
///
/// Validation errors are keyed by this enum rather than a dotted string
/// path, so field/step/error wiring is checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingField {
    CarType,
    CarModel,
    Passengers,
    Bags,
    PickupAddress,
    DropoffAddress,
    FirstName,
    PhoneNumber,
}

impl BookingField {
    /// Stable wire name, matching the draft's serialized field names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CarType => "car_type",
            Self::CarModel => "car_model",
            Self::Passengers => "passengers",
            Self::Bags => "bags",
            Self::PickupAddress => "pickup_address",
            Self::DropoffAddress => "dropoff_address",
            Self::FirstName => "first_name",
            Self::PhoneNumber => "phone_number",
        }
    }
}

/// Partial update applied to a draft in one client interaction.
///
/// Only present fields are written; each write is validated before it
/// lands, and application stops at the first invalid value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftPatch {
    pub car_type: Option<String>,
    pub car_model: Option<String>,
    pub passengers: Option<i32>,
    pub bags: Option<i32>,
    pub pickup: Option<Location>,
    pub dropoff: Option<Location>,
    pub first_name: Option<String>,
    pub phone_number: Option<String>,
}

impl DraftPatch {
    /// Whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.car_type.is_none()
            && self.car_model.is_none()
            && self.passengers.is_none()
            && self.bags.is_none()
            && self.pickup.is_none()
            && self.dropoff.is_none()
            && self.first_name.is_none()
            && self.phone_number.is_none()
    }
}
