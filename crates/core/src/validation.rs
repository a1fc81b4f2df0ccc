//! Declarative validation schema for the booking draft.
//!
//! Pure and synchronous: given a field identifier and a candidate value,
//! each rule returns pass/fail plus a human-readable message. No rule
//! performs I/O.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::booking::{BookingDraft, BookingField};
use crate::steps;

/// Minimum passenger count.
pub const MIN_PASSENGERS: i32 = 1;

/// Maximum passenger count.
pub const MAX_PASSENGERS: i32 = 4;

/// Minimum bag count.
pub const MIN_BAGS: i32 = 0;

/// Maximum bag count.
pub const MAX_BAGS: i32 = 3;

/// Minimum first-name length in characters.
pub const MIN_NAME_CHARS: usize = 2;

/// Minimum phone-number length in characters.
pub const MIN_PHONE_CHARS: usize = 10;

/// International-phone-like pattern: optional leading `+`, then digits,
/// spaces, hyphens, and parentheses.
const PHONE_PATTERN: &str = r"^\+?[0-9 ()\-]+$";

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern must compile"))
}

/// A single field-level rule violation.
///
/// The message is guaranteed non-empty: rule evaluators always supply one,
/// and the constructor substitutes a generic fallback if one ever arrives
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: BookingField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: BookingField, message: impl Into<String>) -> Self {
        let message: String = message.into();
        let message = if message.trim().is_empty() {
            format!("Invalid value for {}", field.as_str())
        } else {
            message
        };
        Self { field, message }
    }
}

// ---------------------------------------------------------------------------
// Per-field rules
// ---------------------------------------------------------------------------

pub fn validate_car_type(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(BookingField::CarType, "Choose a car type"));
    }
    Ok(())
}

pub fn validate_car_model(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(
            BookingField::CarModel,
            "Choose a car model",
        ));
    }
    Ok(())
}

pub fn validate_passengers(value: i32) -> Result<(), FieldError> {
    if !(MIN_PASSENGERS..=MAX_PASSENGERS).contains(&value) {
        return Err(FieldError::new(
            BookingField::Passengers,
            format!("Passenger count must be between {MIN_PASSENGERS} and {MAX_PASSENGERS}"),
        ));
    }
    Ok(())
}

pub fn validate_bags(value: i32) -> Result<(), FieldError> {
    if !(MIN_BAGS..=MAX_BAGS).contains(&value) {
        return Err(FieldError::new(
            BookingField::Bags,
            format!("Bag count must be between {MIN_BAGS} and {MAX_BAGS}"),
        ));
    }
    Ok(())
}

/// Shared rule for both address fields; `field` selects the message target.
pub fn validate_address(field: BookingField, address: &str) -> Result<(), FieldError> {
    if address.trim().is_empty() {
        let message = match field {
            BookingField::PickupAddress => "Enter a pickup location",
            _ => "Enter a drop-off location",
        };
        return Err(FieldError::new(field, message));
    }
    Ok(())
}

pub fn validate_first_name(value: &str) -> Result<(), FieldError> {
    if value.trim().chars().count() < MIN_NAME_CHARS {
        return Err(FieldError::new(
            BookingField::FirstName,
            format!("Name must be at least {MIN_NAME_CHARS} characters"),
        ));
    }
    Ok(())
}

/// Length check first, then the pattern: a short all-digit value fails on
/// length even though it matches the pattern.
pub fn validate_phone_number(value: &str) -> Result<(), FieldError> {
    if value.trim().chars().count() < MIN_PHONE_CHARS {
        return Err(FieldError::new(
            BookingField::PhoneNumber,
            format!("Phone number must be at least {MIN_PHONE_CHARS} characters"),
        ));
    }
    if !phone_regex().is_match(value.trim()) {
        return Err(FieldError::new(
            BookingField::PhoneNumber,
            "Phone number may only contain digits, spaces, hyphens, parentheses, and a leading +",
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Draft-level evaluation
// ---------------------------------------------------------------------------

/// Evaluate one field of the draft against its rule.
pub fn validate_field(draft: &BookingDraft, field: BookingField) -> Result<(), FieldError> {
    match field {
        BookingField::CarType => validate_car_type(&draft.car_type),
        BookingField::CarModel => validate_car_model(&draft.car_model),
        BookingField::Passengers => validate_passengers(draft.passengers),
        BookingField::Bags => validate_bags(draft.bags),
        BookingField::PickupAddress => validate_address(field, &draft.pickup.address),
        BookingField::DropoffAddress => validate_address(field, &draft.dropoff.address),
        BookingField::FirstName => validate_first_name(&draft.first_name),
        BookingField::PhoneNumber => validate_phone_number(&draft.phone_number),
    }
}

/// Evaluate the whole draft in step/field declaration order.
///
/// Returns every violation, not just the first, so a failed submit can
/// report all problems while jumping to the earliest one.
pub fn validate_draft(draft: &BookingDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for step in steps::STEPS {
        for &field in step.fields {
            if let Err(e) = validate_field(draft, field) {
                errors.push(e);
            }
        }
    }
    errors
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
