//! Wizard step registry.
//!
//! A fixed, ordered sequence of step definitions. Each step names the draft
//! fields that gate advancement past it, whether a valid field change
//! auto-advances, and the selection discriminator for the two steps sharing
//! the numeric-selection display.

use serde::Serialize;

use crate::booking::BookingField;
use crate::validation::FieldError;

/// Identifier for each wizard step, in transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    CarType,
    CarModel,
    Passengers,
    Bags,
    Pickup,
    Dropoff,
    Contact,
}

impl StepId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CarType => "car_type",
            Self::CarModel => "car_model",
            Self::Passengers => "passengers",
            Self::Bags => "bags",
            Self::Pickup => "pickup",
            Self::Dropoff => "dropoff",
            Self::Contact => "contact",
        }
    }
}

/// Discriminator for the shared numeric-selection step display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    Passengers,
    Bags,
}

/// One immutable wizard step definition.
#[derive(Debug, Clone, Copy)]
pub struct StepDefinition {
    pub id: StepId,
    /// Draft fields validated (in this order) before advancing past the step.
    pub fields: &'static [BookingField],
    /// Whether a valid change to one of `fields` advances without an
    /// explicit "next" action.
    pub auto_advance: bool,
    pub selection: Option<SelectionKind>,
}

/// The ordered step sequence. Ordering is fixed and defines the only legal
/// transitions (strictly forward/backward by one).
pub const STEPS: &[StepDefinition] = &[
    StepDefinition {
        id: StepId::CarType,
        fields: &[BookingField::CarType],
        auto_advance: true,
        selection: None,
    },
    StepDefinition {
        id: StepId::CarModel,
        fields: &[BookingField::CarModel],
        auto_advance: true,
        selection: None,
    },
    StepDefinition {
        id: StepId::Passengers,
        fields: &[BookingField::Passengers],
        auto_advance: true,
        selection: Some(SelectionKind::Passengers),
    },
    StepDefinition {
        id: StepId::Bags,
        fields: &[BookingField::Bags],
        auto_advance: true,
        selection: Some(SelectionKind::Bags),
    },
    StepDefinition {
        id: StepId::Pickup,
        fields: &[BookingField::PickupAddress],
        auto_advance: false,
        selection: None,
    },
    StepDefinition {
        id: StepId::Dropoff,
        fields: &[BookingField::DropoffAddress],
        auto_advance: false,
        selection: None,
    },
    StepDefinition {
        id: StepId::Contact,
        fields: &[BookingField::FirstName, BookingField::PhoneNumber],
        auto_advance: false,
        selection: None,
    },
];

/// Index of the final step.
pub const LAST_STEP: usize = STEPS.len() - 1;

/// Index of the step that owns a given draft field.
pub fn step_for_field(field: BookingField) -> usize {
    STEPS
        .iter()
        .position(|s| s.fields.contains(&field))
        .expect("every booking field belongs to a step")
}

/// Earliest step (by index) owning at least one of the given errors.
pub fn earliest_invalid_step(errors: &[FieldError]) -> Option<usize> {
    errors.iter().map(|e| step_for_field(e.field)).min()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_owned_by_exactly_one_step() {
        let all = [
            BookingField::CarType,
            BookingField::CarModel,
            BookingField::Passengers,
            BookingField::Bags,
            BookingField::PickupAddress,
            BookingField::DropoffAddress,
            BookingField::FirstName,
            BookingField::PhoneNumber,
        ];
        for field in all {
            let owners = STEPS.iter().filter(|s| s.fields.contains(&field)).count();
            assert_eq!(owners, 1, "{field:?} owned by {owners} steps");
        }
    }

    #[test]
    fn selection_steps_share_the_discriminated_display() {
        assert_eq!(STEPS[2].selection, Some(SelectionKind::Passengers));
        assert_eq!(STEPS[3].selection, Some(SelectionKind::Bags));
        assert!(STEPS
            .iter()
            .filter(|s| s.selection.is_none())
            .all(|s| s.id != StepId::Passengers && s.id != StepId::Bags));
    }

    #[test]
    fn contact_step_is_last_and_owns_two_fields() {
        assert_eq!(STEPS[LAST_STEP].id, StepId::Contact);
        assert_eq!(STEPS[LAST_STEP].fields.len(), 2);
    }

    #[test]
    fn step_for_field_matches_registry_order() {
        assert_eq!(step_for_field(BookingField::CarType), 0);
        assert_eq!(step_for_field(BookingField::CarModel), 1);
        assert_eq!(step_for_field(BookingField::PhoneNumber), LAST_STEP);
    }

    #[test]
    fn earliest_invalid_step_picks_minimum_index() {
        let errors = vec![
            FieldError::new(BookingField::PhoneNumber, "bad"),
            FieldError::new(BookingField::CarModel, "bad"),
            FieldError::new(BookingField::DropoffAddress, "bad"),
        ];
        assert_eq!(earliest_invalid_step(&errors), Some(1));
        assert_eq!(earliest_invalid_step(&[]), None);
    }
}
