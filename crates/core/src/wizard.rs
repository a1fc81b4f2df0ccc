//! Wizard session state machine.
//!
//! Holds the current step index and the accumulating [`BookingDraft`] for
//! one booking session. All transitions are pure; the API layer owns the
//! surrounding I/O (catalog fetches, persistence, handoff) and applies the
//! results back through the methods here.
//!
//! States are the step indices `0..STEPS.len()`, plus the `submitting`
//! guard. `advance` moves forward only when the current step's fields
//! validate; `go_previous` is unconditional; a failed full validation at
//! submit time jumps to the earliest step owning an invalid field.

use serde::Serialize;

use crate::booking::{BookingDraft, BookingField, DraftPatch};
use crate::catalog;
use crate::steps::{self, StepId, LAST_STEP, STEPS};
use crate::validation::{self, FieldError};

/// A catalog model option cached in the session for the lifetime of the
/// current car-type selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelOption {
    pub slug: String,
    pub label: String,
}

/// Result of applying a draft patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Whether the patch triggered an auto-advance.
    pub advanced: bool,
}

/// Result of applying fetched catalog models to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelsOutcome {
    /// Models stored. When the catalog returned zero models, a default
    /// model slug was synthesized and, if the session was sitting on the
    /// model step, it auto-advanced.
    Applied {
        default_synthesized: bool,
        advanced: bool,
    },
    /// The fetch was superseded by a car-type change; its results were
    /// discarded.
    Stale,
}

/// Gate result for starting a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitGate {
    /// Draft fully valid; the `submitting` guard is now held.
    Ready,
    /// Another submission is in flight.
    InFlight,
    /// The draft is invalid; the session has jumped to the earliest step
    /// owning a violation.
    Invalid {
        step: usize,
        errors: Vec<FieldError>,
    },
}

/// One booking session's wizard state.
#[derive(Debug, Clone)]
pub struct WizardState {
    current_step: usize,
    draft: BookingDraft,
    submitting: bool,
    /// Bumped whenever the governing car type changes; model fetches carry
    /// the generation they were started under so stale results can be
    /// discarded instead of last-write-wins.
    models_generation: u64,
    available_models: Vec<ModelOption>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// Fresh session: step 0, default draft.
    pub fn new() -> Self {
        Self {
            current_step: 0,
            draft: BookingDraft::default(),
            submitting: false,
            models_generation: 0,
            available_models: Vec::new(),
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current_step_id(&self) -> StepId {
        STEPS[self.current_step].id
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn models_generation(&self) -> u64 {
        self.models_generation
    }

    pub fn available_models(&self) -> &[ModelOption] {
        &self.available_models
    }

    // -----------------------------------------------------------------------
    // Field updates
    // -----------------------------------------------------------------------

    /// Apply a partial draft update.
    ///
    /// Fields are written in declaration order; each candidate value is
    /// validated before it lands, and application stops at the first
    /// invalid value (prior valid writes stay applied, the draft invariant
    /// holds throughout). After a successful application, the session
    /// auto-advances when the current step declares it, the patch touched
    /// one of the step's fields, and every field of the step is valid.
    pub fn apply_patch(&mut self, patch: DraftPatch) -> Result<PatchOutcome, FieldError> {
        let mut touched: Vec<BookingField> = Vec::new();

        if let Some(value) = patch.car_type {
            validation::validate_car_type(&value)?;
            self.set_car_type(value);
            touched.push(BookingField::CarType);
        }
        if let Some(value) = patch.car_model {
            validation::validate_car_model(&value)?;
            self.draft.car_model = value;
            touched.push(BookingField::CarModel);
        }
        if let Some(value) = patch.passengers {
            validation::validate_passengers(value)?;
            self.draft.passengers = value;
            touched.push(BookingField::Passengers);
        }
        if let Some(value) = patch.bags {
            validation::validate_bags(value)?;
            self.draft.bags = value;
            touched.push(BookingField::Bags);
        }
        if let Some(value) = patch.pickup {
            validation::validate_address(BookingField::PickupAddress, &value.address)?;
            self.draft.pickup = value;
            touched.push(BookingField::PickupAddress);
        }
        if let Some(value) = patch.dropoff {
            validation::validate_address(BookingField::DropoffAddress, &value.address)?;
            self.draft.dropoff = value;
            touched.push(BookingField::DropoffAddress);
        }
        if let Some(value) = patch.first_name {
            validation::validate_first_name(&value)?;
            self.draft.first_name = value;
            touched.push(BookingField::FirstName);
        }
        if let Some(value) = patch.phone_number {
            validation::validate_phone_number(&value)?;
            self.draft.phone_number = value;
            touched.push(BookingField::PhoneNumber);
        }

        let step = &STEPS[self.current_step];
        let touched_current = touched.iter().any(|f| step.fields.contains(f));
        let mut advanced = false;
        if step.auto_advance && touched_current && self.current_step_valid() {
            if self.current_step < LAST_STEP {
                self.current_step += 1;
                advanced = true;
            }
        }
        Ok(PatchOutcome { advanced })
    }

    /// Write the car type, resetting model state when the selection
    /// actually changes.
    fn set_car_type(&mut self, value: String) {
        if value != self.draft.car_type {
            self.draft.car_type = value;
            self.draft.car_model.clear();
            self.available_models.clear();
            self.models_generation += 1;
        }
    }

    fn current_step_valid(&self) -> bool {
        STEPS[self.current_step]
            .fields
            .iter()
            .all(|&f| validation::validate_field(&self.draft, f).is_ok())
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// Validate only the current step's fields and move forward.
    ///
    /// On failure, returns the first invalid field (in the step's declared
    /// order) without advancing. On success at the last step, the index is
    /// unchanged. Repeated calls with valid fields never touch the draft.
    pub fn advance(&mut self) -> Result<usize, FieldError> {
        for &field in STEPS[self.current_step].fields {
            validation::validate_field(&self.draft, field)?;
        }
        if self.current_step < LAST_STEP {
            self.current_step += 1;
        }
        Ok(self.current_step)
    }

    /// Move back one step. Always legal when not on the first step; never
    /// validates.
    pub fn go_previous(&mut self) -> usize {
        if self.current_step > 0 {
            self.current_step -= 1;
        }
        self.current_step
    }

    // -----------------------------------------------------------------------
    // Catalog models
    // -----------------------------------------------------------------------

    /// Apply the result of a catalog model fetch started under
    /// `generation`.
    ///
    /// Results from a superseded generation are discarded. An empty result
    /// synthesizes the `<car_type>-default` model slug; if the session is
    /// sitting on the model step, it advances without user interaction.
    pub fn apply_models(&mut self, generation: u64, models: Vec<ModelOption>) -> ModelsOutcome {
        if generation != self.models_generation {
            return ModelsOutcome::Stale;
        }
        let empty = models.is_empty();
        self.available_models = models;

        if empty && !self.draft.car_type.is_empty() && self.draft.car_model.is_empty() {
            self.draft.car_model = catalog::default_model_id(&self.draft.car_type);
            let mut advanced = false;
            if self.current_step_id() == StepId::CarModel && self.current_step < LAST_STEP {
                self.current_step += 1;
                advanced = true;
            }
            return ModelsOutcome::Applied {
                default_synthesized: true,
                advanced,
            };
        }
        ModelsOutcome::Applied {
            default_synthesized: false,
            advanced: false,
        }
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// Re-validate the entire draft and take the `submitting` guard.
    ///
    /// A second submit while one is outstanding returns
    /// [`SubmitGate::InFlight`]. An invalid draft jumps the session to the
    /// earliest step owning a violation and reports every violation.
    pub fn begin_submit(&mut self) -> SubmitGate {
        if self.submitting {
            return SubmitGate::InFlight;
        }
        let errors = validation::validate_draft(&self.draft);
        if !errors.is_empty() {
            let step = steps::earliest_invalid_step(&errors)
                .expect("non-empty error list maps to a step");
            self.current_step = step;
            return SubmitGate::Invalid { step, errors };
        }
        self.submitting = true;
        SubmitGate::Ready
    }

    /// Release the `submitting` guard after the submit attempt finished
    /// (successfully or not).
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Location;

    fn patch(f: impl FnOnce(&mut DraftPatch)) -> DraftPatch {
        let mut p = DraftPatch::default();
        f(&mut p);
        p
    }

    fn location(address: &str) -> Location {
        Location {
            address: address.into(),
            coordinates: None,
        }
    }

    /// Drive a fresh session to a fully valid draft on the last step.
    fn complete_session() -> WizardState {
        let mut w = WizardState::new();
        w.apply_patch(patch(|p| p.car_type = Some("sedan".into())))
            .unwrap();
        w.apply_patch(patch(|p| p.car_model = Some("toyota-camry".into())))
            .unwrap();
        w.apply_patch(patch(|p| p.passengers = Some(2))).unwrap();
        w.apply_patch(patch(|p| p.bags = Some(1))).unwrap();
        w.apply_patch(patch(|p| p.pickup = Some(location("Cairo"))))
            .unwrap();
        w.advance().unwrap();
        w.apply_patch(patch(|p| p.dropoff = Some(location("Alexandria"))))
            .unwrap();
        w.advance().unwrap();
        w.apply_patch(patch(|p| {
            p.first_name = Some("Ali".into());
            p.phone_number = Some("+201234567890".into());
        }))
        .unwrap();
        w
    }

    // -- initial state --

    #[test]
    fn fresh_session_starts_at_step_zero() {
        let w = WizardState::new();
        assert_eq!(w.current_step(), 0);
        assert_eq!(w.current_step_id(), StepId::CarType);
        assert!(!w.is_submitting());
        assert!(w.available_models().is_empty());
    }

    // -- advance gating --

    #[test]
    fn advance_blocked_until_step_fields_valid() {
        let mut w = WizardState::new();
        let err = w.advance().unwrap_err();
        assert_eq!(err.field, BookingField::CarType);
        assert_eq!(w.current_step(), 0);
    }

    #[test]
    fn advance_reports_first_invalid_field_in_declared_order() {
        let mut w = complete_session();
        // Break both contact fields; first name is declared first.
        w.draft.first_name.clear();
        w.draft.phone_number.clear();
        let err = w.advance().unwrap_err();
        assert_eq!(err.field, BookingField::FirstName);
        assert!(!err.message.is_empty());
    }

    #[test]
    fn advance_is_idempotent_on_draft() {
        let mut w = complete_session();
        let before = w.draft().clone();
        w.advance().unwrap();
        w.advance().unwrap();
        assert_eq!(w.draft(), &before);
        assert_eq!(w.current_step(), LAST_STEP);
    }

    // -- auto-advance --

    #[test]
    fn selecting_car_type_auto_advances() {
        let mut w = WizardState::new();
        let out = w
            .apply_patch(patch(|p| p.car_type = Some("sedan".into())))
            .unwrap();
        assert!(out.advanced);
        assert_eq!(w.current_step_id(), StepId::CarModel);
    }

    #[test]
    fn patch_outside_current_step_does_not_advance() {
        let mut w = WizardState::new();
        let out = w.apply_patch(patch(|p| p.passengers = Some(3))).unwrap();
        assert!(!out.advanced);
        assert_eq!(w.current_step(), 0);
    }

    #[test]
    fn manual_steps_do_not_auto_advance() {
        let mut w = complete_session();
        w.go_previous(); // dropoff
        w.go_previous(); // pickup
        let out = w
            .apply_patch(patch(|p| p.pickup = Some(location("Giza"))))
            .unwrap();
        assert!(!out.advanced);
        assert_eq!(w.current_step_id(), StepId::Pickup);
    }

    // -- invalid writes are rejected --

    #[test]
    fn invalid_value_rejected_and_draft_unchanged() {
        let mut w = WizardState::new();
        w.apply_patch(patch(|p| p.car_type = Some("sedan".into())))
            .unwrap();
        let err = w.apply_patch(patch(|p| p.passengers = Some(9))).unwrap_err();
        assert_eq!(err.field, BookingField::Passengers);
        assert_eq!(w.draft().passengers, 1);
    }

    #[test]
    fn patch_stops_at_first_invalid_value() {
        let mut w = WizardState::new();
        let err = w
            .apply_patch(patch(|p| {
                p.car_type = Some("sedan".into());
                p.bags = Some(7);
                p.first_name = Some("Ali".into());
            }))
            .unwrap_err();
        assert_eq!(err.field, BookingField::Bags);
        // Earlier field landed; later one did not.
        assert_eq!(w.draft().car_type, "sedan");
        assert!(w.draft().first_name.is_empty());
    }

    // -- backward navigation --

    #[test]
    fn go_previous_never_validates_and_floors_at_zero() {
        let mut w = WizardState::new();
        assert_eq!(w.go_previous(), 0);
        w.apply_patch(patch(|p| p.car_type = Some("sedan".into())))
            .unwrap();
        // Clear the field the previous step requires, then walk back.
        w.draft.car_type.clear();
        assert_eq!(w.go_previous(), 0);
    }

    // -- car type changes reset model state --

    #[test]
    fn changing_car_type_clears_model_and_bumps_generation() {
        let mut w = WizardState::new();
        w.apply_patch(patch(|p| p.car_type = Some("sedan".into())))
            .unwrap();
        let gen = w.models_generation();
        w.apply_models(
            gen,
            vec![ModelOption {
                slug: "toyota-camry".into(),
                label: "Camry".into(),
            }],
        );
        w.apply_patch(patch(|p| p.car_model = Some("toyota-camry".into())))
            .unwrap();

        w.go_previous();
        w.go_previous();
        w.apply_patch(patch(|p| p.car_type = Some("suv".into())))
            .unwrap();
        assert!(w.draft().car_model.is_empty());
        assert!(w.available_models().is_empty());
        assert_eq!(w.models_generation(), gen + 1);
    }

    #[test]
    fn reselecting_same_car_type_keeps_model_state() {
        let mut w = WizardState::new();
        w.apply_patch(patch(|p| p.car_type = Some("sedan".into())))
            .unwrap();
        let gen = w.models_generation();
        w.go_previous();
        w.apply_patch(patch(|p| p.car_type = Some("sedan".into())))
            .unwrap();
        assert_eq!(w.models_generation(), gen);
    }

    // -- model fetch application --

    #[test]
    fn stale_model_fetch_is_discarded() {
        let mut w = WizardState::new();
        w.apply_patch(patch(|p| p.car_type = Some("sedan".into())))
            .unwrap();
        let stale_gen = w.models_generation();
        w.go_previous();
        w.apply_patch(patch(|p| p.car_type = Some("suv".into())))
            .unwrap();

        let out = w.apply_models(
            stale_gen,
            vec![ModelOption {
                slug: "toyota-camry".into(),
                label: "Camry".into(),
            }],
        );
        assert_eq!(out, ModelsOutcome::Stale);
        assert!(w.available_models().is_empty());
    }

    #[test]
    fn zero_models_synthesizes_default_and_auto_advances() {
        let mut w = WizardState::new();
        w.apply_patch(patch(|p| p.car_type = Some("sedan".into())))
            .unwrap();
        assert_eq!(w.current_step_id(), StepId::CarModel);

        let out = w.apply_models(w.models_generation(), Vec::new());
        assert_eq!(
            out,
            ModelsOutcome::Applied {
                default_synthesized: true,
                advanced: true,
            }
        );
        assert_eq!(w.draft().car_model, "sedan-default");
        assert_eq!(w.current_step_id(), StepId::Passengers);
    }

    #[test]
    fn nonempty_models_do_not_touch_the_draft() {
        let mut w = WizardState::new();
        w.apply_patch(patch(|p| p.car_type = Some("sedan".into())))
            .unwrap();
        let out = w.apply_models(
            w.models_generation(),
            vec![ModelOption {
                slug: "toyota-camry".into(),
                label: "Camry".into(),
            }],
        );
        assert_eq!(
            out,
            ModelsOutcome::Applied {
                default_synthesized: false,
                advanced: false,
            }
        );
        assert!(w.draft().car_model.is_empty());
        assert_eq!(w.available_models().len(), 1);
    }

    // -- submission gate --

    #[test]
    fn submit_with_incomplete_draft_jumps_to_earliest_invalid_step() {
        let mut w = complete_session();
        w.draft.first_name.clear();
        w.draft.car_model.clear();
        match w.begin_submit() {
            SubmitGate::Invalid { step, errors } => {
                assert_eq!(step, 1); // car model step comes before contact
                assert_eq!(errors.len(), 2);
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert_eq!(w.current_step(), 1);
        assert!(!w.is_submitting());
    }

    #[test]
    fn submit_guard_blocks_reentrant_submission() {
        let mut w = complete_session();
        assert_eq!(w.begin_submit(), SubmitGate::Ready);
        assert!(w.is_submitting());
        assert_eq!(w.begin_submit(), SubmitGate::InFlight);
        w.finish_submit();
        assert_eq!(w.begin_submit(), SubmitGate::Ready);
    }
}
