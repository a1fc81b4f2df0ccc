//! Handlers for the booking wizard sessions.
//!
//! Provides endpoints for creating, updating, navigating, and submitting
//! wizard sessions. All state transitions are pure operations on
//! [`WizardState`]; these handlers wrap them with the catalog reads,
//! persistence writes, and handoff-link building that surround them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use mashwar_core::booking::{BookingDraft, DraftPatch};
use mashwar_core::error::CoreError;
use mashwar_core::steps::{SelectionKind, STEPS};
use mashwar_core::validation::FieldError;
use mashwar_core::wizard::{ModelOption, ModelsOutcome, SubmitGate, WizardState};
use mashwar_core::{catalog, handoff};
use mashwar_db::models::booking::{Booking, NewBooking};
use mashwar_db::repositories::{BookingRepo, CarModelRepo, CarTypeRepo, ContactRepo};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Client-facing view of one wizard session.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub current_step: usize,
    pub step: &'static str,
    pub total_steps: usize,
    pub auto_advance: bool,
    pub selection: Option<SelectionKind>,
    pub draft: BookingDraft,
    pub available_models: Vec<ModelOption>,
    pub submitting: bool,
}

impl SessionView {
    fn from_state(id: Uuid, state: &WizardState) -> Self {
        let step = &STEPS[state.current_step()];
        Self {
            id,
            current_step: state.current_step(),
            step: step.id.as_str(),
            total_steps: STEPS.len(),
            auto_advance: step.auto_advance,
            selection: step.selection,
            draft: state.draft().clone(),
            available_models: state.available_models().to_vec(),
            submitting: state.is_submitting(),
        }
    }
}

/// Outcome of a field update or explicit advance. A failed step validation
/// is domain data, not a transport error: the session stays usable and the
/// first failing field is reported with its message.
#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    pub session: SessionView,
    pub advanced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldError>,
}

/// Outcome of a model refresh.
#[derive(Debug, Serialize)]
pub struct RefreshModelsResponse {
    pub session: SessionView,
    /// `false` when the fetch was superseded by a car-type change and its
    /// results were discarded.
    pub applied: bool,
    pub default_synthesized: bool,
    pub advanced: bool,
}

/// A submit-time failure in one collaborator. Failures are independent:
/// one does not prevent the other collaborators from being attempted.
#[derive(Debug, Serialize)]
pub struct SubmitFault {
    pub source: &'static str,
    pub message: String,
}

/// Outcome of a submit attempt.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitResponse {
    /// The draft failed full validation; the session jumped to the
    /// earliest step owning an invalid field.
    Invalid {
        session: SessionView,
        step: usize,
        errors: Vec<FieldError>,
    },
    /// The draft was valid and submission was attempted. Individual
    /// collaborator failures are listed in `faults`.
    Submitted {
        booking: Option<Booking>,
        contact_saved: bool,
        handoff_url: Option<String>,
        faults: Vec<SubmitFault>,
    },
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn session_not_found(id: Uuid) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "BookingSession",
        key: id.to_string(),
    })
}

// ---------------------------------------------------------------------------
// POST /booking-sessions
// ---------------------------------------------------------------------------

/// Create a fresh wizard session at step 0 with a default draft.
pub async fn create_session(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let (id, wizard) = state.sessions.create().await;

    tracing::info!(session_id = %id, "Booking session created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SessionView::from_state(id, &wizard),
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /booking-sessions/{id}
// ---------------------------------------------------------------------------

/// Get the current view of a session.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let wizard = state
        .sessions
        .snapshot(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(DataResponse {
        data: SessionView::from_state(id, &wizard),
    }))
}

// ---------------------------------------------------------------------------
// PUT /booking-sessions/{id}/fields
// ---------------------------------------------------------------------------

/// Apply a partial draft update.
///
/// Each present field is validated before it lands; an invalid value is
/// rejected (the draft keeps its previous value) and reported as a field
/// error. A valid change to a field of the current step auto-advances when
/// the step declares it.
pub async fn update_fields(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<DraftPatch>,
) -> AppResult<impl IntoResponse> {
    let (outcome, wizard) = state
        .sessions
        .with(id, |s| (s.apply_patch(patch), s.clone()))
        .await
        .ok_or_else(|| session_not_found(id))?;

    let response = match outcome {
        Ok(result) => TransitionResponse {
            session: SessionView::from_state(id, &wizard),
            advanced: result.advanced,
            error: None,
        },
        Err(error) => {
            tracing::debug!(session_id = %id, field = error.field.as_str(), "Field update rejected");
            TransitionResponse {
                session: SessionView::from_state(id, &wizard),
                advanced: false,
                error: Some(error),
            }
        }
    };
    Ok(Json(DataResponse { data: response }))
}

// ---------------------------------------------------------------------------
// POST /booking-sessions/{id}/advance
// ---------------------------------------------------------------------------

/// Validate only the current step's fields and move forward.
///
/// On failure, the index is unchanged and the first invalid field (in the
/// step's declared order) is surfaced with its message.
pub async fn advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let (outcome, wizard) = state
        .sessions
        .with(id, |s| {
            let before = s.current_step();
            (s.advance().map(|after| after > before), s.clone())
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    let response = match outcome {
        Ok(advanced) => TransitionResponse {
            session: SessionView::from_state(id, &wizard),
            advanced,
            error: None,
        },
        Err(error) => TransitionResponse {
            session: SessionView::from_state(id, &wizard),
            advanced: false,
            error: Some(error),
        },
    };
    Ok(Json(DataResponse { data: response }))
}

// ---------------------------------------------------------------------------
// POST /booking-sessions/{id}/go-back
// ---------------------------------------------------------------------------

/// Move back one step. Always legal when not on the first step; never
/// validates.
pub async fn go_back(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let wizard = state
        .sessions
        .with(id, |s| {
            s.go_previous();
            s.clone()
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(DataResponse {
        data: SessionView::from_state(id, &wizard),
    }))
}

// ---------------------------------------------------------------------------
// POST /booking-sessions/{id}/refresh-models
// ---------------------------------------------------------------------------

/// Fetch catalog models for the session's selected car type and apply them.
///
/// The fetch is tagged with the session's model generation; if the car type
/// changes while the query is in flight, the stale result is discarded
/// instead of last-write-wins. Zero models synthesizes the default model
/// and auto-advances past the model step.
pub async fn refresh_models(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let (car_type, generation) = state
        .sessions
        .with(id, |s| (s.draft().car_type.clone(), s.models_generation()))
        .await
        .ok_or_else(|| session_not_found(id))?;

    if car_type.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Select a car type before loading models".to_string(),
        )));
    }

    // A failed catalog read surfaces as an error without touching the
    // session; the wizard stays usable and the client may retry.
    let options = CarModelRepo::list_options_by_type_slug(&state.pool, &car_type).await?;
    let models: Vec<ModelOption> = options
        .into_iter()
        .map(|o| ModelOption {
            slug: o.id,
            label: o.label,
        })
        .collect();

    let (outcome, wizard) = state
        .sessions
        .with(id, |s| (s.apply_models(generation, models), s.clone()))
        .await
        .ok_or_else(|| session_not_found(id))?;

    let response = match outcome {
        ModelsOutcome::Applied {
            default_synthesized,
            advanced,
        } => {
            if default_synthesized {
                tracing::info!(
                    session_id = %id,
                    car_type = %car_type,
                    "No catalog models; synthesized default model"
                );
            }
            RefreshModelsResponse {
                session: SessionView::from_state(id, &wizard),
                applied: true,
                default_synthesized,
                advanced,
            }
        }
        ModelsOutcome::Stale => {
            tracing::debug!(session_id = %id, generation, "Discarded stale model fetch");
            RefreshModelsResponse {
                session: SessionView::from_state(id, &wizard),
                applied: false,
                default_synthesized: false,
                advanced: false,
            }
        }
    };
    Ok(Json(DataResponse { data: response }))
}

// ---------------------------------------------------------------------------
// POST /booking-sessions/{id}/submit
// ---------------------------------------------------------------------------

/// Re-validate the whole draft, persist the booking and contact, and build
/// the messaging handoff link.
///
/// An invalid draft jumps the session to the earliest step owning an
/// invalid field and persists nothing. For a valid draft the three
/// collaborators (booking write, contact write, handoff link) are attempted
/// independently: a failure in one is reported in `faults` without blocking
/// the others. The session is discarded once the booking row persisted.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let (gate, wizard) = state
        .sessions
        .with(id, |s| (s.begin_submit(), s.clone()))
        .await
        .ok_or_else(|| session_not_found(id))?;

    let draft = match gate {
        SubmitGate::InFlight => {
            return Err(AppError::Core(CoreError::Conflict(
                "A submission is already in progress for this session".to_string(),
            )));
        }
        SubmitGate::Invalid { step, errors } => {
            tracing::debug!(session_id = %id, step, errors = errors.len(), "Submit rejected by validation");
            return Ok(Json(DataResponse {
                data: SubmitResponse::Invalid {
                    session: SessionView::from_state(id, &wizard),
                    step,
                    errors,
                },
            }));
        }
        SubmitGate::Ready => wizard.draft().clone(),
    };

    let mut faults: Vec<SubmitFault> = Vec::new();

    // Resolve display labels from the catalog, falling back to the raw
    // slug (or the synthesized default-model label) on a miss or a read
    // failure.
    let car_type_label = match CarTypeRepo::find_by_slug(&state.pool, &draft.car_type).await {
        Ok(row) => catalog::resolve_label(&draft.car_type, row.map(|t| t.label)),
        Err(e) => {
            tracing::warn!(error = %e, "Car type label lookup failed; using raw slug");
            draft.car_type.clone()
        }
    };
    let car_model_label = if catalog::is_default_model(&draft.car_type, &draft.car_model) {
        catalog::default_model_label(&car_type_label)
    } else {
        match CarModelRepo::find_by_slug(&state.pool, &draft.car_model).await {
            Ok(row) => catalog::resolve_label(&draft.car_model, row.map(|m| m.label)),
            Err(e) => {
                tracing::warn!(error = %e, "Car model label lookup failed; using raw slug");
                draft.car_model.clone()
            }
        }
    };

    // (a) Persist the booking.
    let new_booking = NewBooking {
        car_type: draft.car_type.clone(),
        car_model: draft.car_model.clone(),
        car_type_label: car_type_label.clone(),
        car_model_label: car_model_label.clone(),
        passengers: draft.passengers,
        bags: draft.bags,
        pickup_address: draft.pickup.address.clone(),
        pickup_lat: draft.pickup.coordinates.map(|c| c.lat),
        pickup_lon: draft.pickup.coordinates.map(|c| c.lon),
        dropoff_address: draft.dropoff.address.clone(),
        dropoff_lat: draft.dropoff.coordinates.map(|c| c.lat),
        dropoff_lon: draft.dropoff.coordinates.map(|c| c.lon),
        first_name: draft.first_name.clone(),
        phone_number: draft.phone_number.clone(),
    };
    let booking = match BookingRepo::create(&state.pool, &new_booking).await {
        Ok(b) => {
            tracing::info!(session_id = %id, booking_id = b.id, "Booking persisted");
            Some(b)
        }
        Err(e) => {
            tracing::error!(session_id = %id, error = %e, "Booking write failed");
            faults.push(SubmitFault {
                source: "booking",
                message: "Could not save the booking request".to_string(),
            });
            None
        }
    };

    // (b) Persist the contact, deduplicated by phone number. A concurrent
    // duplicate insert counts as already-existing, not a failure.
    let contact_saved = match save_contact_if_new(&state, &draft).await {
        Ok(saved) => saved,
        Err(e) => {
            tracing::error!(session_id = %id, error = %e, "Contact write failed");
            faults.push(SubmitFault {
                source: "contact",
                message: "Could not save the contact record".to_string(),
            });
            false
        }
    };

    // (c) Build the messaging handoff link.
    let text = handoff::summary(&draft, &car_type_label, &car_model_label);
    let handoff_url = match handoff::deep_link(
        &state.config.messaging.host,
        &state.config.messaging.destination,
        &text,
    ) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::error!(session_id = %id, error = %e, "Handoff link build failed");
            faults.push(SubmitFault {
                source: "handoff",
                message: "Could not open the messaging handoff".to_string(),
            });
            None
        }
    };

    let _ = state.sessions.with(id, |s| s.finish_submit()).await;
    if booking.is_some() {
        state.sessions.remove(id).await;
    }

    Ok(Json(DataResponse {
        data: SubmitResponse::Submitted {
            booking,
            contact_saved,
            handoff_url,
            faults,
        },
    }))
}

/// Insert a contact record unless one with the same phone number exists.
async fn save_contact_if_new(state: &AppState, draft: &BookingDraft) -> Result<bool, sqlx::Error> {
    if ContactRepo::exists_by_phone(&state.pool, &draft.phone_number).await? {
        return Ok(false);
    }
    match ContactRepo::create(&state.pool, &draft.first_name, &draft.phone_number).await {
        Ok(_) => Ok(true),
        Err(e) if is_unique_violation(&e) => Ok(false),
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// DELETE /booking-sessions/{id}
// ---------------------------------------------------------------------------

/// Abandon a session, discarding its draft.
pub async fn abandon_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    if !state.sessions.remove(id).await {
        return Err(session_not_found(id));
    }
    tracing::info!(session_id = %id, "Booking session abandoned");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use mashwar_core::steps::LAST_STEP;

    #[test]
    fn session_view_reflects_step_registry() {
        let mut wizard = WizardState::new();
        let id = Uuid::new_v4();
        let view = SessionView::from_state(id, &wizard);
        assert_eq!(view.current_step, 0);
        assert_eq!(view.step, "car_type");
        assert_eq!(view.total_steps, STEPS.len());
        assert!(view.auto_advance);
        assert!(view.selection.is_none());

        wizard
            .apply_patch(DraftPatch {
                car_type: Some("sedan".into()),
                ..Default::default()
            })
            .unwrap();
        wizard
            .apply_patch(DraftPatch {
                car_model: Some("toyota-camry".into()),
                ..Default::default()
            })
            .unwrap();
        let view = SessionView::from_state(id, &wizard);
        assert_eq!(view.step, "passengers");
        assert_eq!(view.selection, Some(SelectionKind::Passengers));
    }

    #[test]
    fn submit_response_serializes_with_status_tag() {
        let json = serde_json::to_value(SubmitResponse::Submitted {
            booking: None,
            contact_saved: true,
            handoff_url: Some("https://wa.me/1?text=x".into()),
            faults: vec![SubmitFault {
                source: "booking",
                message: "Could not save the booking request".into(),
            }],
        })
        .unwrap();
        assert_eq!(json["status"], "submitted");
        assert_eq!(json["faults"][0]["source"], "booking");
    }

    #[test]
    fn last_step_constant_matches_registry() {
        assert_eq!(LAST_STEP, STEPS.len() - 1);
    }
}
