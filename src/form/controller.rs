use std::time::Duration;

use tracing::{debug, warn};

use crate::{
    core::{
        errors::AppError,
        types::{PersonDetails, SubmissionOutcome, SubmitPhase, SuggestionField},
    },
    form::{dates::normalize_date_input, state::FormState},
    providers::presence_api::{error_detail, PresenceApi},
};

const DEFAULT_MIN_SUGGESTION_LEN: usize = 1;
const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(1000);

const UNKNOWN_SERVER_ERROR: &str = "An unknown error occurred.";
const GENERIC_SUBMIT_ERROR: &str = "An error occurred while processing your request.";

/// Drives the three interaction flows of the form: autocomplete
/// suggestions, identity-keyed auto-fill, and submission. Owns no field
/// values itself; every operation reads and writes a caller-held
/// [`FormState`].
pub struct FormController<A: PresenceApi> {
    api: A,
    min_suggestion_len: usize,
    reset_delay: Duration,
    phase: SubmitPhase,
}

impl<A: PresenceApi> FormController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            min_suggestion_len: DEFAULT_MIN_SUGGESTION_LEN,
            reset_delay: DEFAULT_RESET_DELAY,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Candidate strings for a partial term. Terms below the minimum
    /// length issue no request, and any fetch failure degrades to an
    /// empty list: suggestions are an enhancement, never an error.
    pub async fn suggestions(&self, field: SuggestionField, term: &str) -> Vec<String> {
        if term.chars().count() < self.min_suggestion_len {
            return Vec::new();
        }
        match self.api.autocomplete(term, field).await {
            Ok(candidates) => candidates,
            Err(err) => {
                debug!(code = err.code(), "autocomplete degraded: {err}");
                Vec::new()
            }
        }
    }

    /// Apply a chosen candidate verbatim to its field, then refresh the
    /// sibling fields from the lookup endpoint.
    pub async fn select_suggestion(
        &mut self,
        state: &mut FormState,
        field: SuggestionField,
        candidate: &str,
    ) {
        state.set_field(field, candidate);
        self.refresh_details(state).await;
    }

    /// Blur handler for either identity field.
    pub async fn identity_blur(&mut self, state: &mut FormState) {
        self.refresh_details(state).await;
    }

    async fn refresh_details(&mut self, state: &mut FormState) {
        let husband = state.husband_name.trim().to_string();
        let wife = state.wife_name.trim().to_string();
        if husband.is_empty() && wife.is_empty() {
            return;
        }

        match self.api.person_details(&husband, &wife).await {
            Ok(Some(person)) => apply_person(state, &person),
            Ok(None) => {}
            Err(err) => warn!(code = err.code(), "person details fetch failed: {err}"),
        }
    }

    /// Run the submission flow. `on_outcome` fires as soon as the outcome
    /// is known, before the post-success reset delay, so a binding can
    /// show its feedback immediately.
    pub async fn submit<F>(&mut self, state: &mut FormState, on_outcome: F) -> SubmissionOutcome
    where
        F: FnOnce(&SubmissionOutcome),
    {
        self.phase = SubmitPhase::Submitting;
        let fields = state.submission_fields();
        let attachment = state.attachment.clone();

        let outcome = match self.api.submit(&fields, attachment).await {
            Ok(ack) if ack.success => SubmissionOutcome::Success {
                message: ack.message,
            },
            Ok(ack) => SubmissionOutcome::Failure {
                message: ack
                    .message
                    .unwrap_or_else(|| UNKNOWN_SERVER_ERROR.to_string()),
            },
            Err(AppError::Http { status, body }) => {
                warn!(status, "submit rejected by server");
                SubmissionOutcome::Failure {
                    message: error_detail(&body)
                        .unwrap_or_else(|| GENERIC_SUBMIT_ERROR.to_string()),
                }
            }
            Err(err) => {
                warn!(code = err.code(), "submit failed: {err}");
                SubmissionOutcome::Failure {
                    message: GENERIC_SUBMIT_ERROR.to_string(),
                }
            }
        };

        match &outcome {
            SubmissionOutcome::Success { .. } => {
                self.phase = SubmitPhase::Succeeded;
                on_outcome(&outcome);
                tokio::time::sleep(self.reset_delay).await;
                state.reset();
                self.phase = SubmitPhase::Idle;
            }
            SubmissionOutcome::Failure { .. } => {
                // Keep the field values so the user can correct and retry.
                self.phase = SubmitPhase::Failed;
                on_outcome(&outcome);
            }
        }

        outcome
    }
}

fn apply_person(state: &mut FormState, person: &PersonDetails) {
    state.husband_name = person.husband_name.clone();
    state.wife_name = person.wife_name.clone();
    state.phone_number = person.phone_number.clone();

    if let Some(raw) = &person.marriage_date {
        let normalized = normalize_date_input(raw);
        // Empty means the upstream value was unparseable; leave the
        // field as it was rather than blanking it.
        if !normalized.is_empty() {
            state.marriage_date = normalized;
        }
    }
}
