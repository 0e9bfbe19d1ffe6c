use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tracing::{debug, error, instrument};

use shared_config::AppConfig;
use shared_models::Service;
use shared_utils::Slot;

use crate::error::BookingError;
use crate::models::{
    BookingField, BookingForm, FieldError, StatusMessage, SubmissionOutcome, SubmissionState,
    ValidationReport, GENERIC_FAILURE_MESSAGE,
};
use crate::services::submitter::BookingSubmitter;
use crate::services::validation::FormValidator;

/// The booking form together with its submission state machine:
/// `Idle -> Submitting -> (Succeeded | Failed)`, with a confirmation
/// returning to `Idle` after `clear_delay`.
pub struct BookingDesk {
    validator: FormValidator,
    submitter: BookingSubmitter,
    form: Mutex<BookingForm>,
    state: Slot<SubmissionState>,
    generation: Arc<AtomicU64>,
    clear_delay: Duration,
}

impl BookingDesk {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_submitter(BookingSubmitter::new(config), config.status_clear_delay)
    }

    pub fn with_submitter(submitter: BookingSubmitter, clear_delay: Duration) -> Self {
        Self {
            validator: FormValidator::new(),
            submitter,
            form: Mutex::new(BookingForm::new()),
            state: Slot::new(SubmissionState::Idle),
            generation: Arc::new(AtomicU64::new(0)),
            clear_delay,
        }
    }

    pub async fn form(&self) -> BookingForm {
        self.form.lock().await.clone()
    }

    pub async fn update_field(&self, field: BookingField, value: impl Into<String>) {
        self.form.lock().await.set(field, value);
    }

    pub async fn touch(&self, field: BookingField) {
        self.form.lock().await.touch(field);
    }

    pub async fn validation(&self, services: &[Service]) -> ValidationReport {
        let form = self.form.lock().await;
        self.validator.validate(form.fields(), services)
    }

    /// Errors of touched fields only, which is what the form displays.
    pub async fn visible_errors(&self, services: &[Service]) -> BTreeMap<BookingField, FieldError> {
        let form = self.form.lock().await;
        let report = self.validator.validate(form.fields(), services);

        BookingField::ALL
            .into_iter()
            .filter_map(|field| {
                form.visible_error(field, &report)
                    .map(|error| (field, error.clone()))
            })
            .collect()
    }

    pub async fn can_submit(&self, services: &[Service]) -> bool {
        !self.state.with(SubmissionState::is_submitting) && self.validation(services).await.is_valid()
    }

    /// Applies the service pre-selection once a non-empty services list arrives.
    pub async fn on_services_loaded(&self, services: &[Service]) -> bool {
        let prefilled = self.form.lock().await.prefill_service(services);
        if prefilled {
            debug!("Pre-selected first service for booking form");
        }
        prefilled
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    pub fn status_message(&self) -> Option<StatusMessage> {
        self.state.with(SubmissionState::status_message)
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Validates and, if valid, submits the current form.
    ///
    /// An invalid form marks every field touched and never reaches the network.
    /// A confirmation resets the form; a rejection leaves it for correction.
    #[instrument(skip_all)]
    pub async fn submit(&self, services: &[Service]) -> Result<SubmissionOutcome, BookingError> {
        if self.state.with(SubmissionState::is_submitting) {
            return Err(BookingError::AlreadySubmitting);
        }

        let request = {
            let mut form = self.form.lock().await;
            let report = self.validator.validate(form.fields(), services);
            if !report.is_valid() {
                form.mark_all_touched();
                return Err(BookingError::InvalidForm(report));
            }

            self.transition(SubmissionState::Submitting)
                .map_err(|_| BookingError::AlreadySubmitting)?;

            form.fields().to_request()
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self.submitter.submit(&request).await;

        let next = match &outcome {
            SubmissionOutcome::Confirmed(confirmation) => {
                self.form.lock().await.reset(services);
                SubmissionState::Succeeded(confirmation.clone())
            }
            SubmissionOutcome::Rejected { .. } => {
                SubmissionState::Failed(GENERIC_FAILURE_MESSAGE.to_string())
            }
        };

        let confirmed = outcome.is_confirmed();
        if let Err(err) = self.transition(next) {
            error!(error = %err, "Booking state machine out of sync");
        } else if confirmed {
            self.schedule_clear(generation);
        }

        Ok(outcome)
    }

    fn transition(&self, target: SubmissionState) -> Result<(), BookingError> {
        let to = target.name();
        let mut from = None;

        let applied = self.state.modify(|state| {
            if state.can_transition_to(&target) {
                *state = target;
                true
            } else {
                from = Some(state.name());
                false
            }
        });

        match from {
            Some(from) if !applied => Err(BookingError::InvalidTransition { from, to }),
            _ => Ok(()),
        }
    }

    // Only clears the confirmation produced by submission `generation`; a newer
    // submission in the meantime keeps its own message.
    fn schedule_clear(&self, generation: u64) {
        let state = self.state.clone();
        let current = Arc::clone(&self.generation);
        let delay = self.clear_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let cleared = state.modify(|state| {
                let still_current = current.load(Ordering::SeqCst) == generation;
                if still_current && matches!(state, SubmissionState::Succeeded(_)) {
                    *state = SubmissionState::Idle;
                    true
                } else {
                    false
                }
            });

            if cleared {
                debug!("Booking confirmation cleared");
            }
        });
    }
}
