use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use thiserror::Error;

use shared_models::{BookingRequest, BookingResponse, Service};

pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingField {
    PatientName,
    Email,
    Phone,
    ServiceId,
    PreferredDate,
    PreferredTime,
    Notes,
}

impl BookingField {
    pub const ALL: [BookingField; 7] = [
        BookingField::PatientName,
        BookingField::Email,
        BookingField::Phone,
        BookingField::ServiceId,
        BookingField::PreferredDate,
        BookingField::PreferredTime,
        BookingField::Notes,
    ];

    /// Wire name, matching the `BookingRequest` JSON keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::PatientName => "patient_name",
            BookingField::Email => "email",
            BookingField::Phone => "phone",
            BookingField::ServiceId => "service_id",
            BookingField::PreferredDate => "preferred_date",
            BookingField::PreferredTime => "preferred_time",
            BookingField::Notes => "notes",
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Must be at least {min} characters")]
    TooShort { min: usize },

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please choose one of the available services")]
    UnknownService,
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFormFields {
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub service_id: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub notes: String,
}

impl BookingFormFields {
    pub fn value(&self, field: BookingField) -> &str {
        match field {
            BookingField::PatientName => &self.patient_name,
            BookingField::Email => &self.email,
            BookingField::Phone => &self.phone,
            BookingField::ServiceId => &self.service_id,
            BookingField::PreferredDate => &self.preferred_date,
            BookingField::PreferredTime => &self.preferred_time,
            BookingField::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: BookingField, value: String) {
        let slot = match field {
            BookingField::PatientName => &mut self.patient_name,
            BookingField::Email => &mut self.email,
            BookingField::Phone => &mut self.phone,
            BookingField::ServiceId => &mut self.service_id,
            BookingField::PreferredDate => &mut self.preferred_date,
            BookingField::PreferredTime => &mut self.preferred_time,
            BookingField::Notes => &mut self.notes,
        };
        *slot = value;
    }

    pub fn to_request(&self) -> BookingRequest {
        BookingRequest {
            patient_name: self.patient_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            service_id: self.service_id.clone(),
            preferred_date: self.preferred_date.clone(),
            preferred_time: non_empty(&self.preferred_time),
            notes: non_empty(&self.notes),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<BookingField, FieldError>,
}

impl ValidationReport {
    pub fn new(errors: BTreeMap<BookingField, FieldError>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: BookingField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn errors(&self) -> &BTreeMap<BookingField, FieldError> {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Form input plus the set of fields whose errors may be shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    fields: BookingFormFields,
    touched: BTreeSet<BookingField>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &BookingFormFields {
        &self.fields
    }

    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.touched.insert(field);
    }

    pub fn touch(&mut self, field: BookingField) {
        self.touched.insert(field);
    }

    pub fn mark_all_touched(&mut self) {
        self.touched.extend(BookingField::ALL);
    }

    pub fn is_touched(&self, field: BookingField) -> bool {
        self.touched.contains(&field)
    }

    /// The error to display for `field`: only once the field has been touched.
    pub fn visible_error<'a>(
        &self,
        field: BookingField,
        report: &'a ValidationReport,
    ) -> Option<&'a FieldError> {
        if self.is_touched(field) {
            report.error(field)
        } else {
            None
        }
    }

    /// Pre-selects the first service unless a service was already chosen.
    pub fn prefill_service(&mut self, services: &[Service]) -> bool {
        match services.first() {
            Some(first) if self.fields.service_id.is_empty() => {
                self.fields.service_id = first.id.clone();
                true
            }
            _ => false,
        }
    }

    /// Back to the default state: empty, untouched, first service pre-selected.
    pub fn reset(&mut self, services: &[Service]) {
        self.fields = BookingFormFields::default();
        self.touched.clear();
        self.prefill_service(services);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub response: BookingResponse,
    /// Synthesized locally because the booking service was unreachable.
    pub demo: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Confirmed(BookingConfirmation),
    Rejected { reason: String },
}

impl SubmissionOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, SubmissionOutcome::Confirmed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(BookingConfirmation),
    Failed(String),
}

impl SubmissionState {
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded(_) => "succeeded",
            SubmissionState::Failed(_) => "failed",
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn can_transition_to(&self, target: &SubmissionState) -> bool {
        use SubmissionState::*;
        match (self, target) {
            (Idle | Succeeded(_) | Failed(_), Submitting) => true,
            (Submitting, Succeeded(_) | Failed(_)) => true,
            (Succeeded(_), Idle) => true,
            _ => false,
        }
    }

    pub fn status_message(&self) -> Option<StatusMessage> {
        match self {
            SubmissionState::Succeeded(confirmation) => Some(StatusMessage {
                kind: StatusKind::Success,
                text: format!(
                    "✅ {} Reference: {}",
                    confirmation.response.message, confirmation.response.booking_reference
                ),
            }),
            SubmissionState::Failed(message) => Some(StatusMessage {
                kind: StatusKind::Error,
                text: format!("❌ {}", message),
            }),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }
}
