// =====================================================================================
// BOOKING FORM VALIDATION
// =====================================================================================

use std::collections::BTreeMap;

use regex::Regex;
use tracing::debug;

use shared_models::Service;

use crate::models::{BookingField, BookingFormFields, FieldError, ValidationReport};

pub const NAME_MIN_LENGTH: usize = 2;
pub const PHONE_MIN_LENGTH: usize = 10;
pub const EMAIL_MAX_LENGTH: usize = 254;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

pub struct FormValidator {
    email_regex: Regex,
}

impl FormValidator {
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"),
        }
    }

    /// Evaluates every field rule; the form is valid only when no field fails.
    pub fn validate(&self, fields: &BookingFormFields, services: &[Service]) -> ValidationReport {
        let checks = [
            (BookingField::PatientName, check_min_length(&fields.patient_name, NAME_MIN_LENGTH)),
            (BookingField::Email, self.check_email(&fields.email)),
            (BookingField::Phone, check_min_length(&fields.phone, PHONE_MIN_LENGTH)),
            (BookingField::ServiceId, check_service(&fields.service_id, services)),
            (BookingField::PreferredDate, check_required(&fields.preferred_date)),
        ];

        let errors: BTreeMap<_, _> = checks
            .into_iter()
            .filter_map(|(field, error)| error.map(|error| (field, error)))
            .collect();

        if !errors.is_empty() {
            debug!("Booking form has {} invalid field(s)", errors.len());
        }

        ValidationReport::new(errors)
    }

    pub fn validate_email(&self, email: &str) -> bool {
        self.email_regex.is_match(email) && email.len() <= EMAIL_MAX_LENGTH
    }

    fn check_email(&self, email: &str) -> Option<FieldError> {
        check_required(email).or_else(|| {
            if self.validate_email(email) {
                None
            } else {
                Some(FieldError::InvalidEmail)
            }
        })
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_required(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::Required)
    } else {
        None
    }
}

// Lengths are counted in characters of the raw input, with no normalization.
fn check_min_length(value: &str, min: usize) -> Option<FieldError> {
    check_required(value).or_else(|| {
        if value.chars().count() < min {
            Some(FieldError::TooShort { min })
        } else {
            None
        }
    })
}

fn check_service(service_id: &str, services: &[Service]) -> Option<FieldError> {
    check_required(service_id).or_else(|| {
        if services.iter().any(|service| service.id == service_id) {
            None
        } else {
            Some(FieldError::UnknownService)
        }
    })
}
