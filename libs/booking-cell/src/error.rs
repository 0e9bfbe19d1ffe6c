use thiserror::Error;

use crate::models::ValidationReport;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Booking form has {} invalid field(s)", .0.error_count())]
    InvalidForm(ValidationReport),

    #[error("A booking submission is already in flight")]
    AlreadySubmitting,

    #[error("Invalid submission state transition from {from} to {to}")]
    InvalidTransition { from: &'static str, to: &'static str },
}
