use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use shared_api_client::ClinicApiClient;
use shared_config::AppConfig;
use shared_models::{BookingRequest, BookingResponse};
use shared_utils::{Clock, SystemClock};

use crate::models::{BookingConfirmation, SubmissionOutcome};
use crate::services::gateway::BookingGateway;

pub const DEMO_REFERENCE_PREFIX: &str = "BK-DEMO-";
pub const DEMO_STATUS: &str = "success";
pub const DEMO_MESSAGE: &str = "Demo mode: Your request has been received!";
pub const DEMO_CALLBACK_WINDOW: &str = "Within 2 hours during business hours";

/// Acknowledgment used when the booking service cannot be reached at all.
///
/// The reference is the last four digits of the submission time in epoch milliseconds.
pub fn demo_response(at: DateTime<Utc>) -> BookingResponse {
    BookingResponse {
        status: DEMO_STATUS.to_string(),
        message: DEMO_MESSAGE.to_string(),
        booking_reference: format!(
            "{}{:04}",
            DEMO_REFERENCE_PREFIX,
            at.timestamp_millis().rem_euclid(10_000)
        ),
        estimated_callback: DEMO_CALLBACK_WINDOW.to_string(),
    }
}

/// Sends one booking request and normalizes whatever happens into a `SubmissionOutcome`.
///
/// An unreachable service is answered with a demo confirmation; a service that
/// responds with an error status (or an unreadable body) is a rejection.
#[derive(Clone)]
pub struct BookingSubmitter {
    gateway: Arc<dyn BookingGateway>,
    clock: Arc<dyn Clock>,
}

impl BookingSubmitter {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_gateway(
            Arc::new(ClinicApiClient::new(config)),
            Arc::new(SystemClock),
        )
    }

    pub fn with_gateway(gateway: Arc<dyn BookingGateway>, clock: Arc<dyn Clock>) -> Self {
        Self { gateway, clock }
    }

    #[instrument(skip_all, fields(service_id = %request.service_id))]
    pub async fn submit(&self, request: &BookingRequest) -> SubmissionOutcome {
        match self.gateway.submit_booking(request).await {
            Ok(response) => {
                info!(reference = %response.booking_reference, "Booking request accepted");
                SubmissionOutcome::Confirmed(BookingConfirmation {
                    response,
                    demo: false,
                })
            }
            Err(err) if err.is_unreachable() => {
                let response = demo_response(self.clock.now());
                warn!(
                    error = %err,
                    reference = %response.booking_reference,
                    "Backend unavailable, simulating booking"
                );
                SubmissionOutcome::Confirmed(BookingConfirmation {
                    response,
                    demo: true,
                })
            }
            Err(err) => {
                warn!(error = %err, "Booking request rejected");
                SubmissionOutcome::Rejected {
                    reason: err.to_string(),
                }
            }
        }
    }
}
