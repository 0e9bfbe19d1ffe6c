use async_trait::async_trait;

use shared_api_client::{ApiError, ClinicApiClient};
use shared_models::{BookingRequest, BookingResponse};

pub const BOOKING_PATH: &str = "/book";

#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn submit_booking(&self, request: &BookingRequest) -> Result<BookingResponse, ApiError>;
}

#[async_trait]
impl BookingGateway for ClinicApiClient {
    async fn submit_booking(&self, request: &BookingRequest) -> Result<BookingResponse, ApiError> {
        self.post(BOOKING_PATH, request).await
    }
}
