use serde::{Deserialize, Serialize};

/// Payload for `POST /book`. Built per submission attempt and dropped once it resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub service_id: String,
    pub preferred_date: String,
    pub preferred_time: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingResponse {
    pub status: String,
    pub message: String,
    pub booking_reference: String,
    pub estimated_callback: String,
}
