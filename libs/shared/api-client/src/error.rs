use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Service unreachable: {0}")]
    Unreachable(String),

    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// True when no HTTP response was obtained at all (connect, DNS, timeout, broken body stream).
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Unreachable(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Unreachable(err.to_string())
        }
    }
}
