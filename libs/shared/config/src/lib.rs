use std::env;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_STATUS_CLEAR_DELAY: Duration = Duration::from_secs(8);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    /// How long a booking confirmation stays on screen before it is cleared.
    pub status_clear_delay: Duration,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url.into()),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            status_clear_delay: DEFAULT_STATUS_CLEAR_DELAY,
        }
    }

    pub fn from_env() -> Self {
        let api_base_url = env::var("CLINIC_API_BASE_URL")
            .unwrap_or_else(|_| {
                warn!("CLINIC_API_BASE_URL not set, using default");
                DEFAULT_API_BASE_URL.to_string()
            });

        let config = Self::new(api_base_url);

        if !config.is_configured() {
            warn!("Application not fully configured - empty API base URL");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
