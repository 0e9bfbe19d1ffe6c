use std::time::Duration;

use reqwest::{
    header::{HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, RequestBuilder,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::error::ApiError;

/// Thin JSON client for the clinic content/booking service.
///
/// Every call is a single attempt; callers decide what a failure means.
#[derive(Debug, Clone)]
pub struct ClinicApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ClinicApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
            timeout: config.request_timeout,
        }
    }

    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("Making GET request to {}", url);

        let request = self
            .client
            .get(&url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        self.execute(request).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("Making POST request to {}", url);

        let payload = serde_json::to_vec(body)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let request = self
            .client
            .post(&url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(payload);

        self.execute(request).await
    }

    async fn execute<T>(&self, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = request.timeout(self.timeout).send().await?;

        let status = response.status();

        // The service answered; an unreadable error body must not look like an outage.
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("API error ({}): {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
