use std::sync::Arc;

use tracing::{debug, instrument};

use shared_api_client::ClinicApiClient;
use shared_config::AppConfig;
use shared_models::{ClinicInfo, DoctorProfile, Service, Testimonial};

use crate::fallback;
use crate::models::{FetchOutcome, ResourceKind, SiteContent};
use crate::services::source::ContentSource;

/// Fetches page content and substitutes built-in data whenever the service cannot deliver.
///
/// The `fetch_*` methods never fail: any transport error, non-2xx status or
/// undecodable body yields the fallback value for that resource.
#[derive(Clone)]
pub struct ContentService {
    source: Arc<dyn ContentSource>,
}

impl ContentService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_source(Arc::new(ClinicApiClient::new(config)))
    }

    pub fn with_source(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    #[instrument(skip(self))]
    pub async fn try_fetch_profile(&self) -> FetchOutcome<DoctorProfile> {
        self.source.get_profile().await.into()
    }

    #[instrument(skip(self))]
    pub async fn try_fetch_services(&self) -> FetchOutcome<Vec<Service>> {
        self.source.get_services().await.into()
    }

    #[instrument(skip(self))]
    pub async fn try_fetch_testimonials(&self) -> FetchOutcome<Vec<Testimonial>> {
        self.source.get_testimonials().await.into()
    }

    #[instrument(skip(self))]
    pub async fn try_fetch_clinic_info(&self) -> FetchOutcome<ClinicInfo> {
        self.source.get_clinic_info().await.into()
    }

    pub async fn fetch_profile(&self) -> DoctorProfile {
        self.try_fetch_profile()
            .await
            .or_fallback(ResourceKind::Profile, fallback::profile)
    }

    pub async fn fetch_services(&self) -> Vec<Service> {
        self.try_fetch_services()
            .await
            .or_fallback(ResourceKind::Services, fallback::services)
    }

    pub async fn fetch_testimonials(&self) -> Vec<Testimonial> {
        self.try_fetch_testimonials()
            .await
            .or_fallback(ResourceKind::Testimonials, fallback::testimonials)
    }

    pub async fn fetch_clinic_info(&self) -> ClinicInfo {
        self.try_fetch_clinic_info()
            .await
            .or_fallback(ResourceKind::Clinic, fallback::clinic)
    }

    /// Issues all four fetches concurrently; each one falls back on its own.
    pub async fn load_all(&self) -> SiteContent {
        let (profile, services, testimonials, clinic) = tokio::join!(
            self.fetch_profile(),
            self.fetch_services(),
            self.fetch_testimonials(),
            self.fetch_clinic_info(),
        );

        debug!(
            services = services.len(),
            testimonials = testimonials.len(),
            "Site content loaded"
        );

        SiteContent {
            profile,
            services,
            testimonials,
            clinic,
        }
    }
}
