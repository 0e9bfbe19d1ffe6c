use async_trait::async_trait;

use shared_api_client::{ApiError, ClinicApiClient};
use shared_models::{ClinicInfo, DoctorProfile, Service, Testimonial};

use crate::models::ResourceKind;

/// Where page content comes from. One call per resource, no retries.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn get_profile(&self) -> Result<DoctorProfile, ApiError>;
    async fn get_services(&self) -> Result<Vec<Service>, ApiError>;
    async fn get_testimonials(&self) -> Result<Vec<Testimonial>, ApiError>;
    async fn get_clinic_info(&self) -> Result<ClinicInfo, ApiError>;
}

#[async_trait]
impl ContentSource for ClinicApiClient {
    async fn get_profile(&self) -> Result<DoctorProfile, ApiError> {
        self.get(ResourceKind::Profile.path()).await
    }

    async fn get_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get(ResourceKind::Services.path()).await
    }

    async fn get_testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        self.get(ResourceKind::Testimonials.path()).await
    }

    async fn get_clinic_info(&self) -> Result<ClinicInfo, ApiError> {
        self.get(ResourceKind::Clinic.path()).await
    }
}
