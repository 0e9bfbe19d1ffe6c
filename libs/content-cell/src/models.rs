use std::fmt;

use tracing::warn;

use shared_api_client::ApiError;
use shared_models::{ClinicInfo, DoctorProfile, Service, Testimonial};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Profile,
    Services,
    Testimonials,
    Clinic,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Profile,
        ResourceKind::Services,
        ResourceKind::Testimonials,
        ResourceKind::Clinic,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Profile => "/profile",
            ResourceKind::Services => "/services",
            ResourceKind::Testimonials => "/testimonials",
            ResourceKind::Clinic => "/clinic",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Profile => "profile",
            ResourceKind::Services => "services",
            ResourceKind::Testimonials => "testimonials",
            ResourceKind::Clinic => "clinic",
        };
        f.write_str(name)
    }
}

/// Result of a single fetch attempt, before any fallback is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Live(T),
    Unavailable(String),
}

impl<T> FetchOutcome<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, FetchOutcome::Live(_))
    }

    pub fn live(self) -> Option<T> {
        match self {
            FetchOutcome::Live(data) => Some(data),
            FetchOutcome::Unavailable(_) => None,
        }
    }

    pub fn or_fallback<F>(self, kind: ResourceKind, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            FetchOutcome::Live(data) => data,
            FetchOutcome::Unavailable(reason) => {
                warn!(resource = %kind, %reason, "Backend unavailable, using fallback data");
                fallback()
            }
        }
    }
}

impl<T> From<Result<T, ApiError>> for FetchOutcome<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => FetchOutcome::Live(data),
            Err(err) => FetchOutcome::Unavailable(err.to_string()),
        }
    }
}

/// Everything the page renders, one value per resource kind.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub profile: DoctorProfile,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub clinic: ClinicInfo,
}

impl SiteContent {
    pub fn service_by_id(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }
}
