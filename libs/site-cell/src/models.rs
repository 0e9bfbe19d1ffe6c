use std::fmt;

use booking_cell::StatusMessage;
use content_cell::ResourceKind;
use shared_models::{ClinicInfo, DoctorProfile, Service, Testimonial};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOrigin {
    Live,
    Fallback,
}

impl fmt::Display for ContentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentOrigin::Live => f.write_str("live"),
            ContentOrigin::Fallback => f.write_str("fallback"),
        }
    }
}

impl From<bool> for ContentOrigin {
    fn from(live: bool) -> Self {
        if live {
            ContentOrigin::Live
        } else {
            ContentOrigin::Fallback
        }
    }
}

/// Where each section's content came from after page initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub profile: ContentOrigin,
    pub services: ContentOrigin,
    pub testimonials: ContentOrigin,
    pub clinic: ContentOrigin,
}

impl LoadReport {
    pub fn origin(&self, kind: ResourceKind) -> ContentOrigin {
        match kind {
            ResourceKind::Profile => self.profile,
            ResourceKind::Services => self.services,
            ResourceKind::Testimonials => self.testimonials,
            ResourceKind::Clinic => self.clinic,
        }
    }

    pub fn fallback_resources(&self) -> Vec<ResourceKind> {
        ResourceKind::ALL
            .into_iter()
            .filter(|kind| self.origin(*kind) == ContentOrigin::Fallback)
            .collect()
    }

    pub fn is_fully_live(&self) -> bool {
        self.fallback_resources().is_empty()
    }
}

/// Point-in-time copy of everything the page displays.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    pub profile: Option<DoctorProfile>,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub clinic: Option<ClinicInfo>,
    pub testimonial_index: Option<usize>,
    pub booking_status: Option<StatusMessage>,
}

impl PageSnapshot {
    pub fn is_loaded(&self) -> bool {
        self.profile.is_some() && self.clinic.is_some()
    }
}
