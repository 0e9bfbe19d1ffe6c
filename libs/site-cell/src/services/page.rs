use std::collections::BTreeMap;

use tokio::sync::watch;
use tracing::{debug, info, instrument};

use booking_cell::{
    BookingDesk, BookingError, BookingField, BookingForm, FieldError, StatusMessage,
    SubmissionOutcome, SubmissionState,
};
use content_cell::{fallback, ContentService, ResourceKind};
use shared_config::AppConfig;
use shared_models::{ClinicInfo, DoctorProfile, Service, Testimonial};
use shared_utils::Slot;
use testimonial_cell::{stars, Carousel};

use crate::models::{ContentOrigin, LoadReport, PageSnapshot};

/// Page-level state: one slot per content section, the booking desk and the
/// testimonial carousel.
///
/// Each content fetch writes only its own slot, so completions may land in
/// any order.
pub struct PageController {
    content: ContentService,
    desk: BookingDesk,
    profile: Slot<Option<DoctorProfile>>,
    services: Slot<Vec<Service>>,
    testimonials: Slot<Vec<Testimonial>>,
    clinic: Slot<Option<ClinicInfo>>,
    carousel: Slot<Carousel>,
}

impl PageController {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_parts(ContentService::new(config), BookingDesk::new(config))
    }

    pub fn with_parts(content: ContentService, desk: BookingDesk) -> Self {
        Self {
            content,
            desk,
            profile: Slot::default(),
            services: Slot::default(),
            testimonials: Slot::default(),
            clinic: Slot::default(),
            carousel: Slot::default(),
        }
    }

    /// Loads all four sections concurrently, substituting fallback data per section.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> LoadReport {
        let (profile, services, testimonials, clinic) = tokio::join!(
            self.load_profile(),
            self.load_services(),
            self.load_testimonials(),
            self.load_clinic(),
        );

        let report = LoadReport {
            profile,
            services,
            testimonials,
            clinic,
        };
        info!(
            fallback = ?report.fallback_resources(),
            "Page content initialized"
        );
        report
    }

    async fn load_profile(&self) -> ContentOrigin {
        let outcome = self.content.try_fetch_profile().await;
        let origin = ContentOrigin::from(outcome.is_live());
        self.profile
            .set(Some(outcome.or_fallback(ResourceKind::Profile, fallback::profile)));
        origin
    }

    async fn load_services(&self) -> ContentOrigin {
        let outcome = self.content.try_fetch_services().await;
        let origin = ContentOrigin::from(outcome.is_live());
        let services = outcome.or_fallback(ResourceKind::Services, fallback::services);

        self.desk.on_services_loaded(&services).await;
        self.services.set(services);
        origin
    }

    async fn load_testimonials(&self) -> ContentOrigin {
        let outcome = self.content.try_fetch_testimonials().await;
        let origin = ContentOrigin::from(outcome.is_live());
        let testimonials = outcome.or_fallback(ResourceKind::Testimonials, fallback::testimonials);

        let len = testimonials.len();
        self.testimonials.set(testimonials);
        self.carousel.modify(|carousel| {
            carousel.resize(len);
            true
        });
        origin
    }

    async fn load_clinic(&self) -> ContentOrigin {
        let outcome = self.content.try_fetch_clinic_info().await;
        let origin = ContentOrigin::from(outcome.is_live());
        self.clinic
            .set(Some(outcome.or_fallback(ResourceKind::Clinic, fallback::clinic)));
        origin
    }

    pub fn profile(&self) -> Option<DoctorProfile> {
        self.profile.get()
    }

    pub fn services(&self) -> Vec<Service> {
        self.services.get()
    }

    pub fn testimonials(&self) -> Vec<Testimonial> {
        self.testimonials.get()
    }

    pub fn clinic(&self) -> Option<ClinicInfo> {
        self.clinic.get()
    }

    pub fn subscribe_services(&self) -> watch::Receiver<Vec<Service>> {
        self.services.subscribe()
    }

    pub fn subscribe_testimonials(&self) -> watch::Receiver<Vec<Testimonial>> {
        self.testimonials.subscribe()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            profile: self.profile(),
            services: self.services(),
            testimonials: self.testimonials(),
            clinic: self.clinic(),
            testimonial_index: self.carousel.with(Carousel::index),
            booking_status: self.desk.status_message(),
        }
    }

    // Booking

    pub async fn update_field(&self, field: BookingField, value: impl Into<String>) {
        self.desk.update_field(field, value).await;
    }

    pub async fn touch_field(&self, field: BookingField) {
        self.desk.touch(field).await;
    }

    pub async fn booking_form(&self) -> BookingForm {
        self.desk.form().await
    }

    pub async fn visible_errors(&self) -> BTreeMap<BookingField, FieldError> {
        self.desk.visible_errors(&self.services()).await
    }

    pub async fn can_submit(&self) -> bool {
        self.desk.can_submit(&self.services()).await
    }

    /// Submits the booking form against the services currently on the page.
    pub async fn submit_booking(&self) -> Result<SubmissionOutcome, BookingError> {
        let services = self.services();
        self.desk.submit(&services).await
    }

    pub fn booking_state(&self) -> SubmissionState {
        self.desk.state()
    }

    pub fn booking_status(&self) -> Option<StatusMessage> {
        self.desk.status_message()
    }

    pub fn subscribe_booking(&self) -> watch::Receiver<SubmissionState> {
        self.desk.subscribe()
    }

    // Testimonials

    pub fn next_testimonial(&self) -> Option<usize> {
        self.step_carousel(Carousel::next)
    }

    pub fn prev_testimonial(&self) -> Option<usize> {
        self.step_carousel(Carousel::prev)
    }

    pub fn jump_to_testimonial(&self, index: usize) -> bool {
        self.carousel.modify(|carousel| carousel.jump(index))
    }

    pub fn testimonial_index(&self) -> Option<usize> {
        self.carousel.with(Carousel::index)
    }

    pub fn current_testimonial(&self) -> Option<Testimonial> {
        let carousel = self.carousel.get();
        self.testimonials
            .with(|testimonials| carousel.current(testimonials).cloned())
    }

    pub fn current_stars(&self) -> Option<Vec<char>> {
        self.current_testimonial()
            .map(|testimonial| stars(testimonial.rating))
    }

    fn step_carousel(&self, step: fn(&mut Carousel) -> Option<usize>) -> Option<usize> {
        let mut index = None;
        self.carousel.modify(|carousel| {
            let before = carousel.index();
            index = step(carousel);
            index != before
        });
        debug!(?index, "Testimonial carousel moved");
        index
    }
}
