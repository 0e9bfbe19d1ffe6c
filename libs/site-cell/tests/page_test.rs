use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use assert_matches::assert_matches;
use async_trait::async_trait;

use booking_cell::{
    BookingDesk, BookingField, BookingGateway, BookingSubmitter, FieldError, StatusKind,
    SubmissionOutcome,
};
use content_cell::{fallback, ContentService, ContentSource, ResourceKind};
use shared_api_client::ApiError;
use shared_models::{BookingRequest, BookingResponse, ClinicInfo, DoctorProfile, Service, Testimonial};
use shared_utils::test_utils::MockClinicResponses;
use shared_utils::FixedClock;
use site_cell::{ContentOrigin, PageController};

/// Serves the mock clinic bodies for the `live` kinds and fails the rest,
/// each after its own delay.
struct StubSource {
    live: HashSet<ResourceKind>,
    delays_ms: [u64; 4],
    completed: Mutex<Vec<ResourceKind>>,
}

impl StubSource {
    fn new(live: &[ResourceKind]) -> Self {
        Self {
            live: live.iter().copied().collect(),
            delays_ms: [0; 4],
            completed: Mutex::new(Vec::new()),
        }
    }

    fn with_delays(mut self, delays_ms: [u64; 4]) -> Self {
        self.delays_ms = delays_ms;
        self
    }

    async fn respond<T>(&self, kind: ResourceKind, body: serde_json::Value) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let slot = ResourceKind::ALL.iter().position(|k| *k == kind).unwrap();
        tokio::time::sleep(Duration::from_millis(self.delays_ms[slot])).await;
        self.completed.lock().unwrap().push(kind);

        if self.live.contains(&kind) {
            Ok(serde_json::from_value(body).unwrap())
        } else {
            Err(ApiError::Unreachable("connection refused".to_string()))
        }
    }
}

#[async_trait]
impl ContentSource for StubSource {
    async fn get_profile(&self) -> Result<DoctorProfile, ApiError> {
        self.respond(ResourceKind::Profile, MockClinicResponses::profile_response())
            .await
    }

    async fn get_services(&self) -> Result<Vec<Service>, ApiError> {
        self.respond(ResourceKind::Services, MockClinicResponses::services_response())
            .await
    }

    async fn get_testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        self.respond(ResourceKind::Testimonials, MockClinicResponses::testimonials_response())
            .await
    }

    async fn get_clinic_info(&self) -> Result<ClinicInfo, ApiError> {
        self.respond(ResourceKind::Clinic, MockClinicResponses::clinic_response())
            .await
    }
}

struct OfflineGateway;

#[async_trait]
impl BookingGateway for OfflineGateway {
    async fn submit_booking(&self, _request: &BookingRequest) -> Result<BookingResponse, ApiError> {
        Err(ApiError::Unreachable("connection refused".to_string()))
    }
}

fn controller_with(source: Arc<StubSource>) -> PageController {
    let submitter = BookingSubmitter::with_gateway(
        Arc::new(OfflineGateway),
        Arc::new(FixedClock::at_millis(1_767_225_604_321)),
    );
    PageController::with_parts(
        ContentService::with_source(source),
        BookingDesk::with_submitter(submitter, Duration::from_secs(8)),
    )
}

#[tokio::test]
async fn test_offline_page_uses_fallback_everywhere() {
    let page = controller_with(Arc::new(StubSource::new(&[])));

    let report = page.initialize().await;

    assert_eq!(report.fallback_resources(), ResourceKind::ALL.to_vec());
    assert_eq!(page.profile(), Some(fallback::profile()));
    assert_eq!(page.services(), fallback::services());
    assert_eq!(page.clinic(), Some(fallback::clinic()));
    assert_eq!(page.testimonial_index(), Some(0));
    assert_eq!(page.current_stars(), Some(vec!['★'; 5]));
    assert_eq!(page.booking_form().await.fields().service_id, "srv_consult");
}

#[tokio::test(start_paused = true)]
async fn test_sections_fill_independently_in_any_order() {
    let source = Arc::new(
        StubSource::new(&[ResourceKind::Profile, ResourceKind::Testimonials])
            .with_delays([400, 300, 200, 100]),
    );
    let page = controller_with(Arc::clone(&source));

    let report = page.initialize().await;

    assert_eq!(
        *source.completed.lock().unwrap(),
        vec![
            ResourceKind::Clinic,
            ResourceKind::Testimonials,
            ResourceKind::Services,
            ResourceKind::Profile,
        ]
    );
    assert_eq!(report.profile, ContentOrigin::Live);
    assert_eq!(report.services, ContentOrigin::Fallback);
    assert_eq!(report.testimonials, ContentOrigin::Live);
    assert_eq!(report.clinic, ContentOrigin::Fallback);

    let snapshot = page.snapshot();
    assert!(snapshot.is_loaded());
    assert_eq!(snapshot.profile.unwrap().name, "BS. Lê Quang Vy");
    assert_eq!(snapshot.services, fallback::services());
    assert_eq!(snapshot.testimonials.len(), 2);
    assert_eq!(snapshot.clinic, Some(fallback::clinic()));
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_each_section_as_it_lands() {
    let source = Arc::new(
        StubSource::new(&[ResourceKind::Services]).with_delays([0, 100, 300, 0]),
    );
    let page = Arc::new(controller_with(source));
    let mut services = page.subscribe_services();
    let mut testimonials = page.subscribe_testimonials();
    assert!(services.borrow().is_empty());

    let loading = tokio::spawn({
        let page = Arc::clone(&page);
        async move { page.initialize().await }
    });

    services.changed().await.unwrap();
    let live_ids: Vec<String> = services
        .borrow_and_update()
        .iter()
        .map(|service| service.id.clone())
        .collect();
    assert_eq!(live_ids, ["srv_consult", "srv_sleep"]);
    assert!(testimonials.borrow().is_empty());

    testimonials.changed().await.unwrap();
    assert_eq!(*testimonials.borrow_and_update(), fallback::testimonials());

    let report = loading.await.unwrap();
    assert_eq!(report.services, ContentOrigin::Live);
    assert_eq!(report.testimonials, ContentOrigin::Fallback);
    assert!(!services.has_changed().unwrap());
}

#[tokio::test]
async fn test_carousel_navigation_over_loaded_testimonials() {
    let page = controller_with(Arc::new(StubSource::new(&[ResourceKind::Testimonials])));
    assert_eq!(page.current_testimonial(), None);

    page.initialize().await;

    assert_eq!(page.current_testimonial().unwrap().id, "test_1");
    assert_eq!(page.next_testimonial(), Some(1));
    assert_eq!(page.current_stars(), Some(vec!['★'; 4]));
    assert_eq!(page.next_testimonial(), Some(0));
    assert_eq!(page.prev_testimonial(), Some(1));

    assert!(page.jump_to_testimonial(0));
    assert!(!page.jump_to_testimonial(2));
    assert_eq!(page.current_testimonial().unwrap().patient_name, "Chị Minh T.");
}

#[tokio::test]
async fn test_booking_validates_against_loaded_services() {
    let page = controller_with(Arc::new(StubSource::new(&[ResourceKind::Services])));
    page.initialize().await;

    page.update_field(BookingField::PatientName, "Lan").await;
    page.update_field(BookingField::Email, "lan@example.com").await;
    page.update_field(BookingField::Phone, "0901234567").await;
    page.update_field(BookingField::PreferredDate, "2026-11-02").await;
    assert!(page.can_submit().await);

    // Only present in the fallback list, not in the live one.
    page.update_field(BookingField::ServiceId, "srv_echo").await;
    assert_eq!(
        page.visible_errors().await.get(&BookingField::ServiceId),
        Some(&FieldError::UnknownService)
    );
    assert!(!page.can_submit().await);

    page.update_field(BookingField::ServiceId, "srv_sleep").await;
    let outcome = page.submit_booking().await.unwrap();

    assert_matches!(outcome, SubmissionOutcome::Confirmed(confirmation) => {
        assert!(confirmation.demo);
        assert_eq!(confirmation.response.booking_reference, "BK-DEMO-4321");
    });
    let status = page.booking_status().unwrap();
    assert_eq!(status.kind, StatusKind::Success);
    assert_eq!(page.snapshot().booking_status, Some(status));
    assert_eq!(page.booking_form().await.fields().service_id, "srv_consult");
}
