use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use content_cell::{fallback, ContentService, FetchOutcome};
use shared_models::{ClinicInfo, DoctorProfile, Service, Testimonial};
use shared_utils::test_utils::{MockClinicResponses, TestConfig};

fn service_for(server: &MockServer) -> ContentService {
    let config = TestConfig::with_base_url(format!("{}/api", server.uri())).to_app_config();
    ContentService::new(&config)
}

async fn mount_json(server: &MockServer, route: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api{}", route)))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_live_profile_is_returned_as_is() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/profile", 200, MockClinicResponses::profile_response()).await;

    let profile = service_for(&mock_server).fetch_profile().await;

    let expected: DoctorProfile =
        serde_json::from_value(MockClinicResponses::profile_response()).unwrap();
    assert_eq!(profile, expected);
    assert_ne!(profile, fallback::profile());
}

#[tokio::test]
async fn test_live_collections_replace_fallback() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/services", 200, MockClinicResponses::services_response()).await;
    mount_json(&mock_server, "/testimonials", 200, MockClinicResponses::testimonials_response()).await;

    let content = service_for(&mock_server);
    let services = content.fetch_services().await;
    let testimonials = content.fetch_testimonials().await;

    let expected_services: Vec<Service> =
        serde_json::from_value(MockClinicResponses::services_response()).unwrap();
    let expected_testimonials: Vec<Testimonial> =
        serde_json::from_value(MockClinicResponses::testimonials_response()).unwrap();
    assert_eq!(services, expected_services);
    assert_eq!(testimonials, expected_testimonials);
    assert_eq!(testimonials[1].patient_image, None);
}

#[tokio::test]
async fn test_non_iso_testimonial_date_stays_live() {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/testimonials",
        200,
        json!([{
            "id": "t1",
            "patient_name": "Chị Hoa P.",
            "rating": 5,
            "comment": "Rất tận tâm.",
            "date": "15/12/2025",
            "treatment": "Tâm Lý Trị Liệu"
        }]),
    )
    .await;

    let content = service_for(&mock_server);
    let outcome = content.try_fetch_testimonials().await;

    assert_matches!(outcome, FetchOutcome::Live(testimonials) => {
        assert_eq!(testimonials.len(), 1);
        assert_eq!(testimonials[0].id, "t1");
        assert_eq!(testimonials[0].date, "15/12/2025");
    });
}

#[tokio::test]
async fn test_live_clinic_info() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/clinic", 200, MockClinicResponses::clinic_response()).await;

    let outcome = service_for(&mock_server).try_fetch_clinic_info().await;

    let expected: ClinicInfo =
        serde_json::from_value(MockClinicResponses::clinic_response()).unwrap();
    assert_eq!(outcome, FetchOutcome::Live(expected));
}

#[tokio::test]
async fn test_server_errors_fall_back_for_every_resource() {
    let mock_server = MockServer::start().await;
    for route in ["/profile", "/services", "/testimonials", "/clinic"] {
        mount_json(&mock_server, route, 500, MockClinicResponses::error_response("boom")).await;
    }

    let content = service_for(&mock_server);

    assert_eq!(content.fetch_profile().await, fallback::profile());
    assert_eq!(content.fetch_services().await, fallback::services());
    assert_eq!(content.fetch_testimonials().await, fallback::testimonials());
    assert_eq!(content.fetch_clinic_info().await, fallback::clinic());
}

#[tokio::test]
async fn test_not_found_is_unavailable() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/profile", 404, MockClinicResponses::error_response("missing")).await;

    let outcome = service_for(&mock_server).try_fetch_profile().await;

    assert_matches!(outcome, FetchOutcome::Unavailable(reason) if reason.contains("404"));
}

#[tokio::test]
async fn test_malformed_body_falls_back() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/services", 200, json!({ "services": "not a list" })).await;
    mount_json(
        &mock_server,
        "/testimonials",
        200,
        json!([{ "id": "t", "patient_name": "X", "rating": "five" }]),
    )
    .await;

    let content = service_for(&mock_server);

    assert_eq!(content.fetch_services().await, fallback::services());
    assert_eq!(content.fetch_testimonials().await, fallback::testimonials());
}

#[tokio::test]
async fn test_unreachable_service_loads_full_fallback_site() {
    let content = ContentService::new(&TestConfig::unreachable().to_app_config());

    let site = content.load_all().await;

    assert_eq!(site.profile, fallback::profile());
    assert_eq!(site.services, fallback::services());
    assert_eq!(site.testimonials, fallback::testimonials());
    assert_eq!(site.clinic, fallback::clinic());
    assert_eq!(
        site.service_by_id("srv_echo").map(|service| service.title.as_str()),
        Some("Echocardiogram")
    );
}

#[tokio::test]
async fn test_one_failing_resource_does_not_affect_the_others() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/profile", 200, MockClinicResponses::profile_response()).await;
    mount_json(&mock_server, "/services", 503, MockClinicResponses::error_response("down")).await;
    mount_json(&mock_server, "/testimonials", 200, MockClinicResponses::testimonials_response()).await;
    mount_json(&mock_server, "/clinic", 200, MockClinicResponses::clinic_response()).await;

    let site = service_for(&mock_server).load_all().await;

    assert_eq!(site.services, fallback::services());
    assert_eq!(site.profile.name, "BS. Lê Quang Vy");
    assert_eq!(site.testimonials.len(), 2);
    assert_eq!(site.clinic.zip_code, "700000");
}
