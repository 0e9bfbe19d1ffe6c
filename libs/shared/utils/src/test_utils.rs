use serde_json::{json, Value};

use shared_config::AppConfig;

/// Base URL that refuses connections; used to exercise the "service unreachable" paths.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1/api";

pub struct TestConfig {
    pub api_base_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    pub fn unreachable() -> Self {
        Self::with_base_url(UNREACHABLE_BASE_URL)
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig::new(self.api_base_url.clone())
    }
}

/// JSON bodies shaped like the live clinic service, distinct from the built-in fallback data.
pub struct MockClinicResponses;

impl MockClinicResponses {
    pub fn profile_response() -> Value {
        json!({
            "name": "BS. Lê Quang Vy",
            "title": "Tiến sĩ, Bác sĩ Chuyên khoa II",
            "specialty": "Tâm Thần Kinh",
            "sub_specialty": "Trị Liệu Tâm Lý & Rối Loạn Lo Âu",
            "bio": "Chuyên gia tâm thần kinh với hơn 15 năm kinh nghiệm.",
            "years_experience": 15,
            "patients_served": 10000,
            "success_rate": 96.5,
            "image_url": "https://images.example.com/doctor.jpg",
            "credentials": [
                { "title": "Tiến sĩ Y khoa", "institution": "Đại học Y Dược TP.HCM", "year": 2008 },
                { "title": "Chuyên khoa II - Tâm Thần", "institution": "Bệnh viện Tâm Thần TP.HCM", "year": 2014 }
            ],
            "languages": ["Tiếng Việt", "Tiếng Anh"]
        })
    }

    pub fn services_response() -> Value {
        json!([
            {
                "id": "srv_consult",
                "title": "Khám Tư Vấn Tâm Thần",
                "description": "Đánh giá toàn diện sức khỏe tâm thần.",
                "price_start": 500000,
                "duration_minutes": 60,
                "icon": "brain"
            },
            {
                "id": "srv_sleep",
                "title": "Điều Trị Rối Loạn Giấc Ngủ",
                "description": "Chẩn đoán và điều trị mất ngủ.",
                "price_start": 500000,
                "duration_minutes": 45,
                "icon": "moon"
            }
        ])
    }

    pub fn testimonials_response() -> Value {
        json!([
            {
                "id": "test_1",
                "patient_name": "Chị Minh T.",
                "patient_image": "https://images.example.com/minh.jpg",
                "rating": 5,
                "comment": "Bác sĩ kiên nhẫn lắng nghe.",
                "date": "2025-12-15",
                "treatment": "Điều Trị Trầm Cảm"
            },
            {
                "id": "test_9",
                "patient_name": "Anh Khoa N.",
                "rating": 4,
                "comment": "Dịch vụ tốt.",
                "date": "2025-07-05",
                "treatment": "Tâm Lý Trị Liệu"
            }
        ])
    }

    pub fn clinic_response() -> Value {
        json!({
            "name": "Phòng Khám Tâm Thần Kinh",
            "address": "145 Trần Quang Khải",
            "city": "Quận 1",
            "state": "TP. Hồ Chí Minh",
            "zip_code": "700000",
            "phone": "(028) 3844 5678",
            "email": "lienhe@phongkham.example",
            "hours": {
                "monday": "8:00 - 17:00",
                "saturday": "8:00 - 12:00",
                "sunday": "Nghỉ"
            },
            "map_url": "https://maps.example.com/?q=clinic"
        })
    }

    pub fn booking_response(reference: &str) -> Value {
        json!({
            "status": "success",
            "message": "Your booking request has been received.",
            "booking_reference": reference,
            "estimated_callback": "Within 2 business hours"
        })
    }

    pub fn error_response(detail: &str) -> Value {
        json!({ "detail": detail })
    }
}
