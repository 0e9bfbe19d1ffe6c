use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const WEEKDAYS: [&str; 7] = [
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

pub const PLACEHOLDER_PATIENT_IMAGE: &str = "https://via.placeholder.com/60";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Currency-agnostic starting price.
    pub price_start: f64,
    pub duration_minutes: u32,
    pub icon: String,
}

impl Service {
    pub fn price_label(&self) -> String {
        if self.price_start.fract() == 0.0 {
            format!("from {:.0}", self.price_start)
        } else {
            format!("from {:.2}", self.price_start)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub title: String,
    pub institution: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub name: String,
    pub title: String,
    pub specialty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_specialty: Option<String>,
    pub bio: String,
    pub years_experience: u32,
    pub patients_served: u32,
    pub success_rate: f64, // percentage, 0-100
    pub image_url: String,
    pub credentials: Vec<Credential>,
    pub languages: Vec<String>,
}

impl DoctorProfile {
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub patient_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_image: Option<String>,
    pub rating: u8,
    pub comment: String,
    /// Free-form display date, kept as the service sent it.
    pub date: String,
    pub treatment: String,
}

impl Testimonial {
    pub fn image_or_placeholder(&self) -> &str {
        self.patient_image
            .as_deref()
            .unwrap_or(PLACEHOLDER_PATIENT_IMAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicInfo {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    /// Weekday name (lowercase) to opening hours.
    pub hours: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

impl ClinicInfo {
    /// Opening hours Monday through Sunday, skipping days the clinic did not publish.
    pub fn hours_in_week_order(&self) -> Vec<(&'static str, &str)> {
        WEEKDAYS
            .iter()
            .filter_map(|day| self.hours.get(*day).map(|hours| (*day, hours.as_str())))
            .collect()
    }
}
