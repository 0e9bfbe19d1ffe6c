//! Built-in page content shown when the clinic service cannot be reached.
//!
//! Every value here satisfies the same shape and invariants as live data:
//! collections are non-empty, ratings are within 1..=5, the success rate is a
//! percentage and every weekday has published hours.

use std::collections::HashMap;

use shared_models::{ClinicInfo, Credential, DoctorProfile, Service, Testimonial};

pub fn profile() -> DoctorProfile {
    DoctorProfile {
        name: "Dr. Sarah Mitchell".to_string(),
        title: "MD, FACC, FAHA".to_string(),
        specialty: "Interventional Cardiology".to_string(),
        sub_specialty: Some("Preventive Heart Care".to_string()),
        bio: "Dr. Sarah Mitchell is a board-certified cardiologist with over 15 years of experience \
              in interventional cardiology and preventive heart care. A former Chief Resident at Johns \
              Hopkins Hospital, she combines cutting-edge medical expertise with a compassionate, \
              patient-centered approach."
            .to_string(),
        years_experience: 15,
        patients_served: 12000,
        success_rate: 98.7,
        image_url: "https://images.unsplash.com/photo-1559839734-2b71ea860485?auto=format&fit=crop&q=80&w=1000"
            .to_string(),
        credentials: vec![
            credential("MD - Doctor of Medicine", "Harvard Medical School", 2008),
            credential("Fellowship - Cardiology", "Cleveland Clinic", 2014),
            credential("Board Certified", "American Board of Internal Medicine", 2014),
        ],
        languages: vec![
            "English".to_string(),
            "Spanish".to_string(),
            "French".to_string(),
        ],
    }
}

pub fn services() -> Vec<Service> {
    vec![
        service(
            "srv_consult",
            "Cardiac Consultation",
            "Comprehensive heart health assessment including medical history review, physical \
             examination, and personalized treatment planning.",
            150.0,
            45,
            "heart-pulse",
        ),
        service(
            "srv_echo",
            "Echocardiogram",
            "Non-invasive ultrasound imaging to visualize heart structure, valves, and blood flow in real-time.",
            300.0,
            60,
            "activity",
        ),
        service(
            "srv_stress",
            "Stress Testing",
            "Evaluate heart function under controlled physical stress to detect coronary artery disease.",
            250.0,
            90,
            "trending-up",
        ),
        service(
            "srv_holter",
            "Holter Monitoring",
            "24-72 hour continuous heart rhythm recording to detect arrhythmias.",
            200.0,
            30,
            "monitor",
        ),
        service(
            "srv_ekg",
            "EKG / ECG",
            "Quick, painless electrical recording of heart activity to screen for heart conditions.",
            75.0,
            15,
            "zap",
        ),
        service(
            "srv_prevention",
            "Preventive Cardiology",
            "Personalized risk assessment and lifestyle modification program for heart disease prevention.",
            200.0,
            60,
            "shield",
        ),
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "test_1",
            "Michael R.",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=200",
            "Dr. Mitchell saved my life. After years of ignoring warning signs, she caught a serious \
             blockage during a routine checkup. Her thorough approach and genuine care made all the difference.",
            "2025-12-15",
            "Cardiac Consultation",
        ),
        testimonial(
            "test_2",
            "Jennifer K.",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80&w=200",
            "The most professional and caring medical experience I've ever had. Dr. Mitchell took the \
             time to explain everything and answer all my questions. Highly recommend!",
            "2025-11-28",
            "Echocardiogram",
        ),
        testimonial(
            "test_3",
            "Robert T.",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=200",
            "After my heart attack, Dr. Mitchell created a comprehensive recovery plan. One year later, \
             I'm healthier than I've been in decades. Forever grateful.",
            "2025-10-10",
            "Preventive Cardiology",
        ),
        testimonial(
            "test_4",
            "Patricia M.",
            "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&q=80&w=200",
            "The stress test was quick and painless. The staff was incredibly supportive, and \
             Dr. Mitchell personally reviewed my results the same day.",
            "2025-09-22",
            "Stress Testing",
        ),
    ]
}

pub fn clinic() -> ClinicInfo {
    let weekday = "8:00 AM - 6:00 PM";

    ClinicInfo {
        name: "EliteMed Heart & Vascular Center".to_string(),
        address: "1250 Medical Center Drive, Suite 400".to_string(),
        city: "Beverly Hills".to_string(),
        state: "California".to_string(),
        zip_code: "90210".to_string(),
        phone: "(310) 555-0199".to_string(),
        email: "appointments@elitemedclinic.com".to_string(),
        hours: HashMap::from([
            ("monday".to_string(), weekday.to_string()),
            ("tuesday".to_string(), weekday.to_string()),
            ("wednesday".to_string(), weekday.to_string()),
            ("thursday".to_string(), weekday.to_string()),
            ("friday".to_string(), "8:00 AM - 5:00 PM".to_string()),
            ("saturday".to_string(), "9:00 AM - 1:00 PM".to_string()),
            ("sunday".to_string(), "Closed".to_string()),
        ]),
        map_url: Some("https://maps.google.com/?q=Beverly+Hills+Medical+Center".to_string()),
    }
}

fn credential(title: &str, institution: &str, year: i32) -> Credential {
    Credential {
        title: title.to_string(),
        institution: institution.to_string(),
        year,
    }
}

fn service(
    id: &str,
    title: &str,
    description: &str,
    price_start: f64,
    duration_minutes: u32,
    icon: &str,
) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        price_start,
        duration_minutes,
        icon: icon.to_string(),
    }
}

fn testimonial(
    id: &str,
    patient_name: &str,
    patient_image: &str,
    comment: &str,
    date: &str,
    treatment: &str,
) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        patient_name: patient_name.to_string(),
        patient_image: Some(patient_image.to_string()),
        rating: 5,
        comment: comment.to_string(),
        date: date.to_string(),
        treatment: treatment.to_string(),
    }
}
