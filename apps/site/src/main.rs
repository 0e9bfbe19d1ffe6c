use anyhow::Context;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared_config::AppConfig;
use site_cell::PageController;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting clinic site");

    let config = AppConfig::from_env();
    info!(base_url = %config.api_base_url, "Using clinic service");

    let page = PageController::new(&config);
    let report = page.initialize().await;

    if !report.is_fully_live() {
        warn!(
            fallback = ?report.fallback_resources(),
            "Some sections are showing built-in content"
        );
    }

    let profile = page.profile().context("profile section was not populated")?;
    let clinic = page.clinic().context("clinic section was not populated")?;

    info!(
        doctor = %profile.display_name(),
        specialty = %profile.specialty,
        years = profile.years_experience,
        "Profile"
    );

    for service in page.services() {
        info!(
            id = %service.id,
            price = %service.price_label(),
            minutes = service.duration_minutes,
            "Service: {}",
            service.title
        );
    }

    if let (Some(testimonial), Some(stars)) = (page.current_testimonial(), page.current_stars()) {
        let rating: String = stars.into_iter().collect();
        info!(
            patient = %testimonial.patient_name,
            %rating,
            "Featured testimonial ({} total)",
            page.testimonials().len()
        );
    }

    info!(
        clinic = %clinic.name,
        city = %clinic.city,
        phone = %clinic.phone,
        "Clinic"
    );
    for (day, hours) in clinic.hours_in_week_order() {
        info!("  {}: {}", day, hours);
    }

    Ok(())
}
