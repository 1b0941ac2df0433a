use std::sync::Arc;

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

use appointment_cell::models::PatientAppointmentsQuery;
use appointment_cell::services::{
    AppointmentStore, Audience, DashboardView, DoctorDashboard, HttpAppointmentApi, ScheduleRange,
};
use doctor_cell::services::{HttpSlotApi, SlotBrowser};
use shared_api::ApiClient;
use shared_config::AppConfig;
use shared_models::{Session, SessionStore, UserType};
use shared_utils::today_local;

#[tokio::main]
async fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let session = Session::from_env();

    if !session.is_authenticated() {
        bail!("No session found. Set CLINIC_AUTH_TOKEN and CLINIC_USER_ID.");
    }

    let user_id = session.current_user_id().context("CLINIC_USER_ID is not set")?;
    let user_type = session.user_type().unwrap_or_else(|| {
        warn!("CLINIC_USER_TYPE not set, assuming patient");
        UserType::User
    });

    info!(
        "Signed in as {} against {}",
        session.name().unwrap_or_else(|| user_id.clone()),
        config.base_url()
    );

    let client = ApiClient::new(&config, Arc::new(session));
    let today = today_local();
    let mut store = AppointmentStore::new(Arc::new(HttpAppointmentApi::new(client.clone())));

    match user_type {
        UserType::User => {
            // A failed fetch is rendered as the error state of each section.
            let _ = store
                .fetch_patient_appointments(&user_id, PatientAppointmentsQuery::default())
                .await;

            let view = DashboardView::build(&store, today, Audience::Patient);
            render::print_dashboard(&view);
        }
        UserType::Doctor => {
            let dashboard = DoctorDashboard::load(&mut store, &user_id, ScheduleRange::Today, today).await;
            render::print_doctor_dashboard(&dashboard);

            let mut browser = SlotBrowser::new(
                Arc::new(HttpSlotApi::new(client)),
                &user_id,
                today,
                config.slot_browser_days,
            );
            if let Err(e) = browser.select_day(today).await {
                warn!("Could not load today's slots: {}", e);
            }
            render::print_slots(&browser);
        }
    }

    Ok(())
}
