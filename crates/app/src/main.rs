//! Pinecamp - campsite reservation client
//!
//! A desktop client for browsing camping zones, picking a spot on the
//! zone map, choosing stay dates, and walking a booking through the
//! (simulated) submission and payment steps.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod platform;
mod state;
mod submission;
mod viewmodel;

slint::include_modules!();

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Pinecamp");
    platform::log_platform_info();

    // Tokio runtime drives the simulated backend calls
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let _guard = runtime.enter();

    // Catalog fixtures are the only startup input
    let app_state = match state::AppState::new() {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };

    let main_window = MainWindow::new().unwrap();

    viewmodel::setup_bindings(&main_window, app_state);

    main_window.run().unwrap();
}
