//! View model bindings for Slint UI

mod booking;
mod bookings;
mod form;
mod payment;
mod zones;

use std::sync::Arc;

use crate::state::AppState;
use crate::MainWindow;

pub fn setup_bindings(window: &MainWindow, state: Arc<AppState>) {
    zones::setup_zone_bindings(window, state.clone());
    booking::setup_booking_bindings(window, state.clone());
    form::setup_form_bindings(window, state.clone());
    payment::setup_payment_bindings(window, state.clone());
    bookings::setup_bookings_bindings(window, state);
}
