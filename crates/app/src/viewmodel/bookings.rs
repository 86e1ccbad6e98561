//! Session bookings list bindings

use std::rc::Rc;
use std::sync::Arc;

use pinecamp_core::{Reservation, ReservationStatus};
use slint::{ComponentHandle, ModelRc, VecModel};

use crate::state::{AppState, PaymentContext, Screen};
use crate::viewmodel::payment;
use crate::{BookingItem, MainWindow};

pub fn setup_bookings_bindings(window: &MainWindow, state: Arc<AppState>) {
    let state_open = state.clone();
    let window_weak = window.as_weak();
    window.on_go_bookings(move || {
        let Some(window) = window_weak.upgrade() else {
            return;
        };
        refresh_bookings(&window, &state_open);
        state_open.set_screen(Screen::Bookings);
        window.set_active_screen(Screen::Bookings.tag().into());
    });

    // Pay later from the list rebuilds the payment context
    let state_pay = state;
    let window_weak = window.as_weak();
    window.on_open_payment(move |reference| {
        let Some(window) = window_weak.upgrade() else {
            return;
        };
        let reference = reference.to_string();
        let Some(reservation) = state_pay.find_reservation(&reference) else {
            window.set_notice(format!("Booking {reference} not found").into());
            return;
        };
        if reservation.status != ReservationStatus::Pending {
            window.set_notice(format!("Booking {reference} is already paid").into());
            return;
        }

        let spot_name = state_pay
            .catalog
            .spot(&reservation.spot_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|_| reservation.spot_id.clone());
        let context = PaymentContext {
            reference,
            spot_name,
            amount: reservation.total_price,
            slip: None,
        };
        window.set_payment(payment::payment_data(&context));
        window.set_slip_path("".into());
        *state_pay.payment.lock().unwrap() = Some(context);
        state_pay.set_screen(Screen::Payment);
        window.set_active_screen(Screen::Payment.tag().into());
    });
}

pub fn refresh_bookings(window: &MainWindow, state: &AppState) {
    let items: Vec<BookingItem> = state
        .reservations
        .lock()
        .unwrap()
        .iter()
        .map(|r| booking_item(r, state))
        .collect();
    window.set_bookings(ModelRc::from(Rc::new(VecModel::from(items))));
}

fn booking_item(reservation: &Reservation, state: &AppState) -> BookingItem {
    let zone_name = state
        .catalog
        .zone(&reservation.zone_id)
        .map(|z| z.name.clone())
        .unwrap_or_else(|_| reservation.zone_id.clone());
    let spot_name = state
        .catalog
        .spot(&reservation.spot_id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|_| reservation.spot_id.clone());

    BookingItem {
        reference: reservation.reference.clone().into(),
        zone_name: zone_name.into(),
        spot_name: spot_name.into(),
        date_span: reservation.range.span_label().into(),
        total: reservation.total_price as i32,
        status_label: reservation.status.label().into(),
        pending: reservation.status == ReservationStatus::Pending,
    }
}
