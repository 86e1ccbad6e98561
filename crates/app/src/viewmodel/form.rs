//! Booking form bindings and the simulated submission

use std::sync::Arc;

use pinecamp_core::{invariants, GuestDetails, Quote};
use slint::ComponentHandle;

use crate::state::{AppState, PaymentContext, Screen};
use crate::submission::{self, MockGateway, SubmissionOutcome};
use crate::viewmodel::{bookings, payment};
use crate::MainWindow;

pub fn setup_form_bindings(window: &MainWindow, state: Arc<AppState>) {
    let state_submit = state.clone();
    let window_weak = window.as_weak();
    window.on_submit_booking(move || {
        let Some(window) = window_weak.upgrade() else {
            return;
        };

        let guest = GuestDetails {
            full_name: window.get_guest_name().to_string(),
            email: window.get_guest_email().to_string(),
            phone: window.get_guest_phone().to_string(),
            party_size: window.get_guest_party().trim().parse().unwrap_or(0),
            notes: window.get_guest_notes().to_string(),
        };
        if let Err(e) = guest.validate() {
            window.set_notice(e.to_string().into());
            return;
        }

        let Some(draft) = state_submit.draft.lock().unwrap().clone() else {
            window.set_notice("No booking selection to submit".into());
            return;
        };
        let total = match state_submit.catalog.zone(&draft.zone_id) {
            Ok(zone) => Quote::for_stay(&draft.range, zone.price_per_night).total,
            Err(e) => {
                window.set_notice(e.to_string().into());
                return;
            }
        };

        {
            let mut flow_guard = state_submit.flow.lock().unwrap();
            let Some(flow) = flow_guard.as_mut() else {
                return;
            };
            if let Err(e) = flow.begin_submission() {
                window.set_notice(e.to_string().into());
                return;
            }
        }
        window.set_submitting(true);
        window.set_notice("".into());

        let state_done = state_submit.clone();
        let window_weak_done = window_weak.clone();
        let handle = submission::spawn_submission(
            MockGateway::default(),
            draft,
            guest,
            total,
            move |outcome| {
                let _ = window_weak_done.upgrade_in_event_loop(move |window| {
                    finish_submission(&window, &state_done, outcome);
                });
            },
        );
        *state_submit.task.lock().unwrap() = Some(handle);
    });

    // Giving up on the wait is allowed; the task reports Canceled
    let state_cancel = state.clone();
    window.on_cancel_submission(move || {
        if let Some(task) = state_cancel.task.lock().unwrap().as_mut() {
            task.cancel();
        }
    });

    let window_weak = window.as_weak();
    window.on_copy_reference(move || {
        let Some(window) = window_weak.upgrade() else {
            return;
        };
        let reference = window.get_booking_reference().to_string();
        match arboard::Clipboard::new().and_then(|mut c| c.set_text(reference.clone())) {
            Ok(()) => window.set_notice(format!("Copied {reference}").into()),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {e}");
                window.set_notice("Clipboard unavailable".into());
            }
        }
    });

    let state_pay = state;
    let window_weak = window.as_weak();
    window.on_proceed_to_payment(move || {
        let Some(window) = window_weak.upgrade() else {
            return;
        };
        let Some(context) = state_pay.payment.lock().unwrap().clone() else {
            return;
        };
        window.set_payment(payment::payment_data(&context));
        window.set_slip_path("".into());
        state_pay.set_screen(Screen::Payment);
        window.set_active_screen(Screen::Payment.tag().into());
    });
}

fn finish_submission(window: &MainWindow, state: &Arc<AppState>, outcome: SubmissionOutcome) {
    *state.task.lock().unwrap() = None;
    window.set_submitting(false);

    match outcome {
        SubmissionOutcome::Completed(reservation) => {
            invariants::assert_reservation_invariants(&reservation);
            if let Some(flow) = state.flow.lock().unwrap().as_mut() {
                if let Err(e) = flow.complete_submission() {
                    tracing::warn!("Flow out of step after submission: {e}");
                }
            }

            let spot_name = state
                .catalog
                .spot(&reservation.spot_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|_| reservation.spot_id.clone());
            *state.payment.lock().unwrap() = Some(PaymentContext {
                reference: reservation.reference.clone(),
                spot_name,
                amount: reservation.total_price,
                slip: None,
            });

            match reservation.receipt_json() {
                Ok(receipt) => tracing::debug!(%receipt, "Booking submitted"),
                Err(e) => tracing::warn!("Could not serialize receipt: {e}"),
            }
            window.set_booking_reference(reservation.reference.clone().into());
            window.set_booking_done(true);
            state.add_reservation(reservation);
            bookings::refresh_bookings(window, state);
        }
        SubmissionOutcome::Failed(message) => {
            if let Some(flow) = state.flow.lock().unwrap().as_mut() {
                let _ = flow.fail_submission();
            }
            window.set_notice(format!("Submission failed: {message}").into());
        }
        SubmissionOutcome::Canceled => {
            if let Some(flow) = state.flow.lock().unwrap().as_mut() {
                let _ = flow.fail_submission();
            }
            window.set_notice("Submission canceled".into());
        }
    }
}
