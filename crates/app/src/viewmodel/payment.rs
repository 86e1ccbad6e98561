//! Payment screen bindings: slip attachment and simulated verification

use std::path::Path;
use std::sync::Arc;

use pinecamp_core::SlipFile;
use slint::ComponentHandle;

use crate::state::{AppState, PaymentContext, Screen};
use crate::submission::{self, MockGateway, VerifyOutcome, VERIFY_DELAY};
use crate::viewmodel::bookings;
use crate::{MainWindow, PaymentData};

pub(crate) fn payment_data(context: &PaymentContext) -> PaymentData {
    PaymentData {
        reference: context.reference.clone().into(),
        spot_name: context.spot_name.clone().into(),
        amount: context.amount as i32,
        slip_name: context
            .slip
            .as_ref()
            .map(|s| s.file_name.clone())
            .unwrap_or_default()
            .into(),
        has_slip: context.slip.is_some(),
    }
}

pub fn setup_payment_bindings(window: &MainWindow, state: Arc<AppState>) {
    let state_attach = state.clone();
    let window_weak = window.as_weak();
    window.on_attach_slip(move || {
        let Some(window) = window_weak.upgrade() else {
            return;
        };
        let path_text = window.get_slip_path().to_string();
        let path_text = path_text.trim();
        if path_text.is_empty() {
            window.set_notice("Enter the path to your transfer slip".into());
            return;
        }
        match SlipFile::load(Path::new(path_text)) {
            Ok(slip) => {
                let mut payment_guard = state_attach.payment.lock().unwrap();
                let Some(context) = payment_guard.as_mut() else {
                    return;
                };
                window.set_notice(format!("Attached {}", slip.file_name).into());
                context.slip = Some(slip);
                window.set_payment(payment_data(context));
            }
            Err(e) => {
                window.set_notice(e.to_string().into());
            }
        }
    });

    let state_submit = state;
    let window_weak = window.as_weak();
    window.on_submit_payment(move || {
        let Some(window) = window_weak.upgrade() else {
            return;
        };
        let Some(context) = state_submit.payment.lock().unwrap().clone() else {
            return;
        };
        if context.slip.is_none() {
            window.set_notice("Please attach your transfer slip first".into());
            return;
        }

        window.set_payment_processing(true);
        window.set_notice("".into());

        let state_done = state_submit.clone();
        let window_weak_done = window_weak.clone();
        let reference = context.reference.clone();
        let handle = submission::spawn_verification(
            MockGateway {
                delay: VERIFY_DELAY,
            },
            reference.clone(),
            move |outcome| {
                let _ = window_weak_done.upgrade_in_event_loop(move |window| {
                    finish_verification(&window, &state_done, &reference, outcome);
                });
            },
        );
        *state_submit.task.lock().unwrap() = Some(handle);
    });
}

fn finish_verification(
    window: &MainWindow,
    state: &Arc<AppState>,
    reference: &str,
    outcome: VerifyOutcome,
) {
    *state.task.lock().unwrap() = None;
    window.set_payment_processing(false);

    match outcome {
        VerifyOutcome::Verified => {
            if let Err(e) = state.confirm_reservation(reference) {
                tracing::warn!("Could not confirm reservation {reference}: {e}");
            }
            *state.payment.lock().unwrap() = None;
            window.set_slip_path("".into());
            window.set_notice("Payment received. See you at the campsite!".into());
            bookings::refresh_bookings(window, state);
            state.set_screen(Screen::Bookings);
            window.set_active_screen(Screen::Bookings.tag().into());
        }
        VerifyOutcome::Failed(message) => {
            window.set_notice(format!("Payment failed: {message}").into());
        }
        VerifyOutcome::Canceled => {
            window.set_notice("Payment verification canceled".into());
        }
    }
}
