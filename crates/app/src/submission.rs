//! Simulated booking backend
//!
//! The submission delay stands in for a network call, but it runs as a
//! real async task with a cancellation signal and an error channel. The
//! gateway trait is the seam where an API client would slot in later;
//! tests drive the failure path through it.

use std::future::Future;
use std::time::Duration;

use pinecamp_core::{BookingDraft, GuestDetails, Reservation, Result};
use tokio::sync::oneshot;

/// Delay standing in for the booking API round trip
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// Delay standing in for slip verification
pub const VERIFY_DELAY: Duration = Duration::from_secs(2);

/// Backend seam for booking submission and payment verification
pub trait BookingGateway: Send + 'static {
    fn submit(
        &self,
        draft: BookingDraft,
        guest: GuestDetails,
        total: u64,
    ) -> impl Future<Output = Result<Reservation>> + Send;

    fn verify_payment(&self, reference: String) -> impl Future<Output = Result<()>> + Send;
}

/// Stand-in backend: waits a fixed delay, then accepts
pub struct MockGateway {
    pub delay: Duration,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self {
            delay: SUBMIT_DELAY,
        }
    }
}

impl BookingGateway for MockGateway {
    async fn submit(
        &self,
        draft: BookingDraft,
        guest: GuestDetails,
        total: u64,
    ) -> Result<Reservation> {
        tokio::time::sleep(self.delay).await;
        let reservation = Reservation::new(draft.zone_id, draft.spot_id, draft.range, guest, total);
        tracing::info!(reference = %reservation.reference, "Mock backend accepted booking");
        Ok(reservation)
    }

    async fn verify_payment(&self, reference: String) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(%reference, "Mock backend verified payment");
        Ok(())
    }
}

/// Result of a submission task, reported back on the UI thread
#[derive(Debug)]
pub enum SubmissionOutcome {
    Completed(Reservation),
    Failed(String),
    Canceled,
}

/// Result of a verification task
#[derive(Debug)]
pub enum VerifyOutcome {
    Verified,
    Failed(String),
    Canceled,
}

/// Handle to an in-flight backend task. Dropping it detaches the task;
/// `cancel` abandons the call and reports `Canceled`.
pub struct TaskHandle {
    cancel: Option<oneshot::Sender<()>>,
}

impl TaskHandle {
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }
}

/// Drive a booking submission to completion or cancellation
pub fn spawn_submission<G, F>(
    gateway: G,
    draft: BookingDraft,
    guest: GuestDetails,
    total: u64,
    on_done: F,
) -> TaskHandle
where
    G: BookingGateway,
    F: FnOnce(SubmissionOutcome) + Send + 'static,
{
    let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let outcome = tokio::select! {
            result = gateway.submit(draft, guest, total) => match result {
                Ok(reservation) => SubmissionOutcome::Completed(reservation),
                Err(e) => SubmissionOutcome::Failed(e.to_string()),
            },
            _ = cancel_rx => {
                tracing::debug!("Booking submission canceled");
                SubmissionOutcome::Canceled
            }
        };
        on_done(outcome);
    });

    TaskHandle {
        cancel: Some(cancel_tx),
    }
}

/// Drive a payment verification to completion or cancellation
pub fn spawn_verification<G, F>(gateway: G, reference: String, on_done: F) -> TaskHandle
where
    G: BookingGateway,
    F: FnOnce(VerifyOutcome) + Send + 'static,
{
    let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let outcome = tokio::select! {
            result = gateway.verify_payment(reference) => match result {
                Ok(()) => VerifyOutcome::Verified,
                Err(e) => VerifyOutcome::Failed(e.to_string()),
            },
            _ = cancel_rx => {
                tracing::debug!("Payment verification canceled");
                VerifyOutcome::Canceled
            }
        };
        on_done(outcome);
    });

    TaskHandle {
        cancel: Some(cancel_tx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pinecamp_core::{DateRange, Error};

    struct FailingGateway;

    impl BookingGateway for FailingGateway {
        async fn submit(
            &self,
            _draft: BookingDraft,
            _guest: GuestDetails,
            _total: u64,
        ) -> Result<Reservation> {
            Err(Error::Submission("backend unavailable".to_string()))
        }

        async fn verify_payment(&self, _reference: String) -> Result<()> {
            Err(Error::Submission("backend unavailable".to_string()))
        }
    }

    fn draft() -> BookingDraft {
        BookingDraft {
            zone_id: "riverside".to_string(),
            spot_id: "riverside-1".to_string(),
            range: DateRange::between(
                NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
            ),
        }
    }

    #[tokio::test]
    async fn submission_completes() {
        let (tx, rx) = oneshot::channel();
        let gateway = MockGateway {
            delay: Duration::from_millis(5),
        };

        let _handle = spawn_submission(gateway, draft(), GuestDetails::default(), 600, move |o| {
            let _ = tx.send(o);
        });

        match rx.await.unwrap() {
            SubmissionOutcome::Completed(reservation) => {
                assert_eq!(reservation.total_price, 600);
                assert_eq!(reservation.zone_id, "riverside");
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn cancellation_wins_over_slow_backend() {
        let (tx, rx) = oneshot::channel();
        let gateway = MockGateway {
            delay: Duration::from_secs(60),
        };

        let mut handle =
            spawn_submission(gateway, draft(), GuestDetails::default(), 600, move |o| {
                let _ = tx.send(o);
            });
        handle.cancel();

        assert!(matches!(rx.await.unwrap(), SubmissionOutcome::Canceled));
    }

    #[tokio::test]
    async fn backend_failure_reaches_the_error_channel() {
        let (tx, rx) = oneshot::channel();

        let _handle = spawn_submission(
            FailingGateway,
            draft(),
            GuestDetails::default(),
            600,
            move |o| {
                let _ = tx.send(o);
            },
        );

        match rx.await.unwrap() {
            SubmissionOutcome::Failed(message) => assert!(message.contains("backend unavailable")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn verification_completes_and_fails() {
        let (tx, rx) = oneshot::channel();
        let gateway = MockGateway {
            delay: Duration::from_millis(5),
        };
        let _handle = spawn_verification(gateway, "ABCD1234".to_string(), move |o| {
            let _ = tx.send(o);
        });
        assert!(matches!(rx.await.unwrap(), VerifyOutcome::Verified));

        let (tx, rx) = oneshot::channel();
        let _handle = spawn_verification(FailingGateway, "ABCD1234".to_string(), move |o| {
            let _ = tx.send(o);
        });
        assert!(matches!(rx.await.unwrap(), VerifyOutcome::Failed(_)));
    }
}
