//! Reservation record and lifecycle

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DateRange, GuestDetails};
use crate::error::{Error, Result};

/// Lifecycle status of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Submitted, awaiting payment
    Pending,
    /// Payment evidence received
    Confirmed,
    Canceled,
    /// Stay finished
    Completed,
}

impl ReservationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Awaiting payment",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Canceled => "Canceled",
            ReservationStatus::Completed => "Completed",
        }
    }
}

/// The booking record combining zone, spot, date range, guest, and price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    /// Short human-facing booking reference
    pub reference: String,
    pub zone_id: String,
    pub spot_id: String,
    pub range: DateRange,
    pub guest: GuestDetails,
    pub total_price: u64,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(
        zone_id: String,
        spot_id: String,
        range: DateRange,
        guest: GuestDetails,
        total_price: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            reference: generate_reference(),
            zone_id,
            spot_id,
            range,
            guest,
            total_price,
            status: ReservationStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Mark paid. Only a pending reservation can be confirmed.
    pub fn confirm(&mut self) -> Result<()> {
        match self.status {
            ReservationStatus::Pending => {
                self.status = ReservationStatus::Confirmed;
                tracing::info!(reference = %self.reference, "Reservation confirmed");
                Ok(())
            }
            other => Err(Error::InvalidOperation(format!(
                "Cannot confirm a {} reservation",
                other.label()
            ))),
        }
    }

    /// Cancel before the stay. Terminal states cannot be canceled.
    pub fn cancel(&mut self) -> Result<()> {
        match self.status {
            ReservationStatus::Pending | ReservationStatus::Confirmed => {
                self.status = ReservationStatus::Canceled;
                tracing::info!(reference = %self.reference, "Reservation canceled");
                Ok(())
            }
            other => Err(Error::InvalidOperation(format!(
                "Cannot cancel a {} reservation",
                other.label()
            ))),
        }
    }

    /// Mark the stay finished
    pub fn complete(&mut self) -> Result<()> {
        match self.status {
            ReservationStatus::Confirmed => {
                self.status = ReservationStatus::Completed;
                Ok(())
            }
            other => Err(Error::InvalidOperation(format!(
                "Cannot complete a {} reservation",
                other.label()
            ))),
        }
    }

    /// JSON receipt for export (clipboard copy on the payment screen)
    pub fn receipt_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Random 8-character uppercase alphanumeric booking reference
fn generate_reference() -> String {
    rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(8)
        .map(char::from)
        .collect::<String>()
        .to_uppercase()
}
