//! Booking flow state machine
//!
//! Tracks one booking attempt from browsing a zone through submission.
//! Spot and date selection are independent and commutative; the flow
//! state is derived from what has been picked, plus the explicit
//! submission transitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{DateRange, Spot, Zone};

/// What still has to be picked before confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Spot,
    Dates,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::Spot => write!(f, "a camping spot"),
            Missing::Dates => write!(f, "your stay dates"),
        }
    }
}

/// Flow states in selection order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Nothing committed yet
    Browsing,
    /// One of spot/dates chosen
    PartiallySelected,
    /// Both chosen, confirmation enabled
    ReadyToConfirm,
    /// Confirmation triggered, awaiting the (simulated) backend
    Submitting,
    /// Terminal for this flow instance
    Submitted,
}

/// Structured navigation payload handed from the selection screen to the
/// booking form. The single contract between flow stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub zone_id: String,
    pub spot_id: String,
    pub range: DateRange,
}

/// One booking attempt against a zone
#[derive(Debug, Clone)]
pub struct BookingFlow {
    zone: Zone,
    spot_id: Option<String>,
    range: DateRange,
    state: FlowState,
}

impl BookingFlow {
    pub fn new(zone: Zone) -> Self {
        Self {
            zone,
            spot_id: None,
            range: DateRange::default(),
            state: FlowState::Browsing,
        }
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn selected_spot_id(&self) -> Option<&str> {
        self.spot_id.as_deref()
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Pick a spot. Keeps previously chosen dates. Rejected while a
    /// submission is in flight and for spots that are not available or
    /// belong to another zone.
    pub fn select_spot(&mut self, spot: &Spot) -> Result<()> {
        self.ensure_mutable()?;

        if spot.zone_id != self.zone.id {
            return Err(Error::InvalidOperation(format!(
                "Spot {} does not belong to zone {}",
                spot.id, self.zone.id
            )));
        }
        if !spot.is_available() {
            return Err(Error::InvalidOperation(format!(
                "Spot {} is not available",
                spot.id
            )));
        }

        self.spot_id = Some(spot.id.clone());
        self.recompute();
        Ok(())
    }

    /// Set the stay range. Keeps a previously chosen spot. Partial
    /// ranges are accepted; they just keep the flow short of ready.
    pub fn set_range(&mut self, range: DateRange) -> Result<()> {
        self.ensure_mutable()?;
        self.range = range;
        self.recompute();
        Ok(())
    }

    /// The piece still missing before confirmation, spot first
    pub fn missing(&self) -> Option<Missing> {
        if self.spot_id.is_none() {
            Some(Missing::Spot)
        } else if !self.range.is_complete() {
            Some(Missing::Dates)
        } else {
            None
        }
    }

    /// Produce the navigation draft. Only valid from `ReadyToConfirm`;
    /// anything incomplete is rejected naming the missing input, which
    /// leaves the flow untouched.
    pub fn confirm(&self) -> Result<BookingDraft> {
        match self.state {
            FlowState::ReadyToConfirm => Ok(BookingDraft {
                zone_id: self.zone.id.clone(),
                spot_id: self.spot_id.clone().unwrap_or_default(),
                range: self.range,
            }),
            FlowState::Submitting | FlowState::Submitted => Err(Error::InvalidOperation(
                "A submission is already in progress".to_string(),
            )),
            _ => Err(Error::MissingSelection(
                self.missing().unwrap_or(Missing::Spot),
            )),
        }
    }

    /// Enter `Submitting`. The UI disables its controls for the
    /// duration, so a double confirm cannot race the backend.
    pub fn begin_submission(&mut self) -> Result<()> {
        if self.state != FlowState::ReadyToConfirm {
            return Err(Error::InvalidOperation(format!(
                "Cannot submit from {:?}",
                self.state
            )));
        }
        self.state = FlowState::Submitting;
        tracing::debug!(zone = %self.zone.id, "Booking submission started");
        Ok(())
    }

    pub fn complete_submission(&mut self) -> Result<()> {
        if self.state != FlowState::Submitting {
            return Err(Error::InvalidOperation(format!(
                "Cannot complete submission from {:?}",
                self.state
            )));
        }
        self.state = FlowState::Submitted;
        tracing::debug!(zone = %self.zone.id, "Booking submission completed");
        Ok(())
    }

    /// Submission failed or was canceled: selection survives, the flow
    /// drops back to ready so the guest can retry.
    pub fn fail_submission(&mut self) -> Result<()> {
        if self.state != FlowState::Submitting {
            return Err(Error::InvalidOperation(format!(
                "No submission in flight from {:?}",
                self.state
            )));
        }
        self.state = FlowState::ReadyToConfirm;
        Ok(())
    }

    /// Back to browsing with no memory of the prior selection
    pub fn reset(&mut self) {
        self.spot_id = None;
        self.range = DateRange::default();
        self.state = FlowState::Browsing;
    }

    fn ensure_mutable(&self) -> Result<()> {
        match self.state {
            FlowState::Submitting | FlowState::Submitted => Err(Error::InvalidOperation(
                "Selection is locked during submission".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn recompute(&mut self) {
        self.state = match (self.spot_id.is_some(), self.range.is_complete()) {
            (true, true) => FlowState::ReadyToConfirm,
            (false, false) => FlowState::Browsing,
            _ => FlowState::PartiallySelected,
        };
    }
}
