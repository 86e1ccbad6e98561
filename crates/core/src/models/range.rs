//! Stay date range

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A check-in/check-out pair bounding a reservation.
///
/// Either endpoint may be unset while the guest is still picking; a
/// partial range is a valid intermediate state and completeness policy
/// belongs to the consumer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Range with both endpoints set
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// True iff both endpoints are set
    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub fn clear(&mut self) {
        self.from = None;
        self.to = None;
    }

    /// Human-readable span, e.g. "12 Mar 2026 - 14 Mar 2026".
    /// Empty when either endpoint is unset.
    pub fn span_label(&self) -> String {
        match (self.from, self.to) {
            (Some(from), Some(to)) => format!(
                "{} - {}",
                from.format("%d %b %Y"),
                to.format("%d %b %Y")
            ),
            _ => String::new(),
        }
    }
}
