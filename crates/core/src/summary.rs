//! Reservation summary projection
//!
//! Pure view of (zone, optional spot, date range) for the summary card.
//! Carries the "selection complete" flag the confirm button keys off.

use crate::flow::Missing;
use crate::models::{DateRange, Spot, Zone};
use crate::pricing::Quote;

/// Chosen spot line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotLine {
    pub name: String,
    pub size_label: &'static str,
}

/// Chosen stay line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StayLine {
    pub span: String,
    pub nights: u32,
}

/// Everything the summary card renders
#[derive(Debug, Clone)]
pub struct SummaryView {
    pub zone_name: String,
    pub zone_description: String,
    pub spot: Option<SpotLine>,
    pub stay: Option<StayLine>,
    pub price_per_night: u32,
    pub total: u64,
    missing: Option<Missing>,
}

impl SummaryView {
    pub fn project(zone: &Zone, spot: Option<&Spot>, range: &DateRange) -> Self {
        let quote = Quote::for_stay(range, zone.price_per_night);

        let stay = range.is_complete().then(|| StayLine {
            span: range.span_label(),
            nights: quote.nights,
        });

        let missing = if spot.is_none() {
            Some(Missing::Spot)
        } else if !range.is_complete() {
            Some(Missing::Dates)
        } else {
            None
        };

        Self {
            zone_name: zone.name.clone(),
            zone_description: zone.description.clone(),
            spot: spot.map(|s| SpotLine {
                name: s.name.clone(),
                size_label: s.size.label(),
            }),
            stay,
            price_per_night: quote.price_per_night,
            total: quote.total,
            missing,
        }
    }

    /// True iff a spot is chosen and both date endpoints are set
    pub fn is_complete(&self) -> bool {
        self.missing.is_none()
    }

    pub fn missing(&self) -> Option<Missing> {
        self.missing
    }

    /// Message shown in place of the confirm action while incomplete,
    /// naming the specific missing piece rather than a generic error
    pub fn notice(&self) -> Option<String> {
        self.missing.map(|m| format!("Please choose {m}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MapPoint, SpotSize, SpotStatus};
    use chrono::NaiveDate;

    fn zone() -> Zone {
        Zone {
            id: "starfield".to_string(),
            name: "Starfield".to_string(),
            description: "Open hilltop pitches".to_string(),
            capacity: 15,
            image: String::new(),
            amenities: vec![],
            price_per_night: 350,
        }
    }

    fn spot() -> Spot {
        Spot {
            id: "starfield-2".to_string(),
            zone_id: "starfield".to_string(),
            name: "2".to_string(),
            size: SpotSize::Medium,
            status: SpotStatus::Available,
            location: MapPoint { x: 30.0, y: 30.0 },
        }
    }

    fn range() -> DateRange {
        DateRange::between(
            NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
            NaiveDate::from_ymd_opt(2026, 4, 13).unwrap(),
        )
    }

    #[test]
    fn complete_iff_spot_and_both_dates() {
        let zone = zone();
        let spot = spot();
        let full = range();
        let partial = DateRange::new(full.from, None);
        let empty = DateRange::default();

        assert!(SummaryView::project(&zone, Some(&spot), &full).is_complete());
        assert!(!SummaryView::project(&zone, None, &full).is_complete());
        assert!(!SummaryView::project(&zone, Some(&spot), &partial).is_complete());
        assert!(!SummaryView::project(&zone, Some(&spot), &empty).is_complete());
        assert!(!SummaryView::project(&zone, None, &empty).is_complete());
    }

    #[test]
    fn missing_spot_takes_precedence() {
        let view = SummaryView::project(&zone(), None, &DateRange::default());
        assert!(matches!(view.missing(), Some(Missing::Spot)));
        assert_eq!(view.notice().unwrap(), "Please choose a camping spot");
    }

    #[test]
    fn missing_dates_named() {
        let view = SummaryView::project(&zone(), Some(&spot()), &DateRange::default());
        assert!(matches!(view.missing(), Some(Missing::Dates)));
        assert_eq!(view.notice().unwrap(), "Please choose your stay dates");
    }

    #[test]
    fn prices_flow_through() {
        let view = SummaryView::project(&zone(), Some(&spot()), &range());
        assert_eq!(view.price_per_night, 350);
        assert_eq!(view.stay.as_ref().unwrap().nights, 3);
        assert_eq!(view.total, 1050);
        assert!(view.notice().is_none());
    }
}
