//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::flow::{BookingFlow, FlowState};
use crate::models::{Reservation, Spot, Zone};

/// Validate that a zone's reference data is internally consistent
pub fn assert_zone_invariants(zone: &Zone) {
    debug_assert!(
        !zone.name.trim().is_empty(),
        "Zone {} has empty name",
        zone.id
    );

    debug_assert!(zone.capacity > 0, "Zone {} has zero capacity", zone.id);

    // Upstream data always carries a positive nightly rate
    debug_assert!(
        zone.price_per_night > 0,
        "Zone {} has zero nightly price",
        zone.id
    );
}

/// Validate a spot's placement and ownership fields
pub fn assert_spot_invariants(spot: &Spot) {
    debug_assert!(
        !spot.zone_id.trim().is_empty(),
        "Spot {} has empty zone_id",
        spot.id
    );

    // Map placement is percentage coordinates
    debug_assert!(
        (0.0..=100.0).contains(&spot.location.x) && (0.0..=100.0).contains(&spot.location.y),
        "Spot {} placed off the map at ({}, {})",
        spot.id,
        spot.location.x,
        spot.location.y
    );
}

/// Validate cross-references in a loaded catalog
pub fn assert_catalog_invariants(zones: &[Zone], spots: &[Spot]) {
    for spot in spots {
        debug_assert!(
            zones.iter().any(|z| z.id == spot.zone_id),
            "Spot {} references unknown zone {}",
            spot.id,
            spot.zone_id
        );
    }

    for (i, zone) in zones.iter().enumerate() {
        debug_assert!(
            !zones[i + 1..].iter().any(|z| z.id == zone.id),
            "Duplicate zone id {}",
            zone.id
        );
    }

    for (i, spot) in spots.iter().enumerate() {
        debug_assert!(
            !spots[i + 1..].iter().any(|s| s.id == spot.id),
            "Duplicate spot id {}",
            spot.id
        );
    }
}

/// Validate that a flow's state matches what has been selected
pub fn assert_flow_invariants(flow: &BookingFlow) {
    match flow.state() {
        FlowState::ReadyToConfirm | FlowState::Submitting | FlowState::Submitted => {
            debug_assert!(
                flow.selected_spot_id().is_some() && flow.range().is_complete(),
                "Flow is {:?} without a full selection",
                flow.state()
            );
        }
        FlowState::Browsing => {
            debug_assert!(
                flow.selected_spot_id().is_none() && !flow.range().is_complete(),
                "Browsing flow carries a selection"
            );
        }
        FlowState::PartiallySelected => {}
    }
}

/// Validate a reservation record
pub fn assert_reservation_invariants(reservation: &Reservation) {
    debug_assert!(
        reservation.reference.len() == 8,
        "Reservation {} has malformed reference {:?}",
        reservation.id,
        reservation.reference
    );

    debug_assert!(
        reservation.range.is_complete(),
        "Reservation {} has an incomplete date range",
        reservation.id
    );
}
