//! Camping zone model - the browsable unit of the campsite

use serde::{Deserialize, Serialize};

/// A named camping area containing multiple tent spots.
///
/// Zones are immutable reference data for the lifetime of a session;
/// they come out of the catalog fixtures and are never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Maximum number of guests the zone can host
    pub capacity: u32,
    /// Cover image reference (URL)
    pub image: String,
    pub amenities: Vec<String>,
    /// Nightly rate, whole currency units
    pub price_per_night: u32,
}

impl Zone {
    /// Short amenity line for card displays
    pub fn amenity_line(&self) -> String {
        self.amenities.join(" · ")
    }
}
