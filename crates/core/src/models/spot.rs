//! Tent spot model

use serde::{Deserialize, Serialize};

/// Tent footprint size of a spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotSize {
    Small,
    Medium,
    Large,
}

impl SpotSize {
    pub fn label(&self) -> &'static str {
        match self {
            SpotSize::Small => "Small (1-2 people)",
            SpotSize::Medium => "Medium (3-4 people)",
            SpotSize::Large => "Large (5-8 people)",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            SpotSize::Small => "Small",
            SpotSize::Medium => "Medium",
            SpotSize::Large => "Large",
        }
    }
}

/// Availability status of a spot.
///
/// This is authoritative mock state; a real deployment would get it from
/// a server and have to deal with it going stale between selection and
/// confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotStatus {
    Available,
    Occupied,
    Maintenance,
}

impl SpotStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SpotStatus::Available => "Available",
            SpotStatus::Occupied => "Occupied",
            SpotStatus::Maintenance => "Under maintenance",
        }
    }
}

/// Map placement as percentage coordinates, 0-100 on both axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

/// An individual tent placement within a zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spot {
    pub id: String,
    pub zone_id: String,
    pub name: String,
    pub size: SpotSize,
    pub status: SpotStatus,
    pub location: MapPoint,
}

impl Spot {
    pub fn is_available(&self) -> bool {
        self.status == SpotStatus::Available
    }
}
