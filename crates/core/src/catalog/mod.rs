//! Campsite catalog
//!
//! In-memory zone/spot reference data parsed from an embedded TOML
//! fixture. The catalog is closed: unknown ids are `NotFound`, and
//! nothing mutates it after load.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::invariants;
use crate::models::{MapPoint, Spot, SpotSize, SpotStatus, Zone};

const FIXTURES: &str = include_str!("fixtures.toml");

#[derive(Debug, Deserialize)]
struct FixtureFile {
    zones: Vec<ZoneFixture>,
}

#[derive(Debug, Deserialize)]
struct ZoneFixture {
    id: String,
    name: String,
    description: String,
    capacity: u32,
    image: String,
    amenities: Vec<String>,
    price_per_night: u32,
    spots: Vec<SpotFixture>,
}

#[derive(Debug, Deserialize)]
struct SpotFixture {
    id: String,
    name: String,
    size: SpotSize,
    status: SpotStatus,
    location: MapPoint,
}

/// All zones and spots for the session
#[derive(Debug, Clone)]
pub struct Catalog {
    zones: Vec<Zone>,
    spots: Vec<Spot>,
}

impl Catalog {
    /// Parse the built-in fixtures
    pub fn built_in() -> Result<Self> {
        Self::from_toml(FIXTURES)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let file: FixtureFile = toml::from_str(raw)?;

        let mut zones = Vec::with_capacity(file.zones.len());
        let mut spots = Vec::new();

        for zf in file.zones {
            let zone = Zone {
                id: zf.id.clone(),
                name: zf.name,
                description: zf.description,
                capacity: zf.capacity,
                image: zf.image,
                amenities: zf.amenities,
                price_per_night: zf.price_per_night,
            };
            invariants::assert_zone_invariants(&zone);

            for sf in zf.spots {
                let spot = Spot {
                    id: sf.id,
                    zone_id: zf.id.clone(),
                    name: sf.name,
                    size: sf.size,
                    status: sf.status,
                    location: sf.location,
                };
                invariants::assert_spot_invariants(&spot);
                spots.push(spot);
            }
            zones.push(zone);
        }

        let catalog = Self { zones, spots };
        invariants::assert_catalog_invariants(&catalog.zones, &catalog.spots);
        tracing::debug!(
            zones = catalog.zones.len(),
            spots = catalog.spots.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, zone_id: &str) -> Result<&Zone> {
        self.zones
            .iter()
            .find(|z| z.id == zone_id)
            .ok_or_else(|| Error::NotFound(format!("zone {zone_id}")))
    }

    pub fn spots_for_zone(&self, zone_id: &str) -> Vec<Spot> {
        self.spots
            .iter()
            .filter(|s| s.zone_id == zone_id)
            .cloned()
            .collect()
    }

    pub fn spot(&self, spot_id: &str) -> Result<&Spot> {
        self.spots
            .iter()
            .find(|s| s.id == spot_id)
            .ok_or_else(|| Error::NotFound(format!("spot {spot_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_fixtures_parse() {
        let catalog = Catalog::built_in().unwrap();
        assert_eq!(catalog.zones().len(), 3);

        let riverside = catalog.zone("riverside").unwrap();
        assert_eq!(riverside.price_per_night, 300);
        assert_eq!(riverside.capacity, 20);
        assert_eq!(catalog.spots_for_zone("riverside").len(), 8);
        assert_eq!(catalog.spots_for_zone("pinewood").len(), 9);
    }

    #[test]
    fn every_zone_has_unavailable_spots() {
        // Each zone carries at least one occupied and one maintenance
        // spot so the selector's gating is exercised by the fixtures.
        let catalog = Catalog::built_in().unwrap();
        for zone in catalog.zones() {
            let spots = catalog.spots_for_zone(&zone.id);
            assert!(spots.iter().any(|s| s.status == SpotStatus::Occupied), "{}", zone.id);
            assert!(
                spots.iter().any(|s| s.status == SpotStatus::Maintenance),
                "{}",
                zone.id
            );
            assert!(spots.iter().filter(|s| s.is_available()).count() >= 3);
        }
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let catalog = Catalog::built_in().unwrap();
        assert!(matches!(catalog.zone("lagoon"), Err(Error::NotFound(_))));
        assert!(matches!(catalog.spot("lagoon-1"), Err(Error::NotFound(_))));
        assert!(catalog.spots_for_zone("lagoon").is_empty());
    }

    #[test]
    fn malformed_fixture_is_a_fixture_error() {
        let err = Catalog::from_toml("zones = 3").unwrap_err();
        assert!(matches!(err, Error::Fixture(_)));
    }

    #[test]
    fn spot_coordinates_stay_on_the_map() {
        let catalog = Catalog::built_in().unwrap();
        for zone in catalog.zones() {
            for spot in catalog.spots_for_zone(&zone.id) {
                assert!((0.0..=100.0).contains(&spot.location.x), "{}", spot.id);
                assert!((0.0..=100.0).contains(&spot.location.y), "{}", spot.id);
            }
        }
    }
}
