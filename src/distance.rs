// src/distance.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bearing::Bearing;
use crate::coordinate::GeoCoordinate;
use crate::error::{GeoError, Result};
use crate::haversine::{calc_bearing, calc_spherical_distance, calc_target_coordinate};
use crate::quantity::{Distance, DistanceUnit};

/* ---------------- GEO DISTANCE ---------------- */

/// A great-circle leg: start, target, initial bearing and distance.
///
/// A leg is built either from two coordinates (bearing and distance are
/// derived) or from a start, a bearing and a distance (target is derived).
/// The four values are never set independently; every `with_*`,
/// `translate*` and `to_*` call returns a new leg.
///
/// Equality compares start and target only, since the bearing and distance
/// follow from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGeoDistance")]
pub struct GeoDistance {
    start_coordinate: GeoCoordinate,
    target_coordinate: GeoCoordinate,
    true_bearing: Bearing,
    distance: Distance,
}

// Wire form. The stored bearing is not trusted; it is derived again.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGeoDistance {
    start_coordinate: GeoCoordinate,
    target_coordinate: GeoCoordinate,
    distance: Distance,
}

impl TryFrom<RawGeoDistance> for GeoDistance {
    type Error = GeoError;

    fn try_from(raw: RawGeoDistance) -> Result<Self> {
        Ok(GeoDistance::between(
            raw.start_coordinate,
            raw.target_coordinate,
            raw.distance.unit(),
        ))
    }
}

impl GeoDistance {
    /* ---------------- CONSTRUCTION ---------------- */

    /// Leg between two coordinates, with its distance expressed in `unit`.
    pub fn between(start: GeoCoordinate, target: GeoCoordinate, unit: DistanceUnit) -> Self {
        let true_bearing = Bearing::of_angle(&calc_bearing(&start, &target));
        let distance = calc_spherical_distance(&start, &target).to_unit(unit);
        Self {
            start_coordinate: start,
            target_coordinate: target,
            true_bearing,
            distance,
        }
    }

    /// Leg from `start` along `bearing` for `distance`. The distance keeps
    /// its own unit.
    pub fn from_bearing(start: GeoCoordinate, bearing: Bearing, distance: Distance) -> Result<Self> {
        let target = calc_target_coordinate(&start, &bearing, &distance)?;
        Ok(Self {
            start_coordinate: start,
            target_coordinate: target,
            true_bearing: bearing,
            distance,
        })
    }

    /* ---------------- ACCESSORS ---------------- */

    pub fn start(&self) -> &GeoCoordinate {
        &self.start_coordinate
    }

    pub fn target(&self) -> &GeoCoordinate {
        &self.target_coordinate
    }

    pub fn bearing(&self) -> Bearing {
        self.true_bearing
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn unit(&self) -> DistanceUnit {
        self.distance.unit()
    }

    /* ---------------- WITH (same start) ---------------- */

    // A distance of exactly zero leaves the leg unchanged.
    pub fn with_bearing_and_distance(&self, bearing: Bearing, distance: Distance) -> Result<Self> {
        if distance.is_equal_zero() {
            return Ok(self.clone());
        }
        Self::from_bearing(self.start_coordinate.clone(), bearing, distance)
    }

    pub fn with_distance(&self, distance: Distance) -> Result<Self> {
        self.with_bearing_and_distance(self.true_bearing, distance)
    }

    pub fn with_target(&self, target: GeoCoordinate) -> Self {
        Self::between(self.start_coordinate.clone(), target, self.unit())
    }

    /* ---------------- TRANSLATE (start from current target) ---------------- */

    pub fn translate(&self, bearing: Bearing, distance: Distance) -> Result<Self> {
        if distance.is_equal_zero() {
            return Ok(self.clone());
        }
        Self::from_bearing(self.target_coordinate.clone(), bearing, distance)
    }

    pub fn translate_distance(&self, distance: Distance) -> Result<Self> {
        self.translate(self.true_bearing, distance)
    }

    pub fn translate_to(&self, target: GeoCoordinate) -> Self {
        Self::between(self.target_coordinate.clone(), target, self.unit())
    }

    /* ---------------- UNITS ---------------- */

    // Re-derived from the coordinates, not a rescale of the stored distance.
    pub fn to_unit(&self, unit: DistanceUnit) -> Self {
        Self::between(
            self.start_coordinate.clone(),
            self.target_coordinate.clone(),
            unit,
        )
    }

    pub fn to_meters(&self) -> Self {
        self.to_unit(DistanceUnit::Meter)
    }

    pub fn to_kilometers(&self) -> Self {
        self.to_unit(DistanceUnit::Kilometer)
    }

    pub fn to_miles(&self) -> Self {
        self.to_unit(DistanceUnit::Mile)
    }

    pub fn to_nautical_miles(&self) -> Self {
        self.to_unit(DistanceUnit::NauticalMile)
    }

    pub fn to_feet(&self) -> Self {
        self.to_unit(DistanceUnit::Foot)
    }
}

impl PartialEq for GeoDistance {
    fn eq(&self, other: &Self) -> bool {
        self.start_coordinate.to_base_unit() == other.start_coordinate.to_base_unit()
            && self.target_coordinate.to_base_unit() == other.target_coordinate.to_base_unit()
    }
}

impl fmt::Display for GeoDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {}, bearing {}",
            self.start_coordinate, self.target_coordinate, self.distance, self.true_bearing
        )
    }
}

/* ---------------- TEST ---------------- */
