// src/haversine.rs

//! Great-circle math on a spherical Earth.
//!
//! Earth is modelled as a sphere of mean radius 6,371 km. No ellipsoid
//! correction is applied, so results can differ from WGS84 geodesics by up
//! to about 0.5%.

use crate::bearing::{to_true_bearing, Bearing};
use crate::coordinate::GeoCoordinate;
use crate::error::Result;
use crate::quantity::{Angle, Distance};

/* ---------------- CONSTANTS ---------------- */

/// Earth's mean radius in meters.
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;

/* ---------------- BEARING ---------------- */

/// Initial great-circle bearing (forward azimuth) from `start` to `target`,
/// as a true bearing in degrees within `[0, 360)`.
pub fn calc_bearing(start: &GeoCoordinate, target: &GeoCoordinate) -> Angle {
    let lat1 = start.latitude().in_radians();
    let lat2 = target.latitude().in_radians();
    let d_lon = target
        .longitude()
        .to_degrees()
        .minus(&start.longitude())
        .in_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    Angle::of_degrees(to_true_bearing(y.atan2(x).to_degrees()))
}

/* ---------------- DISTANCE ---------------- */

/// Great-circle distance in meters (haversine formula).
pub fn calc_spherical_distance(start: &GeoCoordinate, target: &GeoCoordinate) -> Distance {
    let lat1 = start.latitude().in_radians();
    let lat2 = target.latitude().in_radians();
    let d_lat = target
        .latitude()
        .to_degrees()
        .minus(&start.latitude())
        .in_radians();
    let d_lon = target
        .longitude()
        .to_degrees()
        .minus(&start.longitude())
        .in_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // near-antipodal pairs can push `a` just past 1
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Distance::of_meters(EARTH_MEAN_RADIUS_M * c)
}

/* ---------------- DESTINATION ---------------- */

/// Destination reached from `from` after travelling `distance` along the
/// great circle starting at `bearing`.
///
/// Fails only when the inputs are not finite.
pub fn calc_target_coordinate(
    from: &GeoCoordinate,
    bearing: &Bearing,
    distance: &Distance,
) -> Result<GeoCoordinate> {
    let delta = distance.in_meters() / EARTH_MEAN_RADIUS_M;
    let theta = bearing.signed_radians();
    let lat1 = from.latitude().in_radians();
    let lon1 = from.longitude().in_radians();

    let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    let (lat, lon) = correct(lat2.to_degrees(), lon2.to_degrees());
    GeoCoordinate::of_degrees(lat, lon)
}

// Brings a destination back into Earth ranges after crossing the antimeridian.
// The latitude step is a plain modulo, not a pole-crossing transform, and is
// only approximate near ±90°.
fn correct(lat: f64, lon: f64) -> (f64, f64) {
    let lon = if lon > 180.0 {
        lon - 360.0
    } else if lon < -180.0 {
        lon + 360.0
    } else {
        lon
    };
    let lat = if lat.abs() > 90.0 { lat % 90.0 } else { lat };
    (lat, lon)
}

/* ---------------- TEST ---------------- */
