// src/lib.rs

//! Geographic coordinates, bearings and great-circle legs.
//!
//! - `Latitude` / `Longitude`: angle-typed components with DMS parsing and formatting
//! - `GeoCoordinate`: a validated point on Earth
//! - `Bearing`: true (0..360) and signed (-180..180) views of one direction
//! - `haversine`: bearing, distance and destination on a spherical Earth
//! - `GeoDistance`: a leg that can be re-targeted, extended and chained
//!
//! # Example
//!
//! ```
//! use geonav::{DistanceUnit, GeoCoordinate, GeoDistance};
//!
//! let wroclaw = GeoCoordinate::of_degrees(51.102772, 16.885802).unwrap();
//! let new_york = GeoCoordinate::of_degrees(40.712671, -74.004655).unwrap();
//!
//! let leg = GeoDistance::between(wroclaw, new_york, DistanceUnit::Kilometer);
//! assert!((leg.distance().value() - 6669.9).abs() < 0.1);
//! assert!(leg.bearing().signed_degrees() < 0.0); // heading west
//! ```

pub mod bearing;
pub mod coordinate;
pub mod distance;
pub mod dms;
pub mod error;
pub mod haversine;
pub mod latlon;
pub mod quantity;
pub mod util;

pub use bearing::{to_signed_bearing, to_true_bearing, Bearing, CardinalDirection};
pub use coordinate::GeoCoordinate;
pub use distance::GeoDistance;
pub use dms::CoordinateKind;
pub use error::{DmsError, DmsField, GeoError, Result};
pub use haversine::EARTH_MEAN_RADIUS_M;
pub use latlon::{Latitude, LatitudeDirection, Longitude, LongitudeDirection};
pub use quantity::{Angle, AngleUnit, Distance, DistanceUnit};
pub use util::GeoTolerance;
