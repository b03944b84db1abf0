// src/latlon.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dms::{format_dms, parse_coordinate, CoordinateKind};
use crate::error::{GeoError, Result};
use crate::quantity::{Angle, AngleUnit};

/* ---------------- DIRECTIONS ---------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatitudeDirection {
    North,
    South,
}

impl LatitudeDirection {
    fn sign(self) -> f64 {
        match self {
            LatitudeDirection::North => 1.0,
            LatitudeDirection::South => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongitudeDirection {
    East,
    West,
}

impl LongitudeDirection {
    fn sign(self) -> f64 {
        match self {
            LongitudeDirection::East => 1.0,
            LongitudeDirection::West => -1.0,
        }
    }
}

fn dms_magnitude(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees.abs() + minutes / 60.0 + seconds / 3600.0
}

/* ---------------- COMPONENTS ---------------- */

// Latitude and longitude share everything but their direction type and the
// letters used in DMS text. Neither one enforces its Earth range; that check
// belongs to `GeoCoordinate`.
macro_rules! coordinate_component {
    (
        $(#[$meta:meta])*
        $name:ident, $direction:ty, $kind:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Angle);

        impl $name {
            pub fn of(value: f64, unit: AngleUnit) -> Self {
                Self(Angle::of(value, unit))
            }

            pub fn of_symbol(value: f64, symbol: &str) -> Result<Self> {
                Ok(Self(Angle::of_symbol(value, symbol)?))
            }

            pub fn of_angle(angle: Angle) -> Self {
                Self(angle)
            }

            pub fn of_degrees(degrees: f64) -> Self {
                Self(Angle::of_degrees(degrees))
            }

            pub fn of_radians(radians: f64) -> Self {
                Self(Angle::of_radians(radians))
            }

            /// Builds the value from D/M/S parts. The sign of `degrees` decides
            /// the sign of the result.
            pub fn of_deg_min_sec(degrees: f64, minutes: f64, seconds: f64) -> Self {
                let magnitude = dms_magnitude(degrees, minutes, seconds);
                let sign = if degrees.is_sign_negative() { -1.0 } else { 1.0 };
                Self::of_degrees(sign * magnitude)
            }

            /// Builds the value from D/M/S parts. The direction decides the sign;
            /// the sign of `degrees` is ignored.
            pub fn of_deg_min_sec_dir(
                degrees: f64,
                minutes: f64,
                seconds: f64,
                direction: $direction,
            ) -> Self {
                Self::of_degrees(direction.sign() * dms_magnitude(degrees, minutes, seconds))
            }

            pub fn angle(&self) -> Angle {
                self.0
            }

            pub fn value(&self) -> f64 {
                self.0.value()
            }

            pub fn unit(&self) -> AngleUnit {
                self.0.unit()
            }

            pub fn in_degrees(&self) -> f64 {
                self.0.in_degrees()
            }

            pub fn in_radians(&self) -> f64 {
                self.0.in_radians()
            }

            pub fn to_unit(&self, unit: AngleUnit) -> Self {
                Self(self.0.to_unit(unit))
            }

            pub fn to_degrees(&self) -> Self {
                self.to_unit(AngleUnit::Degree)
            }

            pub fn to_radians(&self) -> Self {
                self.to_unit(AngleUnit::Radian)
            }

            pub fn minus(&self, other: &Self) -> Self {
                Self(self.0.minus(&other.0))
            }

            pub fn to_dms(&self, digits: Option<u32>) -> String {
                format_dms(self.in_degrees(), $kind, digits)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl FromStr for $name {
            type Err = GeoError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self::of_degrees(parse_coordinate(s, $kind)?))
            }
        }

        impl From<Angle> for $name {
            fn from(angle: Angle) -> Self {
                Self(angle)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_dms(None))
            }
        }
    };
}

coordinate_component!(
    /// North/south angle, nominally within `[-90°, 90°]`.
    Latitude,
    LatitudeDirection,
    CoordinateKind::Latitude
);

coordinate_component!(
    /// East/west angle, nominally within `[-180°, 180°]`.
    Longitude,
    LongitudeDirection,
    CoordinateKind::Longitude
);

/* ---------------- TEST ---------------- */

#[cfg(test)]
mod tests {
    use super::*;

    /* --- constructors --------------------*/
    #[test]
    fn test_latitude_units() {
        let lat = Latitude::of_radians(std::f64::consts::FRAC_PI_4);
        assert!((lat.in_degrees() - 45.0).abs() < 1e-12);
        assert_eq!(lat.to_degrees().unit(), AngleUnit::Degree);
        let lat = Latitude::of_symbol(30.0, "deg").unwrap();
        assert_eq!(lat, Latitude::of_degrees(30.0));
        assert!(Latitude::of_symbol(30.0, "gon").is_err());
    }

    #[test]
    fn test_range_not_enforced() {
        // Other bodies, other conventions
        assert_eq!(Latitude::of_degrees(120.0).in_degrees(), 120.0);
        assert_eq!(Longitude::of_degrees(-400.0).in_degrees(), -400.0);
    }

    #[test]
    fn test_deg_min_sec_sign_from_degrees() {
        let lat = Latitude::of_deg_min_sec(-33.0, 30.0, 0.0);
        assert_eq!(lat.in_degrees(), -33.5);
        let lon = Longitude::of_deg_min_sec(16.0, 53.0, 8.887);
        assert!((lon.in_degrees() - 16.885801944).abs() < 1e-9);
    }

    #[test]
    fn test_deg_min_sec_sign_from_direction() {
        let lat = Latitude::of_deg_min_sec_dir(-33.0, 30.0, 0.0, LatitudeDirection::North);
        assert_eq!(lat.in_degrees(), 33.5);
        let lon = Longitude::of_deg_min_sec_dir(74.0, 0.0, 36.0, LongitudeDirection::West);
        assert!((lon.in_degrees() + 74.01).abs() < 1e-12);
    }

    /* --- DMS --------------------*/
    #[test]
    fn test_latitude_from_dms() {
        let lat: Latitude = "52°14'5.123\"N".parse().unwrap();
        assert!((lat.in_degrees() - 52.23475638888889).abs() < 1e-12);
    }

    #[test]
    fn test_latitude_rejects_east_west() {
        let err = "52°14'5.123\"E".parse::<Latitude>().unwrap_err();
        assert!(err.is_parse_error());
        assert!("52°14'5.123\"W".parse::<Latitude>().is_err());
        assert!("16°53'8\"N".parse::<Longitude>().is_err());
        assert!("16°53'8\"W".parse::<Longitude>().is_ok());
    }

    #[test]
    fn test_to_dms() {
        let lon = Longitude::of_degrees(-74.01);
        assert_eq!(lon.to_dms(Some(2)), "74°0'36\"W");
        let lat = Latitude::of_degrees(52.23475638888889);
        assert_eq!(lat.to_dms(Some(3)), "52°14'5.123\"N");
    }

    #[test]
    fn test_minus_and_equality() {
        let a = Latitude::of_degrees(50.0);
        let b = Latitude::of_radians(40.0_f64.to_radians());
        let d = a.minus(&b);
        assert_eq!(d.unit(), AngleUnit::Degree);
        assert!((d.in_degrees() - 10.0).abs() < 1e-12);
        assert_eq!(Longitude::of_degrees(180.0), Longitude::of(180.0, AngleUnit::Degree));
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Latitude::of_degrees(12.5)).unwrap();
        assert_eq!(json, r#"{"value":12.5,"unit":"deg"}"#);
    }
}
