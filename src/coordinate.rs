// src/coordinate.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, Result};
use crate::latlon::{Latitude, Longitude};
use crate::util::{compare_axes, render, GeoTolerance};

/* ---------------- GEO COORDINATE ---------------- */

/// A point on Earth, with an optional name.
///
/// Construction fails unless latitude is within `[-90°, 90°]` and longitude
/// within `[-180°, 180°]`. Equality compares both components in degrees and
/// the name, so the same point expressed in radians and in degrees is equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct GeoCoordinate {
    latitude: Latitude,
    longitude: Longitude,
    name: Option<String>,
}

// Unvalidated wire form.
#[derive(Deserialize)]
struct RawCoordinate {
    latitude: Latitude,
    longitude: Longitude,
    #[serde(default)]
    name: Option<String>,
}

impl TryFrom<RawCoordinate> for GeoCoordinate {
    type Error = GeoError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        GeoCoordinate::build(raw.latitude, raw.longitude, raw.name)
    }
}

fn check_range(kind: &str, degrees: f64, limit: f64) -> Result<()> {
    // also rejects NaN
    if !(-limit..=limit).contains(&degrees) {
        return Err(GeoError::InvalidArgument(format!(
            "{kind} {degrees}° is outside [-{limit}°, {limit}°]"
        )));
    }
    Ok(())
}

fn labelled(label: Option<&str>, body: String) -> String {
    match label {
        Some(label) => format!("{label} = {body}"),
        None => body,
    }
}

impl GeoCoordinate {
    fn build(latitude: Latitude, longitude: Longitude, name: Option<String>) -> Result<Self> {
        check_range("latitude", latitude.in_degrees(), 90.0)?;
        check_range("longitude", longitude.in_degrees(), 180.0)?;
        Ok(Self {
            latitude,
            longitude,
            name,
        })
    }

    pub fn new(latitude: Latitude, longitude: Longitude) -> Result<Self> {
        Self::build(latitude, longitude, None)
    }

    pub fn with_name(
        latitude: Latitude,
        longitude: Longitude,
        name: impl Into<String>,
    ) -> Result<Self> {
        Self::build(latitude, longitude, Some(name.into()))
    }

    pub fn of_degrees(latitude: f64, longitude: f64) -> Result<Self> {
        Self::new(Latitude::of_degrees(latitude), Longitude::of_degrees(longitude))
    }

    /// Parses both components from DMS text, e.g. `52°14'5"N` and `16°53'8"E`.
    pub fn from_dms(latitude: &str, longitude: &str) -> Result<Self> {
        Self::new(latitude.parse()?, longitude.parse()?)
    }

    pub fn latitude(&self) -> Latitude {
        self.latitude
    }

    pub fn longitude(&self) -> Longitude {
        self.longitude
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    // Same point, both components in decimal degrees.
    pub fn to_base_unit(&self) -> Self {
        Self {
            latitude: self.latitude.to_degrees(),
            longitude: self.longitude.to_degrees(),
            name: self.name.clone(),
        }
    }

    /// Compares latitude and longitude independently, each within `epsilon`
    /// degrees. Names are ignored.
    pub fn equals_with_precision(&self, other: &GeoCoordinate, epsilon: f64) -> bool {
        compare_axes(
            self.latitude.in_degrees(),
            self.longitude.in_degrees(),
            other.latitude.in_degrees(),
            other.longitude.in_degrees(),
            GeoTolerance::of_degrees(epsilon),
        )
        .both
    }

    /* ---------------- FORMATTING ---------------- */

    // `52°14'5.123"N, 16°53'8.887"E`
    pub fn to_dms_format(&self, label: Option<&str>, digits: Option<u32>) -> String {
        let body = format!(
            "{}, {}",
            self.latitude.to_dms(digits),
            self.longitude.to_dms(digits)
        );
        labelled(label, body)
    }

    // `52.234756, 16.885802`
    pub fn to_decimal_degrees(&self, label: Option<&str>, digits: Option<u32>) -> String {
        let body = format!(
            "{}, {}",
            render(self.latitude.in_degrees(), digits),
            render(self.longitude.in_degrees(), digits)
        );
        labelled(label, body)
    }

    // `{lat = 52.234756 [°], lon = 16.885802 [°]}`
    pub fn to_engineering_format(&self, label: Option<&str>, digits: Option<u32>) -> String {
        let body = format!(
            "{{lat = {} [°], lon = {} [°]}}",
            render(self.latitude.in_degrees(), digits),
            render(self.longitude.in_degrees(), digits)
        );
        labelled(label, body)
    }
}

impl PartialEq for GeoCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.latitude.in_degrees() == other.latitude.in_degrees()
            && self.longitude.in_degrees() == other.longitude.in_degrees()
            && self.name == other.name
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dms_format(self.name(), None))
    }
}

/* ---------------- TEST ---------------- */
