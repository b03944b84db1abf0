// src/quantity.rs

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{GeoError, Result};

/* ---------------- ANGLE UNITS ---------------- */

/// Angle units. The base unit is the degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AngleUnit {
    Radian,
    Degree,
}

// Symbol lookup, built once.
static ANGLE_SYMBOLS: Lazy<HashMap<&'static str, AngleUnit>> = Lazy::new(|| {
    HashMap::from([
        ("rad", AngleUnit::Radian),
        ("radian", AngleUnit::Radian),
        ("deg", AngleUnit::Degree),
        ("degree", AngleUnit::Degree),
        ("°", AngleUnit::Degree),
    ])
});

impl AngleUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            AngleUnit::Radian => "rad",
            AngleUnit::Degree => "deg",
        }
    }

    pub fn from_symbol(symbol: &str) -> Result<Self> {
        ANGLE_SYMBOLS
            .get(symbol.trim())
            .copied()
            .ok_or_else(|| GeoError::UnknownUnit(symbol.to_string()))
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radian => value.to_degrees(),
            AngleUnit::Degree => value,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radian => value.to_radians(),
            AngleUnit::Degree => value,
        }
    }
}

impl From<AngleUnit> for String {
    fn from(unit: AngleUnit) -> Self {
        unit.symbol().to_string()
    }
}

impl TryFrom<String> for AngleUnit {
    type Error = GeoError;

    fn try_from(symbol: String) -> Result<Self> {
        AngleUnit::from_symbol(&symbol)
    }
}

/* ---------------- ANGLE ---------------- */

/// An angle value tagged with its unit.
///
/// Equality compares the values converted to degrees, so `π rad == 180 deg`
/// up to floating point representation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Angle {
    value: f64,
    unit: AngleUnit,
}

impl Angle {
    pub fn of(value: f64, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    pub fn of_symbol(value: f64, symbol: &str) -> Result<Self> {
        Ok(Self::of(value, AngleUnit::from_symbol(symbol)?))
    }

    pub fn of_degrees(value: f64) -> Self {
        Self::of(value, AngleUnit::Degree)
    }

    pub fn of_radians(value: f64) -> Self {
        Self::of(value, AngleUnit::Radian)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    pub fn in_degrees(&self) -> f64 {
        self.unit.to_base(self.value)
    }

    pub fn in_radians(&self) -> f64 {
        AngleUnit::Radian.from_base(self.in_degrees())
    }

    pub fn in_unit(&self, unit: AngleUnit) -> f64 {
        if unit == self.unit {
            return self.value;
        }
        unit.from_base(self.in_degrees())
    }

    pub fn to_unit(&self, unit: AngleUnit) -> Self {
        Self::of(self.in_unit(unit), unit)
    }

    pub fn to_degrees(&self) -> Self {
        self.to_unit(AngleUnit::Degree)
    }

    pub fn to_radians(&self) -> Self {
        self.to_unit(AngleUnit::Radian)
    }

    // Result keeps the unit of `self`.
    pub fn plus(&self, other: &Angle) -> Self {
        Self::of(self.value + other.in_unit(self.unit), self.unit)
    }

    pub fn minus(&self, other: &Angle) -> Self {
        Self::of(self.value - other.in_unit(self.unit), self.unit)
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.in_degrees() == other.in_degrees()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

/* ---------------- DISTANCE UNITS ---------------- */

/// Length units. The base unit is the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DistanceUnit {
    Meter,
    Kilometer,
    Mile,
    NauticalMile,
    Foot,
}

static DISTANCE_SYMBOLS: Lazy<HashMap<&'static str, DistanceUnit>> = Lazy::new(|| {
    HashMap::from([
        ("m", DistanceUnit::Meter),
        ("km", DistanceUnit::Kilometer),
        ("mi", DistanceUnit::Mile),
        ("nmi", DistanceUnit::NauticalMile),
        ("NM", DistanceUnit::NauticalMile),
        ("ft", DistanceUnit::Foot),
    ])
});

impl DistanceUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Meter => "m",
            DistanceUnit::Kilometer => "km",
            DistanceUnit::Mile => "mi",
            DistanceUnit::NauticalMile => "nmi",
            DistanceUnit::Foot => "ft",
        }
    }

    pub fn from_symbol(symbol: &str) -> Result<Self> {
        DISTANCE_SYMBOLS
            .get(symbol.trim())
            .copied()
            .ok_or_else(|| GeoError::UnknownUnit(symbol.to_string()))
    }

    // Meters per one unit.
    fn factor(self) -> f64 {
        match self {
            DistanceUnit::Meter => 1.0,
            DistanceUnit::Kilometer => 1000.0,
            DistanceUnit::Mile => 1609.344,
            DistanceUnit::NauticalMile => 1852.0,
            DistanceUnit::Foot => 0.3048,
        }
    }

    fn to_base(self, value: f64) -> f64 {
        value * self.factor()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.factor()
    }
}

impl From<DistanceUnit> for String {
    fn from(unit: DistanceUnit) -> Self {
        unit.symbol().to_string()
    }
}

impl TryFrom<String> for DistanceUnit {
    type Error = GeoError;

    fn try_from(symbol: String) -> Result<Self> {
        DistanceUnit::from_symbol(&symbol)
    }
}

/* ---------------- DISTANCE ---------------- */

/// A length value tagged with its unit. Equality compares meters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Distance {
    value: f64,
    unit: DistanceUnit,
}

impl Distance {
    pub fn of(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    pub fn of_symbol(value: f64, symbol: &str) -> Result<Self> {
        Ok(Self::of(value, DistanceUnit::from_symbol(symbol)?))
    }

    pub fn of_meters(value: f64) -> Self {
        Self::of(value, DistanceUnit::Meter)
    }

    pub fn of_kilometers(value: f64) -> Self {
        Self::of(value, DistanceUnit::Kilometer)
    }

    pub fn of_miles(value: f64) -> Self {
        Self::of(value, DistanceUnit::Mile)
    }

    pub fn of_nautical_miles(value: f64) -> Self {
        Self::of(value, DistanceUnit::NauticalMile)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    pub fn in_meters(&self) -> f64 {
        self.unit.to_base(self.value)
    }

    pub fn in_unit(&self, unit: DistanceUnit) -> f64 {
        if unit == self.unit {
            return self.value;
        }
        unit.from_base(self.in_meters())
    }

    pub fn to_unit(&self, unit: DistanceUnit) -> Self {
        Self::of(self.in_unit(unit), unit)
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

    pub fn plus(&self, other: &Distance) -> Self {
        Self::of(self.value + other.in_unit(self.unit), self.unit)
    }

    pub fn minus(&self, other: &Distance) -> Self {
        Self::of(self.value - other.in_unit(self.unit), self.unit)
    }

    pub fn multiply(&self, factor: f64) -> Self {
        Self::of(self.value * factor, self.unit)
    }

    // Dimensionless ratio between two distances.
    pub fn div(&self, other: &Distance) -> Result<f64> {
        let denominator = other.in_unit(self.unit);
        if denominator == 0.0 {
            return Err(GeoError::InvalidArgument(
                "division by a zero distance".to_string(),
            ));
        }
        Ok(self.value / denominator)
    }

    // Exact comparison, no epsilon.
    pub fn is_equal_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.in_meters() == other.in_meters()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

/* ---------------- TEST ---------------- */
