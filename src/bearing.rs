// src/bearing.rs

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::quantity::{Angle, AngleUnit};

/* ---------------- BEARING MATH ---------------- */

/// Signed bearing (-180..180] to true bearing [0, 360).
pub fn to_true_bearing(signed_degrees: f64) -> f64 {
    let t = signed_degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if t >= 360.0 { 0.0 } else { t }
}

/// True bearing [0, 360) to signed bearing (-180..180].
pub fn to_signed_bearing(true_degrees: f64) -> f64 {
    if true_degrees > 180.0 {
        true_degrees - 360.0
    } else {
        true_degrees
    }
}

/* ---------------- CARDINAL DIRECTIONS ---------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalDirection {
    North,
    East,
    South,
    West,
}

impl CardinalDirection {
    pub fn true_bearing(self) -> f64 {
        match self {
            CardinalDirection::North => 0.0,
            CardinalDirection::East => 90.0,
            CardinalDirection::South => 180.0,
            CardinalDirection::West => 270.0,
        }
    }
}

/* ---------------- BEARING ---------------- */

/// A compass direction, measured clockwise from North.
///
/// The only stored state is the true bearing in degrees, normalized to
/// `[0, 360)`, plus the unit used when reading values back. The signed
/// form is always derived from it, so the two views cannot diverge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "Angle", from = "Angle")]
pub struct Bearing {
    degrees: f64,
    unit: AngleUnit,
}

impl Bearing {
    const fn fixed(degrees: f64) -> Self {
        Self {
            degrees,
            unit: AngleUnit::Degree,
        }
    }

    /// Bearing from a true value in degrees. Values outside `[0, 360)` wrap.
    pub fn of(true_degrees: f64) -> Self {
        Self::fixed(to_true_bearing(true_degrees))
    }

    pub fn of_symbol(value: f64, symbol: &str) -> Result<Self> {
        Ok(Self::of_angle(&Angle::of_symbol(value, symbol)?))
    }

    // The angle is read as a true bearing.
    pub fn of_angle(angle: &Angle) -> Self {
        Self {
            degrees: to_true_bearing(angle.in_degrees()),
            unit: angle.unit(),
        }
    }

    pub fn of_signed(signed_degrees: f64) -> Self {
        Self::of(to_true_bearing(signed_degrees))
    }

    pub fn of_signed_angle(angle: &Angle) -> Self {
        // normalization makes signed and true input equivalent
        Self::of_angle(angle)
    }

    pub fn of_cardinal(direction: CardinalDirection) -> Self {
        Self::of(direction.true_bearing())
    }

    /// Cardinal direction turned by a relative bearing, e.g. North and -10 gives 350.
    pub fn of_cardinal_relative(direction: CardinalDirection, relative: &Bearing) -> Self {
        Self::of(direction.true_bearing() + relative.signed_degrees())
    }

    pub const fn north() -> Self {
        Self::fixed(0.0)
    }

    pub const fn north_east() -> Self {
        Self::fixed(45.0)
    }

    pub const fn east() -> Self {
        Self::fixed(90.0)
    }

    pub const fn south_east() -> Self {
        Self::fixed(135.0)
    }

    pub const fn south() -> Self {
        Self::fixed(180.0)
    }

    pub const fn south_west() -> Self {
        Self::fixed(225.0)
    }

    pub const fn west() -> Self {
        Self::fixed(270.0)
    }

    pub const fn north_west() -> Self {
        Self::fixed(315.0)
    }

    /// Applies a relative offset to this bearing. The unit of `self` is kept.
    pub fn compose(&self, relative: &Bearing) -> Self {
        Self {
            degrees: to_true_bearing(self.degrees + relative.signed_degrees()),
            unit: self.unit,
        }
    }

    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    // True bearing in this bearing's unit.
    pub fn value(&self) -> f64 {
        self.to_angle().value()
    }

    // Signed bearing in this bearing's unit.
    pub fn signed_value(&self) -> f64 {
        self.to_signed_angle().value()
    }

    pub fn in_degrees(&self) -> f64 {
        self.degrees
    }

    pub fn in_radians(&self) -> f64 {
        self.degrees.to_radians()
    }

    pub fn signed_degrees(&self) -> f64 {
        to_signed_bearing(self.degrees)
    }

    pub fn signed_radians(&self) -> f64 {
        self.signed_degrees().to_radians()
    }

    pub fn to_angle(&self) -> Angle {
        Angle::of_degrees(self.degrees).to_unit(self.unit)
    }

    pub fn to_signed_angle(&self) -> Angle {
        Angle::of_degrees(self.signed_degrees()).to_unit(self.unit)
    }

    pub fn to_unit(&self, unit: AngleUnit) -> Self {
        Self {
            degrees: self.degrees,
            unit,
        }
    }

    pub fn to_degrees(&self) -> Self {
        self.to_unit(AngleUnit::Degree)
    }

    pub fn to_radians(&self) -> Self {
        self.to_unit(AngleUnit::Radian)
    }
}

impl PartialEq for Bearing {
    fn eq(&self, other: &Self) -> bool {
        self.degrees == other.degrees
    }
}

impl Eq for Bearing {}

impl Hash for Bearing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // +0.0 and -0.0 compare equal
        let degrees = if self.degrees == 0.0 { 0.0 } else { self.degrees };
        degrees.to_bits().hash(state);
    }
}

impl From<Angle> for Bearing {
    fn from(angle: Angle) -> Self {
        Bearing::of_angle(&angle)
    }
}

impl From<Bearing> for Angle {
    fn from(bearing: Bearing) -> Self {
        bearing.to_angle()
    }
}

impl From<CardinalDirection> for Bearing {
    fn from(direction: CardinalDirection) -> Self {
        Bearing::of_cardinal(direction)
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_angle())
    }
}

/* ---------------- TEST ---------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /* --- math --------------------*/
    #[test]
    fn test_bearing_math() {
        assert_eq!(to_true_bearing(-90.0), 270.0);
        assert_eq!(to_true_bearing(180.0), 180.0);
        assert_eq!(to_true_bearing(370.0), 10.0);
        assert_eq!(to_true_bearing(-1e-20), 0.0);
        assert_eq!(to_signed_bearing(270.0), -90.0);
        assert_eq!(to_signed_bearing(180.0), 180.0);
        assert_eq!(to_signed_bearing(0.0), 0.0);
    }

    /* --- constructors --------------------*/
    #[test]
    fn test_bearing_signed_value() {
        let b = Bearing::of(270.0);
        assert_eq!(b.signed_value(), -90.0);
        assert_eq!(b.value(), 270.0);
        assert_eq!(Bearing::of_signed(-90.0), b);
    }

    #[test]
    fn test_bearing_cardinal_relative() {
        let b = Bearing::of_cardinal_relative(CardinalDirection::North, &Bearing::of_signed(-10.0));
        assert_eq!(b.in_degrees(), 350.0);
        let b = Bearing::of_cardinal_relative(CardinalDirection::West, &Bearing::of(100.0));
        assert_eq!(b.in_degrees(), 10.0);
    }

    #[test]
    fn test_named_bearings() {
        assert_eq!(Bearing::from(CardinalDirection::North), Bearing::north());
        assert_eq!(Bearing::of_cardinal(CardinalDirection::East), Bearing::east());
        assert_eq!(Bearing::of_cardinal(CardinalDirection::South), Bearing::south());
        assert_eq!(Bearing::of_cardinal(CardinalDirection::West), Bearing::west());
        assert_eq!(Bearing::north_east().in_degrees(), 45.0);
        assert_eq!(Bearing::south_east().in_degrees(), 135.0);
        assert_eq!(Bearing::south_west().signed_degrees(), -135.0);
        assert_eq!(Bearing::north_west().signed_degrees(), -45.0);
    }

    #[test]
    fn test_bearing_compose() {
        let b = Bearing::east().compose(&Bearing::of(300.0));
        assert_eq!(b.in_degrees(), 30.0);
        let b = Bearing::north_west().compose(&Bearing::of_signed(90.0));
        assert_eq!(b.in_degrees(), 45.0);
    }

    #[test]
    fn test_bearing_units() {
        let b = Bearing::of_symbol(std::f64::consts::PI, "rad").unwrap();
        assert_eq!(b.unit(), AngleUnit::Radian);
        assert!((b.in_degrees() - 180.0).abs() < 1e-12);
        let w = Bearing::of_angle(&Angle::of_radians(1.5 * std::f64::consts::PI));
        assert!((w.signed_value() + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(Bearing::of(90.0).to_radians(), Bearing::of(90.0));
        assert!(Bearing::of_symbol(1.0, "furlong").is_err());
    }

    #[test]
    fn test_bearing_hash_follows_equality() {
        use std::collections::HashSet;
        let set: HashSet<Bearing> = [Bearing::of(0.0), Bearing::of(360.0), Bearing::of_signed(-0.0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
        let keyed: HashSet<Bearing> = [Bearing::east(), Bearing::of_signed(90.0), Bearing::west()]
            .into_iter()
            .collect();
        assert_eq!(keyed.len(), 2);
    }

    #[test]
    fn test_bearing_serde() {
        let json = serde_json::to_string(&Bearing::of(270.0)).unwrap();
        assert_eq!(json, r#"{"value":270.0,"unit":"deg"}"#);
        let back: Bearing = serde_json::from_str(&json).unwrap();
        assert_eq!(back.signed_degrees(), -90.0);
    }

    /* --- properties --------------------*/
    proptest! {
        #[test]
        fn prop_true_round_trip(t in 0.0f64..360.0) {
            let s = to_signed_bearing(t);
            prop_assert_eq!(to_signed_bearing(to_true_bearing(s)), s);
        }

        #[test]
        fn prop_signed_round_trip(s in -179.999f64..=180.0) {
            let t = to_true_bearing(s);
            prop_assert_eq!(to_true_bearing(to_signed_bearing(t)), t);
        }

        #[test]
        fn prop_bearing_duality(v in -1000.0f64..1000.0) {
            for b in [Bearing::of(v), Bearing::of_signed(v)] {
                prop_assert_eq!(b.in_degrees(), to_true_bearing(b.signed_degrees()));
                prop_assert_eq!(b.signed_degrees(), to_signed_bearing(b.in_degrees()));
                prop_assert!((0.0..360.0).contains(&b.in_degrees()));
            }
        }
    }
}
