// src/dms.rs

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DmsError, DmsField};
use crate::util::round;

/* ---------------- DOMAIN TYPES ---------------- */

// Indicates whether a value is a latitude or a longitude.
// Used to pick valid directions when parsing and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateKind {
    Latitude,
    Longitude,
}

impl CoordinateKind {
    // Direction letters for (non-negative, negative) values.
    fn directions(self) -> (char, char) {
        match self {
            CoordinateKind::Latitude => ('N', 'S'),
            CoordinateKind::Longitude => ('E', 'W'),
        }
    }

    fn accepts(self, dir: char) -> bool {
        let (pos, neg) = self.directions();
        dir == pos || dir == neg
    }
}

impl fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CoordinateKind::Latitude => "latitude",
            CoordinateKind::Longitude => "longitude",
        };
        write!(f, "{s}")
    }
}

// Raw fields captured from a validated DMS string.
struct DmsFields {
    negative: bool,
    deg: f64,
    min: f64,
    sec: f64,
    dir: Option<char>,
}

/* ---------------- VALIDATOR ---------------- */

// Grammar for Degrees / Minutes / Seconds, applied to whitespace-free input.
// Seconds are only allowed after a minutes block.
static DMS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)^
            (?P<deg>-?\d{1,3})           # degrees
            (?:°|º|deg|o)
            (?:
                (?P<min>\d{1,2})         # minutes
                (?:'|′|min|m)
                (?:
                    (?P<sec>\d{1,2}(?:\.\d+)?)   # seconds
                    (?:"|″|sec|s)
                )?
            )?
            (?P<dir>[NSEWnsew])?         # direction
            $"#,
    )
    .expect("Invalid DMS regex")
});

fn clean(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Checks a DMS string against the accepted grammar without parsing it.
pub fn validate(input: &str) -> Result<(), DmsError> {
    split_fields(input).map(|_| ())
}

pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/* ---------------- PARSER ---------------- */

fn split_fields(input: &str) -> Result<DmsFields, DmsError> {
    let cleaned = clean(input);
    if cleaned.is_empty() {
        return Err(DmsError::Blank);
    }

    let caps = DMS_RE
        .captures(&cleaned)
        .ok_or_else(|| DmsError::InvalidFormat(input.trim().to_string()))?;

    let deg_str = caps
        .name("deg")
        .ok_or(DmsError::InvalidField { field: DmsField::Deg })?
        .as_str();
    let deg: f64 = deg_str
        .parse()
        .map_err(|_| DmsError::InvalidField { field: DmsField::Deg })?;
    let min: f64 = match caps.name("min") {
        Some(m) => m
            .as_str()
            .parse()
            .map_err(|_| DmsError::InvalidField { field: DmsField::Min })?,
        None => 0.0,
    };
    let sec: f64 = match caps.name("sec") {
        Some(s) => s
            .as_str()
            .parse()
            .map_err(|_| DmsError::InvalidField { field: DmsField::Sec })?,
        None => 0.0,
    };
    let dir = caps
        .name("dir")
        .and_then(|d| d.as_str().chars().next())
        .map(|c| c.to_ascii_uppercase());

    if min >= 60.0 {
        return Err(DmsError::InvalidMinutes { min });
    }
    if sec >= 60.0 {
        return Err(DmsError::InvalidSeconds { sec });
    }

    Ok(DmsFields {
        // "-0" still counts as negative
        negative: deg_str.starts_with('-'),
        deg: deg.abs(),
        min,
        sec,
        dir,
    })
}

fn fields_to_dd(fields: &DmsFields) -> f64 {
    let value = fields.deg + fields.min / 60.0 + fields.sec / 3600.0;
    let southern_or_western = matches!(fields.dir, Some('S') | Some('W'));
    if fields.negative || southern_or_western {
        -value
    } else {
        value
    }
}

/// Parses a DMS string into signed decimal degrees.
///
/// The value is negative when the direction is `S`/`W` or when the degrees
/// token itself carries a minus sign.
pub fn parse_degrees(input: &str) -> Result<f64, DmsError> {
    let fields = split_fields(input)?;
    Ok(fields_to_dd(&fields))
}

/// Same as [`parse_degrees`], but rejects directions that do not belong to
/// `kind` (a latitude with `E`/`W`, a longitude with `N`/`S`).
pub fn parse_coordinate(input: &str, kind: CoordinateKind) -> Result<f64, DmsError> {
    let fields = split_fields(input)?;
    if let Some(dir) = fields.dir {
        if !kind.accepts(dir) {
            return Err(DmsError::DirectionMismatch { dir, kind });
        }
    }
    Ok(fields_to_dd(&fields))
}

/* ---------------- FORMATTING ---------------- */

// Converts decimal degrees to a `D°M'S"X` string.
// Degrees and minutes are truncated; seconds keep their fraction, rounded to
// `digits` decimals when given. This function does not perform validation.
// The output parses back only while |value| < 1000, since the grammar caps
// degrees at three digits.
pub fn format_dms(value: f64, kind: CoordinateKind, digits: Option<u32>) -> String {
    let (pos, neg) = kind.directions();
    let dir = if value < 0.0 { neg } else { pos };

    let abs = value.abs();
    let mut deg = abs.trunc();
    let min_f = (abs - deg) * 60.0;
    let mut min = min_f.trunc();
    let mut sec = (min_f - min) * 60.0;

    if let Some(digits) = digits {
        sec = round(sec, digits);
    }
    if sec >= 60.0 {
        sec -= 60.0;
        min += 1.0;
    }
    if min >= 60.0 {
        min -= 60.0;
        deg += 1.0;
    }

    format!("{}°{}'{}\"{}", deg as i64, min as i64, sec, dir)
}

/* ---------------- TEST ---------------- */
