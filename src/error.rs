// src/error.rs

use crate::dms::CoordinateKind;

/* ---------------- FIELDS ---------------- */

// Identifies which field of a DMS string failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmsField {
    Deg,
    Min,
    Sec,
}

impl std::fmt::Display for DmsField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DmsField::Deg => "degrees",
            DmsField::Min => "minutes",
            DmsField::Sec => "seconds",
        };
        write!(f, "{s}")
    }
}

/* ---------------- PARSE ERRORS ---------------- */

// Errors raised while validating or parsing a DMS string.
// Every variant belongs to the parse error family.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DmsError {
    #[error("DMS input is blank")]
    Blank,
    #[error("invalid DMS format `{0}`")]
    InvalidFormat(String),
    #[error("invalid DMS field: {field}")]
    InvalidField { field: DmsField },
    #[error("invalid minutes value `{min}`")]
    InvalidMinutes { min: f64 },
    #[error("invalid seconds value `{sec}`")]
    InvalidSeconds { sec: f64 },
    #[error("direction `{dir}` is not valid for a {kind}")]
    DirectionMismatch { dir: char, kind: CoordinateKind },
}

/* ---------------- LIBRARY ERRORS ---------------- */

/// Errors produced by the geonav library.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("parse error ({0})")]
    Parse(#[from] DmsError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unknown unit symbol `{0}`")]
    UnknownUnit(String),
}

impl GeoError {
    /// True for malformed input strings, including direction mismatches.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, GeoError::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_family() {
        let err: GeoError = DmsError::Blank.into();
        assert!(err.is_parse_error());
        assert!(!GeoError::InvalidArgument("lat".into()).is_parse_error());
    }

    #[test]
    fn test_error_messages() {
        let err = GeoError::from(DmsError::DirectionMismatch {
            dir: 'E',
            kind: CoordinateKind::Latitude,
        });
        assert_eq!(
            err.to_string(),
            "parse error (direction `E` is not valid for a latitude)"
        );
        assert_eq!(
            DmsError::InvalidField { field: DmsField::Min }.to_string(),
            "invalid DMS field: minutes"
        );
    }
}
