// src/main.rs

/*
ARCHITECTURE OVERVIEW

This binary is a CSV-to-CSV great-circle leg calculator.

High-level flow:
1. Parse CLI arguments (input/output paths, coordinate format, unit, strict mode).
2. Validate CSV headers.
3. Read input rows and build both endpoints as `GeoCoordinate`s:
   - DD  → numeric values
   - DMS → parsed and validated strings
4. Build a `GeoDistance` leg between the endpoints in the requested unit.
5. Write one enriched row per leg (decimal degrees, DMS, distance, bearings).

Errors are handled per-line in permissive mode, or fail-fast in strict mode.
All geometry lives in the library; this module only does I/O and orchestration.
*/

use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use csv::{ReaderBuilder, Writer};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use geonav::util::round;
use geonav::{DistanceUnit, GeoCoordinate, GeoDistance, GeoError, Latitude, Longitude};

/* ---------------- CONSTANTES ---------------- */

// Required CSV headers (order-independent).
const REQUIRED_HEADERS: &[&str] = &["name_a", "lat_a", "lon_a", "name_b", "lat_b", "lon_b"];

// Environment variable holding the log filter.
const LOG_ENV: &str = "GEONAV_LOG";

/* ---------------- CLI ---------------- */

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Input CSV file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV file path
    #[arg(short, long)]
    output: PathBuf,

    /// Coordinate input format
    #[arg(short = 'f', long, value_enum)]
    input_format: InputFormat,

    /// Distance unit of the output
    #[arg(short, long, value_enum, default_value_t = UnitArg::Km)]
    unit: UnitArg,

    /// Decimal digits kept in DMS seconds and decimal degrees
    #[arg(short, long)]
    digits: Option<u32>,

    /// Strict mode: stop on first error
    #[arg(long)]
    strict: bool,
}

// Supported coordinate formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    Dd,
    Dms,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum UnitArg {
    M,
    Km,
    Mi,
    Nmi,
    Ft,
}

impl From<UnitArg> for DistanceUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::M => DistanceUnit::Meter,
            UnitArg::Km => DistanceUnit::Kilometer,
            UnitArg::Mi => DistanceUnit::Mile,
            UnitArg::Nmi => DistanceUnit::NauticalMile,
            UnitArg::Ft => DistanceUnit::Foot,
        }
    }
}

// Options shared by every row of a run.
#[derive(Debug, Clone, Copy)]
struct RunOptions {
    format: InputFormat,
    unit: DistanceUnit,
    digits: Option<u32>,
    strict: bool,
}

/* ---------------- MAIN ERROR ---------------- */

// Application-level errors.
#[derive(Error, Debug)]
enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header (missing or unreadable)")]
    InvalidHeader,

    #[error("Missing header field '{0}'")]
    MissingHeaderField(String),

    #[error("Unreadable row on line {line}")]
    UnreadableRow { line: usize },

    #[error("Line {line}: invalid coordinate ({source})")]
    InvalidCoordinate { line: usize, source: GeoError },
}

/* ---------------- CSV RECORDS ---------------- */

// Raw input row; both formats are read as text.
#[derive(Debug, Deserialize)]
struct InputRow {
    name_a: String,
    lat_a: String,
    lon_a: String,
    name_b: String,
    lat_b: String,
    lon_b: String,
}

// Output CSV record.
#[derive(Debug, Serialize)]
struct OutputRecord {
    id: u64,

    name_a: String,
    lat_a_dd: f64,
    lon_a_dd: f64,
    lat_a_dms: String,
    lon_a_dms: String,

    name_b: String,
    lat_b_dd: f64,
    lon_b_dd: f64,
    lat_b_dms: String,
    lon_b_dms: String,

    distance: f64,
    unit: &'static str,
    true_bearing: f64,
    signed_bearing: f64,
}

// Processing counters.
#[derive(Debug, Default, PartialEq, Eq)]
struct RunStats {
    written: u64,
    invalid: u64,
}

/* ---------------- MAIN ---------------- */

fn main() -> Result<(), AppError> {
    init_tracing();

    let cli = Cli::parse();
    let options = RunOptions {
        format: cli.input_format,
        unit: cli.unit.into(),
        digits: cli.digits,
        strict: cli.strict,
    };

    let input = File::open(&cli.input)?;
    let output = File::create(&cli.output)?;
    let stats = run(input, output, options)?;

    info!(written = stats.written, invalid = stats.invalid, "run complete");
    if stats.invalid > 0 {
        warn!("{} ignored line(s)", stats.invalid);
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Reads legs from `input` and writes one enriched row per leg to `output`.
fn run<R: Read, W: Write>(input: R, output: W, options: RunOptions) -> Result<RunStats, AppError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
    let mut writer = Writer::from_writer(output);

    // Validate required headers.
    let headers = reader.headers().map_err(|_| AppError::InvalidHeader)?;
    let headers: HashSet<_> = headers.iter().collect();
    for &h in REQUIRED_HEADERS {
        if !headers.contains(h) {
            return Err(AppError::MissingHeaderField(h.to_string()));
        }
    }

    let mut stats = RunStats::default();
    let mut line_no = 1;

    for row in reader.deserialize::<InputRow>() {
        line_no += 1;
        let row = match row {
            Ok(v) => v,
            Err(e) => {
                warn!(line = line_no, error = %e, "unreadable row");
                stats.invalid += 1;
                if options.strict {
                    return Err(AppError::UnreadableRow { line: line_no });
                }
                continue;
            }
        };

        let leg = match build_leg(&row, options) {
            Ok(leg) => leg,
            Err(source) => {
                warn!(line = line_no, error = %source, "invalid coordinate");
                stats.invalid += 1;
                if options.strict {
                    return Err(AppError::InvalidCoordinate {
                        line: line_no,
                        source,
                    });
                }
                continue;
            }
        };

        debug!(line = line_no, %leg, "leg computed");
        stats.written += 1;
        writer.serialize(output_record(stats.written, &leg, options.digits))?;
    }

    writer.flush()?;
    Ok(stats)
}

/* ---------------- ROW PROCESSING ---------------- */

// Parses one endpoint according to the selected format.
fn parse_point(name: &str, lat: &str, lon: &str, format: InputFormat) -> Result<GeoCoordinate, GeoError> {
    let (latitude, longitude) = match format {
        InputFormat::Dd => (
            Latitude::of_degrees(parse_decimal(lat)?),
            Longitude::of_degrees(parse_decimal(lon)?),
        ),
        InputFormat::Dms => (lat.parse::<Latitude>()?, lon.parse::<Longitude>()?),
    };
    if name.trim().is_empty() {
        GeoCoordinate::new(latitude, longitude)
    } else {
        GeoCoordinate::with_name(latitude, longitude, name.trim())
    }
}

fn parse_decimal(value: &str) -> Result<f64, GeoError> {
    value
        .trim()
        .parse()
        .map_err(|_| GeoError::InvalidArgument(format!("`{value}` is not a decimal degree value")))
}

fn build_leg(row: &InputRow, options: RunOptions) -> Result<GeoDistance, GeoError> {
    let a = parse_point(&row.name_a, &row.lat_a, &row.lon_a, options.format)?;
    let b = parse_point(&row.name_b, &row.lat_b, &row.lon_b, options.format)?;
    Ok(GeoDistance::between(a, b, options.unit))
}

fn output_record(id: u64, leg: &GeoDistance, digits: Option<u32>) -> OutputRecord {
    let (a, b) = (leg.start(), leg.target());
    let dd = |value: f64| digits.map_or(value, |d| round(value, d));

    OutputRecord {
        id,
        name_a: a.name().unwrap_or_default().to_string(),
        lat_a_dd: dd(a.latitude().in_degrees()),
        lon_a_dd: dd(a.longitude().in_degrees()),
        lat_a_dms: a.latitude().to_dms(digits),
        lon_a_dms: a.longitude().to_dms(digits),
        name_b: b.name().unwrap_or_default().to_string(),
        lat_b_dd: dd(b.latitude().in_degrees()),
        lon_b_dd: dd(b.longitude().in_degrees()),
        lat_b_dms: b.latitude().to_dms(digits),
        lon_b_dms: b.longitude().to_dms(digits),
        distance: leg.distance().value(),
        unit: leg.unit().symbol(),
        true_bearing: leg.bearing().in_degrees(),
        signed_bearing: leg.bearing().signed_degrees(),
    }
}

/* ---------------- TEST ---------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn options(format: InputFormat, strict: bool) -> RunOptions {
        RunOptions {
            format,
            unit: DistanceUnit::Kilometer,
            digits: Some(3),
            strict,
        }
    }

    fn run_str(input: &str, options: RunOptions) -> Result<(RunStats, String), AppError> {
        let mut out = Vec::new();
        let stats = run(input.as_bytes(), &mut out, options)?;
        Ok((stats, String::from_utf8(out).unwrap()))
    }

    /* --- parse_point --------------------*/
    #[test]
    fn test_parse_point_dd() {
        let p = parse_point("WRO", "51.102772", " 16.885802 ", InputFormat::Dd).unwrap();
        assert_eq!(p.name(), Some("WRO"));
        assert_eq!(p.latitude().in_degrees(), 51.102772);
    }

    #[test]
    fn test_parse_point_dms() {
        let p = parse_point("", "52°14'5.123\"N", "16°53'8.887\"E", InputFormat::Dms).unwrap();
        assert_eq!(p.name(), None);
        assert!((p.latitude().in_degrees() - 52.23475638888889).abs() < 1e-12);
    }

    #[test]
    fn test_parse_point_errors() {
        assert!(matches!(
            parse_point("x", "abc", "1", InputFormat::Dd),
            Err(GeoError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_point("x", "95", "1", InputFormat::Dd),
            Err(GeoError::InvalidArgument(_))
        ));
        assert!(parse_point("x", "52°14'5\"E", "1°E", InputFormat::Dms)
            .unwrap_err()
            .is_parse_error());
    }

    /* --- run --------------------*/
    #[test]
    fn test_run_dd() {
        let input = "name_a,lat_a,lon_a,name_b,lat_b,lon_b\n\
                     WRO,51.102772,16.885802,NYC,40.712671,-74.004655\n";
        let (stats, out) = run_str(input, options(InputFormat::Dd, true)).unwrap();
        assert_eq!(stats, RunStats { written: 1, invalid: 0 });

        let mut lines = out.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,name_a,lat_a_dd,lon_a_dd,lat_a_dms,lon_a_dms,name_b,lat_b_dd,lon_b_dd,lat_b_dms,lon_b_dms,distance,unit,true_bearing,signed_bearing"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("1,WRO,51.103,16.886,"));
        let fields: Vec<&str> = row.split(',').collect();
        let distance: f64 = fields[11].parse().unwrap();
        assert!((distance - 6669.896095258197).abs() < 1e-9);
        assert_eq!(fields[12], "km");
        let signed: f64 = fields[14].parse().unwrap();
        assert!(signed < 0.0);
    }

    #[test]
    fn test_run_dms_headers_any_order() {
        let input = r#"lat_a,lon_a,name_a,lat_b,lon_b,name_b
"52°14'5""N","21°0'42""E",WAW,"50°3'41""N","19°56'18""E",KRK
"#;
        let (stats, out) = run_str(input, options(InputFormat::Dms, true)).unwrap();
        assert_eq!(stats.written, 1);
        assert!(out.contains("WAW"));
    }

    #[test]
    fn test_run_permissive_skips_invalid() {
        let input = "name_a,lat_a,lon_a,name_b,lat_b,lon_b\n\
                     A,0,0,B,0,1\n\
                     C,95,0,D,0,1\n\
                     E,1,1,F,2,2\n";
        let (stats, out) = run_str(input, options(InputFormat::Dd, false)).unwrap();
        assert_eq!(stats, RunStats { written: 2, invalid: 1 });
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().nth(2).unwrap().starts_with("2,E,"));
    }

    #[test]
    fn test_run_strict_stops() {
        let input = "name_a,lat_a,lon_a,name_b,lat_b,lon_b\n\
                     A,0,0,B,0,1\n\
                     C,95,0,D,0,1\n";
        let err = run_str(input, options(InputFormat::Dd, true)).unwrap_err();
        assert!(matches!(err, AppError::InvalidCoordinate { line: 3, .. }));
    }

    #[test]
    fn test_run_missing_header() {
        let input = "name_a,lat_a,lon_a,name_b,lat_b\nA,0,0,B,0\n";
        let err = run_str(input, options(InputFormat::Dd, false)).unwrap_err();
        assert!(matches!(err, AppError::MissingHeaderField(ref h) if h == "lon_b"));
    }

    #[test]
    fn test_unit_arg_mapping() {
        assert_eq!(DistanceUnit::from(UnitArg::Nmi), DistanceUnit::NauticalMile);
        assert_eq!(DistanceUnit::from(UnitArg::Ft), DistanceUnit::Foot);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["geonav", "-i", "in.csv", "-o", "out.csv", "-f", "dms", "--unit", "mi"]).unwrap();
        assert_eq!(cli.input_format, InputFormat::Dms);
        assert_eq!(cli.unit, UnitArg::Mi);
        assert_eq!(cli.digits, None);
        assert!(!cli.strict);
    }
}
