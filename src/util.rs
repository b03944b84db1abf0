// src/util.rs

/* ---------------- NUMERIC UTILS -------------- */

// Rounds to `digits` decimals. Anything above 10 is treated as 10.
pub fn round(value: f64, digits: u32) -> f64 {
    let scale = 10_f64.powi(digits.min(10) as i32);
    (value * scale).round() / scale
}

// Renders a value either at full precision or rounded to `digits` decimals.
pub(crate) fn render(value: f64, digits: Option<u32>) -> String {
    match digits {
        Some(d) => format!("{}", round(value, d)),
        None => format!("{value}"),
    }
}

/* ---------------- GEO COMPARISON --------------- */

// Per-axis margin, in decimal degrees, for coordinate equality.
#[derive(Debug, Copy, Clone)]
pub struct GeoTolerance {
    pub deg: f64,
}

impl GeoTolerance {
    // 1e-6° is about 0.11 m along a meridian.
    pub const DEFAULT: Self = Self { deg: 1e-6 };

    pub fn of_degrees(deg: f64) -> Self {
        Self { deg }
    }
}

fn within(a: f64, b: f64, tol: GeoTolerance) -> bool {
    (a - b).abs() <= tol.deg
}

// Outcome of comparing two positions axis by axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMatch {
    pub lat: bool,
    pub lon: bool,
    pub both: bool,
}

// Compares latitude and longitude separately against the same tolerance.
pub fn compare_axes(
    lat_a: f64,
    lon_a: f64,
    lat_b: f64,
    lon_b: f64,
    tol: GeoTolerance,
) -> AxisMatch {
    let lat = within(lat_a, lat_b, tol);
    let lon = within(lon_a, lon_b, tol);

    AxisMatch {
        lat,
        lon,
        both: lat && lon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_basic() {
        assert_eq!(round(1.23456, 2), 1.23);
        assert_eq!(round(1.23556, 2), 1.24);
        assert_eq!(round(-1.23456, 3), -1.235);
    }

    #[test]
    fn test_round_caps_precision() {
        assert_eq!(round(0.5, 30), round(0.5, 10));
    }

    #[test]
    fn test_render() {
        assert_eq!(render(52.123456789, Some(3)), "52.123");
        assert_eq!(render(1.5, None), "1.5");
    }

    #[test]
    fn test_compare_axes() {
        let m = compare_axes(10.0, 20.0, 10.0000005, 20.1, GeoTolerance::DEFAULT);
        assert_eq!(m, AxisMatch { lat: true, lon: false, both: false });
        let m = compare_axes(10.0, 20.0, 10.05, 20.05, GeoTolerance::of_degrees(0.1));
        assert!(m.both);
    }
}
