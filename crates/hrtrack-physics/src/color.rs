//! Star color from effective temperature via a calibrated lookup table.

use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;

/// Linear RGB color with channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a color from its three channels.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Convert to 8-bit channels, clamping out-of-range values.
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

/// One row of the temperature/color calibration data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRow {
    /// Temperature in Kelvin.
    pub temperature: f64,
    /// Calibration type, e.g. `"2deg"` or `"10deg"` observer.
    pub calibration: String,
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Temperature to RGB lookup for a single calibration type, sorted by
/// ascending temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    temperatures: Vec<f64>,
    red: Vec<f64>,
    green: Vec<f64>,
    blue: Vec<f64>,
}

impl ColorTable {
    /// Build a table from raw rows, keeping only those whose calibration
    /// matches `calibration`.
    pub fn from_rows(rows: &[ColorRow], calibration: &str) -> Result<Self, PhysicsError> {
        let mut selected: Vec<&ColorRow> = rows
            .iter()
            .filter(|row| row.calibration == calibration && row.temperature.is_finite())
            .collect();
        if selected.is_empty() {
            return Err(PhysicsError::EmptyColorTable(calibration.to_string()));
        }
        selected.sort_by(|a, b| a.temperature.total_cmp(&b.temperature));

        Ok(Self {
            temperatures: selected.iter().map(|r| r.temperature).collect(),
            red: selected.iter().map(|r| r.r).collect(),
            green: selected.iter().map(|r| r.g).collect(),
            blue: selected.iter().map(|r| r.b).collect(),
        })
    }

    /// Number of calibration rows.
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    /// Whether the table has no rows. Never true for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// Color for a temperature in Kelvin, clamped to the table edges.
    pub fn color_at(&self, teff: f64) -> Rgb {
        Rgb {
            r: interp(teff, &self.temperatures, &self.red),
            g: interp(teff, &self.temperatures, &self.green),
            b: interp(teff, &self.temperatures, &self.blue),
        }
    }

    /// Color of a star with the given `log10(Teff)`.
    pub fn star_color(&self, log_teff: f64) -> Rgb {
        self.color_at(10f64.powf(log_teff))
    }
}

/// One-dimensional linear interpolation of `x` over the ascending sample
/// points `xp` with values `fp`.
///
/// Values left of the first point take `fp[0]`, values right of the last take
/// the last value. Returns NaN for empty input.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert_eq!(xp.len(), fp.len());
    let n = xp.len().min(fp.len());
    if n == 0 || x.is_nan() {
        return f64::NAN;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }
    // First index with xp[i] > x; 1 <= hi <= n - 1 given the checks above.
    let hi = xp[..n].partition_point(|&p| p <= x);
    let lo = hi - 1;
    let span = xp[hi] - xp[lo];
    if span == 0.0 {
        return fp[hi];
    }
    let t = (x - xp[lo]) / span;
    fp[lo] + t * (fp[hi] - fp[lo])
}
