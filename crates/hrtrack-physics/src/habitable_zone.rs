//! Habitable-zone flux limits and boundaries after Kopparapu et al. (2014).
//!
//! Each boundary curve is a quartic in `Teff - 5780` giving the effective
//! stellar flux (in Earth units) at which that climate limit is reached. The
//! orbital distance of the limit then follows from the star's luminosity.

use std::fmt;
use std::str::FromStr;

use crate::constants::{HZ_MAX_TEFF, HZ_MIN_TEFF, HZ_REFERENCE_TEFF, SOLAR_TEFF};
use crate::error::PhysicsError;

/// Named habitable-zone boundary curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HzCurve {
    RecentVenus,
    RunawayGreenhouse,
    MaximumGreenhouse,
    EarlyMars,
    RunawayGreenhouse5EarthMass,
    RunawayGreenhouse01EarthMass,
}

impl HzCurve {
    /// All curves, in table order.
    pub const ALL: [HzCurve; 6] = [
        HzCurve::RecentVenus,
        HzCurve::RunawayGreenhouse,
        HzCurve::MaximumGreenhouse,
        HzCurve::EarlyMars,
        HzCurve::RunawayGreenhouse5EarthMass,
        HzCurve::RunawayGreenhouse01EarthMass,
    ];

    /// `[S_eff_sun, a, b, c, d]` for this curve.
    pub const fn coefficients(self) -> [f64; 5] {
        match self {
            HzCurve::RecentVenus => [1.776, 2.136e-4, 2.533e-8, -1.332e-11, -3.097e-15],
            HzCurve::RunawayGreenhouse => [1.107, 1.332e-4, 1.580e-8, -8.308e-12, -1.931e-15],
            HzCurve::MaximumGreenhouse => [0.356, 6.171e-5, 1.698e-9, -3.198e-12, -5.575e-16],
            HzCurve::EarlyMars => [0.320, 5.547e-5, 1.526e-9, -2.874e-12, -5.011e-16],
            HzCurve::RunawayGreenhouse5EarthMass => {
                [1.188, 1.433e-4, 1.707e-8, -8.968e-12, -2.084e-15]
            }
            HzCurve::RunawayGreenhouse01EarthMass => {
                [0.99, 1.209e-4, 1.404e-8, -7.418e-12, -1.713e-15]
            }
        }
    }

    /// Human-readable curve name.
    pub const fn label(self) -> &'static str {
        match self {
            HzCurve::RecentVenus => "Recent Venus",
            HzCurve::RunawayGreenhouse => "Runaway Greenhouse",
            HzCurve::MaximumGreenhouse => "Maximum Greenhouse",
            HzCurve::EarlyMars => "Early Mars",
            HzCurve::RunawayGreenhouse5EarthMass => "Runaway Greenhouse for 5 ME",
            HzCurve::RunawayGreenhouse01EarthMass => "Runaway Greenhouse for 0.1 ME",
        }
    }

    /// Effective flux limit (Earth units) at temperature `teff` in Kelvin.
    pub fn flux(self, teff: f64) -> f64 {
        let [seff, a, b, c, d] = self.coefficients();
        let ts = teff - HZ_REFERENCE_TEFF;
        seff + a * ts + b * ts.powi(2) + c * ts.powi(3) + d * ts.powi(4)
    }
}

/// Which pair of curves bounds the habitable zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HzKind {
    /// Runaway Greenhouse (inner) to Maximum Greenhouse (outer).
    #[default]
    Conservative,
    /// Recent Venus (inner) to Early Mars (outer).
    Optimistic,
}

impl HzKind {
    /// The `[inner, outer]` curves for this kind.
    pub const fn curves(self) -> [HzCurve; 2] {
        match self {
            HzKind::Conservative => [HzCurve::RunawayGreenhouse, HzCurve::MaximumGreenhouse],
            HzKind::Optimistic => [HzCurve::RecentVenus, HzCurve::EarlyMars],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HzKind::Conservative => "conservative",
            HzKind::Optimistic => "optimistic",
        }
    }
}

impl fmt::Display for HzKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HzKind {
    type Err = PhysicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conservative" => Ok(HzKind::Conservative),
            "optimistic" => Ok(HzKind::Optimistic),
            other => Err(PhysicsError::InvalidHzKind(other.to_string())),
        }
    }
}

/// `[inner, outer]` flux limits at `teff` Kelvin.
pub fn habitable_zone_flux(teff: f64, kind: HzKind) -> [f64; 2] {
    kind.curves().map(|curve| curve.flux(teff))
}

/// Flux limits for many temperatures: a 2×M array of `[inner, outer]` rows.
pub fn habitable_zone_flux_series(teffs: &[f64], kind: HzKind) -> [Vec<f64>; 2] {
    kind.curves()
        .map(|curve| teffs.iter().map(|&t| curve.flux(t)).collect())
}

/// `[inner, outer]` habitable-zone radii in AU for a star of `radius` solar
/// radii and the given `log10(Teff)`.
///
/// The temperature is clamped to the range the polynomial fit covers. The
/// result is non-finite when the inputs are (NaN radius or temperature), and
/// callers substitute their own fallback.
pub fn habitable_zone_boundaries(radius: f64, log_teff: f64, kind: HzKind) -> [f64; 2] {
    let teff = clamp_teff(10f64.powf(log_teff));
    let scale = radius * (teff / SOLAR_TEFF).powi(2);
    habitable_zone_flux(teff, kind).map(|flux| scale / flux.abs().sqrt())
}

/// Boundaries for whole sample arrays; `radii` and `log_teffs` are paired
/// index-for-index.
pub fn habitable_zone_boundaries_series(
    radii: &[f64],
    log_teffs: &[f64],
    kind: HzKind,
) -> [Vec<f64>; 2] {
    debug_assert_eq!(radii.len(), log_teffs.len());
    let mut inner = Vec::with_capacity(radii.len());
    let mut outer = Vec::with_capacity(radii.len());
    for (&radius, &log_teff) in radii.iter().zip(log_teffs) {
        let [i, o] = habitable_zone_boundaries(radius, log_teff, kind);
        inner.push(i);
        outer.push(o);
    }
    [inner, outer]
}

/// Stellar flux at 1 AU relative to what the Earth receives from the Sun.
pub fn instellation(radius: f64, log_teff: f64) -> f64 {
    let t = 10f64.powf(log_teff) / SOLAR_TEFF;
    radius.powi(2) * t.powi(4)
}

// NaN passes through `f64::clamp` unchanged, which keeps bad samples visible
// to the fallback substitution.
fn clamp_teff(teff: f64) -> f64 {
    teff.clamp(HZ_MIN_TEFF, HZ_MAX_TEFF)
}
