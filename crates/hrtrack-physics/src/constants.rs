//! Physical and display constants.

/// Solar radii per astronomical unit.
pub const AU_IN_SOLAR_RADII: f64 = 215.032;

/// Earth radius in solar radii.
pub const EARTH_TO_SUN_RADIUS: f64 = 0.0091577;

/// Solar effective temperature (K) used for flux scaling.
pub const SOLAR_TEFF: f64 = 5778.0;

/// Reference temperature (K) the habitable-zone polynomials are centered on.
pub const HZ_REFERENCE_TEFF: f64 = 5780.0;

/// Lower edge of the temperature range the habitable-zone fit is valid for.
pub const HZ_MIN_TEFF: f64 = 2600.0;

/// Upper edge of the temperature range the habitable-zone fit is valid for.
pub const HZ_MAX_TEFF: f64 = 7200.0;

/// Substitute for non-finite habitable-zone radii in the per-track cache (AU).
pub const CONSERVATIVE_FALLBACK_AU: f64 = 500.0;

/// Substitute for non-finite habitable-zone radii in secondary displays (AU).
pub const SECONDARY_FALLBACK_AU: f64 = 0.1;
