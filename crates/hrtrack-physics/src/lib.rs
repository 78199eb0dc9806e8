//! Stellar physics for the HR-diagram animation: star color from effective
//! temperature, habitable-zone boundaries and instellation.
//!
//! Everything here is a pure function of its inputs. The only data is the
//! [`ColorTable`], which is loaded once and shared by reference.

pub mod color;
pub mod constants;
mod error;
pub mod habitable_zone;

pub use color::{ColorRow, ColorTable, Rgb, interp};
pub use constants::*;
pub use error::PhysicsError;
pub use habitable_zone::{
    HzCurve, HzKind, habitable_zone_boundaries, habitable_zone_boundaries_series,
    habitable_zone_flux, habitable_zone_flux_series, instellation,
};
