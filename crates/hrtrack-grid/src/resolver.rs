//! Resolving requested star parameters onto the discrete model grid.
//!
//! Requests between grid values are rounded *up* to the next available value
//! (the left insertion point), never to the nearest one. No interpolation
//! between neighbouring tracks takes place.

use std::fmt;

use tracing::{debug, info};

use crate::error::{Axis, GridError};
use crate::provider::{GridKey, TrackGrid};
use crate::track::EvolutionaryTrack;

/// Metallicity of the main-sequence reference sweep.
pub const REFERENCE_METALLICITY: f64 = 0.0;

/// Mass step of the main-sequence reference sweep, in solar masses.
pub const REFERENCE_MASS_STEP: f64 = 0.1;

/// Exclusive upper mass of the main-sequence reference sweep.
pub const REFERENCE_MASS_LIMIT: f64 = 300.0;

/// A requested value that was replaced by a grid value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapNotice {
    pub axis: Axis,
    pub requested: f64,
    pub snapped: f64,
}

impl fmt::Display for SnapNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.axis {
            Axis::Mass => "mass",
            Axis::Metallicity => "metallicity",
        };
        write!(
            f,
            "{} is not an allowed {name}, choosing {}",
            self.requested, self.snapped
        )
    }
}

/// Snap `requested` onto the ascending axis `values`.
///
/// Returns the grid value and, when it differs from the request, a notice
/// describing the substitution.
pub fn snap_to_axis(
    values: &[f64],
    requested: f64,
    axis: Axis,
) -> Result<(f64, Option<SnapNotice>), GridError> {
    let (Some(&min), Some(&max)) = (values.first(), values.last()) else {
        return Err(GridError::EmptyAxis(axis));
    };
    if !(min..=max).contains(&requested) {
        return Err(GridError::OutOfRange {
            axis,
            value: requested,
            min,
            max,
        });
    }

    let idx = values.partition_point(|&v| v < requested);
    let snapped = values[idx];
    if snapped == requested {
        Ok((snapped, None))
    } else {
        Ok((
            snapped,
            Some(SnapNotice {
                axis,
                requested,
                snapped,
            }),
        ))
    }
}

/// A track resolved for a snapped (metallicity, mass) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTrack {
    /// Grid mass actually used.
    pub mass: f64,
    /// Grid metallicity actually used.
    pub metallicity: f64,
    /// Substitutions made while snapping.
    pub notices: Vec<SnapNotice>,
    /// The evolutionary track at the snapped key.
    pub track: EvolutionaryTrack,
}

impl ResolvedTrack {
    pub fn key(&self) -> GridKey {
        GridKey::new(self.metallicity, self.mass)
    }
}

/// Resolves requested star parameters against a [`TrackGrid`].
pub struct TrackResolver<'g, G: TrackGrid + ?Sized> {
    grid: &'g G,
}

impl<'g, G: TrackGrid + ?Sized> TrackResolver<'g, G> {
    pub fn new(grid: &'g G) -> Self {
        Self { grid }
    }

    /// Snap `mass` and `metallicity` onto the grid and fetch the track.
    ///
    /// Each axis is range-checked independently; a value outside the axis
    /// bounds is an error naming those bounds.
    pub fn resolve(&self, mass: f64, metallicity: f64) -> Result<ResolvedTrack, GridError> {
        let mut notices = Vec::new();

        let (mass, notice) = snap_to_axis(self.grid.available_masses(), mass, Axis::Mass)?;
        notices.extend(notice);
        let (metallicity, notice) = snap_to_axis(
            self.grid.available_metallicities(),
            metallicity,
            Axis::Metallicity,
        )?;
        notices.extend(notice);

        for notice in &notices {
            info!("{notice}");
        }

        let track = self.grid.track_for(GridKey::new(metallicity, mass))?.clone();
        debug!(
            mass,
            metallicity,
            samples = track.len(),
            "Resolved evolutionary track"
        );

        Ok(ResolvedTrack {
            mass,
            metallicity,
            notices,
            track,
        })
    }

    /// See [`main_sequence_reference_curve`].
    pub fn main_sequence_reference_curve(&self) -> Vec<(f64, f64)> {
        main_sequence_reference_curve(self.grid)
    }
}

/// A "middle-aged" main sequence: for masses 0.1, 0.2, … below 300 at solar
/// metallicity, the `(log_teff, log_lum)` of each track's temporal midpoint
/// sample. Masses without a track are skipped.
pub fn main_sequence_reference_curve<G: TrackGrid + ?Sized>(grid: &G) -> Vec<(f64, f64)> {
    let steps = (REFERENCE_MASS_LIMIT / REFERENCE_MASS_STEP).round() as u32;
    let mut curve = Vec::new();
    let mut skipped = 0usize;

    // i / 10 is the correctly rounded decimal, so it matches grid keys parsed
    // from text exactly.
    for i in 1..steps {
        let mass = f64::from(i) / 10.0;
        match grid.track_for(GridKey::new(REFERENCE_METALLICITY, mass)) {
            Ok(track) => {
                let mid = &track.samples()[track.temporal_midpoint_index()];
                curve.push((mid.log_teff, mid.log_lum));
            }
            Err(_) => skipped += 1,
        }
    }

    debug!(
        points = curve.len(),
        skipped, "Built main-sequence reference curve"
    );
    curve
}
