//! Grid and track error types.

use std::fmt;
use std::path::PathBuf;

use hrtrack_physics::PhysicsError;

/// One axis of the model grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Mass,
    Metallicity,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Mass => f.write_str("starMass"),
            Axis::Metallicity => f.write_str("starMetallicity"),
        }
    }
}

/// Invariant violations in an evolutionary track.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackError {
    /// A track needs at least two samples to animate and to span an age range.
    #[error("track has {0} samples, at least 2 are required")]
    TooFewSamples(usize),

    /// Ages must strictly increase from one sample to the next.
    #[error("sample {index} has age {age} which does not follow {previous}")]
    NonMonotonicAge {
        index: usize,
        age: f64,
        previous: f64,
    },
}

/// Errors from grid lookup and grid data loading.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A requested value lies outside the grid's axis range.
    #[error("{axis} must be in the range [{min}, {max}], got {value}")]
    OutOfRange {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A grid key with a NaN or infinite coordinate.
    #[error("grid key must be finite, got metallicity {metallicity} and mass {mass}")]
    NonFiniteKey { metallicity: f64, mass: f64 },

    /// No track is stored under the exact key.
    #[error("no track for metallicity {metallicity} and mass {mass}")]
    NotFound { metallicity: f64, mass: f64 },

    /// The grid has no values along an axis.
    #[error("grid has no {0} values")]
    EmptyAxis(Axis),

    /// A stored track violates the track invariants.
    #[error("invalid track for metallicity {metallicity} and mass {mass}: {source}")]
    Track {
        metallicity: f64,
        mass: f64,
        #[source]
        source: TrackError,
    },

    /// Failed to read a data file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a data file.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The color calibration data was unusable.
    #[error(transparent)]
    Physics(#[from] PhysicsError),
}
