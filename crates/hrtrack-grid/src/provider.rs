//! The model-grid provider interface and its in-memory implementation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Axis, GridError};
use crate::track::{EvolutionaryTrack, TrackSample};

/// Exact grid coordinates of one track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridKey {
    /// Initial metallicity [Fe/H] in dex.
    pub metallicity: f64,
    /// Initial mass in solar masses.
    pub mass: f64,
}

impl GridKey {
    pub fn new(metallicity: f64, mass: f64) -> Self {
        Self { metallicity, mass }
    }

    // -0.0 and 0.0 must index the same track.
    fn bits(self) -> (u64, u64) {
        fn canonical(v: f64) -> u64 {
            if v == 0.0 { 0 } else { v.to_bits() }
        }
        (canonical(self.metallicity), canonical(self.mass))
    }
}

/// Read-only access to a discrete grid of evolutionary tracks.
pub trait TrackGrid {
    /// Available initial masses, ascending and unique.
    fn available_masses(&self) -> &[f64];

    /// Available metallicities, ascending and unique.
    fn available_metallicities(&self) -> &[f64];

    /// Track stored under exactly `key`.
    fn track_for(&self, key: GridKey) -> Result<&EvolutionaryTrack, GridError>;

    /// Available values along one axis.
    fn axis_values(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::Mass => self.available_masses(),
            Axis::Metallicity => self.available_metallicities(),
        }
    }
}

/// Serialized form of one track in a grid file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub metallicity: f64,
    pub mass: f64,
    pub samples: Vec<TrackSample>,
}

/// A grid held entirely in memory, indexed by exact key.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGrid {
    masses: Vec<f64>,
    metallicities: Vec<f64>,
    tracks: FxHashMap<(u64, u64), EvolutionaryTrack>,
}

impl InMemoryGrid {
    /// Build a grid from track records, validating every track.
    ///
    /// Later records replace earlier ones with the same key.
    pub fn from_records(records: Vec<TrackRecord>) -> Result<Self, GridError> {
        let mut grid = Self::default();
        for record in records {
            let track =
                EvolutionaryTrack::new(record.samples).map_err(|source| GridError::Track {
                    metallicity: record.metallicity,
                    mass: record.mass,
                    source,
                })?;
            grid.insert(GridKey::new(record.metallicity, record.mass), track)?;
        }
        Ok(grid)
    }

    /// Add or replace a track. Fails on a NaN or infinite key.
    pub fn insert(&mut self, key: GridKey, track: EvolutionaryTrack) -> Result<(), GridError> {
        if !(key.mass.is_finite() && key.metallicity.is_finite()) {
            return Err(GridError::NonFiniteKey {
                metallicity: key.metallicity,
                mass: key.mass,
            });
        }
        insert_sorted(&mut self.masses, key.mass);
        insert_sorted(&mut self.metallicities, key.metallicity);
        self.tracks.insert(key.bits(), track);
        Ok(())
    }

    /// Number of stored tracks.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}

impl TrackGrid for InMemoryGrid {
    fn available_masses(&self) -> &[f64] {
        &self.masses
    }

    fn available_metallicities(&self) -> &[f64] {
        &self.metallicities
    }

    fn track_for(&self, key: GridKey) -> Result<&EvolutionaryTrack, GridError> {
        self.tracks.get(&key.bits()).ok_or(GridError::NotFound {
            metallicity: key.metallicity,
            mass: key.mass,
        })
    }
}

fn insert_sorted(values: &mut Vec<f64>, value: f64) {
    let idx = values.partition_point(|&v| v < value);
    if values.get(idx) != Some(&value) {
        values.insert(idx, value);
    }
}
