//! Evolutionary tracks: age-ordered stellar states at fixed initial mass and
//! metallicity.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::TrackError;

/// One modeled stellar state along a track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSample {
    /// Age in years.
    pub age: f64,
    /// `log10` of the effective temperature in Kelvin.
    pub log_teff: f64,
    /// `log10` of the luminosity in solar units.
    pub log_lum: f64,
    /// Radius in solar radii.
    pub radius: f64,
    /// Current mass in solar masses.
    pub mass: f64,
}

/// An immutable, strictly age-ordered sequence of at least two samples.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionaryTrack {
    samples: Vec<TrackSample>,
}

impl EvolutionaryTrack {
    /// Validate and wrap a sample list.
    pub fn new(samples: Vec<TrackSample>) -> Result<Self, TrackError> {
        if samples.len() < 2 {
            return Err(TrackError::TooFewSamples(samples.len()));
        }
        for (index, pair) in samples.windows(2).enumerate() {
            // Also rejects NaN ages.
            if pair[1].age.partial_cmp(&pair[0].age) != Some(Ordering::Greater) {
                return Err(TrackError::NonMonotonicAge {
                    index: index + 1,
                    age: pair[1].age,
                    previous: pair[0].age,
                });
            }
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[TrackSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: a track holds at least two samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&TrackSample> {
        self.samples.get(index)
    }

    pub fn first(&self) -> &TrackSample {
        &self.samples[0]
    }

    pub fn last(&self) -> &TrackSample {
        &self.samples[self.samples.len() - 1]
    }

    pub fn min_age(&self) -> f64 {
        self.first().age
    }

    pub fn max_age(&self) -> f64 {
        self.last().age
    }

    /// Fraction of the track's age span elapsed at `age`.
    pub fn age_fraction(&self, age: f64) -> f64 {
        (age - self.min_age()) / (self.max_age() - self.min_age())
    }

    /// Index of the first sample at or after the temporal midpoint of the
    /// track, i.e. the midpoint by age rather than by index.
    pub fn temporal_midpoint_index(&self) -> usize {
        let mid_age = self.min_age() + (self.max_age() - self.min_age()) / 2.0;
        self.samples.partition_point(|s| s.age < mid_age)
    }

    pub fn log_teffs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.log_teff).collect()
    }

    pub fn radii(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.radius).collect()
    }
}
