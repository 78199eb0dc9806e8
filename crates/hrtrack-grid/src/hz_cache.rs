//! Habitable-zone radii precomputed for every sample of a track.

use hrtrack_physics::{HzKind, habitable_zone_boundaries_series};
use tracing::debug;

use crate::track::EvolutionaryTrack;

/// Conservative and optimistic `[inner, outer]` habitable-zone radii in AU,
/// aligned index-for-index with the track they were built from.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitableZoneSeries {
    conservative: [Vec<f64>; 2],
    optimistic: [Vec<f64>; 2],
}

impl HabitableZoneSeries {
    /// Compute both zone kinds over the whole track, replacing every
    /// non-finite radius with `fallback_au`.
    pub fn build(track: &EvolutionaryTrack, fallback_au: f64) -> Self {
        let radii = track.radii();
        let log_teffs = track.log_teffs();

        let mut replaced = 0usize;
        let mut compute = |kind: HzKind| {
            habitable_zone_boundaries_series(&radii, &log_teffs, kind).map(|mut row| {
                for value in row.iter_mut().filter(|v| !v.is_finite()) {
                    *value = fallback_au;
                    replaced += 1;
                }
                row
            })
        };
        let conservative = compute(HzKind::Conservative);
        let optimistic = compute(HzKind::Optimistic);

        if replaced > 0 {
            debug!(replaced, fallback_au, "Substituted non-finite habitable zone radii");
        }

        Self {
            conservative,
            optimistic,
        }
    }

    /// Number of samples covered.
    pub fn len(&self) -> usize {
        self.conservative[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `[inner, outer]` rows for `kind`.
    pub fn rows(&self, kind: HzKind) -> &[Vec<f64>; 2] {
        match kind {
            HzKind::Conservative => &self.conservative,
            HzKind::Optimistic => &self.optimistic,
        }
    }

    /// `[inner, outer]` radii for `kind` at sample `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the track.
    pub fn at(&self, kind: HzKind, index: usize) -> [f64; 2] {
        let [inner, outer] = self.rows(kind);
        [inner[index], outer[index]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::TrackSample;
    use hrtrack_physics::{CONSERVATIVE_FALLBACK_AU, habitable_zone_boundaries};

    fn track(points: &[(f64, f64)]) -> EvolutionaryTrack {
        EvolutionaryTrack::new(
            points
                .iter()
                .enumerate()
                .map(|(i, &(radius, log_teff))| TrackSample {
                    age: i as f64 * 1.0e8,
                    log_teff,
                    log_lum: 0.0,
                    radius,
                    mass: 1.0,
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_aligned_with_track() {
        let t = track(&[(1.0, 3.76), (1.2, 3.75), (10.0, 3.6), (0.01, 4.5)]);
        let hz = HabitableZoneSeries::build(&t, CONSERVATIVE_FALLBACK_AU);
        assert_eq!(hz.len(), t.len());
        for kind in [HzKind::Conservative, HzKind::Optimistic] {
            for row in hz.rows(kind) {
                assert_eq!(row.len(), t.len());
            }
        }
    }

    #[test]
    fn test_matches_formula_per_sample() {
        let t = track(&[(1.0, 3.76), (2.5, 3.65)]);
        let hz = HabitableZoneSeries::build(&t, CONSERVATIVE_FALLBACK_AU);
        for (i, s) in t.samples().iter().enumerate() {
            assert_eq!(
                hz.at(HzKind::Conservative, i),
                habitable_zone_boundaries(s.radius, s.log_teff, HzKind::Conservative)
            );
            assert_eq!(
                hz.at(HzKind::Optimistic, i),
                habitable_zone_boundaries(s.radius, s.log_teff, HzKind::Optimistic)
            );
        }
    }

    #[test]
    fn test_non_finite_replaced_by_fallback() {
        let t = track(&[(1.0, 3.76), (f64::NAN, 3.7), (1.0, f64::NAN)]);
        let hz = HabitableZoneSeries::build(&t, 500.0);
        assert_eq!(hz.at(HzKind::Conservative, 1), [500.0, 500.0]);
        assert_eq!(hz.at(HzKind::Optimistic, 2), [500.0, 500.0]);
        for kind in [HzKind::Conservative, HzKind::Optimistic] {
            assert!(hz.rows(kind).iter().flatten().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_secondary_fallback_value() {
        let t = track(&[(f64::NAN, 3.7), (1.0, 3.7)]);
        let hz = HabitableZoneSeries::build(&t, hrtrack_physics::SECONDARY_FALLBACK_AU);
        assert_eq!(hz.at(HzKind::Conservative, 0), [0.1, 0.1]);
    }
}
