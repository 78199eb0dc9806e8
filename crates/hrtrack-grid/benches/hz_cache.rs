//! Benchmarks for building the per-track habitable-zone cache.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hrtrack_grid::{EvolutionaryTrack, HabitableZoneSeries, TrackSample};
use hrtrack_physics::CONSERVATIVE_FALLBACK_AU;

fn synthetic_track(samples: usize) -> EvolutionaryTrack {
    let samples = (0..samples)
        .map(|i| {
            let f = i as f64 / samples as f64;
            TrackSample {
                age: f * 1.2e10,
                log_teff: 3.76 - 0.3 * f * f,
                log_lum: 3.0 * f * f,
                radius: 1.0 + 150.0 * f.powi(4),
                mass: 1.0 - 0.4 * f.powi(6),
            }
        })
        .collect();
    // Ages are strictly increasing by construction.
    EvolutionaryTrack::new(samples).unwrap()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("hz_cache_build");
    for &n in &[256usize, 1_500, 10_000] {
        let track = synthetic_track(n);
        group.bench_function(format!("{n}_samples"), |b| {
            b.iter(|| HabitableZoneSeries::build(black_box(&track), CONSERVATIVE_FALLBACK_AU));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
