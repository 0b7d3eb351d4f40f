use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use keplerkit::{cartesian_to_keplerian, keplerian_to_cartesian, KeplerianElements};

const MU_EARTH: f64 = 398600.433;

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

fn random_elements(rng: &mut StdRng, e_range: std::ops::Range<f64>) -> KeplerianElements {
    KeplerianElements {
        semi_major_axis: rng.random_range(6600.0..50000.0),
        eccentricity: rng.random_range(e_range),
        inclination: rng.random_range(0.01..3.13),
        ascending_node_longitude: rand_angle(rng),
        periapsis_argument: rand_angle(rng),
        true_anomaly: rand_angle(rng),
    }
}

/// Elements → state: e ∈ [0.001, 0.7]
fn bench_kep2car(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("keplerian_to_cartesian/elliptic", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| random_elements(&mut rng, 0.001..0.7))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for kep in &cases {
                    black_box(keplerian_to_cartesian(black_box(kep), MU_EARTH).ok());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// State → elements on states generated from random elliptic orbits.
fn bench_car2kep(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("cartesian_to_keplerian/elliptic", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .filter_map(|_| {
                        keplerian_to_cartesian(&random_elements(&mut rng, 0.001..0.7), MU_EARTH)
                            .ok()
                    })
                    .collect::<Vec<_>>()
            },
            |states| {
                for s in &states {
                    black_box(cartesian_to_keplerian(black_box(s), MU_EARTH).ok());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Full round trip on a fixed LEO state.
fn bench_fixed_round_trip(c: &mut Criterion) {
    let kep = KeplerianElements {
        semi_major_axis: 7000.0,
        eccentricity: 0.01,
        inclination: 0.9,
        ascending_node_longitude: 0.5,
        periapsis_argument: 1.0,
        true_anomaly: 0.2,
    };

    c.bench_function("round_trip/fixed_leo", |b| {
        b.iter(|| {
            let s = keplerian_to_cartesian(black_box(&kep), MU_EARTH);
            black_box(s.and_then(|s| cartesian_to_keplerian(&s, MU_EARTH)).ok());
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_kep2car, bench_car2kep, bench_fixed_round_trip
);
criterion_main!(benches);
