use std::time::Duration;

use criterion::{Criterion, Throughput};
use field_noise::sampling::{PointSampling, UniformRandomSampling};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub const NOISE_SEED: u32 = 1337;

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Reproducible cloud of `count` points in a cube of side 16 around the origin.
#[allow(dead_code)]
pub fn point_cloud(count: usize) -> Vec<Vec3> {
    UniformRandomSampling::new(count)
        .generate(Vec3::splat(16.0).into(), &mut StdRng::seed_from_u64(0xA11CE))
        .into_iter()
        .map(Vec3::from)
        .collect()
}
