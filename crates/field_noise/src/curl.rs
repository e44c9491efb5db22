//! Curl of a vector noise field by central differences.
//!
//! The curl of any smooth vector field is divergence-free, which makes it a cheap source of
//! incompressible-looking flow. Each component is estimated from six noise samples at
//! `p ± CURL_STEP` along the axes.
use glam::Vec3;

use crate::config::{CurlBackend, CurlConfig};
use crate::oracle::NoiseOracle;

/// Finite-difference step of the curl estimate.
pub const CURL_STEP: f32 = 1e-4;

/// Curl of the configured vector noise at `p`, which is already in scaled field space.
///
/// Differences across `2 * CURL_STEP` are divided by `CURL_STEP`, so the result is twice
/// the analytic curl of the sampled noise.
pub fn curl<O: NoiseOracle>(oracle: &O, p: Vec3, config: &CurlConfig) -> Vec3 {
    let field = |q: Vec3| match config.backend {
        CurlBackend::SpaceTime => {
            oracle.vector_noise4(q, config.time, config.octaves, config.lacunarity)
        }
        CurlBackend::Fractal { gain } => {
            oracle.vector_noise3(q, config.octaves, config.lacunarity, gain)
        }
    };
    curl_of(field, p, CURL_STEP)
}

/// Central-difference curl of `field` at `p` with step `h`.
pub fn curl_of<F: Fn(Vec3) -> Vec3>(field: F, p: Vec3, h: f32) -> Vec3 {
    let dx = field(p + Vec3::X * h) - field(p - Vec3::X * h);
    let dy = field(p + Vec3::Y * h) - field(p - Vec3::Y * h);
    let dz = field(p + Vec3::Z * h) - field(p - Vec3::Z * h);

    Vec3::new(dy.z - dz.y, dz.x - dx.z, dx.y - dy.x) / h
}
