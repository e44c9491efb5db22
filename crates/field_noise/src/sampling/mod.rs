//! Sampling strategies for generating sample points in a 3D domain.
//!
//! Point clouds produced here drive batch evaluation, border statistics and previews.
//! Domains are axis-aligned boxes centered at the origin; callers translate the result.
use mint::Vector3;
use rand::Rng;

pub mod jitter_grid;
pub mod uniform_random;

pub use jitter_grid::JitterGridSampling;
pub use uniform_random::UniformRandomSampling;

/// Trait for point sampling.
pub trait PointSampling: Send + Sync {
    fn generate(&self, domain_extent: Vector3<f32>, rng: &mut dyn Rng) -> Vec<Vector3<f32>>;
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn Rng) -> f32 {
    (rng.next_u32() >> 8) as f32 / 16_777_216.0
}

/// Compute the next smaller representable float value.
///
/// Returns a value that is strictly less than the input, useful for
/// ensuring bounds are strictly inside a domain.
#[inline]
pub(crate) fn next_down(val: f32) -> f32 {
    if val.is_nan() {
        return f32::NAN;
    }

    if val == f32::NEG_INFINITY {
        return f32::NEG_INFINITY;
    }

    if val == f32::INFINITY {
        return f32::MAX;
    }

    if val == 0.0 {
        return -f32::MIN_POSITIVE;
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f32::from_bits(bits.saturating_sub(1))
    } else {
        f32::from_bits(bits.saturating_add(1))
    }
}

/// Returns `true` when every component of the extent is positive and finite.
#[inline]
pub(crate) fn extent_is_valid(extent: Vector3<f32>) -> bool {
    [extent.x, extent.y, extent.z]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0)
}
