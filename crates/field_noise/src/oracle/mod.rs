//! Base noise capability consumed by the field evaluators.
//!
//! The curl and cellular fields never generate lattice noise themselves. They combine
//! and differentiate whatever a [`NoiseOracle`] returns, so any deterministic,
//! band-limited noise source can be wired in. [`LatticeNoise`] is the bundled
//! reference implementation.
use glam::Vec3;

pub mod lattice;

pub use lattice::LatticeNoise;

/// One ranked feature point as seen from a sample point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeaturePoint {
    /// Euclidean distance from the sample point to the feature point.
    pub distance: f32,
    /// `sample - feature`, so the feature point sits at `sample - offset`.
    pub offset: Vec3,
}

/// The `N` nearest feature points, ascending by distance.
pub type RankedFeaturePoints<const N: usize> = [FeaturePoint; N];

/// Deterministic noise source used by the curl and cellular fields.
///
/// Implementations must return the same value for the same input on every call and
/// must be continuous in `p`. They are shared read-only across evaluation threads.
pub trait NoiseOracle: Send + Sync {
    /// Fractal scalar noise.
    fn scalar_noise3(&self, p: Vec3, octaves: u32, lacunarity: f32) -> f32;

    /// Fractal vector noise over space and time.
    fn vector_noise4(&self, p: Vec3, time: f32, octaves: u32, lacunarity: f32) -> Vec3;

    /// Fractal vector noise over space with an explicit per-octave gain.
    fn vector_noise3(&self, p: Vec3, octaves: u32, lacunarity: f32, gain: f32) -> Vec3;

    /// The `N` closest feature points of a jittered lattice around `p`.
    ///
    /// Distances are non-decreasing by index and every offset satisfies
    /// `offset = p - feature`. Two returned feature points never coincide.
    fn nearest_feature_points<const N: usize>(
        &self,
        p: Vec3,
        octaves: u32,
        lacunarity: f32,
        randomness: f32,
    ) -> RankedFeaturePoints<N>;
}

impl<O: NoiseOracle> NoiseOracle for &O {
    fn scalar_noise3(&self, p: Vec3, octaves: u32, lacunarity: f32) -> f32 {
        (**self).scalar_noise3(p, octaves, lacunarity)
    }

    fn vector_noise4(&self, p: Vec3, time: f32, octaves: u32, lacunarity: f32) -> Vec3 {
        (**self).vector_noise4(p, time, octaves, lacunarity)
    }

    fn vector_noise3(&self, p: Vec3, octaves: u32, lacunarity: f32, gain: f32) -> Vec3 {
        (**self).vector_noise3(p, octaves, lacunarity, gain)
    }

    fn nearest_feature_points<const N: usize>(
        &self,
        p: Vec3,
        octaves: u32,
        lacunarity: f32,
        randomness: f32,
    ) -> RankedFeaturePoints<N> {
        (**self).nearest_feature_points::<N>(p, octaves, lacunarity, randomness)
    }
}
