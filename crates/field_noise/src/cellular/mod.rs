//! Cellular (Worley) field: ranked feature-point distances, reweighted, combined and
//! classified against cell borders.
//!
//! Two border strategies are available through [`CellularVariant`]:
//! - [`CellularVariant::Normalized`] ranks five feature points and measures the distance
//!   to the nearest bisector plane. It also powers [`DistanceMode::Normalized`].
//! - [`CellularVariant::SignedGap`] ranks three feature points and compares `F2 - F1`
//!   against a spacing-scaled gap, optionally with jagged edges.
use glam::Vec3;

pub mod border;
pub mod combiner;
pub mod metric;

pub use combiner::{combine, DistanceMode};

use crate::config::{CellularConfig, CellularVariant};
use crate::oracle::NoiseOracle;

/// Feature points ranked by the normalized variant.
pub const NORMALIZED_POINT_COUNT: usize = 5;

/// Feature points ranked by the signed-gap variant.
pub const SIGNED_GAP_POINT_COUNT: usize = 3;

/// Result of one cellular evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSample {
    /// Combined field value.
    pub value: f32,
    /// Whether the sample lies in a gap between cells.
    pub is_border: bool,
}

impl CellSample {
    pub fn interior(value: f32) -> Self {
        Self {
            value,
            is_border: false,
        }
    }

    pub fn border(value: f32) -> Self {
        Self {
            value,
            is_border: true,
        }
    }
}

/// Evaluates the cellular field at `p`, which is already in scaled field space.
///
/// The configuration is expected to have passed [`CellularConfig::validate`].
pub fn evaluate_cells<O: NoiseOracle>(oracle: &O, p: Vec3, config: &CellularConfig) -> CellSample {
    match config.variant {
        CellularVariant::Normalized => normalized_cells(oracle, p, config),
        CellularVariant::SignedGap { jagged } => signed_gap_cells(oracle, p, config, jagged),
    }
}

fn normalized_cells<O: NoiseOracle>(oracle: &O, p: Vec3, config: &CellularConfig) -> CellSample {
    let points = oracle.nearest_feature_points::<NORMALIZED_POINT_COUNT>(
        p,
        config.octaves,
        config.lacunarity,
        config.randomness,
    );

    let normalized = if config.gap_size > 0.0 || config.distance_mode == DistanceMode::Normalized {
        border::normalized_distance(&points)
    } else {
        0.0
    };

    let value = combine(
        &metric::reweight(&points, config.distance_exponent),
        config.distance_mode,
    )
    .unwrap_or(normalized);

    CellSample {
        value,
        is_border: border::in_normalized_gap(normalized, config.gap_size),
    }
}

fn signed_gap_cells<O: NoiseOracle>(
    oracle: &O,
    p: Vec3,
    config: &CellularConfig,
    jagged: bool,
) -> CellSample {
    let points = oracle.nearest_feature_points::<SIGNED_GAP_POINT_COUNT>(
        p,
        config.octaves,
        config.lacunarity,
        config.randomness,
    );
    let distances = metric::reweight(&points, config.distance_exponent);

    let value = combine(&distances, config.distance_mode)
        .unwrap_or_else(|| border::normalized_distance(&points));

    let gap = border::SignedGap {
        gap_size: config.gap_size,
        exponent: config.distance_exponent,
        jagged,
    };
    CellSample {
        value,
        is_border: border::in_signed_gap(oracle, p, &points, &distances, gap),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::oracle::LatticeNoise;
    use crate::sampling::{PointSampling, UniformRandomSampling};

    fn cloud(count: usize, seed: u64) -> Vec<Vec3> {
        UniformRandomSampling::new(count)
            .generate(Vec3::splat(8.0).into(), &mut StdRng::seed_from_u64(seed))
            .into_iter()
            .map(Vec3::from)
            .collect()
    }

    fn border_fraction(noise: &LatticeNoise, points: &[Vec3], config: &CellularConfig) -> f32 {
        let borders = points
            .iter()
            .filter(|p| evaluate_cells(noise, **p, config).is_border)
            .count();
        borders as f32 / points.len() as f32
    }

    fn variants() -> [CellularVariant; 3] {
        [
            CellularVariant::Normalized,
            CellularVariant::SignedGap { jagged: false },
            CellularVariant::SignedGap { jagged: true },
        ]
    }

    #[test]
    fn f1_without_gap_is_nearest_distance() {
        let noise = LatticeNoise::new(1337);
        let config = CellularConfig::default().with_gap_size(0.0);
        let p = Vec3::new(0.25, 1.5, -0.75);
        let nearest = noise.nearest_feature_points::<1>(p, 1, 1.92, 1.0)[0];
        let sample = evaluate_cells(&noise, p, &config);
        assert_eq!(sample, CellSample::interior(nearest.distance));
    }

    #[test]
    fn normalized_mode_uses_bisector_distance() {
        let noise = LatticeNoise::new(3);
        let config = CellularConfig::default()
            .with_distance_mode(DistanceMode::Normalized)
            .with_gap_size(0.0);
        let p = Vec3::new(2.2, 0.1, 0.9);
        let points = noise.nearest_feature_points::<5>(p, 1, 1.92, 1.0);
        let sample = evaluate_cells(&noise, p, &config);
        assert_eq!(sample.value, border::normalized_distance(&points));
        assert!(!sample.is_border);
    }

    fn assert_gap_fraction_monotonic(octaves: u32, exponent: f32) {
        let noise = LatticeNoise::new(2024);
        let points = cloud(600, 17);
        let gap_sizes = [0.0, 0.01, 0.03, 0.06, 0.1, 0.2, 0.4];
        for variant in variants() {
            for mode in DistanceMode::ALL {
                if mode == DistanceMode::Normalized && variant != CellularVariant::Normalized {
                    continue;
                }
                let mut previous = 0.0;
                for gap in gap_sizes {
                    let config = CellularConfig::default()
                        .with_octaves(octaves)
                        .with_distance_exponent(exponent)
                        .with_variant(variant)
                        .with_distance_mode(mode)
                        .with_gap_size(gap);
                    let fraction = border_fraction(&noise, &points, &config);
                    assert!(
                        fraction >= previous,
                        "{variant:?}/{mode:?}/octaves {octaves}: gap {gap} gave {fraction} < {previous}"
                    );
                    previous = fraction;
                }
            }
        }
    }

    #[test]
    fn gap_fraction_is_monotonic_in_gap_size() {
        assert_gap_fraction_monotonic(1, 2.0);
    }

    #[test]
    fn layered_gap_fraction_is_monotonic_in_gap_size() {
        assert_gap_fraction_monotonic(3, 2.0);
        assert_gap_fraction_monotonic(3, 1.0);
    }

    #[test]
    fn layered_values_are_continuous_in_exponent() {
        let noise = LatticeNoise::new(1337);
        let points = cloud(100, 8);
        for variant in variants() {
            for mode in DistanceMode::ALL {
                if mode == DistanceMode::Normalized {
                    continue;
                }
                let config = CellularConfig::default()
                    .with_octaves(3)
                    .with_variant(variant)
                    .with_distance_mode(mode)
                    .with_gap_size(0.0);
                let near = config.clone().with_distance_exponent(2.0001);
                for p in &points {
                    let a = evaluate_cells(&noise, *p, &config).value;
                    let b = evaluate_cells(&noise, *p, &near).value;
                    assert!((a - b).abs() < 1e-3, "{variant:?}/{mode:?} at {p}: {a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn smallest_exponent_gives_finite_values() {
        let noise = LatticeNoise::new(1337);
        let points = cloud(100, 12);
        for variant in variants() {
            for mode in DistanceMode::ALL {
                if mode == DistanceMode::Normalized && variant != CellularVariant::Normalized {
                    continue;
                }
                let config = CellularConfig::default()
                    .with_octaves(2)
                    .with_variant(variant)
                    .with_distance_mode(mode)
                    .with_distance_exponent(metric::MIN_EXPONENT);
                config.validate().unwrap();
                for p in &points {
                    let sample = evaluate_cells(&noise, *p, &config);
                    assert!(sample.value.is_finite(), "{variant:?}/{mode:?} at {p}");
                }
            }
        }
    }

    #[test]
    fn zero_gap_never_classifies_borders() {
        let noise = LatticeNoise::new(9);
        let points = cloud(200, 4);
        for variant in variants() {
            let config = CellularConfig::default()
                .with_variant(variant)
                .with_distance_exponent(1.0)
                .with_gap_size(0.0);
            assert_eq!(border_fraction(&noise, &points, &config), 0.0);
        }
    }

    #[test]
    fn gap_wider_than_cell_spacing_covers_nearly_everything() {
        let noise = LatticeNoise::new(1337);
        let points = cloud(500, 99);
        for variant in variants() {
            let config = CellularConfig::default()
                .with_variant(variant)
                .with_gap_size(2.0);
            let fraction = border_fraction(&noise, &points, &config);
            assert!(fraction > 0.95, "{variant:?}: only {fraction} border");
        }
    }

    #[test]
    fn non_euclidean_exponent_changes_values() {
        let noise = LatticeNoise::new(6);
        let p = Vec3::new(0.7, 0.2, 3.3);
        let euclid = evaluate_cells(&noise, p, &CellularConfig::default().with_gap_size(0.0));
        let manhattan = evaluate_cells(
            &noise,
            p,
            &CellularConfig::default()
                .with_gap_size(0.0)
                .with_distance_exponent(1.0),
        );
        assert!(manhattan.value >= euclid.value);
    }

    #[test]
    fn signed_gap_variant_matches_three_point_combination() {
        let noise = LatticeNoise::new(10);
        let p = Vec3::new(-1.4, 2.6, 0.3);
        let config = CellularConfig::default()
            .with_variant(CellularVariant::SignedGap { jagged: false })
            .with_distance_mode(DistanceMode::FarContrast)
            .with_gap_size(0.0);
        let points = noise.nearest_feature_points::<3>(p, 1, 1.92, 1.0);
        let expected = 0.5 * (2.0 * points[2].distance - points[1].distance - points[0].distance);
        let sample = evaluate_cells(&noise, p, &config);
        assert!((sample.value - expected).abs() < 1e-6);
    }
}
