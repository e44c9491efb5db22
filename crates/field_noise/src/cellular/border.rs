//! Border (gap) detection between neighboring cells.
//!
//! Both detectors estimate the local spacing between feature points before comparing
//! against the gap size, so gaps keep an even width where cell density changes.
//!
//! - [`normalized_distance`] / [`in_normalized_gap`]: distance from the sample to the
//!   nearest bisector plane between the closest feature point and its neighbors.
//! - [`in_signed_gap`]: compares `F2 - F1` against the gap size scaled by the distance
//!   between the two closest feature points, optionally perturbed into a jagged edge.
use glam::Vec3;
use tracing::trace;

use crate::cellular::metric;
use crate::oracle::{FeaturePoint, NoiseOracle};

/// Direction used when two feature points coincide and no bisector exists.
pub const FALLBACK_DIRECTION: Vec3 = Vec3::X;

/// Amplitude of the perturbation applied to jagged edges.
pub const JAGGED_AMPLITUDE: f32 = 5.0;

/// Frequency multiplier of the perturbation applied to jagged edges.
pub const JAGGED_FREQUENCY: f32 = 3.0;

/// Cubic Hermite step from 0 at `e0` to 1 at `e1`.
pub fn smoothstep(e0: f32, e1: f32, x: f32) -> f32 {
    let denom = e1 - e0;
    if denom.abs() <= f32::EPSILON {
        return if x >= e1 { 1.0 } else { 0.0 };
    }
    let t = ((x - e0) / denom).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Signed distance from the sample to the bisector plane of `first` and `other`,
/// measured along the direction from `first` towards `other`.
#[inline]
pub fn bisector_distance(first: &FeaturePoint, other: &FeaturePoint) -> f32 {
    let direction = (other.offset - first.offset)
        .try_normalize()
        .unwrap_or_else(|| {
            trace!("coincident feature points; using fallback bisector direction");
            FALLBACK_DIRECTION
        });
    (0.5 * (first.offset + other.offset)).dot(direction)
}

/// Minimum bisector distance from the closest point to every other ranked point.
///
/// Starts from the second point and then scans the rest. Returns infinity when fewer
/// than two points are given.
pub fn normalized_distance(points: &[FeaturePoint]) -> f32 {
    let [first, second, rest @ ..] = points else {
        return f32::INFINITY;
    };
    rest.iter().fold(bisector_distance(first, second), |acc, other| {
        acc.min(bisector_distance(first, other))
    })
}

/// Whether a normalized distance falls inside a gap of width `gap_size`.
///
/// A zero gap never produces borders.
#[inline]
pub fn in_normalized_gap(normalized_distance: f32, gap_size: f32) -> bool {
    gap_size > 0.0 && 1.0 - smoothstep(0.0, gap_size, normalized_distance) > 0.0
}

/// Parameters of the signed-gap detector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignedGap {
    pub gap_size: f32,
    /// Minkowski exponent used for the spacing estimate.
    pub exponent: f32,
    /// Perturb the spacing vector with noise for irregular edges.
    pub jagged: bool,
}

/// Whether the sample at `p` lies in the gap between its two closest cells.
///
/// `points` are the ranked feature points and `distances` their (possibly reweighted)
/// distances. The two closest feature points must not coincide.
pub fn in_signed_gap<O: NoiseOracle>(
    oracle: &O,
    p: Vec3,
    points: &[FeaturePoint],
    distances: &[f32],
    gap: SignedGap,
) -> bool {
    let ([first, second, ..], [f1, f2, ..]) = (points, distances) else {
        return false;
    };
    if gap.gap_size <= 0.0 {
        return false;
    }

    let mut diff = second.offset - first.offset;
    if gap.jagged {
        diff += JAGGED_AMPLITUDE * oracle.vector_noise3(p * JAGGED_FREQUENCY, 1, 0.0, 1.0);
    }
    let scale_factor = metric::norm(diff, gap.exponent) / (f1 + f2);
    gap.gap_size * scale_factor > f2 - f1
}
