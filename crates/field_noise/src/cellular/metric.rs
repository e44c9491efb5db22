//! Minkowski reweighting of ranked feature-point distances.
use glam::Vec3;

use crate::oracle::RankedFeaturePoints;

/// The exponent for which the oracle's own Euclidean distances are used as-is.
pub const EUCLIDEAN_EXPONENT: f32 = 2.0;

/// Smallest exponent accepted by configuration validation.
///
/// `3^(1/p)` stays far below `f32::MAX` for every `p` at or above this bound.
pub const MIN_EXPONENT: f32 = 0.05;

/// Minkowski norm of order `p`: `(|x|^p + |y|^p + |z|^p)^(1/p)`.
///
/// The largest component is factored out so the inner sum stays in [1, 3]. `p` must be at
/// least [`MIN_EXPONENT`]; smaller exponents are rejected before evaluation.
#[inline]
pub fn minkowski(v: Vec3, p: f32) -> f32 {
    let a = v.abs();
    let m = a.max_element();
    if m == 0.0 {
        return 0.0;
    }
    let r = a / m;
    m * (r.x.powf(p) + r.y.powf(p) + r.z.powf(p)).powf(p.recip())
}

/// Norm of `v` under exponent `p`, using the plain Euclidean length for `p == 2`.
#[inline]
pub fn norm(v: Vec3, p: f32) -> f32 {
    if p == EUCLIDEAN_EXPONENT {
        v.length()
    } else {
        minkowski(v, p)
    }
}

/// Distances of the ranked points under exponent `p`.
///
/// For `p == 2` the oracle's distances are returned untouched. Reweighting may reorder
/// the distances; the ranking stays the one from the underlying lattice.
pub fn reweight<const N: usize>(points: &RankedFeaturePoints<N>, p: f32) -> [f32; N] {
    if p == EUCLIDEAN_EXPONENT {
        points.map(|fp| fp.distance)
    } else {
        points.map(|fp| minkowski(fp.offset, p))
    }
}
