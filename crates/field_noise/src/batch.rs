//! Evaluation over slices of points.
//!
//! With the `parallel` feature the points are split across the rayon thread pool;
//! otherwise they are evaluated in order. Both paths return identical results.
use glam::Vec3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::color::Color;
use crate::evaluator::{CellularEvaluator, CurlEvaluator};
use crate::oracle::NoiseOracle;

/// Colors of the cellular field at every point, in input order.
pub fn eval_cellular_many<O: NoiseOracle>(
    evaluator: &CellularEvaluator<'_, O>,
    points: &[Vec3],
) -> Vec<Color> {
    #[cfg(feature = "parallel")]
    {
        points.par_iter().map(|p| evaluator.eval(*p)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        points.iter().map(|p| evaluator.eval(*p)).collect()
    }
}

/// Curl vectors at every point, in input order.
pub fn eval_curl_many<O: NoiseOracle>(evaluator: &CurlEvaluator<'_, O>, points: &[Vec3]) -> Vec<Vec3> {
    #[cfg(feature = "parallel")]
    {
        points.par_iter().map(|p| evaluator.eval(*p)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        points.iter().map(|p| evaluator.eval(*p)).collect()
    }
}

/// Fraction of `points` that fall into a cell gap; zero for an empty slice.
pub fn border_fraction<O: NoiseOracle>(evaluator: &CellularEvaluator<'_, O>, points: &[Vec3]) -> f32 {
    if points.is_empty() {
        return 0.0;
    }

    #[cfg(feature = "parallel")]
    let borders = points
        .par_iter()
        .filter(|p| evaluator.sample(**p).is_border)
        .count();
    #[cfg(not(feature = "parallel"))]
    let borders = points
        .iter()
        .filter(|p| evaluator.sample(**p).is_border)
        .count();

    borders as f32 / points.len() as f32
}
