//! Uniform random point sampling strategy.
use mint::Vector3;
use rand::Rng;

use crate::sampling::{extent_is_valid, next_down, rand01, PointSampling};

/// Uniform i.i.d. random sampling over a box domain.
#[derive(Debug, Clone)]
pub struct UniformRandomSampling {
    /// Number of points to generate.
    pub count: usize,
}

impl UniformRandomSampling {
    /// Create a new uniform random sampler that generates `count` points.
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl PointSampling for UniformRandomSampling {
    fn generate(&self, domain_extent: Vector3<f32>, rng: &mut dyn Rng) -> Vec<Vector3<f32>> {
        if self.count == 0 || !extent_is_valid(domain_extent) {
            return Vec::new();
        }

        let half = [
            domain_extent.x * 0.5,
            domain_extent.y * 0.5,
            domain_extent.z * 0.5,
        ];
        let max = half.map(next_down);
        let axis = |u: f32, i: usize, extent: f32| (u * extent - half[i]).clamp(-half[i], max[i]);

        let mut out = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let x = axis(rand01(rng), 0, domain_extent.x);
            let y = axis(rand01(rng), 1, domain_extent.y);
            let z = axis(rand01(rng), 2, domain_extent.z);
            out.push(Vector3 { x, y, z });
        }

        out
    }
}
