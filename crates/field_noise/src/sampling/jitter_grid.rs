//! Jittered-grid point sampling strategy.
use glam::{UVec3, Vec3};
use mint::Vector3;
use rand::Rng;

use crate::sampling::{extent_is_valid, next_down, rand01, PointSampling};

/// Jittered grid sampling: one point per cubic cell, displaced around the cell center.
#[derive(Debug, Clone)]
pub struct JitterGridSampling {
    /// Jitter amount in [0, 1], where 0 is cell centers and 1 is max jitter.
    pub jitter: f32,
    /// Edge length of a grid cell.
    pub cell_size: f32,
}

impl JitterGridSampling {
    /// Create a new JitterGridSampling with specified jitter (0.0 to 1.0).
    pub fn new(jitter: f32, cell_size: f32) -> Self {
        Self {
            jitter: jitter.clamp(0.0, 1.0),
            cell_size,
        }
    }
}

impl PointSampling for JitterGridSampling {
    fn generate(&self, domain_extent: Vector3<f32>, rng: &mut dyn Rng) -> Vec<Vector3<f32>> {
        if !extent_is_valid(domain_extent) {
            return Vec::new();
        }
        let extent = Vec3::from(domain_extent);

        let eff = if self.cell_size.is_finite() && self.cell_size > 0.0 {
            self.cell_size
        } else {
            (extent.min_element() / 10.0).max(1.0)
        };

        let counts = (extent / eff).floor().as_uvec3().max(UVec3::ONE);
        let cell = extent / counts.as_vec3();
        let half = extent * 0.5;
        let max = Vec3::new(next_down(half.x), next_down(half.y), next_down(half.z));
        let jitter = self.jitter * cell * 0.5;

        let mut offset = |reach: f32| {
            if reach > 0.0 {
                (rand01(rng) * 2.0 - 1.0) * reach
            } else {
                0.0
            }
        };

        let mut points = Vec::with_capacity((counts.x * counts.y * counts.z) as usize);
        for k in 0..counts.z {
            for j in 0..counts.y {
                for i in 0..counts.x {
                    let center = -half + (UVec3::new(i, j, k).as_vec3() + 0.5) * cell;
                    let displaced =
                        center + Vec3::new(offset(jitter.x), offset(jitter.y), offset(jitter.z));
                    points.push(displaced.clamp(-half, max));
                }
            }
        }

        points.into_iter().map(Into::into).collect()
    }
}
