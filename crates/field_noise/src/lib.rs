#![forbid(unsafe_code)]
//! field_noise: curl-noise and cellular (Worley) field evaluation over a pluggable noise oracle.
//!
//! Modules:
//! - oracle: the noise capability the fields consume, plus the seeded `LatticeNoise` reference
//! - curl: divergence-free vector field from central differences of vector noise
//! - cellular: ranked feature-point distances, Minkowski reweighting, combiners and gap borders
//! - config / evaluator: validated configurations and per-point evaluators
//! - color: palette mapping of cellular samples
//! - sampling, batch: point clouds and slice evaluation (rayon with the `parallel` feature)
pub mod batch;
pub mod cellular;
pub mod color;
pub mod config;
pub mod curl;
pub mod error;
pub mod evaluator;
pub mod oracle;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use field_noise::prelude::*;`.
pub mod prelude {
    pub use crate::batch::{border_fraction, eval_cellular_many, eval_curl_many};
    pub use crate::cellular::{evaluate_cells, CellSample, DistanceMode};
    pub use crate::color::{Color, Palette};
    pub use crate::config::{
        CellularConfig, CellularVariant, CurlBackend, CurlConfig, ShadingPoint, Space,
    };
    pub use crate::curl::curl;
    pub use crate::error::{Error, Result};
    pub use crate::evaluator::{CellularEvaluator, CurlEvaluator};
    pub use crate::oracle::{FeaturePoint, LatticeNoise, NoiseOracle, RankedFeaturePoints};
    pub use crate::sampling::{JitterGridSampling, PointSampling, UniformRandomSampling};
}
