//! Per-point evaluators binding a validated configuration to a noise oracle.
use glam::Vec3;
use tracing::{debug, warn};

use crate::cellular::metric::MIN_EXPONENT;
use crate::cellular::{evaluate_cells, CellSample};
use crate::color::Color;
use crate::config::{CellularConfig, CurlConfig, ShadingPoint};
use crate::curl::curl;
use crate::error::Result;
use crate::oracle::NoiseOracle;

/// Evaluates the curl-noise field.
///
/// The configuration is fixed at construction; rebuild the evaluator to change it.
#[derive(Clone, Debug)]
pub struct CurlEvaluator<'a, O: NoiseOracle> {
    config: CurlConfig,
    oracle: &'a O,
}

impl<'a, O: NoiseOracle> CurlEvaluator<'a, O> {
    pub fn try_new(config: CurlConfig, oracle: &'a O) -> Result<Self> {
        if let Err(err) = config.validate() {
            warn!("Rejected curl configuration: {}", err);
            return Err(err);
        }
        debug!(
            "Curl evaluator: space={}, octaves={}, lacunarity={}, backend={:?}",
            config.space, config.octaves, config.lacunarity, config.backend
        );
        Ok(Self { config, oracle })
    }

    pub fn new(config: CurlConfig, oracle: &'a O) -> Self {
        debug_assert!(config.scale.is_finite(), "scale must be finite");
        debug_assert!(config.lacunarity.is_finite(), "lacunarity must be finite");
        debug_assert!(config.time.is_finite(), "time must be finite");

        Self { config, oracle }
    }

    /// Configuration applied to every sample.
    pub fn config(&self) -> &CurlConfig {
        &self.config
    }

    /// Noise source shared with other evaluators.
    pub fn oracle(&self) -> &'a O {
        self.oracle
    }

    /// Curl at `p`, taken from the configured space and scaled per axis.
    #[inline]
    pub fn eval(&self, p: Vec3) -> Vec3 {
        curl(self.oracle, p * self.config.scale, &self.config)
    }

    /// Curl at the point of `sp` selected by the configured space.
    #[inline]
    pub fn eval_shading(&self, sp: &ShadingPoint) -> Vec3 {
        self.eval(self.config.space.select(sp))
    }
}

/// Evaluates the cellular field.
///
/// The configuration is fixed at construction; rebuild the evaluator to change it.
#[derive(Clone, Debug)]
pub struct CellularEvaluator<'a, O: NoiseOracle> {
    config: CellularConfig,
    oracle: &'a O,
}

impl<'a, O: NoiseOracle> CellularEvaluator<'a, O> {
    pub fn try_new(config: CellularConfig, oracle: &'a O) -> Result<Self> {
        if let Err(err) = config.validate() {
            warn!("Rejected cellular configuration: {}", err);
            return Err(err);
        }
        debug!(
            "Cellular evaluator: space={}, variant={:?}, mode={}, exponent={}, gap={}",
            config.space,
            config.variant,
            config.distance_mode,
            config.distance_exponent,
            config.gap_size
        );
        Ok(Self { config, oracle })
    }

    pub fn new(config: CellularConfig, oracle: &'a O) -> Self {
        debug_assert!(config.octaves > 0, "octaves must be >= 1");
        debug_assert!(
            config.distance_exponent >= MIN_EXPONENT,
            "distance_exponent below the supported minimum"
        );
        debug_assert!(config.gap_size >= 0.0, "gap_size must be >= 0");

        Self { config, oracle }
    }

    /// Configuration applied to every sample.
    pub fn config(&self) -> &CellularConfig {
        &self.config
    }

    /// Noise source shared with other evaluators.
    pub fn oracle(&self) -> &'a O {
        self.oracle
    }

    /// Raw field value and border flag at `p`.
    #[inline]
    pub fn sample(&self, p: Vec3) -> CellSample {
        evaluate_cells(self.oracle, p * self.config.scale, &self.config)
    }

    /// Color at `p` after the palette is applied.
    #[inline]
    pub fn eval(&self, p: Vec3) -> Color {
        self.config.palette.map(self.sample(p))
    }

    /// Color at the point of `sp` selected by the configured space.
    #[inline]
    pub fn eval_shading(&self, sp: &ShadingPoint) -> Color {
        self.eval(self.config.space.select(sp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cellular::DistanceMode;
    use crate::color::Palette;
    use crate::config::{CellularVariant, Space};
    use crate::error::Error;
    use crate::oracle::LatticeNoise;

    const NEAREST_AT_ORIGIN: f32 = 0.517_291_67;

    fn approx_eq(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{a} != {b}");
    }

    #[test]
    fn default_palette_maps_f1_at_origin() {
        let noise = LatticeNoise::new(1337);
        let config = CellularConfig::default().with_gap_size(0.0);
        let eval = CellularEvaluator::try_new(config, &noise).unwrap();

        let sample = eval.sample(Vec3::ZERO);
        approx_eq(sample.value, NEAREST_AT_ORIGIN);
        assert!(!sample.is_border);

        let c = eval.eval(Vec3::ZERO);
        for channel in [c.r, c.g, c.b] {
            approx_eq(channel, 1.0 - NEAREST_AT_ORIGIN);
        }
        assert_eq!(c, Color::lerp(Color::WHITE, Color::BLACK, sample.value));
    }

    #[test]
    fn border_samples_take_the_gap_color() {
        let noise = LatticeNoise::new(1337);
        let gap = Color::new(1.0, 0.0, 0.0);
        let config = CellularConfig::default()
            .with_gap_size(2.0)
            .with_palette(Palette::new(Color::BLACK, Color::WHITE, gap));
        let eval = CellularEvaluator::try_new(config, &noise).unwrap();
        assert!(eval.sample(Vec3::ZERO).is_border);
        assert_eq!(eval.eval(Vec3::ZERO), gap);
    }

    #[test]
    fn try_new_rejects_invalid_configs() {
        let noise = LatticeNoise::new(0);
        for exponent in [0.0, 0.01] {
            let bad = CellularConfig::default()
                .with_gap_size(0.0)
                .with_distance_exponent(exponent);
            assert!(matches!(
                CellularEvaluator::try_new(bad, &noise),
                Err(Error::InvalidConfig(_))
            ));
        }
        let bad = CellularConfig::default()
            .with_distance_mode(DistanceMode::Normalized)
            .with_variant(CellularVariant::SignedGap { jagged: false });
        assert!(CellularEvaluator::try_new(bad, &noise).is_err());
        let bad = CurlConfig::default().with_lacunarity(f32::NAN);
        assert!(CurlEvaluator::try_new(bad, &noise).is_err());
    }

    #[test]
    fn scale_is_applied_before_sampling() {
        let noise = LatticeNoise::new(5);
        let p = Vec3::new(0.3, 0.6, 0.9);
        let scale = Vec3::new(2.0, 3.0, 4.0);
        let scaled = CellularEvaluator::new(
            CellularConfig::default()
                .with_gap_size(0.0)
                .with_scale(scale),
            &noise,
        );
        let plain = CellularEvaluator::new(CellularConfig::default().with_gap_size(0.0), &noise);
        assert_eq!(scaled.sample(p), plain.sample(p * scale));

        let curl_scaled = CurlEvaluator::new(CurlConfig::default().with_scale(Vec3::splat(2.0)), &noise);
        let curl_plain = CurlEvaluator::new(CurlConfig::default(), &noise);
        assert_eq!(curl_scaled.eval(p), curl_plain.eval(p * 2.0));
    }

    #[test]
    fn shading_point_selects_configured_space() {
        let noise = LatticeNoise::new(21);
        let sp = ShadingPoint {
            world: Vec3::new(4.2, 0.1, -3.3),
            object: Vec3::new(0.4, 0.2, 0.7),
            reference: Some(Vec3::new(-1.1, 2.5, 0.05)),
        };

        let cells = CellularEvaluator::new(CellularConfig::default(), &noise);
        assert_eq!(cells.eval_shading(&sp), cells.eval(sp.world));

        let curl_obj = CurlEvaluator::new(CurlConfig::default(), &noise);
        assert_eq!(curl_obj.eval_shading(&sp), curl_obj.eval(sp.object));

        let curl_ref = CurlEvaluator::new(CurlConfig::default().with_space(Space::Reference), &noise);
        assert_eq!(curl_ref.eval_shading(&sp), curl_ref.eval(Vec3::new(-1.1, 2.5, 0.05)));
    }

    #[test]
    fn accessors_expose_the_validated_snapshot() {
        let noise = LatticeNoise::new(8);
        let config = CellularConfig::default().with_gap_size(0.2);
        let eval = CellularEvaluator::try_new(config.clone(), &noise).unwrap();
        assert_eq!(eval.config(), &config);
        assert_eq!(eval.oracle().seed(), 8);

        let curl = CurlEvaluator::try_new(CurlConfig::default().with_octaves(2), &noise).unwrap();
        assert_eq!(curl.config().octaves, 2);
        assert!(std::ptr::eq(curl.oracle(), &noise));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let noise = LatticeNoise::new(44);
        let config = CellularConfig::default()
            .with_octaves(3)
            .with_variant(CellularVariant::SignedGap { jagged: true });
        let a = CellularEvaluator::new(config.clone(), &noise);
        let b = CellularEvaluator::new(config, &noise);
        let p = Vec3::new(1.25, -0.5, 2.75);
        assert_eq!(a.eval(p), b.eval(p));
    }
}
