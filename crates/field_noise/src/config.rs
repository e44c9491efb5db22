//! Validated configuration for the curl and cellular evaluators.
//!
//! Configurations are plain values built with `with_*` setters (or deserialized with the
//! `serde` feature) and checked once by `validate()` before any evaluation runs.
use std::fmt;
use std::str::FromStr;

use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cellular::metric::MIN_EXPONENT;
use crate::cellular::DistanceMode;
use crate::color::Palette;
use crate::error::{Error, Result};

/// Lacunarity used by both nodes unless configured otherwise.
pub const DEFAULT_LACUNARITY: f32 = 1.92;

/// Default gap width of the cellular field.
pub const DEFAULT_GAP_SIZE: f32 = 0.05;

/// Coordinate space the sample point is taken from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Space {
    #[default]
    World,
    Object,
    /// Reference ("rest") pose, falling back to object space when absent.
    Reference,
}

impl Space {
    pub fn label(self) -> &'static str {
        match self {
            Space::World => "world",
            Space::Object => "object",
            Space::Reference => "Pref",
        }
    }

    /// Picks the point for this space.
    #[inline]
    pub fn select(self, point: &ShadingPoint) -> Vec3 {
        match self {
            Space::World => point.world,
            Space::Object => point.object,
            Space::Reference => point.reference.unwrap_or(point.object),
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Space {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "world" => Ok(Space::World),
            "object" => Ok(Space::Object),
            "pref" | "reference" | "rest" => Ok(Space::Reference),
            _ => Err(Error::UnknownName {
                kind: "space",
                name: s.to_string(),
            }),
        }
    }
}

/// A sample location in every space the host can provide.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShadingPoint {
    pub world: Vec3,
    pub object: Vec3,
    pub reference: Option<Vec3>,
}

impl ShadingPoint {
    /// A point that is identical in world and object space.
    pub fn at(p: Vec3) -> Self {
        Self {
            world: p,
            object: p,
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: Vec3) -> Self {
        self.reference = Some(reference);
        self
    }
}

/// Vector noise the curl is taken of.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CurlBackend {
    /// 4D noise over space and `time`.
    #[default]
    SpaceTime,
    /// 3D noise with an explicit per-octave gain; `time` is ignored.
    Fractal { gain: f32 },
}

/// Configuration of the curl-noise field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct CurlConfig {
    /// Space the sample point is taken from.
    pub space: Space,
    /// Per-axis scale applied to the sample point.
    pub scale: Vec3,
    /// Number of noise octaves; zero yields a zero field.
    pub octaves: u32,
    /// Frequency multiplier between octaves.
    pub lacunarity: f32,
    /// Fourth noise dimension for [`CurlBackend::SpaceTime`].
    pub time: f32,
    /// Noise the curl is taken of.
    pub backend: CurlBackend,
}

impl Default for CurlConfig {
    fn default() -> Self {
        Self {
            space: Space::Object,
            scale: Vec3::ONE,
            octaves: 1,
            lacunarity: DEFAULT_LACUNARITY,
            time: 0.0,
            backend: CurlBackend::SpaceTime,
        }
    }
}

impl CurlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_space(mut self, space: Space) -> Self {
        self.space = space;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    pub fn with_lacunarity(mut self, lacunarity: f32) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    pub fn with_time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    pub fn with_backend(mut self, backend: CurlBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        ensure_finite_scale(self.scale)?;
        if !self.lacunarity.is_finite() {
            return Err(Error::InvalidConfig("lacunarity must be finite".into()));
        }
        if !self.time.is_finite() {
            return Err(Error::InvalidConfig("time must be finite".into()));
        }
        if let CurlBackend::Fractal { gain } = self.backend {
            if !gain.is_finite() {
                return Err(Error::InvalidConfig("gain must be finite".into()));
            }
        }
        Ok(())
    }
}

/// Border strategy of the cellular field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellularVariant {
    /// Five ranked points, borders from the distance to the nearest bisector plane.
    #[default]
    Normalized,
    /// Three ranked points, borders where `F2 - F1` falls below the scaled gap.
    SignedGap {
        /// Break the straight cell edges with noise.
        jagged: bool,
    },
}

/// Configuration of the cellular field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct CellularConfig {
    /// Space the sample point is taken from.
    pub space: Space,
    /// Per-axis scale applied to the sample point.
    pub scale: Vec3,
    /// Number of feature-point octaves; at least one.
    pub octaves: u32,
    /// Frequency multiplier between octaves.
    pub lacunarity: f32,
    /// Feature point jitter in [0, 1]; 0 places every point at its cell center.
    pub randomness: f32,
    /// Minkowski exponent of the distance metric, at least [`MIN_EXPONENT`].
    pub distance_exponent: f32,
    /// How ranked distances are combined.
    pub distance_mode: DistanceMode,
    /// Gap width between cells; zero disables borders.
    pub gap_size: f32,
    /// Border strategy.
    pub variant: CellularVariant,
    /// Output colors.
    pub palette: Palette,
}

impl Default for CellularConfig {
    fn default() -> Self {
        Self {
            space: Space::World,
            scale: Vec3::ONE,
            octaves: 1,
            lacunarity: DEFAULT_LACUNARITY,
            randomness: 1.0,
            distance_exponent: 2.0,
            distance_mode: DistanceMode::F1,
            gap_size: DEFAULT_GAP_SIZE,
            variant: CellularVariant::Normalized,
            palette: Palette::default(),
        }
    }
}

impl CellularConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_space(mut self, space: Space) -> Self {
        self.space = space;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    pub fn with_lacunarity(mut self, lacunarity: f32) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    pub fn with_randomness(mut self, randomness: f32) -> Self {
        self.randomness = randomness;
        self
    }

    pub fn with_distance_exponent(mut self, distance_exponent: f32) -> Self {
        self.distance_exponent = distance_exponent;
        self
    }

    pub fn with_distance_mode(mut self, distance_mode: DistanceMode) -> Self {
        self.distance_mode = distance_mode;
        self
    }

    pub fn with_gap_size(mut self, gap_size: f32) -> Self {
        self.gap_size = gap_size;
        self
    }

    pub fn with_variant(mut self, variant: CellularVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        ensure_finite_scale(self.scale)?;
        if self.octaves == 0 {
            return Err(Error::InvalidConfig("octaves must be >= 1".into()));
        }
        if !self.lacunarity.is_finite() {
            return Err(Error::InvalidConfig("lacunarity must be finite".into()));
        }
        if !(0.0..=1.0).contains(&self.randomness) {
            return Err(Error::InvalidConfig("randomness must be in [0, 1]".into()));
        }
        if !(self.distance_exponent.is_finite() && self.distance_exponent >= MIN_EXPONENT) {
            return Err(Error::InvalidConfig(format!(
                "distance_exponent must be finite and >= {MIN_EXPONENT}, got {}",
                self.distance_exponent
            )));
        }
        if !(self.gap_size.is_finite() && self.gap_size >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "gap_size must be >= 0, got {}",
                self.gap_size
            )));
        }
        if self.distance_mode == DistanceMode::Normalized
            && self.variant != CellularVariant::Normalized
        {
            return Err(Error::InvalidConfig(
                "normalized distance mode requires the normalized variant".into(),
            ));
        }
        Ok(())
    }
}

fn ensure_finite_scale(scale: Vec3) -> Result<()> {
    if scale.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidConfig("scale must be finite".into()))
    }
}
