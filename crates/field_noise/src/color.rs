//! Colors and the mapping from cellular samples to output colors.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cellular::CellSample;

/// Linear RGB color with unbounded components.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Interpolates from `a` at `t = 0` to `b` at `t = 1`; `t` is not clamped.
    ///
    /// Both endpoints are reproduced exactly.
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        (Vec3::from(a) * (1.0 - t) + Vec3::from(b) * t).into()
    }
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Color> for Vec3 {
    fn from(c: Color) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// The three colors a cellular field is mapped onto.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Color reached at field value 1.
    pub inner: Color,
    /// Color at field value 0.
    pub outer: Color,
    /// Color of border (gap) samples.
    pub gap: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            inner: Color::BLACK,
            outer: Color::WHITE,
            gap: Color::BLACK,
        }
    }
}

impl Palette {
    pub fn new(inner: Color, outer: Color, gap: Color) -> Self {
        Self { inner, outer, gap }
    }

    /// Maps a sample to its output color.
    ///
    /// Border samples take the gap color. Everything else is `lerp(value, outer, inner)`,
    /// so value 0 gives `outer` and value 1 gives `inner`. Values outside [0, 1]
    /// extrapolate.
    #[inline]
    pub fn map(&self, sample: CellSample) -> Color {
        if sample.is_border {
            self.gap
        } else {
            Color::lerp(self.outer, self.inner, sample.value)
        }
    }
}
