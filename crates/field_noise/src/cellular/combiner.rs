//! Combination of ranked distances into one field value.
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How ranked distances `F1 <= F2 <= F3` become the field value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DistanceMode {
    /// Distance to the nearest feature point.
    #[default]
    F1,
    /// `F2 - F1`, bright along cell edges.
    F2MinusF1,
    /// `(2 F1 + F2) / 3`.
    BlendF1F2,
    /// `(2 F3 - F2 - F1) / 2`.
    FarContrast,
    /// `F1 / 2 + F2 / 3 + F3 / 6`.
    TripleBlend,
    /// Distance to the nearest bisector plane between feature points.
    ///
    /// Only available with the five-point normalized variant.
    Normalized,
}

impl DistanceMode {
    pub const ALL: [DistanceMode; 6] = [
        DistanceMode::F1,
        DistanceMode::F2MinusF1,
        DistanceMode::BlendF1F2,
        DistanceMode::FarContrast,
        DistanceMode::TripleBlend,
        DistanceMode::Normalized,
    ];

    /// Weights applied to `(F1, F2, F3)`, or `None` for [`DistanceMode::Normalized`].
    pub fn weights(self) -> Option<[f32; 3]> {
        match self {
            DistanceMode::F1 => Some([1.0, 0.0, 0.0]),
            DistanceMode::F2MinusF1 => Some([-1.0, 1.0, 0.0]),
            DistanceMode::BlendF1F2 => Some([2.0 / 3.0, 1.0 / 3.0, 0.0]),
            DistanceMode::FarContrast => Some([-0.5, -0.5, 1.0]),
            DistanceMode::TripleBlend => Some([0.5, 0.33, 1.0 - 0.5 - 0.33]),
            DistanceMode::Normalized => None,
        }
    }

    /// Host-facing label of the mode.
    pub fn label(self) -> &'static str {
        match self {
            DistanceMode::F1 => "F1",
            DistanceMode::F2MinusF1 => "F2-F1",
            DistanceMode::BlendF1F2 => "(2 f1 + f2) / 3",
            DistanceMode::FarContrast => "(2 f3 - f2 - f1) / 2",
            DistanceMode::TripleBlend => "F1/2 + F2/3 + f3/6",
            DistanceMode::Normalized => "normalized",
        }
    }
}

impl fmt::Display for DistanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DistanceMode {
    type Err = Error;

    /// Parses a host label, ignoring case and whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        DistanceMode::ALL
            .into_iter()
            .find(|mode| {
                mode.label()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<String>()
                    .to_ascii_lowercase()
                    == key
            })
            .ok_or_else(|| Error::UnknownName {
                kind: "distance mode",
                name: s.to_string(),
            })
    }
}

/// Weighted sum of the first three distances, or `None` for the normalized mode.
///
/// Missing distances count as zero.
pub fn combine(distances: &[f32], mode: DistanceMode) -> Option<f32> {
    let weights = mode.weights()?;
    Some(distances.iter().zip(weights).map(|(d, w)| d * w).sum())
}
