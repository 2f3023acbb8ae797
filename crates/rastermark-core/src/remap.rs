//! Raster value remapping for heatmap display.
//!
//! Raw raster values are rescaled before colormap lookup so that data
//! spanning several orders of magnitude stays readable. Unlike a true
//! log scale, both curves here are total: defined and finite for every
//! finite input, including zero and negative values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log-like rescale that stays smooth and finite through zero.
///
/// Computed as `asinh(x/2) / ln(10)`. Tracks `log10(x)` closely once
/// `|x|` is large, with no singularity at or below zero.
pub fn pseudolog10(x: f64) -> f64 {
    (x / 2.0).asinh() / std::f64::consts::LN_10
}

/// Symmetric log rescale.
///
/// Computed as `sign(x) * log10(|x| + 1)`. Maps zero to zero and is an
/// odd function of its input.
pub fn symlog10(x: f64) -> f64 {
    x.signum() * (x.abs() + 1.0).log10()
}

/// Remap curve selection
///
/// The value a display surface binds to its remap-function selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemapFunction {
    /// Identity mapping (no rescale)
    Linear,
    /// `asinh`-based pseudo-log scale
    PseudoLog10,
    /// Symmetric log scale
    SymLog10,
}

impl RemapFunction {
    /// All selectable remap functions, in display order
    pub const ALL: [RemapFunction; 3] = [
        RemapFunction::Linear,
        RemapFunction::PseudoLog10,
        RemapFunction::SymLog10,
    ];

    /// Apply the selected curve to a raster value
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::PseudoLog10 => pseudolog10(x),
            Self::SymLog10 => symlog10(x),
        }
    }
}

impl Default for RemapFunction {
    fn default() -> Self {
        Self::Linear
    }
}

impl fmt::Display for RemapFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::PseudoLog10 => write!(f, "pseudolog10"),
            Self::SymLog10 => write!(f, "symlog10"),
        }
    }
}

impl FromStr for RemapFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" | "none" => Ok(Self::Linear),
            "pseudolog10" | "pseudolog" => Ok(Self::PseudoLog10),
            "symlog10" | "symlog" => Ok(Self::SymLog10),
            _ => Err(format!("Unknown remap function: {}", s)),
        }
    }
}
