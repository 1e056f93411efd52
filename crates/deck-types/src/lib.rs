pub mod color;
pub mod fmt;
pub mod vector;

pub use color::{AngelColor, Rgb};
pub use vector::Vec3;

use serde::{Deserialize, Serialize};

/// How element quantities in a material are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioType {
    /// Quantities are atom counts (stoichiometric ratios).
    Atomic,
    /// Quantities are mass fractions.
    Mass,
}

/// Coordinate axis, used for axis-aligned planes and torus rotation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}
