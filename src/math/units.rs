use std::fmt;

use serde::Deserialize;

/// Length of one foot in meters.
pub const FOOT_TO_METER: f64 = 0.3048;

/// Linear unit the model stores its coordinates in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Foot,
    Inch,
    Meter,
    Centimeter,
    Millimeter,
}

impl LengthUnit {
    /// Returns how many meters one unit spans.
    #[must_use]
    pub fn meters_per_unit(self) -> f64 {
        match self {
            Self::Foot => FOOT_TO_METER,
            Self::Inch => FOOT_TO_METER / 12.0,
            Self::Meter => 1.0,
            Self::Centimeter => 0.01,
            Self::Millimeter => 0.001,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Foot => write!(f, "ft"),
            Self::Inch => write!(f, "in"),
            Self::Meter => write!(f, "m"),
            Self::Centimeter => write!(f, "cm"),
            Self::Millimeter => write!(f, "mm"),
        }
    }
}

/// Most decimal places [`round_half_away`] honors; finer requests are clamped.
pub const MAX_DECIMALS: u32 = 15;

/// Rounds `value` to `decimals` places, halves away from zero.
///
/// `decimals` is clamped to [`MAX_DECIMALS`]. A value too large to scale is
/// returned unchanged.
#[must_use]
pub fn round_half_away(value: f64, decimals: u32) -> f64 {
    let exponent = i32::try_from(decimals.min(MAX_DECIMALS)).unwrap_or(0);
    let scale = 10f64.powi(exponent);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Converts an area in square `unit` to square meters, rounded to `decimals` places.
#[must_use]
pub fn square_units_to_square_meters(area: f64, unit: LengthUnit, decimals: u32) -> f64 {
    let factor = unit.meters_per_unit();
    round_half_away(factor * factor * area, decimals)
}

/// Converts an area in square meters back to square `unit`. Not rounded.
#[must_use]
pub fn square_meters_to_square_units(area: f64, unit: LengthUnit) -> f64 {
    let factor = unit.meters_per_unit();
    area / (factor * factor)
}

/// Converts square feet to square meters, rounded to `decimals` places.
#[must_use]
pub fn sq_feet_to_sq_meters(area: f64, decimals: u32) -> f64 {
    square_units_to_square_meters(area, LengthUnit::Foot, decimals)
}
