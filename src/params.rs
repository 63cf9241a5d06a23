use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::math::units::LengthUnit;

/// Parameters of a finishing run.
///
/// Every field has a default, so a JSON override only needs the fields it
/// changes:
///
/// ```
/// use floor_finish::params::FinishParams;
///
/// let params = FinishParams::from_json(r#"{ "wall_type_name": "Plaster" }"#).unwrap();
/// assert_eq!(params.wall_type_name, "Plaster");
/// assert_eq!(params.area_precision, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FinishParams {
    /// Name of the wall type the finishing walls are built with.
    pub wall_type_name: String,
    /// Linear unit the model stores coordinates in.
    pub unit: LengthUnit,
    /// Decimal places kept in the reported area.
    pub area_precision: u32,
    /// Draw the floor footprint as model curves.
    pub draw_footprint: bool,
}

impl Default for FinishParams {
    fn default() -> Self {
        Self {
            wall_type_name: "Finishing".to_owned(),
            unit: LengthUnit::Foot,
            area_precision: 2,
            draw_footprint: false,
        }
    }
}

impl FinishParams {
    /// Parses parameters from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Malformed` if the JSON does not parse.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e).into())
    }

    /// Sets the finishing wall type name.
    #[must_use]
    pub fn with_wall_type_name(mut self, name: impl Into<String>) -> Self {
        self.wall_type_name = name.into();
        self
    }

    /// Sets the model's length unit.
    #[must_use]
    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the area rounding precision.
    #[must_use]
    pub fn with_area_precision(mut self, decimals: u32) -> Self {
        self.area_precision = decimals;
        self
    }

    /// Enables or disables drawing the footprint.
    #[must_use]
    pub fn with_footprint_drawing(mut self, draw: bool) -> Self {
        self.draw_footprint = draw;
        self
    }
}
