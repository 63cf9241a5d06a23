use tracing::info;

use crate::error::Result;
use crate::math::units::{square_units_to_square_meters, LengthUnit};
use crate::model::{BuildingModel, ElementId};

/// Total finished area of a set of walls plus a room, in square meters.
///
/// Areas are summed in the model's native square unit, converted with the
/// squared linear factor of `unit` and rounded half away from zero.
pub struct TotalArea {
    walls: Vec<ElementId>,
    room: ElementId,
    unit: LengthUnit,
    precision: u32,
}

impl TotalArea {
    /// Creates a new `TotalArea` query for a model in feet, rounded to 2 places.
    #[must_use]
    pub fn new(walls: Vec<ElementId>, room: ElementId) -> Self {
        Self {
            walls,
            room,
            unit: LengthUnit::Foot,
            precision: 2,
        }
    }

    /// Sets the model's native length unit.
    #[must_use]
    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the number of decimal places kept.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Executes the aggregation.
    ///
    /// # Errors
    ///
    /// Returns an error if a wall or the room has no area.
    pub fn execute<M: BuildingModel>(&self, model: &M) -> Result<f64> {
        let mut native = model.element_area(self.room)?;
        for &wall in &self.walls {
            native += model.element_area(wall)?;
        }
        let total = square_units_to_square_meters(native, self.unit, self.precision);
        info!(native, unit = %self.unit, total, "finished area computed");
        Ok(total)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::units::round_half_away;
    use crate::math::{Point2, Point3};
    use crate::model::{MemoryModel, Room};
    use approx::assert_relative_eq;

    fn room_model(area: f64) -> (MemoryModel, ElementId, ElementId) {
        let mut model = MemoryModel::new();
        let level = model.add_level("L1", 0.0);
        let room = model.insert(Room {
            level,
            location: Point2::new(0.0, 0.0),
            boundary: Vec::new(),
            area,
        });
        (model, level, room)
    }

    #[test]
    fn room_alone_is_converted_and_rounded() {
        let (model, _, room) = room_model(100.0);
        let total = TotalArea::new(Vec::new(), room).execute(&model).unwrap();
        assert_relative_eq!(total, round_half_away(0.3048 * 0.3048 * 100.0, 2));
        assert_relative_eq!(total, 9.29);
    }

    #[test]
    fn walls_add_length_times_height() {
        let (mut model, level, room) = room_model(100.0);
        let wall_type = model.add_wall_type("Finishing", 0.05);
        let a = model
            .add_wall(wall_type, level, Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0), 12.0)
            .unwrap();
        let b = model
            .add_wall(wall_type, level, Point3::new(10.0, 0.0, 0.0), Point3::new(10.0, 10.0, 0.0), 12.0)
            .unwrap();

        let total = TotalArea::new(vec![a, b], room).execute(&model).unwrap();
        // 340 ft²
        assert_relative_eq!(total, 31.59);
    }

    #[test]
    fn metric_model_with_more_precision() {
        let (model, _, room) = room_model(12.3456);
        let total = TotalArea::new(Vec::new(), room)
            .with_unit(LengthUnit::Meter)
            .with_precision(3)
            .execute(&model)
            .unwrap();
        assert_relative_eq!(total, 12.346);
    }

    #[test]
    fn non_area_element_fails() {
        let (model, level, _) = room_model(1.0);
        assert!(TotalArea::new(Vec::new(), level).execute(&model).is_err());
    }
}
