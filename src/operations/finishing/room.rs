use tracing::info;

use crate::error::{PipelineError, Result};
use crate::math::Point2;
use crate::model::{BuildingModel, ElementId, MutationScope};

/// Places a room at the plan center of a floor.
pub struct PlaceRoom {
    floor: ElementId,
    level: ElementId,
}

impl PlaceRoom {
    /// Creates a new `PlaceRoom` operation.
    #[must_use]
    pub fn new(floor: ElementId, level: ElementId) -> Self {
        Self { floor, level }
    }

    /// The plan point at the center of the floor's bounding box.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::FloorHasNoBoundingBox` if the floor has no box.
    pub fn marker<M: BuildingModel>(&self, model: &M) -> Result<Point2> {
        let bbox = model
            .bounding_box(self.floor)?
            .ok_or(PipelineError::FloorHasNoBoundingBox)?;
        Ok(bbox.plan_center())
    }

    /// Creates the room in its own mutation scope. `Ok(None)` means the model
    /// placed no room.
    ///
    /// # Errors
    ///
    /// Returns an error if the marker cannot be computed or the model rejects
    /// the creation.
    pub fn execute<M: BuildingModel>(&self, model: &mut M) -> Result<Option<ElementId>> {
        let marker = self.marker(model)?;

        let mut scope = MutationScope::begin(model, "Create room")?;
        let room = scope.create_room(self.level, marker)?;
        scope.commit()?;

        info!(x = marker.x, y = marker.y, placed = room.is_some(), "room placed");
        Ok(room)
    }
}
