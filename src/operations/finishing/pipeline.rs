use tracing::info;

use crate::error::{PipelineError, Result};
use crate::geometry::{Line, Plane};
use crate::math::TOLERANCE;
use crate::model::{BuildingModel, ElementId, Floor, Level, Wall};
use crate::params::FinishParams;

use super::{
    AlignReport, AlignWalls, DrawModelLines, ExtractRoomBoundary, Footprint, FootprintOnLevel,
    GenerateFinishingWalls, GenerationReport, PlaceRoom, TotalArea, WallHeight,
};

/// Everything one finishing run produced.
#[derive(Debug, Clone)]
pub struct FinishOutcome {
    /// Footprint of the floor on its level.
    pub footprint: Footprint,
    /// What happened to the pre-existing walls.
    pub alignment: AlignReport,
    /// The room placed on the floor.
    pub room: ElementId,
    /// The room boundary the finishing walls follow.
    pub boundary: Vec<Line>,
    /// The finishing walls built along the boundary.
    pub generation: GenerationReport,
    /// Finishing wall area plus room area, in square meters.
    pub total_area: f64,
}

/// Runs the whole floor finishing pass on a model.
///
/// Works on the first floor in the model and every wall present when the
/// run starts. Stages commit as they go; a later failure leaves earlier
/// stages applied.
pub struct FinishFloor {
    params: FinishParams,
}

impl FinishFloor {
    /// Creates a new `FinishFloor` operation.
    #[must_use]
    pub fn new(params: FinishParams) -> Self {
        Self { params }
    }

    /// Executes the pipeline.
    ///
    /// # Errors
    ///
    /// Returns the `PipelineError` of the first stage that found nothing to
    /// work with, or any model or geometry error raised along the way.
    pub fn execute<M: BuildingModel>(&self, model: &mut M) -> Result<FinishOutcome> {
        let walls = model.collect::<Wall>();
        if walls.is_empty() {
            return Err(PipelineError::NoWalls.into());
        }
        let height = first_wall_height(model, &walls)?.ok_or(PipelineError::NoWallWithBoundingBox)?;
        if height.abs() < TOLERANCE {
            return Err(PipelineError::ZeroWallHeight.into());
        }

        let floor = *model.collect::<Floor>().first().ok_or(PipelineError::NoFloor)?;
        let level = model
            .get::<Floor>(floor)?
            .level
            .filter(|&level| model.get::<Level>(level).is_ok())
            .ok_or(PipelineError::NoLevel)?;
        info!(walls = walls.len(), height, ?floor, "finishing floor");

        let footprint = FootprintOnLevel::new(floor, level).execute(model)?;
        if footprint.is_empty() {
            return Err(PipelineError::EmptyFootprint.into());
        }
        if self.params.draw_footprint {
            let elevation = model.get::<Level>(level)?.elevation;
            DrawModelLines::new(footprint.segments().to_vec(), Plane::horizontal(elevation))
                .execute(model)?;
        }

        let alignment = AlignWalls::new(walls, footprint.segments().to_vec()).execute(model)?;

        let room = PlaceRoom::new(floor, level)
            .execute(model)?
            .ok_or(PipelineError::NoRoom)?;
        let boundary = ExtractRoomBoundary::new(room).execute(model)?;
        if boundary.is_empty() {
            return Err(PipelineError::EmptyBoundary.into());
        }

        let generation = GenerateFinishingWalls::new(
            boundary.clone(),
            height,
            level,
            self.params.wall_type_name.as_str(),
        )
        .execute(model)?;
        if generation.created.is_empty() {
            return Err(PipelineError::NoFinishingWalls.into());
        }

        let total_area = TotalArea::new(generation.created.clone(), room)
            .with_unit(self.params.unit)
            .with_precision(self.params.area_precision)
            .execute(model)?;

        Ok(FinishOutcome {
            footprint,
            alignment,
            room,
            boundary,
            generation,
            total_area,
        })
    }
}

fn first_wall_height<M: BuildingModel>(model: &M, walls: &[ElementId]) -> Result<Option<f64>> {
    for &wall in walls {
        if let Some(height) = WallHeight::new(wall).execute(model)? {
            return Ok(Some(height));
        }
    }
    Ok(None)
}
