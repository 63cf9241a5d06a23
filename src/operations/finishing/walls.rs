use tracing::{debug, info, warn};

use crate::error::Result;
use crate::geometry::Line;
use crate::model::{BuildingModel, ElementId, MutationScope, NewWall, WallType};

/// Outcome of [`GenerateFinishingWalls`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Walls created, one per accepted curve, in curve order.
    pub created: Vec<ElementId>,
    /// Curves the model refused to build a wall on.
    pub skipped: usize,
}

/// Looks up a wall type by exact, case-sensitive name.
#[must_use]
pub fn find_wall_type<M: BuildingModel>(model: &M, name: &str) -> Option<ElementId> {
    model
        .collect::<WallType>()
        .into_iter()
        .find(|&id| model.get::<WallType>(id).is_ok_and(|t| t.name == name))
}

/// Builds one wall of a named type along each curve.
///
/// All walls are created in a single mutation scope. A curve the model
/// refuses is counted and skipped; the remaining walls still commit.
pub struct GenerateFinishingWalls {
    curves: Vec<Line>,
    height: f64,
    level: ElementId,
    type_name: String,
}

impl GenerateFinishingWalls {
    /// Creates a new `GenerateFinishingWalls` operation.
    #[must_use]
    pub fn new(curves: Vec<Line>, height: f64, level: ElementId, type_name: impl Into<String>) -> Self {
        Self {
            curves,
            height,
            level,
            type_name: type_name.into(),
        }
    }

    /// Executes the generation. An unknown wall type yields an empty report
    /// without opening a scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the model fails outright; the scope is then rolled
    /// back.
    pub fn execute<M: BuildingModel>(&self, model: &mut M) -> Result<GenerationReport> {
        let Some(wall_type) = find_wall_type(model, &self.type_name) else {
            warn!(name = %self.type_name, "wall type not found");
            return Ok(GenerationReport::default());
        };

        let mut report = GenerationReport::default();
        let mut scope = MutationScope::begin(model, "Create finishing walls")?;
        for curve in &self.curves {
            let created = scope.create_wall(NewWall {
                curve: curve.clone(),
                wall_type,
                level: self.level,
                height: self.height,
                offset: 0.0,
                flipped: false,
                structural: false,
            })?;
            match created {
                Some(wall) => report.created.push(wall),
                None => {
                    debug!(length = curve.length(), "wall creation refused, curve skipped");
                    report.skipped += 1;
                }
            }
        }
        scope.commit()?;

        info!(created = report.created.len(), skipped = report.skipped, "finishing walls generated");
        Ok(report)
    }
}

/// Height of a wall from its bounding box.
pub struct WallHeight {
    wall: ElementId,
}

impl WallHeight {
    /// Creates a new `WallHeight` query.
    #[must_use]
    pub fn new(wall: ElementId) -> Self {
        Self { wall }
    }

    /// Vertical extent of the wall's bounding box, `None` when it has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the element does not exist.
    pub fn execute<M: BuildingModel>(&self, model: &M) -> Result<Option<f64>> {
        Ok(model.bounding_box(self.wall)?.map(|bbox| bbox.height()))
    }
}
