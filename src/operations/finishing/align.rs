use tracing::{debug, info};

use crate::error::Result;
use crate::geometry::Line;
use crate::math::{almost_equal_points, Point3};
use crate::model::{BuildingModel, ElementId, MutationScope, Wall};

/// Outcome of [`AlignWalls`], one count per wall.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignReport {
    /// Walls that were translated, in processing order.
    pub moved: Vec<ElementId>,
    /// Walls already aligned or with no parallel footprint edge.
    pub unchanged: usize,
    /// Walls without a straight centerline.
    pub skipped: usize,
}

/// Snaps wall centerlines onto the nearest parallel footprint edge.
///
/// A wall moves by the vector from its centerline midpoint to the chosen
/// edge midpoint. Each move commits in its own mutation scope, so a failure
/// leaves earlier walls moved.
pub struct AlignWalls {
    walls: Vec<ElementId>,
    edges: Vec<Line>,
}

impl AlignWalls {
    /// Creates a new `AlignWalls` operation.
    #[must_use]
    pub fn new(walls: Vec<ElementId>, edges: Vec<Line>) -> Self {
        Self { walls, edges }
    }

    /// Executes the alignment.
    ///
    /// # Errors
    ///
    /// Returns an error if a wall is missing or the model rejects a move.
    pub fn execute<M: BuildingModel>(&self, model: &mut M) -> Result<AlignReport> {
        let mut report = AlignReport::default();

        for &wall in &self.walls {
            let Some(centerline) = model.get::<Wall>(wall)?.centerline.clone() else {
                debug!(?wall, "wall has no straight centerline, skipped");
                report.skipped += 1;
                continue;
            };

            let midpoint = centerline.midpoint();
            let target = match nearest_parallel_midpoint(&centerline, &self.edges) {
                Some(target) if !almost_equal_points(&target, &midpoint) => target,
                _ => {
                    report.unchanged += 1;
                    continue;
                }
            };

            let offset = target - midpoint;
            let mut scope = MutationScope::begin(model, "Align wall")?;
            scope.translate_element(wall, &offset)?;
            scope.commit()?;
            debug!(?wall, dx = offset.x, dy = offset.y, dz = offset.z, "wall aligned");
            report.moved.push(wall);
        }

        info!(
            moved = report.moved.len(),
            unchanged = report.unchanged,
            skipped = report.skipped,
            "walls aligned to footprint"
        );
        Ok(report)
    }
}

/// Midpoint of the footprint edge nearest to `centerline` among those parallel to it.
///
/// An edge whose midpoint already coincides with the centerline midpoint wins
/// immediately. Among equidistant edges the first one is kept.
#[must_use]
pub fn nearest_parallel_midpoint(centerline: &Line, edges: &[Line]) -> Option<Point3> {
    let midpoint = centerline.midpoint();
    let mut nearest: Option<(Point3, f64)> = None;

    for edge in edges.iter().filter(|e| e.is_parallel_to(centerline)) {
        let candidate = edge.midpoint();
        if almost_equal_points(&candidate, &midpoint) {
            return Some(candidate);
        }
        let distance = nalgebra::distance(&candidate, &midpoint);
        let closer = match nearest {
            Some((_, best)) => distance < best,
            None => true,
        };
        if closer {
            nearest = Some((candidate, distance));
        }
    }

    nearest.map(|(point, _)| point)
}
