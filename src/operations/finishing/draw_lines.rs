use tracing::debug;

use crate::error::Result;
use crate::geometry::{Line, Plane};
use crate::model::{BuildingModel, ElementId, MutationScope};

/// Draws lines as model curves on a sketch plane.
///
/// Joins the caller's open scope if there is one, otherwise commits its own.
pub struct DrawModelLines {
    lines: Vec<Line>,
    plane: Plane,
}

impl DrawModelLines {
    /// Creates a new `DrawModelLines` operation.
    #[must_use]
    pub fn new(lines: Vec<Line>, plane: Plane) -> Self {
        Self { lines, plane }
    }

    /// Executes the drawing, returning one model curve per line.
    ///
    /// # Errors
    ///
    /// Returns an error if a line does not lie on the plane.
    pub fn execute<M: BuildingModel>(&self, model: &mut M) -> Result<Vec<ElementId>> {
        if model.is_modifiable() {
            return self.draw(model);
        }
        let mut scope = MutationScope::begin(model, "Create Model Curves")?;
        let curves = self.draw(&mut *scope)?;
        scope.commit()?;
        Ok(curves)
    }

    fn draw<M: BuildingModel>(&self, model: &mut M) -> Result<Vec<ElementId>> {
        let curves = self
            .lines
            .iter()
            .map(|line| model.create_model_curve(line.clone(), &self.plane))
            .collect::<Result<Vec<_>>>()?;
        debug!(count = curves.len(), "model curves drawn");
        Ok(curves)
    }
}
