use tracing::debug;

use crate::error::Result;
use crate::geometry::Line;
use crate::model::{BoundarySegment, BuildingModel, ElementId, Room};

/// Reads a room's boundary as one flat list of curves.
pub struct ExtractRoomBoundary {
    room: ElementId,
}

impl ExtractRoomBoundary {
    /// Creates a new `ExtractRoomBoundary` operation.
    #[must_use]
    pub fn new(room: ElementId) -> Self {
        Self { room }
    }

    /// Executes the extraction. An unbounded room yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not a room.
    pub fn execute<M: BuildingModel>(&self, model: &M) -> Result<Vec<Line>> {
        let room = model.get::<Room>(self.room)?;
        let curves = flatten_boundary(&room.boundary);
        debug!(rings = room.boundary.len(), curves = curves.len(), "room boundary extracted");
        Ok(curves)
    }
}

/// Flattens boundary rings into curves in reported order, dropping
/// zero-length segments. Ring identity is not kept.
#[must_use]
pub fn flatten_boundary(rings: &[Vec<BoundarySegment>]) -> Vec<Line> {
    rings
        .iter()
        .flatten()
        .filter_map(BoundarySegment::curve)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> BoundarySegment {
        BoundarySegment {
            start: Point3::new(x0, y0, 0.0),
            end: Point3::new(x1, y1, 0.0),
            element: None,
        }
    }

    #[test]
    fn zero_length_segments_are_dropped_in_order() {
        let rings = vec![
            vec![seg(0.0, 0.0, 4.0, 0.0), seg(4.0, 0.0, 4.0, 0.0), seg(4.0, 0.0, 4.0, 4.0)],
            vec![],
            vec![seg(1.0, 1.0, 1.0, 1.0), seg(1.0, 1.0, 2.0, 1.0)],
        ];
        let curves = flatten_boundary(&rings);
        assert_eq!(curves.len(), 3);
        assert_relative_eq!(curves[0].length(), 4.0);
        assert_relative_eq!(curves[1].end().y, 4.0);
        assert_relative_eq!(curves[2].start().x, 1.0);
    }

    #[test]
    fn no_rings_gives_no_curves() {
        assert!(flatten_boundary(&[]).is_empty());
    }
}
