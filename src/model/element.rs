use crate::geometry::{Line, Plane};
use crate::math::{Point2, Point3};
use crate::topology::SolidId;

use super::ElementId;

/// A horizontal reference plane hosting floors, walls and rooms.
#[derive(Debug, Clone)]
pub struct Level {
    pub name: String,
    pub elevation: f64,
}

/// A floor slab. Its geometry is an extruded solid.
#[derive(Debug, Clone)]
pub struct Floor {
    pub name: String,
    pub level: Option<ElementId>,
    pub solid: Option<SolidId>,
}

/// A named wall type. `width` is the total wall thickness.
#[derive(Debug, Clone)]
pub struct WallType {
    pub name: String,
    pub width: f64,
}

/// A wall hosted on a level.
///
/// Walls whose location is not a straight line carry no `centerline`.
#[derive(Debug, Clone)]
pub struct Wall {
    pub wall_type: ElementId,
    pub level: ElementId,
    pub centerline: Option<Line>,
    pub height: f64,
    pub base_offset: f64,
    pub flipped: bool,
    pub structural: bool,
}

impl Wall {
    /// Wall face area, centerline length times height.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.centerline.as_ref().map_or(0.0, |c| c.length() * self.height)
    }
}

/// One segment of a room boundary, as reported by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundarySegment {
    pub start: Point3,
    pub end: Point3,
    /// The element that bounds the room along this segment, if any.
    pub element: Option<ElementId>,
}

impl BoundarySegment {
    /// Returns the segment's curve, or `None` when it has zero length.
    #[must_use]
    pub fn curve(&self) -> Option<Line> {
        Line::bound(self.start, self.end).ok()
    }
}

/// A room placed at a plan location on a level.
///
/// `boundary` holds one group of segments per ring. An unbounded room has
/// no groups and zero area.
#[derive(Debug, Clone)]
pub struct Room {
    pub level: ElementId,
    pub location: Point2,
    pub boundary: Vec<Vec<BoundarySegment>>,
    pub area: f64,
}

/// A model line drawn on a sketch plane.
#[derive(Debug, Clone)]
pub struct ModelCurve {
    pub line: Line,
    pub sketch_plane: Plane,
}

/// Arguments for creating a wall along a curve.
#[derive(Debug, Clone)]
pub struct NewWall {
    pub curve: Line,
    pub wall_type: ElementId,
    pub level: ElementId,
    pub height: f64,
    pub offset: f64,
    pub flipped: bool,
    pub structural: bool,
}
