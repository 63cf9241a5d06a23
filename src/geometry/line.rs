use crate::error::{GeometryError, Result};
use crate::math::{self, Point3, Vector3, TOLERANCE};

/// A bound line segment between two points, with its unit direction cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point3,
    end: Point3,
    direction: Vector3,
    length: f64,
}

impl Line {
    /// Creates a segment from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the endpoints coincide.
    pub fn bound(start: Point3, end: Point3) -> Result<Self> {
        let delta = end - start;
        let length = delta.norm();
        if length < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            start,
            end,
            direction: delta / length,
            length,
        })
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Returns the unit direction from start to end.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the point halfway between the endpoints.
    #[must_use]
    pub fn midpoint(&self) -> Point3 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns `true` if both segments run along the same or opposite direction.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        math::is_parallel(&self.direction, &other.direction)
    }

    /// Returns a copy moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        Self {
            start: self.start + *offset,
            end: self.end + *offset,
            direction: self.direction,
            length: self.length,
        }
    }
}
