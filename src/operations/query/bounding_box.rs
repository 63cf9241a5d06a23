use crate::error::{OperationError, Result};
use crate::math::{Point2, Point3};
use crate::topology::{SolidId, TopologyStore};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Smallest box containing every point, or `None` for no points.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = *points.next()?;
        Some(points.fold(Self { min: first, max: first }, |acc, p| Self {
            min: acc.min.inf(p),
            max: acc.max.sup(p),
        }))
    }

    /// Vertical extent, `max.z - min.z`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Midpoint of the box projected onto the XY plane.
    #[must_use]
    pub fn plan_center(&self) -> Point2 {
        Point2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }
}

/// Computes the axis-aligned bounding box of a solid.
pub struct BoundingBox {
    solid: SolidId,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB over every vertex of the solid.
    ///
    /// # Errors
    ///
    /// Returns an error if a topology entity is missing, or
    /// `OperationError::Failed` if the solid has no vertices.
    pub fn execute(&self, store: &TopologyStore) -> Result<Aabb> {
        let mut points = Vec::new();
        for face_id in store.solid_faces(self.solid)? {
            for wire_id in store.face(face_id)?.loops() {
                for oe in &store.wire(wire_id)?.edges {
                    let edge = store.edge(oe.edge)?;
                    points.push(store.vertex(edge.start)?.point);
                    points.push(store.vertex(edge.end)?.point);
                }
            }
        }
        Aabb::from_points(&points)
            .ok_or_else(|| OperationError::Failed("solid has no vertices".into()).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::operations::shaping::Extrude;
    use approx::assert_relative_eq;

    #[test]
    fn box_bounds_match_corners() {
        let mut store = TopologyStore::new();
        let profile = vec![
            Point3::new(-1.0, 2.0, 0.5),
            Point3::new(3.0, 2.0, 0.5),
            Point3::new(3.0, 4.0, 0.5),
            Point3::new(-1.0, 4.0, 0.5),
        ];
        let solid = Extrude::new(profile, Vector3::new(0.0, 0.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let bb = BoundingBox::new(solid).execute(&store).unwrap();
        assert_relative_eq!(bb.min, Point3::new(-1.0, 2.0, 0.5));
        assert_relative_eq!(bb.max, Point3::new(3.0, 4.0, 1.5));
        assert_relative_eq!(bb.height(), 1.0);
        assert_relative_eq!(bb.plan_center(), Point2::new(1.0, 3.0));
    }

    #[test]
    fn empty_point_set_has_no_box() {
        assert!(Aabb::from_points(&Vec::<Point3>::new()).is_none());
    }
}
