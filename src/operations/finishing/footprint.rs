use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::Line;
use crate::math::{almost_equal_vectors, down, Point3};
use crate::model::{BuildingModel, ElementId, GeometryObject, Level};
use crate::tessellation::TessellateCurve;

/// Fewest tessellated points that still describe a polygon (three segments).
pub const MIN_FOOTPRINT_POINTS: usize = 6;

/// The plan outline of a solid's bottom face, projected onto a level.
///
/// Segments keep the order in which the bottom face edges were walked.
/// Closure is assumed from the source geometry, not checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Footprint {
    segments: Vec<Line>,
}

impl Footprint {
    /// The footprint segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Line] {
        &self.segments
    }

    /// Consumes the footprint, returning its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<Line> {
        self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// `true` if no footprint could be derived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Extracts the footprint of an element's solids on a level.
///
/// Only faces whose normal is `-Z` contribute. Every edge of every loop of
/// those faces is tessellated and the points are paired up by [`pair_points`].
pub struct FootprintOnLevel {
    element: ElementId,
    level: ElementId,
}

impl FootprintOnLevel {
    /// Creates a new `FootprintOnLevel` operation.
    #[must_use]
    pub fn new(element: ElementId, level: ElementId) -> Self {
        Self { element, level }
    }

    /// Executes the extraction.
    ///
    /// # Errors
    ///
    /// Returns an error if the element or level is missing, or if the
    /// element's topology is inconsistent.
    pub fn execute<M: BuildingModel>(&self, model: &M) -> Result<Footprint> {
        let elevation = model.get::<Level>(self.level)?.elevation;
        let store = model.topology();

        let mut points = Vec::new();
        for object in model.geometry(self.element)? {
            let GeometryObject::Solid(solid) = object else {
                continue;
            };
            for face_id in store.solid_faces(solid)? {
                let face = store.face(face_id)?;
                if !almost_equal_vectors(&face.normal(), &down()) {
                    continue;
                }
                for wire_id in face.loops() {
                    for oriented in &store.wire(wire_id)?.edges {
                        points.extend(TessellateCurve::new(oriented.edge).execute(store)?.points);
                    }
                }
            }
        }

        debug!(element = ?self.element, points = points.len(), "bottom face tessellated");
        pair_points(&points, elevation)
    }
}

/// Builds a footprint from tessellated points taken two at a time.
///
/// Every point is moved to `elevation` first. Fewer than
/// [`MIN_FOOTPRINT_POINTS`] points, or an odd count, yields an empty footprint.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if a pair collapses to one point.
pub fn pair_points(points: &[Point3], elevation: f64) -> Result<Footprint> {
    if points.len() < MIN_FOOTPRINT_POINTS {
        return Ok(Footprint::default());
    }
    if points.len() % 2 != 0 {
        warn!(count = points.len(), "odd tessellated point count, footprint dropped");
        return Ok(Footprint::default());
    }

    let segments = points
        .chunks_exact(2)
        .map(|pair| {
            let start = Point3::new(pair[0].x, pair[0].y, elevation);
            let end = Point3::new(pair[1].x, pair[1].y, elevation);
            Line::bound(start, end)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Footprint { segments })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::MemoryModel;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn ring(n: usize) -> Vec<Point3> {
        // Points around a circle, each edge emitted as [start, end].
        let corners: Vec<Point3> = (0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let angle = std::f64::consts::TAU * i as f64 / n as f64;
                p(angle.cos(), angle.sin(), -0.3)
            })
            .collect();
        (0..n).flat_map(|i| [corners[i], corners[(i + 1) % n]]).collect()
    }

    #[test]
    fn fewer_than_six_points_is_empty() {
        let points = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)];
        assert!(pair_points(&points, 0.0).unwrap().is_empty());
    }

    #[test]
    fn six_points_make_a_triangle() {
        let footprint = pair_points(&ring(3), 0.0).unwrap();
        assert_eq!(footprint.len(), 3);
    }

    #[test]
    fn even_counts_make_half_as_many_segments_on_the_level() {
        for n in [4, 5, 8] {
            let footprint = pair_points(&ring(n), 2.5).unwrap();
            assert_eq!(footprint.len(), n);
            for segment in footprint.segments() {
                assert_relative_eq!(segment.start().z, 2.5);
                assert_relative_eq!(segment.end().z, 2.5);
            }
        }
    }

    #[test]
    fn odd_count_is_empty() {
        let mut points = ring(4);
        points.push(p(9.0, 9.0, 0.0));
        assert!(pair_points(&points, 0.0).unwrap().is_empty());
    }

    #[test]
    fn pairs_keep_input_order() {
        let points = ring(4);
        let footprint = pair_points(&points, 0.0).unwrap();
        for (i, segment) in footprint.segments().iter().enumerate() {
            assert_relative_eq!(segment.start().x, points[2 * i].x);
            assert_relative_eq!(segment.end().y, points[2 * i + 1].y);
        }
    }

    #[test]
    fn slab_footprint_lands_on_level() {
        let mut model = MemoryModel::new();
        let level = model.add_level("L1", 3.0);
        let profile = vec![p(0.0, 0.0, 3.0), p(6.0, 0.0, 3.0), p(6.0, 4.0, 3.0), p(0.0, 4.0, 3.0)];
        let floor = model.add_floor("Slab", level, profile, 0.25).unwrap();

        let footprint = FootprintOnLevel::new(floor, level).execute(&model).unwrap();
        assert_eq!(footprint.len(), 4);
        let perimeter: f64 = footprint.segments().iter().map(Line::length).sum();
        assert_relative_eq!(perimeter, 20.0);
        assert!(footprint.segments().iter().all(|s| (s.start().z - 3.0).abs() < 1e-12));
    }

    #[test]
    fn element_without_solid_has_empty_footprint() {
        let mut model = MemoryModel::new();
        let level = model.add_level("L1", 0.0);
        let wall_type = model.add_wall_type("Generic", 0.5);
        let wall = model
            .add_wall(wall_type, level, p(0.0, 0.0, 0.0), p(5.0, 0.0, 0.0), 3.0)
            .unwrap();
        assert!(FootprintOnLevel::new(wall, level).execute(&model).unwrap().is_empty());
    }
}
