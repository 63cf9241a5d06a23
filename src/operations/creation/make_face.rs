use crate::error::Result;
use crate::geometry::Plane;
use crate::math::polygon_2d::newell_normal;
use crate::math::Point3;
use crate::topology::{FaceData, FaceId, TopologyStore, WireId};

/// Creates a planar face bounded by closed wires.
///
/// The plane normal follows the winding of the outer wire (Newell's method),
/// so a counter-clockwise loop seen from above yields an upward face.
pub struct MakeFace {
    outer_wire: WireId,
    inner_wires: Vec<WireId>,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(outer_wire: WireId, inner_wires: Vec<WireId>) -> Self {
        Self {
            outer_wire,
            inner_wires,
        }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if a wire is missing or the outer wire is degenerate.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        for &inner in &self.inner_wires {
            store.wire(inner)?;
        }
        let points = wire_points(store, self.outer_wire)?;
        let normal = newell_normal(&points)?;
        let surface = Plane::from_normal(points[0], normal)?;

        Ok(store.add_face(FaceData {
            surface,
            outer_wire: self.outer_wire,
            inner_wires: self.inner_wires.clone(),
            same_sense: true,
        }))
    }
}

/// Collects vertex positions of a wire in traversal order.
///
/// # Errors
///
/// Returns an error if the wire, one of its edges or vertices is missing.
pub fn wire_points(store: &TopologyStore, wire: WireId) -> Result<Vec<Point3>> {
    let edges = &store.wire(wire)?.edges;
    let mut points = Vec::with_capacity(edges.len());
    for oe in edges {
        let edge = store.edge(oe.edge)?;
        let vertex = if oe.forward { edge.start } else { edge.end };
        points.push(store.vertex(vertex)?.point);
    }
    Ok(points)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeWire;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn clockwise_loop_faces_down() {
        let mut store = TopologyStore::new();
        let wire = MakeWire::new(
            vec![p(0.0, 0.0, 2.0), p(0.0, 5.0, 2.0), p(5.0, 5.0, 2.0), p(5.0, 0.0, 2.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(wire, vec![]).execute(&mut store).unwrap();
        let data = store.face(face).unwrap();
        assert_relative_eq!(data.normal().z, -1.0);
        assert_relative_eq!(data.surface.distance_to(&p(1.0, 1.0, 2.0)), 0.0);
    }

    #[test]
    fn loops_list_outer_first() {
        let mut store = TopologyStore::new();
        let outer = MakeWire::new(
            vec![p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0), p(10.0, 10.0, 0.0), p(0.0, 10.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let inner = MakeWire::new(
            vec![p(2.0, 2.0, 0.0), p(2.0, 4.0, 0.0), p(4.0, 4.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(outer, vec![inner]).execute(&mut store).unwrap();
        let loops: Vec<_> = store.face(face).unwrap().loops().collect();
        assert_eq!(loops, vec![outer, inner]);
    }
}
