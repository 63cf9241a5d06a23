use crate::error::Result;
use crate::topology::{EdgeId, TopologyStore};

use super::Polyline;

/// Tessellates an edge into a polyline.
///
/// Points follow the edge's natural direction (start vertex to end vertex),
/// regardless of how any wire traverses the edge. Straight edges yield
/// exactly their two endpoints, which is what footprint extraction pairs up.
pub struct TessellateCurve {
    edge: EdgeId,
}

impl TessellateCurve {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(edge: EdgeId) -> Self {
        Self { edge }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or one of its vertices is not found.
    pub fn execute(&self, store: &TopologyStore) -> Result<Polyline> {
        let edge = store.edge(self.edge)?;
        let start = store.vertex(edge.start)?.point;
        let end = store.vertex(edge.end)?.point;
        Ok(Polyline {
            points: vec![start, end],
        })
    }
}
