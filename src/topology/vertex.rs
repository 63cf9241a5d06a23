use crate::math::{Point3, Vector3};

slotmap::new_key_type! {
    /// Key of a vertex in the topology store.
    pub struct VertexId;
}

/// A topological vertex: a position shared by the edges meeting there.
#[derive(Debug, Clone)]
pub struct VertexData {
    pub point: Point3,
}

impl VertexData {
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Moves the vertex by `offset`.
    pub fn translate(&mut self, offset: &Vector3) {
        self.point += *offset;
    }
}
