use std::collections::HashSet;

use crate::error::Result;
use crate::math::Vector3;
use crate::topology::{EdgeId, FaceId, SolidId, TopologyStore, VertexId};

/// Translates a solid by a displacement vector.
pub struct Translate {
    solid: SolidId,
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(solid: SolidId, displacement: Vector3) -> Self {
        Self {
            solid,
            displacement,
        }
    }

    /// Executes the translation, modifying the solid in-place.
    ///
    /// Moves every vertex once, then every edge segment and face plane.
    ///
    /// # Errors
    ///
    /// Returns an error if any topology entity is missing.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<()> {
        let faces = store.solid_faces(self.solid)?;
        let mut vertices: HashSet<VertexId> = HashSet::new();
        let mut edges: HashSet<EdgeId> = HashSet::new();
        let mut unique_faces: HashSet<FaceId> = HashSet::new();

        for &face_id in &faces {
            unique_faces.insert(face_id);
            let loops: Vec<_> = store.face(face_id)?.loops().collect();
            for wire_id in loops {
                for oe in &store.wire(wire_id)?.edges {
                    let edge = store.edge(oe.edge)?;
                    edges.insert(oe.edge);
                    vertices.insert(edge.start);
                    vertices.insert(edge.end);
                }
            }
        }

        for vid in vertices {
            store.vertex_mut(vid)?.translate(&self.displacement);
        }
        for eid in edges {
            let edge = store.edge_mut(eid)?;
            edge.line = edge.line.translated(&self.displacement);
        }
        for fid in unique_faces {
            let face = store.face_mut(fid)?;
            face.surface = face.surface.translated(&self.displacement);
        }
        Ok(())
    }
}
