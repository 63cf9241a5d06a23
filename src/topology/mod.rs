pub mod edge;
pub mod face;
pub mod shell;
pub mod solid;
pub mod vertex;
pub mod wire;

pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId};
pub use shell::{ShellData, ShellId};
pub use solid::{SolidData, SolidId};
pub use vertex::{VertexData, VertexId};
pub use wire::{OrientedEdge, WireData, WireId};

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns the topology of every solid in a model.
///
/// Entities reference each other via typed IDs (generational indices).
/// The store is cloned wholesale when a mutation scope takes its snapshot.
#[derive(Debug, Default, Clone)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    wires: SlotMap<WireId, WireData>,
    faces: SlotMap<FaceId, FaceData>,
    shells: SlotMap<ShellId, ShellData>,
    solids: SlotMap<SolidId, SolidData>,
}

macro_rules! arena_accessors {
    ($field:ident, $id:ty, $data:ty, $add:ident, $get:ident, $get_mut:ident, $name:literal) => {
        #[doc = concat!("Inserts a ", $name, " and returns its ID.")]
        pub fn $add(&mut self, data: $data) -> $id {
            self.$field.insert(data)
        }

        #[doc = concat!("Returns the ", $name, " data.")]
        ///
        /// # Errors
        ///
        /// Returns `TopologyError::EntityNotFound` if the ID is stale.
        pub fn $get(&self, id: $id) -> Result<&$data, TopologyError> {
            self.$field
                .get(id)
                .ok_or_else(|| TopologyError::EntityNotFound($name.into()))
        }

        #[doc = concat!("Returns the ", $name, " data mutably.")]
        ///
        /// # Errors
        ///
        /// Returns `TopologyError::EntityNotFound` if the ID is stale.
        pub fn $get_mut(&mut self, id: $id) -> Result<&mut $data, TopologyError> {
            self.$field
                .get_mut(id)
                .ok_or_else(|| TopologyError::EntityNotFound($name.into()))
        }
    };
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    arena_accessors!(vertices, VertexId, VertexData, add_vertex, vertex, vertex_mut, "vertex");
    arena_accessors!(edges, EdgeId, EdgeData, add_edge, edge, edge_mut, "edge");
    arena_accessors!(wires, WireId, WireData, add_wire, wire, wire_mut, "wire");
    arena_accessors!(faces, FaceId, FaceData, add_face, face, face_mut, "face");
    arena_accessors!(shells, ShellId, ShellData, add_shell, shell, shell_mut, "shell");
    arena_accessors!(solids, SolidId, SolidData, add_solid, solid, solid_mut, "solid");

    /// Returns every face of a solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid or its shell is missing.
    pub fn solid_faces(&self, id: SolidId) -> Result<Vec<FaceId>, TopologyError> {
        let shell = self.solid(id)?.shell;
        Ok(self.shell(shell)?.faces.clone())
    }
}
