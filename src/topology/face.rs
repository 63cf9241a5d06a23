use crate::geometry::Plane;
use crate::math::Vector3;

use super::wire::WireId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// Data associated with a topological face.
///
/// A face is a bounded region on a plane, defined by an outer wire
/// and optionally inner wires (holes).
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The plane on which this face lies.
    pub surface: Plane,
    /// The outer boundary wire.
    pub outer_wire: WireId,
    /// Inner boundary wires (holes).
    pub inner_wires: Vec<WireId>,
    /// If `true`, the face normal agrees with the plane normal.
    pub same_sense: bool,
}

impl FaceData {
    /// Returns the outward face normal, honoring `same_sense`.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        let n = *self.surface.normal();
        if self.same_sense {
            n
        } else {
            -n
        }
    }

    /// Returns every edge loop of the face, outer wire first.
    pub fn loops(&self) -> impl Iterator<Item = WireId> + '_ {
        std::iter::once(self.outer_wire).chain(self.inner_wires.iter().copied())
    }
}
