use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Key of a wire (edge loop) in the topology store.
    pub struct WireId;
}

/// An edge as it is traversed by a wire.
#[derive(Debug, Clone, Copy)]
pub struct OrientedEdge {
    pub edge: EdgeId,
    /// `false` when the wire walks the edge from its end to its start.
    pub forward: bool,
}

impl OrientedEdge {
    #[must_use]
    pub fn new(edge: EdgeId, forward: bool) -> Self {
        Self { edge, forward }
    }
}

/// An ordered chain of edges. Face boundaries are closed wires.
#[derive(Debug, Clone)]
pub struct WireData {
    pub edges: Vec<OrientedEdge>,
    pub is_closed: bool,
}

impl WireData {
    /// Number of edges in the wire.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
