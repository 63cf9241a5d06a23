use super::face::FaceId;

slotmap::new_key_type! {
    /// Key of a shell in the topology store.
    pub struct ShellId;
}

/// A connected set of faces. A solid's outer shell is closed (watertight).
#[derive(Debug, Clone)]
pub struct ShellData {
    pub faces: Vec<FaceId>,
    pub is_closed: bool,
}

impl ShellData {
    /// A watertight shell made of `faces`.
    #[must_use]
    pub fn closed(faces: Vec<FaceId>) -> Self {
        Self {
            faces,
            is_closed: true,
        }
    }
}
