use super::shell::ShellId;

slotmap::new_key_type! {
    /// Key of a solid in the topology store.
    pub struct SolidId;
}

/// A slab-like volume bounded by one closed shell. Voids are not modelled.
#[derive(Debug, Clone)]
pub struct SolidData {
    pub shell: ShellId,
}
