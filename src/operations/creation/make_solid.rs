use crate::error::{OperationError, Result};
use crate::topology::{ShellId, SolidData, SolidId, TopologyStore};

/// Wraps a closed shell into a solid.
pub struct MakeSolid {
    shell: ShellId,
}

impl MakeSolid {
    /// Creates a new `MakeSolid` operation.
    #[must_use]
    pub fn new(shell: ShellId) -> Self {
        Self { shell }
    }

    /// Executes the operation, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell is missing, or `OperationError::InvalidInput`
    /// if it is open.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if !store.shell(self.shell)?.is_closed {
            return Err(OperationError::InvalidInput("solid shell must be closed".into()).into());
        }
        Ok(store.add_solid(SolidData { shell: self.shell }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::ShellData;

    #[test]
    fn open_shell_rejected() {
        let mut store = TopologyStore::new();
        let shell = store.add_shell(ShellData {
            faces: Vec::new(),
            is_closed: false,
        });
        assert!(MakeSolid::new(shell).execute(&mut store).is_err());
    }

    #[test]
    fn closed_shell_becomes_solid() {
        let mut store = TopologyStore::new();
        let shell = store.add_shell(ShellData::closed(Vec::new()));
        let solid = MakeSolid::new(shell).execute(&mut store).unwrap();
        assert_eq!(store.solid(solid).unwrap().shell, shell);
    }
}
