use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::error::Result;

use super::BuildingModel;

/// An open mutation scope on a model.
///
/// Dereferences to the model so mutations go through the guard. Dropping the
/// guard without [`MutationScope::commit`] rolls the model back to its state
/// at [`MutationScope::begin`], so an early `?` return never leaves a scope
/// open.
pub struct MutationScope<'a, M: BuildingModel> {
    model: &'a mut M,
    name: String,
    committed: bool,
}

impl<'a, M: BuildingModel> MutationScope<'a, M> {
    /// Opens a scope named `name` on `model`.
    ///
    /// # Errors
    ///
    /// Returns an error if the model already has an open scope.
    pub fn begin(model: &'a mut M, name: &str) -> Result<Self> {
        model.begin_scope(name)?;
        debug!(scope = name, "mutation scope opened");
        Ok(Self {
            model,
            name: name.to_owned(),
            committed: false,
        })
    }

    /// Commits every change made through this scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the model rejects the commit; the scope is then
    /// rolled back.
    pub fn commit(mut self) -> Result<()> {
        self.model.commit_scope()?;
        self.committed = true;
        debug!(scope = %self.name, "mutation scope committed");
        Ok(())
    }
}

impl<M: BuildingModel> Deref for MutationScope<'_, M> {
    type Target = M;

    fn deref(&self) -> &M {
        self.model
    }
}

impl<M: BuildingModel> DerefMut for MutationScope<'_, M> {
    fn deref_mut(&mut self) -> &mut M {
        self.model
    }
}

impl<M: BuildingModel> Drop for MutationScope<'_, M> {
    fn drop(&mut self) {
        if !self.committed {
            self.model.rollback_scope();
            debug!(scope = %self.name, "mutation scope rolled back");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::math::Point2;
    use crate::math::Point3;
    use crate::model::{ElementId, MemoryModel, Room};

    fn model_with_floor() -> (MemoryModel, ElementId) {
        let mut model = MemoryModel::new();
        let level = model.add_level("L1", 0.0);
        let profile = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(4.0, 4.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
        ];
        model.add_floor("Slab", level, profile, 0.5).unwrap();
        (model, level)
    }

    #[test]
    fn committed_changes_persist() {
        let (mut model, level) = model_with_floor();
        let mut scope = MutationScope::begin(&mut model, "room").unwrap();
        assert!(scope.create_room(level, Point2::new(1.0, 1.0)).unwrap().is_some());
        scope.commit().unwrap();

        assert_eq!(model.collect::<Room>().len(), 1);
        assert!(!model.is_modifiable());
    }

    #[test]
    fn dropped_scope_rolls_back() {
        let (mut model, level) = model_with_floor();
        {
            let mut scope = MutationScope::begin(&mut model, "room").unwrap();
            assert!(scope.create_room(level, Point2::new(1.0, 1.0)).unwrap().is_some());
        }
        assert!(model.collect::<Room>().is_empty());
        assert!(!model.is_modifiable());
    }

    #[test]
    fn early_error_releases_scope() {
        fn failing(model: &mut MemoryModel, level: ElementId) -> Result<()> {
            let mut scope = MutationScope::begin(model, "fails")?;
            scope.create_room(level, Point2::new(1.0, 1.0))?;
            scope.create_room(ElementId::default(), Point2::new(1.0, 1.0))?;
            scope.commit()
        }

        let (mut model, level) = model_with_floor();
        assert!(failing(&mut model, level).is_err());
        assert!(model.collect::<Room>().is_empty());
        assert!(!model.is_modifiable());
    }

    #[test]
    fn nested_scope_rejected() {
        let mut model = MemoryModel::new();
        let mut scope = MutationScope::begin(&mut model, "outer").unwrap();
        assert!(MutationScope::begin(&mut *scope, "inner").is_err());
        assert!(scope.is_modifiable());
    }
}
