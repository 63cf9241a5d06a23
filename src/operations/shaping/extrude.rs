use crate::error::{OperationError, Result};
use crate::math::polygon_2d::newell_normal;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::creation::{MakeFace, MakeSolid, MakeWire};
use crate::topology::{FaceId, ShellData, SolidId, TopologyStore};

/// Extrudes a closed planar profile along a direction vector into a prism.
///
/// Faces are oriented outward: the bottom face normal is `-direction`, the
/// top face normal is `+direction`. A floor slab extruded upward therefore
/// has a bottom face whose normal is `-Z`.
pub struct Extrude {
    profile: Vec<Point3>,
    direction: Vector3,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(profile: Vec<Point3>, direction: Vector3) -> Self {
        Self { profile, direction }
    }

    /// Executes the extrusion, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the direction is zero-length,
    /// the profile has fewer than 3 points, or the direction lies in the
    /// profile plane.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.direction.norm() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("extrude direction must be non-zero".into()).into(),
            );
        }
        if self.profile.len() < 3 {
            return Err(OperationError::InvalidInput(
                "extrude profile needs at least 3 points".into(),
            )
            .into());
        }

        let normal = newell_normal(&self.profile)?;
        let along = normal.dot(&self.direction);
        if along.abs() < TOLERANCE {
            return Err(OperationError::InvalidInput(
                "extrude direction lies in the profile plane".into(),
            )
            .into());
        }

        // Base winding agrees with the direction; the bottom face walks it backwards.
        let base: Vec<Point3> = if along > 0.0 {
            self.profile.clone()
        } else {
            self.profile.iter().rev().copied().collect()
        };
        let top: Vec<Point3> = base.iter().map(|p| p + self.direction).collect();
        let bottom: Vec<Point3> = base.iter().rev().copied().collect();

        let n = base.len();
        let mut faces = Vec::with_capacity(n + 2);
        faces.push(planar_face(store, bottom)?);
        faces.push(planar_face(store, top.clone())?);
        for i in 0..n {
            let j = (i + 1) % n;
            faces.push(planar_face(store, vec![base[i], base[j], top[j], top[i]])?);
        }

        let shell = store.add_shell(ShellData::closed(faces));
        MakeSolid::new(shell).execute(store)
    }
}

fn planar_face(store: &mut TopologyStore, points: Vec<Point3>) -> Result<FaceId> {
    let wire = MakeWire::new(points, true).execute(store)?;
    MakeFace::new(wire, vec![]).execute(store)
}
