mod element;
mod memory;
mod message;
mod scope;

pub use element::{
    BoundarySegment, Floor, Level, ModelCurve, NewWall, Room, Wall, WallType,
};
pub use memory::{MemoryModel, SHORT_CURVE_TOLERANCE};
pub use message::{MessageSink, RecordingSink, TracingSink};
pub use scope::MutationScope;

use crate::error::Result;
use crate::geometry::{Line, Plane};
use crate::math::{Point2, Vector3};
use crate::operations::query::Aabb;
use crate::topology::{SolidId, TopologyStore};

slotmap::new_key_type! {
    /// Unique identifier for an element in a building model.
    pub struct ElementId;
}

/// Every kind of element a model stores.
#[derive(Debug, Clone)]
pub enum Element {
    Level(Level),
    Floor(Floor),
    WallType(WallType),
    Wall(Wall),
    Room(Room),
    ModelCurve(ModelCurve),
}

impl Element {
    /// Human-readable kind name, used in error messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Level(_) => Level::NAME,
            Self::Floor(_) => Floor::NAME,
            Self::WallType(_) => WallType::NAME,
            Self::Wall(_) => Wall::NAME,
            Self::Room(_) => Room::NAME,
            Self::ModelCurve(_) => ModelCurve::NAME,
        }
    }
}

/// Maps a Rust type onto its [`Element`] variant, for typed queries.
pub trait ElementKind: Sized {
    /// Kind name reported in lookup errors.
    const NAME: &'static str;

    fn from_element(element: &Element) -> Option<&Self>;

    fn from_element_mut(element: &mut Element) -> Option<&mut Self>;
}

macro_rules! element_kind {
    ($ty:ident, $name:literal) => {
        impl ElementKind for $ty {
            const NAME: &'static str = $name;

            fn from_element(element: &Element) -> Option<&Self> {
                match element {
                    Element::$ty(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_element_mut(element: &mut Element) -> Option<&mut Self> {
                match element {
                    Element::$ty(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Element {
            fn from(inner: $ty) -> Self {
                Element::$ty(inner)
            }
        }
    };
}

element_kind!(Level, "level");
element_kind!(Floor, "floor");
element_kind!(WallType, "wall type");
element_kind!(Wall, "wall");
element_kind!(Room, "room");
element_kind!(ModelCurve, "model curve");

/// A piece of element geometry.
#[derive(Debug, Clone)]
pub enum GeometryObject {
    /// A solid owned by the model's topology store.
    Solid(SolidId),
    /// A free-standing curve.
    Curve(Line),
}

/// Query and mutation contract of a host building model.
///
/// Every mutating method fails with `ModelError::NoOpenScope` unless a scope
/// has been opened with [`BuildingModel::begin_scope`]. Callers normally go
/// through [`MutationScope`], which rolls back on drop unless committed.
pub trait BuildingModel {
    /// IDs of every element of kind `K`, in model order.
    fn collect<K: ElementKind>(&self) -> Vec<ElementId>;

    /// Typed lookup of one element.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ElementNotFound` or `ModelError::WrongKind`.
    fn get<K: ElementKind>(&self, id: ElementId) -> Result<&K>;

    /// Axis-aligned bounding box of an element, if it has one.
    ///
    /// # Errors
    ///
    /// Returns an error if the element does not exist.
    fn bounding_box(&self, id: ElementId) -> Result<Option<Aabb>>;

    /// Geometry objects making up an element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element does not exist.
    fn geometry(&self, id: ElementId) -> Result<Vec<GeometryObject>>;

    /// The topology store that owns element solids.
    fn topology(&self) -> &TopologyStore;

    /// Creates a room on `level` at plan location `location`.
    /// `Ok(None)` means the host could not place a room there.
    ///
    /// # Errors
    ///
    /// Returns an error outside a scope or if `level` is not a level.
    fn create_room(&mut self, level: ElementId, location: Point2) -> Result<Option<ElementId>>;

    /// Creates a wall. `Ok(None)` means the host refused the curve or height.
    ///
    /// # Errors
    ///
    /// Returns an error outside a scope or if the type or level is invalid.
    fn create_wall(&mut self, wall: NewWall) -> Result<Option<ElementId>>;

    /// Creates a model curve lying on `sketch_plane`.
    ///
    /// # Errors
    ///
    /// Returns an error outside a scope or if the line leaves the plane.
    fn create_model_curve(&mut self, line: Line, sketch_plane: &Plane) -> Result<ElementId>;

    /// Moves an element by `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error outside a scope or if the element cannot move.
    fn translate_element(&mut self, id: ElementId, offset: &Vector3) -> Result<()>;

    /// Computed area of an element, in square model units.
    ///
    /// # Errors
    ///
    /// Returns an error if the element has no area.
    fn element_area(&self, id: ElementId) -> Result<f64>;

    /// Opens a mutation scope.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ScopeAlreadyOpen` if one is open.
    fn begin_scope(&mut self, name: &str) -> Result<()>;

    /// Commits the open scope.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::NoOpenScope` if none is open.
    fn commit_scope(&mut self) -> Result<()>;

    /// Discards every change since the open scope began. No-op without one.
    fn rollback_scope(&mut self);

    /// `true` while a scope is open.
    fn is_modifiable(&self) -> bool;
}
