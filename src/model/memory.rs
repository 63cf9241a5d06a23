use slotmap::SlotMap;
use tracing::{debug, warn};

use crate::error::{ModelError, OperationError, Result};
use crate::geometry::{Line, Plane};
use crate::math::polygon_2d::{point_in_polygon_2d, signed_area_2d};
use crate::math::{almost_equal_vectors, down, Point2, Point3, Vector3, TOLERANCE};
use crate::operations::creation::wire_points;
use crate::operations::finishing::FootprintOnLevel;
use crate::operations::query::{Aabb, BoundingBox};
use crate::operations::shaping::Extrude;
use crate::operations::transform::Translate;
use crate::topology::TopologyStore;

use super::{
    BoundarySegment, BuildingModel, Element, ElementId, ElementKind, Floor, GeometryObject, Level,
    ModelCurve, NewWall, Room, Wall, WallType,
};

/// Shortest curve the model accepts as a wall centerline (1/256 of a unit).
pub const SHORT_CURVE_TOLERANCE: f64 = 1.0 / 256.0;

#[derive(Debug, Clone)]
struct Snapshot {
    elements: SlotMap<ElementId, Element>,
    topology: TopologyStore,
}

#[derive(Debug)]
struct OpenScope {
    name: String,
    snapshot: Snapshot,
}

/// An in-memory building model.
///
/// Elements live in a slotmap; floor solids live in a [`TopologyStore`].
/// Opening a scope snapshots both, so a rollback restores the exact state.
/// The setup helpers (`add_*`) model pre-existing content and bypass scopes.
#[derive(Debug, Default)]
pub struct MemoryModel {
    elements: SlotMap<ElementId, Element>,
    topology: TopologyStore,
    open_scope: Option<OpenScope>,
    scope_history: Vec<String>,
}

impl MemoryModel {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pre-existing element.
    pub fn insert(&mut self, element: impl Into<Element>) -> ElementId {
        self.elements.insert(element.into())
    }

    /// Adds a level at `elevation`.
    pub fn add_level(&mut self, name: &str, elevation: f64) -> ElementId {
        self.insert(Level {
            name: name.to_owned(),
            elevation,
        })
    }

    /// Adds a wall type of thickness `width`.
    pub fn add_wall_type(&mut self, name: &str, width: f64) -> ElementId {
        self.insert(WallType {
            name: name.to_owned(),
            width,
        })
    }

    /// Adds a floor slab whose top follows `profile` and which is `thickness` deep.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be extruded.
    pub fn add_floor(
        &mut self,
        name: &str,
        level: ElementId,
        profile: Vec<Point3>,
        thickness: f64,
    ) -> Result<ElementId> {
        self.get::<Level>(level)?;
        let solid =
            Extrude::new(profile, Vector3::new(0.0, 0.0, -thickness)).execute(&mut self.topology)?;
        Ok(self.insert(Floor {
            name: name.to_owned(),
            level: Some(level),
            solid: Some(solid),
        }))
    }

    /// Adds a straight wall from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the type or level is invalid or the endpoints coincide.
    pub fn add_wall(
        &mut self,
        wall_type: ElementId,
        level: ElementId,
        start: Point3,
        end: Point3,
        height: f64,
    ) -> Result<ElementId> {
        self.get::<WallType>(wall_type)?;
        self.get::<Level>(level)?;
        Ok(self.insert(Wall {
            wall_type,
            level,
            centerline: Some(Line::bound(start, end)?),
            height,
            base_offset: 0.0,
            flipped: false,
            structural: false,
        }))
    }

    /// Names of every scope opened so far, in order.
    #[must_use]
    pub fn scope_history(&self) -> &[String] {
        &self.scope_history
    }

    /// Number of elements in the model.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn element(&self, id: ElementId) -> Result<&Element> {
        Ok(self.elements.get(id).ok_or(ModelError::ElementNotFound)?)
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        Ok(self.elements.get_mut(id).ok_or(ModelError::ElementNotFound)?)
    }

    fn require_scope(&self) -> Result<()> {
        if self.open_scope.is_none() {
            return Err(ModelError::NoOpenScope.into());
        }
        Ok(())
    }

    fn level_elevation(&self, level: ElementId) -> Result<f64> {
        Ok(self.get::<Level>(level)?.elevation)
    }

    fn wall_bounding_box(&self, wall: &Wall) -> Result<Option<Aabb>> {
        let Some(line) = &wall.centerline else {
            return Ok(None);
        };
        let half_width = self.get::<WallType>(wall.wall_type)?.width * 0.5;
        let base = self.level_elevation(wall.level)? + wall.base_offset;
        let dir = line.direction();
        let side = Vector3::new(-dir.y, dir.x, 0.0) * half_width;

        let mut corners = Vec::with_capacity(8);
        for p in [line.start(), line.end()] {
            for offset in [side, -side] {
                let q = p + offset;
                corners.push(Point3::new(q.x, q.y, base));
                corners.push(Point3::new(q.x, q.y, base + wall.height));
            }
        }
        Ok(Aabb::from_points(&corners))
    }

    /// Finds the first floor on `level` whose plan footprint contains `location`.
    fn bounding_floor(&self, level: ElementId, location: &Point2) -> Result<Option<(ElementId, Vec<Line>)>> {
        for floor_id in self.collect::<Floor>() {
            if self.get::<Floor>(floor_id)?.level != Some(level) {
                continue;
            }
            let footprint = FootprintOnLevel::new(floor_id, level).execute(self)?;
            let polygon: Vec<Point3> = footprint.segments().iter().map(|s| *s.start()).collect();
            if point_in_polygon_2d(location, &polygon) {
                return Ok(Some((floor_id, footprint.into_segments())));
            }
        }
        Ok(None)
    }

    fn floor_area(&self, floor: &Floor) -> Result<f64> {
        let Some(solid) = floor.solid else {
            return Ok(0.0);
        };
        let mut area = 0.0;
        for face_id in self.topology.solid_faces(solid)? {
            let face = self.topology.face(face_id)?;
            if almost_equal_vectors(&face.normal(), &down()) {
                area += signed_area_2d(&wire_points(&self.topology, face.outer_wire)?).abs();
            }
        }
        Ok(area)
    }
}

impl BuildingModel for MemoryModel {
    fn collect<K: ElementKind>(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|(_, e)| K::from_element(e).is_some())
            .map(|(id, _)| id)
            .collect()
    }

    fn get<K: ElementKind>(&self, id: ElementId) -> Result<&K> {
        let element = self.element(id)?;
        K::from_element(element).ok_or_else(|| {
            ModelError::WrongKind {
                expected: K::NAME,
                found: element.kind_name(),
            }
            .into()
        })
    }

    fn bounding_box(&self, id: ElementId) -> Result<Option<Aabb>> {
        match self.element(id)? {
            Element::Wall(wall) => self.wall_bounding_box(wall),
            Element::Floor(floor) => match floor.solid {
                Some(solid) => Ok(Some(BoundingBox::new(solid).execute(&self.topology)?)),
                None => Ok(None),
            },
            Element::Room(room) => Ok(Aabb::from_points(
                room.boundary.iter().flatten().flat_map(|s| [&s.start, &s.end]),
            )),
            Element::ModelCurve(curve) => {
                Ok(Aabb::from_points([curve.line.start(), curve.line.end()]))
            }
            Element::Level(_) | Element::WallType(_) => Ok(None),
        }
    }

    fn geometry(&self, id: ElementId) -> Result<Vec<GeometryObject>> {
        Ok(match self.element(id)? {
            Element::Floor(floor) => floor.solid.map(GeometryObject::Solid).into_iter().collect(),
            Element::Wall(wall) => wall.centerline.clone().map(GeometryObject::Curve).into_iter().collect(),
            Element::ModelCurve(curve) => vec![GeometryObject::Curve(curve.line.clone())],
            Element::Level(_) | Element::WallType(_) | Element::Room(_) => Vec::new(),
        })
    }

    fn topology(&self) -> &TopologyStore {
        &self.topology
    }

    fn create_room(&mut self, level: ElementId, location: Point2) -> Result<Option<ElementId>> {
        self.require_scope()?;
        self.get::<Level>(level)?;

        let hosts_floor = self
            .collect::<Floor>()
            .into_iter()
            .any(|f| self.get::<Floor>(f).is_ok_and(|floor| floor.level == Some(level)));
        if !hosts_floor {
            warn!(?level, "no floor on level, room not placed");
            return Ok(None);
        }

        let (boundary, area) = match self.bounding_floor(level, &location)? {
            Some((floor, segments)) => {
                let ring: Vec<BoundarySegment> = segments
                    .iter()
                    .map(|s| BoundarySegment {
                        start: *s.start(),
                        end: *s.end(),
                        element: Some(floor),
                    })
                    .collect();
                let polygon: Vec<Point3> = ring.iter().map(|s| s.start).collect();
                (vec![ring], signed_area_2d(&polygon).abs())
            }
            None => {
                warn!(x = location.x, y = location.y, "room is not enclosed by any floor");
                (Vec::new(), 0.0)
            }
        };

        let id = self.insert(Room {
            level,
            location,
            boundary,
            area,
        });
        debug!(?id, area, "room created");
        Ok(Some(id))
    }

    fn create_wall(&mut self, wall: NewWall) -> Result<Option<ElementId>> {
        self.require_scope()?;
        self.get::<WallType>(wall.wall_type)?;
        self.get::<Level>(wall.level)?;

        if wall.curve.length() < SHORT_CURVE_TOLERANCE || wall.height <= TOLERANCE {
            return Ok(None);
        }
        Ok(Some(self.insert(Wall {
            wall_type: wall.wall_type,
            level: wall.level,
            centerline: Some(wall.curve),
            height: wall.height,
            base_offset: wall.offset,
            flipped: wall.flipped,
            structural: wall.structural,
        })))
    }

    fn create_model_curve(&mut self, line: Line, sketch_plane: &Plane) -> Result<ElementId> {
        self.require_scope()?;
        let off_plane = [line.start(), line.end()]
            .iter()
            .any(|p| sketch_plane.distance_to(p).abs() > TOLERANCE);
        if off_plane {
            return Err(ModelError::CurveNotOnPlane.into());
        }
        Ok(self.insert(ModelCurve {
            line,
            sketch_plane: sketch_plane.clone(),
        }))
    }

    fn translate_element(&mut self, id: ElementId, offset: &Vector3) -> Result<()> {
        self.require_scope()?;
        let solid = match self.element_mut(id)? {
            Element::Wall(wall) => {
                if let Some(line) = wall.centerline.as_mut() {
                    *line = line.translated(offset);
                }
                None
            }
            Element::Floor(floor) => floor.solid,
            Element::Room(room) => {
                room.location += offset.xy();
                for segment in room.boundary.iter_mut().flatten() {
                    segment.start += *offset;
                    segment.end += *offset;
                }
                None
            }
            Element::ModelCurve(curve) => {
                curve.line = curve.line.translated(offset);
                None
            }
            Element::Level(level) => {
                level.elevation += offset.z;
                None
            }
            Element::WallType(_) => {
                return Err(OperationError::InvalidInput("wall types cannot be moved".into()).into());
            }
        };
        if let Some(solid) = solid {
            Translate::new(solid, *offset).execute(&mut self.topology)?;
        }
        Ok(())
    }

    fn element_area(&self, id: ElementId) -> Result<f64> {
        match self.element(id)? {
            Element::Wall(wall) => Ok(wall.area()),
            Element::Room(room) => Ok(room.area),
            Element::Floor(floor) => self.floor_area(floor),
            other => Err(OperationError::InvalidInput(format!(
                "{} has no area",
                other.kind_name()
            ))
            .into()),
        }
    }

    fn begin_scope(&mut self, name: &str) -> Result<()> {
        if let Some(open) = &self.open_scope {
            return Err(ModelError::ScopeAlreadyOpen(open.name.clone()).into());
        }
        self.open_scope = Some(OpenScope {
            name: name.to_owned(),
            snapshot: Snapshot {
                elements: self.elements.clone(),
                topology: self.topology.clone(),
            },
        });
        self.scope_history.push(name.to_owned());
        Ok(())
    }

    fn commit_scope(&mut self) -> Result<()> {
        self.open_scope
            .take()
            .map(|_| ())
            .ok_or_else(|| ModelError::NoOpenScope.into())
    }

    fn rollback_scope(&mut self) {
        if let Some(open) = self.open_scope.take() {
            self.elements = open.snapshot.elements;
            self.topology = open.snapshot.topology;
        }
    }

    fn is_modifiable(&self) -> bool {
        self.open_scope.is_some()
    }
}
