mod align;
mod area;
mod boundary;
mod draw_lines;
mod footprint;
mod pipeline;
mod room;
mod walls;

pub use align::{nearest_parallel_midpoint, AlignReport, AlignWalls};
pub use area::TotalArea;
pub use boundary::{flatten_boundary, ExtractRoomBoundary};
pub use draw_lines::DrawModelLines;
pub use footprint::{pair_points, Footprint, FootprintOnLevel, MIN_FOOTPRINT_POINTS};
pub use pipeline::{FinishFloor, FinishOutcome};
pub use room::PlaceRoom;
pub use walls::{find_wall_type, GenerateFinishingWalls, GenerationReport, WallHeight};
