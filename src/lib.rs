pub mod command;
pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod operations;
pub mod params;
pub mod tessellation;
pub mod topology;

pub use command::{AddFinishingCommand, CommandResult};
pub use error::{FinishError, Result};
pub use model::{BuildingModel, MemoryModel, MutationScope};
pub use operations::finishing::{FinishFloor, FinishOutcome};
pub use params::FinishParams;
