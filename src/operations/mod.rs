pub mod creation;
pub mod finishing;
pub mod query;
pub mod shaping;
pub mod transform;
