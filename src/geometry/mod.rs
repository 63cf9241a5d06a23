mod line;
mod plane;

pub use line::Line;
pub use plane::Plane;
