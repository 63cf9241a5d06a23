use thiserror::Error;

/// Top-level error type for the floor finishing pipeline.
#[derive(Debug, Error)]
pub enum FinishError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to topological lookups.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors related to geometric operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors raised by the building model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("element not found")]
    ElementNotFound,

    #[error("element is a {found}, expected a {expected}")]
    WrongKind {
        expected: &'static str,
        found: &'static str,
    },

    #[error("model modification outside of a mutation scope")]
    NoOpenScope,

    #[error("mutation scope \"{0}\" is already open")]
    ScopeAlreadyOpen(String),

    #[error("curve does not lie on the sketch plane")]
    CurveNotOnPlane,
}

/// Precondition failures that abort the finishing pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("no walls found in the model")]
    NoWalls,

    #[error("no wall with a bounding box found")]
    NoWallWithBoundingBox,

    #[error("wall height is zero")]
    ZeroWallHeight,

    #[error("no floor found in the model")]
    NoFloor,

    #[error("floor has no level")]
    NoLevel,

    #[error("floor footprint is empty")]
    EmptyFootprint,

    #[error("floor has no bounding box")]
    FloorHasNoBoundingBox,

    #[error("room could not be created")]
    NoRoom,

    #[error("room has no boundary curves")]
    EmptyBoundary,

    #[error("no finishing walls were created")]
    NoFinishingWalls,
}

/// Errors related to loading pipeline parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed parameters: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`FinishError`].
pub type Result<T> = std::result::Result<T, FinishError>;
