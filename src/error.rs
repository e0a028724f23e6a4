use thiserror::Error;

/// Top-level error type for the Planum floor-plan engine.
#[derive(Debug, Error)]
pub enum PlanumError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    File(#[from] FileError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length wall")]
    ZeroLengthWall,
}

/// Errors related to the plan entity store.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("part is not attached to a wall")]
    PartNotAttached,
}

/// Errors surfaced to the user when a wall-part operation is refused.
///
/// These are rejection decisions, not faults: the model is left untouched
/// and the message is suitable for direct display.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("there's not enough room on the wall")]
    NotEnoughRoom,

    #[error("part width must be positive, got {0}")]
    NonPositiveWidth(f64),
}

/// Errors related to document serialization.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("unknown wall id in document: {0}")]
    UnknownWall(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`PlanumError`].
pub type Result<T> = std::result::Result<T, PlanumError>;
