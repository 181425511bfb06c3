use thiserror::Error;

/// Top-level error type for the tent geometry crate.
#[derive(Debug, Error)]
pub enum TentformError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// Errors related to geometric inputs and computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("dimension {name} = {value} must be a finite positive number")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised by operations whose inputs break a stated precondition.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors at the JSON boundary with the model-generation service.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`TentformError`].
pub type Result<T> = std::result::Result<T, TentformError>;
