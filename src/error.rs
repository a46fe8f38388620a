use thiserror::Error;

/// Top-level error type for the Floorlay layout kernel.
///
/// Expected degenerate geometry (zero-length edges, open wall sets,
/// empty clips) never surfaces here — those cases return sentinel
/// values (zero, empty) per the calling convention of each function.
/// Errors are reserved for structurally invalid input.
#[derive(Debug, Error)]
pub enum FloorlayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors from validating plan configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{parameter} = {value} is not a finite number")]
    NotFinite { parameter: &'static str, value: f64 },

    #[error("{parameter} = {value} must be strictly positive")]
    NotPositive { parameter: &'static str, value: f64 },
}

/// Errors from layout operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`FloorlayError`].
pub type Result<T> = std::result::Result<T, FloorlayError>;
