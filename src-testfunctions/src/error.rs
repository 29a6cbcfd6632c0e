//! Error types for construction and evaluation of test functions

/// Reason an input vector was rejected before evaluation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("expected {expected} components, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("expected a one-dimensional vector, got an array with {ndim} axes")]
    NotOneDimensional { ndim: usize },

    #[error("component {index} = {value} is outside [{lower}, {upper}]")]
    OutOfBounds {
        index: usize,
        value: f64,
        lower: f64,
        upper: f64,
    },
}

/// Error type for the test functions catalog
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("invalid dimension {dim} for {function}: {reason}")]
    InvalidDimension {
        function: &'static str,
        dim: usize,
        reason: &'static str,
    },

    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    #[error("unknown test function: {0}")]
    UnknownFunction(String),

    #[error("invalid function config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// True for any of the input validation failures
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// True when construction was refused because of the requested dimension
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self, Error::InvalidDimension { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
