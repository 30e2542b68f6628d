//! Error types for group, scalar and commitment operations

use thiserror::Error;

/// Main error type for Pedersen core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PedersenError {
    /// Bytes do not encode a valid group element or canonical scalar
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Attempted to invert zero in the scalar field
    #[error("Scalar is not invertible")]
    NotInvertible,

    /// Invalid group parameters provided
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Generator derivation produced an unusable element
    #[error("Generator derivation failed: {0}")]
    GeneratorDerivation(String),
}

/// Result type for Pedersen core operations
pub type PedersenResult<T> = Result<T, PedersenError>;
