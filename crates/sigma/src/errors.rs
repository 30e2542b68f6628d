//! Error types for proof encoding and dispatch

use crate::ProofKind;
use pedersen_core::PedersenError;
use thiserror::Error;

/// Main error type for sigma protocol operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SigmaError {
    /// A proof field failed to decode
    #[error(transparent)]
    Core(#[from] PedersenError),

    /// Wrong number of serialized fields for the proof shape
    #[error("{kind} proof expects {expected} fields, got {actual}")]
    FieldCount {
        kind: ProofKind,
        expected: usize,
        actual: usize,
    },

    /// A proof was checked against a statement of a different relation
    #[error("{statement} statement cannot be checked with a {artifact} proof")]
    StatementMismatch {
        statement: ProofKind,
        artifact: ProofKind,
    },
}

/// Result type for sigma protocol operations
pub type SigmaResult<T> = Result<T, SigmaError>;
