//! Error types for script execution

use pedersen_core::PedersenError;
use sigma_protocols::SigmaError;
use statement_script::{Opcode, ScriptError};
use thiserror::Error;

/// Fatal errors of a prover or verifier run
///
/// A proof that merely fails its check is not an error; it is reported as a
/// failed statement in the verification report.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] PedersenError),

    #[error(transparent)]
    Sigma(#[from] SigmaError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),

    #[error("no input named '{0}'")]
    MissingInput(String),

    #[error("invalid value for input '{name}': {value}")]
    InvalidInput { name: String, value: String },

    #[error("cannot evaluate '{expression}': {reason}")]
    Expression { expression: String, reason: String },

    #[error("transcript ended before record {record} needed by '{opcode}'")]
    TranscriptUnderrun { record: usize, opcode: Opcode },

    #[error("transcript has {remaining} unread records after the script finished")]
    TranscriptOverrun { remaining: usize },

    #[error("transcript record {record} for '{opcode}' has {actual} fields, expected {expected}")]
    MalformedRecord {
        record: usize,
        opcode: Opcode,
        expected: usize,
        actual: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
