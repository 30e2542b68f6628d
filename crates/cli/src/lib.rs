//! # CLI Tools for Pedersen Statement Scripts
//!
//! `pedersen-prove` runs a script over named inputs and writes a proof
//! transcript; `pedersen-verify` replays the script against that transcript.

pub mod common;
pub mod prove;
pub mod verify;

use pedersen_core::PedersenError;
use statement_engine::EngineError;
use statement_script::ScriptError;
use thiserror::Error;

/// Error types for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Core(#[from] PedersenError),
}

pub type Result<T> = std::result::Result<T, CliError>;
