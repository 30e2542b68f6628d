//! Error types for tokenizing and parsing statement scripts

use crate::Opcode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("record {record} is not terminated by ';'")]
    UnterminatedRecord { record: usize },

    #[error("record {record}: unknown opcode '{opcode}'")]
    UnknownOpcode { record: usize, opcode: String },

    #[error("record {record}: invalid operands for '{opcode}': {reason}")]
    InvalidOperands {
        record: usize,
        opcode: Opcode,
        reason: String,
    },

    #[error("invalid weight literal '{0}'")]
    InvalidWeight(String),

    #[error("record {record}: invalid integer literal '{literal}'")]
    InvalidLiteral { record: usize, literal: String },
}

pub type ScriptResult<T> = Result<T, ScriptError>;
