//! # Sigma Protocols
//!
//! Non-interactive proofs about Pedersen commitments, made non-interactive
//! with a running Fiat-Shamir transcript:
//!
//! - [`ValueKnowledgeProof`]: a commitment hides a public value
//! - [`BlindingEqualityProof`]: two commitments hide the same secret
//! - [`SquaredValueProof`]: a commitment hides the square of another's secret
//!
//! All protocols are written once against [`pedersen_core::Group`] and run on
//! either backend. [`ProofArtifact`] is the closed set of proofs as they
//! appear in a proof transcript.
//!
//! ## Transcript discipline
//!
//! Provers and verifiers take the same `&mut Transcript` that the rest of a
//! run has been absorbing into. A verifier must replay statements in the
//! order the prover produced them, or every later challenge diverges.

pub mod blinding_equality;
pub mod errors;
pub mod proof;
pub mod squared_value;
pub mod value_knowledge;


pub use blinding_equality::BlindingEqualityProof;
pub use errors::*;
pub use proof::{ProofArtifact, ProofKind, ProofStatement};
pub use squared_value::{SquaredValueOutput, SquaredValueProof};
pub use value_knowledge::ValueKnowledgeProof;
