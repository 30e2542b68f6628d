//! # Statement Engine
//!
//! Drives a prover and a verifier through the same statement script. The two
//! sides share nothing but the proof transcript:
//!
//! ```text
//! script + inputs ──► ProverEngine ──► ProofTranscript ──► VerifierEngine ──► VerificationReport
//!                                                    script ──┘
//! ```
//!
//! The prover holds openings `(s, t)` in [`SecretBindings`]; the verifier
//! holds only commitments in [`PublicBindings`]. Commands run strictly in
//! script order on both sides.
//!
//! ## Example
//!
//! ```
//! use pedersen_core::{PedersenContext, Ristretto255};
//! use statement_engine::{prove_script, verify_script, FieldExpressionEvaluator, NamedInputs};
//! use statement_script::Script;
//!
//! let ctx = PedersenContext::new(Ristretto255::new()).unwrap();
//! let script = Script::parse("input,a; input,b; sum,c,1,a,1,b; equal,c,8;").unwrap();
//! let inputs: NamedInputs = [("a", 3), ("b", 5)].into_iter().collect();
//!
//! let transcript = prove_script(
//!     &ctx,
//!     &script,
//!     &inputs,
//!     &FieldExpressionEvaluator,
//!     rand::thread_rng(),
//! )
//! .unwrap();
//! let report = verify_script(&ctx, &script, &transcript).unwrap();
//! assert!(report.all_passed());
//! ```

pub mod bindings;
pub mod config;
pub mod errors;
pub mod expression;
pub mod inputs;
pub mod linear;
pub mod prover;
pub mod report;
pub mod transcript;
pub mod verifier;

#[cfg(test)]
mod property_tests;

pub use bindings::{PublicBindings, SecretBinding, SecretBindings};
pub use config::SystemConfig;
pub use errors::*;
pub use expression::{ExpressionEvaluator, FieldExpressionEvaluator};
pub use inputs::NamedInputs;
pub use prover::ProverEngine;
pub use report::{StatementOutcome, VerificationReport};
pub use transcript::{ProofTranscript, TranscriptReader, TranscriptWriter};
pub use verifier::VerifierEngine;

use pedersen_core::{Group, PedersenContext};
use rand_core::{CryptoRng, RngCore};
use statement_script::Script;

/// Run `script` as the prover and return the proof transcript
pub fn prove_script<G: Group, R: RngCore + CryptoRng>(
    ctx: &PedersenContext<G>,
    script: &Script,
    inputs: &NamedInputs,
    evaluator: &dyn ExpressionEvaluator,
    rng: R,
) -> EngineResult<ProofTranscript> {
    let mut prover = ProverEngine::new(ctx, inputs, evaluator, rng);
    prover.run(script)?;
    Ok(prover.finish())
}

/// Replay `script` against `transcript` as the verifier
pub fn verify_script<G: Group>(
    ctx: &PedersenContext<G>,
    script: &Script,
    transcript: &ProofTranscript,
) -> EngineResult<VerificationReport> {
    let mut verifier = VerifierEngine::new(ctx, transcript);
    verifier.run(script)?;
    verifier.finish()
}
