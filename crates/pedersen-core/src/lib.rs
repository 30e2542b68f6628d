//! # Pedersen Core
//!
//! This crate provides the algebraic foundation for the statement engine:
//!
//! - A prime-order [`Group`] abstraction with two backends,
//!   [`Ristretto255`] and the safe-prime subgroup [`ModPGroup`]
//! - Modular [`Scalar`] arithmetic over the group order
//! - Deterministic derivation of the blinding generator `H`
//! - Pedersen commitments and their homomorphic operations
//! - Transcript management for Fiat-Shamir transforms
//!
//! ## Mathematical Background
//!
//! A Pedersen commitment to a secret `s` under blinding `r` is
//!
//! ```text
//! C = s·G + r·H
//! ```
//!
//! where nobody knows `log_G(H)`. It is perfectly hiding and binding under
//! the discrete-log assumption, and linear in `(s, r)`.

pub mod commitment;
pub mod context;
pub mod errors;
pub mod generators;
pub mod group;
pub mod modp;
pub mod ristretto;
pub mod scalar;
pub mod transcript;

#[cfg(test)]
mod property_tests;

pub use commitment::*;
pub use context::*;
pub use errors::*;
pub use generators::*;
pub use group::*;
pub use modp::{ModPElement, ModPGroup};
pub use ristretto::Ristretto255;
pub use scalar::*;
pub use transcript::*;

/// Re-export merlin transcript
pub use merlin::Transcript;
