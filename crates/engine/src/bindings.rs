//! Name tables of the two engines
//!
//! The prover sees openings, the verifier sees commitments. The two tables
//! are separate types so the values can never mix.

use crate::{EngineError, EngineResult};
use pedersen_core::{Commitment, Group, PedersenContext, Scalar};
use std::collections::BTreeMap;

/// Opening of a commitment: `(s, t)` with `C = s·G + t·H`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretBinding {
    pub secret: Scalar,
    pub blinding: Scalar,
}

impl SecretBinding {
    pub fn new(secret: Scalar, blinding: Scalar) -> Self {
        Self { secret, blinding }
    }

    pub fn commitment<G: Group>(&self, ctx: &PedersenContext<G>) -> Commitment<G> {
        ctx.commit(&self.secret, &self.blinding)
    }
}

/// Prover-side table of openings
#[derive(Debug, Clone, Default)]
pub struct SecretBindings {
    entries: BTreeMap<String, SecretBinding>,
}

impl SecretBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any earlier binding
    pub fn insert(&mut self, name: impl Into<String>, binding: SecretBinding) -> Option<SecretBinding> {
        self.entries.insert(name.into(), binding)
    }

    pub fn get(&self, name: &str) -> EngineResult<&SecretBinding> {
        self.entries
            .get(name)
            .ok_or_else(|| EngineError::UndefinedVariable(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SecretBinding)> {
        self.entries.iter().map(|(name, binding)| (name.as_str(), binding))
    }
}

/// Verifier-side table of commitments
#[derive(Debug, Clone)]
pub struct PublicBindings<G: Group> {
    entries: BTreeMap<String, Commitment<G>>,
}

impl<G: Group> Default for PublicBindings<G> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<G: Group> PublicBindings<G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, commitment: Commitment<G>) -> Option<Commitment<G>> {
        self.entries.insert(name.into(), commitment)
    }

    pub fn get(&self, name: &str) -> EngineResult<&Commitment<G>> {
        self.entries
            .get(name)
            .ok_or_else(|| EngineError::UndefinedVariable(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Commitment<G>)> {
        self.entries.iter().map(|(name, c)| (name.as_str(), c))
    }
}
