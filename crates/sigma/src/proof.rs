//! Proof artifacts, the statements they prove, and their field encoding
//!
//! Every artifact serializes to a fixed number of hex fields, so a proof
//! transcript record for a given relation always has the same shape.

use crate::{
    BlindingEqualityProof, SigmaError, SigmaResult, SquaredValueProof, ValueKnowledgeProof,
};
use merlin::Transcript;
use pedersen_core::{Commitment, Group, PedersenContext, Scalar};
use std::fmt;

/// The three supported proof relations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProofKind {
    /// Commitment hides a public value
    ValueKnowledge,
    /// Two commitments hide the same secret
    BlindingEquality,
    /// A commitment hides the square of another commitment's secret
    SquaredValue,
}

impl ProofKind {
    /// Number of serialized fields in a proof of this kind
    pub fn field_count(&self) -> usize {
        match self {
            ProofKind::ValueKnowledge => 3,
            ProofKind::BlindingEquality => 1,
            ProofKind::SquaredValue => 6,
        }
    }
}

impl fmt::Display for ProofKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofKind::ValueKnowledge => write!(f, "value-knowledge"),
            ProofKind::BlindingEquality => write!(f, "blinding-equality"),
            ProofKind::SquaredValue => write!(f, "squared-value"),
        }
    }
}

/// Public inputs of a proof relation, as seen by a verifier
#[derive(Debug, Clone)]
pub enum ProofStatement<'a, G: Group> {
    ValueKnowledge {
        commitment: &'a Commitment<G>,
        value: &'a Scalar,
    },
    BlindingEquality {
        left: &'a Commitment<G>,
        right: &'a Commitment<G>,
    },
    SquaredValue {
        source: &'a Commitment<G>,
        squared: &'a Commitment<G>,
    },
}

impl<'a, G: Group> ProofStatement<'a, G> {
    pub fn kind(&self) -> ProofKind {
        match self {
            ProofStatement::ValueKnowledge { .. } => ProofKind::ValueKnowledge,
            ProofStatement::BlindingEquality { .. } => ProofKind::BlindingEquality,
            ProofStatement::SquaredValue { .. } => ProofKind::SquaredValue,
        }
    }
}

/// A produced proof; immutable once created
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofArtifact<G: Group> {
    ValueKnowledge(ValueKnowledgeProof<G>),
    BlindingEquality(BlindingEqualityProof),
    SquaredValue(SquaredValueProof<G>),
}

impl<G: Group> ProofArtifact<G> {
    pub fn kind(&self) -> ProofKind {
        match self {
            ProofArtifact::ValueKnowledge(_) => ProofKind::ValueKnowledge,
            ProofArtifact::BlindingEquality(_) => ProofKind::BlindingEquality,
            ProofArtifact::SquaredValue(_) => ProofKind::SquaredValue,
        }
    }

    /// Serialize to hex fields
    pub fn to_fields(&self, ctx: &PedersenContext<G>) -> Vec<String> {
        match self {
            ProofArtifact::ValueKnowledge(proof) => proof.to_fields(ctx),
            ProofArtifact::BlindingEquality(proof) => proof.to_fields(ctx),
            ProofArtifact::SquaredValue(proof) => proof.to_fields(ctx),
        }
    }

    /// Deserialize a proof of the given kind from hex fields
    pub fn from_fields<S: AsRef<str>>(
        kind: ProofKind,
        ctx: &PedersenContext<G>,
        fields: &[S],
    ) -> SigmaResult<Self> {
        check_field_count(kind, fields)?;

        Ok(match kind {
            ProofKind::ValueKnowledge => {
                ProofArtifact::ValueKnowledge(ValueKnowledgeProof::from_fields(ctx, fields)?)
            }
            ProofKind::BlindingEquality => {
                ProofArtifact::BlindingEquality(BlindingEqualityProof::from_fields(ctx, fields)?)
            }
            ProofKind::SquaredValue => {
                ProofArtifact::SquaredValue(SquaredValueProof::from_fields(ctx, fields)?)
            }
        })
    }

    /// Check this proof against a statement of the same relation.
    ///
    /// Absorbs the statement and proof into `transcript` exactly as the
    /// prover did. Returns `Ok(false)` for a proof that fails its check and
    /// an error when the statement and proof relations differ.
    pub fn verify(
        &self,
        ctx: &PedersenContext<G>,
        transcript: &mut Transcript,
        statement: &ProofStatement<'_, G>,
    ) -> SigmaResult<bool> {
        match (self, statement) {
            (ProofArtifact::ValueKnowledge(proof), ProofStatement::ValueKnowledge { commitment, value }) => {
                Ok(proof.verify(ctx, transcript, commitment, value))
            }
            (ProofArtifact::BlindingEquality(proof), ProofStatement::BlindingEquality { left, right }) => {
                Ok(proof.verify(ctx, transcript, left, right))
            }
            (ProofArtifact::SquaredValue(proof), ProofStatement::SquaredValue { source, squared }) => {
                Ok(proof.verify(ctx, transcript, source, squared))
            }
            _ => Err(SigmaError::StatementMismatch {
                statement: statement.kind(),
                artifact: self.kind(),
            }),
        }
    }
}

pub(crate) fn check_field_count<S: AsRef<str>>(kind: ProofKind, fields: &[S]) -> SigmaResult<()> {
    if fields.len() != kind.field_count() {
        return Err(SigmaError::FieldCount {
            kind,
            expected: kind.field_count(),
            actual: fields.len(),
        });
    }
    Ok(())
}
