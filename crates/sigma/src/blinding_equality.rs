//! Proof that two commitments hide the same secret
//!
//! The prover reveals `d = t1 - t2`; the verifier checks `C1 - C2 == d·H`.
//! This discloses the raw blinding difference and is not re-randomized.

use crate::proof::check_field_count;
use crate::{ProofKind, SigmaResult};
use merlin::Transcript;
use pedersen_core::{Commitment, Group, PedersenContext, Scalar, TranscriptProtocol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlindingEqualityProof {
    /// Blinding difference `t1 - t2`
    pub difference: Scalar,
}

impl BlindingEqualityProof {
    /// Prove `left` and `right` hide the same secret, given both blindings
    pub fn prove<G: Group>(
        ctx: &PedersenContext<G>,
        transcript: &mut Transcript,
        left: &Commitment<G>,
        right: &Commitment<G>,
        left_blinding: &Scalar,
        right_blinding: &Scalar,
    ) -> Self {
        let proof = Self {
            difference: ctx.field().sub(left_blinding, right_blinding),
        };
        proof.absorb(ctx, transcript, left, right);
        proof
    }

    pub fn verify<G: Group>(
        &self,
        ctx: &PedersenContext<G>,
        transcript: &mut Transcript,
        left: &Commitment<G>,
        right: &Commitment<G>,
    ) -> bool {
        self.absorb(ctx, transcript, left, right);

        let group = ctx.group();
        group.sub(left, right) == group.scalar_mul(ctx.h(), &self.difference)
    }

    fn absorb<G: Group>(
        &self,
        ctx: &PedersenContext<G>,
        transcript: &mut Transcript,
        left: &Commitment<G>,
        right: &Commitment<G>,
    ) {
        let group = ctx.group();
        transcript.append_message(b"protocol", b"blinding-equality");
        transcript.append_element(b"C1", group, left);
        transcript.append_element(b"C2", group, right);
        transcript.append_scalar(b"d", ctx.field(), &self.difference);
    }

    pub fn to_fields<G: Group>(&self, ctx: &PedersenContext<G>) -> Vec<String> {
        vec![ctx.field().to_hex(&self.difference)]
    }

    pub fn from_fields<G: Group, S: AsRef<str>>(
        ctx: &PedersenContext<G>,
        fields: &[S],
    ) -> SigmaResult<Self> {
        check_field_count(ProofKind::BlindingEquality, fields)?;
        Ok(Self {
            difference: ctx.field().from_hex(fields[0].as_ref())?,
        })
    }
}
