//! Proof that a commitment hides a publicly declared value
//!
//! For `C = v·G + t·H` and public `v`, the statement reduces to knowledge of
//! `t` with `C - v·G = t·H`, a Schnorr proof in base `H`:
//!
//! ```text
//! prover:   r random, u = r·H
//! challenge c = FS(C, v, u)
//! response  z = r + c·t
//! verifier: z·H == u + c·(C - v·G)
//! ```

use crate::proof::check_field_count;
use crate::{ProofKind, SigmaResult};
use merlin::Transcript;
use pedersen_core::{Commitment, Group, PedersenContext, Scalar, TranscriptProtocol};
use rand_core::{CryptoRng, RngCore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueKnowledgeProof<G: Group> {
    /// Nonce commitment `u = r·H`
    pub nonce_commitment: G::Element,
    /// Fiat-Shamir challenge `c`
    pub challenge: Scalar,
    /// Response `z = r + c·t`
    pub response: Scalar,
}

impl<G: Group> ValueKnowledgeProof<G> {
    /// Prove that `commitment` opens to `value` under `blinding`
    pub fn prove<R: RngCore + CryptoRng>(
        ctx: &PedersenContext<G>,
        transcript: &mut Transcript,
        commitment: &Commitment<G>,
        value: &Scalar,
        blinding: &Scalar,
        rng: &mut R,
    ) -> Self {
        let field = ctx.field();

        let nonce = field.random(rng);
        let nonce_commitment = ctx.group().scalar_mul(ctx.h(), &nonce);

        let challenge = Self::challenge(ctx, transcript, commitment, value, &nonce_commitment);
        let response = field.add(&nonce, &field.mul(&challenge, blinding));

        Self {
            nonce_commitment,
            challenge,
            response,
        }
    }

    /// Verify against the public commitment and claimed value
    pub fn verify(
        &self,
        ctx: &PedersenContext<G>,
        transcript: &mut Transcript,
        commitment: &Commitment<G>,
        value: &Scalar,
    ) -> bool {
        let group = ctx.group();

        let expected = Self::challenge(ctx, transcript, commitment, value, &self.nonce_commitment);
        if expected != self.challenge {
            return false;
        }

        // Y = C - v·G is t·H exactly when C hides v
        let y = group.sub(commitment, &group.scalar_mul(ctx.g(), value));

        let lhs = group.scalar_mul(ctx.h(), &self.response);
        let rhs = group.add(&self.nonce_commitment, &group.scalar_mul(&y, &self.challenge));

        lhs == rhs
    }

    fn challenge(
        ctx: &PedersenContext<G>,
        transcript: &mut Transcript,
        commitment: &Commitment<G>,
        value: &Scalar,
        nonce_commitment: &G::Element,
    ) -> Scalar {
        let group = ctx.group();
        transcript.append_message(b"protocol", b"value-knowledge");
        transcript.append_element(b"C", group, commitment);
        transcript.append_scalar(b"v", ctx.field(), value);
        transcript.append_element(b"u", group, nonce_commitment);
        transcript.challenge_scalar(b"c", ctx.field())
    }

    /// Serialize as `(u, c, z)`
    pub fn to_fields(&self, ctx: &PedersenContext<G>) -> Vec<String> {
        let field = ctx.field();
        vec![
            ctx.group().encode_hex(&self.nonce_commitment),
            field.to_hex(&self.challenge),
            field.to_hex(&self.response),
        ]
    }

    pub fn from_fields<S: AsRef<str>>(ctx: &PedersenContext<G>, fields: &[S]) -> SigmaResult<Self> {
        check_field_count(ProofKind::ValueKnowledge, fields)?;
        let field = ctx.field();

        Ok(Self {
            nonce_commitment: ctx.group().decode_hex(fields[0].as_ref())?,
            challenge: field.from_hex(fields[1].as_ref())?,
            response: field.from_hex(fields[2].as_ref())?,
        })
    }
}
