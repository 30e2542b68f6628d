//! Proof that a new commitment hides the square of a committed secret
//!
//! Given `C1 = s·G + t1·H`, the prover commits to `s` again but with `C1` as
//! the binding base: `C2 = s·C1 + t2·H`. Expanding, `C2 = s²·G + (s·t1 + t2)·H`,
//! so `C2` is an ordinary commitment to `s²`. Two Schnorr sub-proofs share the
//! response `z1`, which forces the same `s` in both relations:
//!
//! ```text
//! c3 = r1·G  + r2·H           c3 + k·C1 == z1·G  + z2·H
//! c4 = r1·C1 + r3·H           c4 + k·C2 == z1·C1 + z3·H
//! z1 = k·s + r1   z2 = k·t1 + r2   z3 = k·t2 + r3
//! ```

use crate::proof::check_field_count;
use crate::{ProofKind, SigmaResult};
use merlin::Transcript;
use pedersen_core::{Commitment, Group, PedersenContext, Scalar, TranscriptProtocol};
use rand_core::{CryptoRng, RngCore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquaredValueProof<G: Group> {
    pub c3: G::Element,
    pub c4: G::Element,
    /// Fiat-Shamir challenge
    pub k: Scalar,
    pub z1: Scalar,
    pub z2: Scalar,
    pub z3: Scalar,
}

/// Everything the prover learns from a squaring step
#[derive(Debug, Clone)]
pub struct SquaredValueOutput<G: Group> {
    /// `C2`, a commitment to `s²`
    pub commitment: Commitment<G>,
    /// `s² mod q`
    pub secret: Scalar,
    /// `s·t1 + t2 mod q`, the blinding of `C2` relative to `G` and `H`
    pub blinding: Scalar,
    pub proof: SquaredValueProof<G>,
}

impl<G: Group> SquaredValueProof<G> {
    /// Square the secret behind `source` and prove the relation
    pub fn prove<R: RngCore + CryptoRng>(
        ctx: &PedersenContext<G>,
        transcript: &mut Transcript,
        source: &Commitment<G>,
        secret: &Scalar,
        blinding: &Scalar,
        rng: &mut R,
    ) -> SquaredValueOutput<G> {
        let field = ctx.field();

        let t2 = field.random(rng);
        let squared = ctx.commit_with_base(source, secret, &t2);

        let r1 = field.random(rng);
        let r2 = field.random(rng);
        let r3 = field.random(rng);
        let c3 = ctx.commit(&r1, &r2);
        let c4 = ctx.commit_with_base(source, &r1, &r3);

        let k = Self::challenge(ctx, transcript, source, &squared, &c3, &c4);

        let z1 = field.add(&field.mul(&k, secret), &r1);
        let z2 = field.add(&field.mul(&k, blinding), &r2);
        let z3 = field.add(&field.mul(&k, &t2), &r3);

        SquaredValueOutput {
            commitment: squared,
            secret: field.mul(secret, secret),
            blinding: field.add(&field.mul(secret, blinding), &t2),
            proof: Self { c3, c4, k, z1, z2, z3 },
        }
    }

    /// Verify that `squared` hides the square of the secret behind `source`
    pub fn verify(
        &self,
        ctx: &PedersenContext<G>,
        transcript: &mut Transcript,
        source: &Commitment<G>,
        squared: &Commitment<G>,
    ) -> bool {
        let group = ctx.group();

        let expected = Self::challenge(ctx, transcript, source, squared, &self.c3, &self.c4);
        if expected != self.k {
            return false;
        }

        let lhs1 = group.add(&self.c3, &group.scalar_mul(source, &self.k));
        let rhs1 = ctx.commit(&self.z1, &self.z2);

        let lhs2 = group.add(&self.c4, &group.scalar_mul(squared, &self.k));
        let rhs2 = ctx.commit_with_base(source, &self.z1, &self.z3);

        lhs1 == rhs1 && lhs2 == rhs2
    }

    fn challenge(
        ctx: &PedersenContext<G>,
        transcript: &mut Transcript,
        source: &Commitment<G>,
        squared: &Commitment<G>,
        c3: &G::Element,
        c4: &G::Element,
    ) -> Scalar {
        let group = ctx.group();
        transcript.append_message(b"protocol", b"squared-value");
        transcript.append_element(b"C1", group, source);
        transcript.append_element(b"C2", group, squared);
        transcript.append_element(b"c3", group, c3);
        transcript.append_element(b"c4", group, c4);
        transcript.challenge_scalar(b"k", ctx.field())
    }

    /// Serialize as `(c3, c4, k, z1, z2, z3)`
    pub fn to_fields(&self, ctx: &PedersenContext<G>) -> Vec<String> {
        let group = ctx.group();
        let field = ctx.field();
        vec![
            group.encode_hex(&self.c3),
            group.encode_hex(&self.c4),
            field.to_hex(&self.k),
            field.to_hex(&self.z1),
            field.to_hex(&self.z2),
            field.to_hex(&self.z3),
        ]
    }

    pub fn from_fields<S: AsRef<str>>(ctx: &PedersenContext<G>, fields: &[S]) -> SigmaResult<Self> {
        check_field_count(ProofKind::SquaredValue, fields)?;
        let group = ctx.group();
        let field = ctx.field();

        Ok(Self {
            c3: group.decode_hex(fields[0].as_ref())?,
            c4: group.decode_hex(fields[1].as_ref())?,
            k: field.from_hex(fields[2].as_ref())?,
            z1: field.from_hex(fields[3].as_ref())?,
            z2: field.from_hex(fields[4].as_ref())?,
            z3: field.from_hex(fields[5].as_ref())?,
        })
    }
}
