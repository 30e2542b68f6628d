//! Pedersen commitments `C = s·G + r·H`
//!
//! Commitments are perfectly hiding and computationally binding. They are
//! additively homomorphic: `commit(s1, r1) + commit(s2, r2)` equals
//! `commit(s1 + s2, r1 + r2)`, and `k·commit(s, r)` equals
//! `commit(k·s, k·r)`.

use crate::{Group, PedersenContext, Scalar};

/// A commitment is a plain group element
pub type Commitment<G> = <G as Group>::Element;

impl<G: Group> PedersenContext<G> {
    /// Commit to `secret` under `blinding`
    pub fn commit(&self, secret: &Scalar, blinding: &Scalar) -> Commitment<G> {
        self.commit_with_base(self.g(), secret, blinding)
    }

    /// Commit with a substitute value generator: `secret·base + blinding·H`
    pub fn commit_with_base(
        &self,
        base: &G::Element,
        secret: &Scalar,
        blinding: &Scalar,
    ) -> Commitment<G> {
        let group = self.group();
        group.add(
            &group.scalar_mul(base, secret),
            &group.scalar_mul(self.h(), blinding),
        )
    }

    /// Homomorphic addition of two commitments
    pub fn combine(&self, a: &Commitment<G>, b: &Commitment<G>) -> Commitment<G> {
        self.group().add(a, b)
    }

    /// Commitment to the negated opening
    pub fn negate(&self, c: &Commitment<G>) -> Commitment<G> {
        self.group().negate(c)
    }

    /// Scale a commitment by `k`
    pub fn scale(&self, c: &Commitment<G>, k: &Scalar) -> Commitment<G> {
        self.group().scalar_mul(c, k)
    }
}
