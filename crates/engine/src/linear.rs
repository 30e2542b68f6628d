//! Weighted linear combinations for the `sum` opcode
//!
//! The prover combines openings, the verifier combines commitments. Because
//! commitments are linear in `(s, t)`, both sides land on the same element.

use crate::{EngineResult, PublicBindings, SecretBinding, SecretBindings};
use num_bigint::BigUint;
use num_traits::One;
use pedersen_core::{Commitment, Group, PedersenContext, Scalar, ScalarField};
use statement_script::Weight;

/// Map a weight literal to its scalar
///
/// A fraction `d` resolves to `ceil(q·d) mod q`, computed exactly. For odd `q`
/// the weight `.5` is therefore `(q + 1) / 2`, the inverse of two.
pub fn resolve_weight(field: &ScalarField, weight: &Weight) -> EngineResult<Scalar> {
    match weight {
        Weight::Integer(value) => Ok(field.from_signed(value)),
        Weight::Fraction { numerator, places } => {
            let denominator = BigUint::from(10u32).pow(*places);
            let product = field.modulus() * numerator;
            let ceiling = (product + &denominator - BigUint::one()) / &denominator;
            Ok(field.reduce(&ceiling))
        }
        Weight::Inverse(divisor) => Ok(field.inverse(&field.reduce(divisor))?),
    }
}

/// Resolve every weight of a `sum`, in order
pub fn resolve_weights(field: &ScalarField, terms: &[(Weight, String)]) -> EngineResult<Vec<Scalar>> {
    terms.iter().map(|(weight, _)| resolve_weight(field, weight)).collect()
}

/// `Σ w_i·(s_i, t_i)` over the prover's openings
pub fn combine_secrets(
    field: &ScalarField,
    bindings: &SecretBindings,
    terms: &[(Weight, String)],
) -> EngineResult<SecretBinding> {
    let weights = resolve_weights(field, terms)?;

    let mut secret = field.zero();
    let mut blinding = field.zero();
    for (weight, (_, name)) in weights.iter().zip(terms) {
        let binding = bindings.get(name)?;
        secret = field.add(&secret, &field.mul(weight, &binding.secret));
        blinding = field.add(&blinding, &field.mul(weight, &binding.blinding));
    }

    Ok(SecretBinding::new(secret, blinding))
}

/// `Σ w_i·C_i` over the verifier's commitments
pub fn combine_commitments<G: Group>(
    ctx: &PedersenContext<G>,
    bindings: &PublicBindings<G>,
    terms: &[(Weight, String)],
) -> EngineResult<Commitment<G>> {
    let weights = resolve_weights(ctx.field(), terms)?;

    let mut combined = ctx.group().identity();
    for (weight, (_, name)) in weights.iter().zip(terms) {
        let commitment = bindings.get(name)?;
        combined = ctx.combine(&combined, &ctx.scale(commitment, weight));
    }

    Ok(combined)
}
