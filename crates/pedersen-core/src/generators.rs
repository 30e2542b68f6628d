//! Nothing-up-my-sleeve derivation of the blinding generator `H`

use crate::{Group, PedersenError, PedersenResult};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

/// Domain-separation label used when no other label is configured
pub const DEFAULT_GENERATOR_LABEL: &[u8] = b"PEDERSEN_H_GENERATOR";

/// Upper bound on rejected samples before giving up
const MAX_DERIVATION_ATTEMPTS: usize = 256;

/// Derive the second generator `H` from `G`.
///
/// Absorbs `label || encode(G)` into SHAKE256 and reads fixed-size chunks
/// from the output stream, rejecting and resampling until a chunk maps to an
/// element that is neither the identity nor `G` itself. The procedure is
/// deterministic and public, so nobody learns the discrete log of `H`
/// relative to `G`.
pub fn derive_h<G: Group>(group: &G, label: &[u8]) -> PedersenResult<G::Element> {
    let generator = group.generator();

    let mut hasher = Shake256::default();
    hasher.update(label);
    hasher.update(&group.encode(&generator));
    let mut reader = hasher.finalize_xof();

    let mut buf = vec![0u8; group.uniform_bytes_len()];
    for _ in 0..MAX_DERIVATION_ATTEMPTS {
        reader.read(&mut buf);

        let Some(candidate) = group.element_from_uniform_bytes(&buf) else {
            continue;
        };

        if group.is_identity(&candidate) || candidate == generator {
            continue;
        }

        return Ok(candidate);
    }

    Err(PedersenError::GeneratorDerivation(format!(
        "no usable element after {} samples",
        MAX_DERIVATION_ATTEMPTS
    )))
}
