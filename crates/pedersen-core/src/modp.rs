//! Prime-order subgroup of `Z_p^*` for a safe prime `p = 2q + 1`
//!
//! Elements are the quadratic residues mod `p`, a subgroup of prime order
//! `q`. Decoding checks subgroup membership so that every accepted element
//! has order `q` (or is the identity).

use crate::{Group, PedersenError, PedersenResult, Scalar};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// RFC 3526 group 14 (2048-bit MODP) prime as little-endian 32-bit digits
const RFC3526_2048_PRIME: [u32; 64] = [
    0xffffffff, 0xffffffff, 0x8aacaa68, 0x15728e5a,
    0x98fa0510, 0x15d22618, 0xea956ae5, 0x3995497c,
    0x95581718, 0xde2bcbf6, 0x6f4c52c9, 0xb5c55df0,
    0xec07a28f, 0x9b2783a2, 0x180e8603, 0xe39e772c,
    0x2e36ce3b, 0x32905e46, 0xca18217c, 0xf1746c08,
    0x4abc9804, 0x670c354e, 0x7096966d, 0x9ed52907,
    0x208552bb, 0x1c62f356, 0xdca3ad96, 0x83655d23,
    0xfd24cf5f, 0x69163fa8, 0x1c55d39a, 0x98da4836,
    0xa163bf05, 0xc2007cb8, 0xece45b3d, 0x49286651,
    0x7c4b1fe6, 0xae9f2411, 0x5a899fa5, 0xee386bfb,
    0xf406b7ed, 0x0bff5cb6, 0xa637ed6b, 0xf44c42e9,
    0x625e7ec6, 0xe485b576, 0x6d51c245, 0x4fe1356d,
    0xf25f1437, 0x302b0a6d, 0xcd3a431b, 0xef9519b3,
    0x8e3404dd, 0x514a0879, 0x3b139b22, 0x020bbea6,
    0x8a67cc74, 0x29024e08, 0x80dc1cd1, 0xc4c6628b,
    0x2168c234, 0xc90fdaa2, 0xffffffff, 0xffffffff,
];

/// `4 = 2^2` is a quadratic residue and generates the order-`q` subgroup
const RFC3526_GENERATOR: u32 = 4;

/// An element of the order-`q` subgroup, held as its residue mod `p`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModPElement(BigUint);

impl ModPElement {
    pub fn residue(&self) -> &BigUint {
        &self.0
    }
}

/// Quadratic-residue subgroup of a safe prime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModPGroup {
    modulus: BigUint,
    order: BigUint,
    generator: BigUint,
    byte_len: usize,
}

impl ModPGroup {
    /// The RFC 3526 2048-bit MODP group with generator 4
    pub fn rfc3526_2048() -> Self {
        let modulus = BigUint::from_slice(&RFC3526_2048_PRIME);
        Self::from_parts(modulus, BigUint::from(RFC3526_GENERATOR))
    }

    /// Build a group from a caller-supplied safe prime `p` and a generator of
    /// the order-`(p-1)/2` subgroup. Primality of `p` and `(p-1)/2` is the
    /// caller's responsibility; the generator's order is checked.
    pub fn new(modulus: BigUint, generator: BigUint) -> PedersenResult<Self> {
        let three = BigUint::from(3u8);
        if modulus <= three || (&modulus % 2u8).is_zero() {
            return Err(PedersenError::InvalidParameters(
                "modulus must be an odd safe prime".to_string(),
            ));
        }
        if generator <= BigUint::one() || generator >= modulus {
            return Err(PedersenError::InvalidParameters(
                "generator must lie in (1, p)".to_string(),
            ));
        }

        let group = Self::from_parts(modulus, generator);
        if !group.in_subgroup(&group.generator) {
            return Err(PedersenError::InvalidParameters(
                "generator does not have order (p-1)/2".to_string(),
            ));
        }

        Ok(group)
    }

    fn from_parts(modulus: BigUint, generator: BigUint) -> Self {
        let order = (&modulus - BigUint::one()) >> 1usize;
        let byte_len = ((modulus.bits() + 7) / 8) as usize;
        Self {
            modulus,
            order,
            generator,
            byte_len,
        }
    }

    /// The safe prime `p`
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn in_subgroup(&self, value: &BigUint) -> bool {
        value.modpow(&self.order, &self.modulus).is_one()
    }
}

impl Default for ModPGroup {
    fn default() -> Self {
        Self::rfc3526_2048()
    }
}

impl Group for ModPGroup {
    type Element = ModPElement;

    fn name(&self) -> &'static str {
        "modp-safe-prime"
    }

    fn order(&self) -> &BigUint {
        &self.order
    }

    fn generator(&self) -> ModPElement {
        ModPElement(self.generator.clone())
    }

    fn identity(&self) -> ModPElement {
        ModPElement(BigUint::one())
    }

    fn add(&self, a: &ModPElement, b: &ModPElement) -> ModPElement {
        ModPElement((&a.0 * &b.0) % &self.modulus)
    }

    fn negate(&self, a: &ModPElement) -> ModPElement {
        // a^(p-2) is the inverse of a mod p
        let exponent = &self.modulus - BigUint::from(2u8);
        ModPElement(a.0.modpow(&exponent, &self.modulus))
    }

    fn scalar_mul(&self, a: &ModPElement, k: &Scalar) -> ModPElement {
        let exponent = k.value() % &self.order;
        ModPElement(a.0.modpow(&exponent, &self.modulus))
    }

    fn encode(&self, a: &ModPElement) -> Vec<u8> {
        let digits = a.0.to_bytes_be();
        let mut bytes = vec![0u8; self.byte_len.saturating_sub(digits.len())];
        bytes.extend_from_slice(&digits);
        bytes
    }

    fn decode(&self, bytes: &[u8]) -> PedersenResult<ModPElement> {
        if bytes.len() != self.byte_len {
            return Err(PedersenError::InvalidEncoding(format!(
                "subgroup element must be {} bytes, got {}",
                self.byte_len,
                bytes.len()
            )));
        }

        let value = BigUint::from_bytes_be(bytes);
        if value.is_zero() || value >= self.modulus {
            return Err(PedersenError::InvalidEncoding(
                "residue outside [1, p)".to_string(),
            ));
        }
        if !self.in_subgroup(&value) {
            return Err(PedersenError::InvalidEncoding(
                "residue is not in the prime-order subgroup".to_string(),
            ));
        }

        Ok(ModPElement(value))
    }

    fn uniform_bytes_len(&self) -> usize {
        self.byte_len
    }

    fn element_from_uniform_bytes(&self, bytes: &[u8]) -> Option<ModPElement> {
        let candidate = BigUint::from_bytes_be(bytes);
        if candidate <= BigUint::one() || candidate >= self.modulus {
            return None;
        }

        // Squaring lands in the quadratic residues without revealing a log base g
        let square = candidate.modpow(&BigUint::from(2u8), &self.modulus);
        if square.is_one() {
            return None;
        }

        Some(ModPElement(square))
    }
}
