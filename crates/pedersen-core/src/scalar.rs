//! Scalars modulo the prime group order `q`
//!
//! Scalars are arbitrary-precision integers kept canonically in `[0, q)`.
//! A [`Scalar`] carries no modulus of its own; every operation goes through
//! the [`ScalarField`] of the group it belongs to.

use crate::{PedersenError, PedersenResult};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use rand_core::{CryptoRng, RngCore};
use std::fmt;

/// Extra random bytes drawn beyond the modulus width so that reducing a
/// uniform byte string modulo `q` has negligible bias.
pub const WIDE_REDUCTION_BYTES: usize = 16;

/// A scalar in `[0, q)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scalar(BigUint);

impl Scalar {
    /// The canonical integer representative
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Whether this is the additive identity
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arithmetic modulo a prime `q`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarField {
    modulus: BigUint,
    byte_len: usize,
}

impl ScalarField {
    /// Create a field for the given modulus. The modulus must be prime;
    /// only the trivial cases are rejected here.
    pub fn new(modulus: BigUint) -> PedersenResult<Self> {
        if modulus <= BigUint::one() {
            return Err(PedersenError::InvalidParameters(
                "Scalar modulus must be greater than one".to_string(),
            ));
        }

        let byte_len = ((modulus.bits() + 7) / 8) as usize;
        Ok(Self { modulus, byte_len })
    }

    /// The modulus `q`
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Width in bytes of a canonical scalar encoding
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn zero(&self) -> Scalar {
        Scalar(BigUint::zero())
    }

    pub fn one(&self) -> Scalar {
        Scalar(BigUint::one())
    }

    /// Reduce an arbitrary non-negative integer into the field
    pub fn reduce(&self, value: &BigUint) -> Scalar {
        Scalar(value % &self.modulus)
    }

    pub fn from_u64(&self, value: u64) -> Scalar {
        self.reduce(&BigUint::from(value))
    }

    /// Map a signed integer into the field; `-v` becomes `q - (v mod q)`
    pub fn from_signed(&self, value: &BigInt) -> Scalar {
        let magnitude = self.reduce(value.magnitude());
        match value.sign() {
            Sign::Minus => self.neg(&magnitude),
            _ => magnitude,
        }
    }

    pub fn add(&self, a: &Scalar, b: &Scalar) -> Scalar {
        Scalar((&a.0 + &b.0) % &self.modulus)
    }

    pub fn sub(&self, a: &Scalar, b: &Scalar) -> Scalar {
        Scalar((&a.0 + &self.modulus - &b.0) % &self.modulus)
    }

    pub fn mul(&self, a: &Scalar, b: &Scalar) -> Scalar {
        Scalar((&a.0 * &b.0) % &self.modulus)
    }

    pub fn neg(&self, a: &Scalar) -> Scalar {
        Scalar((&self.modulus - &a.0) % &self.modulus)
    }

    /// Raise `base` to an integer exponent
    pub fn pow(&self, base: &Scalar, exponent: &BigUint) -> Scalar {
        Scalar(base.0.modpow(exponent, &self.modulus))
    }

    /// Multiplicative inverse via Fermat's little theorem (`a^(q-2)`)
    pub fn inverse(&self, a: &Scalar) -> PedersenResult<Scalar> {
        if a.is_zero() {
            return Err(PedersenError::NotInvertible);
        }

        let exponent = &self.modulus - BigUint::from(2u8);
        Ok(self.pow(a, &exponent))
    }

    /// Sample a uniformly random scalar
    pub fn random<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Scalar {
        let mut bytes = vec![0u8; self.byte_len + WIDE_REDUCTION_BYTES];
        rng.fill_bytes(&mut bytes);
        self.from_wide_bytes(&bytes)
    }

    /// Reduce a big-endian byte string of any length into the field
    pub fn from_wide_bytes(&self, bytes: &[u8]) -> Scalar {
        self.reduce(&BigUint::from_bytes_be(bytes))
    }

    /// Fixed-width big-endian encoding
    pub fn encode(&self, scalar: &Scalar) -> Vec<u8> {
        let digits = scalar.0.to_bytes_be();
        let mut bytes = vec![0u8; self.byte_len.saturating_sub(digits.len())];
        bytes.extend_from_slice(&digits);
        bytes
    }

    /// Decode a canonical fixed-width encoding; values `>= q` are rejected
    pub fn decode(&self, bytes: &[u8]) -> PedersenResult<Scalar> {
        if bytes.len() != self.byte_len {
            return Err(PedersenError::InvalidEncoding(format!(
                "scalar must be {} bytes, got {}",
                self.byte_len,
                bytes.len()
            )));
        }

        let value = BigUint::from_bytes_be(bytes);
        if value >= self.modulus {
            return Err(PedersenError::InvalidEncoding(
                "scalar is not reduced modulo the group order".to_string(),
            ));
        }

        Ok(Scalar(value))
    }

    pub fn to_hex(&self, scalar: &Scalar) -> String {
        hex::encode(self.encode(scalar))
    }

    pub fn from_hex(&self, text: &str) -> PedersenResult<Scalar> {
        let bytes = hex::decode(text)
            .map_err(|e| PedersenError::InvalidEncoding(format!("scalar hex: {}", e)))?;
        if hex::encode(&bytes) != text {
            return Err(PedersenError::InvalidEncoding(
                "scalar hex must be lowercase".to_string(),
            ));
        }
        self.decode(&bytes)
    }
}
