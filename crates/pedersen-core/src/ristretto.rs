//! Ristretto255 backend

use crate::{Group, PedersenError, PedersenResult, Scalar};
use curve25519_dalek::{
    constants::RISTRETTO_BASEPOINT_POINT,
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar as DalekScalar,
    traits::Identity,
};
use num_bigint::BigUint;
use num_traits::One;

/// `l = 2^252 + 27742317777372353535851937790883648493`
const ORDER_LOW_TERM: u128 = 27742317777372353535851937790883648493;

/// Ristretto255 group over Curve25519
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ristretto255 {
    order: BigUint,
}

impl Ristretto255 {
    pub fn new() -> Self {
        Self {
            order: (BigUint::one() << 252usize) + BigUint::from(ORDER_LOW_TERM),
        }
    }

    fn to_dalek(&self, k: &Scalar) -> DalekScalar {
        let reduced = k.value() % &self.order;
        let mut bytes = [0u8; 32];
        let le = reduced.to_bytes_le();
        bytes[..le.len()].copy_from_slice(&le);
        DalekScalar::from_bytes_mod_order(bytes)
    }
}

impl Default for Ristretto255 {
    fn default() -> Self {
        Self::new()
    }
}

impl Group for Ristretto255 {
    type Element = RistrettoPoint;

    fn name(&self) -> &'static str {
        "ristretto255"
    }

    fn order(&self) -> &BigUint {
        &self.order
    }

    fn generator(&self) -> RistrettoPoint {
        RISTRETTO_BASEPOINT_POINT
    }

    fn identity(&self) -> RistrettoPoint {
        RistrettoPoint::identity()
    }

    fn add(&self, a: &RistrettoPoint, b: &RistrettoPoint) -> RistrettoPoint {
        a + b
    }

    fn negate(&self, a: &RistrettoPoint) -> RistrettoPoint {
        -a
    }

    fn scalar_mul(&self, a: &RistrettoPoint, k: &Scalar) -> RistrettoPoint {
        a * self.to_dalek(k)
    }

    fn encode(&self, a: &RistrettoPoint) -> Vec<u8> {
        a.compress().to_bytes().to_vec()
    }

    fn decode(&self, bytes: &[u8]) -> PedersenResult<RistrettoPoint> {
        let compressed = CompressedRistretto::from_slice(bytes).map_err(|_| {
            PedersenError::InvalidEncoding(format!(
                "ristretto point must be 32 bytes, got {}",
                bytes.len()
            ))
        })?;

        compressed
            .decompress()
            .ok_or_else(|| PedersenError::InvalidEncoding("Invalid compressed point".to_string()))
    }

    fn uniform_bytes_len(&self) -> usize {
        64
    }

    fn element_from_uniform_bytes(&self, bytes: &[u8]) -> Option<RistrettoPoint> {
        let wide: [u8; 64] = bytes.try_into().ok()?;
        Some(RistrettoPoint::from_uniform_bytes(&wide))
    }
}
