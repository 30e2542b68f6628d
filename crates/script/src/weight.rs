//! Weight literals of the `sum` opcode
//!
//! - `3`, `-2`: an integer, reduced into the scalar field
//! - `.5`, `.25`: a decimal fraction `d`, resolving to `ceil(q·d)`
//! - `/3`: the field inverse of an integer

use crate::{ScriptError, ScriptResult};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Weight {
    Integer(BigInt),
    /// `numerator / 10^places`
    Fraction { numerator: BigUint, places: u32 },
    /// Multiplicative inverse of a non-zero integer
    Inverse(BigUint),
}

impl Weight {
    pub fn one() -> Self {
        Weight::Integer(BigInt::from(1))
    }
}

fn parse_digits(digits: &str, literal: &str) -> ScriptResult<BigUint> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScriptError::InvalidWeight(literal.to_string()));
    }
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| ScriptError::InvalidWeight(literal.to_string()))
}

impl FromStr for Weight {
    type Err = ScriptError;

    fn from_str(s: &str) -> ScriptResult<Self> {
        if let Some(fraction) = s.strip_prefix('.') {
            let places = u32::try_from(fraction.len())
                .map_err(|_| ScriptError::InvalidWeight(s.to_string()))?;
            return Ok(Weight::Fraction {
                numerator: parse_digits(fraction, s)?,
                places,
            });
        }

        if let Some(divisor) = s.strip_prefix('/') {
            let divisor = parse_digits(divisor, s)?;
            if divisor.is_zero() {
                return Err(ScriptError::InvalidWeight(s.to_string()));
            }
            return Ok(Weight::Inverse(divisor));
        }

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let magnitude = BigInt::from(parse_digits(digits, s)?);
        Ok(Weight::Integer(if negative { -magnitude } else { magnitude }))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Integer(value) => write!(f, "{}", value),
            Weight::Fraction { numerator, places } => {
                write!(f, ".{:0>width$}", numerator.to_string(), width = *places as usize)
            }
            Weight::Inverse(divisor) => write!(f, "/{}", divisor),
        }
    }
}
