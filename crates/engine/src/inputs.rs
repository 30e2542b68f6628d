//! Named numeric inputs for the `input` opcode
//!
//! Loaded from a JSON object. Values are JSON integers, or decimal strings
//! for anything beyond 64 bits; either may be negative.
//!
//! ```json
//! { "a": 3, "b": -5, "big": "123456789012345678901234567890" }
//! ```

use crate::{EngineError, EngineResult};
use num_bigint::BigInt;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Signed(i64),
    Unsigned(u64),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedInputs {
    values: BTreeMap<String, BigInt>,
}

impl NamedInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> EngineResult<Self> {
        let raw: BTreeMap<String, RawValue> = serde_json::from_str(text)?;

        let mut inputs = Self::new();
        for (name, value) in raw {
            let value = match value {
                RawValue::Signed(v) => BigInt::from(v),
                RawValue::Unsigned(v) => BigInt::from(v),
                RawValue::Text(text) => BigInt::from_str(text.trim())
                    .map_err(|_| EngineError::InvalidInput { name: name.clone(), value: text })?,
            };
            inputs.insert(name, value);
        }
        Ok(inputs)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<BigInt>) -> Option<BigInt> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&BigInt> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>, V: Into<BigInt>> FromIterator<(S, V)> for NamedInputs {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut inputs = Self::new();
        for (name, value) in iter {
            inputs.insert(name, value);
        }
        inputs
    }
}
