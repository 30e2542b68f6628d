//! System configuration: which group backend and which generator label

use crate::EngineResult;
use pedersen_core::{GroupKind, PedersenContext, DEFAULT_GENERATOR_LABEL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Group backend
    pub group: GroupKind,
    /// Domain-separation label for deriving `H`
    pub generator_label: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            group: GroupKind::default(),
            generator_label: String::from_utf8_lossy(DEFAULT_GENERATOR_LABEL).into_owned(),
        }
    }
}

impl SystemConfig {
    pub fn from_json(text: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the context for `group` under this configuration's label
    pub fn context<G: pedersen_core::Group>(&self, group: G) -> EngineResult<PedersenContext<G>> {
        Ok(PedersenContext::with_label(group, self.generator_label.as_bytes())?)
    }
}
