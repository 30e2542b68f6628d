//! Immutable system context shared by every component

use crate::{derive_h, Group, PedersenResult, ScalarField, DEFAULT_GENERATOR_LABEL};

/// Group backend, scalar field and the generator pair `(G, H)`.
///
/// Built once per system instance and passed by reference into the proof
/// protocols and engines.
#[derive(Debug, Clone)]
pub struct PedersenContext<G: Group> {
    group: G,
    field: ScalarField,
    g: G::Element,
    h: G::Element,
    label: Vec<u8>,
}

impl<G: Group> PedersenContext<G> {
    /// Create a context with the default generator label
    pub fn new(group: G) -> PedersenResult<Self> {
        Self::with_label(group, DEFAULT_GENERATOR_LABEL)
    }

    /// Create a context deriving `H` under a custom domain-separation label
    pub fn with_label(group: G, label: &[u8]) -> PedersenResult<Self> {
        let field = ScalarField::new(group.order().clone())?;
        let g = group.generator();
        let h = derive_h(&group, label)?;

        Ok(Self {
            group,
            field,
            g,
            h,
            label: label.to_vec(),
        })
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    pub fn field(&self) -> &ScalarField {
        &self.field
    }

    /// The value generator `G`
    pub fn g(&self) -> &G::Element {
        &self.g
    }

    /// The blinding generator `H`
    pub fn h(&self) -> &G::Element {
        &self.h
    }

    /// Label `H` was derived under
    pub fn label(&self) -> &[u8] {
        &self.label
    }
}
