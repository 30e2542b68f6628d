//! Transcript management for the Fiat-Shamir heuristic

use crate::{Group, PedersenContext, Scalar, ScalarField, WIDE_REDUCTION_BYTES};
use merlin::Transcript;

/// Protocol label of the running statement transcript
pub const STATEMENT_TRANSCRIPT_LABEL: &[u8] = b"pedersen-statement-script";

/// Extension trait for Transcript to absorb group elements and squeeze scalars
pub trait TranscriptProtocol {
    /// Append a group element in its canonical encoding
    fn append_element<G: Group>(&mut self, label: &'static [u8], group: &G, element: &G::Element);

    /// Append a scalar in its canonical encoding
    fn append_scalar(&mut self, label: &'static [u8], field: &ScalarField, scalar: &Scalar);

    /// Challenge scalar from transcript
    fn challenge_scalar(&mut self, label: &'static [u8], field: &ScalarField) -> Scalar;
}

impl TranscriptProtocol for Transcript {
    fn append_element<G: Group>(&mut self, label: &'static [u8], group: &G, element: &G::Element) {
        self.append_message(label, &group.encode(element));
    }

    fn append_scalar(&mut self, label: &'static [u8], field: &ScalarField, scalar: &Scalar) {
        self.append_message(label, &field.encode(scalar));
    }

    fn challenge_scalar(&mut self, label: &'static [u8], field: &ScalarField) -> Scalar {
        let mut buf = vec![0u8; field.byte_len() + WIDE_REDUCTION_BYTES];
        self.challenge_bytes(label, &mut buf);
        field.from_wide_bytes(&buf)
    }
}

/// Create the running transcript for one script run, bound to the backend
/// and both generators
pub fn statement_transcript<G: Group>(ctx: &PedersenContext<G>) -> Transcript {
    let mut transcript = Transcript::new(STATEMENT_TRANSCRIPT_LABEL);
    transcript.append_message(b"group", ctx.group().name().as_bytes());
    transcript.append_message(b"generator-label", ctx.label());
    transcript.append_element(b"G", ctx.group(), ctx.g());
    transcript.append_element(b"H", ctx.group(), ctx.h());
    transcript
}
