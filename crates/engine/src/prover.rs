//! Prover engine
//!
//! Runs a script over secret openings and writes the proof transcript.
//! `input` and `commit` publish a fresh commitment; `equal`, `square` and
//! `same` publish proofs; `sum` and `log` publish nothing.

use crate::linear::combine_secrets;
use crate::{
    EngineError, EngineResult, ExpressionEvaluator, NamedInputs, ProofTranscript, SecretBinding,
    SecretBindings, TranscriptWriter,
};
use merlin::Transcript;
use pedersen_core::{statement_transcript, Group, PedersenContext, Scalar, TranscriptProtocol};
use rand_core::{CryptoRng, RngCore};
use sigma_protocols::{BlindingEqualityProof, ProofArtifact, SquaredValueProof, ValueKnowledgeProof};
use statement_script::{Script, ScriptCommand};
use tracing::{debug, info, warn};

pub struct ProverEngine<'a, G: Group, R: RngCore + CryptoRng> {
    ctx: &'a PedersenContext<G>,
    inputs: &'a NamedInputs,
    evaluator: &'a dyn ExpressionEvaluator,
    bindings: SecretBindings,
    rng: R,
    fiat_shamir: Transcript,
    writer: TranscriptWriter,
    executed: usize,
}

impl<'a, G: Group, R: RngCore + CryptoRng> ProverEngine<'a, G, R> {
    pub fn new(
        ctx: &'a PedersenContext<G>,
        inputs: &'a NamedInputs,
        evaluator: &'a dyn ExpressionEvaluator,
        rng: R,
    ) -> Self {
        Self {
            ctx,
            inputs,
            evaluator,
            bindings: SecretBindings::new(),
            rng,
            fiat_shamir: statement_transcript(ctx),
            writer: TranscriptWriter::new(),
            executed: 0,
        }
    }

    pub fn bindings(&self) -> &SecretBindings {
        &self.bindings
    }

    /// Execute every command in order; the first error aborts
    pub fn run(&mut self, script: &Script) -> EngineResult<()> {
        for command in script {
            self.execute(command)?;
        }
        info!(
            statements = self.executed,
            records = self.writer.len(),
            "proof transcript complete"
        );
        Ok(())
    }

    pub fn execute(&mut self, command: &ScriptCommand) -> EngineResult<()> {
        self.executed += 1;
        let ctx = self.ctx;
        let field = ctx.field();

        match command {
            ScriptCommand::Input { name } => {
                let value = self
                    .inputs
                    .get(name)
                    .ok_or_else(|| EngineError::MissingInput(name.clone()))?;
                let secret = field.from_signed(value);
                self.publish(name, secret);
            }
            ScriptCommand::Commit { name, expression } => {
                let secret = self.evaluator.evaluate(expression, field, &self.bindings)?;
                self.publish(name, secret);
            }
            ScriptCommand::Sum { name, terms } => {
                let binding = combine_secrets(field, &self.bindings, terms)?;
                debug!(name = %name, terms = terms.len(), "sum");
                self.bindings.insert(name.clone(), binding);
            }
            ScriptCommand::Equal { name, value } => {
                let binding = self.bindings.get(name)?;
                let claimed = field.from_signed(value);
                if binding.secret != claimed {
                    warn!(name = %name, claimed = %value, "claimed value does not match the committed secret");
                }

                let proof = ValueKnowledgeProof::prove(
                    ctx,
                    &mut self.fiat_shamir,
                    &binding.commitment(ctx),
                    &claimed,
                    &binding.blinding,
                    &mut self.rng,
                );
                self.writer
                    .push(ProofArtifact::ValueKnowledge(proof).to_fields(ctx));
                debug!(name = %name, value = %value, "equal");
            }
            ScriptCommand::Square { name, source } => {
                let binding = self.bindings.get(source)?;
                let output = SquaredValueProof::prove(
                    ctx,
                    &mut self.fiat_shamir,
                    &binding.commitment(ctx),
                    &binding.secret,
                    &binding.blinding,
                    &mut self.rng,
                );

                self.writer.push_element(ctx, &output.commitment);
                self.writer
                    .push(ProofArtifact::SquaredValue(output.proof).to_fields(ctx));
                debug!(name = %name, source = %source, "square");
                self.bindings
                    .insert(name.clone(), SecretBinding::new(output.secret, output.blinding));
            }
            ScriptCommand::Same { left, right } => {
                let lhs = self.bindings.get(left)?;
                let rhs = self.bindings.get(right)?;
                if lhs.secret != rhs.secret {
                    warn!(left = %left, right = %right, "commitments hide different secrets");
                }

                let proof = BlindingEqualityProof::prove(
                    ctx,
                    &mut self.fiat_shamir,
                    &lhs.commitment(ctx),
                    &rhs.commitment(ctx),
                    &lhs.blinding,
                    &rhs.blinding,
                );
                self.writer
                    .push(ProofArtifact::<G>::BlindingEquality(proof).to_fields(ctx));
                debug!(left = %left, right = %right, "same");
            }
            ScriptCommand::Log => {
                for (name, binding) in self.bindings.iter() {
                    info!(name, secret = %binding.secret, "binding");
                }
            }
        }

        Ok(())
    }

    /// Commit to `secret` under a fresh blinding and publish the commitment
    fn publish(&mut self, name: &str, secret: Scalar) {
        let ctx = self.ctx;
        let binding = SecretBinding::new(secret, ctx.field().random(&mut self.rng));
        let commitment = binding.commitment(ctx);

        self.fiat_shamir
            .append_element(b"commitment", ctx.group(), &commitment);
        self.writer.push_element(ctx, &commitment);

        debug!(name, "commit");
        self.bindings.insert(name, binding);
    }

    pub fn finish(self) -> ProofTranscript {
        self.writer.finish()
    }
}
