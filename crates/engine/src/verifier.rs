//! Verifier engine
//!
//! Replays a script against a proof transcript without any secrets. It
//! consumes records exactly where the prover produced them and absorbs the
//! same public values into its own Fiat-Shamir transcript, so challenges
//! line up only while both sides agree on everything seen so far. A tampered
//! record therefore fails its own statement and every challenge after it.

use crate::linear::combine_commitments;
use crate::{
    EngineResult, ProofTranscript, PublicBindings, StatementOutcome, TranscriptReader,
    VerificationReport,
};
use merlin::Transcript;
use pedersen_core::{statement_transcript, Commitment, Group, PedersenContext, TranscriptProtocol};
use sigma_protocols::{ProofArtifact, ProofKind, ProofStatement};
use statement_script::{Opcode, Script, ScriptCommand};
use tracing::{debug, info, warn};

pub struct VerifierEngine<'a, G: Group> {
    ctx: &'a PedersenContext<G>,
    bindings: PublicBindings<G>,
    reader: TranscriptReader<'a>,
    fiat_shamir: Transcript,
    outcomes: Vec<StatementOutcome>,
    executed: usize,
}

impl<'a, G: Group> VerifierEngine<'a, G> {
    pub fn new(ctx: &'a PedersenContext<G>, transcript: &'a ProofTranscript) -> Self {
        Self {
            ctx,
            bindings: PublicBindings::new(),
            reader: transcript.reader(),
            fiat_shamir: statement_transcript(ctx),
            outcomes: Vec::new(),
            executed: 0,
        }
    }

    pub fn bindings(&self) -> &PublicBindings<G> {
        &self.bindings
    }

    /// Execute every command in order; the first fatal error aborts
    pub fn run(&mut self, script: &Script) -> EngineResult<()> {
        for command in script {
            self.execute(command)?;
        }
        Ok(())
    }

    pub fn execute(&mut self, command: &ScriptCommand) -> EngineResult<()> {
        self.executed += 1;
        let ctx = self.ctx;
        let field = ctx.field();

        match command {
            ScriptCommand::Input { name } | ScriptCommand::Commit { name, .. } => {
                let commitment = self.read_element(command.opcode())?;
                self.fiat_shamir
                    .append_element(b"commitment", ctx.group(), &commitment);
                debug!(name = %name, opcode = %command.opcode(), "commitment");
                self.bindings.insert(name.clone(), commitment);
            }
            ScriptCommand::Sum { name, terms } => {
                let combined = combine_commitments(ctx, &self.bindings, terms)?;
                debug!(name = %name, terms = terms.len(), "sum");
                self.bindings.insert(name.clone(), combined);
            }
            ScriptCommand::Equal { name, value } => {
                let commitment = self.bindings.get(name)?.clone();
                let value = field.from_signed(value);
                let proof = self.read_proof(Opcode::Equal, ProofKind::ValueKnowledge)?;

                let passed = proof.verify(
                    ctx,
                    &mut self.fiat_shamir,
                    &ProofStatement::ValueKnowledge {
                        commitment: &commitment,
                        value: &value,
                    },
                )?;
                self.record(command, name, passed);
            }
            ScriptCommand::Square { name, source } => {
                let source_commitment = self.bindings.get(source)?.clone();
                let squared = self.read_element(Opcode::Square)?;
                let proof = self.read_proof(Opcode::Square, ProofKind::SquaredValue)?;

                let passed = proof.verify(
                    ctx,
                    &mut self.fiat_shamir,
                    &ProofStatement::SquaredValue {
                        source: &source_commitment,
                        squared: &squared,
                    },
                )?;
                self.record(command, name, passed);
                self.bindings.insert(name.clone(), squared);
            }
            ScriptCommand::Same { left, right } => {
                let lhs = self.bindings.get(left)?.clone();
                let rhs = self.bindings.get(right)?.clone();
                let proof = self.read_proof(Opcode::Same, ProofKind::BlindingEquality)?;

                let passed = proof.verify(
                    ctx,
                    &mut self.fiat_shamir,
                    &ProofStatement::BlindingEquality {
                        left: &lhs,
                        right: &rhs,
                    },
                )?;
                self.record(command, left, passed);
            }
            ScriptCommand::Log => {}
        }

        Ok(())
    }

    fn read_element(&mut self, opcode: Opcode) -> EngineResult<Commitment<G>> {
        let fields = self.reader.next_record(opcode, 1)?;
        Ok(self.ctx.group().decode_hex(&fields[0])?)
    }

    fn read_proof(&mut self, opcode: Opcode, kind: ProofKind) -> EngineResult<ProofArtifact<G>> {
        let fields = self.reader.next_record(opcode, kind.field_count())?;
        Ok(ProofArtifact::from_fields(kind, self.ctx, fields)?)
    }

    fn record(&mut self, command: &ScriptCommand, name: &str, passed: bool) {
        let outcome = StatementOutcome {
            index: self.executed,
            opcode: command.opcode(),
            name: name.to_string(),
            statement: command.to_string(),
            passed,
        };

        if passed {
            debug!(statement = %outcome.statement, "verified");
        } else {
            warn!(statement = %outcome.statement, index = outcome.index, "verification failed");
        }
        self.outcomes.push(outcome);
    }

    /// Close the run; every transcript record must have been consumed
    pub fn finish(self) -> EngineResult<VerificationReport> {
        self.reader.finish()?;

        let report = VerificationReport {
            outcomes: self.outcomes,
        };
        info!(
            passed = report.passed_count(),
            total = report.len(),
            "verification complete"
        );
        Ok(report)
    }
}
