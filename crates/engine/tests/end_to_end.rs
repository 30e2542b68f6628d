//! End-to-end runs of prover and verifier over both group backends

use pedersen_core::{Group, ModPGroup, PedersenContext, Ristretto255};
use rand::thread_rng;
use statement_engine::{
    prove_script, verify_script, EngineError, FieldExpressionEvaluator, NamedInputs, ProofTranscript,
    ProverEngine, VerificationReport, VerifierEngine,
};
use statement_script::{Opcode, Script, ScriptError};

fn ristretto() -> PedersenContext<Ristretto255> {
    PedersenContext::new(Ristretto255::new()).unwrap()
}

fn inputs(values: &[(&str, i64)]) -> NamedInputs {
    values.iter().map(|(name, value)| (*name, *value)).collect()
}

fn prove<G: Group>(ctx: &PedersenContext<G>, script: &str, inputs: &NamedInputs) -> ProofTranscript {
    let script = Script::parse(script).unwrap();
    prove_script(ctx, &script, inputs, &FieldExpressionEvaluator, thread_rng()).unwrap()
}

fn verify<G: Group>(
    ctx: &PedersenContext<G>,
    script: &str,
    transcript: &ProofTranscript,
) -> Result<VerificationReport, EngineError> {
    verify_script(ctx, &Script::parse(script).unwrap(), transcript)
}

#[test]
fn test_sum_then_equal() {
    let ctx = ristretto();
    let script = "input,a; input,b; sum,c,1,a,1,b; equal,c,8;";
    let inputs = inputs(&[("a", 3), ("b", 5)]);

    let mut prover = ProverEngine::new(&ctx, &inputs, &FieldExpressionEvaluator, thread_rng());
    prover.run(&Script::parse(script).unwrap()).unwrap();
    assert_eq!(prover.bindings().get("c").unwrap().secret, ctx.field().from_u64(8));
    let transcript = prover.finish();

    let report = verify(&ctx, script, &transcript).unwrap();
    assert_eq!(report.len(), 1);
    assert!(report.all_passed());
    assert_eq!(report.outcomes[0].name, "c");
}

#[test]
fn test_wrong_sum_claim_fails() {
    let ctx = ristretto();
    let script = "input,a; input,b; sum,c,1,a,1,b; equal,c,9;";
    let transcript = prove(&ctx, script, &inputs(&[("a", 3), ("b", 5)]));

    let report = verify(&ctx, script, &transcript).unwrap();
    assert!(!report.all_passed());
    assert_eq!(report.failed_names(), vec!["c"]);
}

#[test]
fn test_square_of_four() {
    let ctx = ristretto();
    let script = "input,a; square,a_sq,a; equal,a_sq,16;";
    let inputs = inputs(&[("a", 4)]);

    let mut prover = ProverEngine::new(&ctx, &inputs, &FieldExpressionEvaluator, thread_rng());
    prover.run(&Script::parse(script).unwrap()).unwrap();
    assert_eq!(
        prover.bindings().get("a_sq").unwrap().secret,
        ctx.field().from_u64(16)
    );
    let transcript = prover.finish();

    let report = verify(&ctx, script, &transcript).unwrap();
    assert_eq!(report.len(), 2);
    assert!(report.all_passed());
}

#[test]
fn test_half_weight_agrees_on_both_sides() {
    let ctx = ristretto();
    // .5 is the inverse of two, so halving 2·a gives back a
    let script = "input,a; sum,d,2,a; sum,h,.5,d; same,h,a; equal,h,21;";
    let transcript = prove(&ctx, script, &inputs(&[("a", 21)]));

    let report = verify(&ctx, script, &transcript).unwrap();
    assert_eq!(report.len(), 2);
    assert!(report.all_passed());
}

#[test]
fn test_inverse_and_negative_weights() {
    let ctx = ristretto();
    let script = "input,a; input,b; sum,c,/3,a,-2,b; commit,expected,a/3-2*b; same,c,expected;";
    let transcript = prove(&ctx, script, &inputs(&[("a", 12), ("b", 1)]));

    let report = verify(&ctx, script, &transcript).unwrap();
    assert!(report.all_passed());
}

#[test]
fn test_commit_expression_and_same() {
    let ctx = ristretto();
    let script = "input,x; commit,y,x*x+2*x+1; input,z; same,y,z; equal,y,36;";
    let transcript = prove(&ctx, script, &inputs(&[("x", 5), ("z", 36)]));

    let report = verify(&ctx, script, &transcript).unwrap();
    assert_eq!(report.len(), 2);
    assert!(report.all_passed());
}

#[test]
fn test_same_with_different_secrets_fails() {
    let ctx = ristretto();
    let script = "input,a; input,b; same,a,b;";
    let transcript = prove(&ctx, script, &inputs(&[("a", 1), ("b", 2)]));

    let report = verify(&ctx, script, &transcript).unwrap();
    assert_eq!(report.failed_names(), vec!["a"]);
}

#[test]
fn test_chained_squares_and_redefinition() {
    let ctx = ristretto();
    let script = "input,a; square,a,a; square,a,a; equal,a,81; log;";
    let transcript = prove(&ctx, script, &inputs(&[("a", 3)]));

    let report = verify(&ctx, script, &transcript).unwrap();
    assert_eq!(report.len(), 3);
    assert!(report.all_passed());
}

#[test]
fn test_negative_values() {
    let ctx = ristretto();
    let script = "input,a; input,b; sum,c,1,a,1,b; equal,c,-4; equal,a,-9;";
    let transcript = prove(&ctx, script, &inputs(&[("a", -9), ("b", 5)]));

    let report = verify(&ctx, script, &transcript).unwrap();
    assert!(report.all_passed());
}

#[test]
fn test_transcript_survives_text_roundtrip() {
    let ctx = ristretto();
    let script = "input,a; square,s,a; equal,s,49; input,b; same,a,b;";
    let transcript = prove(&ctx, script, &inputs(&[("a", 7), ("b", 7)]));

    let parsed = ProofTranscript::parse(&transcript.to_text()).unwrap();
    assert_eq!(parsed, transcript);
    assert!(verify(&ctx, script, &parsed).unwrap().all_passed());
}

#[test]
fn test_tampering_any_field_is_detected() {
    let ctx = ristretto();
    let script = "input,a; input,b; sum,c,1,a,1,b; equal,c,8; square,d,a; equal,d,9; same,c,c;";
    let transcript = prove(&ctx, script, &inputs(&[("a", 3), ("b", 5)]));
    assert!(verify(&ctx, script, &transcript).unwrap().all_passed());

    for (record, fields) in transcript.records().iter().enumerate() {
        for field in 0..fields.len() {
            let mut records = transcript.records().to_vec();
            let text = &mut records[record][field];

            // Flip the low nibble of the last byte
            let last = text.pop().unwrap();
            let flipped = u8::from_str_radix(&last.to_string(), 16).unwrap() ^ 1;
            text.push_str(&format!("{:x}", flipped));
            let tampered = ProofTranscript::from_records(records);

            match verify(&ctx, script, &tampered) {
                Ok(report) => assert!(
                    !report.all_passed(),
                    "tampering record {} field {} went unnoticed",
                    record + 1,
                    field
                ),
                Err(EngineError::Core(_)) | Err(EngineError::Sigma(_)) => {}
                Err(other) => panic!("unexpected error {other}"),
            }
        }
    }
}

#[test]
fn test_uppercased_field_is_rejected() {
    let ctx = ristretto();
    let script = "input,a; equal,a,5;";
    let transcript = prove(&ctx, script, &inputs(&[("a", 5)]));

    for (record, fields) in transcript.records().iter().enumerate() {
        for field in 0..fields.len() {
            let mut records = transcript.records().to_vec();
            let upper = records[record][field].to_uppercase();
            if upper == records[record][field] {
                continue;
            }
            records[record][field] = upper;

            let result = verify(&ctx, script, &ProofTranscript::from_records(records));
            assert!(
                matches!(result, Err(EngineError::Core(_)) | Err(EngineError::Sigma(_))),
                "uppercased record {} field {} was accepted",
                record + 1,
                field
            );
        }
    }
}

#[test]
fn test_swapped_transcripts_fail() {
    let ctx = ristretto();
    let script = "input,a; equal,a,5;";
    let first = prove(&ctx, script, &inputs(&[("a", 5)]));
    let second = prove(&ctx, script, &inputs(&[("a", 5)]));

    // Splice the commitment of one run with the proof of another
    let mut records = first.records().to_vec();
    records[1] = second.records()[1].clone();
    let spliced = ProofTranscript::from_records(records);

    let report = verify(&ctx, script, &spliced).unwrap();
    assert!(!report.all_passed());
}

#[test]
fn test_underrun() {
    let ctx = ristretto();
    let transcript = prove(&ctx, "input,a;", &inputs(&[("a", 1)]));

    let err = verify(&ctx, "input,a; equal,a,1;", &transcript).unwrap_err();
    assert!(matches!(
        err,
        EngineError::TranscriptUnderrun {
            record: 2,
            opcode: Opcode::Equal
        }
    ));
}

#[test]
fn test_overrun() {
    let ctx = ristretto();
    let transcript = prove(&ctx, "input,a; equal,a,1;", &inputs(&[("a", 1)]));

    let err = verify(&ctx, "input,a;", &transcript).unwrap_err();
    assert!(matches!(err, EngineError::TranscriptOverrun { remaining: 1 }));
}

#[test]
fn test_misaligned_script_is_malformed() {
    let ctx = ristretto();
    let transcript = prove(&ctx, "input,a; input,b; same,a,b;", &inputs(&[("a", 1), ("b", 1)]));

    let err = verify(&ctx, "input,a; equal,a,1;", &transcript).unwrap_err();
    assert!(matches!(
        err,
        EngineError::MalformedRecord {
            record: 2,
            opcode: Opcode::Equal,
            expected: 3,
            actual: 1
        }
    ));
}

#[test]
fn test_unknown_opcode_is_fatal() {
    assert!(matches!(
        Script::parse("input,a; frobnicate,a;"),
        Err(ScriptError::UnknownOpcode { record: 2, .. })
    ));
}

#[test]
fn test_undefined_variable_on_verifier() {
    let ctx = ristretto();
    let transcript = prove(&ctx, "input,a;", &inputs(&[("a", 1)]));

    let err = verify(&ctx, "input,a; sum,c,1,a,1,ghost;", &transcript).unwrap_err();
    assert!(matches!(err, EngineError::UndefinedVariable(name) if name == "ghost"));
}

#[test]
fn test_wrong_generator_label_fails() {
    let ctx = ristretto();
    let other = PedersenContext::with_label(Ristretto255::new(), b"another label").unwrap();
    let script = "input,a; equal,a,2;";
    let transcript = prove(&ctx, script, &inputs(&[("a", 2)]));

    let report = verify(&other, script, &transcript).unwrap();
    assert!(!report.all_passed());
}

#[test]
fn test_modp_backend() {
    let ctx = PedersenContext::new(ModPGroup::rfc3526_2048()).unwrap();
    let script = "input,a; input,b; sum,c,1,a,1,b; equal,c,8; square,a2,a; equal,a2,9; same,c,c;";
    let transcript = prove(&ctx, script, &inputs(&[("a", 3), ("b", 5)]));

    let report = verify(&ctx, script, &transcript).unwrap();
    assert_eq!(report.len(), 4);
    assert!(report.all_passed());
}

#[test]
fn test_verifier_engine_step_by_step() {
    let ctx = ristretto();
    let script = Script::parse("input,a; equal,a,3;").unwrap();
    let transcript = prove(&ctx, "input,a; equal,a,3;", &inputs(&[("a", 3)]));

    let mut verifier = VerifierEngine::new(&ctx, &transcript);
    for command in &script {
        verifier.execute(command).unwrap();
    }
    assert!(verifier.bindings().contains("a"));
    assert!(verifier.finish().unwrap().all_passed());
}
