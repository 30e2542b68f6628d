//! `pedersen-verify`: replay a script against a proof transcript

use crate::{common::*, Result};
use clap::Args;
use pedersen_core::{Group, GroupKind, ModPGroup, Ristretto255};
use statement_engine::{verify_script, ProofTranscript, SystemConfig, VerificationReport};
use statement_script::Script;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Statement script
    #[arg(short, long)]
    pub script: PathBuf,

    /// Proof transcript written by pedersen-prove
    #[arg(short, long)]
    pub receipt: PathBuf,

    #[command(flatten)]
    pub system: SystemArgs,
}

/// Verify `transcript` under the backend selected by `config`
pub fn verify(
    config: &SystemConfig,
    script: &Script,
    transcript: &ProofTranscript,
) -> Result<VerificationReport> {
    match config.group {
        GroupKind::Ristretto => verify_with(config, Ristretto255::new(), script, transcript),
        GroupKind::ModP => verify_with(config, ModPGroup::rfc3526_2048(), script, transcript),
    }
}

fn verify_with<G: Group>(
    config: &SystemConfig,
    group: G,
    script: &Script,
    transcript: &ProofTranscript,
) -> Result<VerificationReport> {
    let ctx = config.context(group)?;
    Ok(verify_script(&ctx, script, transcript)?)
}

/// Verify and print the report; returns whether every statement passed
pub fn handle_verify_command(args: &VerifyArgs) -> Result<bool> {
    let config = args.system.load_config()?;
    let script = load_script(&args.script)?;
    let transcript = ProofTranscript::parse(&read_text(&args.receipt)?)?;

    info!(
        group = %config.group,
        statements = script.len(),
        records = transcript.len(),
        "verifying"
    );
    let report = verify(&config, &script, &transcript)?;

    println!("{}", report);
    Ok(report.all_passed())
}
