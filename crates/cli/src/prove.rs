//! `pedersen-prove`: run a script over named inputs

use crate::{common::*, Result};
use clap::Args;
use pedersen_core::{Group, GroupKind, ModPGroup, Ristretto255};
use rand::rngs::OsRng;
use statement_engine::{prove_script, FieldExpressionEvaluator, NamedInputs, ProofTranscript, SystemConfig};
use statement_script::Script;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct ProveArgs {
    /// Statement script
    #[arg(short, long)]
    pub script: PathBuf,

    /// JSON object of named inputs
    #[arg(short, long)]
    pub inputs: PathBuf,

    /// Where to write the proof transcript (stdout if omitted)
    #[arg(short, long)]
    pub receipt: Option<PathBuf>,

    #[command(flatten)]
    pub system: SystemArgs,
}

/// Prove `script` under the backend selected by `config`
pub fn prove(config: &SystemConfig, script: &Script, inputs: &NamedInputs) -> Result<ProofTranscript> {
    match config.group {
        GroupKind::Ristretto => prove_with(config, Ristretto255::new(), script, inputs),
        GroupKind::ModP => prove_with(config, ModPGroup::rfc3526_2048(), script, inputs),
    }
}

fn prove_with<G: Group>(
    config: &SystemConfig,
    group: G,
    script: &Script,
    inputs: &NamedInputs,
) -> Result<ProofTranscript> {
    let ctx = config.context(group)?;
    Ok(prove_script(&ctx, script, inputs, &FieldExpressionEvaluator, OsRng)?)
}

pub fn handle_prove_command(args: &ProveArgs) -> Result<()> {
    let config = args.system.load_config()?;
    let script = load_script(&args.script)?;
    let inputs = NamedInputs::from_json(&read_text(&args.inputs)?)?;

    info!(
        group = %config.group,
        statements = script.len(),
        inputs = inputs.len(),
        "proving"
    );
    let transcript = prove(&config, &script, &inputs)?;

    match &args.receipt {
        Some(path) => {
            write_text(path, &transcript.to_text())?;
            info!(path = %path.display(), records = transcript.len(), "receipt written");
        }
        None => print!("{}", transcript),
    }
    Ok(())
}
