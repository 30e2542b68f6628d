//! Pedersen Prove CLI Tool
//!
//! Runs a statement script over named inputs and writes the proof transcript.

use anyhow::Context;
use clap::Parser;
use pedersen_cli::{common::init_logging, prove::*};

#[derive(Parser)]
#[command(name = "pedersen-prove")]
#[command(about = "Prove statements about Pedersen-committed values")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    prove_args: ProveArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.prove_args.system.log_level());

    handle_prove_command(&cli.prove_args)
        .with_context(|| format!("proving {}", cli.prove_args.script.display()))
}
