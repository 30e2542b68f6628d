//! Pedersen Verify CLI Tool
//!
//! Replays a statement script against a proof transcript. Exits non-zero if
//! any statement fails.

use anyhow::Context;
use clap::Parser;
use pedersen_cli::{common::init_logging, verify::*};

#[derive(Parser)]
#[command(name = "pedersen-verify")]
#[command(about = "Verify statements about Pedersen-committed values")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    verify_args: VerifyArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verify_args.system.log_level());

    let passed = handle_verify_command(&cli.verify_args)
        .with_context(|| format!("verifying {}", cli.verify_args.receipt.display()))?;

    if !passed {
        std::process::exit(1);
    }
    Ok(())
}
