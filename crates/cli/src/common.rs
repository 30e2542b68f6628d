//! Shared functionality of the prover and verifier tools

use crate::{CliError, Result};
use clap::Args;
use pedersen_core::GroupKind;
use statement_engine::SystemConfig;
use statement_script::Script;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Options common to both tools
#[derive(Debug, Clone, Args)]
pub struct SystemArgs {
    /// Group backend (ristretto or modp); overrides the config file
    #[arg(short, long)]
    pub group: Option<GroupKind>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log every executed statement
    #[arg(short, long)]
    pub verbose: bool,
}

impl SystemArgs {
    /// Load the configuration file, if any, then apply flag overrides
    pub fn load_config(&self) -> Result<SystemConfig> {
        let mut config = match &self.config {
            Some(path) => SystemConfig::from_json(&read_text(path)?)?,
            None => SystemConfig::default(),
        };
        if let Some(group) = self.group {
            config.group = group;
        }
        Ok(config)
    }

    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

/// Install the fmt subscriber, writing to stderr
pub fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub fn load_script(path: &Path) -> Result<Script> {
    Ok(Script::parse(&read_text(path)?)?)
}
