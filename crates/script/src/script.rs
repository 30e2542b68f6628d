//! Whole-script parsing

use crate::{ScriptCommand, ScriptResult, Tokenizer};
use std::fmt;
use std::str::FromStr;

/// A parsed statement script, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    commands: Vec<ScriptCommand>,
}

impl Script {
    pub fn new(commands: Vec<ScriptCommand>) -> Self {
        Self { commands }
    }

    /// Tokenize and decode every record; the first error aborts
    pub fn parse(text: &str) -> ScriptResult<Self> {
        let commands = Tokenizer::new(text)
            .map(|record| ScriptCommand::from_record(&record?))
            .collect::<ScriptResult<Vec<_>>>()?;
        Ok(Self { commands })
    }

    pub fn commands(&self) -> &[ScriptCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScriptCommand> {
        self.commands.iter()
    }
}

impl FromStr for Script {
    type Err = crate::ScriptError;

    fn from_str(s: &str) -> ScriptResult<Self> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a ScriptCommand;
    type IntoIter = std::slice::Iter<'a, ScriptCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            writeln!(f, "{}", command)?;
        }
        Ok(())
    }
}
