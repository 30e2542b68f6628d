//! Per-statement verification results

use statement_script::Opcode;
use std::fmt;

/// Outcome of one checked statement (`equal`, `square` or `same`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementOutcome {
    /// 1-based index of the command in its script
    pub index: usize,
    pub opcode: Opcode,
    /// Variable the statement is about
    pub name: String,
    /// Canonical script text of the statement
    pub statement: String,
    pub passed: bool,
}

impl fmt::Display for StatementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passed { "ok" } else { "FAILED" };
        write!(f, "[{:>3}] {:<24} {}", self.index, self.statement, verdict)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub outcomes: Vec<StatementOutcome>,
}

impl VerificationReport {
    /// True when every checked statement passed, including when there were none
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StatementOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// Names of the statements that failed, in script order
    pub fn failed_names(&self) -> Vec<&str> {
        self.failures().map(|o| o.name.as_str()).collect()
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }
        write!(
            f,
            "{}/{} statements verified",
            self.passed_count(),
            self.outcomes.len()
        )
    }
}
