//! Typed script commands, decoded once from tokenized records

use crate::tokenizer::{format_record, Record};
use crate::{ScriptError, ScriptResult, Weight};
use num_bigint::BigInt;
use std::fmt;
use std::str::FromStr;

/// The closed opcode set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Input,
    Commit,
    Sum,
    Equal,
    Square,
    Same,
    Log,
}

impl Opcode {
    pub const ALL: [Opcode; 7] = [
        Opcode::Input,
        Opcode::Commit,
        Opcode::Sum,
        Opcode::Equal,
        Opcode::Square,
        Opcode::Same,
        Opcode::Log,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Opcode::Input => "input",
            Opcode::Commit => "commit",
            Opcode::Sum => "sum",
            Opcode::Equal => "equal",
            Opcode::Square => "square",
            Opcode::Same => "same",
            Opcode::Log => "log",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One statement of a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Bind `name` to an externally supplied input
    Input { name: String },
    /// Bind `name` to an expression over earlier bindings
    Commit { name: String, expression: String },
    /// Bind `name` to a weighted sum of earlier bindings
    Sum {
        name: String,
        terms: Vec<(Weight, String)>,
    },
    /// Claim that `name` hides `value`
    Equal { name: String, value: BigInt },
    /// Bind `name` to the square of `source`
    Square { name: String, source: String },
    /// Claim that `left` and `right` hide the same secret
    Same { left: String, right: String },
    /// Prover-side diagnostics
    Log,
}

impl ScriptCommand {
    pub fn opcode(&self) -> Opcode {
        match self {
            ScriptCommand::Input { .. } => Opcode::Input,
            ScriptCommand::Commit { .. } => Opcode::Commit,
            ScriptCommand::Sum { .. } => Opcode::Sum,
            ScriptCommand::Equal { .. } => Opcode::Equal,
            ScriptCommand::Square { .. } => Opcode::Square,
            ScriptCommand::Same { .. } => Opcode::Same,
            ScriptCommand::Log => Opcode::Log,
        }
    }

    /// Decode a tokenized record
    pub fn from_record(record: &Record) -> ScriptResult<Self> {
        let opcode = Opcode::from_name(record.opcode()).ok_or_else(|| ScriptError::UnknownOpcode {
            record: record.number,
            opcode: record.opcode().to_string(),
        })?;
        let operands = record.operands();

        let invalid = |reason: String| ScriptError::InvalidOperands {
            record: record.number,
            opcode,
            reason,
        };
        let arity = |expected: usize| {
            if operands.len() == expected {
                Ok(())
            } else {
                Err(invalid(format!(
                    "expected {} operands, got {}",
                    expected,
                    operands.len()
                )))
            }
        };
        let name = |index: usize| -> ScriptResult<String> {
            let name = &operands[index];
            if name.is_empty() {
                return Err(invalid(format!("operand {} must be a variable name", index + 1)));
            }
            Ok(name.clone())
        };

        let command = match opcode {
            Opcode::Input => {
                arity(1)?;
                ScriptCommand::Input { name: name(0)? }
            }
            Opcode::Commit => {
                arity(2)?;
                if operands[1].is_empty() {
                    return Err(invalid("empty expression".to_string()));
                }
                ScriptCommand::Commit {
                    name: name(0)?,
                    expression: operands[1].clone(),
                }
            }
            Opcode::Sum => {
                if operands.len() < 3 || operands.len() % 2 == 0 {
                    return Err(invalid(
                        "expected a name followed by one or more (weight, variable) pairs".to_string(),
                    ));
                }
                let mut terms = Vec::with_capacity(operands.len() / 2);
                for index in (1..operands.len()).step_by(2) {
                    let weight = operands[index]
                        .parse::<Weight>()
                        .map_err(|e| invalid(e.to_string()))?;
                    terms.push((weight, name(index + 1)?));
                }
                ScriptCommand::Sum {
                    name: name(0)?,
                    terms,
                }
            }
            Opcode::Equal => {
                arity(2)?;
                let value =
                    BigInt::from_str(&operands[1]).map_err(|_| ScriptError::InvalidLiteral {
                        record: record.number,
                        literal: operands[1].clone(),
                    })?;
                ScriptCommand::Equal {
                    name: name(0)?,
                    value,
                }
            }
            Opcode::Square => {
                arity(2)?;
                ScriptCommand::Square {
                    name: name(0)?,
                    source: name(1)?,
                }
            }
            Opcode::Same => {
                arity(2)?;
                ScriptCommand::Same {
                    left: name(0)?,
                    right: name(1)?,
                }
            }
            Opcode::Log => {
                arity(0)?;
                ScriptCommand::Log
            }
        };

        Ok(command)
    }

    fn fields(&self) -> Vec<String> {
        let mut fields = vec![self.opcode().to_string()];
        match self {
            ScriptCommand::Input { name } => fields.push(name.clone()),
            ScriptCommand::Commit { name, expression } => {
                fields.extend([name.clone(), expression.clone()]);
            }
            ScriptCommand::Sum { name, terms } => {
                fields.push(name.clone());
                for (weight, var) in terms {
                    fields.extend([weight.to_string(), var.clone()]);
                }
            }
            ScriptCommand::Equal { name, value } => {
                fields.extend([name.clone(), value.to_string()]);
            }
            ScriptCommand::Square { name, source } => {
                fields.extend([name.clone(), source.clone()]);
            }
            ScriptCommand::Same { left, right } => {
                fields.extend([left.clone(), right.clone()]);
            }
            ScriptCommand::Log => {}
        }
        fields
    }
}

impl fmt::Display for ScriptCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_record(&self.fields()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tokenizer;
    use num_bigint::BigUint;

    fn parse_one(text: &str) -> ScriptResult<ScriptCommand> {
        let record = Tokenizer::new(text).next().unwrap()?;
        ScriptCommand::from_record(&record)
    }

    #[test]
    fn test_parse_every_opcode() {
        assert_eq!(
            parse_one("input,a;").unwrap(),
            ScriptCommand::Input { name: "a".into() }
        );
        assert_eq!(
            parse_one("commit,b,a*a+1;").unwrap(),
            ScriptCommand::Commit {
                name: "b".into(),
                expression: "a*a+1".into()
            }
        );
        assert_eq!(
            parse_one("sum,c,1,a,.5,b,/3,d;").unwrap(),
            ScriptCommand::Sum {
                name: "c".into(),
                terms: vec![
                    (Weight::one(), "a".into()),
                    (
                        Weight::Fraction {
                            numerator: BigUint::from(5u32),
                            places: 1
                        },
                        "b".into()
                    ),
                    (Weight::Inverse(BigUint::from(3u32)), "d".into()),
                ]
            }
        );
        assert_eq!(
            parse_one("equal,c,-8;").unwrap(),
            ScriptCommand::Equal {
                name: "c".into(),
                value: BigInt::from(-8)
            }
        );
        assert_eq!(
            parse_one("square,a_sq,a;").unwrap(),
            ScriptCommand::Square {
                name: "a_sq".into(),
                source: "a".into()
            }
        );
        assert_eq!(
            parse_one("same,x,y;").unwrap(),
            ScriptCommand::Same {
                left: "x".into(),
                right: "y".into()
            }
        );
        assert_eq!(parse_one("log;").unwrap(), ScriptCommand::Log);
    }

    #[test]
    fn test_unknown_opcode() {
        assert_eq!(
            parse_one("prove,a;"),
            Err(ScriptError::UnknownOpcode {
                record: 1,
                opcode: "prove".into()
            })
        );
    }

    #[test]
    fn test_opcodes_are_case_sensitive() {
        assert!(matches!(
            parse_one("INPUT,a;"),
            Err(ScriptError::UnknownOpcode { .. })
        ));
    }

    #[test]
    fn test_arity_errors() {
        for text in [
            "input;",
            "input,a,b;",
            "commit,a;",
            "equal,a;",
            "square,a;",
            "same,a,b,c;",
            "log,a;",
            "sum,c;",
            "sum,c,1;",
            "sum,c,1,a,2;",
        ] {
            assert!(
                matches!(parse_one(text), Err(ScriptError::InvalidOperands { .. })),
                "{text} should fail"
            );
        }
    }

    #[test]
    fn test_empty_names_rejected() {
        assert!(matches!(
            parse_one("input, ;"),
            Err(ScriptError::InvalidOperands { .. })
        ));
        assert!(matches!(
            parse_one("sum,c,1, ;"),
            Err(ScriptError::InvalidOperands { .. })
        ));
    }

    #[test]
    fn test_bad_weight_and_literal() {
        let err = parse_one("sum,c,/0,a;").unwrap_err();
        assert!(err.to_string().contains("invalid weight literal '/0'"));

        let err = parse_one("equal,c,eight;").unwrap_err();
        assert_eq!(
            err,
            ScriptError::InvalidLiteral {
                record: 1,
                literal: "eight".to_string()
            }
        );
        assert_eq!(err.to_string(), "record 1: invalid integer literal 'eight'");
    }

    #[test]
    fn test_display_is_canonical() {
        let command = parse_one(" sum , c , 1 , a , .50 , b ;").unwrap();
        assert_eq!(command.to_string(), "sum,c,1,a,.50,b;");

        let command = ScriptCommand::Commit {
            name: "x".into(),
            expression: "f(a,b)".into(),
        };
        assert_eq!(command.to_string(), "commit,x,f(a@,b);");
        assert_eq!(parse_one(&command.to_string()).unwrap(), command);
    }
}
