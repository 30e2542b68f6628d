//! Expression evaluation for the `commit` opcode
//!
//! Grammar, evaluated in the scalar field:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := '-' unary | power
//! power  := atom ('^' '-'? integer)?
//! atom   := integer | identifier | '(' expr ')'
//! ```
//!
//! `/` multiplies by the field inverse. Exponents are plain integers rather
//! than field elements, and a negative exponent raises the inverse, so
//! `a^-1` equals `1/a`.

use crate::{EngineError, EngineResult, SecretBindings};
use num_bigint::BigUint;
use pedersen_core::{Scalar, ScalarField};
use std::iter::Peekable;
use std::str::Chars;

/// Evaluates `commit` expressions over the prover's bindings
pub trait ExpressionEvaluator {
    fn evaluate(
        &self,
        expression: &str,
        field: &ScalarField,
        bindings: &SecretBindings,
    ) -> EngineResult<Scalar>;
}

/// Default evaluator for integer arithmetic in the field
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExpressionEvaluator;

impl ExpressionEvaluator for FieldExpressionEvaluator {
    fn evaluate(
        &self,
        expression: &str,
        field: &ScalarField,
        bindings: &SecretBindings,
    ) -> EngineResult<Scalar> {
        let tokens = lex(expression)?;
        let mut parser = Parser {
            expression,
            tokens: tokens.into_iter().peekable(),
            field,
            bindings,
        };

        let value = parser.expr()?;
        match parser.tokens.next() {
            None => Ok(value),
            Some(token) => Err(parser.error(format!("unexpected {}", token.describe()))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Number(BigUint),
    Ident(String),
    Op(char),
    Open,
    Close,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(n) => format!("number {}", n),
            Token::Ident(name) => format!("identifier '{}'", name),
            Token::Op(op) => format!("operator '{}'", op),
            Token::Open => "'('".to_string(),
            Token::Close => "')'".to_string(),
        }
    }
}

fn lex(expression: &str) -> EngineResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars: Peekable<Chars<'_>> = expression.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c.is_ascii_digit() {
            let mut digits = String::new();
            while let Some(&d) = chars.peek().filter(|d| d.is_ascii_digit()) {
                digits.push(d);
                chars.next();
            }
            let value = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| EngineError::Expression {
                expression: expression.to_string(),
                reason: format!("invalid number {}", digits),
            })?;
            tokens.push(Token::Number(value));
        } else if c.is_alphabetic() || c == '_' {
            let mut name = String::new();
            while let Some(&d) = chars.peek().filter(|d| d.is_alphanumeric() || **d == '_') {
                name.push(d);
                chars.next();
            }
            tokens.push(Token::Ident(name));
        } else {
            let token = match c {
                '+' | '-' | '*' | '/' | '^' => Token::Op(c),
                '(' => Token::Open,
                ')' => Token::Close,
                _ => {
                    return Err(EngineError::Expression {
                        expression: expression.to_string(),
                        reason: format!("unexpected character '{}'", c),
                    })
                }
            };
            tokens.push(token);
            chars.next();
        }
    }

    Ok(tokens)
}

struct Parser<'a> {
    expression: &'a str,
    tokens: Peekable<std::vec::IntoIter<Token>>,
    field: &'a ScalarField,
    bindings: &'a SecretBindings,
}

impl<'a> Parser<'a> {
    fn error(&self, reason: String) -> EngineError {
        EngineError::Expression {
            expression: self.expression.to_string(),
            reason,
        }
    }

    fn eat_op(&mut self, ops: &[char]) -> Option<char> {
        match self.tokens.peek() {
            Some(Token::Op(op)) if ops.contains(op) => {
                let op = *op;
                self.tokens.next();
                Some(op)
            }
            _ => None,
        }
    }

    fn expr(&mut self) -> EngineResult<Scalar> {
        let mut value = self.term()?;
        while let Some(op) = self.eat_op(&['+', '-']) {
            let rhs = self.term()?;
            value = match op {
                '+' => self.field.add(&value, &rhs),
                _ => self.field.sub(&value, &rhs),
            };
        }
        Ok(value)
    }

    fn term(&mut self) -> EngineResult<Scalar> {
        let mut value = self.unary()?;
        while let Some(op) = self.eat_op(&['*', '/']) {
            let rhs = self.unary()?;
            value = match op {
                '*' => self.field.mul(&value, &rhs),
                _ => {
                    let inverse = self
                        .field
                        .inverse(&rhs)
                        .map_err(|_| self.error("division by zero".to_string()))?;
                    self.field.mul(&value, &inverse)
                }
            };
        }
        Ok(value)
    }

    fn unary(&mut self) -> EngineResult<Scalar> {
        if self.eat_op(&['-']).is_some() {
            let value = self.unary()?;
            return Ok(self.field.neg(&value));
        }
        self.power()
    }

    fn power(&mut self) -> EngineResult<Scalar> {
        let base = self.atom()?;
        if self.eat_op(&['^']).is_none() {
            return Ok(base);
        }

        let negative = self.eat_op(&['-']).is_some();
        let exponent = match self.tokens.next() {
            Some(Token::Number(n)) => n,
            Some(token) => {
                return Err(self.error(format!(
                    "exponent must be an integer literal, found {}",
                    token.describe()
                )))
            }
            None => return Err(self.error("missing exponent".to_string())),
        };

        if !negative {
            return Ok(self.field.pow(&base, &exponent));
        }
        let inverse = self
            .field
            .inverse(&base)
            .map_err(|_| self.error("zero raised to a negative power".to_string()))?;
        Ok(self.field.pow(&inverse, &exponent))
    }

    fn atom(&mut self) -> EngineResult<Scalar> {
        match self.tokens.next() {
            Some(Token::Number(n)) => Ok(self.field.reduce(&n)),
            Some(Token::Ident(name)) => Ok(self.bindings.get(&name)?.secret.clone()),
            Some(Token::Open) => {
                let value = self.expr()?;
                match self.tokens.next() {
                    Some(Token::Close) => Ok(value),
                    _ => Err(self.error("missing ')'".to_string())),
                }
            }
            Some(token) => Err(self.error(format!("unexpected {}", token.describe()))),
            None => Err(self.error("unexpected end of expression".to_string())),
        }
    }
}
