//! # Statement Script
//!
//! Parser for the statement language driving the prover and verifier.
//! A script is a sequence of `;`-terminated records of `,`-separated fields:
//!
//! ```text
//! input,a;
//! input,b;
//! sum,c,1,a,1,b;
//! equal,c,8;
//! ```
//!
//! Each record decodes once into a typed [`ScriptCommand`]. The same
//! [`Tokenizer`] also reads proof transcripts.

pub mod command;
pub mod errors;
pub mod script;
pub mod tokenizer;
pub mod weight;


pub use command::{Opcode, ScriptCommand};
pub use errors::*;
pub use script::Script;
pub use tokenizer::{escape_field, format_record, Record, Tokenizer};
pub use weight::Weight;
