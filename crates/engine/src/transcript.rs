//! Text codec of the proof transcript
//!
//! The prover appends one record per emitted artifact; the verifier reads
//! them back strictly in order. Each record is a line of hex fields:
//!
//! ```text
//! 5a1f...;
//! 9c02...,0b7e...,41aa...;
//! ```

use crate::{EngineError, EngineResult};
use pedersen_core::{Group, PedersenContext};
use statement_script::{format_record, Opcode, Tokenizer};
use std::fmt;
use std::str::FromStr;

/// Ordered records exchanged between prover and verifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProofTranscript {
    records: Vec<Vec<String>>,
}

impl ProofTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Build a transcript from already split records
    pub fn from_records(records: Vec<Vec<String>>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn parse(text: &str) -> EngineResult<Self> {
        let records = Tokenizer::new(text)
            .map(|record| record.map(|r| r.fields))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_records(records))
    }

    pub fn reader(&self) -> TranscriptReader<'_> {
        TranscriptReader::new(self)
    }
}

impl fmt::Display for ProofTranscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", format_record(record))?;
        }
        Ok(())
    }
}

impl FromStr for ProofTranscript {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        Self::parse(s)
    }
}

/// Append-only writer used by the prover
#[derive(Debug, Default)]
pub struct TranscriptWriter {
    transcript: ProofTranscript,
}

impl TranscriptWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fields: Vec<String>) {
        self.transcript.records.push(fields);
    }

    /// Append a single-element record
    pub fn push_element<G: Group>(&mut self, ctx: &PedersenContext<G>, element: &G::Element) {
        self.push(vec![ctx.group().encode_hex(element)]);
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn finish(self) -> ProofTranscript {
        self.transcript
    }
}

/// Forward-only reader used by the verifier
#[derive(Debug)]
pub struct TranscriptReader<'a> {
    records: &'a [Vec<String>],
    position: usize,
}

impl<'a> TranscriptReader<'a> {
    pub fn new(transcript: &'a ProofTranscript) -> Self {
        Self {
            records: transcript.records(),
            position: 0,
        }
    }

    /// Take the next record, which must have exactly `field_count` fields
    pub fn next_record(&mut self, opcode: Opcode, field_count: usize) -> EngineResult<&'a [String]> {
        let number = self.position + 1;
        let record = self
            .records
            .get(self.position)
            .ok_or(EngineError::TranscriptUnderrun { record: number, opcode })?;

        if record.len() != field_count {
            return Err(EngineError::MalformedRecord {
                record: number,
                opcode,
                expected: field_count,
                actual: record.len(),
            });
        }

        self.position += 1;
        Ok(record)
    }

    pub fn remaining(&self) -> usize {
        self.records.len() - self.position
    }

    /// Fail if any record was left unread
    pub fn finish(&self) -> EngineResult<()> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(EngineError::TranscriptOverrun { remaining }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProofTranscript {
        let mut writer = TranscriptWriter::new();
        writer.push(vec!["aa".into()]);
        writer.push(vec!["bb".into(), "cc".into(), "dd".into()]);
        writer.finish()
    }

    #[test]
    fn test_text_roundtrip() {
        let transcript = sample();
        let text = transcript.to_text();
        assert_eq!(text, "aa;\nbb,cc,dd;\n");
        assert_eq!(ProofTranscript::parse(&text).unwrap(), transcript);
    }

    #[test]
    fn test_reader_in_order() {
        let transcript = sample();
        let mut reader = transcript.reader();

        assert_eq!(reader.next_record(Opcode::Input, 1).unwrap(), &["aa".to_string()]);
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.next_record(Opcode::Equal, 3).unwrap().len(), 3);
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_underrun() {
        let transcript = sample();
        let mut reader = transcript.reader();
        reader.next_record(Opcode::Input, 1).unwrap();
        reader.next_record(Opcode::Equal, 3).unwrap();

        assert!(matches!(
            reader.next_record(Opcode::Same, 1),
            Err(EngineError::TranscriptUnderrun {
                record: 3,
                opcode: Opcode::Same
            })
        ));
    }

    #[test]
    fn test_overrun() {
        let transcript = sample();
        let mut reader = transcript.reader();
        reader.next_record(Opcode::Input, 1).unwrap();

        assert!(matches!(
            reader.finish(),
            Err(EngineError::TranscriptOverrun { remaining: 1 })
        ));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let transcript = sample();
        let mut reader = transcript.reader();

        assert!(matches!(
            reader.next_record(Opcode::Equal, 3),
            Err(EngineError::MalformedRecord {
                record: 1,
                expected: 3,
                actual: 1,
                ..
            })
        ));
        // A rejected record is not consumed
        assert_eq!(reader.remaining(), 2);
    }

    #[test]
    fn test_unterminated_text_fails() {
        assert!(matches!(
            ProofTranscript::parse("aa;\nbb"),
            Err(EngineError::Script(_))
        ));
    }
}
