//! Record tokenizer shared by scripts and proof transcripts
//!
//! Text is a flat stream of records. Fields are separated by `,`, a record
//! ends at `;`, and `@` makes the following character literal. Fields are
//! trimmed of surrounding whitespace.

use crate::{ScriptError, ScriptResult};

pub const FIELD_SEPARATOR: char = ',';
pub const RECORD_TERMINATOR: char = ';';
pub const ESCAPE_CHAR: char = '@';

/// One `;`-terminated record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based position of the record in its source text
    pub number: usize,
    pub fields: Vec<String>,
}

impl Record {
    /// The leading field
    pub fn opcode(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or("")
    }

    /// Every field after the opcode
    pub fn operands(&self) -> &[String] {
        self.fields.get(1..).unwrap_or(&[])
    }

    fn is_blank(&self) -> bool {
        self.fields.iter().all(String::is_empty)
    }
}

/// Iterator over the records of a text
///
/// Blank records are skipped. After the first error the iterator is fused.
pub struct Tokenizer<'a> {
    source: &'a str,
    position: usize,
    record: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            record: 0,
        }
    }

    /// Text not consumed yet
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    fn read_record(&mut self) -> ScriptResult<Record> {
        self.record += 1;

        let mut fields = Vec::new();
        let mut field = String::new();
        let mut chars = self.remaining().char_indices();

        while let Some((offset, c)) = chars.next() {
            match c {
                ESCAPE_CHAR => match chars.next() {
                    Some((_, escaped)) => field.push(escaped),
                    None => break,
                },
                FIELD_SEPARATOR => fields.push(take_field(&mut field)),
                RECORD_TERMINATOR => {
                    fields.push(take_field(&mut field));
                    self.position += offset + c.len_utf8();
                    return Ok(Record {
                        number: self.record,
                        fields,
                    });
                }
                _ => field.push(c),
            }
        }

        Err(ScriptError::UnterminatedRecord {
            record: self.record,
        })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = ScriptResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.remaining().trim().is_empty() {
                self.position = self.source.len();
                return None;
            }

            match self.read_record() {
                Ok(record) if record.is_blank() => continue,
                Ok(record) => return Some(Ok(record)),
                Err(e) => {
                    self.position = self.source.len();
                    return Some(Err(e));
                }
            }
        }
    }
}

fn take_field(field: &mut String) -> String {
    let trimmed = field.trim().to_string();
    field.clear();
    trimmed
}

/// Escape `@`, `,` and `;` so `field` reads back as a single field
pub fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for c in field.chars() {
        if matches!(c, ESCAPE_CHAR | FIELD_SEPARATOR | RECORD_TERMINATOR) {
            escaped.push(ESCAPE_CHAR);
        }
        escaped.push(c);
    }
    escaped
}

/// Render fields as one terminated record, without a trailing newline
pub fn format_record<S: AsRef<str>>(fields: &[S]) -> String {
    let escaped: Vec<String> = fields.iter().map(|f| escape_field(f.as_ref())).collect();
    format!("{}{}", escaped.join(","), RECORD_TERMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(text: &str) -> Vec<Vec<String>> {
        Tokenizer::new(text)
            .map(|record| record.unwrap().fields)
            .collect()
    }

    #[test]
    fn test_basic_records() {
        let records = fields("input,a; input,b;\nsum,c,1,a,1,b;");
        assert_eq!(
            records,
            vec![
                vec!["input", "a"],
                vec!["input", "b"],
                vec!["sum", "c", "1", "a", "1", "b"],
            ]
        );
    }

    #[test]
    fn test_escape_makes_separators_literal() {
        let records = fields("commit,x,f@(a@,b@)@;@@;");
        assert_eq!(records, vec![vec!["commit", "x", "f(a,b);@"]]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let records = fields("  equal ,  c ,\t8 ;");
        assert_eq!(records, vec![vec!["equal", "c", "8"]]);
    }

    #[test]
    fn test_blank_records_are_skipped() {
        let records = fields(";\n ; log;  ;\n");
        assert_eq!(records, vec![vec!["log"]]);
    }

    #[test]
    fn test_empty_input() {
        assert!(Tokenizer::new("").next().is_none());
        assert!(Tokenizer::new("  \n\t").next().is_none());
    }

    #[test]
    fn test_unterminated_record() {
        let mut tokenizer = Tokenizer::new("input,a; input,b");
        assert_eq!(tokenizer.next().unwrap().unwrap().number, 1);
        assert_eq!(
            tokenizer.next().unwrap(),
            Err(ScriptError::UnterminatedRecord { record: 2 })
        );
        assert!(tokenizer.next().is_none());
    }

    #[test]
    fn test_dangling_escape_is_unterminated() {
        let mut tokenizer = Tokenizer::new("input,a@");
        assert_eq!(
            tokenizer.next().unwrap(),
            Err(ScriptError::UnterminatedRecord { record: 1 })
        );
    }

    #[test]
    fn test_record_numbers_count_blank_records() {
        let numbers: Vec<usize> = Tokenizer::new("log;;log;")
            .map(|r| r.unwrap().number)
            .collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_remaining() {
        let mut tokenizer = Tokenizer::new("log; rest");
        tokenizer.next();
        assert_eq!(tokenizer.remaining(), " rest");
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("a,b;c@d"), "a@,b@;c@@d");
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(format_record(&["sum", "x,y"]), "sum,x@,y;");
    }
}
