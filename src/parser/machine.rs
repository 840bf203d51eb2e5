//! CSV state machine with strict quoting rules
//!
//! Consumes the full character sequence in one pass and materializes the
//! complete row table. Quoting follows RFC 4180: delimiters and newlines
//! are literal inside a quoted value and a doubled quote inside one stands
//! for a single literal quote. A quote inside an already-started unquoted
//! value, or any character directly after a closing quote, aborts the
//! parse. Lines whose first character is `#` contribute no record.

use crate::error::{CsvError, Result};
use crate::parser::classify::{Classifier, Token};

/// Parser state, exactly one active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Between fields or records; nothing buffered for the current field.
    OutsideValue,
    /// Accumulating an unquoted field.
    InsideValue,
    /// Accumulating inside an open quote.
    InsideQuotedValue,
    /// Just saw a quote inside a quoted value; the next character decides
    /// whether it closed the field or escaped a literal quote.
    Quote,
    /// Skipping a line that started with the comment marker.
    Comment,
}

/// CSV parser that turns a character sequence into rows of fields.
///
/// A parser parses once: [`parse`](CsvParser::parse) consumes the machine
/// together with its buffers.
///
/// # Examples
///
/// ```
/// use csvstream::CsvParser;
///
/// let rows = CsvParser::new(',').parse("1997,Ford,E350\n".chars()).unwrap();
/// assert_eq!(rows, vec![vec!["1997", "Ford", "E350"]]);
/// ```
pub struct CsvParser {
    classifier: Classifier,
    state: State,
    field: String,
    record: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvParser {
    /// Create a parser for the given delimiter.
    pub fn new(delimiter: char) -> Self {
        CsvParser {
            classifier: Classifier::new(delimiter),
            state: State::OutsideValue,
            field: String::new(),
            record: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Consume a character sequence and return the complete row table.
    ///
    /// Fails on malformed quoting; no partial table is returned.
    pub fn parse(mut self, input: impl IntoIterator<Item = char>) -> Result<Vec<Vec<String>>> {
        for ch in input {
            self.step(ch)?;
        }
        Ok(self.finish())
    }

    /// Apply one transition for the next character.
    fn step(&mut self, ch: char) -> Result<()> {
        match (self.classifier.classify(ch), self.state) {
            (Token::Character, State::OutsideValue) => {
                self.state = State::InsideValue;
                self.field.push(ch);
            }
            (Token::Character, State::InsideValue | State::InsideQuotedValue) => {
                self.field.push(ch);
            }
            (Token::Character, State::Quote) => {
                return Err(CsvError::CharacterAfterQuote(ch));
            }
            (Token::Character, State::Comment) => {}

            (Token::Delimiter, State::OutsideValue | State::InsideValue | State::Quote) => {
                self.finalize_field();
                self.state = State::OutsideValue;
            }
            (Token::Delimiter, State::InsideQuotedValue) => {
                self.field.push(ch);
            }
            (Token::Delimiter, State::Comment) => {}

            (Token::Newline, State::OutsideValue | State::InsideValue | State::Quote) => {
                self.finalize_field();
                self.finalize_record();
                self.state = State::OutsideValue;
            }
            (Token::Newline, State::InsideQuotedValue) => {
                self.field.push(ch);
            }
            (Token::Newline, State::Comment) => {
                // The skipped line emits nothing.
                self.state = State::OutsideValue;
            }

            (Token::CarriageReturn, _) => {}

            (Token::Quote, State::OutsideValue) => {
                self.state = State::InsideQuotedValue;
            }
            (Token::Quote, State::InsideValue) => {
                return Err(CsvError::QuoteInUnquotedValue(self.field.clone()));
            }
            (Token::Quote, State::InsideQuotedValue) => {
                self.state = State::Quote;
            }
            (Token::Quote, State::Quote) => {
                // Doubled quote: the previous one was an escape.
                self.field.push(ch);
                self.state = State::InsideQuotedValue;
            }
            (Token::Quote, State::Comment) => {}

            (Token::CommentStart, State::OutsideValue) => {
                // `#` opens a comment only at the start of a logical line.
                // A preceding delimiter always finalizes a field, so an
                // empty record means no field has been produced on this
                // line yet.
                if self.record.is_empty() {
                    self.state = State::Comment;
                } else {
                    self.state = State::InsideValue;
                    self.field.push(ch);
                }
            }
            (Token::CommentStart, State::InsideValue | State::InsideQuotedValue) => {
                self.field.push(ch);
            }
            (Token::CommentStart, State::Quote) => {
                return Err(CsvError::CharacterAfterQuote(ch));
            }
            (Token::CommentStart, State::Comment) => {}
        }
        Ok(())
    }

    /// Flush a trailing record when the input ends without a newline.
    fn finish(mut self) -> Vec<Vec<String>> {
        if !self.field.is_empty() || !self.record.is_empty() {
            self.finalize_field();
            self.finalize_record();
        }
        self.rows
    }

    /// Move the field buffer into the current record.
    fn finalize_field(&mut self) {
        self.record.push(std::mem::take(&mut self.field));
    }

    /// Move the current record into the row table.
    fn finalize_record(&mut self) {
        self.rows.push(std::mem::take(&mut self.record));
    }
}
