//! Error types for CSV parsing and header projection

use thiserror::Error;

/// Errors that can occur while parsing CSV data or projecting rows onto
/// a header row.
#[derive(Error, Debug)]
pub enum CsvError {
    /// A quote character appeared inside an unquoted field that already
    /// has content. Carries the field accumulated so far.
    #[error("met quote inside unescaped value, field so far [{0}]")]
    QuoteInUnquotedValue(String),

    /// A character followed a field-closing quote without an intervening
    /// delimiter or newline.
    #[error("met character {0:?} after closing quote")]
    CharacterAfterQuote(char),

    /// Failed to read or decode the underlying input.
    #[error("read error: {0}")]
    ReadError(String),

    /// Header projection was requested on an empty row table.
    #[error("no rows to take header names from")]
    NoData,

    /// A data row is shorter than the header row.
    #[error("row {row} has no value for column {column:?} (index {index})")]
    MissingField {
        /// Index of the offending row in the row table (the header is row 0).
        row: usize,
        /// Positional index of the missing field.
        index: usize,
        /// Header name the missing field would have been mapped to.
        column: String,
    },

    /// The reader was used after a failed parse.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for CSV operations
pub type Result<T> = std::result::Result<T, CsvError>;
