//! Character encodings for byte-stream input

use crate::error::{CsvError, Result};

/// Character encoding used to decode byte-stream input into text.
///
/// Only meaningful when a reader is constructed from raw bytes; string
/// input is already text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8, decoded strictly. Invalid byte sequences abort the parse
    /// instead of being replaced.
    #[default]
    Utf8,
    /// ISO 8859-1. Every byte maps to the codepoint of the same value,
    /// so decoding cannot fail.
    Latin1,
}

impl Encoding {
    /// Decode a complete byte payload into text.
    pub fn decode(&self, bytes: Vec<u8>) -> Result<String> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes)
                .map_err(|e| CsvError::ReadError(format!("invalid UTF-8 input: {}", e))),
            Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}
