//! Input source that yields decoded text from a payload or byte stream
//!
//! The source owns its input for the duration of one parse. Reading is
//! consuming: the underlying reader is drained, decoded and released in a
//! single call, on both the success and the error path.

use crate::encoding::Encoding;
use crate::error::{CsvError, Result};
use std::io::Read;

enum Input {
    Text(String),
    Stream {
        reader: Box<dyn Read>,
        encoding: Encoding,
    },
}

/// Source of Unicode codepoints for the parser.
///
/// Wraps either an in-memory text payload or an owned byte stream plus the
/// encoding to decode it with.
pub struct CodepointSource {
    input: Input,
}

impl CodepointSource {
    /// Create a source over an in-memory text payload.
    pub fn from_string(text: impl Into<String>) -> Self {
        CodepointSource {
            input: Input::Text(text.into()),
        }
    }

    /// Create a source over an owned byte stream decoded with `encoding`.
    pub fn from_reader(reader: Box<dyn Read>, encoding: Encoding) -> Self {
        CodepointSource {
            input: Input::Stream { reader, encoding },
        }
    }

    /// Drain the input and return the decoded text.
    ///
    /// Consumes the source, so the underlying reader is dropped before this
    /// returns — whether reading succeeded or failed.
    pub fn read_all(self) -> Result<String> {
        match self.input {
            Input::Text(text) => Ok(text),
            Input::Stream {
                mut reader,
                encoding,
            } => {
                let mut bytes = Vec::new();
                reader
                    .read_to_end(&mut bytes)
                    .map_err(|e| CsvError::ReadError(format!("failed to read input: {}", e)))?;
                encoding.decode(bytes)
            }
        }
    }
}
