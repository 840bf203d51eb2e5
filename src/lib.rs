//! # csvstream
//!
//! Delimited-text parsing with strict quoting rules, comment lines and
//! header-based row mapping.
//!
//! The parser is a character-level state machine: quoted fields may embed
//! delimiters, newlines and doubled quotes; `\r` is elided everywhere;
//! lines starting with `#` are skipped; a trailing newline is optional.
//! Malformed quoting aborts the parse — there is no partial result.
//!
//! # Quick Start
//!
//! ```
//! use csvstream::CsvReader;
//!
//! let mut reader = CsvReader::from_string(
//!     "Year,Make,Model\n1997,Ford,E350\n2000,Mercury,Cougar\n",
//! );
//!
//! // Raw rows.
//! let rows = reader.rows().unwrap();
//! assert_eq!(rows[1], vec!["1997", "Ford", "E350"]);
//!
//! // Or mapped onto the header row.
//! let mapped = reader.rows_by_header().unwrap();
//! assert_eq!(mapped[1]["Make"], "Mercury");
//! ```
//!
//! Input can also be a byte stream (with a selectable [`Encoding`]) or a
//! file via [`CsvReader::open`]. The input is parsed exactly once, on the
//! first row access, and the result is cached for the reader's lifetime.

pub mod encoding;
pub mod error;
pub mod header;
pub mod parser;
pub mod reader;
pub mod source;

pub use encoding::Encoding;
pub use error::{CsvError, Result};
pub use parser::CsvParser;
pub use reader::CsvReader;
pub use source::CodepointSource;
