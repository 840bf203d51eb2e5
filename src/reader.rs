//! CSV reading with memoized parsing and header-based row mapping
//!
//! [`CsvReader`] wraps an input source, parses it exactly once on the first
//! row access, and serves every later access from the cached row table.

use crate::encoding::Encoding;
use crate::error::{CsvError, Result};
use crate::header;
use crate::parser::CsvParser;
use crate::source::CodepointSource;
use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// CSV reader over a text payload, byte stream or file.
///
/// The whole input is consumed and materialized on the first call to
/// [`rows`](CsvReader::rows); the result is cached for the lifetime of the
/// reader, and the underlying source is released as soon as that first
/// parse finishes, successfully or not. A reader whose parse failed stays
/// failed: later calls report [`CsvError::InvalidState`] instead of
/// rescanning.
///
/// # Examples
///
/// ```
/// use csvstream::CsvReader;
///
/// let mut reader = CsvReader::from_string("1997,Ford,E350\n");
/// let rows = reader.rows().unwrap();
/// assert_eq!(rows, &[vec!["1997", "Ford", "E350"]]);
/// ```
///
/// # With Headers
///
/// ```
/// use csvstream::CsvReader;
///
/// let mut reader = CsvReader::from_string("Year,Make\n1997,Ford\n");
/// let mapped = reader.rows_by_header().unwrap();
/// assert_eq!(mapped[0]["Year"], "1997");
/// assert_eq!(mapped[0]["Make"], "Ford");
/// ```
pub struct CsvReader {
    source: Option<CodepointSource>,
    delimiter: char,
    rows: Option<Vec<Vec<String>>>,
}

impl CsvReader {
    /// Create a reader over an in-memory text payload.
    pub fn from_string(input: impl Into<String>) -> Self {
        CsvReader {
            source: Some(CodepointSource::from_string(input)),
            delimiter: ',',
            rows: None,
        }
    }

    /// Create a reader over a byte stream, decoded as UTF-8.
    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Self::from_reader_with_encoding(reader, Encoding::Utf8)
    }

    /// Create a reader over a byte stream decoded with the given encoding.
    pub fn from_reader_with_encoding(reader: impl Read + 'static, encoding: Encoding) -> Self {
        CsvReader {
            source: Some(CodepointSource::from_reader(Box::new(reader), encoding)),
            delimiter: ',',
            rows: None,
        }
    }

    /// Open a CSV file, decoded as UTF-8.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvstream::CsvReader;
    ///
    /// let mut reader = CsvReader::open("data.csv").unwrap();
    /// for row in reader.rows().unwrap() {
    ///     println!("{:?}", row);
    /// }
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .map_err(|e| CsvError::ReadError(format!("failed to open CSV file: {}", e)))?;
        Ok(Self::from_reader(BufReader::new(file)))
    }

    /// Set a custom delimiter (builder pattern, default `,`).
    ///
    /// # Examples
    ///
    /// ```
    /// use csvstream::CsvReader;
    ///
    /// let mut reader = CsvReader::from_string("a;b\n").delimiter(';');
    /// assert_eq!(reader.rows().unwrap(), &[vec!["a", "b"]]);
    /// ```
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Return all rows, parsing the input on the first call.
    ///
    /// Later calls return the cached table without touching the source
    /// again. The `&mut self` receiver is what makes the one-time
    /// initialization safe: a shared reader has to be wrapped in a lock by
    /// the caller, so no second pass and no half-built cache can ever be
    /// observed.
    pub fn rows(&mut self) -> Result<&[Vec<String>]> {
        match &mut self.rows {
            Some(rows) => Ok(rows),
            cache => {
                let source = self.source.take().ok_or_else(|| {
                    CsvError::InvalidState(
                        "parse already failed; construct a fresh reader to retry".to_string(),
                    )
                })?;
                // The source is consumed here, so the underlying reader is
                // released whether or not parsing succeeds.
                let text = source.read_all()?;
                let table = CsvParser::new(self.delimiter).parse(text.chars())?;
                Ok(cache.insert(table))
            }
        }
    }

    /// Return all rows after the first, mapped onto the first row's names.
    ///
    /// Parses via [`rows`](CsvReader::rows), so the same memoization
    /// applies. Fails with [`CsvError::NoData`] on an empty table and with
    /// [`CsvError::MissingField`] when a data row is shorter than the
    /// header row.
    pub fn rows_by_header(&mut self) -> Result<Vec<IndexMap<String, String>>> {
        header::project(self.rows()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_rows_from_string() {
        let mut reader = CsvReader::from_string("1997,Ford,E350\n");
        let rows = reader.rows().unwrap();
        assert_eq!(rows, &[vec!["1997", "Ford", "E350"]]);
    }

    #[test]
    fn test_rows_from_byte_stream() {
        let bytes: &[u8] = b"1997,Ford,E350\n";
        let mut reader = CsvReader::from_reader(bytes);
        assert_eq!(reader.rows().unwrap(), &[vec!["1997", "Ford", "E350"]]);
    }

    #[test]
    fn test_rows_from_latin1_stream() {
        let bytes = io::Cursor::new(vec![b'n', 0xE9, b',', b'a', b'\n']);
        let mut reader = CsvReader::from_reader_with_encoding(bytes, Encoding::Latin1);
        assert_eq!(reader.rows().unwrap(), &[vec!["né", "a"]]);
    }

    #[test]
    fn test_invalid_utf8_stream_fails() {
        let bytes = io::Cursor::new(vec![0xFF, 0xFE]);
        let mut reader = CsvReader::from_reader(bytes);
        assert!(matches!(reader.rows(), Err(CsvError::ReadError(_))));
    }

    #[test]
    fn test_rows_are_memoized() {
        let mut reader = CsvReader::from_string("a,b\n");
        let first = reader.rows().unwrap().to_vec();
        // The source is consumed by the first call, so an identical second
        // answer proves the cache is served without rescanning.
        let second = reader.rows().unwrap().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_failed_parse_poisons_the_reader() {
        let mut reader = CsvReader::from_string("a\"b\n");
        assert!(matches!(
            reader.rows(),
            Err(CsvError::QuoteInUnquotedValue(_))
        ));
        assert!(matches!(reader.rows(), Err(CsvError::InvalidState(_))));
    }

    #[test]
    fn test_custom_delimiter() {
        let mut reader = CsvReader::from_string("1997;Ford;E350\n").delimiter(';');
        assert_eq!(reader.rows().unwrap(), &[vec!["1997", "Ford", "E350"]]);
    }

    #[test]
    fn test_rows_by_header() {
        let mut reader = CsvReader::from_string("Year,Make\n1997,Ford\n2000,Mercury\n");
        let mapped = reader.rows_by_header().unwrap();

        assert_eq!(mapped.len(), 2);
        assert_eq!(mapped[0]["Year"], "1997");
        assert_eq!(mapped[1]["Make"], "Mercury");
    }

    #[test]
    fn test_rows_by_header_on_empty_input_fails() {
        let mut reader = CsvReader::from_string("");
        assert!(matches!(reader.rows_by_header(), Err(CsvError::NoData)));
    }

    #[test]
    fn test_rows_by_header_leaves_row_table_intact() {
        let mut reader = CsvReader::from_string("h\n1\n");
        reader.rows_by_header().unwrap();
        // Projection reads the cache; it must not consume the header row.
        assert_eq!(reader.rows().unwrap(), &[vec!["h"], vec!["1"]]);
    }

    #[test]
    fn test_open_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "ID,Name\n1,Alice\n2,Bob\n").unwrap();

        let mut reader = CsvReader::open(&path).unwrap();
        let rows = reader.rows().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["1", "Alice"]);
    }

    #[test]
    fn test_open_missing_file_fails() {
        let result = CsvReader::open("definitely/not/here.csv");
        assert!(matches!(result, Err(CsvError::ReadError(_))));
    }
}
