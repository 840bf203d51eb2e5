//! Projects a row table onto its header row

use crate::error::{CsvError, Result};
use indexmap::IndexMap;

/// Map every row after the first onto the first row's field names.
///
/// The header row supplies the ordered list of names; each data row is
/// zipped against it by position. A data row shorter than the header is a
/// [`CsvError::MissingField`] error; fields beyond the header count are
/// ignored.
///
/// # Examples
///
/// ```
/// use csvstream::header::project;
///
/// let rows = vec![
///     vec!["Year".to_string(), "Make".to_string()],
///     vec!["1997".to_string(), "Ford".to_string()],
/// ];
/// let mapped = project(&rows).unwrap();
/// assert_eq!(mapped[0]["Year"], "1997");
/// assert_eq!(mapped[0]["Make"], "Ford");
/// ```
pub fn project(rows: &[Vec<String>]) -> Result<Vec<IndexMap<String, String>>> {
    let (headers, data) = rows.split_first().ok_or(CsvError::NoData)?;
    data.iter()
        .enumerate()
        .map(|(offset, row)| {
            headers
                .iter()
                .enumerate()
                .map(|(index, name)| {
                    let value = row.get(index).ok_or_else(|| CsvError::MissingField {
                        // The header is row 0 of the table.
                        row: offset + 1,
                        index,
                        column: name.clone(),
                    })?;
                    Ok((name.clone(), value.clone()))
                })
                .collect()
        })
        .collect()
}
