//! Move sheet CSV reader.
//!
//! Rows are addressed by header label rather than by position, since columns
//! get added to and reordered in the spreadsheet between exports.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::rc::Rc;

use csv::StringRecord;

use crate::error::ConvertError;

/// A single data row, keyed by header label.
#[derive(Debug, Clone)]
pub struct Row {
    headers: Rc<StringRecord>,
    record: StringRecord,
}

impl Row {
    /// Value of the column with this header label.
    ///
    /// Returns `None` when the header has no such column or the row is too
    /// short to reach it. With repeated labels the rightmost column wins.
    pub fn get(&self, label: &str) -> Option<&str> {
        let idx = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, h)| *h == label)
            .map(|(i, _)| i)
            .last()?;
        self.record.get(idx)
    }

    /// Build a row from `(label, value)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let headers: StringRecord = pairs.iter().map(|(h, _)| *h).collect();
        let record: StringRecord = pairs.iter().map(|(_, v)| *v).collect();
        Self {
            headers: Rc::new(headers),
            record,
        }
    }
}

/// Lazy iterator over the data rows of a move sheet.
///
/// The header row is read up front; data rows are decoded one at a time, in
/// file order. A row that fails to decode yields an error.
pub struct RowReader<R> {
    origin: String,
    headers: Rc<StringRecord>,
    records: csv::StringRecordsIntoIter<R>,
}

impl RowReader<File> {
    /// Open a CSV file for reading.
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        let file = File::open(path).map_err(|e| ConvertError::io(path.display().to_string(), e))?;
        Self::with_origin(file, path.display().to_string())
    }
}

impl<R: Read> RowReader<R> {
    /// Read CSV content from any reader.
    pub fn from_reader(reader: R) -> Result<Self, ConvertError> {
        Self::with_origin(reader, "<input>".to_string())
    }

    fn with_origin(reader: R, origin: String) -> Result<Self, ConvertError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| ConvertError::csv(origin.clone(), e))?
            .clone();

        Ok(Self {
            origin,
            headers: Rc::new(headers),
            records: reader.into_records(),
        })
    }

    /// Header labels in column order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }

    /// Whether the header row has a column with this label.
    pub fn has_column(&self, label: &str) -> bool {
        self.headers.iter().any(|h| h == label)
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<Row, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.records.next()?;
        Some(
            result
                .map(|record| Row {
                    headers: Rc::clone(&self.headers),
                    record,
                })
                .map_err(|e| ConvertError::csv(self.origin.clone(), e)),
        )
    }
}

#[cfg(test)]
#[path = "tests/rows_tests.rs"]
mod tests;
