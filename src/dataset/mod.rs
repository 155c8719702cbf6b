//! In-memory tabular data with CSV and JSON loading/saving.
//!
//! The analysis code operates on [`Table`], a plain header/rows structure
//! with string cells. Storage format only matters here; everything else in
//! the crate is agnostic to where the rows came from.

use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur loading, saving or reshaping tabular data.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Column \"{name}\" has {got} values but the table has {expected} rows")]
    ColumnLengthMismatch {
        name: String,
        got: usize,
        expected: usize,
    },

    #[error("Expected a JSON array of flat objects")]
    InvalidJsonShape,
}

/// A row-oriented table with named columns and string cells.
///
/// Rows may be shorter than the header (ragged CSV input); missing cells
/// read as `None` and are written back out as empty fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column, if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at (row, column index). `None` for out-of-range rows and for
    /// cells a ragged row does not have.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }

    pub fn push_row<S: Into<String>>(&mut self, row: Vec<S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Append a column. The number of values must match the row count.
    pub fn push_column<S: Into<String>>(
        &mut self,
        name: &str,
        values: Vec<S>,
    ) -> Result<(), DatasetError> {
        if values.len() != self.rows.len() {
            return Err(DatasetError::ColumnLengthMismatch {
                name: name.to_string(),
                got: values.len(),
                expected: self.rows.len(),
            });
        }
        let width = self.headers.len();
        self.headers.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            // Pad ragged rows so the new column lands in its own slot.
            row.resize(width, String::new());
            row.push(value.into());
        }
        Ok(())
    }

    /// All values of a named column, missing cells as empty strings.
    pub fn column_values(&self, name: &str) -> Result<Vec<&str>, DatasetError> {
        let col = self
            .column(name)
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))?;
        Ok(self
            .rows
            .iter()
            .map(|r| r.get(col).map(String::as_str).unwrap_or(""))
            .collect())
    }

    /// Read a CSV file with a header row. Ragged records are accepted.
    pub fn load_csv(path: &Path) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)?;
        let headers = reader.headers()?.iter().map(String::from).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(String::from).collect());
        }
        Ok(Self { headers, rows })
    }

    /// Write the table as CSV with a header row. Short rows are padded with
    /// empty fields so every record has the full width.
    pub fn save_csv(&self, path: &Path) -> Result<(), DatasetError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        let width = self.headers.len();
        for row in &self.rows {
            let mut record = row.clone();
            record.resize(width, String::new());
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read a JSON array of flat objects. Column order follows first
    /// appearance of each key; non-string scalars are stringified, nulls
    /// become empty cells.
    pub fn load_json(path: &Path) -> Result<Self, DatasetError> {
        let reader = BufReader::new(File::open(path)?);
        let value: Value = serde_json::from_reader(reader)?;
        let Value::Array(items) = value else {
            return Err(DatasetError::InvalidJsonShape);
        };

        let mut headers: Vec<String> = Vec::new();
        let mut objects = Vec::with_capacity(items.len());
        for item in items {
            let Value::Object(object) = item else {
                return Err(DatasetError::InvalidJsonShape);
            };
            for key in object.keys() {
                if !headers.iter().any(|h| h == key) {
                    headers.push(key.clone());
                }
            }
            objects.push(object);
        }

        let rows = objects
            .into_iter()
            .map(|object| {
                headers
                    .iter()
                    .map(|key| match object.get(key) {
                        None | Some(Value::Null) => String::new(),
                        Some(Value::String(s)) => s.clone(),
                        Some(other) => other.to_string(),
                    })
                    .collect()
            })
            .collect();

        Ok(Self { headers, rows })
    }

    /// Write the table as a JSON array of objects, all values as strings.
    pub fn save_json(&self, path: &Path) -> Result<(), DatasetError> {
        let items: Vec<Value> = self
            .rows
            .iter()
            .map(|row| {
                let object = self
                    .headers
                    .iter()
                    .enumerate()
                    .map(|(col, header)| {
                        let cell = row.get(col).cloned().unwrap_or_default();
                        (header.clone(), Value::String(cell))
                    })
                    .collect();
                Value::Object(object)
            })
            .collect();
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &items)?;
        Ok(())
    }
}
