//! Delimited text loader using the csv crate.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::{Column, DataTable};
use crate::error::{Error, Result};

use super::options::LoadOptions;

const UTF8_BOM: char = '\u{feff}';

/// Delimited text loader.
///
/// Reads the header record and all data records up front; [`CsvLoader::load`]
/// then turns the raw cells into a typed [`DataTable`].
pub struct CsvLoader {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
    options: LoadOptions,
}

impl CsvLoader {
    /// Open a delimited file, picking the delimiter from its extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let options = LoadOptions::for_path(path.as_ref());
        Self::open_with_options(path, options)
    }

    /// Open a delimited file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Opening {}", path.display());
        let file = File::open(path)?;
        Self::from_reader_with_options(file, options)
    }

    /// Load from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, LoadOptions::default())
    }

    /// Load from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: LoadOptions) -> Result<Self> {
        Self::from_reader_with_options(data, options)
    }

    /// Load from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, LoadOptions::default())
    }

    /// Load from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(reader: R, options: LoadOptions) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .from_reader(reader);

        let mut rows = reader.records();
        let headers = match rows.next() {
            Some(record) => record?
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    if i == 0 {
                        name.trim_start_matches(UTF8_BOM).to_string()
                    } else {
                        name.to_string()
                    }
                })
                .collect::<Vec<_>>(),
            None => return Err(Error::EmptyInput),
        };

        let mut records = Vec::new();
        for record in rows {
            let record = record?;
            records.push(record.iter().map(str::to_string).collect());
        }

        let headers = if options.mangle_duplicate_headers {
            mangle_duplicates(headers)
        } else {
            headers
        };

        Ok(Self {
            headers,
            records,
            options,
        })
    }

    /// Header names as they will appear in the table.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data records read.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Options this loader was created with.
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Build the typed table, inferring each column's kind.
    pub fn load(&self) -> Result<DataTable> {
        let mut table = DataTable::new();

        for (index, name) in self.headers.iter().enumerate() {
            let cells: Vec<&str> = self
                .records
                .iter()
                .map(|record| record.get(index).map(String::as_str).unwrap_or(""))
                .collect();
            let column = Column::from_raw(name.clone(), &cells);
            log::debug!("Column '{}' inferred as {:?}", column.name, column.kind);
            table.add_column(column)?;
        }

        log::debug!(
            "Loaded table with {} rows and {} columns",
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }
}

/// Rename repeated header names to `name.1`, `name.2`, ... in order.
fn mangle_duplicates(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut result: Vec<String> = Vec::with_capacity(headers.len());

    for name in headers {
        let mut candidate = name.clone();
        while result.contains(&candidate) {
            let counter = seen.entry(name.clone()).or_insert(0);
            *counter += 1;
            candidate = format!("{}.{}", name, counter);
        }
        result.push(candidate);
    }

    result
}
