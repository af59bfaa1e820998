//! CSV Data Loader Module
//! Handles CSV ingestion and header normalization using Polars.

use log::info;
use polars::prelude::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{cleaner, metrics};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("malformed CSV input: {0}")]
    MalformedInput(#[from] PolarsError),
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("no data loaded")]
    NoData,
}

/// Parse raw CSV bytes into an all-text DataFrame with trimmed headers.
/// Schema inference is disabled on purpose: every column starts textual and
/// the cleaner decides types once, after shorthand expansion.
pub fn read_raw_csv(bytes: &[u8]) -> Result<DataFrame, LoaderError> {
    let cursor = Cursor::new(bytes);
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(cursor)
        .finish()?;

    trim_headers(&mut df)?;
    Ok(df)
}

/// Strip surrounding whitespace from every header before any column lookup.
fn trim_headers(df: &mut DataFrame) -> PolarsResult<()> {
    let trimmed: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.trim().to_string())
        .collect();
    df.set_column_names(trimmed.iter().map(|s| s.as_str()))?;
    Ok(())
}

/// Full ingestion pipeline: parse, clean shorthand numerics, derive the
/// engagement column. Fails as a whole; no partial table escapes.
pub fn load_table(bytes: &[u8]) -> Result<DataFrame, LoaderError> {
    let raw = read_raw_csv(bytes)?;
    let cleaned = cleaner::clean_columns(raw)?;
    let table = metrics::with_engagement_rate(cleaned)?;
    Ok(table)
}

/// Owns the table for one session. Replaced wholesale on a new upload;
/// filters later subset rows but never mutate it.
pub struct DataLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load and fully process a CSV file. The previous table is discarded up
    /// front: a failed upload leaves no table behind, it requires a new one.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&DataFrame, LoaderError> {
        self.df = None;
        self.file_path = None;

        let bytes = std::fs::read(file_path)?;
        let df = load_table(&bytes)?;
        info!(
            "loaded {} rows, {} columns from {}",
            df.height(),
            df.width(),
            file_path.display()
        );

        self.file_path = Some(file_path.to_path_buf());
        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Load and fully process CSV bytes (uploads that never touch disk).
    pub fn load_csv_bytes(&mut self, bytes: &[u8]) -> Result<&DataFrame, LoaderError> {
        self.df = None;
        self.file_path = None;

        let df = load_table(bytes)?;
        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Get a reference to the loaded, derived table.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Get the number of rows in the table.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get file path of the current upload, if it came from disk.
    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}
