//! CSV Export Module
//! Re-serializes the current filtered table for download.

use polars::prelude::*;

/// Default file name offered for the filtered download.
pub const EXPORT_FILE_NAME: &str = "filtered_data.csv";

/// Render the table to UTF-8 CSV bytes: header row included, in-memory
/// column order, no index column. Operates on the cleaned values, not the
/// raw upload, so re-importing the output needs no further coercion.
pub fn to_csv_bytes(df: &DataFrame) -> PolarsResult<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::new();
    let mut df = df.clone();
    CsvWriter::new(&mut buf)
        .include_header(true)
        .finish(&mut df)?;
    Ok(buf)
}
