//! Aggregate Statistics Module
//! Pure summary functions over the current (filtered) table. All of them
//! tolerate a zero-row table.

use polars::prelude::*;
use std::collections::BTreeMap;

/// Number of rows in the table.
pub fn row_count(df: &DataFrame) -> usize {
    df.height()
}

/// Sum of all non-null values; 0.0 for a column with no values.
pub fn column_sum(df: &DataFrame, column: &str) -> PolarsResult<f64> {
    let ca = df.column(column)?.f64()?;
    Ok(ca.sum().unwrap_or(0.0))
}

/// Arithmetic mean of all non-null values. `None` for zero rows: the mean of
/// an empty column is undefined and callers must render it as such.
pub fn column_mean(df: &DataFrame, column: &str) -> PolarsResult<Option<f64>> {
    let ca = df.column(column)?.f64()?;
    Ok(ca.mean())
}

/// The first `n` rows after a stable descending sort by `column`: ties keep
/// their original row order and nulls go last.
pub fn top_n(df: &DataFrame, column: &str, n: usize) -> PolarsResult<DataFrame> {
    let sorted = df.sort(
        [column],
        SortMultipleOptions::default()
            .with_order_descending(true)
            .with_nulls_last(true)
            .with_maintain_order(true),
    )?;
    Ok(sorted.head(Some(n)))
}

/// Distinct value of `column` mapped to its row count, sorted by count
/// descending then value ascending so downstream rendering is reproducible.
pub fn group_count(df: &DataFrame, column: &str) -> PolarsResult<Vec<(String, u32)>> {
    let ca = df.column(column)?.str()?;

    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for cell in ca.into_iter().flatten() {
        *counts.entry(cell.to_string()).or_insert(0) += 1;
    }

    let mut pairs: Vec<(String, u32)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(pairs)
}
