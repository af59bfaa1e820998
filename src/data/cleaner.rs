//! Data Cleaner Module
//! Shorthand numeric coercion and the per-column type decision.

use polars::prelude::*;

/// Expand shorthand notation in a raw cell, in priority order: thousands
/// separators are removed, then "M" and "K" expand to their zero suffixes.
/// Substring-based, case-sensitive, every occurrence; no whitespace trimming.
pub fn expand_shorthand(raw: &str) -> String {
    raw.replace(',', "").replace('M', "000000").replace('K', "000")
}

/// Apply shorthand expansion to every textual column and decide each column's
/// type exactly once: a column where every non-null expanded value parses as
/// a number becomes Float64, anything else stays textual with the expansions
/// kept. Columns the reader already typed numeric are normalized to Float64.
pub fn clean_columns(df: DataFrame) -> PolarsResult<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());
    for col in df.get_columns() {
        columns.push(clean_column(col)?);
    }
    DataFrame::new(columns)
}

fn clean_column(col: &Column) -> PolarsResult<Column> {
    let is_numeric = matches!(
        col.dtype(),
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    );
    if is_numeric {
        return col.cast(&DataType::Float64);
    }
    if col.dtype() != &DataType::String {
        return Ok(col.clone());
    }

    let ca = col.str()?;
    let cleaned: Vec<Option<String>> = ca
        .into_iter()
        .map(|cell| cell.map(expand_shorthand))
        .collect();

    // A column only turns numeric if every non-null value parses and there is
    // at least one non-null value; an all-null column stays textual.
    let mut non_null = 0usize;
    let mut all_numeric = true;
    let mut parsed: Vec<Option<f64>> = Vec::with_capacity(cleaned.len());
    for cell in &cleaned {
        match cell {
            Some(text) => match text.parse::<f64>() {
                Ok(value) => {
                    non_null += 1;
                    parsed.push(Some(value));
                }
                Err(_) => {
                    all_numeric = false;
                    break;
                }
            },
            None => parsed.push(None),
        }
    }

    if all_numeric && non_null > 0 {
        Ok(Column::new(col.name().clone(), parsed))
    } else {
        Ok(Column::new(col.name().clone(), cleaned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_thousands_and_magnitude_suffixes() {
        assert_eq!(expand_shorthand("1M"), "1000000");
        assert_eq!(expand_shorthand("10K"), "10000");
        assert_eq!(expand_shorthand("1,234"), "1234");
        assert_eq!(expand_shorthand("1.5M"), "1.5000000");
    }

    #[test]
    fn expansion_is_substring_based_and_case_sensitive() {
        // Every occurrence is replaced, even inside names; lowercase is left alone.
        assert_eq!(expand_shorthand("Kingdom"), "000ingdom");
        assert_eq!(expand_shorthand("mkm"), "m000m");
        assert_eq!(expand_shorthand("500"), "500");
    }

    #[test]
    fn expansion_is_idempotent_on_expanded_values() {
        for raw in ["1M", "10K", "1,234", "987"] {
            let once = expand_shorthand(raw);
            assert_eq!(expand_shorthand(&once), once);
        }
    }
}
