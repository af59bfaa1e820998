//! Row Filtering Module
//! Set and range predicates over the derived source table.

use polars::prelude::*;
use std::collections::BTreeSet;

use super::{has_numeric_column, has_text_column, COL_COUNTRY, COL_FOLLOWERS};

/// Active filter predicates for one interaction. Built fresh from the UI
/// selection each time, never persisted, and always applied to the derived
/// source table rather than a previously filtered one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Selected countries. An empty set means no restriction, not "match
    /// nothing".
    pub countries: BTreeSet<String>,
    /// Inclusive follower range. `None` means no restriction.
    pub followers: Option<(f64, f64)>,
}

impl FilterState {
    /// Whether applying this state would pass every row through.
    pub fn is_inert(&self) -> bool {
        self.countries.is_empty() && self.followers.is_none()
    }

    /// Apply all active predicates with logical AND. Predicates commute, so
    /// application order is irrelevant. A predicate over a missing column is
    /// silently inert.
    pub fn apply(&self, df: &DataFrame) -> PolarsResult<DataFrame> {
        let mut filtered = df.clone();

        if !self.countries.is_empty() && has_text_column(&filtered, COL_COUNTRY) {
            let mask = country_mask(&filtered, &self.countries)?;
            filtered = filtered.filter(&mask)?;
        }

        if let Some((lo, hi)) = self.followers {
            if has_numeric_column(&filtered, COL_FOLLOWERS) {
                let mask = range_mask(&filtered, lo, hi)?;
                filtered = filtered.filter(&mask)?;
            }
        }

        Ok(filtered)
    }
}

fn country_mask(df: &DataFrame, selected: &BTreeSet<String>) -> PolarsResult<BooleanChunked> {
    let ca = df.column(COL_COUNTRY)?.str()?;
    let keep: Vec<bool> = ca
        .into_iter()
        .map(|cell| cell.is_some_and(|country| selected.contains(country)))
        .collect();
    Ok(BooleanChunked::new("country_mask".into(), keep))
}

/// Inclusive bounds; rows with a null value fail an active range predicate.
fn range_mask(df: &DataFrame, lo: f64, hi: f64) -> PolarsResult<BooleanChunked> {
    let ca = df.column(COL_FOLLOWERS)?.f64()?;
    let keep: Vec<bool> = ca
        .into_iter()
        .map(|cell| cell.is_some_and(|value| value >= lo && value <= hi))
        .collect();
    Ok(BooleanChunked::new("followers_mask".into(), keep))
}

/// Distinct non-null countries, sorted, for the multiselect control.
pub fn country_options(df: &DataFrame) -> Vec<String> {
    let Ok(col) = df.column(COL_COUNTRY) else {
        return Vec::new();
    };
    let Ok(ca) = col.str() else {
        return Vec::new();
    };
    let unique: BTreeSet<String> = ca.into_iter().flatten().map(str::to_string).collect();
    unique.into_iter().collect()
}

/// Observed min/max of the Followers column, used as the default (no-op)
/// bounds of the range control. `None` when the column is missing, textual
/// or all-null.
pub fn followers_bounds(df: &DataFrame) -> Option<(f64, f64)> {
    if !has_numeric_column(df, COL_FOLLOWERS) {
        return None;
    }
    let ca = df.column(COL_FOLLOWERS).ok()?.f64().ok()?;
    match (ca.min(), ca.max()) {
        (Some(lo), Some(hi)) => Some((lo, hi)),
        _ => None,
    }
}
