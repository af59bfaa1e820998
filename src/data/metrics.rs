//! Derived Metrics Module
//! Engagement rate, computed once per load on the pre-filter table.

use polars::prelude::*;

use super::{has_numeric_column, COL_COMMENTS, COL_FOLLOWERS, COL_LIKES, COL_SHARES, ENGAGEMENT_RATE};

/// Named capability check: the engagement column can be derived only when all
/// four source columns are present and numeric. Presence is a schema check,
/// not a per-row null check.
pub fn can_derive_engagement_rate(df: &DataFrame) -> bool {
    [COL_LIKES, COL_COMMENTS, COL_SHARES, COL_FOLLOWERS]
        .iter()
        .all(|name| has_numeric_column(df, name))
}

/// Append `Engagement Rate (%)` = (Likes + Comments + Shares) / Followers * 100
/// when the inputs allow it; otherwise the table passes through unchanged and
/// the column is absent entirely (not null-filled).
///
/// Followers = 0 follows IEEE float division: the rate comes out infinite
/// (or NaN for 0/0) rather than aborting the pipeline.
pub fn with_engagement_rate(df: DataFrame) -> PolarsResult<DataFrame> {
    if !can_derive_engagement_rate(&df) {
        return Ok(df);
    }

    df.lazy()
        .with_column(
            ((col(COL_LIKES) + col(COL_COMMENTS) + col(COL_SHARES)) / col(COL_FOLLOWERS)
                * lit(100.0))
            .alias(ENGAGEMENT_RATE),
        )
        .collect()
}
