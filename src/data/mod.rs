//! Data module - CSV ingestion, cleaning, derived metrics, filtering and export

use polars::prelude::*;

mod cleaner;
mod export;
mod filter;
mod loader;
mod metrics;

pub use cleaner::{clean_columns, expand_shorthand};
pub use export::{to_csv_bytes, EXPORT_FILE_NAME};
pub use filter::{country_options, followers_bounds, FilterState};
pub use loader::{load_table, DataLoader, LoaderError};
pub use metrics::{can_derive_engagement_rate, with_engagement_rate};

/// Well-known column names of influencer exports. Uploads may carry any
/// subset of these; every feature checks for the columns it needs.
pub const COL_USERNAME: &str = "Username";
pub const COL_COUNTRY: &str = "Country";
pub const COL_FOLLOWERS: &str = "Followers";
pub const COL_LIKES: &str = "Likes";
pub const COL_COMMENTS: &str = "Comments";
pub const COL_SHARES: &str = "Shares";

/// Name of the derived engagement column.
pub const ENGAGEMENT_RATE: &str = "Engagement Rate (%)";

/// Whether `name` exists and was tagged numeric at ingestion. Column types
/// are decided once by the cleaner and never re-inferred.
pub fn has_numeric_column(df: &DataFrame, name: &str) -> bool {
    df.column(name)
        .map(|col| col.dtype() == &DataType::Float64)
        .unwrap_or(false)
}

/// Whether `name` exists as a textual column.
pub fn has_text_column(df: &DataFrame, name: &str) -> bool {
    df.column(name)
        .map(|col| col.dtype() == &DataType::String)
        .unwrap_or(false)
}
