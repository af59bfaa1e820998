//! View Model Module
//! The pure whole-pipeline recompute the UI shell calls on every
//! interaction: filter the derived source table, then aggregate everything
//! the dashboard renders. Features whose columns are missing come back as
//! `None` and are simply not drawn.

use polars::prelude::*;

use crate::data::{
    self, FilterState, COL_COUNTRY, COL_FOLLOWERS, COL_LIKES, COL_USERNAME, ENGAGEMENT_RATE,
};
use crate::stats;

/// Rows shown in the ranked bar charts.
pub const TOP_N: usize = 10;

/// Headline numbers for the KPI row. Fields are `None` when the backing
/// column is missing from the upload, or when the mean is undefined (zero
/// matching rows).
#[derive(Debug, Clone, Default)]
pub struct Kpis {
    pub influencer_count: usize,
    pub total_followers: Option<f64>,
    pub avg_followers: Option<f64>,
    pub avg_engagement: Option<f64>,
}

/// One bar of a ranked chart.
#[derive(Debug, Clone)]
pub struct RankedEntry {
    pub label: String,
    pub value: f64,
}

/// One point of the followers-vs-likes scatter.
#[derive(Debug, Clone)]
pub struct ScatterPoint {
    pub followers: f64,
    pub likes: f64,
    pub username: Option<String>,
}

/// Everything the dashboard renders for one filter state.
#[derive(Debug, Clone)]
pub struct ViewModel {
    /// The filtered table, for the data grid and the CSV export.
    pub table: DataFrame,
    pub kpis: Kpis,
    pub top_followers: Option<Vec<RankedEntry>>,
    pub top_engagement: Option<Vec<RankedEntry>>,
    pub country_counts: Option<Vec<(String, u32)>>,
    pub followers_vs_likes: Option<Vec<ScatterPoint>>,
}

/// Recompute the full view from the derived source table. Filtering always
/// starts from `source`, so successive interactions never compound.
pub fn compute_view(source: &DataFrame, filters: &FilterState) -> PolarsResult<ViewModel> {
    let table = filters.apply(source)?;

    let mut kpis = Kpis {
        influencer_count: stats::row_count(&table),
        ..Kpis::default()
    };
    if data::has_numeric_column(&table, COL_FOLLOWERS) {
        kpis.total_followers = Some(stats::column_sum(&table, COL_FOLLOWERS)?);
        kpis.avg_followers = stats::column_mean(&table, COL_FOLLOWERS)?;
    }
    if data::has_numeric_column(&table, ENGAGEMENT_RATE) {
        kpis.avg_engagement = stats::column_mean(&table, ENGAGEMENT_RATE)?;
    }

    let top_followers = ranked_entries(&table, COL_FOLLOWERS)?;
    let top_engagement = ranked_entries(&table, ENGAGEMENT_RATE)?;

    let country_counts = if data::has_text_column(&table, COL_COUNTRY) {
        Some(stats::group_count(&table, COL_COUNTRY)?)
    } else {
        None
    };

    let followers_vs_likes = scatter_points(&table)?;

    Ok(ViewModel {
        table,
        kpis,
        top_followers,
        top_engagement,
        country_counts,
        followers_vs_likes,
    })
}

/// Top-N bars for one numeric column, labelled by username. Enabled only
/// when both columns are present; rows with a null ranking value are
/// skipped.
fn ranked_entries(table: &DataFrame, column: &str) -> PolarsResult<Option<Vec<RankedEntry>>> {
    if !data::has_numeric_column(table, column) || !data::has_text_column(table, COL_USERNAME) {
        return Ok(None);
    }

    let top = stats::top_n(table, column, TOP_N)?;
    let names = top.column(COL_USERNAME)?.str()?;
    let values = top.column(column)?.f64()?;

    let mut entries = Vec::with_capacity(top.height());
    for i in 0..top.height() {
        let Some(value) = values.get(i) else { continue };
        entries.push(RankedEntry {
            label: names.get(i).unwrap_or("").to_string(),
            value,
        });
    }
    Ok(Some(entries))
}

fn scatter_points(table: &DataFrame) -> PolarsResult<Option<Vec<ScatterPoint>>> {
    if !data::has_numeric_column(table, COL_FOLLOWERS)
        || !data::has_numeric_column(table, COL_LIKES)
    {
        return Ok(None);
    }

    let followers = table.column(COL_FOLLOWERS)?.f64()?;
    let likes = table.column(COL_LIKES)?.f64()?;
    let usernames = if data::has_text_column(table, COL_USERNAME) {
        Some(table.column(COL_USERNAME)?.str()?)
    } else {
        None
    };

    let mut points = Vec::with_capacity(table.height());
    for i in 0..table.height() {
        if let (Some(followers), Some(likes)) = (followers.get(i), likes.get(i)) {
            points.push(ScatterPoint {
                followers,
                likes,
                username: usernames.and_then(|ca| ca.get(i)).map(str::to_string),
            });
        }
    }
    Ok(Some(points))
}
