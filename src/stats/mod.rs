//! Stats module - aggregation and ranking over the filtered table

mod aggregate;

pub use aggregate::{column_mean, column_sum, group_count, row_count, top_n};
