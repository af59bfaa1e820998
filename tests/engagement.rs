use polars::prelude::*;

use tokboard::data::{can_derive_engagement_rate, load_table, with_engagement_rate, ENGAGEMENT_RATE};

#[test]
fn derives_rate_when_all_source_columns_exist() -> PolarsResult<()> {
    let df = df![
        "Username" => ["A"],
        "Followers" => [1_000_000.0],
        "Likes" => [10_000.0],
        "Comments" => [500.0],
        "Shares" => [200.0],
    ]?;

    assert!(can_derive_engagement_rate(&df));
    let derived = with_engagement_rate(df)?;
    let rate = derived
        .column(ENGAGEMENT_RATE)?
        .f64()?
        .get(0)
        .expect("rate value");
    assert!((rate - 1.07).abs() < 1e-9);
    Ok(())
}

#[test]
fn column_is_absent_when_any_source_is_missing() -> PolarsResult<()> {
    // No Shares column: the derived column must be omitted entirely, not
    // null-filled.
    let df = df![
        "Username" => ["A"],
        "Followers" => [1_000_000.0],
        "Likes" => [10_000.0],
        "Comments" => [500.0],
    ]?;

    assert!(!can_derive_engagement_rate(&df));
    let derived = with_engagement_rate(df)?;
    assert!(derived.column(ENGAGEMENT_RATE).is_err());
    Ok(())
}

#[test]
fn textual_source_column_blocks_derivation() -> PolarsResult<()> {
    let df = df![
        "Followers" => ["lots"],
        "Likes" => [10.0],
        "Comments" => [5.0],
        "Shares" => [2.0],
    ]?;

    assert!(!can_derive_engagement_rate(&df));
    Ok(())
}

#[test]
fn shorthand_example_yields_expected_rate_end_to_end() -> PolarsResult<()> {
    let table = load_table(b"Username,Followers,Likes,Comments,Shares\nA,1M,10K,500,200\n")
        .expect("load");

    let rate = table
        .column(ENGAGEMENT_RATE)?
        .f64()?
        .get(0)
        .expect("rate value");
    assert!((rate - 1.07).abs() < 1e-9);
    Ok(())
}

#[test]
fn zero_followers_yields_infinite_rate_without_failing() -> PolarsResult<()> {
    let df = df![
        "Followers" => [0.0],
        "Likes" => [10.0],
        "Comments" => [5.0],
        "Shares" => [2.0],
    ]?;

    let derived = with_engagement_rate(df)?;
    let rate = derived
        .column(ENGAGEMENT_RATE)?
        .f64()?
        .get(0)
        .expect("rate value");
    assert!(rate.is_infinite());
    Ok(())
}
