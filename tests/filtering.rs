use polars::prelude::*;
use std::collections::BTreeSet;

use tokboard::data::{country_options, followers_bounds, FilterState};

fn sample() -> PolarsResult<DataFrame> {
    df![
        "Username" => ["a", "b", "c", "d"],
        "Country" => ["US", "Brazil", "US", "Japan"],
        "Followers" => [100.0, 250.0, 100.0, 900.0],
    ]
}

fn countries(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_selection_passes_every_row_in_order() -> PolarsResult<()> {
    let df = sample()?;
    let state = FilterState::default();

    assert!(state.is_inert());
    let filtered = state.apply(&df)?;
    assert!(filtered.equals(&df));
    Ok(())
}

#[test]
fn set_filter_keeps_only_selected_countries() -> PolarsResult<()> {
    let df = sample()?;
    let state = FilterState {
        countries: countries(&["US"]),
        followers: None,
    };

    let filtered = state.apply(&df)?;
    assert_eq!(filtered.height(), 2);
    let usernames = filtered.column("Username")?.str()?;
    assert_eq!(usernames.get(0), Some("a"));
    assert_eq!(usernames.get(1), Some("c"));
    Ok(())
}

#[test]
fn full_range_is_a_noop_and_degenerate_range_keeps_minima() -> PolarsResult<()> {
    let df = sample()?;
    let (lo, hi) = followers_bounds(&df).expect("bounds");
    assert_eq!((lo, hi), (100.0, 900.0));

    let full = FilterState {
        countries: BTreeSet::new(),
        followers: Some((lo, hi)),
    };
    assert!(full.apply(&df)?.equals(&df));

    let narrowed = FilterState {
        countries: BTreeSet::new(),
        followers: Some((lo, lo)),
    };
    let filtered = narrowed.apply(&df)?;
    assert_eq!(filtered.height(), 2);
    let values = filtered.column("Followers")?.f64()?;
    assert_eq!(values.get(0), Some(100.0));
    assert_eq!(values.get(1), Some(100.0));
    Ok(())
}

#[test]
fn predicates_compose_with_logical_and() -> PolarsResult<()> {
    let df = sample()?;
    let state = FilterState {
        countries: countries(&["US", "Japan"]),
        followers: Some((200.0, 1_000.0)),
    };

    let filtered = state.apply(&df)?;
    assert_eq!(filtered.height(), 1);
    assert_eq!(filtered.column("Username")?.str()?.get(0), Some("d"));
    Ok(())
}

#[test]
fn filters_over_missing_columns_are_inert() -> PolarsResult<()> {
    let df = df!["Username" => ["a", "b"]]?;
    let state = FilterState {
        countries: countries(&["US"]),
        followers: Some((0.0, 10.0)),
    };

    let filtered = state.apply(&df)?;
    assert!(filtered.equals(&df));
    Ok(())
}

#[test]
fn null_rows_fail_an_active_range_predicate() -> PolarsResult<()> {
    let df = df![
        "Username" => ["a", "b"],
        "Followers" => [Some(10.0), None],
    ]?;
    let state = FilterState {
        countries: BTreeSet::new(),
        followers: Some((0.0, 100.0)),
    };

    let filtered = state.apply(&df)?;
    assert_eq!(filtered.height(), 1);
    assert_eq!(filtered.column("Username")?.str()?.get(0), Some("a"));
    Ok(())
}

#[test]
fn country_options_are_distinct_and_sorted() -> PolarsResult<()> {
    let df = sample()?;
    assert_eq!(country_options(&df), vec!["Brazil", "Japan", "US"]);
    Ok(())
}
