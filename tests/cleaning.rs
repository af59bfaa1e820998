use polars::prelude::*;

use tokboard::data::{expand_shorthand, load_table, DataLoader, LoaderError};

#[test]
fn headers_are_trimmed_before_lookup() {
    let table = load_table(b"  Username ,\tFollowers \nalice,10\n").expect("load");
    let names: Vec<String> = table
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(names, vec!["Username", "Followers"]);
}

#[test]
fn shorthand_columns_become_numeric() -> PolarsResult<()> {
    let table = load_table(b"Username,Followers,Likes\nalice,1M,10K\nbob,\"2,500\",300\n")
        .expect("load");

    assert_eq!(table.column("Followers")?.dtype(), &DataType::Float64);
    assert_eq!(table.column("Likes")?.dtype(), &DataType::Float64);

    let followers = table.column("Followers")?.f64()?;
    assert_eq!(followers.get(0), Some(1_000_000.0));
    assert_eq!(followers.get(1), Some(2_500.0));

    let likes = table.column("Likes")?.f64()?;
    assert_eq!(likes.get(0), Some(10_000.0));
    assert_eq!(likes.get(1), Some(300.0));
    Ok(())
}

#[test]
fn partially_numeric_column_stays_textual_with_expansions_kept() -> PolarsResult<()> {
    let table = load_table(b"Username,Shares\nalice,5K\nbob,n/a\n").expect("load");

    let shares = table.column("Shares")?;
    assert_eq!(shares.dtype(), &DataType::String);

    // The substitution already happened even though the column stayed text.
    let ca = shares.str()?;
    assert_eq!(ca.get(0), Some("5000"));
    assert_eq!(ca.get(1), Some("n/a"));
    Ok(())
}

#[test]
fn substitution_applies_to_every_textual_column() -> PolarsResult<()> {
    // Capital K inside a country name is replaced too; the cleaning is a
    // blind substring pass over all text columns.
    let table = load_table(b"Username,Country\nalice,UK\nbob,Mexico\n").expect("load");

    let countries = table.column("Country")?.str()?;
    assert_eq!(countries.get(0), Some("U000"));
    assert_eq!(countries.get(1), Some("000000exico"));
    Ok(())
}

#[test]
fn coercion_is_idempotent_over_cleaned_cells() {
    for raw in ["1M", "12K", "3,400", "512", "alice"] {
        let once = expand_shorthand(raw);
        let twice = expand_shorthand(&once);
        assert_eq!(once, twice, "re-cleaning {raw:?} changed the value");
    }
}

#[test]
fn empty_upload_is_rejected() {
    let err = load_table(b"").expect_err("empty input must not produce a table");
    assert!(matches!(err, LoaderError::MalformedInput(_)));
}

#[test]
fn data_loader_tracks_the_current_upload_and_clears_on_failure() {
    let path = std::env::temp_dir().join("tokboard_loader_test.csv");
    std::fs::write(&path, "Username,Followers\nalice,1M\n").expect("write fixture");

    let mut loader = DataLoader::new();
    let df = loader.load_csv(&path).expect("load");
    assert_eq!(df.height(), 1);
    assert_eq!(loader.get_row_count(), 1);
    assert_eq!(loader.get_file_path(), Some(&path));

    let err = loader
        .load_csv_bytes(b"")
        .expect_err("empty bytes must fail");
    assert!(matches!(err, LoaderError::MalformedInput(_)));
    assert!(loader.get_dataframe().is_none());
    assert_eq!(loader.get_row_count(), 0);

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_values_stay_null_in_numeric_columns() -> PolarsResult<()> {
    let table = load_table(b"Username,Followers\nalice,1M\nbob,\n").expect("load");

    let followers = table.column("Followers")?;
    assert_eq!(followers.dtype(), &DataType::Float64);
    assert_eq!(followers.f64()?.get(1), None);
    Ok(())
}
