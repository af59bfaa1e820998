use polars::prelude::*;
use std::collections::BTreeSet;

use tokboard::data::{load_table, to_csv_bytes, FilterState};

#[test]
fn serialize_then_deserialize_reproduces_the_table() -> PolarsResult<()> {
    let table = load_table(
        b"Username,Country,Followers,Likes,Comments,Shares\n\
          alice,US,1M,10K,500,200\n\
          bob,Brazil,\"2,000\",50,10,5\n",
    )
    .expect("load");

    let bytes = to_csv_bytes(&table)?;
    let restored = load_table(&bytes).expect("re-load");

    assert!(table.equals_missing(&restored));
    Ok(())
}

#[test]
fn export_has_header_row_and_no_index_column() -> PolarsResult<()> {
    let table = load_table(b"Username,Followers\nalice,10\nbob,20\n").expect("load");

    let bytes = to_csv_bytes(&table)?;
    let text = String::from_utf8(bytes).expect("utf-8 output");
    assert_eq!(text.lines().next(), Some("Username,Followers"));
    Ok(())
}

#[test]
fn export_covers_only_the_filtered_rows() -> PolarsResult<()> {
    let table = load_table(
        b"Username,Country,Followers\nalice,US,10\nbob,Brazil,20\ncarol,US,30\n",
    )
    .expect("load");

    let state = FilterState {
        countries: BTreeSet::from(["US".to_string()]),
        followers: None,
    };
    let filtered = state.apply(&table)?;

    let bytes = to_csv_bytes(&filtered)?;
    let text = String::from_utf8(bytes).expect("utf-8 output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("alice"));
    assert!(lines[2].starts_with("carol"));
    Ok(())
}
