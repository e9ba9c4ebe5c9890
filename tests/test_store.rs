//! Record store installation and raw access tests.

mod common;

use salesdash::filter::{MonthFilter, TransactionFilter};

#[test]
fn fresh_store_answers_queries_with_empty_results() {
    let (sdk, _tmp) = common::setup_empty_sdk();

    assert_eq!(sdk.count().unwrap(), 0);
    assert!(sdk.transactions().by_month("All").unwrap().is_empty());

    let stats = sdk.statistics().by_month("All").unwrap();
    assert_eq!(stats.total_sold_items, 0);
}

#[test]
fn replace_all_installs_and_counts_records() {
    let (sdk, _tmp) = common::setup_empty_sdk();

    let installed = sdk.replace_all(&common::sample_transactions()).unwrap();
    assert_eq!(installed, 6);
    assert_eq!(sdk.count().unwrap(), 6);
}

#[test]
fn replace_all_replaces_rather_than_appends() {
    let (sdk, _tmp) = common::setup_sample_sdk();
    assert_eq!(sdk.count().unwrap(), 6);

    let two = vec![
        common::txn(10, "X", "", 1.0, "x", true, "2021-11-01T00:00:00+05:30"),
        common::txn(11, "Y", "", 2.0, "y", false, "2021-11-02T00:00:00+05:30"),
    ];
    sdk.replace_all(&two).unwrap();

    assert_eq!(sdk.count().unwrap(), 2);
    let all = sdk.transactions().by_month("All").unwrap();
    assert_eq!(common::ids(&all), vec![10, 11]);
}

#[test]
fn replace_all_with_empty_set_clears_the_store() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    sdk.replace_all(&[]).unwrap();
    assert_eq!(sdk.count().unwrap(), 0);
    assert!(sdk.transactions().by_month("All").unwrap().is_empty());
}

#[test]
fn find_roundtrips_whole_records() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let mut found = sdk
        .store()
        .find(&TransactionFilter::new(MonthFilter::All))
        .unwrap();
    found.sort_by_key(|t| t.id);
    assert_eq!(found, common::sample_transactions());
}

#[test]
fn sql_escape_hatch_reaches_the_table() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let rows = sdk
        .sql(
            "SELECT COUNT(*) AS n FROM transactions WHERE category = ?",
            &["electronics".to_string()],
        )
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["n"], serde_json::json!(3));
}
