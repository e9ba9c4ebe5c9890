//! Listing and search tests against in-memory sample data.

mod common;

use salesdash::SalesdashError;

// ---------------------------------------------------------------------------
// by_month
// ---------------------------------------------------------------------------

#[test]
fn by_month_returns_only_matching_records() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let november = sdk.transactions().by_month("November").unwrap();
    assert_eq!(common::ids(&november), vec![1, 2, 3, 6]);

    let february = sdk.transactions().by_month("February").unwrap();
    assert_eq!(common::ids(&february), vec![4, 5]);
}

#[test]
fn by_month_all_returns_every_record() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let all = sdk.transactions().by_month("All").unwrap();
    assert_eq!(common::ids(&all), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn by_month_empty_month_returns_empty() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let june = sdk.transactions().by_month("June").unwrap();
    assert!(june.is_empty());
}

#[test]
fn by_month_rejects_unrecognized_names() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    for bad in ["Jan", "november", ""] {
        let err = sdk.transactions().by_month(bad).unwrap_err();
        assert!(matches!(err, SalesdashError::InvalidMonth(_)), "{bad}");
    }
}

#[test]
fn by_month_roundtrips_record_fields() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let november = sdk.transactions().by_month("November").unwrap();
    let charger = november.iter().find(|t| t.id == 1).unwrap();
    assert_eq!(charger.title, "Wireless Phone Charger");
    assert_eq!(charger.price, 150.0);
    assert_eq!(charger.category, "electronics");
    assert!(charger.sold);
    assert_eq!(charger.date_of_sale, "2021-11-27T20:29:54+05:30");
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

#[test]
fn search_matches_title_case_insensitively() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    // "phone" appears in "Wireless Phone Charger" and "Studio Headphones".
    let hits = sdk.transactions().search("November", "phone").unwrap();
    assert_eq!(common::ids(&hits), vec![1, 6]);

    let hits = sdk.transactions().search("November", "PHONE").unwrap();
    assert_eq!(common::ids(&hits), vec![1, 6]);
}

#[test]
fn search_matches_description() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let hits = sdk.transactions().search("November", "bifold").unwrap();
    assert_eq!(common::ids(&hits), vec![3]);
}

#[test]
fn search_numeric_matches_price_exactly() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    // No text field mentions "150"; the price clause does the matching.
    let hits = sdk.transactions().search("November", "150").unwrap();
    assert_eq!(common::ids(&hits), vec![1]);
}

#[test]
fn search_numeric_still_unions_with_text_fields() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let mut records = common::sample_transactions();
    records.push(common::txn(
        7,
        "150 Piece Puzzle",
        "Family jigsaw",
        20.0,
        "toys",
        false,
        "2021-11-21T11:00:00+05:30",
    ));
    sdk.replace_all(&records).unwrap();

    // "150" matches id 1 by price and id 7 by title.
    let hits = sdk.transactions().search("November", "150").unwrap();
    assert_eq!(common::ids(&hits), vec![1, 7]);
}

#[test]
fn search_is_scoped_to_the_month() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    // "laptop" only exists in February.
    let hits = sdk.transactions().search("November", "laptop").unwrap();
    assert!(hits.is_empty());

    let hits = sdk.transactions().search("February", "laptop").unwrap();
    assert_eq!(common::ids(&hits), vec![4]);
}

#[test]
fn search_all_spans_every_month() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let hits = sdk.transactions().search("All", "jacket").unwrap();
    assert_eq!(common::ids(&hits), vec![2]);
}

#[test]
fn search_rejects_unrecognized_month() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let err = sdk.transactions().search("Movember", "phone").unwrap_err();
    assert!(matches!(err, SalesdashError::InvalidMonth(_)));
}
