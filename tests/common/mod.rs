//! Shared test fixtures for the salesdash integration tests.
//!
//! Provides `setup_sample_sdk()` which builds an offline SDK backed by a
//! temporary cache directory and installs a small literal record set.

#![allow(dead_code)]

use salesdash::{Salesdash, Transaction};

/// Construct a transaction record from literals.
pub fn txn(
    id: i64,
    title: &str,
    description: &str,
    price: f64,
    category: &str,
    sold: bool,
    date_of_sale: &str,
) -> Transaction {
    Transaction {
        id,
        title: title.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        image: Some(format!("https://img.example/{id}.jpg")),
        sold,
        date_of_sale: date_of_sale.to_string(),
    }
}

/// Six records across November 2021 and February 2022.
///
/// November: ids 1, 2, 3, 6. February: ids 4, 5.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        txn(
            1,
            "Wireless Phone Charger",
            "Fast charging pad for all devices",
            150.0,
            "electronics",
            true,
            "2021-11-27T20:29:54+05:30",
        ),
        txn(
            2,
            "Cotton Jacket",
            "Slim fitting winter jacket",
            100.0,
            "clothing",
            true,
            "2021-11-09T10:00:00+05:30",
        ),
        txn(
            3,
            "Leather Wallet",
            "Handmade bifold wallet",
            101.0,
            "accessories",
            false,
            "2021-11-03T08:15:00+05:30",
        ),
        txn(
            4,
            "Gaming Laptop",
            "High-end laptop with discrete graphics",
            950.0,
            "electronics",
            true,
            "2022-02-14T12:30:00+05:30",
        ),
        txn(
            5,
            "Desk Lamp",
            "Adjustable LED desk lamp",
            45.5,
            "home",
            false,
            "2022-02-20T18:45:00+05:30",
        ),
        txn(
            6,
            "Studio Headphones",
            "Over-ear closed-back monitors",
            900.0,
            "electronics",
            true,
            "2021-11-15T09:00:00+05:30",
        ),
    ]
}

/// Build an offline SDK with the sample record set installed.
///
/// Returns `(Salesdash, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for the duration of the test so the cache directory is
/// not deleted prematurely.
pub fn setup_sample_sdk() -> (Salesdash, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let sdk = Salesdash::builder()
        .cache_dir(tmp_dir.path())
        .offline(true)
        .build()
        .unwrap();
    sdk.replace_all(&sample_transactions()).unwrap();
    (sdk, tmp_dir)
}

/// Build an offline SDK with no records installed.
pub fn setup_empty_sdk() -> (Salesdash, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let sdk = Salesdash::builder()
        .cache_dir(tmp_dir.path())
        .offline(true)
        .build()
        .unwrap();
    (sdk, tmp_dir)
}

/// Collect the ids of a record slice, sorted.
pub fn ids(records: &[Transaction]) -> Vec<i64> {
    let mut out: Vec<i64> = records.iter().map(|t| t.id).collect();
    out.sort();
    out
}
