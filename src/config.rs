use std::path::PathBuf;

/// Default remote source for the product transaction seed data.
pub const SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// File name the seed data is cached under inside the cache directory.
pub const SEED_FILENAME: &str = "product_transactions.json";

/// Name of the DuckDB table holding the transaction records.
pub const TRANSACTIONS_TABLE: &str = "transactions";

/// Upper bound on the combined-view fan-out join, in seconds.
pub const COMBINED_TIMEOUT_SECS: u64 = 30;

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("salesdash")
    } else {
        PathBuf::from(".salesdash-cache")
    }
}
