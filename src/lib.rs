//! Salesdash SDK for Rust.
//!
//! Provides a high-level client for analytical queries over a catalog of
//! product sale transactions. Seed data is downloaded from a remote feed,
//! cached locally, and queried in-process via DuckDB: month-scoped listing,
//! free-text/price search, sales statistics, a fixed-band price histogram,
//! a category distribution, and a combined view that fans the three
//! aggregations out concurrently.
//!
//! # Quick start
//!
//! ```no_run
//! use salesdash::Salesdash;
//!
//! let sdk = Salesdash::builder().build().unwrap();
//!
//! // Pull the seed feed into the store (replace-all)
//! let loaded = sdk.load_seed().unwrap();
//! println!("loaded {loaded} records");
//!
//! // Query
//! let stats = sdk.statistics().by_month("November").unwrap();
//! let bands = sdk.histogram().by_month("November").unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod queries;
pub mod seed;
pub mod sql;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncSalesdash;
pub use error::{Result, SalesdashError};
pub use filter::{MonthFilter, TransactionFilter};
pub use models::{CategoryCount, Combined, PriceBand, Statistics, Transaction};
pub use seed::SeedFetcher;
pub use sql::SqlBuilder;
pub use store::Store;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// SalesdashBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Salesdash`] instance.
///
/// Use [`Salesdash::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SalesdashBuilder::build) to create the SDK.
pub struct SalesdashBuilder {
    cache_dir: Option<PathBuf>,
    seed_url: Option<String>,
    offline: bool,
    timeout: Duration,
}

impl Default for SalesdashBuilder {
    fn default() -> Self {
        Self {
            cache_dir: None,
            seed_url: None,
            offline: false,
            timeout: Duration::from_secs(120),
        }
    }
}

impl SalesdashBuilder {
    /// Set a custom cache directory for the seed file.
    ///
    /// If not set, the platform-appropriate default cache directory is used
    /// (e.g. `~/.cache/salesdash` on Linux).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Override the seed feed URL. Defaults to [`config::SEED_URL`].
    pub fn seed_url<S: Into<String>>(mut self, url: S) -> Self {
        self.seed_url = Some(url.into());
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, [`Salesdash::load_seed`] never downloads and only uses
    /// a previously cached seed file. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for seed downloads.
    ///
    /// Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK, opening the in-memory store and the seed fetcher.
    ///
    /// No network traffic happens here; the seed feed is only contacted by
    /// [`Salesdash::load_seed`].
    pub fn build(self) -> Result<Salesdash> {
        let seed = SeedFetcher::new(self.cache_dir, self.seed_url, self.offline, self.timeout)?;
        let store = Store::open_in_memory()?;
        Ok(Salesdash {
            store,
            seed: RefCell::new(seed),
        })
    }
}

// ---------------------------------------------------------------------------
// Salesdash
// ---------------------------------------------------------------------------

/// The main entry point for the salesdash SDK.
///
/// Owns the [`Store`] (the DuckDB-backed record set) and the
/// [`SeedFetcher`], and exposes the analytical query interfaces as
/// lightweight borrowing wrappers.
///
/// Created via [`Salesdash::builder()`].
pub struct Salesdash {
    store: Store,
    seed: RefCell<SeedFetcher>,
}

impl Salesdash {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> SalesdashBuilder {
        SalesdashBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access transaction listing and search.
    pub fn transactions(&self) -> queries::TransactionQuery<'_> {
        queries::TransactionQuery::new(&self.store)
    }

    /// Access the sales statistics aggregation.
    pub fn statistics(&self) -> queries::StatisticsQuery<'_> {
        queries::StatisticsQuery::new(&self.store)
    }

    /// Access the price histogram aggregation.
    pub fn histogram(&self) -> queries::HistogramQuery<'_> {
        queries::HistogramQuery::new(&self.store)
    }

    /// Access the category distribution aggregation.
    pub fn categories(&self) -> queries::CategoryQuery<'_> {
        queries::CategoryQuery::new(&self.store)
    }

    // -- Bulk load ---------------------------------------------------------

    /// Fetch the seed feed and install it as the complete record set.
    ///
    /// Discards whatever the store currently holds. Returns the number of
    /// records installed. Fetch-side failures surface as
    /// [`SeedFetchFailed`](SalesdashError::SeedFetchFailed), store-side
    /// failures as [`StoreWriteFailed`](SalesdashError::StoreWriteFailed).
    pub fn load_seed(&self) -> Result<usize> {
        let records = self.seed.borrow_mut().fetch()?;
        let installed = self.store.replace_all(&records)?;
        log::info!("seed load complete: {} records installed", installed);
        Ok(installed)
    }

    /// Install `records` as the complete record set, replacing the current
    /// contents. For callers that source records themselves.
    pub fn replace_all(&self, records: &[Transaction]) -> Result<usize> {
        self.store.replace_all(records)
    }

    // -- Utility methods ---------------------------------------------------

    /// Number of records currently installed.
    pub fn count(&self) -> Result<u64> {
        self.store.count()
    }

    /// Execute a raw SQL query against the store.
    ///
    /// Provides escape-hatch access for queries not covered by the
    /// domain-specific interfaces.
    ///
    /// # Arguments
    ///
    /// * `query` - SQL string with `?` positional placeholders.
    /// * `params` - Parameter values corresponding to the placeholders.
    pub fn sql(
        &self,
        query: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        self.store.execute(query, params)
    }

    /// Return a reference to the underlying [`Store`] for advanced usage.
    pub fn store(&self) -> &Store {
        &self.store
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Salesdash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seed = self.seed.borrow();
        write!(
            f,
            "Salesdash(cache_dir={}, offline={}, records={})",
            seed.cache_dir.display(),
            seed.offline,
            self.store.count().unwrap_or(0)
        )
    }
}
