//! Async wrapper around [`Salesdash`] for use in async runtimes (Tokio, etc.),
//! and home of the combined-view orchestrator.
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! DuckDB queries are CPU-bound but fast, making this approach efficient.
//!
//! # Example
//!
//! ```no_run
//! use salesdash::AsyncSalesdash;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncSalesdash::builder().build().await.unwrap();
//!     sdk.load_seed().await.unwrap();
//!
//!     // Statistics + histogram + categories, fanned out concurrently
//!     let combined = sdk.combined_by_month("November").await.unwrap();
//!     println!("{} sold", combined.statistics.total_sold_items);
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config;
use crate::error::{Result, SalesdashError};
use crate::filter::MonthFilter;
use crate::models::{CategoryCount, Combined, PriceBand, Statistics, Transaction};
use crate::Salesdash;

// ---------------------------------------------------------------------------
// AsyncSalesdashBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncSalesdash`] instance.
pub struct AsyncSalesdashBuilder {
    cache_dir: Option<PathBuf>,
    seed_url: Option<String>,
    offline: bool,
    timeout: Duration,
}

impl Default for AsyncSalesdashBuilder {
    fn default() -> Self {
        Self {
            cache_dir: None,
            seed_url: None,
            offline: false,
            timeout: Duration::from_secs(120),
        }
    }
}

impl AsyncSalesdashBuilder {
    /// Set a custom cache directory for the seed file.
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Override the seed feed URL.
    pub fn seed_url<S: Into<String>>(mut self, url: S) -> Self {
        self.seed_url = Some(url.into());
        self
    }

    /// Enable or disable offline mode.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for seed downloads.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK, opening the store and seed fetcher.
    ///
    /// Initialization runs on the blocking thread pool so it won't block
    /// the async event loop.
    pub async fn build(self) -> Result<AsyncSalesdash> {
        tokio::task::spawn_blocking(move || {
            let mut builder = Salesdash::builder();
            if let Some(dir) = self.cache_dir {
                builder = builder.cache_dir(dir);
            }
            if let Some(url) = self.seed_url {
                builder = builder.seed_url(url);
            }
            builder = builder.offline(self.offline).timeout(self.timeout);
            let sdk = builder.build()?;
            Ok(AsyncSalesdash {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| SalesdashError::TaskJoin(e.to_string()))?
    }
}

// ---------------------------------------------------------------------------
// AsyncSalesdash
// ---------------------------------------------------------------------------

/// Async wrapper around [`Salesdash`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`Salesdash`] is
/// protected by a [`Mutex`] since it uses `RefCell` internally; the mutex
/// serializes store access per operation, which also keeps each combined
/// branch reading a consistent record set.
pub struct AsyncSalesdash {
    inner: Arc<Mutex<Salesdash>>,
}

impl AsyncSalesdash {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncSalesdashBuilder {
        AsyncSalesdashBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&Salesdash` reference and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Salesdash) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| SalesdashError::TaskJoin("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| SalesdashError::TaskJoin(e.to_string()))?
    }

    // -- Per-operation wrappers --------------------------------------------

    /// List records for a month (`"All"` for every record).
    pub async fn transactions_by_month(&self, month: &str) -> Result<Vec<Transaction>> {
        let month = month.to_string();
        self.run(move |s| s.transactions().by_month(&month)).await
    }

    /// Search records within a month scope.
    pub async fn search(&self, month: &str, query: &str) -> Result<Vec<Transaction>> {
        let month = month.to_string();
        let query = query.to_string();
        self.run(move |s| s.transactions().search(&month, &query))
            .await
    }

    /// Compute sales statistics for a month (`"All"` for every record).
    pub async fn statistics_by_month(&self, month: &str) -> Result<Statistics> {
        let month = month.to_string();
        self.run(move |s| s.statistics().by_month(&month)).await
    }

    /// Compute the price histogram for a month.
    pub async fn histogram_by_month(&self, month: &str) -> Result<Vec<PriceBand>> {
        let month = month.to_string();
        self.run(move |s| s.histogram().by_month(&month)).await
    }

    /// Compute the category distribution for a month.
    pub async fn categories_by_month(&self, month: &str) -> Result<Vec<CategoryCount>> {
        let month = month.to_string();
        self.run(move |s| s.categories().by_month(&month)).await
    }

    /// Fetch the seed feed and install it as the complete record set.
    pub async fn load_seed(&self) -> Result<usize> {
        self.run(|s| s.load_seed()).await
    }

    /// Install `records` as the complete record set.
    pub async fn replace_all(&self, records: Vec<Transaction>) -> Result<usize> {
        self.run(move |s| s.replace_all(&records)).await
    }

    /// Execute a raw SQL query asynchronously.
    pub async fn sql(
        &self,
        query: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        let query = query.to_string();
        let params = params.to_vec();
        self.run(move |s| s.sql(&query, &params)).await
    }

    // -- Combined view -----------------------------------------------------

    /// Compute statistics, histogram and category distribution for one
    /// month, fanned out as three concurrent tasks and joined
    /// all-or-nothing.
    ///
    /// Each branch independently re-filters the record set. If any branch
    /// fails, or the join exceeds [`config::COMBINED_TIMEOUT_SECS`], the
    /// whole call fails with
    /// [`CombinedFetchFailed`](SalesdashError::CombinedFetchFailed) and no
    /// partial result is returned. An unresolvable month name is rejected
    /// as [`InvalidMonth`](SalesdashError::InvalidMonth) before any fan-out.
    pub async fn combined_by_month(&self, month: &str) -> Result<Combined> {
        MonthFilter::parse_month(month)?;

        let m_stats = month.to_string();
        let m_bar = month.to_string();
        let m_pie = month.to_string();

        let stats = self.run(move |s| s.statistics().by_month(&m_stats));
        let bar = self.run(move |s| s.histogram().by_month(&m_bar));
        let pie = self.run(move |s| s.categories().by_month(&m_pie));

        let joined = tokio::time::timeout(
            Duration::from_secs(config::COMBINED_TIMEOUT_SECS),
            async { tokio::try_join!(stats, bar, pie) },
        )
        .await;

        match joined {
            Err(_) => Err(SalesdashError::CombinedFetchFailed(format!(
                "timed out after {}s",
                config::COMBINED_TIMEOUT_SECS
            ))),
            Ok(Err(e)) => Err(SalesdashError::CombinedFetchFailed(e.to_string())),
            Ok(Ok((statistics, bar_chart, pie_chart))) => Ok(Combined {
                statistics,
                bar_chart,
                pie_chart,
            }),
        }
    }
}
