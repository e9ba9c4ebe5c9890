//! Remote seed-data fetcher with a local file cache.
//!
//! Downloads the product transaction feed, caches it under the cache
//! directory, and parses it into [`Transaction`] records. Offline mode reads
//! the cached copy only.

use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use flate2::read::GzDecoder;
use reqwest::blocking::Client;

use crate::config;
use crate::error::{Result, SalesdashError};
use crate::models::Transaction;

/// Downloads and caches the transaction seed feed.
pub struct SeedFetcher {
    /// Directory where the cached seed file is stored.
    pub cache_dir: PathBuf,
    /// If true, never download; only the cached copy is used.
    pub offline: bool,
    url: String,
    timeout: Duration,
    client: Option<Client>,
}

impl SeedFetcher {
    /// Create a new seed fetcher.
    ///
    /// If `cache_dir` is `None`, the platform-appropriate default cache
    /// directory is used. Creates the directory if it does not exist.
    pub fn new(
        cache_dir: Option<PathBuf>,
        url: Option<String>,
        offline: bool,
        timeout: Duration,
    ) -> Result<Self> {
        let dir = cache_dir.unwrap_or_else(config::default_cache_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            cache_dir: dir,
            offline,
            url: url.unwrap_or_else(|| config::SEED_URL.to_string()),
            timeout,
            client: None,
        })
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            self.client = Some(
                Client::builder()
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(10))
                    .build()
                    .map_err(|e| SalesdashError::SeedFetchFailed(e.to_string()))?,
            );
        }
        Ok(self.client.as_ref().unwrap())
    }

    fn seed_path(&self) -> PathBuf {
        self.cache_dir.join(config::SEED_FILENAME)
    }

    /// Fetch the seed record set.
    ///
    /// When online, always downloads a fresh copy (bulk load is a
    /// replace-all operation, so a stale cache must not win) and keeps it as
    /// the cached file. When offline, the cached copy is parsed instead;
    /// a missing cache is a [`SeedFetchFailed`](SalesdashError::SeedFetchFailed).
    pub fn fetch(&mut self) -> Result<Vec<Transaction>> {
        let dest = self.seed_path();

        if !self.offline {
            self.download(&dest)
                .map_err(|e| SalesdashError::SeedFetchFailed(e.to_string()))?;
        } else if !dest.exists() {
            return Err(SalesdashError::SeedFetchFailed(format!(
                "seed file {} not cached and offline mode is enabled",
                dest.display()
            )));
        }

        self.parse_cached(&dest)
    }

    /// Download the seed feed to `dest`.
    ///
    /// Downloads to a temp file first and renames on success, so an
    /// interrupted download never leaves a corrupt partial file behind.
    fn download(&mut self, dest: &Path) -> Result<()> {
        log::info!("downloading seed data from {}", self.url);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_dest = dest.with_extension(format!(
            "{}.tmp",
            dest.extension().and_then(|e| e.to_str()).unwrap_or("")
        ));

        let client = self.client()?.clone();
        let url = self.url.clone();
        let result = (|| -> Result<()> {
            let resp = client.get(&url).send()?.error_for_status()?;
            let bytes = resp.bytes()?;
            fs::write(&tmp_dest, &bytes)?;
            fs::rename(&tmp_dest, dest)?;
            Ok(())
        })();

        if result.is_err() {
            // Clean up partial temp file on any error
            let _ = fs::remove_file(&tmp_dest);
        }

        result
    }

    /// Parse the cached seed file (handles `.gz` transparently).
    ///
    /// If the cached file is corrupt (truncated download, disk error), it is
    /// deleted so the next online fetch starts clean.
    fn parse_cached(&self, path: &Path) -> Result<Vec<Transaction>> {
        let parse_result = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
            let file = fs::File::open(path)?;
            let decoder = GzDecoder::new(BufReader::new(file));
            let mut contents = String::new();
            BufReader::new(decoder).read_to_string(&mut contents)?;
            serde_json::from_str::<Vec<Transaction>>(&contents).map_err(SalesdashError::from)
        } else {
            let contents = fs::read_to_string(path)?;
            serde_json::from_str::<Vec<Transaction>>(&contents).map_err(SalesdashError::from)
        };

        match parse_result {
            Ok(records) => {
                log::info!("parsed {} seed records", records.len());
                Ok(records)
            }
            Err(e) => {
                log::warn!("corrupt seed file {}: {} -- removing", path.display(), e);
                let _ = fs::remove_file(path);
                Err(SalesdashError::SeedFetchFailed(format!(
                    "cached seed file was corrupt and has been removed; retry to re-download ({})",
                    e
                )))
            }
        }
    }

    /// Remove the cached seed file, if present.
    pub fn clear(&self) -> Result<()> {
        let path = self.seed_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
