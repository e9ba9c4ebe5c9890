#[derive(Debug, thiserror::Error)]
pub enum SalesdashError {
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid month name: {0:?}")]
    InvalidMonth(String),

    #[error("Seed fetch failed: {0}")]
    SeedFetchFailed(String),

    #[error("Store write failed: {0}")]
    StoreWriteFailed(String),

    #[error("Combined fetch failed: {0}")]
    CombinedFetchFailed(String),

    #[error("Background task failed: {0}")]
    TaskJoin(String),
}

pub type Result<T> = std::result::Result<T, SalesdashError>;
