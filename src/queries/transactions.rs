//! Transaction listing and search.

use crate::error::Result;
use crate::filter::{MonthFilter, TransactionFilter};
use crate::models::Transaction;

/// Query interface for listing and searching transaction records.
pub struct TransactionQuery<'a> {
    store: &'a crate::store::Store,
}

impl<'a> TransactionQuery<'a> {
    /// Create a new `TransactionQuery` bound to the given store.
    pub fn new(store: &'a crate::store::Store) -> Self {
        Self { store }
    }

    /// List all records whose sale date falls in the given month.
    ///
    /// `month` is a full English month name, or `"All"` for every record.
    pub fn by_month(&self, month: &str) -> Result<Vec<Transaction>> {
        let filter = TransactionFilter::new(MonthFilter::parse(month)?);
        self.store.find(&filter)
    }

    /// Search records within a month scope.
    ///
    /// A record matches when its title or description contains `query`
    /// case-insensitively, or when its price equals the numeric value of
    /// `query` (that clause is skipped for non-numeric text).
    pub fn search(&self, month: &str, query: &str) -> Result<Vec<Transaction>> {
        let filter = TransactionFilter::new(MonthFilter::parse(month)?).with_search(query);
        self.store.find(&filter)
    }
}
