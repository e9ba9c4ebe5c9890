//! Sold/unsold/revenue statistics.

use crate::error::Result;
use crate::filter::{MonthFilter, TransactionFilter};
use crate::models::{Statistics, Transaction};

/// Query interface for the month-scoped sales statistics.
pub struct StatisticsQuery<'a> {
    store: &'a crate::store::Store,
}

impl<'a> StatisticsQuery<'a> {
    /// Create a new `StatisticsQuery` bound to the given store.
    pub fn new(store: &'a crate::store::Store) -> Self {
        Self { store }
    }

    /// Compute statistics for the given month (`"All"` for every record).
    ///
    /// Revenue is the sum of `price` over sold records; unsold records are
    /// counted but never contribute to the total.
    pub fn by_month(&self, month: &str) -> Result<Statistics> {
        let filter = TransactionFilter::new(MonthFilter::parse(month)?);
        let records = self.store.find(&filter)?;
        Ok(summarize(&records))
    }
}

/// Single-pass reduction of a record sequence into [`Statistics`].
///
/// A non-finite price contributes 0 to the revenue sum but the record is
/// still counted as sold.
fn summarize(records: &[Transaction]) -> Statistics {
    let mut stats = Statistics::default();
    for record in records {
        if record.sold {
            stats.total_sold_items += 1;
            if record.price.is_finite() {
                stats.total_amount_of_sale += record.price;
            }
        } else {
            stats.total_not_sold_items += 1;
        }
    }
    stats
}
