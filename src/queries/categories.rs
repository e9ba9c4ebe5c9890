//! Per-category record counts.

use std::collections::HashMap;

use crate::error::Result;
use crate::filter::{MonthFilter, TransactionFilter};
use crate::models::{CategoryCount, Transaction};

/// Query interface for the month-scoped category distribution.
pub struct CategoryQuery<'a> {
    store: &'a crate::store::Store,
}

impl<'a> CategoryQuery<'a> {
    /// Create a new `CategoryQuery` bound to the given store.
    pub fn new(store: &'a crate::store::Store) -> Self {
        Self { store }
    }

    /// Tally record counts per category for the given month.
    ///
    /// Same month contract as the histogram: a concrete month name is
    /// required. Categories are emitted in first-seen order over the
    /// filtered record sequence.
    pub fn by_month(&self, month: &str) -> Result<Vec<CategoryCount>> {
        let month = MonthFilter::parse_month(month)?;
        let filter = TransactionFilter::new(MonthFilter::Month(month));
        let records = self.store.find(&filter)?;
        Ok(tally(&records))
    }
}

fn tally(records: &[Transaction]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index.get(&record.category) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(record.category.clone(), counts.len());
                counts.push(CategoryCount {
                    category: record.category.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}
