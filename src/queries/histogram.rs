//! Price histogram over ten fixed bands.

use crate::error::Result;
use crate::filter::{MonthFilter, TransactionFilter};
use crate::models::{PriceBand, Transaction};

/// The fixed price bands, in output order: `(label, min, max)` with
/// inclusive-lower / exclusive-upper semantics.
///
/// The thresholds are literal: after the first band every band starts at
/// `100n + 1`, so prices strictly between 100 and 101 (and 200/201, ...)
/// fall into no band. That gap is observable output behavior and is kept
/// as-is.
const PRICE_BANDS: [(&str, f64, f64); 10] = [
    ("0-100", 0.0, 100.0),
    ("101-200", 101.0, 200.0),
    ("201-300", 201.0, 300.0),
    ("301-400", 301.0, 400.0),
    ("401-500", 401.0, 500.0),
    ("501-600", 501.0, 600.0),
    ("601-700", 601.0, 700.0),
    ("701-800", 701.0, 800.0),
    ("801-900", 801.0, 900.0),
    ("901+", 901.0, f64::INFINITY),
];

/// Query interface for the month-scoped price histogram.
pub struct HistogramQuery<'a> {
    store: &'a crate::store::Store,
}

impl<'a> HistogramQuery<'a> {
    /// Create a new `HistogramQuery` bound to the given store.
    pub fn new(store: &'a crate::store::Store) -> Self {
        Self { store }
    }

    /// Bucket the month's prices into the ten fixed bands.
    ///
    /// `month` must be a concrete month name; `"All"` is not a defined scope
    /// for the histogram and is rejected as
    /// [`InvalidMonth`](crate::SalesdashError::InvalidMonth). All ten bands
    /// are returned in fixed order even when their counts are zero.
    pub fn by_month(&self, month: &str) -> Result<Vec<PriceBand>> {
        let month = MonthFilter::parse_month(month)?;
        let filter = TransactionFilter::new(MonthFilter::Month(month));
        let records = self.store.find(&filter)?;
        Ok(bucket(&records))
    }
}

fn bucket(records: &[Transaction]) -> Vec<PriceBand> {
    let mut bands: Vec<PriceBand> = PRICE_BANDS
        .iter()
        .map(|(label, _, _)| PriceBand {
            label: label.to_string(),
            count: 0,
        })
        .collect();

    for record in records {
        for (i, (_, min, max)) in PRICE_BANDS.iter().enumerate() {
            if record.price >= *min && record.price < *max {
                bands[i].count += 1;
            }
        }
    }

    bands
}
