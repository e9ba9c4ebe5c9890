//! Month resolution and record filter construction.
//!
//! A [`TransactionFilter`] describes which records an operation wants and
//! compiles to a parameterized SELECT via [`SqlBuilder`]. It never touches
//! the store itself; [`Store::find`](crate::store::Store::find) executes it.

use crate::config;
use crate::error::{Result, SalesdashError};
use crate::sql::SqlBuilder;

// ---------------------------------------------------------------------------
// MonthFilter
// ---------------------------------------------------------------------------

/// A resolved month scope: every record, or one calendar month (1-12).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(u32),
}

/// Map a full English month name to its 1-12 ordinal.
///
/// Matching is exact and case-sensitive: `"January"` resolves, `"january"`
/// and `"Jan"` do not.
pub fn month_ordinal(name: &str) -> Option<u32> {
    match name {
        "January" => Some(1),
        "February" => Some(2),
        "March" => Some(3),
        "April" => Some(4),
        "May" => Some(5),
        "June" => Some(6),
        "July" => Some(7),
        "August" => Some(8),
        "September" => Some(9),
        "October" => Some(10),
        "November" => Some(11),
        "December" => Some(12),
        _ => None,
    }
}

impl MonthFilter {
    /// Resolve a month name, with `"All"` meaning no month scope.
    pub fn parse(name: &str) -> Result<Self> {
        if name == "All" {
            return Ok(MonthFilter::All);
        }
        month_ordinal(name)
            .map(MonthFilter::Month)
            .ok_or_else(|| SalesdashError::InvalidMonth(name.to_string()))
    }

    /// Resolve a month name that must denote a concrete month.
    ///
    /// `"All"` is rejected alongside unknown names; the histogram, category
    /// and combined views are only defined for a single month.
    pub fn parse_month(name: &str) -> Result<u32> {
        month_ordinal(name).ok_or_else(|| SalesdashError::InvalidMonth(name.to_string()))
    }
}

// ---------------------------------------------------------------------------
// TransactionFilter
// ---------------------------------------------------------------------------

/// A declarative record filter: month scope plus optional free-text search.
///
/// Three shapes are expressible:
/// - all records (`MonthFilter::All`, no search text)
/// - month only
/// - month (or all) combined with search text, which matches records whose
///   title or description contains the text case-insensitively, or whose
///   price equals the text's numeric value when it parses as a number.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFilter {
    month: MonthFilter,
    search: Option<String>,
}

impl TransactionFilter {
    pub fn new(month: MonthFilter) -> Self {
        Self {
            month,
            search: None,
        }
    }

    /// Attach free-text search to this filter.
    pub fn with_search(mut self, text: &str) -> Self {
        self.search = Some(text.to_string());
        self
    }

    pub fn month(&self) -> MonthFilter {
        self.month
    }

    /// Compile to `(sql, params)` for execution against the store.
    pub fn to_sql(&self) -> (String, Vec<String>) {
        let mut qb = SqlBuilder::new(config::TRANSACTIONS_TABLE);

        if let MonthFilter::Month(m) = self.month {
            qb.where_clause(
                "month(TRY_CAST(\"dateOfSale\" AS TIMESTAMP)) = CAST(? AS INTEGER)",
                &[&m.to_string()],
            );
        }

        if let Some(text) = &self.search {
            let mut alternatives: Vec<(&str, &str)> = vec![
                ("contains(LOWER(\"title\"), LOWER(?))", text.as_str()),
                ("contains(LOWER(\"description\"), LOWER(?))", text.as_str()),
            ];
            // The price clause only participates when the text is numeric;
            // non-numeric text silently drops it from the OR group.
            let numeric = text.trim();
            if numeric.parse::<f64>().is_ok() {
                alternatives.push(("\"price\" = CAST(? AS DOUBLE)", numeric));
            }
            qb.where_or(&alternatives);
        }

        qb.build()
    }
}
