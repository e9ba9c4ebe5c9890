use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Statistics — Sold/unsold/revenue summary for one month scope
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Sum of `price` over sold records. Unsold records never contribute.
    pub total_amount_of_sale: f64,
    pub total_sold_items: u64,
    pub total_not_sold_items: u64,
}

// ---------------------------------------------------------------------------
// PriceBand — One fixed price interval of the histogram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    /// Literal band label, e.g. `"0-100"`, `"101-200"`, `"901+"`.
    pub label: String,
    pub count: u64,
}

// ---------------------------------------------------------------------------
// CategoryCount — Record count for one category label
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

// ---------------------------------------------------------------------------
// Combined — Merged statistics + histogram + category view for one month
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combined {
    pub statistics: Statistics,
    pub bar_chart: Vec<PriceBand>,
    pub pie_chart: Vec<CategoryCount>,
}
