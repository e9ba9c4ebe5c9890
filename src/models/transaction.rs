use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Transaction — One sale/catalog record as delivered by the seed feed
// ---------------------------------------------------------------------------

/// A single product sale record.
///
/// Field names follow the seed feed's camelCase wire format. `dateOfSale` is
/// kept as the raw ISO-8601 timestamp string; only its month component is
/// used by the query layer, extracted in SQL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Sale price. Deserialized leniently: numeric strings are parsed, and
    /// anything that is not interpretable as a finite number becomes `0.0`.
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub sold: bool,
    pub date_of_sale: String,
}

// ---------------------------------------------------------------------------
// Best-effort numeric conversion
// ---------------------------------------------------------------------------

/// Interpret a JSON value as a finite `f64`, falling back to `0.0`.
///
/// Accepts numbers and numeric strings. Null, non-numeric strings and
/// non-finite values all yield `0.0` rather than an error, so one malformed
/// price never rejects a whole record set.
pub fn best_effort_f64(value: &serde_json::Value) -> f64 {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(best_effort_f64(&value))
}
