//! In-process DuckDB record store.
//!
//! Holds the `transactions` table and executes compiled
//! [`TransactionFilter`]s. Records are installed wholesale via
//! [`Store::replace_all`]; reads go through [`Store::find`] or the raw
//! [`Store::execute`] escape hatch.

use std::collections::HashMap;
use std::io::Write;

use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::config;
use crate::error::{Result, SalesdashError};
use crate::filter::TransactionFilter;
use crate::models::Transaction;

/// Column definitions for the `transactions` table.
///
/// `dateOfSale` is stored as VARCHAR so the raw timestamp string round-trips
/// unchanged; month extraction casts on the fly.
const TABLE_SCHEMA: &str = "\"id\" BIGINT, \"title\" VARCHAR, \"price\" DOUBLE, \
     \"description\" VARCHAR, \"category\" VARCHAR, \"image\" VARCHAR, \
     \"sold\" BOOLEAN, \"dateOfSale\" VARCHAR";

/// The same schema as a `read_json` columns argument, so bulk loads never
/// depend on DuckDB's type sniffing.
const JSON_COLUMNS: &str = "{'id': 'BIGINT', 'title': 'VARCHAR', 'price': 'DOUBLE', \
     'description': 'VARCHAR', 'category': 'VARCHAR', 'image': 'VARCHAR', \
     'sold': 'BOOLEAN', 'dateOfSale': 'VARCHAR'}";

/// Wraps a DuckDB connection holding the transaction record set.
pub struct Store {
    conn: DuckDbConnection,
}

impl Store {
    /// Open an in-memory store with an empty `transactions` table, so reads
    /// are valid before any bulk load has happened.
    pub fn open_in_memory() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            config::TRANSACTIONS_TABLE,
            TABLE_SCHEMA
        ))?;
        Ok(Self { conn })
    }

    /// Atomically discard the current record set and install `records`.
    ///
    /// Records are streamed to DuckDB as newline-delimited JSON through a
    /// temp file; the swap itself is a single `CREATE OR REPLACE TABLE`
    /// statement. Any failure maps to
    /// [`StoreWriteFailed`](SalesdashError::StoreWriteFailed).
    pub fn replace_all(&self, records: &[Transaction]) -> Result<usize> {
        let result = (|| -> Result<()> {
            if records.is_empty() {
                self.conn.execute_batch(&format!(
                    "CREATE OR REPLACE TABLE {} ({})",
                    config::TRANSACTIONS_TABLE,
                    TABLE_SCHEMA
                ))?;
                return Ok(());
            }

            let mut file = NamedTempFile::new()?;
            for record in records {
                serde_json::to_writer(&mut file, record)?;
                file.write_all(b"\n")?;
            }
            file.flush()?;

            let path = file.path().to_string_lossy().replace('\\', "/");
            self.conn.execute_batch(&format!(
                "CREATE OR REPLACE TABLE {} AS \
                 SELECT * FROM read_json('{}', format='newline_delimited', columns={})",
                config::TRANSACTIONS_TABLE,
                path,
                JSON_COLUMNS
            ))?;
            Ok(())
        })();

        match result {
            Ok(()) => {
                log::debug!("installed {} transaction records", records.len());
                Ok(records.len())
            }
            Err(e) => Err(SalesdashError::StoreWriteFailed(e.to_string())),
        }
    }

    /// Return all records matching `filter`, in unspecified order.
    ///
    /// An empty result is `Ok(vec![])`, never an error.
    pub fn find(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let (sql, params) = filter.to_sql();
        self.execute_into(&sql, &params)
    }

    /// Number of records currently installed.
    pub fn count(&self) -> Result<u64> {
        let value = self.execute_scalar(
            &format!("SELECT COUNT(*) FROM {}", config::TRANSACTIONS_TABLE),
            &[],
        )?;
        Ok(value.and_then(|v| v.as_u64()).unwrap_or(0))
    }

    /// Execute SQL and return results as a `Vec` of `HashMap`s.
    ///
    /// Each row is represented as a `HashMap<String, serde_json::Value>`.
    pub fn execute(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        let mut stmt = self.conn.prepare(sql)?;

        let param_values: Vec<&dyn duckdb::ToSql> =
            params.iter().map(|p| p as &dyn duckdb::ToSql).collect();

        let mut rows_result = stmt.query(param_values.as_slice())?;

        // Get column metadata AFTER query execution (calling before panics in duckdb-rs)
        let column_names: Vec<String> = rows_result
            .as_ref()
            .unwrap()
            .column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();
        let column_count = rows_result.as_ref().unwrap().column_count();

        let mut out: Vec<HashMap<String, serde_json::Value>> = Vec::new();

        while let Some(row) = rows_result.next()? {
            let mut map = HashMap::new();
            for i in 0..column_count {
                let value = convert_value_ref(row.get_ref(i)?);
                map.insert(column_names[i].clone(), value);
            }
            out.push(map);
        }

        Ok(out)
    }

    /// Execute SQL and deserialize each row into type `T`.
    pub fn execute_into<T: DeserializeOwned>(&self, sql: &str, params: &[String]) -> Result<Vec<T>> {
        let rows = self.execute(sql, params)?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let value = serde_json::Value::Object(
                row.into_iter()
                    .collect::<serde_json::Map<String, serde_json::Value>>(),
            );
            results.push(serde_json::from_value(value)?);
        }
        Ok(results)
    }

    /// Execute SQL and return the first column of the first row.
    fn execute_scalar(&self, sql: &str, params: &[String]) -> Result<Option<serde_json::Value>> {
        let mut stmt = self.conn.prepare(sql)?;
        let param_values: Vec<&dyn duckdb::ToSql> =
            params.iter().map(|p| p as &dyn duckdb::ToSql).collect();

        let mut rows = stmt.query(param_values.as_slice())?;

        if let Some(row) = rows.next()? {
            Ok(Some(convert_value_ref(row.get_ref(0)?)))
        } else {
            Ok(None)
        }
    }
}

/// Convert a DuckDB `ValueRef` to a `serde_json::Value`.
fn convert_value_ref(val: ValueRef<'_>) -> serde_json::Value {
    match val {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Boolean(b) => serde_json::Value::Bool(b),
        ValueRef::TinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::SmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Int(n) => serde_json::Value::Number(n.into()),
        ValueRef::BigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Float(f) => serde_json::Number::from_f64(f as f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Double(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(bytes) => serde_json::Value::String(String::from_utf8_lossy(bytes).to_string()),
        // Other types (Date, Time, Timestamp, Blob, ...) never appear in the
        // transactions schema.
        _ => serde_json::Value::Null,
    }
}
