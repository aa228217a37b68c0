//! Whole-table replacing writes against SQLite.

use std::path::Path;

use polars::prelude::{AnyValue, Column, DataFrame, DataType, NamedFrom, Series};
use rusqlite::types::Value;
use rusqlite::{Connection, params_from_iter};
use tracing::{info, warn};

use fastighet_ingest::{any_to_string, format_numeric};

use crate::error::Result;

/// One connection to the listing database, opened per pipeline run.
pub struct ListingStore {
    conn: Connection,
}

impl ListingStore {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Replace `table` with the contents of `data`.
    ///
    /// Drops any existing table of that name and recreates it from the
    /// frame's schema (INTEGER/REAL/TEXT), all inside one transaction.
    /// A zero-row frame is skipped with a warning rather than creating a
    /// structurally valid but empty table. Returns the row count written.
    pub fn replace_table(&mut self, table: &str, data: &DataFrame) -> Result<usize> {
        if data.height() == 0 {
            warn!(table, "nothing to load, skipping");
            return Ok(0);
        }
        let columns = data.get_columns();
        let tx = self.conn.transaction()?;
        tx.execute(&format!("DROP TABLE IF EXISTS \"{table}\""), [])?;

        let column_defs: Vec<String> = columns
            .iter()
            .map(|column| format!("\"{}\" {}", column.name(), sql_type(column.dtype())))
            .collect();
        tx.execute(
            &format!("CREATE TABLE \"{table}\" ({})", column_defs.join(", ")),
            [],
        )?;

        let column_names: Vec<String> = columns
            .iter()
            .map(|column| format!("\"{}\"", column.name()))
            .collect();
        let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
        let insert = format!(
            "INSERT INTO \"{table}\" ({}) VALUES ({})",
            column_names.join(", "),
            placeholders.join(", ")
        );
        {
            let mut statement = tx.prepare(&insert)?;
            for idx in 0..data.height() {
                let row: Vec<Value> = columns
                    .iter()
                    .map(|column| sql_value(column.get(idx).unwrap_or(AnyValue::Null)))
                    .collect();
                statement.execute(params_from_iter(row))?;
            }
        }
        tx.commit()?;
        info!(table, row_count = data.height(), "table replaced");
        Ok(data.height())
    }

    /// Read a whole table back as a frame.
    ///
    /// Column types are reconstructed from the stored values: all-integer
    /// columns come back as i64, mixed numeric as f64, everything else as
    /// text. Mainly used to verify writes.
    pub fn read_table(&self, table: &str) -> Result<DataFrame> {
        let mut statement = self.conn.prepare(&format!("SELECT * FROM \"{table}\""))?;
        let names: Vec<String> = statement
            .column_names()
            .iter()
            .map(ToString::to_string)
            .collect();
        let width = names.len();

        let mut records: Vec<Vec<Value>> = Vec::new();
        let mut rows = statement.query([])?;
        while let Some(row) = rows.next()? {
            let mut record = Vec::with_capacity(width);
            for idx in 0..width {
                record.push(row.get::<_, Value>(idx)?);
            }
            records.push(record);
        }

        let mut columns: Vec<Column> = Vec::with_capacity(width);
        for (idx, name) in names.iter().enumerate() {
            columns.push(rebuild_column(name, idx, &records));
        }
        Ok(DataFrame::new(columns)?)
    }
}

fn sql_type(dtype: &DataType) -> &'static str {
    match dtype {
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => "INTEGER",
        DataType::Float32 | DataType::Float64 => "REAL",
        _ => "TEXT",
    }
}

fn sql_value(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Int8(v) => Value::Integer(i64::from(v)),
        AnyValue::Int16(v) => Value::Integer(i64::from(v)),
        AnyValue::Int32(v) => Value::Integer(i64::from(v)),
        AnyValue::Int64(v) => Value::Integer(v),
        AnyValue::UInt8(v) => Value::Integer(i64::from(v)),
        AnyValue::UInt16(v) => Value::Integer(i64::from(v)),
        AnyValue::UInt32(v) => Value::Integer(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => Value::Integer(v),
            Err(_) => Value::Text(v.to_string()),
        },
        AnyValue::Float32(v) => Value::Real(f64::from(v)),
        AnyValue::Float64(v) => Value::Real(v),
        AnyValue::String(s) => Value::Text(s.to_string()),
        AnyValue::StringOwned(s) => Value::Text(s.to_string()),
        other => Value::Text(any_to_string(other)),
    }
}

fn rebuild_column(name: &str, idx: usize, records: &[Vec<Value>]) -> Column {
    let cells = records.iter().map(|record| &record[idx]);
    let all_integer = cells
        .clone()
        .all(|value| matches!(value, Value::Null | Value::Integer(_)));
    if all_integer {
        let values: Vec<Option<i64>> = cells
            .map(|value| match value {
                Value::Integer(v) => Some(*v),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), values).into();
    }
    let all_numeric = cells
        .clone()
        .all(|value| matches!(value, Value::Null | Value::Integer(_) | Value::Real(_)));
    if all_numeric {
        let values: Vec<Option<f64>> = cells
            .map(|value| match value {
                Value::Integer(v) => Some(*v as f64),
                Value::Real(v) => Some(*v),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), values).into();
    }
    let values: Vec<Option<String>> = cells
        .map(|value| match value {
            Value::Null => None,
            Value::Integer(v) => Some(v.to_string()),
            Value::Real(v) => Some(format_numeric(*v)),
            Value::Text(s) => Some(s.clone()),
            Value::Blob(_) => None,
        })
        .collect();
    Series::new(name.into(), values).into()
}
