//! SQLite persistence for converted sheets.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, params_from_iter, types::Value as SqlValue};

use crate::{
    data::{DATETIME_FORMAT, Value},
    table::SourceTable,
};

/// Destination for converted tables.
pub trait TableStore {
    /// Replaces any table called `name` with the contents of `table`. Either the
    /// whole table is written or nothing changes.
    fn replace_table(&mut self, name: &str, table: &SourceTable) -> Result<()>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn =
            Connection::open(path).with_context(|| format!("Opening SQLite database {path:?}"))?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Opening in-memory SQLite database")?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl TableStore for SqliteStore {
    fn replace_table(&mut self, name: &str, table: &SourceTable) -> Result<()> {
        let tx = self.conn.transaction().context("Starting transaction")?;
        let quoted = quote_identifier(name);
        tx.execute_batch(&format!("DROP TABLE IF EXISTS {quoted}"))
            .with_context(|| format!("Dropping table {quoted}"))?;
        tx.execute_batch(&create_table_sql(name, table))
            .with_context(|| format!("Creating table {quoted}"))?;
        {
            let mut insert = tx
                .prepare(&insert_sql(name, table))
                .with_context(|| format!("Preparing insert into {quoted}"))?;
            for row_idx in 0..table.row_count() {
                let row = table.row(row_idx).into_iter().map(sql_value);
                insert
                    .execute(params_from_iter(row))
                    .with_context(|| format!("Inserting row {} into {quoted}", row_idx + 1))?;
            }
        }
        tx.commit()
            .with_context(|| format!("Committing table {quoted}"))?;
        Ok(())
    }
}

pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn create_table_sql(name: &str, table: &SourceTable) -> String {
    let columns = table
        .columns
        .iter()
        .map(|c| format!("{} {}", quote_identifier(&c.name), c.data_type.sql_type()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("CREATE TABLE {} ({columns})", quote_identifier(name))
}

fn insert_sql(name: &str, table: &SourceTable) -> String {
    let columns = table
        .columns
        .iter()
        .map(|c| quote_identifier(&c.name))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = vec!["?"; table.columns.len()].join(", ");
    format!(
        "INSERT INTO {} ({columns}) VALUES ({placeholders})",
        quote_identifier(name)
    )
}

fn sql_value(value: Option<&Value>) -> SqlValue {
    match value {
        None => SqlValue::Null,
        Some(Value::String(s)) => SqlValue::Text(s.clone()),
        Some(Value::Integer(i)) => SqlValue::Integer(*i),
        Some(Value::Float(f)) => SqlValue::Real(*f),
        Some(Value::Boolean(b)) => SqlValue::Integer(i64::from(*b)),
        Some(Value::DateTime(dt)) => SqlValue::Text(dt.format(DATETIME_FORMAT).to_string()),
    }
}
