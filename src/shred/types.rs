//! Table and row buffer types

use crate::schema::Schema;
use crate::types::Cell;
use serde::Serialize;

/// A positional row buffer, one slot per ordinal
///
/// A row's length equals the column count at the time it was materialized;
/// columns discovered later are simply absent from earlier rows and read as
/// null downstream.
pub type Row = Vec<Cell>;

/// Schema plus row buffers
///
/// Transient in-memory structure for a single run; owned by the caller once
/// returned from a shred.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    schema: Schema,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table from a schema and its rows
    pub fn new(schema: Schema, rows: Vec<Row>) -> Self {
        Self { schema, rows }
    }

    /// The table's schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Rows in load order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.schema.len()
    }

    /// Check if the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the table, returning its rows
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
