//! Schema types

use crate::types::StorageType;
use serde::Serialize;
use std::collections::HashMap;

/// One discovered column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    /// Column name, unique within the schema
    pub name: String,

    /// Zero-based position, stable once assigned
    pub ordinal: usize,

    /// Resolved scalar type, fixed at first discovery
    pub storage_type: StorageType,

    /// Whether the column accepts the null marker
    pub nullable: bool,

    /// Whether any shredded row ever supplied a non-null value
    pub ever_populated: bool,
}

/// Ordered set of column descriptors plus a name lookup index
///
/// Grows monotonically as new record shapes are first seen; never shrinks.
/// Ordinal order and insertion order coincide.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    /// Schema name, derived from the element type name
    pub name: String,

    columns: Vec<ColumnDescriptor>,

    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Schema {
    /// Create a new empty schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Check if a column exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.index.get(name).map(|&ordinal| &self.columns[ordinal])
    }

    /// Look up a column's ordinal by name
    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Columns in ordinal order
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Append a column at the next available ordinal
    ///
    /// Returns the assigned ordinal. Caller guarantees the name is not yet
    /// present; the registry checks before calling.
    pub(crate) fn add_column(
        &mut self,
        name: &str,
        storage_type: StorageType,
        nullable: bool,
    ) -> usize {
        let ordinal = self.columns.len();
        self.columns.push(ColumnDescriptor {
            name: name.to_string(),
            ordinal,
            storage_type,
            nullable,
            ever_populated: false,
        });
        self.index.insert(name.to_string(), ordinal);
        ordinal
    }

    pub(crate) fn column_mut(&mut self, name: &str) -> Option<&mut ColumnDescriptor> {
        let ordinal = *self.index.get(name)?;
        Some(&mut self.columns[ordinal])
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
