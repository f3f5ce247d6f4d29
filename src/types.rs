//! Common types used throughout rowshred
//!
//! This module contains the scalar storage model shared by schema
//! discovery, row extraction, and output.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Storage Types
// ============================================================================

/// Resolved scalar type of a column
///
/// This is the closed set of types a flat row can carry. Anything outside it
/// (nested objects, collections, arbitrary reference types) is dropped during
/// schema discovery rather than flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    Boolean,
    Int16,
    Int32,
    Int64,
    Float64,
    Decimal,
    Timestamp,
    Uuid,
    Text,
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageType::Boolean => write!(f, "boolean"),
            StorageType::Int16 => write!(f, "int16"),
            StorageType::Int32 => write!(f, "int32"),
            StorageType::Int64 => write!(f, "int64"),
            StorageType::Float64 => write!(f, "float64"),
            StorageType::Decimal => write!(f, "decimal"),
            StorageType::Timestamp => write!(f, "timestamp"),
            StorageType::Uuid => write!(f, "uuid"),
            StorageType::Text => write!(f, "text"),
        }
    }
}

// ============================================================================
// Cells
// ============================================================================

/// One slot of a row buffer
///
/// `Cell::Null` is the explicit absent marker: an unfilled ordinal holds
/// `Null`, never a zero-length gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Null,
    Boolean(bool),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Decimal(Decimal),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
    Text(String),
}

impl Cell {
    /// Check whether this cell is the explicit null marker
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Storage type of the value held, or `None` for the null marker
    pub fn storage_type(&self) -> Option<StorageType> {
        match self {
            Cell::Null => None,
            Cell::Boolean(_) => Some(StorageType::Boolean),
            Cell::Int16(_) => Some(StorageType::Int16),
            Cell::Int32(_) => Some(StorageType::Int32),
            Cell::Int64(_) => Some(StorageType::Int64),
            Cell::Float64(_) => Some(StorageType::Float64),
            Cell::Decimal(_) => Some(StorageType::Decimal),
            Cell::Timestamp(_) => Some(StorageType::Timestamp),
            Cell::Uuid(_) => Some(StorageType::Uuid),
            Cell::Text(_) => Some(StorageType::Text),
        }
    }
}

macro_rules! impl_cell_from {
    ($($native:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$native> for Cell {
                fn from(value: $native) -> Self {
                    Cell::$variant(value)
                }
            }
        )*
    };
}

impl_cell_from! {
    bool => Boolean,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f64 => Float64,
    Decimal => Decimal,
    DateTime<Utc> => Timestamp,
    Uuid => Uuid,
    String => Text,
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Null, Into::into)
    }
}

// ============================================================================
// Load Policy
// ============================================================================

/// How freshly shredded rows merge into a pre-existing table
///
/// No row-identity matching exists at this layer (there is no primary key
/// concept), so `Overwrite` replaces the prior contents wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Append new rows after any existing rows
    #[default]
    Append,
    /// Discard existing rows before loading
    Overwrite,
}
