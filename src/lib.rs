// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]

//! # rowshred
//!
//! A minimal, Rust-native engine for shredding typed records into columnar
//! load buffers. Schemas are discovered from the records themselves rather
//! than from a predeclared definition.
//!
//! ## Features
//!
//! - **Dynamic Schema Discovery**: Columns are created on demand from the
//!   named fields a record shape exposes
//! - **Stable Ordinals**: A field name keeps its column position across
//!   heterogeneous and derived record shapes
//! - **Null/Optional Handling**: Optional scalars flatten to nullable
//!   columns; absent values stay explicit null markers
//! - **Sparse-Column Detection**: Columns that never received a non-null
//!   value are excluded from the exported column mapping
//! - **Arrow Output**: Native Arrow RecordBatch output for bulk sinks
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rowshred::{Cell, DeclaredType, Record, Result, Shape, Shredder, StorageType};
//!
//! struct Entry {
//!     id: i32,
//!     action: Option<String>,
//! }
//!
//! impl Record for Entry {
//!     fn shape() -> Shape {
//!         Shape::new("Entry")
//!             .field("Id", DeclaredType::Scalar(StorageType::Int32))
//!             .field("Action", DeclaredType::Scalar(StorageType::Text))
//!     }
//!
//!     fn field(&self, name: &str) -> Result<Cell> {
//!         match name {
//!             "Id" => Ok(Cell::Int32(self.id)),
//!             "Action" => Ok(Cell::from(self.action.clone())),
//!             other => Err(rowshred::Error::malformed(other, "unknown field")),
//!         }
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let mut shredder = Shredder::new();
//!     let table = shredder.shred(entries)?;
//!     let mapping = shredder.export_column_mapping()?;
//!     let batch = rowshred::output::table_to_arrow_mapped(&table, &mapping)?;
//!     // Hand (batch, mapping) to the bulk sink.
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! records ──▶ Shredder ──▶ SchemaRegistry (ensure columns, track occupancy)
//!                │
//!                ├──▶ Table (schema + positional row buffers)
//!                └──▶ populated-column mapping ──▶ bulk sink
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and the scalar storage model
pub mod types;

/// Record shapes and value getters
pub mod record;

/// Schema discovery and occupancy tracking
pub mod schema;

/// Shredding driver and table buffers
pub mod shred;

/// Arrow output
pub mod output;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use record::{DeclaredType, FieldDescriptor, Record, Scalar, Shape};
pub use schema::{ColumnDescriptor, Schema, SchemaRegistry};
pub use shred::{shred_scalars, shred_scalars_into, Row, Shredder, Table};
pub use types::{Cell, LoadPolicy, StorageType};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
