//! Schema discovery module
//!
//! Incrementally builds a column schema from record shapes.
//!
//! # Features
//!
//! - **On-demand Columns**: Columns are created the first time a field name
//!   is seen; ordinals are stable from then on
//! - **Type Resolution**: Declared field types resolve to a scalar storage
//!   type plus nullability; unsupported types are dropped, not failed
//! - **Occupancy Tracking**: Each column records whether any shredded row
//!   ever supplied a non-null value for it
//! - **Populated Mapping**: Exports the occupancy-filtered column list a
//!   bulk sink should actually receive

mod registry;
mod types;

pub use registry::SchemaRegistry;
pub use types::{ColumnDescriptor, Schema};
