//! Shredding module
//!
//! Main driving loop: records in, aligned row buffers out.
//!
//! # Overview
//!
//! The shred module provides:
//! - `Shredder<R>` - Drives schema discovery across a record sequence
//! - `Table` - Schema plus row buffers, the unit handed to a bulk sink
//! - `shred_scalars` - Bypass for sequences of plain scalars

mod shredder;
mod types;

pub use shredder::{shred_scalars, shred_scalars_into, Shredder};
pub use types::{Row, Table};
