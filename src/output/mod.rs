//! Arrow output
//!
//! Converts a shredded [`Table`](crate::shred::Table) into an Arrow
//! `RecordBatch`, optionally projected to a populated-column mapping. This
//! is the in-memory handoff shape for a bulk sink; transport, transactions,
//! and retries stay the sink's concern.

mod arrow;

pub use arrow::{table_to_arrow, table_to_arrow_mapped};
