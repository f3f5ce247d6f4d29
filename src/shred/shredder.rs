//! Shredder driving logic

use super::types::{Row, Table};
use crate::error::{Error, Result};
use crate::record::{Record, Scalar, Shape};
use crate::schema::{Schema, SchemaRegistry};
use crate::types::{Cell, LoadPolicy};
use std::marker::PhantomData;
use tracing::trace;

/// Drives a [`SchemaRegistry`] across a sequence of records, producing
/// aligned row buffers
///
/// One shredder per batch: the registry it owns is not synchronized, and a
/// table produced by a failed shred must be discarded rather than reused.
pub struct Shredder<R> {
    registry: SchemaRegistry,
    _marker: PhantomData<R>,
}

impl<R: Record> Default for Shredder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Shredder<R> {
    /// Create a shredder with a new empty schema named after the element type
    pub fn new() -> Self {
        Self {
            registry: SchemaRegistry::new(R::shape().type_name()),
            _marker: PhantomData,
        }
    }

    /// Create a shredder pre-seeded from an existing external schema
    pub fn with_schema(schema: Schema) -> Self {
        Self {
            registry: SchemaRegistry::from_schema(schema),
            _marker: PhantomData,
        }
    }

    /// The schema discovered so far
    pub fn schema(&self) -> &Schema {
        self.registry.schema()
    }

    /// Shred a sequence into a fresh table
    pub fn shred<I>(&mut self, records: I) -> Result<Table>
    where
        I: IntoIterator<Item = R>,
    {
        self.shred_into(records, None, LoadPolicy::Append)
    }

    /// Shred a sequence, merging rows into a pre-existing table
    ///
    /// The declared element shape is registered once up front; a record
    /// whose runtime shape names a different type extends the schema before
    /// its values are extracted, so heterogeneous sequences never re-scan
    /// already-known shapes. The first faulty record aborts the whole pass
    /// and the partial table is dropped.
    pub fn shred_into<I>(
        &mut self,
        records: I,
        table: Option<Table>,
        policy: LoadPolicy,
    ) -> Result<Table>
    where
        I: IntoIterator<Item = R>,
    {
        let declared = R::shape();
        self.registry.ensure_columns(&declared);

        let mut rows = match (table, policy) {
            (Some(existing), LoadPolicy::Append) => existing.into_rows(),
            _ => Vec::new(),
        };

        let mut shredded = 0_usize;
        for record in records {
            let shape = record.runtime_shape();
            if shape.type_name() != declared.type_name() {
                self.registry.ensure_columns(&shape);
            }
            rows.push(self.shred_record(&shape, &record)?);
            shredded += 1;
        }
        trace!(
            schema = self.registry.schema().name.as_str(),
            rows = shredded,
            columns = self.registry.schema().len(),
            "shred pass complete"
        );

        Ok(Table::new(self.registry.schema().clone(), rows))
    }

    /// Export the occupancy-filtered column mapping for a bulk sink
    ///
    /// Columns that stayed null across every record are omitted so the sink
    /// never receives meaningless all-null columns. Fails if nothing was
    /// ever shredded.
    pub fn export_column_mapping(&self) -> Result<Vec<String>> {
        self.registry.export_populated_mapping()
    }

    /// Extract one row, aligned to the current column count
    ///
    /// Fields without a column (unsupported types) are skipped exactly as
    /// they were during discovery. Null values stay explicit null markers
    /// and do not touch occupancy.
    fn shred_record(&mut self, shape: &Shape, record: &R) -> Result<Row> {
        let mut row = vec![Cell::Null; self.registry.schema().len()];

        for field in shape.fields() {
            let Some(ordinal) = self.registry.schema().ordinal_of(field.name) else {
                continue;
            };
            let cell = record.field(field.name)?;
            if let Some(storage) = cell.storage_type() {
                let expected = self.registry.schema().columns()[ordinal].storage_type;
                if storage != expected {
                    return Err(Error::malformed(
                        field.name,
                        format!("expected {expected} value, got {storage}"),
                    ));
                }
                self.registry.mark_populated(field.name);
            }
            row[ordinal] = cell;
        }

        Ok(row)
    }
}

/// Load a table from a sequence of plain scalars
///
/// The distinct bypass for primitive element types: no named fields exist,
/// so schema discovery is skipped and every element lands in a single
/// `Value` column. Occupancy is not tracked here; scalar tables carry no
/// column mapping.
pub fn shred_scalars<T, I>(values: I) -> Table
where
    T: Scalar,
    I: IntoIterator<Item = T>,
{
    shred_scalars_into(values, None, LoadPolicy::Append)
}

/// Load a sequence of plain scalars, merging into a pre-existing table
///
/// An existing table's `Value` column is reused (its metadata wins, like any
/// first-discovered column); when absent, one is added at the next ordinal.
/// `Overwrite` discards the prior rows first.
pub fn shred_scalars_into<T, I>(values: I, table: Option<Table>, policy: LoadPolicy) -> Table
where
    T: Scalar,
    I: IntoIterator<Item = T>,
{
    let (mut schema, existing_rows) = match table {
        Some(existing) => {
            let schema = existing.schema().clone();
            (schema, existing.into_rows())
        }
        None => (Schema::new(T::STORAGE.to_string()), Vec::new()),
    };

    let ordinal = match schema.ordinal_of("Value") {
        Some(ordinal) => ordinal,
        None => schema.add_column("Value", T::STORAGE, T::NULLABLE),
    };

    let mut rows = match policy {
        LoadPolicy::Append => existing_rows,
        LoadPolicy::Overwrite => Vec::new(),
    };

    let width = schema.len();
    for value in values {
        let mut row: Row = vec![Cell::Null; width];
        row[ordinal] = value.into_cell();
        rows.push(row);
    }

    Table::new(schema, rows)
}
