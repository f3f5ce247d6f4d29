//! Table to Arrow RecordBatch conversion

use crate::error::{Error, Result};
use crate::schema::ColumnDescriptor;
use crate::shred::Table;
use crate::types::{Cell, StorageType};
use arrow::array::{
    ArrayRef, BooleanArray, Float64Array, Int16Array, Int32Array, Int64Array, StringArray,
    TimestampMicrosecondArray,
};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Convert a table to an Arrow RecordBatch, one array per column
pub fn table_to_arrow(table: &Table) -> Result<RecordBatch> {
    let columns: Vec<&ColumnDescriptor> = table.schema().columns().iter().collect();
    build_batch(table, &columns)
}

/// Convert a table to an Arrow RecordBatch projected to a column mapping
///
/// The mapping is typically the populated-column list from
/// [`Shredder::export_column_mapping`](crate::shred::Shredder::export_column_mapping);
/// all-null columns the sink should never see are simply absent from the
/// batch.
pub fn table_to_arrow_mapped(table: &Table, mapping: &[String]) -> Result<RecordBatch> {
    let mut columns = Vec::with_capacity(mapping.len());
    for name in mapping {
        let column = table
            .schema()
            .column(name)
            .ok_or_else(|| Error::output(format!("mapped column '{name}' not in schema")))?;
        columns.push(column);
    }
    build_batch(table, &columns)
}

fn build_batch(table: &Table, columns: &[&ColumnDescriptor]) -> Result<RecordBatch> {
    let mut fields = Vec::with_capacity(columns.len());
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(columns.len());

    for column in columns {
        // Rows materialized before a column was discovered read as null, so
        // every Arrow field is nullable regardless of column metadata.
        fields.push(Field::new(&column.name, arrow_type(column.storage_type), true));
        arrays.push(build_array(table, column)?);
    }

    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?;
    Ok(batch)
}

/// Map a storage type to its Arrow data type
///
/// Decimal and uuid values are rendered as strings rather than forced into
/// width-parameterized Arrow types.
fn arrow_type(storage: StorageType) -> DataType {
    match storage {
        StorageType::Boolean => DataType::Boolean,
        StorageType::Int16 => DataType::Int16,
        StorageType::Int32 => DataType::Int32,
        StorageType::Int64 => DataType::Int64,
        StorageType::Float64 => DataType::Float64,
        StorageType::Timestamp => DataType::Timestamp(TimeUnit::Microsecond, Some("UTC".into())),
        StorageType::Decimal | StorageType::Uuid | StorageType::Text => DataType::Utf8,
    }
}

fn type_clash(column: &ColumnDescriptor, cell: &Cell) -> Error {
    Error::output(format!(
        "column '{}' holds {} but a row supplied {:?}",
        column.name, column.storage_type, cell
    ))
}

fn build_array(table: &Table, column: &ColumnDescriptor) -> Result<ArrayRef> {
    let cells = || {
        table
            .rows()
            .iter()
            .map(|row| row.get(column.ordinal).unwrap_or(&Cell::Null))
    };

    macro_rules! primitive_array {
        ($variant:ident, $array:ty) => {{
            let mut values = Vec::with_capacity(table.num_rows());
            for cell in cells() {
                values.push(match cell {
                    Cell::Null => None,
                    Cell::$variant(v) => Some(*v),
                    other => return Err(type_clash(column, other)),
                });
            }
            Ok(Arc::new(<$array>::from(values)) as ArrayRef)
        }};
    }

    match column.storage_type {
        StorageType::Boolean => primitive_array!(Boolean, BooleanArray),
        StorageType::Int16 => primitive_array!(Int16, Int16Array),
        StorageType::Int32 => primitive_array!(Int32, Int32Array),
        StorageType::Int64 => primitive_array!(Int64, Int64Array),
        StorageType::Float64 => primitive_array!(Float64, Float64Array),

        StorageType::Timestamp => {
            let mut values = Vec::with_capacity(table.num_rows());
            for cell in cells() {
                values.push(match cell {
                    Cell::Null => None,
                    Cell::Timestamp(ts) => Some(ts.timestamp_micros()),
                    other => return Err(type_clash(column, other)),
                });
            }
            let array = TimestampMicrosecondArray::from(values).with_timezone("UTC");
            Ok(Arc::new(array) as ArrayRef)
        }

        StorageType::Decimal | StorageType::Uuid | StorageType::Text => {
            let mut values = Vec::with_capacity(table.num_rows());
            for cell in cells() {
                values.push(match cell {
                    Cell::Null => None,
                    Cell::Text(s) => Some(s.clone()),
                    Cell::Uuid(u) => Some(u.to_string()),
                    Cell::Decimal(d) => Some(d.to_string()),
                    other => return Err(type_clash(column, other)),
                });
            }
            Ok(Arc::new(StringArray::from(values)) as ArrayRef)
        }
    }
}
