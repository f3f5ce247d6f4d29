//! Scalar element types for the primitive-sequence bypass

use crate::types::{Cell, StorageType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A plain scalar that can be loaded as a single `Value` column
///
/// Sequences of these bypass schema discovery entirely: there are no named
/// fields to discover, so the shredder builds a one-column table directly.
pub trait Scalar {
    /// Storage type of the `Value` column
    const STORAGE: StorageType;

    /// Whether an element can be absent
    const NULLABLE: bool = false;

    /// Convert the element into a cell
    fn into_cell(self) -> Cell;
}

macro_rules! impl_scalar {
    ($($native:ty => $storage:ident),* $(,)?) => {
        $(
            impl Scalar for $native {
                const STORAGE: StorageType = StorageType::$storage;

                fn into_cell(self) -> Cell {
                    Cell::from(self)
                }
            }
        )*
    };
}

impl_scalar! {
    bool => Boolean,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f64 => Float64,
    Decimal => Decimal,
    DateTime<Utc> => Timestamp,
    Uuid => Uuid,
}

// Text is nullable by convention, matching column resolution.
impl Scalar for String {
    const STORAGE: StorageType = StorageType::Text;
    const NULLABLE: bool = true;

    fn into_cell(self) -> Cell {
        Cell::Text(self)
    }
}

impl<T: Scalar> Scalar for Option<T> {
    const STORAGE: StorageType = T::STORAGE;
    const NULLABLE: bool = true;

    fn into_cell(self) -> Cell {
        self.map_or(Cell::Null, Scalar::into_cell)
    }
}
