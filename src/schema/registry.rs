//! On-demand column registration and occupancy tracking

use super::types::Schema;
use crate::error::{Error, Result};
use crate::record::{DeclaredType, Shape};
use crate::types::StorageType;
use tracing::debug;

/// Maps named, typed fields onto stable column ordinals
///
/// The registry exclusively owns its [`Schema`] and is not meant to be
/// shared between shredders: ordinal assignment is not synchronized.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schema: Schema,
}

impl SchemaRegistry {
    /// Create a registry with a new empty schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: Schema::new(name),
        }
    }

    /// Create a registry pre-seeded from an existing external schema
    ///
    /// Existing ordinals and occupancy flags are kept as-is.
    pub fn from_schema(schema: Schema) -> Self {
        Self { schema }
    }

    /// The schema built so far
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Consume the registry, returning its schema
    pub fn into_schema(self) -> Schema {
        self.schema
    }

    /// Extend the schema with every not-yet-known field of a shape
    ///
    /// A field whose declared type resolves to unsupported gets no column;
    /// this is deliberate data loss for non-scalar fields, logged rather
    /// than failed. If a name already exists the first-seen type wins and
    /// the later declaration is not re-validated.
    pub fn ensure_columns(&mut self, shape: &Shape) {
        for field in shape.fields() {
            if self.schema.contains(field.name) {
                continue;
            }
            match Self::resolve(&field.declared) {
                Some((storage_type, nullable)) => {
                    let ordinal = self.schema.add_column(field.name, storage_type, nullable);
                    debug!(
                        shape = shape.type_name(),
                        field = field.name,
                        %storage_type,
                        nullable,
                        ordinal,
                        "column added"
                    );
                }
                None => {
                    debug!(
                        shape = shape.type_name(),
                        field = field.name,
                        "skipping field with unsupported type"
                    );
                }
            }
        }
    }

    /// Resolve a declared field type to `(storage type, nullable)`
    ///
    /// Rules, in priority order: an optional form of a scalar resolves to
    /// the underlying scalar with `nullable=true`; text is always nullable;
    /// any other built-in scalar is non-nullable; everything else is
    /// unsupported and yields `None`.
    pub fn resolve(declared: &DeclaredType) -> Option<(StorageType, bool)> {
        match declared {
            DeclaredType::Optional(inner) => {
                Self::resolve(inner).map(|(storage, _)| (storage, true))
            }
            DeclaredType::Scalar(StorageType::Text) => Some((StorageType::Text, true)),
            DeclaredType::Scalar(storage) => Some((*storage, false)),
            DeclaredType::Complex => None,
        }
    }

    /// Record that the named column received a non-null value
    ///
    /// Unknown names are ignored; only discovered columns carry occupancy.
    pub fn mark_populated(&mut self, name: &str) {
        if let Some(column) = self.schema.column_mut(name) {
            column.ever_populated = true;
        }
    }

    /// Export the names of columns that ever received a non-null value
    ///
    /// Names come back in ordinal order. Fails if no column was ever
    /// populated: requesting a mapping before shredding anything would
    /// otherwise produce a silent no-op bulk load.
    pub fn export_populated_mapping(&self) -> Result<Vec<String>> {
        let mapping: Vec<String> = self
            .schema
            .columns()
            .iter()
            .filter(|c| c.ever_populated)
            .map(|c| c.name.clone())
            .collect();

        if mapping.is_empty() {
            return Err(Error::precheck(
                "no populated columns; shred a sequence before exporting a column mapping",
            ));
        }
        Ok(mapping)
    }
}
