//! Shape descriptor types and the record trait

use crate::error::Result;
use crate::types::{Cell, StorageType};
use serde::Serialize;

/// Declared type of a record field
///
/// This is what schema discovery resolves against. `Complex` covers anything
/// that cannot be flattened into a scalar column: nested objects,
/// collections, arbitrary reference types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredType {
    /// A built-in scalar
    Scalar(StorageType),
    /// An optional/wrapped form of another declared type
    Optional(Box<DeclaredType>),
    /// Not representable in a flat row
    Complex,
}

impl DeclaredType {
    /// Shorthand for an optional scalar
    pub fn optional(storage: StorageType) -> Self {
        DeclaredType::Optional(Box::new(DeclaredType::Scalar(storage)))
    }
}

/// One named, typed field of a record shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field name, the lookup key within a schema
    pub name: &'static str,
    /// Declared type, resolved at discovery time
    pub declared: DeclaredType,
}

/// The set of named, typed fields a record type exposes for flattening
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shape {
    type_name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl Shape {
    /// Create an empty shape for the named type
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: Vec::new(),
        }
    }

    /// Add a field
    #[must_use]
    pub fn field(mut self, name: &'static str, declared: DeclaredType) -> Self {
        self.fields.push(FieldDescriptor { name, declared });
        self
    }

    /// Name of the type this shape describes
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

/// A record that can be shredded into a flat row
///
/// Implementations supply a shape descriptor per concrete type and a getter
/// for each named field. A sequence whose instances all share the declared
/// type only needs [`Record::shape`]; a closed union of shapes additionally
/// overrides [`Record::runtime_shape`] per variant.
pub trait Record {
    /// Shape of the declared element type
    fn shape() -> Shape;

    /// Shape of this instance's concrete runtime type
    ///
    /// Defaults to the declared shape. A derived/variant instance returns its
    /// own shape (with a distinct type name) so the shredder can extend the
    /// schema before extraction.
    fn runtime_shape(&self) -> Shape {
        Self::shape()
    }

    /// Read the named field's value
    ///
    /// Returns `Cell::Null` for an absent optional value. An `Err` means the
    /// accessor itself failed; the whole shred pass aborts on it.
    fn field(&self, name: &str) -> Result<Cell>;
}
