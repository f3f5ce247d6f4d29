//! Record shapes and value getters
//!
//! Replaces runtime reflection with a pluggable shape descriptor: a record
//! type exposes its list of (name, declared type) pairs plus a value getter,
//! via the [`Record`] trait. Heterogeneous sequences are modeled as closed
//! tagged unions whose variants override [`Record::runtime_shape`].

mod scalar;
mod types;

pub use scalar::Scalar;
pub use types::{DeclaredType, FieldDescriptor, Record, Shape};

#[cfg(test)]
mod tests;
