//! Record shape tests

use super::*;
use crate::error::{Error, Result};
use crate::types::{Cell, StorageType};
use pretty_assertions::assert_eq;

struct Sample {
    id: i32,
    label: Option<String>,
}

impl Record for Sample {
    fn shape() -> Shape {
        Shape::new("Sample")
            .field("Id", DeclaredType::Scalar(StorageType::Int32))
            .field("Label", DeclaredType::Scalar(StorageType::Text))
    }

    fn field(&self, name: &str) -> Result<Cell> {
        match name {
            "Id" => Ok(Cell::Int32(self.id)),
            "Label" => Ok(Cell::from(self.label.clone())),
            other => Err(Error::malformed(other, "unknown field")),
        }
    }
}

#[test]
fn test_shape_builder_preserves_order() {
    let shape = Sample::shape();
    assert_eq!(shape.type_name(), "Sample");
    let names: Vec<_> = shape.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["Id", "Label"]);
}

#[test]
fn test_runtime_shape_defaults_to_declared() {
    let sample = Sample {
        id: 1,
        label: None,
    };
    assert_eq!(sample.runtime_shape(), Sample::shape());
}

#[test]
fn test_field_getter() {
    let sample = Sample {
        id: 7,
        label: Some("seven".to_string()),
    };
    assert_eq!(sample.field("Id").unwrap(), Cell::Int32(7));
    assert_eq!(sample.field("Label").unwrap(), Cell::Text("seven".to_string()));
    assert!(sample.field("Nope").is_err());
}

#[test]
fn test_optional_shorthand() {
    assert_eq!(
        DeclaredType::optional(StorageType::Int64),
        DeclaredType::Optional(Box::new(DeclaredType::Scalar(StorageType::Int64)))
    );
}

#[test]
fn test_scalar_constants() {
    assert_eq!(i64::STORAGE, StorageType::Int64);
    assert!(!i64::NULLABLE);
    assert!(<Option<i32>>::NULLABLE);
    assert!(String::NULLABLE);
    assert_eq!(<Option<i32>>::STORAGE, StorageType::Int32);
}

#[test]
fn test_scalar_into_cell() {
    assert_eq!(3_i16.into_cell(), Cell::Int16(3));
    assert_eq!(Some(true).into_cell(), Cell::Boolean(true));
    assert_eq!(None::<f64>.into_cell(), Cell::Null);
}
