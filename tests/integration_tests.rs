//! Integration tests: full end-to-end flow
//!
//! Record sequence → shred → populated-column mapping → Arrow batch,
//! the way a bulk-load pipeline consumes the crate.

use chrono::{DateTime, TimeZone, Utc};
use rowshred::output::{table_to_arrow, table_to_arrow_mapped};
use rowshred::{
    shred_scalars, Cell, DeclaredType, Error, Record, Result, Shape, Shredder, StorageType,
};
use uuid::Uuid;

// ============================================================================
// Audit log records
// ============================================================================

#[derive(Clone)]
struct LogEntry {
    id: i32,
    created_on: DateTime<Utc>,
    user_id: Option<Uuid>,
    action: Option<String>,
    response_code: i16,
    elapsed_ms: i64,
    notification: Option<String>,
}

impl Record for LogEntry {
    fn shape() -> Shape {
        Shape::new("LogEntry")
            .field("Id", DeclaredType::Scalar(StorageType::Int32))
            .field("CreatedOn", DeclaredType::Scalar(StorageType::Timestamp))
            .field("UserId", DeclaredType::optional(StorageType::Uuid))
            .field("Action", DeclaredType::Scalar(StorageType::Text))
            .field("ResponseCode", DeclaredType::Scalar(StorageType::Int16))
            .field("ElapsedMilliseconds", DeclaredType::Scalar(StorageType::Int64))
            .field("Notification", DeclaredType::Scalar(StorageType::Text))
    }

    fn field(&self, name: &str) -> Result<Cell> {
        match name {
            "Id" => Ok(Cell::Int32(self.id)),
            "CreatedOn" => Ok(Cell::Timestamp(self.created_on)),
            "UserId" => Ok(Cell::from(self.user_id)),
            "Action" => Ok(Cell::from(self.action.clone())),
            "ResponseCode" => Ok(Cell::Int16(self.response_code)),
            "ElapsedMilliseconds" => Ok(Cell::Int64(self.elapsed_ms)),
            "Notification" => Ok(Cell::from(self.notification.clone())),
            other => Err(Error::malformed(other, "unknown field")),
        }
    }
}

fn log_entries() -> Vec<LogEntry> {
    let user = Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap();
    vec![
        LogEntry {
            id: 1,
            created_on: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
            user_id: Some(user),
            action: Some("GetQuery".to_string()),
            response_code: 200,
            elapsed_ms: 41,
            notification: None,
        },
        LogEntry {
            id: 2,
            created_on: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 5).unwrap(),
            user_id: None,
            action: Some("ExecuteAction".to_string()),
            response_code: 500,
            elapsed_ms: 1203,
            notification: None,
        },
        LogEntry {
            id: 3,
            created_on: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 9).unwrap(),
            user_id: Some(user),
            action: None,
            response_code: 200,
            elapsed_ms: 17,
            notification: None,
        },
    ]
}

// ============================================================================
// End-to-end pipeline
// ============================================================================

#[test]
fn test_shred_map_and_convert() {
    let mut shredder = Shredder::new();
    let table = shredder.shred(log_entries()).unwrap();

    assert_eq!(table.num_rows(), 3);
    assert_eq!(table.num_columns(), 7);
    assert_eq!(table.schema().name, "LogEntry");

    // Ordinals follow shape declaration order.
    let names: Vec<_> = table
        .schema()
        .columns()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Id",
            "CreatedOn",
            "UserId",
            "Action",
            "ResponseCode",
            "ElapsedMilliseconds",
            "Notification"
        ]
    );

    // Notification stayed null across every record and drops out of the
    // mapping; UserId was populated once and stays in.
    let mapping = shredder.export_column_mapping().unwrap();
    assert!(mapping.contains(&"UserId".to_string()));
    assert!(!mapping.contains(&"Notification".to_string()));
    assert_eq!(mapping.len(), 6);

    let full = table_to_arrow(&table).unwrap();
    assert_eq!(full.num_columns(), 7);

    let projected = table_to_arrow_mapped(&table, &mapping).unwrap();
    assert_eq!(projected.num_columns(), 6);
    assert_eq!(projected.num_rows(), 3);
    assert!(projected.column_by_name("Notification").is_none());
}

#[test]
fn test_table_json_export() {
    let mut shredder = Shredder::new();
    let table = shredder.shred(log_entries()).unwrap();

    let json = table.to_json_pretty();
    assert!(json.contains("\"LogEntry\""));
    assert!(json.contains("\"CreatedOn\""));
}

#[test]
fn test_mapping_before_shredding_fails_loud() {
    let shredder: Shredder<LogEntry> = Shredder::new();
    let err = shredder.export_column_mapping().unwrap_err();
    assert!(matches!(err, Error::Precheck { .. }));
    assert!(err.to_string().contains("precheck"));
}

#[test]
fn test_scalar_sequence_end_to_end() {
    let table = shred_scalars(vec![10_i64, 20, 30]);
    let batch = table_to_arrow(&table).unwrap();

    assert_eq!(batch.num_columns(), 1);
    assert_eq!(batch.num_rows(), 3);
    assert!(batch.column_by_name("Value").is_some());
}
