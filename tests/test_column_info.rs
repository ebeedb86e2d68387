//! Integration tests for column descriptors built from COLMETADATA.

use tds_typeinfo::protocol::constants::*;
use tds_typeinfo::{
    ColumnInfo, ColumnMetadata, DeclaredSize, Error, ScanType, TypeDescriptor,
};

fn staging_metadata() -> Vec<ColumnMetadata> {
    vec![
        ColumnMetadata::new(
            "id",
            false,
            TypeDescriptor::new(TDS_TYPE_INTN, DeclaredSize::Bounded(8)),
        ),
        ColumnMetadata::new("name", true, TypeDescriptor::from_wire(TDS_TYPE_NVARCHAR, 100)),
        ColumnMetadata::new(
            "amount",
            true,
            TypeDescriptor::new(TDS_TYPE_DECIMALN, DeclaredSize::Bounded(9))
                .with_precision_scale(18, 2),
        ),
        ColumnMetadata::new(
            "created_at",
            false,
            TypeDescriptor::new(TDS_TYPE_DATETIME2N, DeclaredSize::Bounded(8)).with_scale(7),
        ),
        ColumnMetadata::new("payload", true, TypeDescriptor::from_wire(TDS_TYPE_BIGVARBIN, 0xFFFF)),
        ColumnMetadata::new("shape", true, TypeDescriptor::user_defined(TDS_TYPE_UDT, "geography")),
    ]
}

#[test]
fn test_columns_capture_resolver_outputs() {
    let info = ColumnInfo::from_metadata(&staging_metadata());
    assert_eq!(info.len(), 6);

    let id = info.column("ID").unwrap();
    assert_eq!(id.type_name, "BIGINT");
    assert_eq!(id.scan_type, Some(ScanType::Int64));
    assert_eq!(id.length(), None);

    let amount = info.column("amount").unwrap();
    assert_eq!(amount.type_name, "DECIMAL");
    assert_eq!(amount.precision_scale(), Some((18, 2)));
    assert_eq!(amount.scan_type, Some(ScanType::Bytes));

    let payload = info.column("payload").unwrap();
    assert_eq!(payload.length(), Some(2_147_483_645));
    assert_eq!(payload.declaration, "varbinary(max)");

    let shape = info.column("shape").unwrap();
    assert_eq!(shape.type_name, "GEOGRAPHY");
    assert_eq!(shape.scan_type, None);
}

#[test]
fn test_table_definition() {
    let info = ColumnInfo::from_metadata(&staging_metadata());
    assert_eq!(
        info.table_definition().unwrap(),
        "[id] bigint NOT NULL, [name] nvarchar(50) NULL, [amount] decimal(18, 2) NULL, \
         [created_at] datetime2(7) NOT NULL, [payload] varbinary(max) NULL, \
         [shape] geography NULL"
    );
}

#[test]
fn test_table_definition_unsupported_type() {
    let mut metadata = staging_metadata();
    metadata.push(ColumnMetadata::new(
        "mystery",
        true,
        TypeDescriptor::new(0xFF, DeclaredSize::default()),
    ));
    let info = ColumnInfo::from_metadata(&metadata);

    let col = info.column("mystery").unwrap();
    assert_eq!(col.type_name, "UNHANDLED");
    assert_eq!(col.declaration, "");

    match info.table_definition() {
        Err(Error::UnsupportedType { column, type_code }) => {
            assert_eq!(column, "mystery");
            assert_eq!(type_code, 0xFF);
        }
        other => panic!("Expected UnsupportedType error, got {:?}", other),
    }
}

#[test]
fn test_empty_column_info() {
    let info = ColumnInfo::from_metadata(&[]);
    assert!(info.is_empty());
    assert_eq!(info.table_definition().unwrap(), "");
    assert!(matches!(info.column("x"), Err(Error::ColumnNotFound { .. })));
}
