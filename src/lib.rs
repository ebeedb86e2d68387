//! TDS column type metadata for Rust
//!
//! Resolves the per-column type descriptors a SQL Server sends in
//! COLMETADATA into what a driver exposes through column introspection: the
//! runtime representation, the SQL type name, length, precision and scale,
//! and a declaration string for redeclaring the column.
//!
//! # Example
//!
//! ```
//! use tds_typeinfo::protocol::constants::TDS_TYPE_NVARCHAR;
//! use tds_typeinfo::{ScanType, TypeDescriptor};
//!
//! // nvarchar(50) arrives as a 100-byte size field.
//! let ti = TypeDescriptor::from_wire(TDS_TYPE_NVARCHAR, 100);
//!
//! assert_eq!(ti.scan_type(), Some(ScanType::Text));
//! assert_eq!(ti.type_name(), "NVARCHAR");
//! assert_eq!(ti.length(), (50, true));
//! assert_eq!(ti.precision_scale(), (0, 0, false));
//! assert_eq!(ti.declaration(), "nvarchar(50)");
//! ```

pub mod error;
pub mod protocol;

// Re-export main types
pub use error::{Error, Result};
pub use protocol::types::{
    Column, ColumnInfo, ColumnMetadata, DeclaredSize, ScanType, TypeDescriptor, TypeEntry,
    TypeFamily, UdtInfo, UNHANDLED_TYPE_NAME,
};
