//! TDS column type metadata.

mod column;
mod descriptor;
mod resolve;
mod scan_type;
mod type_table;

pub use column::{Column, ColumnInfo, ColumnMetadata};
pub use descriptor::{DeclaredSize, TypeDescriptor, UdtInfo};
pub use resolve::UNHANDLED_TYPE_NAME;
pub use scan_type::ScanType;
pub use type_table::{TypeEntry, TypeFamily};
