//! TDS protocol definitions used by column metadata resolution.

pub mod constants;
pub mod types;

pub use types::{
    Column, ColumnInfo, ColumnMetadata, DeclaredSize, ScanType, TypeDescriptor, TypeFamily,
    UdtInfo,
};
