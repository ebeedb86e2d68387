//! Runtime representations for decoded column values.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use std::any::type_name;
use std::fmt;

/// The representation a value decoder materializes for a column.
///
/// Integer families all widen to `Int64` and money stays as raw bytes so a
/// higher-precision decoder can handle it downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanType {
    /// `i64`.
    Int64,
    /// `f64`.
    Float64,
    /// `bool`.
    Bool,
    /// `String`.
    Text,
    /// `chrono::NaiveDateTime` (no implied timezone).
    Timestamp,
    /// `chrono::DateTime<FixedOffset>`.
    TimestampTz,
    /// `chrono::NaiveDate`.
    Date,
    /// `chrono::NaiveTime`.
    Time,
    /// `Vec<u8>`.
    Bytes,
}

impl ScanType {
    /// Get the fully qualified Rust type this representation decodes into.
    pub fn rust_type_name(&self) -> &'static str {
        match self {
            ScanType::Int64 => type_name::<i64>(),
            ScanType::Float64 => type_name::<f64>(),
            ScanType::Bool => type_name::<bool>(),
            ScanType::Text => type_name::<String>(),
            ScanType::Timestamp => type_name::<NaiveDateTime>(),
            ScanType::TimestampTz => type_name::<DateTime<FixedOffset>>(),
            ScanType::Date => type_name::<NaiveDate>(),
            ScanType::Time => type_name::<NaiveTime>(),
            ScanType::Bytes => type_name::<Vec<u8>>(),
        }
    }

    /// Check if this is one of the temporal representations.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            ScanType::Timestamp | ScanType::TimestampTz | ScanType::Date | ScanType::Time
        )
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanType::Int64 => "int64",
            ScanType::Float64 => "float64",
            ScanType::Bool => "bool",
            ScanType::Text => "text",
            ScanType::Timestamp => "timestamp",
            ScanType::TimestampTz => "timestamptz",
            ScanType::Date => "date",
            ScanType::Time => "time",
            ScanType::Bytes => "bytes",
        };
        write!(f, "{}", name)
    }
}
