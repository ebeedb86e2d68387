//! Error types for the TDS column type resolver.

use thiserror::Error;

/// Result type alias for column metadata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for column metadata operations.
///
/// The type resolvers themselves never fail; these errors come from the
/// column layer when a caller needs something the resolvers could not
/// provide.
#[derive(Error, Debug)]
pub enum Error {
    /// Column has a type code with no known declaration.
    #[error("Unsupported TDS data type {type_code:#04x} in column {column}")]
    UnsupportedType { column: String, type_code: u8 },

    /// Column not found.
    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },
}

impl Error {
    /// Create an unsupported type error.
    pub fn unsupported_type(column: impl Into<String>, type_code: u8) -> Self {
        Self::UnsupportedType {
            column: column.into(),
            type_code,
        }
    }
}
