//! Column and ColumnInfo types for user-facing API.
//!
//! A `Column` captures the resolver outputs for one result column once, so
//! column introspection never re-resolves the type descriptor.

use crate::error::{Error, Result};

use super::descriptor::TypeDescriptor;
use super::scan_type::ScanType;
use super::type_table::TypeFamily;

/// Column metadata as handed over by the COLMETADATA parser.
#[derive(Debug, Clone)]
pub struct ColumnMetadata {
    /// Column name.
    pub name: String,
    /// Whether NULL values are allowed.
    pub nullable: bool,
    /// Type descriptor.
    pub type_info: TypeDescriptor,
}

impl ColumnMetadata {
    /// Create new column metadata.
    pub fn new(name: impl Into<String>, nullable: bool, type_info: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            nullable,
            type_info,
        }
    }
}

/// A column in a result set (user-facing representation).
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Whether NULL values are allowed.
    pub nullable: bool,
    /// Raw TDS type code.
    pub type_code: u8,
    /// Canonical uppercase SQL type name.
    pub type_name: String,
    /// Runtime representation, `None` if undeterminable.
    pub scan_type: Option<ScanType>,
    /// Display length (characters or bytes).
    pub length: i64,
    /// Whether the length is variable.
    pub variable_length: bool,
    /// Numeric precision.
    pub precision: i64,
    /// Numeric scale.
    pub scale: i64,
    /// Whether precision and scale apply.
    pub has_precision_scale: bool,
    /// Declaration string, empty if unavailable.
    pub declaration: String,
}

impl Column {
    /// Create a column from metadata.
    pub fn from_metadata(meta: &ColumnMetadata) -> Self {
        let ti = &meta.type_info;
        if ti.family() == TypeFamily::Unknown {
            tracing::debug!(
                column = %meta.name,
                type_code = ti.type_code,
                "unrecognized TDS type; using fallback column metadata"
            );
        }

        let (length, variable_length) = ti.length();
        let (precision, scale, has_precision_scale) = ti.precision_scale();
        Self {
            name: meta.name.clone(),
            nullable: meta.nullable,
            type_code: ti.type_code,
            type_name: ti.type_name(),
            scan_type: ti.scan_type(),
            length,
            variable_length,
            precision,
            scale,
            has_precision_scale,
            declaration: ti.declaration(),
        }
    }

    /// Get the length if the type has a variable length.
    pub fn length(&self) -> Option<i64> {
        self.variable_length.then_some(self.length)
    }

    /// Get `(precision, scale)` if the type carries them.
    pub fn precision_scale(&self) -> Option<(i64, i64)> {
        self.has_precision_scale
            .then_some((self.precision, self.scale))
    }

    /// Get the column definition for a CREATE TABLE statement.
    ///
    /// Returns `Error::UnsupportedType` if the type has no declaration.
    pub fn definition(&self) -> Result<String> {
        if self.declaration.is_empty() {
            return Err(Error::unsupported_type(&self.name, self.type_code));
        }
        let null = if self.nullable { "NULL" } else { "NOT NULL" };
        Ok(format!(
            "{} {} {}",
            quote_identifier(&self.name),
            self.declaration,
            null
        ))
    }
}

/// Bracket-quote an identifier.
fn quote_identifier(name: &str) -> String {
    format!("[{}]", name.replace(']', "]]"))
}

/// Shared column information for all rows in a result set.
#[derive(Debug, Clone, Default)]
pub struct ColumnInfo {
    /// Column definitions.
    pub columns: Vec<Column>,
}

impl ColumnInfo {
    /// Create column info from COLMETADATA.
    pub fn from_metadata(metadata: &[ColumnMetadata]) -> Self {
        Self {
            columns: metadata.iter().map(Column::from_metadata).collect(),
        }
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get column by ordinal (0-based).
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Find column index by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        let name_upper = name.to_uppercase();
        self.columns
            .iter()
            .position(|c| c.name.to_uppercase() == name_upper)
    }

    /// Get column by name (case-insensitive).
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.find_by_name(name)
            .and_then(|idx| self.get(idx))
            .ok_or_else(|| Error::ColumnNotFound {
                name: name.to_string(),
            })
    }

    /// Build the column list of a staging table, e.g.
    /// `[id] int NOT NULL, [name] nvarchar(50) NULL`.
    ///
    /// Fails on the first column without a declaration.
    pub fn table_definition(&self) -> Result<String> {
        let defs = self
            .columns
            .iter()
            .map(Column::definition)
            .collect::<Result<Vec<_>>>()?;
        Ok(defs.join(", "))
    }
}
