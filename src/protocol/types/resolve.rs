//! Column type resolvers.
//!
//! Five independent views of a [`TypeDescriptor`], all driven by the
//! classification table. None of them fail: unrecognized type codes get
//! fallback values so result processing can continue on servers newer than
//! this client.

use crate::protocol::constants::{TDS_MAX_LENGTH_NARROW, TDS_MAX_LENGTH_WIDE};

use super::descriptor::{DeclaredSize, TypeDescriptor};
use super::scan_type::ScanType;
use super::type_table::TypeFamily;

/// Type name reported for unrecognized type codes.
pub const UNHANDLED_TYPE_NAME: &str = "UNHANDLED";

impl TypeDescriptor {
    /// Get the runtime representation a decoder will produce.
    ///
    /// `None` means the caller must inspect the column further (user-defined
    /// types, SQL_VARIANT, unknown codes).
    pub fn scan_type(&self) -> Option<ScanType> {
        self.entry().and_then(|e| e.scan)
    }

    /// Get the canonical uppercase SQL type name.
    pub fn type_name(&self) -> String {
        let Some(entry) = self.entry() else {
            return UNHANDLED_TYPE_NAME.to_string();
        };
        match (entry.family, &self.udt) {
            (TypeFamily::UserDefined, Some(udt)) => udt.type_name.to_uppercase(),
            (TypeFamily::UserDefined | TypeFamily::Unknown, _) => UNHANDLED_TYPE_NAME.to_string(),
            _ => entry.name.to_string(),
        }
    }

    /// Get `(length, is_variable_length)`.
    ///
    /// Lengths are in characters for wide character families and bytes
    /// otherwise. `(max)` columns report the family maximum.
    pub fn length(&self) -> (i64, bool) {
        let Some(entry) = self.entry() else {
            return (0, false);
        };
        match (entry.family, self.size) {
            (TypeFamily::Character { wide: true, .. }, DeclaredSize::Unbounded) => {
                (TDS_MAX_LENGTH_WIDE, true)
            }
            (
                TypeFamily::Character { wide: false, .. } | TypeFamily::Binary { .. },
                DeclaredSize::Unbounded,
            ) => (TDS_MAX_LENGTH_NARROW, true),
            (
                TypeFamily::Character { .. } | TypeFamily::Binary { .. },
                DeclaredSize::Bounded(n),
            ) => (i64::from(n), true),
            (TypeFamily::LargeObject { max_length }, _) => (max_length, true),
            (
                TypeFamily::FixedScalar
                | TypeFamily::PrecisionNumeric
                | TypeFamily::ScaledTemporal
                | TypeFamily::UserDefined
                | TypeFamily::Unknown,
                _,
            ) => (0, false),
        }
    }

    /// Get `(precision, scale, is_variable_length)`.
    pub fn precision_scale(&self) -> (i64, i64, bool) {
        match self.family() {
            TypeFamily::PrecisionNumeric => {
                (i64::from(self.precision), i64::from(self.scale), true)
            }
            TypeFamily::FixedScalar
            | TypeFamily::Character { .. }
            | TypeFamily::Binary { .. }
            | TypeFamily::LargeObject { .. }
            | TypeFamily::ScaledTemporal
            | TypeFamily::UserDefined
            | TypeFamily::Unknown => (0, 0, false),
        }
    }

    /// Get a declaration suitable for redeclaring the column.
    ///
    /// Sizes are forwarded as stored. Wide character sizes must already be
    /// character counts (see [`TypeDescriptor::from_wire`]). Returns an
    /// empty string when no declaration is available.
    pub fn declaration(&self) -> String {
        let Some(entry) = self.entry() else {
            return String::new();
        };
        match entry.family {
            TypeFamily::Character { .. } | TypeFamily::Binary { .. } => match self.size.bounded() {
                Some(n) => format!("{}({})", entry.keyword, n),
                None => format!("{}(max)", entry.keyword),
            },
            TypeFamily::PrecisionNumeric => {
                format!("{}({}, {})", entry.keyword, self.precision, self.scale)
            }
            TypeFamily::ScaledTemporal => format!("{}({})", entry.keyword, self.scale),
            TypeFamily::FixedScalar | TypeFamily::LargeObject { .. } => entry.keyword.to_string(),
            TypeFamily::UserDefined => self
                .udt
                .as_ref()
                .map(|udt| udt.type_name.clone())
                .unwrap_or_default(),
            TypeFamily::Unknown => String::new(),
        }
    }
}
