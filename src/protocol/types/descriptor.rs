//! Per-column type descriptor from COLMETADATA.
//!
//! The metadata parser builds one `TypeDescriptor` per result column. The
//! `(max)` size sentinel and the UCS-2 byte-to-character scaling are both
//! resolved here, in `from_wire`, so the resolvers only ever see normalized
//! sizes.

use crate::protocol::constants::{TDS_MAX_SIZE_SENTINEL, TDS_WIDE_CHAR_BYTES};

use super::type_table::{self, TypeEntry, TypeFamily};

/// Declared size of a column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredSize {
    /// Bounded size. Characters for wide character families, bytes otherwise.
    Bounded(u32),
    /// `(max)` large-value column.
    Unbounded,
}

impl DeclaredSize {
    /// Get the bounded size, or `None` for `(max)` columns.
    pub fn bounded(&self) -> Option<u32> {
        match self {
            DeclaredSize::Bounded(n) => Some(*n),
            DeclaredSize::Unbounded => None,
        }
    }
}

impl Default for DeclaredSize {
    fn default() -> Self {
        DeclaredSize::Bounded(0)
    }
}

/// UDT_INFO carried by user-defined type columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdtInfo {
    /// Server-side type name as sent (e.g. `geography`).
    pub type_name: String,
}

/// Type descriptor for one result column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// TDS type code (raw wire format).
    pub type_code: u8,
    /// Declared size.
    pub size: DeclaredSize,
    /// Numeric precision (DECIMAL/NUMERIC only).
    pub precision: u8,
    /// Numeric or fractional-second scale.
    pub scale: u8,
    /// Present only for user-defined types.
    pub udt: Option<UdtInfo>,
}

impl TypeDescriptor {
    /// Create a descriptor from an already-normalized size.
    ///
    /// Wide character sizes must be given in characters.
    pub fn new(type_code: u8, size: DeclaredSize) -> Self {
        Self {
            type_code,
            size,
            ..Default::default()
        }
    }

    /// Create a descriptor from the raw TYPE_INFO size field.
    ///
    /// For variable-width character and binary families `0xFFFF` becomes
    /// [`DeclaredSize::Unbounded`]. Wide character byte counts are
    /// converted to character counts. Other families keep the raw value.
    pub fn from_wire(type_code: u8, raw_size: u32) -> Self {
        let family =
            type_table::lookup(type_code, DeclaredSize::Bounded(raw_size)).map(|e| e.family);
        let size = match family {
            Some(TypeFamily::Character { fixed: false, .. } | TypeFamily::Binary { fixed: false })
                if raw_size == TDS_MAX_SIZE_SENTINEL =>
            {
                DeclaredSize::Unbounded
            }
            Some(TypeFamily::Character { wide: true, .. }) => {
                DeclaredSize::Bounded(raw_size / TDS_WIDE_CHAR_BYTES)
            }
            _ => DeclaredSize::Bounded(raw_size),
        };
        Self::new(type_code, size)
    }

    /// Create a user-defined type descriptor.
    pub fn user_defined(type_code: u8, type_name: impl Into<String>) -> Self {
        Self {
            type_code,
            udt: Some(UdtInfo {
                type_name: type_name.into(),
            }),
            ..Default::default()
        }
    }

    /// Set precision and scale (DECIMAL/NUMERIC).
    pub fn with_precision_scale(mut self, precision: u8, scale: u8) -> Self {
        self.precision = precision;
        self.scale = scale;
        self
    }

    /// Set the fractional-second scale (TIME/DATETIME2/DATETIMEOFFSET).
    pub fn with_scale(mut self, scale: u8) -> Self {
        self.scale = scale;
        self
    }

    /// Get the classification table entry, if the type code is known.
    pub fn entry(&self) -> Option<&'static TypeEntry> {
        type_table::lookup(self.type_code, self.size)
    }

    /// Get the type family, [`TypeFamily::Unknown`] for unrecognized codes.
    pub fn family(&self) -> TypeFamily {
        self.entry().map_or(TypeFamily::Unknown, |e| e.family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::*;

    #[test]
    fn test_from_wire_sentinel() {
        let desc = TypeDescriptor::from_wire(TDS_TYPE_BIGVARCHR, 0xFFFF);
        assert_eq!(desc.size, DeclaredSize::Unbounded);

        let desc = TypeDescriptor::from_wire(TDS_TYPE_BIGVARBIN, 0xFFFF);
        assert_eq!(desc.size, DeclaredSize::Unbounded);

        let desc = TypeDescriptor::from_wire(TDS_TYPE_NVARCHAR, 0xFFFF);
        assert_eq!(desc.size, DeclaredSize::Unbounded);
    }

    #[test]
    fn test_from_wire_wide_scaling() {
        let desc = TypeDescriptor::from_wire(TDS_TYPE_NVARCHAR, 8000);
        assert_eq!(desc.size, DeclaredSize::Bounded(4000));

        let desc = TypeDescriptor::from_wire(TDS_TYPE_NCHAR, 20);
        assert_eq!(desc.size, DeclaredSize::Bounded(10));

        // Narrow families keep the byte count.
        let desc = TypeDescriptor::from_wire(TDS_TYPE_BIGVARCHR, 8000);
        assert_eq!(desc.size, DeclaredSize::Bounded(8000));
    }

    #[test]
    fn test_from_wire_non_character_keeps_raw() {
        // 0xFFFF is only a sentinel for character/binary families.
        let desc = TypeDescriptor::from_wire(0xFF, 0xFFFF);
        assert_eq!(desc.size, DeclaredSize::Bounded(0xFFFF));

        let desc = TypeDescriptor::from_wire(TDS_TYPE_INTN, 4);
        assert_eq!(desc.size, DeclaredSize::Bounded(4));
    }

    #[test]
    fn test_from_wire_fixed_width_has_no_max_form() {
        let desc = TypeDescriptor::from_wire(TDS_TYPE_BIGCHAR, 0xFFFF);
        assert_eq!(desc.size, DeclaredSize::Bounded(0xFFFF));
        assert_eq!(desc.declaration(), "char(65535)");

        let desc = TypeDescriptor::from_wire(TDS_TYPE_BIGBINARY, 0xFFFF);
        assert_eq!(desc.size, DeclaredSize::Bounded(0xFFFF));

        // Still scaled to characters.
        let desc = TypeDescriptor::from_wire(TDS_TYPE_NCHAR, 0xFFFF);
        assert_eq!(desc.size, DeclaredSize::Bounded(0x7FFF));
    }

    #[test]
    fn test_family() {
        assert_eq!(
            TypeDescriptor::new(TDS_TYPE_NVARCHAR, DeclaredSize::Bounded(10)).family(),
            TypeFamily::Character {
                wide: true,
                fixed: false
            }
        );
        assert_eq!(
            TypeDescriptor::user_defined(TDS_TYPE_UDT, "geography").family(),
            TypeFamily::UserDefined
        );
        assert_eq!(
            TypeDescriptor::new(0xFF, DeclaredSize::default()).family(),
            TypeFamily::Unknown
        );
        // INTN with an impossible width is not classifiable.
        assert_eq!(
            TypeDescriptor::new(TDS_TYPE_INTN, DeclaredSize::Bounded(3)).family(),
            TypeFamily::Unknown
        );
    }

    #[test]
    fn test_declared_size_bounded() {
        assert_eq!(DeclaredSize::Bounded(30).bounded(), Some(30));
        assert_eq!(DeclaredSize::Unbounded.bounded(), None);
    }
}
