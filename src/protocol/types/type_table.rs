//! TDS type code classification.
//!
//! Every known type code maps to one [`TypeEntry`] carrying its SQL name,
//! declaration keyword, family and scan type. Nullable scalars (INTN, FLTN,
//! MONEYN, DATETIMN) get one entry per legal width since their name depends
//! on it. Adding a type code means adding a row here.

use crate::protocol::constants::*;

use super::descriptor::DeclaredSize;
use super::scan_type::ScanType;

/// Family of a TDS type, deciding how size, precision and scale are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    /// Scalar whose length is implied by its name.
    FixedScalar,
    /// Character data. `wide` marks UCS-2 families, `fixed` CHAR/NCHAR.
    Character { wide: bool, fixed: bool },
    /// Binary data. `fixed` marks BINARY.
    Binary { fixed: bool },
    /// Legacy large object with a fixed maximum length.
    LargeObject { max_length: i64 },
    /// DECIMAL/NUMERIC with out-of-band precision and scale.
    PrecisionNumeric,
    /// TIME/DATETIME2/DATETIMEOFFSET with a fractional-second scale.
    ScaledTemporal,
    /// CLR user-defined type, identified by name.
    UserDefined,
    /// Unrecognized type code.
    Unknown,
}

/// One row of the classification table.
#[derive(Debug, PartialEq, Eq)]
pub struct TypeEntry {
    /// TDS type code.
    pub code: u8,
    /// Required byte width for nullable scalars, `None` if any size matches.
    pub width: Option<u32>,
    /// Canonical uppercase SQL name.
    pub name: &'static str,
    /// Lowercase declaration keyword.
    pub keyword: &'static str,
    /// Type family.
    pub family: TypeFamily,
    /// Runtime representation, `None` if the caller must inspect further.
    pub scan: Option<ScanType>,
}

const fn entry(
    code: u8,
    name: &'static str,
    keyword: &'static str,
    family: TypeFamily,
    scan: Option<ScanType>,
) -> TypeEntry {
    TypeEntry {
        code,
        width: None,
        name,
        keyword,
        family,
        scan,
    }
}

const fn sized(
    code: u8,
    width: u32,
    name: &'static str,
    keyword: &'static str,
    scan: ScanType,
) -> TypeEntry {
    TypeEntry {
        code,
        width: Some(width),
        name,
        keyword,
        family: TypeFamily::FixedScalar,
        scan: Some(scan),
    }
}

use ScanType::*;
use TypeFamily::*;

const CHAR: TypeFamily = Character { wide: false, fixed: true };
const VARCHAR: TypeFamily = Character { wide: false, fixed: false };
const NCHAR: TypeFamily = Character { wide: true, fixed: true };
const NVARCHAR: TypeFamily = Character { wide: true, fixed: false };
const BINARY: TypeFamily = Binary { fixed: true };
const VARBINARY: TypeFamily = Binary { fixed: false };

const TEXT: TypeFamily = LargeObject { max_length: TDS_MAX_LENGTH_TEXT };
const NTEXT: TypeFamily = LargeObject { max_length: TDS_MAX_LENGTH_NTEXT };
const XML: TypeFamily = LargeObject { max_length: TDS_MAX_LENGTH_XML };

static TYPE_TABLE: &[TypeEntry] = &[
    // Fixed-length scalars
    entry(TDS_TYPE_INT1, "TINYINT", "tinyint", FixedScalar, Some(Int64)),
    entry(TDS_TYPE_BIT, "BIT", "bit", FixedScalar, Some(Bool)),
    entry(TDS_TYPE_INT2, "SMALLINT", "smallint", FixedScalar, Some(Int64)),
    entry(TDS_TYPE_INT4, "INT", "int", FixedScalar, Some(Int64)),
    entry(TDS_TYPE_INT8, "BIGINT", "bigint", FixedScalar, Some(Int64)),
    entry(TDS_TYPE_FLT4, "REAL", "real", FixedScalar, Some(Float64)),
    entry(TDS_TYPE_FLT8, "FLOAT", "float", FixedScalar, Some(Float64)),
    entry(TDS_TYPE_DATETIME, "DATETIME", "datetime", FixedScalar, Some(Timestamp)),
    entry(
        TDS_TYPE_DATETIM4,
        "SMALLDATETIME",
        "smalldatetime",
        FixedScalar,
        Some(Timestamp),
    ),
    entry(TDS_TYPE_MONEY, "MONEY", "money", FixedScalar, Some(Bytes)),
    entry(TDS_TYPE_MONEY4, "SMALLMONEY", "smallmoney", FixedScalar, Some(Bytes)),
    entry(TDS_TYPE_BITN, "BIT", "bit", FixedScalar, Some(Bool)),
    entry(
        TDS_TYPE_GUID,
        "UNIQUEIDENTIFIER",
        "uniqueidentifier",
        FixedScalar,
        Some(Bytes),
    ),
    entry(TDS_TYPE_DATEN, "DATE", "date", FixedScalar, Some(Date)),
    entry(TDS_TYPE_SSVARIANT, "SQL_VARIANT", "sql_variant", FixedScalar, None),
    // Nullable scalars, named by width
    sized(TDS_TYPE_INTN, 1, "TINYINT", "tinyint", Int64),
    sized(TDS_TYPE_INTN, 2, "SMALLINT", "smallint", Int64),
    sized(TDS_TYPE_INTN, 4, "INT", "int", Int64),
    sized(TDS_TYPE_INTN, 8, "BIGINT", "bigint", Int64),
    sized(TDS_TYPE_FLTN, 4, "REAL", "real", Float64),
    sized(TDS_TYPE_FLTN, 8, "FLOAT", "float", Float64),
    sized(TDS_TYPE_MONEYN, 4, "SMALLMONEY", "smallmoney", Bytes),
    sized(TDS_TYPE_MONEYN, 8, "MONEY", "money", Bytes),
    sized(TDS_TYPE_DATETIMN, 4, "SMALLDATETIME", "smalldatetime", Timestamp),
    sized(TDS_TYPE_DATETIMN, 8, "DATETIME", "datetime", Timestamp),
    // Precision/scale numerics
    entry(TDS_TYPE_DECIMAL, "DECIMAL", "decimal", PrecisionNumeric, Some(Bytes)),
    entry(TDS_TYPE_DECIMALN, "DECIMAL", "decimal", PrecisionNumeric, Some(Bytes)),
    entry(TDS_TYPE_NUMERIC, "NUMERIC", "numeric", PrecisionNumeric, Some(Bytes)),
    entry(TDS_TYPE_NUMERICN, "NUMERIC", "numeric", PrecisionNumeric, Some(Bytes)),
    // Date/time with fractional seconds
    entry(TDS_TYPE_TIMEN, "TIME", "time", ScaledTemporal, Some(Time)),
    entry(
        TDS_TYPE_DATETIME2N,
        "DATETIME2",
        "datetime2",
        ScaledTemporal,
        Some(Timestamp),
    ),
    entry(
        TDS_TYPE_DATETIMEOFFSETN,
        "DATETIMEOFFSET",
        "datetimeoffset",
        ScaledTemporal,
        Some(TimestampTz),
    ),
    // Character
    entry(TDS_TYPE_CHAR, "CHAR", "char", CHAR, Some(Text)),
    entry(TDS_TYPE_VARCHAR, "VARCHAR", "varchar", VARCHAR, Some(Text)),
    entry(TDS_TYPE_BIGCHAR, "CHAR", "char", CHAR, Some(Text)),
    entry(TDS_TYPE_BIGVARCHR, "VARCHAR", "varchar", VARCHAR, Some(Text)),
    entry(TDS_TYPE_NCHAR, "NCHAR", "nchar", NCHAR, Some(Text)),
    entry(TDS_TYPE_NVARCHAR, "NVARCHAR", "nvarchar", NVARCHAR, Some(Text)),
    // Binary
    entry(TDS_TYPE_BINARY, "BINARY", "binary", BINARY, Some(Bytes)),
    entry(TDS_TYPE_VARBINARY, "VARBINARY", "varbinary", VARBINARY, Some(Bytes)),
    entry(TDS_TYPE_BIGBINARY, "BINARY", "binary", BINARY, Some(Bytes)),
    entry(TDS_TYPE_BIGVARBIN, "VARBINARY", "varbinary", VARBINARY, Some(Bytes)),
    // Legacy large objects
    entry(TDS_TYPE_TEXT, "TEXT", "text", TEXT, Some(Text)),
    entry(TDS_TYPE_NTEXT, "NTEXT", "ntext", NTEXT, Some(Text)),
    entry(TDS_TYPE_IMAGE, "IMAGE", "image", TEXT, Some(Bytes)),
    entry(TDS_TYPE_XML, "XML", "xml", XML, Some(Text)),
    // Named by UDT_INFO
    entry(TDS_TYPE_UDT, "", "", UserDefined, None),
];

/// Find the table entry for a type code and declared size.
///
/// Returns `None` for unknown codes and for nullable scalars whose size is
/// not a legal width.
pub fn lookup(code: u8, size: DeclaredSize) -> Option<&'static TypeEntry> {
    TYPE_TABLE.iter().find(|e| {
        e.code == code
            && e.width.map_or(true, |w| size == DeclaredSize::Bounded(w))
    })
}
