//! TDS protocol constants.
//!
//! Type codes are the one-byte identifiers sent in COLMETADATA TYPE_INFO.

// Fixed-length types
/// Untyped NULL. Not classified; resolves to the unknown-type fallbacks.
pub const TDS_TYPE_NULL: u8 = 0x1F;
pub const TDS_TYPE_INT1: u8 = 0x30;
pub const TDS_TYPE_BIT: u8 = 0x32;
pub const TDS_TYPE_INT2: u8 = 0x34;
pub const TDS_TYPE_INT4: u8 = 0x38;
pub const TDS_TYPE_DATETIM4: u8 = 0x3A;
pub const TDS_TYPE_FLT4: u8 = 0x3B;
pub const TDS_TYPE_MONEY: u8 = 0x3C;
pub const TDS_TYPE_DATETIME: u8 = 0x3D;
pub const TDS_TYPE_FLT8: u8 = 0x3E;
pub const TDS_TYPE_MONEY4: u8 = 0x7A;
pub const TDS_TYPE_INT8: u8 = 0x7F;

// Nullable scalars (BYTELEN width)
pub const TDS_TYPE_GUID: u8 = 0x24;
pub const TDS_TYPE_INTN: u8 = 0x26;
pub const TDS_TYPE_BITN: u8 = 0x68;
pub const TDS_TYPE_FLTN: u8 = 0x6D;
pub const TDS_TYPE_MONEYN: u8 = 0x6E;
pub const TDS_TYPE_DATETIMN: u8 = 0x6F;

// Precision/scale numerics
pub const TDS_TYPE_DECIMAL: u8 = 0x37;
pub const TDS_TYPE_NUMERIC: u8 = 0x3F;
pub const TDS_TYPE_DECIMALN: u8 = 0x6A;
pub const TDS_TYPE_NUMERICN: u8 = 0x6C;

// Date/time (SQL Server 2008+)
pub const TDS_TYPE_DATEN: u8 = 0x28;
pub const TDS_TYPE_TIMEN: u8 = 0x29;
pub const TDS_TYPE_DATETIME2N: u8 = 0x2A;
pub const TDS_TYPE_DATETIMEOFFSETN: u8 = 0x2B;

// Legacy byte-counted character/binary
pub const TDS_TYPE_VARBINARY: u8 = 0x25;
pub const TDS_TYPE_VARCHAR: u8 = 0x27;
pub const TDS_TYPE_BINARY: u8 = 0x2D;
pub const TDS_TYPE_CHAR: u8 = 0x2F;

// USHORTLEN character/binary
pub const TDS_TYPE_BIGVARBIN: u8 = 0xA5;
pub const TDS_TYPE_BIGVARCHR: u8 = 0xA7;
pub const TDS_TYPE_BIGBINARY: u8 = 0xAD;
pub const TDS_TYPE_BIGCHAR: u8 = 0xAF;
pub const TDS_TYPE_NVARCHAR: u8 = 0xE7;
pub const TDS_TYPE_NCHAR: u8 = 0xEF;

// Large objects and special types
pub const TDS_TYPE_IMAGE: u8 = 0x22;
pub const TDS_TYPE_TEXT: u8 = 0x23;
pub const TDS_TYPE_SSVARIANT: u8 = 0x62;
pub const TDS_TYPE_NTEXT: u8 = 0x63;
pub const TDS_TYPE_UDT: u8 = 0xF0;
pub const TDS_TYPE_XML: u8 = 0xF1;

/// Size value marking a `(max)` column in a USHORTLEN size field.
pub const TDS_MAX_SIZE_SENTINEL: u32 = 0xFFFF;

/// Bytes per character in wide (UCS-2) character families.
pub const TDS_WIDE_CHAR_BYTES: u32 = 2;

// Reported lengths for unbounded columns
pub const TDS_MAX_LENGTH_NARROW: i64 = 2_147_483_645;
pub const TDS_MAX_LENGTH_WIDE: i64 = TDS_MAX_LENGTH_NARROW / 2;
pub const TDS_MAX_LENGTH_TEXT: i64 = 2_147_483_647;
pub const TDS_MAX_LENGTH_NTEXT: i64 = 1_073_741_823;
pub const TDS_MAX_LENGTH_XML: i64 = 1_073_741_822;
