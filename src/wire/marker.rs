//! Wire marker byte constants.
//!
//! Shared with the MessagePack marker space: the envelope reads as a
//! two-element array of a uint32 checksum and a fixarray of values.

// Frame envelope
pub const FRAME: u8 = 0x92; // fixarray(2)
pub const CHECKSUM: u8 = 0xCE; // uint32, same byte as UINT32 below

// Boolean
pub const FALSE: u8 = 0xC2;
pub const TRUE: u8 = 0xC3;

// Unsigned integers
pub const UINT8: u8 = 0xCC;
pub const UINT16: u8 = 0xCD;
pub const UINT32: u8 = 0xCE;
pub const UINT64: u8 = 0xCF;

// Signed integers (two's complement)
pub const INT8: u8 = 0xD0;
pub const INT16: u8 = 0xD1;
pub const INT32: u8 = 0xD2;
pub const INT64: u8 = 0xD3;

// IEEE-754 floats
pub const FLOAT32: u8 = 0xCA;
pub const FLOAT64: u8 = 0xCB;

// FIXSTR: 0xA0..=0xAF, low nibble = byte length 0..15
pub const FIXSTR_NIBBLE: u8 = 0xA0;

// FIXARRAY: 0x90..=0x9F, low nibble = element count 0..15
pub const FIXARRAY_NIBBLE: u8 = 0x90;

/// Payload byte count that follows a value tag: 0 for the Bool tags, the
/// fixed width for scalars, the low nibble for FIXSTR. `None` for bytes
/// that are not TinyPack value tags.
pub fn payload_width(tag: u8) -> Option<u8> {
    match tag {
        FALSE | TRUE => Some(0),
        UINT8 | INT8 => Some(1),
        UINT16 | INT16 => Some(2),
        UINT32 | INT32 | FLOAT32 => Some(4),
        UINT64 | INT64 | FLOAT64 => Some(8),
        _ if tag & 0xF0 == FIXSTR_NIBBLE => Some(tag & 0x0F),
        _ => None,
    }
}
