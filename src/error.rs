//! Error types for the TinyPack codec.

/// Errors that can occur while packing or unpacking frames.
///
/// One-shot entry points surface these directly. The stream
/// [`Unpacker`](crate::stream::Unpacker) collapses all of them to a
/// "not ready" result and resynchronizes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    #[error("untyped value has no wire form")]
    Untyped,

    #[error("bool payload is 0x{0:02X}, expected 0 or 1")]
    BrokenBool(u8),

    #[error("string storage has no NUL terminator")]
    UnterminatedString,

    #[error("message holds {0} values, limit is 15")]
    TooManyValues(usize),

    #[error("unknown type marker: 0x{0:02X}")]
    UnknownMarker(u8),

    #[error("frame does not start with 0x92 0xCE")]
    BadHeader,

    #[error("need {needed} bytes but only {have} available")]
    Truncated { needed: usize, have: usize },

    #[error("frame has trailing bytes after the last value")]
    TrailingBytes,

    #[error("checksum mismatch: stored 0x{stored:08X}, computed 0x{computed:08X}")]
    ChecksumMismatch { stored: u32, computed: u32 },

    #[error("destination too small: need {needed} bytes, have {have}")]
    BufferTooSmall { needed: usize, have: usize },

    #[error("frame of {0} bytes exceeds the 247-byte limit")]
    FrameTooLong(usize),
}
