//! TinyPack wire format: one frame per message, 7–247 bytes.
//!
//! ```text
//! ┌────────────┬────────────┬──────────────┬────────────┬───────────────┐
//! │ 0x92 (1B)  │ 0xCE (1B)  │ CRC32 (4B BE)│ 0x90+N (1B)│ N values      │
//! │ frame mark │ cksum mark │ of [6..end)  │ count      │ tag + payload │
//! └────────────┴────────────┴──────────────┴────────────┴───────────────┘
//! ```
//!
//! The checksum covers the count byte and every value byte; the first six
//! bytes are excluded. All multi-byte payloads are big-endian.

pub mod crc;
pub mod decode;
pub mod encode;
pub mod marker;

pub use crc::crc32b;
pub use decode::{unpack, unpack_buffer};
pub use encode::{pack, pack_buffer};

/// Shortest possible frame: an empty message.
pub const MIN_MSG_LEN: usize = 1 + (1 + 4) + (1 + 0); // = 7

/// Longest possible frame: 15 strings of 15 bytes each.
pub const MAX_MSG_LEN: usize = 1 + (1 + 4) + (1 + 15 * (15 + 1)); // = 247

/// A fixed-capacity byte container sized for any valid frame.
#[derive(Debug, Clone, Copy)]
pub struct Buffer {
    pub len: u8,
    pub data: [u8; MAX_MSG_LEN],
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The occupied prefix, `data[0..len]`.
    pub fn bytes(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self {
            len: 0,
            data: [0; MAX_MSG_LEN],
        }
    }
}
