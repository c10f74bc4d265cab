//! Rebuilds verified messages from a lossy byte stream.

use crate::types::Message;
use crate::wire::decode::unpack_body;
use crate::wire::{crc32b, marker, MAX_MSG_LEN, MIN_MSG_LEN};

/// An incremental frame parser that consumes one byte per call and
/// resynchronizes after corruption.
///
/// Feed bytes with [`put`](Self::put); a `true` return means a complete,
/// CRC-verified message is staged and must be read with
/// [`message`](Self::message) before the next `put`, which may overwrite
/// it. Any malformed byte discards the accumulated frame and the byte
/// itself, so recovery means losing bytes until the next `0x92`; the stuck
/// period after corruption is bounded by one frame length.
#[derive(Debug)]
pub struct Unpacker {
    buf: [u8; MAX_MSG_LEN],
    len: usize,
    /// Value slots still unparsed. Signed: a length byte below `0x90` wraps
    /// into the negative range, which never completes and forces a reset on
    /// the following body byte.
    remaining_objects: i8,
    /// Payload bytes still expected for the value being consumed.
    remaining_bytes: u8,
    /// Checksum parsed from frame bytes 2..6.
    crc_header: u32,
    /// Running checksum over frame bytes 6..len.
    crc_body: u32,
    msg: Message,
}

impl Unpacker {
    pub fn new() -> Self {
        Self {
            buf: [0; MAX_MSG_LEN],
            len: 0,
            remaining_objects: 0,
            remaining_bytes: 0,
            crc_header: 0,
            crc_body: 0,
            msg: Message::new(),
        }
    }

    /// Consumes one stream byte. Returns `true` when a verified message
    /// became ready.
    pub fn put(&mut self, byte: u8) -> bool {
        if self.len >= MAX_MSG_LEN {
            self.len = 0;
        }

        match self.len {
            // Frame marker
            0 => {
                if byte != marker::FRAME {
                    self.len = 0;
                    return false;
                }
                self.store(byte);
            }
            // Checksum marker
            1 => {
                if byte != marker::CHECKSUM {
                    self.len = 0;
                    return false;
                }
                self.crc_header = 0;
                self.crc_body = 0;
                self.store(byte);
            }
            // Checksum bytes, big-endian; excluded from the body checksum
            2..=5 => {
                self.crc_header = (self.crc_header << 8) | u32::from(byte);
                self.store(byte);
            }
            // Count byte
            6 => {
                let count = byte.wrapping_sub(marker::FIXARRAY_NIBBLE) as i8;
                if count > 15 {
                    self.len = 0;
                    return false;
                }
                self.remaining_objects = count;
                self.remaining_bytes = 0;
                self.crc_body = crc32b(self.crc_body, &[byte]);
                self.store(byte);
            }
            // Body byte
            _ => {
                if self.remaining_bytes > 0 {
                    self.remaining_bytes -= 1;
                } else if self.remaining_objects > 0 {
                    self.remaining_objects -= 1;
                    match marker::payload_width(byte) {
                        Some(width) => self.remaining_bytes = width,
                        None => {
                            tracing::debug!(tag = byte, "unknown value tag, resynchronizing");
                            self.len = 0;
                            return false;
                        }
                    }
                } else {
                    // Surplus byte past the declared structure.
                    self.len = 0;
                    return false;
                }
                self.crc_body = crc32b(self.crc_body, &[byte]);
                self.store(byte);
            }
        }

        if self.len < MIN_MSG_LEN {
            return false;
        }
        if self.remaining_objects != 0 || self.remaining_bytes != 0 {
            return false;
        }

        // Structure complete; gate on the checksum, then parse the body.
        if self.crc_header != self.crc_body {
            tracing::debug!(
                stored = self.crc_header,
                computed = self.crc_body,
                "checksum mismatch, frame dropped",
            );
            self.len = 0;
            return false;
        }

        match unpack_body(&self.buf[..self.len]) {
            Ok(msg) => {
                self.msg = msg;
                self.len = 0;
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "frame body rejected");
                self.len = 0;
                false
            }
        }
    }

    /// The most recently completed message. Defined only immediately after
    /// a [`put`](Self::put) that returned `true`; copy it out before
    /// feeding further bytes.
    pub fn message(&self) -> &Message {
        &self.msg
    }

    fn store(&mut self, byte: u8) {
        self.buf[self.len] = byte;
        self.len += 1;
    }
}

impl Default for Unpacker {
    fn default() -> Self {
        Self::new()
    }
}
