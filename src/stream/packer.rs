//! Drains packed frames one byte at a time.

use crate::error::PackError;
use crate::types::Message;
use crate::wire::{pack, MAX_MSG_LEN};

/// Packs one message at a time and hands its bytes out individually, for
/// transports that transmit an octet per call.
///
/// A failed [`put`](Self::put) leaves the stream drained: every
/// [`get`](Self::get) returns `None` until the next successful `put`.
/// A `put` while bytes remain abandons the undrained remainder.
#[derive(Debug)]
pub struct Packer {
    buf: [u8; MAX_MSG_LEN],
    pos: usize,
    len: usize,
}

impl Packer {
    pub fn new() -> Self {
        Self {
            buf: [0; MAX_MSG_LEN],
            pos: 0,
            len: 0,
        }
    }

    /// Serializes `msg` and rewinds the byte cursor to the frame start.
    pub fn put(&mut self, msg: &Message) -> Result<(), PackError> {
        match pack(msg, &mut self.buf) {
            Ok(len) => {
                self.len = len;
                self.pos = 0;
                Ok(())
            }
            Err(e) => {
                self.len = 0;
                self.pos = 0;
                tracing::debug!(error = %e, "pack failed, stream drained");
                Err(e)
            }
        }
    }

    /// Returns the next frame byte, or `None` once the frame is drained.
    pub fn get(&mut self) -> Option<u8> {
        if self.pos < self.len {
            let byte = self.buf[self.pos];
            self.pos += 1;
            Some(byte)
        } else {
            None
        }
    }
}

impl Default for Packer {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Packer {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.get()
    }
}
