//! Frame decoding: bytes → `Message`.

use bytes::Buf;

use crate::error::PackError;
use crate::types::{Message, Value, STRING_STORAGE};
use crate::wire::crc::crc32b;
use crate::wire::{marker, Buffer, MAX_MSG_LEN, MIN_MSG_LEN};

/// Deserializes a complete frame.
///
/// Checks, in order: length bounds, the `0x92` frame marker, the `0xCE`
/// checksum marker, CRC32 equality over `[6..end)`, then a clean body parse
/// that consumes the frame exactly.
pub fn unpack(data: &[u8]) -> Result<Message, PackError> {
    if data.len() < MIN_MSG_LEN {
        return Err(PackError::Truncated {
            needed: MIN_MSG_LEN,
            have: data.len(),
        });
    }
    if data.len() > MAX_MSG_LEN {
        return Err(PackError::FrameTooLong(data.len()));
    }
    if data[0] != marker::FRAME || data[1] != marker::CHECKSUM {
        return Err(PackError::BadHeader);
    }

    let stored = u32::from_be_bytes([data[2], data[3], data[4], data[5]]);
    let computed = crc32b(0, &data[6..]);
    if stored != computed {
        return Err(PackError::ChecksumMismatch { stored, computed });
    }

    unpack_body(data)
}

/// Deserializes the frame held in a [`Buffer`].
pub fn unpack_buffer(buf: &Buffer) -> Result<Message, PackError> {
    unpack(buf.bytes())
}

/// Parses the body of a frame whose header and checksum have already been
/// verified. Shared with the stream unpacker, which checks the CRC
/// incrementally before calling in.
pub(crate) fn unpack_body(frame: &[u8]) -> Result<Message, PackError> {
    if frame.len() < MIN_MSG_LEN {
        return Err(PackError::Truncated {
            needed: MIN_MSG_LEN,
            have: frame.len(),
        });
    }

    let count_byte = frame[6];
    let count = count_byte.wrapping_sub(marker::FIXARRAY_NIBBLE);
    if count > 15 {
        return Err(PackError::UnknownMarker(count_byte));
    }

    let mut buf = &frame[7..];
    let mut msg = Message::new();
    for i in 0..count {
        msg.items[i as usize] = decode_value(&mut buf)?;
    }
    msg.len = count;

    if buf.has_remaining() {
        return Err(PackError::TrailingBytes);
    }
    Ok(msg)
}

/// Decodes a single value from the buffer.
fn decode_value(buf: &mut impl Buf) -> Result<Value, PackError> {
    ensure_remaining(buf, 1)?;
    let tag = buf.get_u8();
    match tag {
        marker::FALSE => Ok(Value::Bool(0)),
        marker::TRUE => Ok(Value::Bool(1)),

        marker::UINT8 => {
            ensure_remaining(buf, 1)?;
            Ok(Value::U8(buf.get_u8()))
        }
        marker::UINT16 => {
            ensure_remaining(buf, 2)?;
            Ok(Value::U16(buf.get_u16()))
        }
        marker::UINT32 => {
            ensure_remaining(buf, 4)?;
            Ok(Value::U32(buf.get_u32()))
        }
        marker::UINT64 => {
            ensure_remaining(buf, 8)?;
            Ok(Value::U64(buf.get_u64()))
        }

        marker::INT8 => {
            ensure_remaining(buf, 1)?;
            Ok(Value::I8(buf.get_i8()))
        }
        marker::INT16 => {
            ensure_remaining(buf, 2)?;
            Ok(Value::I16(buf.get_i16()))
        }
        marker::INT32 => {
            ensure_remaining(buf, 4)?;
            Ok(Value::I32(buf.get_i32()))
        }
        marker::INT64 => {
            ensure_remaining(buf, 8)?;
            Ok(Value::I64(buf.get_i64()))
        }

        marker::FLOAT32 => {
            ensure_remaining(buf, 4)?;
            Ok(Value::F32(buf.get_f32()))
        }
        marker::FLOAT64 => {
            ensure_remaining(buf, 8)?;
            Ok(Value::F64(buf.get_f64()))
        }

        _ if tag & 0xF0 == marker::FIXSTR_NIBBLE => {
            let len = (tag & 0x0F) as usize;
            ensure_remaining(buf, len)?;
            let mut storage = [0u8; STRING_STORAGE];
            buf.copy_to_slice(&mut storage[..len]);
            Ok(Value::Str(storage))
        }

        _ => Err(PackError::UnknownMarker(tag)),
    }
}

fn ensure_remaining(buf: &impl Buf, needed: usize) -> Result<(), PackError> {
    if buf.remaining() < needed {
        Err(PackError::Truncated {
            needed,
            have: buf.remaining(),
        })
    } else {
        Ok(())
    }
}
