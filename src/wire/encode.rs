//! Frame encoding: `Message` → bytes.

use crate::error::PackError;
use crate::types::{Message, Value, MAX_VALUES};
use crate::wire::crc::crc32b;
use crate::wire::{marker, Buffer, MIN_MSG_LEN};

/// Serializes `msg` into `out` and returns the frame length.
///
/// Every member is validated before emission: `Untyped`, a bool whose
/// payload byte is neither 0 nor 1, and string storage with no NUL
/// terminator are all rejected. On error the contents of `out` are
/// unspecified; no partial success is reported.
pub fn pack(msg: &Message, out: &mut [u8]) -> Result<usize, PackError> {
    if msg.len as usize > MAX_VALUES {
        return Err(PackError::TooManyValues(msg.len as usize));
    }
    if out.len() < MIN_MSG_LEN {
        return Err(PackError::BufferTooSmall {
            needed: MIN_MSG_LEN,
            have: out.len(),
        });
    }

    out[0] = marker::FRAME;
    out[1] = marker::CHECKSUM;
    out[2..6].fill(0); // patched after the body is emitted
    out[6] = marker::FIXARRAY_NIBBLE + msg.len;

    let mut pos = 7;
    for value in msg.values() {
        pos = encode_value(out, pos, value)?;
    }

    let crc = crc32b(0, &out[6..pos]);
    out[2..6].copy_from_slice(&crc.to_be_bytes());
    Ok(pos)
}

/// Serializes `msg` into a [`Buffer`], setting its length on success.
pub fn pack_buffer(msg: &Message, buf: &mut Buffer) -> Result<(), PackError> {
    let len = pack(msg, &mut buf.data)?;
    buf.len = len as u8;
    Ok(())
}

/// Encodes one value at `pos`, returning the position past its payload.
fn encode_value(out: &mut [u8], pos: usize, value: &Value) -> Result<usize, PackError> {
    match value {
        Value::Untyped => Err(PackError::Untyped),
        Value::Bool(b) => {
            if *b > 1 {
                return Err(PackError::BrokenBool(*b));
            }
            put(out, pos, &[marker::FALSE + b])
        }
        Value::U8(x) => put(out, pos, &[marker::UINT8, *x]),
        Value::U16(x) => put_scalar(out, pos, marker::UINT16, &x.to_be_bytes()),
        Value::U32(x) => put_scalar(out, pos, marker::UINT32, &x.to_be_bytes()),
        Value::U64(x) => put_scalar(out, pos, marker::UINT64, &x.to_be_bytes()),
        Value::I8(x) => put(out, pos, &[marker::INT8, *x as u8]),
        Value::I16(x) => put_scalar(out, pos, marker::INT16, &x.to_be_bytes()),
        Value::I32(x) => put_scalar(out, pos, marker::INT32, &x.to_be_bytes()),
        Value::I64(x) => put_scalar(out, pos, marker::INT64, &x.to_be_bytes()),
        Value::F32(x) => put_scalar(out, pos, marker::FLOAT32, &x.to_be_bytes()),
        Value::F64(x) => put_scalar(out, pos, marker::FLOAT64, &x.to_be_bytes()),
        Value::Str(_) => match value.as_bytes() {
            Some(content) => {
                put_scalar(out, pos, marker::FIXSTR_NIBBLE + content.len() as u8, content)
            }
            None => Err(PackError::UnterminatedString),
        },
    }
}

fn put_scalar(out: &mut [u8], pos: usize, tag: u8, payload: &[u8]) -> Result<usize, PackError> {
    let end = pos + 1 + payload.len();
    if out.len() < end {
        return Err(PackError::BufferTooSmall {
            needed: end,
            have: out.len(),
        });
    }
    out[pos] = tag;
    out[pos + 1..end].copy_from_slice(payload);
    Ok(end)
}

fn put(out: &mut [u8], pos: usize, bytes: &[u8]) -> Result<usize, PackError> {
    let end = pos + bytes.len();
    if out.len() < end {
        return Err(PackError::BufferTooSmall {
            needed: end,
            have: out.len(),
        });
    }
    out[pos..end].copy_from_slice(bytes);
    Ok(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::MAX_MSG_LEN;

    /// Packs a single value and asserts the body bytes after the 7-byte
    /// frame preamble.
    fn assert_body(value: Value, body: &[u8]) {
        let mut buf = Buffer::new();
        pack_buffer(&Message::from(value), &mut buf).unwrap();
        assert_eq!(buf.len as usize, 7 + body.len());
        assert_eq!(&buf.data[7..buf.len as usize], body);
    }

    #[test]
    fn value_encodings() {
        assert_body(false.into(), &[0xC2]);
        assert_body(true.into(), &[0xC3]);
        assert_body(0x01u8.into(), &[0xCC, 0x01]);
        assert_body(0x0123u16.into(), &[0xCD, 0x01, 0x23]);
        assert_body(0x01234567u32.into(), &[0xCE, 0x01, 0x23, 0x45, 0x67]);
        assert_body(
            0x0123456789ABCDEFu64.into(),
            &[0xCF, 0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF],
        );
        assert_body(0x01i8.into(), &[0xD0, 0x01]);
        assert_body(0x0123i16.into(), &[0xD1, 0x01, 0x23]);
        assert_body(0x01234567i32.into(), &[0xD2, 0x01, 0x23, 0x45, 0x67]);
        assert_body(
            0x0123456789ABCDEFi64.into(),
            &[0xD3, 0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF],
        );
        assert_body(85.125f32.into(), &[0xCA, 0x42, 0xAA, 0x40, 0x00]);
        assert_body(
            85.125f64.into(),
            &[0xCB, 0x40, 0x55, 0x48, 0x00, 0x00, 0x00, 0x00, 0x00],
        );
        assert_body(
            "helloworld".into(),
            &[0xAA, 0x68, 0x65, 0x6C, 0x6C, 0x6F, 0x77, 0x6F, 0x72, 0x6C, 0x64],
        );
        assert_body((-1i8).into(), &[0xD0, 0xFF]);
        assert_body("".into(), &[0xA0]);
    }

    #[test]
    fn helloworld_frame_layout() {
        let mut buf = Buffer::new();
        pack_buffer(&Message::with(&["helloworld".into()]), &mut buf).unwrap();
        assert_eq!(buf.len, 18);
        assert_eq!(buf.data[0], 0x92);
        assert_eq!(buf.data[1], 0xCE);
        assert_eq!(
            &buf.data[6..18],
            &[0x91, 0xAA, 0x68, 0x65, 0x6C, 0x6C, 0x6F, 0x77, 0x6F, 0x72, 0x6C, 0x64],
        );
        // Stored checksum covers exactly [6..18).
        let crc = crc32b(0, &buf.data[6..18]);
        assert_eq!(&buf.data[2..6], &crc.to_be_bytes());
    }

    #[test]
    fn empty_message_is_seven_bytes() {
        let mut buf = Buffer::new();
        pack_buffer(&Message::new(), &mut buf).unwrap();
        assert_eq!(buf.len as usize, MIN_MSG_LEN);
        assert_eq!(buf.data[6], 0x90);
    }

    #[test]
    fn largest_message_is_247_bytes() {
        let full = Message::with(&[Value::from("helloworldhello"); 15]);
        let mut buf = Buffer::new();
        pack_buffer(&full, &mut buf).unwrap();
        assert_eq!(buf.len as usize, MAX_MSG_LEN);
    }

    #[test]
    fn rejects_untyped() {
        let mut msg = Message::new();
        msg.len = 1; // items[0] is Untyped
        let mut buf = Buffer::new();
        assert_eq!(pack_buffer(&msg, &mut buf), Err(PackError::Untyped));
    }

    #[test]
    fn rejects_broken_bool() {
        let msg = Message::with(&[Value::Bool(2)]);
        let mut buf = Buffer::new();
        assert_eq!(pack_buffer(&msg, &mut buf), Err(PackError::BrokenBool(2)));
    }

    #[test]
    fn rejects_unterminated_string() {
        let msg = Message::with(&[Value::Str([b'F'; 16])]);
        let mut buf = Buffer::new();
        assert_eq!(
            pack_buffer(&msg, &mut buf),
            Err(PackError::UnterminatedString),
        );
    }

    #[test]
    fn rejects_overlength_message() {
        let mut msg = Message::new();
        msg.len = 16;
        let mut buf = Buffer::new();
        assert_eq!(pack_buffer(&msg, &mut buf), Err(PackError::TooManyValues(16)));
    }

    #[test]
    fn rejects_short_destination() {
        let msg = Message::with(&["helloworld".into()]);
        let mut out = [0u8; 10];
        assert!(matches!(
            pack(&msg, &mut out),
            Err(PackError::BufferTooSmall { .. }),
        ));
    }
}
