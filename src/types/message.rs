//! TinyPack messages: ordered sequences of up to 15 values.

use crate::error::PackError;
use crate::types::value::{Value, STRING_STORAGE};

/// Maximum number of values a message can hold.
pub const MAX_VALUES: usize = 15;

/// An ordered sequence of 0–15 [`Value`]s.
///
/// Fields are public: a message is a plain value type meant to live on the
/// stack and be assembled by direct assignment where convenient. Slots at
/// `[len, 15)` are ignored. `len > 15` makes the message invalid; the codec
/// rejects it rather than the type preventing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Message {
    pub len: u8,
    pub items: [Value; MAX_VALUES],
}

impl Message {
    /// An empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a message from a slice of values.
    ///
    /// # Panics
    ///
    /// Panics if more than 15 values are given.
    pub fn with(values: &[Value]) -> Self {
        assert!(
            values.len() <= MAX_VALUES,
            "a message holds at most {MAX_VALUES} values"
        );
        let mut msg = Self::new();
        for &v in values {
            msg.items[msg.len as usize] = v;
            msg.len += 1;
        }
        msg
    }

    /// Appends a value, failing once all 15 slots are taken.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<(), PackError> {
        let len = self.len as usize;
        if len >= MAX_VALUES {
            return Err(PackError::TooManyValues(len + 1));
        }
        self.items[len] = value.into();
        self.len += 1;
        Ok(())
    }

    /// The populated values, `items[0..len]`.
    pub fn values(&self) -> &[Value] {
        &self.items[..(self.len as usize).min(MAX_VALUES)]
    }

    /// Returns the serialized frame length (`7 +` the value payloads), or
    /// `None` if `len` exceeds 15 or any populated value is invalid.
    pub fn wire_size(&self) -> Option<usize> {
        if self.len as usize > MAX_VALUES {
            return None;
        }
        let mut total = crate::wire::MIN_MSG_LEN;
        for v in self.values() {
            total += v.wire_size()?;
        }
        Some(total)
    }

    /// Matches the message shape against a pattern sequence.
    ///
    /// Succeeds iff the arity equals `len` and every position matches:
    /// an [`Pattern::Exact`] filter must equal the value (kind and payload,
    /// via `Value` equality), and a typed slot must match the value's kind
    /// exactly, in which case the payload is written through. Slots matched
    /// before a later mismatch keep their written values, so order filters
    /// before extractors when that matters.
    pub fn parse(&self, patterns: &mut [Pattern<'_>]) -> bool {
        if self.len as usize > MAX_VALUES || patterns.len() != self.len as usize {
            return false;
        }
        for (value, pattern) in self.values().iter().zip(patterns.iter_mut()) {
            let matched = match pattern {
                Pattern::Exact(want) => value == want,
                Pattern::Bool(slot) => write_through(slot, value.as_bool()),
                Pattern::U8(slot) => write_through(slot, value.as_u8()),
                Pattern::U16(slot) => write_through(slot, value.as_u16()),
                Pattern::U32(slot) => write_through(slot, value.as_u32()),
                Pattern::U64(slot) => write_through(slot, value.as_u64()),
                Pattern::I8(slot) => write_through(slot, value.as_i8()),
                Pattern::I16(slot) => write_through(slot, value.as_i16()),
                Pattern::I32(slot) => write_through(slot, value.as_i32()),
                Pattern::I64(slot) => write_through(slot, value.as_i64()),
                Pattern::F32(slot) => write_through(slot, value.as_f32()),
                Pattern::F64(slot) => write_through(slot, value.as_f64()),
                Pattern::Str(slot) => match value {
                    Value::Str(storage) => {
                        **slot = *storage;
                        true
                    }
                    _ => false,
                },
            };
            if !matched {
                return false;
            }
        }
        true
    }
}

fn write_through<T>(slot: &mut &mut T, got: Option<T>) -> bool {
    match got {
        Some(x) => {
            **slot = x;
            true
        }
        None => false,
    }
}

/// Message equality is per-position [`Value`] equality over the populated
/// slots. A message with `len > 15` is invalid and equal to nothing.
impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len || self.len as usize > MAX_VALUES {
            return false;
        }
        self.values()
            .iter()
            .zip(other.values())
            .all(|(a, b)| a == b)
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Self::with(&[value])
    }
}

/// One position of a [`Message::parse`] pattern: either a constant filter
/// or a typed output slot.
#[derive(Debug)]
pub enum Pattern<'a> {
    /// The value at this position must equal the given value.
    Exact(Value),
    Bool(&'a mut bool),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    F32(&'a mut f32),
    F64(&'a mut f64),
    /// Receives the full 16-byte string storage, NUL terminator included.
    Str(&'a mut [u8; STRING_STORAGE]),
}

impl Pattern<'_> {
    /// Shorthand for an [`Pattern::Exact`] filter from any value source.
    pub fn exact(value: impl Into<Value>) -> Pattern<'static> {
        Pattern::Exact(value.into())
    }
}
