//! TinyPack — a compact binary message codec for small fixed-shape records.
//!
//! A message is an ordered tuple of up to 15 typed scalar values (booleans,
//! fixed-width integers, IEEE-754 floats, short strings). Every serialized
//! frame is self-delimiting, carries a CRC32 checksum, and never exceeds
//! 247 bytes, which makes the format a fit for serial links, radio frames,
//! and other byte-oriented transports where frames arrive one octet at a
//! time and may be corrupted in flight.
//!
//! # Architecture
//!
//! - **`types`** — `Value` and `Message`, constructors, equality, and the
//!   filter-or-extract [`parse`](types::Message::parse) matcher
//! - **`wire`** — marker constants, CRC32, one-shot [`pack`](wire::pack) /
//!   [`unpack`](wire::unpack), and the fixed-capacity [`Buffer`](wire::Buffer)
//! - **`stream`** — the incremental [`Packer`](stream::Packer) and the
//!   resynchronizing byte-at-a-time [`Unpacker`](stream::Unpacker)
//! - **`error`** — the crate-wide [`PackError`](error::PackError)
//!
//! # Wire compatibility
//!
//! The first two bytes of every frame (`0x92 0xCE`) and the value tags are
//! MessagePack markers by design: a MessagePack parser reads a frame as an
//! array of two elements, a uint32 checksum followed by a fixarray of typed
//! values. The outer semantics (the checksum covering the tail) are TinyPack's
//! own.

pub mod error;
pub mod stream;
pub mod types;
pub mod wire;

pub use error::PackError;
pub use stream::{Packer, Unpacker};
pub use types::{Message, Pattern, Value, MAX_STRING_LEN, MAX_VALUES};
pub use wire::{crc32b, pack, pack_buffer, unpack, unpack_buffer, Buffer, MAX_MSG_LEN, MIN_MSG_LEN};
