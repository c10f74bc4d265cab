//! Byte-at-a-time stream codecs.
//!
//! [`Packer`] drains one packed frame as individual bytes; [`Unpacker`]
//! rebuilds verified messages from a lossy octet stream, resynchronizing
//! silently after corruption. Both hold a single frame of state and perform
//! constant work per byte.

pub mod packer;
pub mod unpacker;

pub use packer::Packer;
pub use unpacker::Unpacker;
