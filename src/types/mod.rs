//! TinyPack value and message types.

mod message;
mod value;

pub use message::{Message, Pattern, MAX_VALUES};
pub use value::{Value, MAX_STRING_LEN, STRING_STORAGE};
