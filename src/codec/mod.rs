//! Codec module - CP1047 text and length-prefixed parameter conversion.
//!
//! These are the leaf utilities shared by the message builders and decoders:
//!
//! - [`encode_text`] / [`decode_text`] - native text ⇄ code page 1047 bytes
//! - [`encode_parameter`] - length-prefixed parameter encoding
//! - [`read_u16_be`] - big-endian 16-bit field composition
//! - [`ParamCursor`] - sequential field reader for response buffers

mod ebcdic;
mod parameter;

pub use ebcdic::{decode_text, encode_text};
pub use parameter::{encode_parameter, read_u16_be, ParamCursor};
