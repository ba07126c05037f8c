//! Length-prefixed parameter codec.
//!
//! Every variable-length text value on the wire is a parameter:
//!
//! ```text
//! ┌──────────┬───────────────┐
//! │ Length   │ CP1047 bytes  │
//! │ 2 bytes  │ length bytes  │
//! │ uint16 BE│               │
//! └──────────┴───────────────┘
//! ```
//!
//! A zero-length parameter occupies exactly the 2 length bytes.
//!
//! # Example
//!
//! ```
//! use ncpass_codec::codec::encode_parameter;
//!
//! let bytes = encode_parameter("HELLO").unwrap();
//! assert_eq!(&bytes[..2], [0x00, 0x05]);
//! assert_eq!(bytes.len(), 7);
//! ```

use super::ebcdic::{decode_text, encode_text};
use crate::error::{NcpassError, Result};

/// Combine two bytes as an unsigned 16-bit big-endian integer.
///
/// The widening happens before the shift, so high bytes >= 0x80 cannot
/// sign-extend into the upper bits.
#[inline]
pub fn read_u16_be(hi: u8, lo: u8) -> u16 {
    u16::from_be_bytes([hi, lo])
}

/// Encode text as a length-prefixed CP1047 parameter.
///
/// Returns [`NcpassError::LengthOverflow`] if the encoded text exceeds
/// 65 535 bytes, [`NcpassError::Encoding`] for unmappable characters.
pub fn encode_parameter(s: &str) -> Result<Vec<u8>> {
    let text = encode_text(s)?;
    let len = u16::try_from(text.len()).map_err(|_| NcpassError::LengthOverflow(text.len()))?;
    let mut out = Vec::with_capacity(2 + text.len());
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(&text);
    Ok(out)
}

/// Sequential reader over a complete response buffer.
///
/// Tracks a cursor position so decoders can walk length-prefixed fields in
/// order and report how many bytes they consumed.
#[derive(Debug)]
pub struct ParamCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ParamCursor<'a> {
    /// Create a cursor over `buf`, starting at `start`.
    pub fn new(buf: &'a [u8], start: usize) -> Self {
        Self { buf, pos: start }
    }

    /// Current cursor position, in bytes from the start of the buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).filter(|&end| end <= self.buf.len());
        let Some(end) = end else {
            return Err(NcpassError::Truncated {
                offset: self.pos,
                needed: n,
                available: self.buf.len().saturating_sub(self.pos),
            });
        };
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Read a 2-byte big-endian unsigned integer.
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.take(2)?;
        Ok(read_u16_be(bytes[0], bytes[1]))
    }

    /// Read a field's 2-byte declared length.
    #[inline]
    pub fn read_len(&mut self) -> Result<usize> {
        Ok(self.read_u16()? as usize)
    }

    /// Read and decode `len` CP1047 bytes at the cursor.
    pub fn read_text(&mut self, len: usize) -> Result<String> {
        let start = self.pos;
        self.take(len)?;
        decode_text(self.buf, start, len)
    }

    /// Read one optional length-prefixed parameter.
    ///
    /// A declared length of 0 yields `None` and advances only the 2 length
    /// bytes already consumed.
    pub fn read_param(&mut self) -> Result<Option<String>> {
        let len = self.read_len()?;
        if len == 0 {
            return Ok(None);
        }
        self.read_text(len).map(Some)
    }

    /// Advance the cursor by `n` bytes without decoding them.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }
}
