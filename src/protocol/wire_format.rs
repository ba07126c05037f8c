//! Wire format: frame layout, header encoding and decoding.
//!
//! Every frame starts with a total-length prefix and a fixed header:
//!
//! ```text
//! ┌──────────┬─────────┬────────────────┬──────────────┐
//! │ Total len│ "OS"    │ Transaction ID │ Process code │
//! │ 2 bytes  │ 2 bytes │ 6 bytes        │ 4 bytes      │
//! │ uint16 BE│ CP1047  │ CP1047 digits  │ CP1047       │
//! └──────────┴─────────┴────────────────┴──────────────┘
//! ```
//!
//! The total length counts the 2 prefix bytes themselves. All multi-byte
//! integers are big endian; all text is CP1047.

use bytes::{BufMut, Bytes, BytesMut};

use crate::codec::{decode_text, encode_text, read_u16_be};
use crate::error::{NcpassError, Result};

/// Decoded header size in bytes, including the 2-byte length prefix.
pub const HEADER_SIZE: usize = 14;

/// Fixed marker opening every header.
pub const MARKER: &str = "OS";

/// Process code of the handshake message.
pub const PROCESS_HANDSHAKE: u8 = 0;

/// Process code of the token authentication request.
pub const PROCESS_AUTH: u8 = 3;

/// Append the 12-byte message header (marker, transaction id, process code).
///
/// The process code goes on the wire as `"SE0"` + the decimal code. Known
/// quirk of the protocol: the prefix pads only to one digit, so a process
/// code >= 10 widens the field beyond 4 bytes. The codes this crate emits
/// ([`PROCESS_HANDSHAKE`], [`PROCESS_AUTH`]) are single-digit.
pub fn put_header(buf: &mut BytesMut, transaction_id: &str, process_code: u8) -> Result<()> {
    debug_assert!(
        transaction_id.len() == 6 && transaction_id.bytes().all(|b| b.is_ascii_digit()),
        "transaction id must be exactly 6 ASCII digits"
    );
    buf.put_slice(&encode_text(MARKER)?);
    buf.put_slice(&encode_text(transaction_id)?);
    buf.put_slice(&encode_text(&format!("SE0{}", process_code))?);
    Ok(())
}

/// Wrap a message payload with its 2-byte big-endian total-length prefix.
///
/// The prefix counts itself, so the value is `payload.len() + 2`. Returns
/// [`NcpassError::LengthOverflow`] past 65 535.
pub fn finish_frame(payload: BytesMut) -> Result<Bytes> {
    let total = payload.len() + 2;
    let total = u16::try_from(total).map_err(|_| NcpassError::LengthOverflow(total))?;
    let mut frame = BytesMut::with_capacity(total as usize);
    frame.put_u16(total);
    frame.put_slice(&payload);
    Ok(frame.freeze())
}

/// Decoded header common to every inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Total length the frame declares for itself. Reported as received;
    /// not validated against the actual buffer size.
    pub declared_length: u16,
    /// The 2-byte marker, `"OS"` on every well-formed frame.
    pub marker: String,
    /// 6-digit transaction id echoed back by the server.
    pub transaction_id: String,
    /// Process code string, e.g. `"SE00"` or `"SE03"`.
    pub process_code: String,
}

impl Header {
    /// Decode the header from the start of a frame.
    ///
    /// Consumes exactly [`HEADER_SIZE`] bytes; returns
    /// [`NcpassError::Truncated`] if fewer are available.
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(NcpassError::Truncated {
                offset: 0,
                needed: HEADER_SIZE,
                available: buf.len(),
            });
        }
        Ok(Self {
            declared_length: read_u16_be(buf[0], buf[1]),
            marker: decode_text(buf, 2, 2)?,
            transaction_id: decode_text(buf, 4, 6)?,
            process_code: decode_text(buf, 10, 4)?,
        })
    }
}
