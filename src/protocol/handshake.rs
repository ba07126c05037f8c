//! Handshake message builder and response decoder.
//!
//! The handshake opens a TLI exchange: it announces the application id and
//! system id to the server, which answers with its own system identifiers.
//!
//! Request layout after the header:
//!
//! ```text
//! param(app_id) | param("NCTLI") | 00 00 | param("1")
//! ```
//!
//! The two zero bytes are the unused EXIT45 password field; `"1"` is the
//! direction id.

use bytes::{BufMut, Bytes, BytesMut};

use super::wire_format::{finish_frame, put_header, Header, HEADER_SIZE, PROCESS_HANDSHAKE};
use crate::codec::{encode_parameter, ParamCursor};
use crate::error::Result;

/// System id sent in every handshake.
const SYSTEM_ID: &str = "NCTLI";

/// Direction id sent in every handshake.
const DIRECTION_ID: &str = "1";

/// Build a complete handshake frame for the given application id.
pub fn build_handshake(transaction_id: &str, app_id: &str) -> Result<Bytes> {
    let mut payload = BytesMut::new();
    put_header(&mut payload, transaction_id, PROCESS_HANDSHAKE)?;
    payload.put_slice(&encode_parameter(app_id)?);
    payload.put_slice(&encode_parameter(SYSTEM_ID)?);
    // password for EXIT45, unused
    payload.put_u16(0);
    payload.put_slice(&encode_parameter(DIRECTION_ID)?);
    finish_frame(payload)
}

/// Fields decoded from a handshake response.
///
/// A parameter the server sent with length 0 is `None`, never an empty
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandshakeFields {
    /// Decoded frame header.
    pub header: Header,
    /// Server system id.
    pub system_id: Option<String>,
    /// Server CPU id.
    pub cpu_id: Option<String>,
    /// EXIT45 password echo, normally absent.
    pub password: Option<String>,
    /// Direction id echo.
    pub direction_id: Option<String>,
    /// Total bytes of the input consumed; trailing data starts here.
    pub bytes_processed: usize,
}

/// Decode a complete handshake response frame.
pub fn decode_handshake_response(buf: &[u8]) -> Result<HandshakeFields> {
    let header = Header::decode(buf)?;
    let mut cursor = ParamCursor::new(buf, HEADER_SIZE);
    let system_id = cursor.read_param()?;
    let cpu_id = cursor.read_param()?;
    let password = cursor.read_param()?;
    let direction_id = cursor.read_param()?;
    Ok(HandshakeFields {
        header,
        system_id,
        cpu_id,
        password,
        direction_id,
        bytes_processed: cursor.position(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::read_u16_be;

    #[test]
    fn test_handshake_frame_layout() {
        let frame = build_handshake("123456", "APP1").unwrap();
        // 2 len + 12 header + (2+4) app + (2+5) NCTLI + 2 zeros + (2+1) direction
        assert_eq!(frame.len(), 32);
        assert_eq!(read_u16_be(frame[0], frame[1]), 32);
        // header marker right after the prefix
        assert_eq!(&frame[2..4], [0xD6, 0xE2]);
        // process code "SE00"
        assert_eq!(&frame[10..14], [0xE2, 0xC5, 0xF0, 0xF0]);
    }

    #[test]
    fn test_handshake_length_prefix_counts_itself() {
        for app_id in ["A", "WEBACCESS", ""] {
            let frame = build_handshake("000001", app_id).unwrap();
            assert_eq!(read_u16_be(frame[0], frame[1]) as usize, frame.len());
        }
    }

    #[test]
    fn test_decode_own_handshake_as_response() {
        // the request has the same shape a response does: header plus four
        // parameter slots (the password slot is the zero-length one)
        let frame = build_handshake("654321", "APP1").unwrap();
        let fields = decode_handshake_response(&frame).unwrap();
        assert_eq!(fields.header.transaction_id, "654321");
        assert_eq!(fields.header.process_code, "SE00");
        assert_eq!(fields.system_id.as_deref(), Some("APP1"));
        assert_eq!(fields.cpu_id.as_deref(), Some("NCTLI"));
        assert_eq!(fields.password, None);
        assert_eq!(fields.direction_id.as_deref(), Some("1"));
        assert_eq!(fields.bytes_processed, frame.len());
    }

    #[test]
    fn test_all_fields_absent() {
        let mut buf = build_handshake("111111", "X").unwrap()[..HEADER_SIZE].to_vec();
        buf.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 0]);
        let fields = decode_handshake_response(&buf).unwrap();
        assert_eq!(fields.system_id, None);
        assert_eq!(fields.cpu_id, None);
        assert_eq!(fields.password, None);
        assert_eq!(fields.direction_id, None);
        assert_eq!(fields.bytes_processed, HEADER_SIZE + 8);
    }

    #[test]
    fn test_decode_truncated_response() {
        let frame = build_handshake("222222", "APP1").unwrap();
        assert!(decode_handshake_response(&frame[..frame.len() - 1]).is_err());
        assert!(decode_handshake_response(&frame[..10]).is_err());
    }
}
