//! Authentication request builder and response decoder.
//!
//! The request carries a user id and a one-time token code. The reserved
//! zero fields between them are positional placeholders the server's parser
//! expects; their byte counts and positions must not change.
//!
//! Request layout after the header:
//!
//! ```text
//! param(user_id)
//! 00 00              remote user, unused
//! 00 00              current password, unused
//! 00 00              token challenge, unused
//! param(token_code)
//! 00 00              token serial number, unused
//! 00 02 00 0B        token type 11, standard hardware token
//! 00 00              new token challenge, unused
//! 00 00              new token response, unused
//! 00 00              supplementary PIN, unused
//! param("TCP")       requestor id
//! param("WEBTERM")   terminal/node
//! 00 00              target, unused
//! param("TLI")       target supplementary
//! 00                 trailing pad
//! ```

use bytes::{BufMut, Bytes, BytesMut};

use super::codes::{authentication_label, validation_label};
use super::wire_format::{finish_frame, put_header, Header, HEADER_SIZE, PROCESS_AUTH};
use crate::codec::{encode_parameter, ParamCursor};
use crate::error::Result;

/// Requestor id sent in every request.
const REQUESTOR_ID: &str = "TCP";

/// Terminal/node name sent in every request.
const TERMINAL_NODE: &str = "WEBTERM";

/// Target supplementary sent in every request.
const TARGET_SUPPLEMENTARY: &str = "TLI";

/// Build a complete authentication request frame.
///
/// `token_code` is the one-time code currently displayed by the user's
/// hardware token. The pair goes over the wire unencrypted, but a code is
/// consumed on first validation and cannot be replayed.
pub fn build_auth_request(transaction_id: &str, user_id: &str, token_code: &str) -> Result<Bytes> {
    let mut payload = BytesMut::new();
    put_header(&mut payload, transaction_id, PROCESS_AUTH)?;
    payload.put_slice(&encode_parameter(user_id)?);
    // remote user, current password, token challenge - all unused
    payload.put_u16(0);
    payload.put_u16(0);
    payload.put_u16(0);
    payload.put_slice(&encode_parameter(token_code)?);
    // token serial number, unused
    payload.put_u16(0);
    // token type 11 = standard hardware token
    payload.put_u16(2);
    payload.put_u16(11);
    // new token challenge, new token response, supplementary PIN - all unused
    payload.put_u16(0);
    payload.put_u16(0);
    payload.put_u16(0);
    payload.put_slice(&encode_parameter(REQUESTOR_ID)?);
    payload.put_slice(&encode_parameter(TERMINAL_NODE)?);
    // target, unused
    payload.put_u16(0);
    payload.put_slice(&encode_parameter(TARGET_SUPPLEMENTARY)?);
    payload.put_u8(0);
    finish_frame(payload)
}

/// Fields decoded from an authentication response.
///
/// The numeric result codes are kept alongside their labels so callers can
/// branch on the code and log the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponseFields {
    /// Decoded frame header.
    pub header: Header,
    /// Numeric validation result code, absent when the server omitted it.
    pub validation_code: Option<u16>,
    /// Label for `validation_code`.
    pub validation_result: Option<&'static str>,
    /// Numeric authentication result code, absent when omitted.
    pub authentication_code: Option<u16>,
    /// Label for `authentication_code`.
    pub authentication_result: Option<&'static str>,
    /// Free-text message from the server.
    pub message: Option<String>,
    /// Host-side user id echo.
    pub host_user_id: Option<String>,
    /// Remote user id echo.
    pub remote_user_id: Option<String>,
    /// Total bytes of the input consumed; trailing data starts here.
    pub bytes_processed: usize,
}

impl AuthResponseFields {
    /// True when both result codes are present and zero.
    pub fn is_authenticated(&self) -> bool {
        self.validation_code == Some(0) && self.authentication_code == Some(0)
    }
}

/// Decode a complete authentication response frame.
///
/// Two upstream quirks are reproduced on purpose. The result-code fields
/// advance the cursor only by their 2 length bytes plus the 2 code bytes,
/// never by the declared length itself. And when the Message field's
/// declared length is 0 the server still emits one pad byte, which the
/// cursor must skip before HostUserID.
pub fn decode_auth_response(buf: &[u8]) -> Result<AuthResponseFields> {
    let header = Header::decode(buf)?;
    let mut cursor = ParamCursor::new(buf, HEADER_SIZE);

    let mut validation_code = None;
    let mut validation_result = None;
    if cursor.read_len()? != 0 {
        let code = cursor.read_u16()?;
        validation_code = Some(code);
        validation_result = Some(validation_label(code));
    }

    let mut authentication_code = None;
    let mut authentication_result = None;
    if cursor.read_len()? != 0 {
        let code = cursor.read_u16()?;
        authentication_code = Some(code);
        authentication_result = Some(authentication_label(code));
    }

    let message_len = cursor.read_len()?;
    let message = if message_len != 0 {
        Some(cursor.read_text(message_len)?)
    } else {
        cursor.skip(1)?;
        None
    };

    let host_user_id = cursor.read_param()?;
    let remote_user_id = cursor.read_param()?;

    Ok(AuthResponseFields {
        header,
        validation_code,
        validation_result,
        authentication_code,
        authentication_result,
        message,
        host_user_id,
        remote_user_id,
        bytes_processed: cursor.position(),
    })
}
