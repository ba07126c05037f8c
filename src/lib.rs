//! # ncpass-codec
//!
//! Message codec for the NCPASS TLI interface, the mainframe-resident
//! two-factor authentication service that validates hardware token codes
//! paired with user identifiers.
//!
//! The crate is purely computational: it builds outbound handshake and
//! authentication request frames and decodes the server's responses. The
//! caller owns the transport - it sends the bytes an encode call returns and
//! hands a complete framed response to the matching decode call. All text on
//! the wire is EBCDIC (code page 1047); all multi-byte integers are big
//! endian.
//!
//! ## Example
//!
//! ```
//! use ncpass_codec::Session;
//!
//! let session = Session::new();
//! let handshake = session.build_handshake("APP1").unwrap();
//! let request = session.build_auth_request("jdoe", "123456").unwrap();
//! // send `handshake`, read the response, then send `request` and decode
//! // the reply once the full frame has arrived:
//! // let fields = decode_auth_response(&response_bytes)?;
//! # drop((handshake, request));
//! ```

pub mod codec;
pub mod error;
pub mod protocol;

pub use error::{NcpassError, Result};
pub use protocol::{
    decode_auth_response, decode_handshake_response, AuthResponseFields, HandshakeFields, Header,
    Session,
};
