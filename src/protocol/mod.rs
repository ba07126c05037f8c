//! Protocol module - wire format, message builders, and response decoders.
//!
//! This module implements the NCPASS TLI binary protocol:
//! - length-prefixed frame and 14-byte header encoding/decoding
//! - handshake and authentication request builders
//! - typed response decoders with result-code label translation

mod auth;
mod codes;
mod handshake;
mod session;
mod wire_format;

pub use auth::{build_auth_request, decode_auth_response, AuthResponseFields};
pub use codes::{authentication_label, validation_label};
pub use handshake::{build_handshake, decode_handshake_response, HandshakeFields};
pub use session::Session;
pub use wire_format::{
    finish_frame, put_header, Header, HEADER_SIZE, MARKER, PROCESS_AUTH, PROCESS_HANDSHAKE,
};
