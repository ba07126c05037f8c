//! Session-scoped codec entry point.
//!
//! A [`Session`] owns the transaction id that correlates a handshake with
//! the authentication request that follows it. Use one session per logical
//! exchange; a shared session would reuse one id across in-flight requests
//! and break correlation.
//!
//! # Example
//!
//! ```
//! use ncpass_codec::Session;
//!
//! let session = Session::new();
//! let handshake = session.build_handshake("APP1").unwrap();
//! let request = session.build_auth_request("jdoe", "123456").unwrap();
//! // the caller transmits the frames and feeds response bytes to
//! // decode_handshake_response / decode_auth_response
//! assert_eq!(session.transaction_id().len(), 6);
//! # drop((handshake, request));
//! ```

use bytes::Bytes;
use rand::rngs::OsRng;
use rand::Rng;

use super::auth::build_auth_request;
use super::handshake::build_handshake;
use crate::error::Result;

/// One logical NCPASS exchange.
///
/// The transaction id is drawn once at construction from the operating
/// system's CSPRNG and never changes for the session's lifetime.
#[derive(Debug, Clone)]
pub struct Session {
    transaction_id: String,
}

impl Session {
    /// Create a session with a fresh random transaction id.
    ///
    /// The id is always exactly 6 ASCII decimal digits, zero-padded, so the
    /// header's fixed 6-byte transaction field is always exactly filled.
    pub fn new() -> Self {
        let id: u32 = OsRng.gen_range(0..1_000_000);
        let transaction_id = format!("{:06}", id);
        tracing::debug!(transaction_id = %transaction_id, "new NCPASS session");
        Self { transaction_id }
    }

    /// Create a session with a fixed transaction id.
    ///
    /// The id must be exactly 6 ASCII decimal digits.
    pub fn with_transaction_id(transaction_id: impl Into<String>) -> Self {
        let transaction_id = transaction_id.into();
        debug_assert!(
            transaction_id.len() == 6 && transaction_id.bytes().all(|b| b.is_ascii_digit()),
            "transaction id must be exactly 6 ASCII digits"
        );
        Self { transaction_id }
    }

    /// The session's transaction id.
    #[inline]
    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    /// Build the handshake frame for this session.
    pub fn build_handshake(&self, app_id: &str) -> Result<Bytes> {
        build_handshake(&self.transaction_id, app_id)
    }

    /// Build the authentication request frame for this session.
    pub fn build_auth_request(&self, user_id: &str, token_code: &str) -> Result<Bytes> {
        build_auth_request(&self.transaction_id, user_id, token_code)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::decode_handshake_response;

    #[test]
    fn test_transaction_id_is_six_digits() {
        for _ in 0..50 {
            let session = Session::new();
            let id = session.transaction_id();
            assert_eq!(id.len(), 6);
            assert!(id.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_transaction_id_constant_for_lifetime() {
        let session = Session::new();
        let id = session.transaction_id().to_string();
        session.build_handshake("APP1").unwrap();
        session.build_auth_request("jdoe", "123456").unwrap();
        assert_eq!(session.transaction_id(), id);
    }

    #[test]
    fn test_handshake_and_request_share_transaction_id() {
        let session = Session::with_transaction_id("008421");
        let handshake = session.build_handshake("APP1").unwrap();
        let request = session.build_auth_request("jdoe", "123456").unwrap();
        // transaction id occupies bytes 4..10 of either frame
        assert_eq!(&handshake[4..10], &request[4..10]);
        let fields = decode_handshake_response(&handshake).unwrap();
        assert_eq!(fields.header.transaction_id, "008421");
    }

    #[test]
    fn test_session_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Session>();
    }
}
