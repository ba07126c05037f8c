//! Error types for ncpass-codec.

use thiserror::Error;

/// Main error type for all codec operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NcpassError {
    /// Text contains a character with no code page 1047 mapping.
    #[error("character {0:?} has no code page 1047 mapping")]
    Encoding(char),

    /// A parameter's encoded length does not fit the 16-bit length field.
    #[error("encoded length {0} exceeds the 16-bit length field")]
    LengthOverflow(usize),

    /// Fewer bytes available than a field declares (including the header).
    #[error("message truncated: need {needed} bytes at offset {offset}, buffer holds {available}")]
    Truncated {
        /// Offset at which the read started.
        offset: usize,
        /// Bytes the field requires.
        needed: usize,
        /// Bytes actually available in the buffer.
        available: usize,
    },

    /// A decode range runs past the end of the supplied buffer.
    #[error("range {start}..{end} out of bounds for buffer of {len} bytes")]
    Range {
        /// Requested range start.
        start: usize,
        /// Requested range end (exclusive).
        end: usize,
        /// Buffer length.
        len: usize,
    },
}

/// Result type alias using NcpassError.
pub type Result<T> = std::result::Result<T, NcpassError>;
