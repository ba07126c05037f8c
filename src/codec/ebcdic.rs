//! Code page 1047 text codec.
//!
//! NCPASS runs on a mainframe and every text field on the wire is EBCDIC
//! (IBM code page 1047, "Latin 1 / Open Systems"). CP1047 is a total
//! bijection with ISO-8859-1, so decoding maps every byte value; encoding
//! fails only for characters above U+00FF.
//!
//! # Example
//!
//! ```
//! use ncpass_codec::codec::{decode_text, encode_text};
//!
//! let bytes = encode_text("OS").unwrap();
//! assert_eq!(bytes, [0xD6, 0xE2]);
//! assert_eq!(decode_text(&bytes, 0, 2).unwrap(), "OS");
//! ```

use crate::error::{NcpassError, Result};

/// CP1047 byte value -> ISO-8859-1 code point.
#[rustfmt::skip]
const EBCDIC_TO_LATIN1: [u8; 256] = [
    0x00, 0x01, 0x02, 0x03, 0x9C, 0x09, 0x86, 0x7F, 0x97, 0x8D, 0x8E, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
    0x10, 0x11, 0x12, 0x13, 0x9D, 0x0A, 0x08, 0x87, 0x18, 0x19, 0x92, 0x8F, 0x1C, 0x1D, 0x1E, 0x1F,
    0x80, 0x81, 0x82, 0x83, 0x84, 0x85, 0x17, 0x1B, 0x88, 0x89, 0x8A, 0x8B, 0x8C, 0x05, 0x06, 0x07,
    0x90, 0x91, 0x16, 0x93, 0x94, 0x95, 0x96, 0x04, 0x98, 0x99, 0x9A, 0x9B, 0x14, 0x15, 0x9E, 0x1A,
    0x20, 0xA0, 0xE2, 0xE4, 0xE0, 0xE1, 0xE3, 0xE5, 0xE7, 0xF1, 0xA2, 0x2E, 0x3C, 0x28, 0x2B, 0x7C,
    0x26, 0xE9, 0xEA, 0xEB, 0xE8, 0xED, 0xEE, 0xEF, 0xEC, 0xDF, 0x21, 0x24, 0x2A, 0x29, 0x3B, 0x5E,
    0x2D, 0x2F, 0xC2, 0xC4, 0xC0, 0xC1, 0xC3, 0xC5, 0xC7, 0xD1, 0xA6, 0x2C, 0x25, 0x5F, 0x3E, 0x3F,
    0xF8, 0xC9, 0xCA, 0xCB, 0xC8, 0xCD, 0xCE, 0xCF, 0xCC, 0x60, 0x3A, 0x23, 0x40, 0x27, 0x3D, 0x22,
    0xD8, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0xAB, 0xBB, 0xF0, 0xFD, 0xFE, 0xB1,
    0xB0, 0x6A, 0x6B, 0x6C, 0x6D, 0x6E, 0x6F, 0x70, 0x71, 0x72, 0xAA, 0xBA, 0xE6, 0xB8, 0xC6, 0xA4,
    0xB5, 0x7E, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7A, 0xA1, 0xBF, 0xD0, 0x5B, 0xDE, 0xAE,
    0xAC, 0xA3, 0xA5, 0xB7, 0xA9, 0xA7, 0xB6, 0xBC, 0xBD, 0xBE, 0xDD, 0xA8, 0xAF, 0x5D, 0xB4, 0xD7,
    0x7B, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0xAD, 0xF4, 0xF6, 0xF2, 0xF3, 0xF5,
    0x7D, 0x4A, 0x4B, 0x4C, 0x4D, 0x4E, 0x4F, 0x50, 0x51, 0x52, 0xB9, 0xFB, 0xFC, 0xF9, 0xFA, 0xFF,
    0x5C, 0xF7, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x5A, 0xB2, 0xD4, 0xD6, 0xD2, 0xD3, 0xD5,
    0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0xB3, 0xDB, 0xDC, 0xD9, 0xDA, 0x9F,
];

/// ISO-8859-1 code point -> CP1047 byte value, inverted at compile time.
const LATIN1_TO_EBCDIC: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut ebcdic = 0usize;
    while ebcdic < 256 {
        table[EBCDIC_TO_LATIN1[ebcdic] as usize] = ebcdic as u8;
        ebcdic += 1;
    }
    table
};

/// Encode text into CP1047 bytes.
///
/// Returns [`NcpassError::Encoding`] for any character outside ISO-8859-1.
pub fn encode_text(s: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        let cp = ch as u32;
        if cp > 0xFF {
            return Err(NcpassError::Encoding(ch));
        }
        out.push(LATIN1_TO_EBCDIC[cp as usize]);
    }
    Ok(out)
}

/// Decode `len` CP1047 bytes starting at `start` into a String.
///
/// Returns [`NcpassError::Range`] if `start + len` exceeds the buffer.
pub fn decode_text(buf: &[u8], start: usize, len: usize) -> Result<String> {
    let end = start.checked_add(len).ok_or(NcpassError::Range {
        start,
        end: usize::MAX,
        len: buf.len(),
    })?;
    if end > buf.len() {
        return Err(NcpassError::Range {
            start,
            end,
            len: buf.len(),
        });
    }
    Ok(buf[start..end]
        .iter()
        .map(|&b| EBCDIC_TO_LATIN1[b as usize] as char)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_bytes() {
        // "OS" header marker, the two bytes every frame starts its header with
        assert_eq!(encode_text("OS").unwrap(), [0xD6, 0xE2]);
    }

    #[test]
    fn test_digits_map_to_f0_f9() {
        let bytes = encode_text("0123456789").unwrap();
        let expected: Vec<u8> = (0xF0..=0xF9).collect();
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_uppercase_letters() {
        assert_eq!(encode_text("ABC").unwrap(), [0xC1, 0xC2, 0xC3]);
        assert_eq!(encode_text("JKL").unwrap(), [0xD1, 0xD2, 0xD3]);
        assert_eq!(encode_text("XYZ").unwrap(), [0xE7, 0xE8, 0xE9]);
    }

    #[test]
    fn test_space_is_0x40() {
        assert_eq!(encode_text(" ").unwrap(), [0x40]);
    }

    #[test]
    fn test_roundtrip_printable_ascii() {
        let s: String = (0x20u8..0x7F).map(|b| b as char).collect();
        let encoded = encode_text(&s).unwrap();
        assert_eq!(decode_text(&encoded, 0, encoded.len()).unwrap(), s);
    }

    #[test]
    fn test_roundtrip_latin1_supplement() {
        let s = "caf\u{e9} \u{fc}ber";
        let encoded = encode_text(s).unwrap();
        assert_eq!(decode_text(&encoded, 0, encoded.len()).unwrap(), s);
    }

    #[test]
    fn test_unmappable_character_rejected() {
        assert_eq!(
            encode_text("snowman \u{2603}"),
            Err(NcpassError::Encoding('\u{2603}'))
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode_text("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode_text(&[], 0, 0).unwrap(), "");
    }

    #[test]
    fn test_decode_range_past_end() {
        let buf = [0xC1, 0xC2, 0xC3];
        assert_eq!(
            decode_text(&buf, 1, 3),
            Err(NcpassError::Range {
                start: 1,
                end: 4,
                len: 3
            })
        );
    }

    #[test]
    fn test_decode_mid_buffer() {
        let buf = encode_text("XXHELLOXX").unwrap();
        assert_eq!(decode_text(&buf, 2, 5).unwrap(), "HELLO");
    }

    #[test]
    fn test_tables_are_inverse() {
        for b in 0u16..256 {
            let latin1 = EBCDIC_TO_LATIN1[b as usize];
            assert_eq!(LATIN1_TO_EBCDIC[latin1 as usize], b as u8);
        }
    }
}
