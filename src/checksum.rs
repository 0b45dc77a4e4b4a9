//! # Frame Checksum
//!
//! The Cellocator error detection code is a plain 8-bit additive checksum:
//! the sum of every byte in the covered range, modulo 256. It is not a CRC.
//!
//! ```rust
//! use cellocator_rs::checksum::{checksum, checksum_hex};
//!
//! assert_eq!(checksum(&[0x80, 0x7F]), 0xFF);
//! assert_eq!(checksum_hex("807F01").unwrap(), "00");
//! ```

use crate::util::hex::{decode_hex, HexError};

/// Sum of all bytes modulo 256.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Checksum of a hex-encoded byte range as two lowercase hex characters.
///
/// Results below 0x10 are zero-padded, so the output is always two characters.
pub fn checksum_hex(range: &str) -> Result<String, HexError> {
    let bytes = decode_hex(range)?;
    Ok(format!("{:02x}", checksum(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_wraps_at_256() {
        assert_eq!(checksum(&[0xFF, 0x01]), 0x00);
        assert_eq!(checksum_hex("FF01").unwrap(), "00");
    }

    #[test]
    fn test_checksum_255() {
        assert_eq!(checksum_hex("F00F").unwrap(), "ff");
    }

    #[test]
    fn test_checksum_is_zero_padded() {
        assert_eq!(checksum_hex("0203").unwrap(), "05");
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn test_checksum_rejects_bad_hex() {
        assert_eq!(checksum_hex("0Z").unwrap_err(), HexError::InvalidCharacter('Z'));
        assert_eq!(checksum_hex("").unwrap_err(), HexError::EmptyString);
    }
}
