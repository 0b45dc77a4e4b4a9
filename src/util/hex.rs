//! # Hex Conversion Utilities
//!
//! This module provides the base conversions used to pick apart a hex-encoded
//! Cellocator frame: hexadecimal, decimal and binary text, byte-order reversal
//! of little-endian fields, fixed-width padding and Latin-1 decoding.
//!
//! All numeric conversions are unsigned. Signed coordinates are handled by the
//! caller (see [`crate::coordinates`]).
//!
//! ## Usage
//!
//! ```rust
//! use cellocator_rs::util::hex::{hex_to_decimal, reverse_byte_order, left_pad};
//!
//! // On-wire little-endian units id 01000000 is numerically 00000001
//! let be = reverse_byte_order("01000000");
//! assert_eq!(be, "00000001");
//! assert_eq!(hex_to_decimal(&be).unwrap(), 1);
//!
//! assert_eq!(left_pad(7, 2, '0'), "07");
//! ```

use std::fmt::Display;
use thiserror::Error;

/// Errors that can occur during hex operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("Invalid hex character: {0}")]
    InvalidCharacter(char),

    #[error("Invalid binary character: {0}")]
    InvalidBinaryCharacter(char),

    #[error("Odd number of hex characters: {0}")]
    OddLength(usize),

    #[error("Empty hex string")]
    EmptyString,

    #[error("Value does not fit in 64 bits: {0}")]
    Overflow(String),

    #[error("Hex decoding error: {0}")]
    DecodeError(String),
}

fn check_hex_digits(hex_str: &str) -> Result<(), HexError> {
    if hex_str.is_empty() {
        return Err(HexError::EmptyString);
    }
    match hex_str.chars().find(|c| !c.is_ascii_hexdigit()) {
        Some(c) => Err(HexError::InvalidCharacter(c)),
        None => Ok(()),
    }
}

/// Encode bytes to uppercase hex string
pub fn encode_hex_upper(data: &[u8]) -> String {
    hex::encode_upper(data)
}

/// Decode hex string to bytes
///
/// Accepts both uppercase and lowercase hex characters.
/// Whitespace is automatically stripped.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, HexError> {
    let cleaned: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();

    check_hex_digits(&cleaned)?;
    if cleaned.len() % 2 != 0 {
        return Err(HexError::OddLength(cleaned.len()));
    }

    hex::decode(&cleaned).map_err(|e| HexError::DecodeError(e.to_string()))
}

/// Interpret a hex string as an unsigned integer.
pub fn hex_to_decimal(hex_str: &str) -> Result<u64, HexError> {
    check_hex_digits(hex_str)?;
    u64::from_str_radix(hex_str, 16).map_err(|_| HexError::Overflow(hex_str.to_string()))
}

/// Render an unsigned integer as lowercase hex without padding.
pub fn decimal_to_hex(value: u64) -> String {
    format!("{value:x}")
}

/// Render a hex string as binary text without leading zeros.
///
/// Use [`left_pad`] when a fixed width is needed before slicing bits.
pub fn hex_to_binary(hex_str: &str) -> Result<String, HexError> {
    Ok(format!("{:b}", hex_to_decimal(hex_str)?))
}

/// Interpret a string of `0`/`1` characters as an unsigned integer.
pub fn binary_to_decimal(binary: &str) -> Result<u64, HexError> {
    if binary.is_empty() {
        return Err(HexError::EmptyString);
    }
    if let Some(c) = binary.chars().find(|c| !matches!(c, '0' | '1')) {
        return Err(HexError::InvalidBinaryCharacter(c));
    }
    u64::from_str_radix(binary, 2).map_err(|_| HexError::Overflow(binary.to_string()))
}

/// Reverse the order of the 2-character byte groups of a hex string.
///
/// Each byte keeps its own two characters in place, so `"A1B2C3"` becomes
/// `"C3B2A1"`. A trailing odd character is dropped.
pub fn reverse_byte_order(hex_str: &str) -> String {
    let chars: Vec<char> = hex_str.chars().collect();
    chars.chunks_exact(2).rev().flatten().collect()
}

/// Left-pad the textual form of `value` with `pad` up to `width` characters.
///
/// Values already at least `width` characters long are returned unchanged.
pub fn left_pad<T: Display>(value: T, width: usize, pad: char) -> String {
    let value = value.to_string();
    let len = value.chars().count();
    if len >= width {
        return value;
    }
    let mut padded: String = std::iter::repeat(pad).take(width - len).collect();
    padded.push_str(&value);
    padded
}

/// Decode bytes as Latin-1 code points.
pub fn latin1_from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Decode each 2-character hex byte as its Latin-1/ASCII character.
pub fn ascii_from_hex(hex_str: &str) -> Result<String, HexError> {
    Ok(latin1_from_bytes(&decode_hex(hex_str)?))
}

/// Flip every bit of a binary string. Any character other than `'0'` becomes
/// `'0'`; empty input gives empty output.
pub fn invert_bits(binary: &str) -> String {
    binary
        .chars()
        .map(|c| if c == '0' { '1' } else { '0' })
        .collect()
}
