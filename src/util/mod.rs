//! # Utility Modules
//!
//! This module provides the byte and bit accessors used throughout the
//! cellocator-rs crate: hex/decimal/binary conversions, byte-order reversal
//! and typed bit extraction.

pub mod bits;
pub mod hex;

// Re-export commonly used types and functions
pub use bits::{bit_lsb, bit_msb, bits_lsb, bits_msb, le_value};
pub use hex::{
    ascii_from_hex, binary_to_decimal, decimal_to_hex, decode_hex, encode_hex_upper,
    hex_to_binary, hex_to_decimal, invert_bits, latin1_from_bytes, left_pad,
    reverse_byte_order, HexError,
};
