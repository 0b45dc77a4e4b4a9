//! Unit tests for the hex and bit helpers in the `util` module and for the checksum.

use cellocator_rs::checksum::{checksum, checksum_hex};
use cellocator_rs::util::bits::{bits_msb, le_value};
use cellocator_rs::util::hex::{
    ascii_from_hex, decimal_to_hex, hex_to_binary, hex_to_decimal, left_pad, reverse_byte_order,
};

/// Tests the little-endian reading of a multi-byte field.
#[test]
fn test_reverse_then_parse_matches_le_value() {
    let field = "40E20100";
    let reversed = reverse_byte_order(field);
    assert_eq!(reversed, "0001E240");
    assert_eq!(hex_to_decimal(&reversed).unwrap(), 123_456);
    assert_eq!(le_value(&[0x40, 0xE2, 0x01, 0x00]), 123_456);
}

/// Tests that binary text is unpadded and needs `left_pad` before slicing.
#[test]
fn test_binary_rendering_needs_padding() {
    let binary = hex_to_binary("0D").unwrap();
    assert_eq!(binary, "1101");
    assert_eq!(left_pad(&binary, 8, '0'), "00001101");
}

#[test]
fn test_decimal_to_hex_lowercase() {
    assert_eq!(decimal_to_hex(255), "ff");
    assert_eq!(decimal_to_hex(0), "0");
}

#[test]
fn test_ascii_from_hex() {
    assert_eq!(ascii_from_hex("4D434750").unwrap(), "MCGP");
    assert!(ascii_from_hex("4D4").is_err());
}

#[test]
fn test_bits_msb_hardware_split() {
    // 0x4D = 010 01101
    assert_eq!(bits_msb(0x4D, 8, 0, 3), 2);
    assert_eq!(bits_msb(0x4D, 8, 3, 5), 13);
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_reverse_byte_order_is_involution(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
            let text = hex::encode_upper(&bytes);
            prop_assert_eq!(reverse_byte_order(&reverse_byte_order(&text)), text);
        }

        #[test]
        fn prop_left_pad_length_and_suffix(value in "[0-9A-F]{0,12}", width in 0usize..16) {
            let padded = left_pad(&value, width, '0');
            prop_assert_eq!(padded.len(), width.max(value.len()));
            prop_assert!(padded.ends_with(&value));
        }

        #[test]
        fn prop_checksum_is_sum_mod_256(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
            let expected = bytes.iter().map(|&b| u32::from(b)).sum::<u32>() % 256;
            prop_assert_eq!(u32::from(checksum(&bytes)), expected);
        }

        #[test]
        fn prop_checksum_hex_is_two_characters(bytes in prop::collection::vec(any::<u8>(), 1..128)) {
            let text = checksum_hex(&hex::encode(&bytes)).unwrap();
            prop_assert_eq!(text.len(), 2);
            prop_assert_eq!(u8::from_str_radix(&text, 16).unwrap(), checksum(&bytes));
        }
    }
}
