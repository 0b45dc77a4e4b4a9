//! # Bit Extraction Utilities
//!
//! Typed bit-range extraction over the integers of a decoded frame.
//!
//! The Cellocator protocol numbers some flags from the most significant bit of
//! a byte and others from the least significant bit of the same byte, so both
//! directions are provided and every field documents which one it uses.
//!
//! ## Usage
//!
//! ```rust
//! use cellocator_rs::util::bits::{bit_lsb, bit_msb, bits_msb};
//!
//! let byte = 0b1000_0001;
//! assert!(bit_msb(byte, 0)); // most significant bit
//! assert!(bit_lsb(byte, 0)); // least significant bit
//!
//! // 5-bit day of month at the top of a 16-bit word
//! assert_eq!(bits_msb(0x7A9E, 16, 0, 5), 15);
//! ```

/// Bit `index` of a byte counted from the most significant bit (0 = MSB).
#[inline]
pub fn bit_msb(byte: u8, index: u8) -> bool {
    debug_assert!(index < 8);
    (byte >> (7 - index)) & 1 == 1
}

/// Bit `index` of a byte counted from the least significant bit (0 = LSB).
#[inline]
pub fn bit_lsb(byte: u8, index: u8) -> bool {
    debug_assert!(index < 8);
    (byte >> index) & 1 == 1
}

/// `len` bits of a `width`-bit word, starting `start` bits below the most
/// significant bit.
///
/// `bits_msb(0b1011_0000, 8, 1, 3)` reads bits 6..=4 and yields `0b011`.
#[inline]
pub fn bits_msb(value: u32, width: u8, start: u8, len: u8) -> u32 {
    debug_assert!(len > 0 && start + len <= width && width <= 32);
    let shift = width - start - len;
    (value >> shift) & mask(len)
}

/// `len` bits starting at bit `start` counted from the least significant bit.
#[inline]
pub fn bits_lsb(value: u32, start: u8, len: u8) -> u32 {
    debug_assert!(len > 0 && start + len <= 32);
    (value >> start) & mask(len)
}

#[inline]
fn mask(len: u8) -> u32 {
    if len >= 32 {
        u32::MAX
    } else {
        (1u32 << len) - 1
    }
}

/// Read a little-endian (on-wire order) unsigned value of up to 8 bytes.
///
/// Equivalent to reversing the byte order of the field's hex text and then
/// reading it as a big-endian number.
pub fn le_value(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8);
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_msb_and_lsb_mirror() {
        for i in 0..8u8 {
            let byte = 1u8 << i;
            assert!(bit_lsb(byte, i));
            assert!(bit_msb(byte, 7 - i));
            assert!(!bit_lsb(byte, (i + 1) % 8));
        }
    }

    #[test]
    fn test_bits_msb_groups() {
        // 0b000_11111: modem code 0, model id 31
        assert_eq!(bits_msb(0x1F, 8, 0, 3), 0);
        assert_eq!(bits_msb(0x1F, 8, 3, 5), 31);
        // 0b010_01101
        assert_eq!(bits_msb(0x4D, 8, 0, 3), 2);
        assert_eq!(bits_msb(0x4D, 8, 3, 5), 13);
        // last GPS fix: day 15, hour 10, minute 30
        assert_eq!(bits_msb(0x7A9E, 16, 0, 5), 15);
        assert_eq!(bits_msb(0x7A9E, 16, 5, 5), 10);
        assert_eq!(bits_msb(0x7A9E, 16, 10, 6), 30);
    }

    #[test]
    fn test_bits_lsb() {
        assert_eq!(bits_lsb(0b1011_0110, 1, 3), 0b011);
        assert_eq!(bits_lsb(0xFFFF_FFFF, 0, 32), u32::MAX);
    }

    #[test]
    fn test_le_value() {
        assert_eq!(le_value(&[0x01, 0x00, 0x00, 0x00]), 1);
        assert_eq!(le_value(&[0x45, 0x23, 0x01]), 0x012345);
        assert_eq!(le_value(&[0xE8, 0x07]), 2024);
        assert_eq!(le_value(&[]), 0);
    }
}
