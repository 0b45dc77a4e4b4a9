//! Raw frame validation and byte slicing.

use std::str::FromStr;

use log::warn;

use crate::constants::{FRAME_LEN_BYTES, FRAME_LEN_HEX};
use crate::error::CellocatorError;
use crate::util::hex::encode_hex_upper;

/// One validated 70 byte frame.
///
/// Keeps the hex text as received alongside the decoded bytes. Construction
/// fails on empty input, on any length other than 140 characters and on the
/// first non-hex character, so every accessor afterwards is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    text: String,
    bytes: [u8; FRAME_LEN_BYTES],
}

impl RawFrame {
    /// Validate a 140 character hex frame (case-insensitive).
    pub fn parse(input: &str) -> Result<Self, CellocatorError> {
        if input.is_empty() {
            warn!("Rejected empty frame");
            return Err(CellocatorError::EmptyFrame);
        }

        let actual = input.chars().count();
        if actual != FRAME_LEN_HEX {
            warn!("Rejected frame of {actual} characters");
            return Err(CellocatorError::InvalidLength {
                expected: FRAME_LEN_HEX,
                actual,
            });
        }

        if let Some((position, character)) = input
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            warn!("Rejected frame with '{character}' at position {position}");
            return Err(CellocatorError::InvalidHex {
                position,
                character,
            });
        }

        let mut bytes = [0u8; FRAME_LEN_BYTES];
        hex::decode_to_slice(input, &mut bytes).map_err(|e| match e {
            hex::FromHexError::InvalidHexCharacter { c, index } => CellocatorError::InvalidHex {
                position: index,
                character: c,
            },
            _ => CellocatorError::InvalidLength {
                expected: FRAME_LEN_HEX,
                actual,
            },
        })?;

        Ok(Self {
            text: input.to_string(),
            bytes,
        })
    }

    /// Wrap 70 bytes received in binary form.
    pub fn from_bytes(data: &[u8]) -> Result<Self, CellocatorError> {
        if data.is_empty() {
            return Err(CellocatorError::EmptyFrame);
        }
        let bytes: [u8; FRAME_LEN_BYTES] =
            data.try_into().map_err(|_| CellocatorError::InvalidLength {
                expected: FRAME_LEN_HEX,
                actual: data.len() * 2,
            })?;
        Ok(Self {
            text: encode_hex_upper(&bytes),
            bytes,
        })
    }

    /// The frame text as received
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// All 70 bytes
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN_BYTES] {
        &self.bytes
    }

    /// The `count * 2` hex characters of `count` bytes starting at byte
    /// `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range ends past byte 70. Offsets come from the fixed
    /// frame layout.
    pub fn hex_field(&self, offset: usize, count: usize) -> &str {
        &self.text[offset * 2..(offset + count) * 2]
    }

    /// `count` bytes starting at byte `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range ends past byte 70.
    pub fn bytes(&self, offset: usize, count: usize) -> &[u8] {
        &self.bytes[offset..offset + count]
    }

    /// Single byte at `offset`.
    pub fn byte(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }
}

impl FromStr for RawFrame {
    type Err = CellocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
