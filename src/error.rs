//! # Cellocator Error Handling
//!
//! This module defines the CellocatorError enum, which represents the different
//! error types that can occur in the cellocator-rs crate.

use crate::util::hex::HexError;
use thiserror::Error;

/// Represents the different error types that can occur while decoding a frame.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CellocatorError {
    /// No frame text was supplied.
    #[error("Empty frame: a 70 byte (140 hex character) frame is required")]
    EmptyFrame,

    /// The frame does not have the fixed protocol length.
    #[error("Invalid frame length: expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A character of the frame is not a hexadecimal digit.
    #[error("Invalid hex character '{character}' at position {position}")]
    InvalidHex { position: usize, character: char },

    /// A conversion helper rejected its input.
    #[error("Hex conversion error: {0}")]
    Hex(#[from] HexError),

    /// Embedded and computed checksums differ. Only raised by callers that
    /// choose to enforce the checksum.
    #[error("Invalid checksum: frame carries 0x{embedded:02X}, calculated 0x{computed:02X}")]
    ChecksumMismatch { embedded: u8, computed: u8 },
}
