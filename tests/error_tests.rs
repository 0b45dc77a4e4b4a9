//! Unit tests for the `CellocatorError` and `HexError` enums and their `Display` output.

use cellocator_rs::util::hex::HexError;
use cellocator_rs::CellocatorError;

/// Tests that the `EmptyFrame` variant is correctly formatted.
#[test]
fn test_empty_frame_error() {
    let err = CellocatorError::EmptyFrame;
    assert_eq!(
        err.to_string(),
        "Empty frame: a 70 byte (140 hex character) frame is required"
    );
}

/// Tests that the `InvalidLength` variant is correctly formatted.
#[test]
fn test_invalid_length_error() {
    let err = CellocatorError::InvalidLength {
        expected: 140,
        actual: 138,
    };
    assert_eq!(
        err.to_string(),
        "Invalid frame length: expected 140 hex characters, got 138"
    );
}

/// Tests that the `InvalidHex` variant is correctly formatted.
#[test]
fn test_invalid_hex_error() {
    let err = CellocatorError::InvalidHex {
        position: 7,
        character: 'x',
    };
    assert_eq!(err.to_string(), "Invalid hex character 'x' at position 7");
}

/// Tests that the `ChecksumMismatch` variant is correctly formatted.
#[test]
fn test_checksum_mismatch_error() {
    let err = CellocatorError::ChecksumMismatch {
        embedded: 0x0D,
        computed: 0xE0,
    };
    assert_eq!(
        err.to_string(),
        "Invalid checksum: frame carries 0x0D, calculated 0xE0"
    );
}

/// Tests that a `HexError` converts into `CellocatorError::Hex`.
#[test]
fn test_hex_error_conversion() {
    let err: CellocatorError = HexError::OddLength(3).into();
    assert_eq!(err, CellocatorError::Hex(HexError::OddLength(3)));
    assert_eq!(
        err.to_string(),
        "Hex conversion error: Odd number of hex characters: 3"
    );
}

/// Tests the `HexError` messages.
#[test]
fn test_hex_error_messages() {
    assert_eq!(
        HexError::InvalidCharacter('g').to_string(),
        "Invalid hex character: g"
    );
    assert_eq!(
        HexError::InvalidBinaryCharacter('2').to_string(),
        "Invalid binary character: 2"
    );
    assert_eq!(HexError::EmptyString.to_string(), "Empty hex string");
    assert_eq!(
        HexError::Overflow("1FFFFFFFFFFFFFFFF".to_string()).to_string(),
        "Value does not fit in 64 bits: 1FFFFFFFFFFFFFFFF"
    );
}

/// Tests that a checksum failure surfaces through `anyhow` like the CLI uses it.
#[test]
fn test_error_through_anyhow() {
    fn verify() -> anyhow::Result<()> {
        Err(CellocatorError::ChecksumMismatch {
            embedded: 1,
            computed: 2,
        }
        .into())
    }
    let err = verify().unwrap_err();
    assert!(err.downcast_ref::<CellocatorError>().is_some());
}
