//! # cellocator-rs - A Rust Crate for Decoding Cellocator Telemetry Frames
//!
//! Cellocator vehicle-tracking units report their state in a fixed 70 byte
//! frame, usually carried as 140 hex characters. This crate turns one such
//! frame into typed fields: identity, status bitflags, GPS fix, analog
//! readings and the trailing checksum.
//!
//! ## Features
//!
//! - Validate a frame once (length and hex digits), then read any field
//! - Bit-exact status flags, following the protocol's own MSB/LSB numbering
//! - Longitude/latitude in decimal degrees and degrees-minutes-seconds
//! - Hardware, transmission reason and mode names from injectable tables
//! - Embedded and computed checksum exposed side by side for the caller
//! - Serializable report of every field
//!
//! Decoding is pure: there is no I/O and no shared mutable state, so frames can
//! be decoded from any number of threads.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! cellocator-rs = "0.1.0"
//! ```
//!
//! ```rust
//! use cellocator_rs::{decode_frame, CellocatorError};
//!
//! let mut text = "0".repeat(140);
//! text.replace_range(38..40, "0E");
//! let frame = decode_frame(&text)?;
//!
//! assert_eq!(frame.units_mode_of_operation().name, Some("Garage Mode"));
//! assert!(frame.error_detection_code().checksum == 0x0E);
//! # Ok::<(), CellocatorError>(())
//! ```

pub mod checksum;
pub mod constants;
pub mod coordinates;
pub mod error;
pub mod frame;
pub mod logging;
pub mod tables;
pub mod util;

pub use crate::error::CellocatorError;
pub use crate::logging::{init_logger, log_info};

pub use coordinates::{DecimalDegrees, Dms, DmsPair, Hemisphere, Position};
pub use frame::{DecodedFrame, FrameReport, RawFrame};
pub use tables::LookupTables;

/// Decode a 140 character hex frame with the built-in lookup tables.
///
/// # Arguments
/// * `input` - Frame as hex text, upper or lower case
///
/// # Returns
/// * `Ok(DecodedFrame)` - Validated frame ready for field access
/// * `Err(CellocatorError)` - Input empty, of the wrong length or not hex
pub fn decode_frame(input: &str) -> Result<DecodedFrame<'static>, CellocatorError> {
    DecodedFrame::new(input)
}

/// Decode a frame and collect every field.
///
/// # Arguments
/// * `input` - Frame as hex text
///
/// # Returns
/// * `Ok(FrameReport)` - All decoded fields
/// * `Err(CellocatorError)` - Frame rejected at construction
pub fn decode_report(input: &str) -> Result<FrameReport, CellocatorError> {
    Ok(DecodedFrame::new(input)?.report())
}
