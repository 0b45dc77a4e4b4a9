//! # Cellocator Frames
//!
//! A frame is 70 bytes, carried as 140 hex characters. [`RawFrame`] validates
//! and holds the input; [`DecodedFrame`] exposes its fields.

pub mod decoder;
pub mod fields;
pub mod raw;

pub use decoder::DecodedFrame;
pub use fields::{
    CommunicationControl, ErrorDetectionCode, FrameReport, HardwareVersion, InputOutputStatus4,
    IoStatus1, IoStatus2, IoStatus3, IoStatus4, LastGpsFix, ModeOfOperation, StatusByte,
    TransmissionReason, UnitsStatus, UtcTimestamp,
};
pub use raw::RawFrame;
