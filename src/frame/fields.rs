//! Typed values returned by the frame accessors.
//!
//! Bit positions below are counted from the least significant bit (bit 0).

use std::fmt;

use bitflags::bitflags;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

use crate::coordinates::Position;
use crate::error::CellocatorError;
use crate::util::hex::left_pad;

/// Communication control field (bytes 9 and 10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommunicationControl {
    /// Byte 9, bit 0
    pub active_transmission: bool,
    /// Byte 9, bit 7
    pub garmin_disabled: bool,
    /// Byte 9, bit 6
    pub garmin_not_connected: bool,
    /// Byte 9, bit 5
    pub direct_from_ram: bool,
    /// Byte 9, bits 4..3
    pub psp_mode: u8,
    /// Byte 9, bit 2
    pub not_can_originated_speed: bool,
    /// Byte 9, bit 7. Shares its bit with `garmin_disabled`.
    pub not_can_originated_odometer: bool,
    /// Byte 10, bit 7
    pub no_hibernation: bool,
    /// Byte 10, bit 6
    pub momentary_speed: bool,
    /// Byte 10, bits 4..0
    pub h: u8,
}

/// Units hardware version (byte 12) with names resolved from the hardware
/// table. `model` and `modem` are `None` when the combination is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HardwareVersion {
    /// Bits 4..0
    pub model_id: u8,
    /// Bits 7..5
    pub modem_code: u8,
    pub model: Option<&'static str>,
    pub modem: Option<&'static str>,
}

/// Units status nibble and first PLMN nibble (byte 15)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitsStatus {
    /// Bit 3
    pub speed_estimated_by_gps: bool,
    /// Bit 2
    pub correct_time: bool,
    /// Bit 1
    pub home_network: bool,
    /// Bit 0
    pub gps_communication_available: bool,
    /// Bits 7..4
    pub current_gsm_operator_first_nibble: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransmissionReason {
    pub code: u8,
    pub name: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeOfOperation {
    /// Two uppercase hex characters
    pub code: String,
    pub name: Option<&'static str>,
}

bitflags! {
    /// First I/O status byte (byte 20)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct IoStatus1: u8 {
        const UNLOCK_INACTIVE = 0b1000_0000;
        const PANIC_INACTIVE  = 0b0100_0000;
        const DRIVING_STATUS  = 0b0010_0000;
        const SHOCK_INACTIVE  = 0b0000_0010;
        const DOOR_INACTIVE   = 0b0000_0001;
    }
}

bitflags! {
    /// Second I/O status byte (byte 21)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct IoStatus2: u8 {
        const IGNITION_PORT_STATUS = 0b1000_0000;
        const ACCELEROMETER_STATUS = 0b0100_0000;
        const LOCK                 = 0b0000_0100;
    }
}

bitflags! {
    /// Third I/O status byte (byte 22)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct IoStatus3: u8 {
        const GPS_POWER             = 0b0000_1000;
        const GRADUAL_STOP_INACTIVE = 0b0000_0100;
        const SIREN_INACTIVE        = 0b0000_0010;
    }
}

bitflags! {
    /// Fourth I/O status byte (byte 23)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct IoStatus4: u8 {
        const NOT_CHARGING         = 0b1000_0000;
        const STANDARD_IMMOBILIZER = 0b0010_0000;
        const GLOBAL_OUTPUT        = 0b0000_1000;
        const LED_INACTIVE         = 0b0000_0001;
    }
}

/// Fourth I/O status byte together with the PLMN it completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputOutputStatus4 {
    pub flags: IoStatus4,
    /// Operator network id: byte 15 high nibble, byte 16, byte 24
    pub plmn: u32,
}

/// Day and time of the last valid GPS fix (bytes 38-39).
///
/// The 16-bit word is packed MSB first as 5 bits day, 5 bits hours, 6 bits
/// minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LastGpsFix {
    pub day_of_month: u8,
    pub hours: u8,
    pub minutes: u8,
}

impl fmt::Display for LastGpsFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{}",
            left_pad(self.day_of_month, 2, '0'),
            left_pad(self.hours, 2, '0'),
            left_pad(self.minutes, 2, '0')
        )
    }
}

/// An 8-bit status byte shown as MSB-first binary text
/// (location status, mode 1 and mode 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusByte(pub u8);

impl StatusByte {
    pub fn value(self) -> u8 {
        self.0
    }

    /// Bit `index` counted from the least significant bit
    pub fn bit(self, index: u8) -> bool {
        crate::util::bits::bit_lsb(self.0, index)
    }

    /// Eight `0`/`1` characters, most significant bit first
    pub fn binary(self) -> String {
        left_pad(format!("{:b}", self.0), 8, '0')
    }
}

impl fmt::Display for StatusByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.binary())
    }
}

impl Serialize for StatusByte {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.binary())
    }
}

/// UTC date and time of the position fix (bytes 62-68)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UtcTimestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl UtcTimestamp {
    /// Calendar date and time, or `None` if the fields do not form one
    /// (an all-zero frame has month 0).
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )?
        .and_hms_opt(
            u32::from(self.hours),
            u32::from(self.minutes),
            u32::from(self.seconds),
        )
    }
}

impl fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hours, self.minutes, self.seconds
        )
    }
}

/// Embedded checksum byte (byte 69) and the checksum computed over bytes 4-68.
///
/// The decoder never rejects a mismatch. Call [`ErrorDetectionCode::verify`]
/// or compare the fields to apply a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDetectionCode {
    pub code: u8,
    pub checksum: u8,
}

impl ErrorDetectionCode {
    pub fn is_valid(&self) -> bool {
        self.code == self.checksum
    }

    pub fn verify(&self) -> Result<(), CellocatorError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CellocatorError::ChecksumMismatch {
                embedded: self.code,
                computed: self.checksum,
            })
        }
    }

    /// Embedded checksum as two uppercase hex characters
    pub fn code_hex(&self) -> String {
        format!("{:02X}", self.code)
    }

    /// Computed checksum as two uppercase hex characters
    pub fn checksum_hex(&self) -> String {
        format!("{:02X}", self.checksum)
    }
}

impl Serialize for ErrorDetectionCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ErrorDetectionCode", 3)?;
        state.serialize_field("code", &self.code_hex())?;
        state.serialize_field("checksum", &self.checksum_hex())?;
        state.serialize_field("valid", &self.is_valid())?;
        state.end()
    }
}

/// Every field of a frame, collected for serialization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub system_code: String,
    pub message_type: u8,
    pub units_id: u32,
    pub communication_control_field: CommunicationControl,
    pub message_numerator: u8,
    pub units_hardware_version: HardwareVersion,
    pub units_software_version: u8,
    pub protocol_version_identifier: u8,
    pub units_status: UnitsStatus,
    pub current_gsm_operator: u8,
    pub transmission_reason_specific_data: u8,
    pub transmission_reason: TransmissionReason,
    pub units_mode_of_operation: ModeOfOperation,
    pub units_io_status_1: IoStatus1,
    pub units_io_status_2: IoStatus2,
    pub units_io_status_3: IoStatus3,
    pub units_io_status_4: InputOutputStatus4,
    pub analog_input_1_value: f64,
    pub analog_input_2_value: f64,
    pub analog_input_3_value: f64,
    pub analog_input_4_value: f64,
    pub mileage_counter: u32,
    pub multi_purpose_field: String,
    pub last_gps_fix: LastGpsFix,
    pub location_status: StatusByte,
    pub mode1: StatusByte,
    pub mode2: StatusByte,
    pub number_of_satellites_used: u8,
    pub longitude_and_latitude: Position,
    pub altitude: String,
    pub ground_speed: String,
    pub speed_direction: f64,
    pub utc_time_seconds: String,
    pub utc_time_minutes: String,
    pub utc_time_hours: String,
    pub utc_time_day: String,
    pub utc_time_month: String,
    pub utc_time_year: String,
    pub error_detection_code: ErrorDetectionCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_byte_binary() {
        assert_eq!(StatusByte(0x02).binary(), "00000010");
        assert_eq!(StatusByte(0xFF).to_string(), "11111111");
        assert!(StatusByte(0x02).bit(1));
        assert!(!StatusByte(0x02).bit(0));
    }

    #[test]
    fn test_last_gps_fix_display() {
        let fix = LastGpsFix {
            day_of_month: 5,
            hours: 9,
            minutes: 7,
        };
        assert_eq!(fix.to_string(), "05 09:07");
    }

    #[test]
    fn test_utc_timestamp_to_datetime() {
        let ts = UtcTimestamp {
            year: 2024,
            month: 3,
            day: 15,
            hours: 14,
            minutes: 30,
            seconds: 5,
        };
        assert_eq!(ts.to_string(), "2024-03-15 14:30:05");
        let dt = ts.to_datetime().unwrap();
        assert_eq!(dt.to_string(), "2024-03-15 14:30:05");

        let zero = UtcTimestamp {
            year: 0,
            month: 0,
            day: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        };
        assert!(zero.to_datetime().is_none());
    }

    #[test]
    fn test_error_detection_code_verify() {
        let ok = ErrorDetectionCode {
            code: 0x0D,
            checksum: 0x0D,
        };
        assert!(ok.verify().is_ok());
        assert_eq!(ok.code_hex(), "0D");

        let bad = ErrorDetectionCode {
            code: 0x0D,
            checksum: 0xA0,
        };
        assert!(!bad.is_valid());
        assert_eq!(
            bad.verify().unwrap_err(),
            CellocatorError::ChecksumMismatch {
                embedded: 0x0D,
                computed: 0xA0
            }
        );
    }

    #[test]
    fn test_io_flags_truncate_unnamed_bits() {
        let flags = IoStatus2::from_bits_truncate(0xFF);
        assert_eq!(
            flags,
            IoStatus2::IGNITION_PORT_STATUS | IoStatus2::ACCELEROMETER_STATUS | IoStatus2::LOCK
        );
    }
}
