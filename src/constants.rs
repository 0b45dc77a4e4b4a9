//! Cellocator Frame Constants
//!
//! This module defines the fixed frame layout (byte offsets and widths, all
//! 0-indexed) and the scaling constants of the analog and GPS fields.

/// Frame length in bytes
pub const FRAME_LEN_BYTES: usize = 70;

/// Frame length in hex characters
pub const FRAME_LEN_HEX: usize = FRAME_LEN_BYTES * 2;

// ----------------------------------------------------------------------------
// Identity
// ----------------------------------------------------------------------------

pub const SYSTEM_CODE_OFFSET: usize = 0;
pub const SYSTEM_CODE_LEN: usize = 4;
pub const MESSAGE_TYPE_OFFSET: usize = 4;
pub const UNITS_ID_OFFSET: usize = 5;
pub const UNITS_ID_LEN: usize = 4;
pub const COMMUNICATION_CONTROL_OFFSET: usize = 9;
pub const MESSAGE_NUMERATOR_OFFSET: usize = 11;
pub const HARDWARE_VERSION_OFFSET: usize = 12;
pub const SOFTWARE_VERSION_OFFSET: usize = 13;
pub const PROTOCOL_VERSION_OFFSET: usize = 14;

// ----------------------------------------------------------------------------
// Status and reason
// ----------------------------------------------------------------------------

pub const UNITS_STATUS_OFFSET: usize = 15;
pub const CURRENT_GSM_OPERATOR_OFFSET: usize = 16;
pub const TRANSMISSION_REASON_DATA_OFFSET: usize = 17;
pub const TRANSMISSION_REASON_OFFSET: usize = 18;
pub const MODE_OF_OPERATION_OFFSET: usize = 19;
pub const IO_STATUS_1_OFFSET: usize = 20;
pub const IO_STATUS_2_OFFSET: usize = 21;
pub const IO_STATUS_3_OFFSET: usize = 22;
pub const IO_STATUS_4_OFFSET: usize = 23;
/// Last PLMN byte, carried after the 4th I/O status byte
pub const PLMN_LOW_BYTE_OFFSET: usize = 24;

// ----------------------------------------------------------------------------
// Analog inputs, odometer and multi-purpose field
// ----------------------------------------------------------------------------

pub const ANALOG_INPUT_1_OFFSET: usize = 25;
pub const ANALOG_INPUT_2_OFFSET: usize = 26;
pub const ANALOG_INPUT_3_OFFSET: usize = 27;
pub const ANALOG_INPUT_4_OFFSET: usize = 28;
pub const MILEAGE_COUNTER_OFFSET: usize = 29;
pub const MILEAGE_COUNTER_LEN: usize = 3;
pub const MULTI_PURPOSE_OFFSET: usize = 32;
pub const MULTI_PURPOSE_LEN: usize = 6;

// ----------------------------------------------------------------------------
// GPS
// ----------------------------------------------------------------------------

pub const LAST_GPS_FIX_OFFSET: usize = 38;
pub const LAST_GPS_FIX_LEN: usize = 2;
pub const LOCATION_STATUS_OFFSET: usize = 40;
pub const MODE1_OFFSET: usize = 41;
pub const MODE2_OFFSET: usize = 42;
pub const SATELLITES_USED_OFFSET: usize = 43;
pub const LONGITUDE_OFFSET: usize = 44;
pub const LATITUDE_OFFSET: usize = 48;
pub const COORDINATE_LEN: usize = 4;
pub const ALTITUDE_OFFSET: usize = 52;
pub const ALTITUDE_LEN: usize = 4;
pub const GROUND_SPEED_OFFSET: usize = 56;
pub const GROUND_SPEED_LEN: usize = 4;
pub const SPEED_DIRECTION_OFFSET: usize = 60;
pub const SPEED_DIRECTION_LEN: usize = 2;

// ----------------------------------------------------------------------------
// UTC time of the fix
// ----------------------------------------------------------------------------

pub const UTC_SECONDS_OFFSET: usize = 62;
pub const UTC_MINUTES_OFFSET: usize = 63;
pub const UTC_HOURS_OFFSET: usize = 64;
pub const UTC_DAY_OFFSET: usize = 65;
pub const UTC_MONTH_OFFSET: usize = 66;
pub const UTC_YEAR_OFFSET: usize = 67;
pub const UTC_YEAR_LEN: usize = 2;

// ----------------------------------------------------------------------------
// Error detection
// ----------------------------------------------------------------------------

pub const ERROR_DETECTION_CODE_OFFSET: usize = 69;
/// Checksum covers message type up to the byte before the checksum
pub const CHECKSUM_RANGE_START: usize = MESSAGE_TYPE_OFFSET;
pub const CHECKSUM_RANGE_END: usize = ERROR_DETECTION_CODE_OFFSET;

// ----------------------------------------------------------------------------
// Scaling
// ----------------------------------------------------------------------------

/// Main supply voltage per count
pub const ANALOG_INPUT_1_SCALE: f64 = 0.1176470588235;
/// Backup battery voltage per count
pub const ANALOG_INPUT_2_SCALE: f64 = 0.01647058823;
pub const ANALOG_INPUT_3_SCALE: f64 = 0.4314;
pub const ANALOG_INPUT_3_OFFSET_VALUE: f64 = -40.0;
pub const ANALOG_INPUT_4_SCALE: f64 = 1.0;

/// Radians to degrees
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;
/// Coordinates are transmitted in units of 10^-8 radians
pub const COORDINATE_SCALE: f64 = 1e-8;
/// Scale applied to non-negative longitudes in decimal degrees
pub const LONGITUDE_POSITIVE_SCALE: f64 = 1e-9;

/// Altitude in centimeters
pub const ALTITUDE_SCALE: f64 = 0.01;
/// Ground speed in cm/s to km/h
pub const GROUND_SPEED_SCALE: f64 = 0.036;
/// Speed direction in 10^-3 radians
pub const SPEED_DIRECTION_SCALE: f64 = 0.001;
