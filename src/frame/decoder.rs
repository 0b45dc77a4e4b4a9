//! # Cellocator Frame Decoder
//!
//! [`DecodedFrame`] is a read-only view over one [`RawFrame`]. Nothing is
//! decoded up front: every accessor slices the frame again and returns a
//! freshly computed value, so accessors can be called in any order and any
//! number of times.
//!
//! ## Usage
//!
//! ```rust
//! use cellocator_rs::DecodedFrame;
//!
//! let mut text = "0".repeat(140);
//! text.replace_range(0..8, "41424344");
//! let frame = DecodedFrame::new(&text).unwrap();
//!
//! assert_eq!(frame.system_code(), "ABCD");
//! assert_eq!(frame.error_detection_code().checksum, 0);
//! ```

use log::debug;

use crate::checksum::checksum;
use crate::constants::*;
use crate::coordinates::Position;
use crate::error::CellocatorError;
use crate::frame::fields::*;
use crate::frame::raw::RawFrame;
use crate::tables::LookupTables;
use crate::util::bits::{bit_lsb, bit_msb, bits_msb, le_value};
use crate::util::hex::{latin1_from_bytes, left_pad, reverse_byte_order};

/// Field accessors over one validated frame
#[derive(Debug, Clone)]
pub struct DecodedFrame<'t> {
    raw: RawFrame,
    tables: &'t LookupTables,
}

impl DecodedFrame<'static> {
    /// Decode with the built-in lookup tables.
    pub fn new(input: &str) -> Result<Self, CellocatorError> {
        Self::with_tables(input, LookupTables::standard())
    }
}

impl<'t> DecodedFrame<'t> {
    /// Decode with caller supplied lookup tables.
    pub fn with_tables(input: &str, tables: &'t LookupTables) -> Result<Self, CellocatorError> {
        let raw = RawFrame::parse(input)?;
        Ok(Self::from_raw(raw, tables))
    }

    /// Wrap an already validated frame.
    pub fn from_raw(raw: RawFrame, tables: &'t LookupTables) -> Self {
        debug!(
            "Decoding frame type {} from unit {:02X?}",
            raw.byte(MESSAGE_TYPE_OFFSET),
            raw.bytes(UNITS_ID_OFFSET, UNITS_ID_LEN)
        );
        Self { raw, tables }
    }

    pub fn raw(&self) -> &RawFrame {
        &self.raw
    }

    fn byte(&self, offset: usize) -> u8 {
        self.raw.byte(offset)
    }

    fn le(&self, offset: usize, count: usize) -> u64 {
        le_value(self.raw.bytes(offset, count))
    }

    // ------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------

    /// Identifies the Cellocator system (4 ASCII characters)
    pub fn system_code(&self) -> String {
        latin1_from_bytes(self.raw.bytes(SYSTEM_CODE_OFFSET, SYSTEM_CODE_LEN))
    }

    /// Kind of message
    pub fn message_type(&self) -> u8 {
        self.byte(MESSAGE_TYPE_OFFSET)
    }

    /// Value uniquely assigned to every unit
    pub fn units_id(&self) -> u32 {
        self.le(UNITS_ID_OFFSET, UNITS_ID_LEN) as u32
    }

    pub fn communication_control_field(&self) -> CommunicationControl {
        let first = self.byte(COMMUNICATION_CONTROL_OFFSET);
        let second = self.byte(COMMUNICATION_CONTROL_OFFSET + 1);

        CommunicationControl {
            active_transmission: bit_lsb(first, 0),
            garmin_disabled: bit_msb(first, 0),
            garmin_not_connected: bit_msb(first, 1),
            direct_from_ram: bit_msb(first, 2),
            psp_mode: bits_msb(u32::from(first), 8, 3, 2) as u8,
            not_can_originated_speed: bit_msb(first, 5),
            not_can_originated_odometer: bit_msb(first, 0),
            no_hibernation: bit_msb(second, 0),
            momentary_speed: bit_msb(second, 1),
            h: bits_msb(u32::from(second), 8, 3, 5) as u8,
        }
    }

    /// Increases with every message sent by the unit
    pub fn message_numerator(&self) -> u8 {
        self.byte(MESSAGE_NUMERATOR_OFFSET)
    }

    pub fn units_hardware_version(&self) -> HardwareVersion {
        let byte = u32::from(self.byte(HARDWARE_VERSION_OFFSET));
        let modem_code = bits_msb(byte, 8, 0, 3) as u8;
        let model_id = bits_msb(byte, 8, 3, 5) as u8;

        let entry = self.tables.hardware(model_id, modem_code);
        if entry.is_none() {
            debug!("Unknown hardware: model {model_id}, modem {modem_code}");
        }

        HardwareVersion {
            model_id,
            modem_code,
            model: entry.map(|e| e.model.name),
            modem: entry.map(|e| e.modem.name),
        }
    }

    pub fn units_software_version(&self) -> u8 {
        self.byte(SOFTWARE_VERSION_OFFSET)
    }

    pub fn protocol_version_identifier(&self) -> u8 {
        self.byte(PROTOCOL_VERSION_OFFSET)
    }

    // ------------------------------------------------------------------
    // Status
    // ------------------------------------------------------------------

    pub fn units_status_current_gsm_operator(&self) -> UnitsStatus {
        let byte = self.byte(UNITS_STATUS_OFFSET);

        UnitsStatus {
            speed_estimated_by_gps: bit_lsb(byte, 3),
            correct_time: bit_lsb(byte, 2),
            home_network: bit_lsb(byte, 1),
            gps_communication_available: bit_lsb(byte, 0),
            current_gsm_operator_first_nibble: byte >> 4,
        }
    }

    pub fn current_gsm_operator(&self) -> u8 {
        self.byte(CURRENT_GSM_OPERATOR_OFFSET)
    }

    pub fn transmission_reason_specific_data(&self) -> u8 {
        self.byte(TRANSMISSION_REASON_DATA_OFFSET)
    }

    pub fn transmission_reason(&self) -> TransmissionReason {
        let code = self.byte(TRANSMISSION_REASON_OFFSET);
        let name = self.tables.reason(code);
        if name.is_none() {
            debug!("Unknown transmission reason {code}");
        }
        TransmissionReason { code, name }
    }

    pub fn units_mode_of_operation(&self) -> ModeOfOperation {
        let code = self
            .raw
            .hex_field(MODE_OF_OPERATION_OFFSET, 1)
            .to_ascii_uppercase();
        let name = self.tables.mode(&code);
        if name.is_none() {
            debug!("Unknown mode of operation {code}");
        }
        ModeOfOperation { code, name }
    }

    pub fn units_io_status_1(&self) -> IoStatus1 {
        IoStatus1::from_bits_truncate(self.byte(IO_STATUS_1_OFFSET))
    }

    pub fn units_io_status_2(&self) -> IoStatus2 {
        IoStatus2::from_bits_truncate(self.byte(IO_STATUS_2_OFFSET))
    }

    pub fn units_io_status_3(&self) -> IoStatus3 {
        IoStatus3::from_bits_truncate(self.byte(IO_STATUS_3_OFFSET))
    }

    pub fn units_io_status_4(&self) -> InputOutputStatus4 {
        let first_nibble = self
            .units_status_current_gsm_operator()
            .current_gsm_operator_first_nibble;
        let plmn = (u32::from(first_nibble) << 16)
            | (u32::from(self.current_gsm_operator()) << 8)
            | u32::from(self.byte(PLMN_LOW_BYTE_OFFSET));

        InputOutputStatus4 {
            flags: IoStatus4::from_bits_truncate(self.byte(IO_STATUS_4_OFFSET)),
            plmn,
        }
    }

    // ------------------------------------------------------------------
    // Analog inputs
    // ------------------------------------------------------------------

    /// Main supply voltage, normally the vehicle's battery
    pub fn analog_input_1_value(&self) -> f64 {
        f64::from(self.byte(ANALOG_INPUT_1_OFFSET)) * ANALOG_INPUT_1_SCALE
    }

    /// Backup battery voltage
    pub fn analog_input_2_value(&self) -> f64 {
        f64::from(self.byte(ANALOG_INPUT_2_OFFSET)) * ANALOG_INPUT_2_SCALE
    }

    pub fn analog_input_3_value(&self) -> f64 {
        f64::from(self.byte(ANALOG_INPUT_3_OFFSET)) * ANALOG_INPUT_3_SCALE
            + ANALOG_INPUT_3_OFFSET_VALUE
    }

    /// First optional analog input
    pub fn analog_input_4_value(&self) -> f64 {
        f64::from(self.byte(ANALOG_INPUT_4_OFFSET)) * ANALOG_INPUT_4_SCALE
    }

    // ------------------------------------------------------------------
    // Odometer and multi-purpose field
    // ------------------------------------------------------------------

    /// Distance accumulator
    pub fn mileage_counter(&self) -> u32 {
        self.le(MILEAGE_COUNTER_OFFSET, MILEAGE_COUNTER_LEN) as u32
    }

    /// Six bytes in numeric order, as uppercase hex
    pub fn multi_purpose_field(&self) -> String {
        reverse_byte_order(self.raw.hex_field(MULTI_PURPOSE_OFFSET, MULTI_PURPOSE_LEN))
            .to_ascii_uppercase()
    }

    // ------------------------------------------------------------------
    // GPS
    // ------------------------------------------------------------------

    pub fn last_gps_fix(&self) -> LastGpsFix {
        let word = self.le(LAST_GPS_FIX_OFFSET, LAST_GPS_FIX_LEN) as u32;

        LastGpsFix {
            day_of_month: bits_msb(word, 16, 0, 5) as u8,
            hours: bits_msb(word, 16, 5, 5) as u8,
            minutes: bits_msb(word, 16, 10, 6) as u8,
        }
    }

    pub fn location_status(&self) -> StatusByte {
        StatusByte(self.byte(LOCATION_STATUS_OFFSET))
    }

    pub fn mode1(&self) -> StatusByte {
        StatusByte(self.byte(MODE1_OFFSET))
    }

    pub fn mode2(&self) -> StatusByte {
        StatusByte(self.byte(MODE2_OFFSET))
    }

    /// Satellite measurements used for the current fix
    pub fn number_of_satellites_used(&self) -> u8 {
        self.byte(SATELLITES_USED_OFFSET)
    }

    /// Current fix in decimal degrees and DMS
    pub fn longitude_and_latitude(&self) -> Position {
        Position::from_raw(
            self.le(LONGITUDE_OFFSET, COORDINATE_LEN) as u32,
            self.le(LATITUDE_OFFSET, COORDINATE_LEN) as u32,
        )
    }

    /// Altitude in meters, e.g. `"2640 M"`
    pub fn altitude(&self) -> String {
        let meters = self.le(ALTITUDE_OFFSET, ALTITUDE_LEN) as f64 * ALTITUDE_SCALE;
        format!("{meters} M")
    }

    /// Ground speed with 3 decimals, e.g. `"36.000 km/h"`
    pub fn ground_speed(&self) -> String {
        let speed = self.le(GROUND_SPEED_OFFSET, GROUND_SPEED_LEN) as f64 * GROUND_SPEED_SCALE;
        format!("{speed:.3} km/h")
    }

    /// Direction of the speed vector in degrees
    pub fn speed_direction(&self) -> f64 {
        self.le(SPEED_DIRECTION_OFFSET, SPEED_DIRECTION_LEN) as f64
            * RAD_TO_DEG
            * SPEED_DIRECTION_SCALE
    }

    // ------------------------------------------------------------------
    // UTC time of the fix
    // ------------------------------------------------------------------

    fn two_digits(&self, offset: usize) -> String {
        left_pad(self.byte(offset), 2, '0')
    }

    pub fn utc_time_seconds(&self) -> String {
        self.two_digits(UTC_SECONDS_OFFSET)
    }

    pub fn utc_time_minutes(&self) -> String {
        self.two_digits(UTC_MINUTES_OFFSET)
    }

    pub fn utc_time_hours(&self) -> String {
        self.two_digits(UTC_HOURS_OFFSET)
    }

    pub fn utc_time_day(&self) -> String {
        self.two_digits(UTC_DAY_OFFSET)
    }

    pub fn utc_time_month(&self) -> String {
        self.two_digits(UTC_MONTH_OFFSET)
    }

    pub fn utc_time_year(&self) -> String {
        left_pad(self.le(UTC_YEAR_OFFSET, UTC_YEAR_LEN), 4, '0')
    }

    /// All UTC fields as numbers
    pub fn utc_timestamp(&self) -> UtcTimestamp {
        UtcTimestamp {
            year: self.le(UTC_YEAR_OFFSET, UTC_YEAR_LEN) as u16,
            month: self.byte(UTC_MONTH_OFFSET),
            day: self.byte(UTC_DAY_OFFSET),
            hours: self.byte(UTC_HOURS_OFFSET),
            minutes: self.byte(UTC_MINUTES_OFFSET),
            seconds: self.byte(UTC_SECONDS_OFFSET),
        }
    }

    // ------------------------------------------------------------------
    // Error detection
    // ------------------------------------------------------------------

    /// Embedded checksum and the checksum computed over bytes 4-68
    pub fn error_detection_code(&self) -> ErrorDetectionCode {
        let range = self
            .raw
            .bytes(CHECKSUM_RANGE_START, CHECKSUM_RANGE_END - CHECKSUM_RANGE_START);

        ErrorDetectionCode {
            code: self.byte(ERROR_DETECTION_CODE_OFFSET),
            checksum: checksum(range),
        }
    }

    /// Every field in one serializable record
    pub fn report(&self) -> FrameReport {
        FrameReport {
            system_code: self.system_code(),
            message_type: self.message_type(),
            units_id: self.units_id(),
            communication_control_field: self.communication_control_field(),
            message_numerator: self.message_numerator(),
            units_hardware_version: self.units_hardware_version(),
            units_software_version: self.units_software_version(),
            protocol_version_identifier: self.protocol_version_identifier(),
            units_status: self.units_status_current_gsm_operator(),
            current_gsm_operator: self.current_gsm_operator(),
            transmission_reason_specific_data: self.transmission_reason_specific_data(),
            transmission_reason: self.transmission_reason(),
            units_mode_of_operation: self.units_mode_of_operation(),
            units_io_status_1: self.units_io_status_1(),
            units_io_status_2: self.units_io_status_2(),
            units_io_status_3: self.units_io_status_3(),
            units_io_status_4: self.units_io_status_4(),
            analog_input_1_value: self.analog_input_1_value(),
            analog_input_2_value: self.analog_input_2_value(),
            analog_input_3_value: self.analog_input_3_value(),
            analog_input_4_value: self.analog_input_4_value(),
            mileage_counter: self.mileage_counter(),
            multi_purpose_field: self.multi_purpose_field(),
            last_gps_fix: self.last_gps_fix(),
            location_status: self.location_status(),
            mode1: self.mode1(),
            mode2: self.mode2(),
            number_of_satellites_used: self.number_of_satellites_used(),
            longitude_and_latitude: self.longitude_and_latitude(),
            altitude: self.altitude(),
            ground_speed: self.ground_speed(),
            speed_direction: self.speed_direction(),
            utc_time_seconds: self.utc_time_seconds(),
            utc_time_minutes: self.utc_time_minutes(),
            utc_time_hours: self.utc_time_hours(),
            utc_time_day: self.utc_time_day(),
            utc_time_month: self.utc_time_month(),
            utc_time_year: self.utc_time_year(),
            error_detection_code: self.error_detection_code(),
        }
    }
}
