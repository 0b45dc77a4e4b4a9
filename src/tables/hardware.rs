//! Units hardware version table
//!
//! The hardware version byte packs a 5-bit model id (low bits) and a 3-bit
//! modem code (high bits). Each known combination maps to a model name and a
//! modem name.

/// A Cellocator unit model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareModel {
    pub id: u8,
    pub name: &'static str,
}

/// The cellular modem fitted to a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modem {
    pub code: u8,
    pub name: &'static str,
}

/// One known model/modem combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareEntry {
    pub model: HardwareModel,
    pub modem: Modem,
}

impl HardwareEntry {
    pub const fn new(
        model_id: u8,
        model_name: &'static str,
        modem_code: u8,
        modem_name: &'static str,
    ) -> Self {
        Self {
            model: HardwareModel {
                id: model_id,
                name: model_name,
            },
            modem: Modem {
                code: modem_code,
                name: modem_name,
            },
        }
    }
}

/// Known hardware combinations
pub const HARDWARE_CODES: &[HardwareEntry] = &[
    // ===== COMPACT FAMILY =====
    HardwareEntry::new(1, "Compact Security", 0, "Sony Ericsson GM47"),
    HardwareEntry::new(1, "Compact Security", 1, "Enfora Enabler II"),
    HardwareEntry::new(2, "Compact Fleet", 0, "Sony Ericsson GM47"),
    HardwareEntry::new(2, "Compact Fleet", 1, "Enfora Enabler II"),
    HardwareEntry::new(2, "Compact Fleet", 2, "Telit GE864"),
    HardwareEntry::new(6, "Compact Fleet CR", 2, "Telit GE864"),
    HardwareEntry::new(6, "Compact Fleet CR", 3, "Telit GE864 with SIM on chip"),
    HardwareEntry::new(7, "Compact Fleet CFE", 2, "Telit GE864"),
    HardwareEntry::new(7, "Compact Fleet CFE", 4, "Cinterion BGS2"),
    // ===== CELLO FAMILY =====
    HardwareEntry::new(10, "CelloTrack", 2, "Telit GE864"),
    HardwareEntry::new(10, "CelloTrack", 4, "Cinterion BGS2"),
    HardwareEntry::new(11, "Cello-F", 2, "Telit GE864"),
    HardwareEntry::new(11, "Cello-F", 5, "Telit UL865"),
    HardwareEntry::new(12, "Cello-AR", 2, "Telit GE864"),
    HardwareEntry::new(12, "Cello-AR", 5, "Telit UL865"),
    HardwareEntry::new(13, "Cello-IQ", 2, "Telit GE864"),
    HardwareEntry::new(13, "Cello-IQ", 6, "Telit HE910"),
    HardwareEntry::new(14, "CelloTrack Power", 4, "Cinterion BGS2"),
    HardwareEntry::new(18, "CelloTrack Nano", 4, "Cinterion BGS2"),
    HardwareEntry::new(20, "Cello-CANiQ", 6, "Telit HE910"),
    HardwareEntry::new(20, "Cello-CANiQ", 7, "Cinterion EHS5"),
];
