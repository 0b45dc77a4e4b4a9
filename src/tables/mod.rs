//! Static Lookup Tables
//!
//! This module holds the mapping data the decoder consults to put names on
//! numeric codes: hardware model/modem combinations, transmission reasons and
//! modes of operation.
//!
//! The tables are plain data. [`LookupTables`] indexes them once and is then
//! only read; the process-wide instance returned by
//! [`LookupTables::standard`] is built on first use. Decoders take a
//! `&LookupTables`, so callers can inject their own data.
//!
//! ## Usage Example
//!
//! ```rust
//! use cellocator_rs::tables::LookupTables;
//!
//! let tables = LookupTables::standard();
//! assert_eq!(tables.mode("0E"), Some("Garage Mode"));
//! assert_eq!(tables.hardware(31, 7), None);
//! ```

pub mod hardware;
pub mod mode;
pub mod reason;

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

pub use hardware::{HardwareEntry, HardwareModel, Modem, HARDWARE_CODES};
pub use mode::MODE_OPERATION_CODES;
pub use reason::REASON_CODES;

static STANDARD_TABLES: Lazy<LookupTables> = Lazy::new(|| {
    let tables = LookupTables::new(HARDWARE_CODES, REASON_CODES, MODE_OPERATION_CODES);
    debug!(
        "Loaded lookup tables: {} hardware, {} reason, {} mode entries",
        tables.hardware.len(),
        tables.reasons.len(),
        tables.modes.len()
    );
    tables
});

/// Indexed, read-only view of the mapping data
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    hardware: HashMap<(u8, u8), HardwareEntry>,
    reasons: HashMap<u8, &'static str>,
    modes: HashMap<String, &'static str>,
}

impl LookupTables {
    /// Index the given tables. When a key appears more than once the first
    /// entry wins. Mode codes are matched case-insensitively.
    pub fn new(
        hardware: &[HardwareEntry],
        reasons: &[(u8, &'static str)],
        modes: &[(&str, &'static str)],
    ) -> Self {
        let mut tables = Self::default();
        for entry in hardware {
            tables
                .hardware
                .entry((entry.model.id, entry.modem.code))
                .or_insert(*entry);
        }
        for &(code, name) in reasons {
            tables.reasons.entry(code).or_insert(name);
        }
        for &(code, name) in modes {
            tables.modes.entry(code.to_ascii_uppercase()).or_insert(name);
        }
        tables
    }

    /// The built-in Cellocator tables
    pub fn standard() -> &'static LookupTables {
        &STANDARD_TABLES
    }

    /// Hardware entry for a model id and modem code, if known
    pub fn hardware(&self, model_id: u8, modem_code: u8) -> Option<&HardwareEntry> {
        self.hardware.get(&(model_id, modem_code))
    }

    /// Label of a transmission reason code
    pub fn reason(&self, code: u8) -> Option<&'static str> {
        self.reasons.get(&code).copied()
    }

    /// Label of a 2-character mode of operation code
    pub fn mode(&self, code: &str) -> Option<&'static str> {
        self.modes.get(&code.to_ascii_uppercase()).copied()
    }
}
