//! Units mode of operation table, keyed by the 2-character hex code of byte 19.

pub const MODE_OPERATION_CODES: &[(&str, &str)] = &[
    ("00", "Standby Engine On"),
    ("01", "Standby Engine Off"),
    ("02", "Passive Arming (For Security modifications)"),
    ("03", "Pre-Arming (For Security modifications)"),
    ("04", "Alarm Armed (For Security modifications)"),
    ("05", "Silent Delay (For Security modifications)"),
    ("07", "Alarm Triggered (For Security modifications)"),
    ("0E", "Garage Mode"),
    ("0F", "Transmissions Delay (for older versions FW25 and below)"),
];
