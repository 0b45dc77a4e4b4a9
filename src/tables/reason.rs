//! Transmission reason table
//!
//! Byte 18 of a frame tells why the unit transmitted it.

/// Known transmission reason codes
pub const REASON_CODES: &[(u8, &str)] = &[
    (0, "Regular Timed Event"),
    (4, "Emergency Mode by Command"),
    (5, "Door Opened (Security Event)"),
    (6, "Engine Activated (Security Event)"),
    (7, "GPS Disconnected"),
    (8, "Location Change Detected on Ignition Off"),
    (9, "Emergency Mode by Panic"),
    (11, "Emergency Mode by Door"),
    (12, "Emergency Mode by Engine"),
    (13, "Shock Detector Activated"),
    (15, "Emergency Mode by Shock"),
    (16, "Siren Activated"),
    (17, "Lock Output Activated"),
    (18, "Unlock Output Activated"),
    (20, "Ignition Off (Security Event)"),
    (21, "Emergency Mode by GPS Disconnection"),
    (23, "Coasting Detection"),
    (25, "Low Backup Battery"),
    (26, "Backup Battery Disconnected"),
    (27, "Main Power Disconnected"),
    (28, "Main Power Low"),
    (31, "Reply to Command"),
    (32, "IP Changed / Connection Up"),
    (33, "GPS Navigation Start"),
    (34, "Over-speed Start"),
    (35, "Idle Speed Start"),
    (36, "Distance Event"),
    (37, "Engine On"),
    (38, "Engine Off"),
    (39, "GPS Factory Reset"),
    (40, "Geo-fence Entry"),
    (41, "Geo-fence Exit"),
    (42, "Over-speed End"),
    (43, "Idle Speed End"),
    (44, "Time Event"),
    (45, "Wake Up from Hibernation"),
    (46, "Harsh Braking"),
    (47, "Harsh Acceleration"),
    (48, "Harsh Cornering"),
    (52, "GSM Jamming Detected"),
    (53, "GPS Jamming Detected"),
    (69, "Driver Authentication Update"),
];
