//! # Coordinate Conversion
//!
//! Cellocator units report longitude and latitude as 4-byte little-endian
//! values in units of 10^-8 radians. This module turns the numeric (already
//! byte-order reversed) values into decimal degrees and into a
//! degrees-minutes-seconds rendering with a hemisphere letter.
//!
//! ## Sign handling
//!
//! A value whose most significant nibble is `F` is a negative coordinate. Its
//! magnitude is recovered as `-(!raw + 1)`, i.e. the bitwise NOT of the raw
//! value plus one, negated.
//!
//! ## Longitude scale
//!
//! Negative longitudes are scaled by 10^-8 but non-negative longitudes by
//! 10^-9. Units observed in the field have not confirmed which one is right,
//! so both branches are kept as reported and pinned by tests. Latitude uses
//! 10^-8 in both branches.
//!
//! ## DMS
//!
//! The DMS rendering reads the raw value as unsigned for both axes, so a
//! negative coordinate renders as a large positive angle without hemisphere.
//!
//! ```rust
//! use cellocator_rs::coordinates::Position;
//!
//! let position = Position::from_raw(0, 0x007A_8163);
//! assert_eq!(position.dms.latitude.to_string(), "4°36'0\"N");
//! assert_eq!(position.dms.longitude.to_string(), "0°0'0\"");
//! ```

use crate::constants::{COORDINATE_SCALE, LONGITUDE_POSITIVE_SCALE, RAD_TO_DEG};
use crate::util::hex::{hex_to_decimal, HexError};
use serde::Serialize;
use std::fmt;

/// Hemisphere letter of a DMS coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Hemisphere {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl Hemisphere {
    pub fn letter(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Which coordinate a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl Axis {
    /// Largest absolute whole degree that still gets a hemisphere letter
    fn limit(self) -> i64 {
        match self {
            Axis::Longitude => 180,
            Axis::Latitude => 90,
        }
    }

    fn hemispheres(self) -> (Hemisphere, Hemisphere) {
        match self {
            Axis::Longitude => (Hemisphere::East, Hemisphere::West),
            Axis::Latitude => (Hemisphere::North, Hemisphere::South),
        }
    }
}

/// Signed decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecimalDegrees {
    pub longitude: f64,
    pub latitude: f64,
}

/// Degrees, minutes and seconds with an optional hemisphere.
///
/// `hemisphere` is `None` when the whole degrees are 0 or outside the axis
/// range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: i64,
    pub minutes: i64,
    /// Rounded to 2 decimal places
    pub seconds: f64,
    pub hemisphere: Option<Hemisphere>,
}

impl Dms {
    /// Split an angle in degrees into whole degrees, whole minutes and
    /// seconds. Fractions are truncated toward zero.
    pub fn from_degrees(value: f64, axis: Axis) -> Self {
        let minutes = (value - value.trunc()) * 60.0;
        let seconds = (minutes - minutes.trunc()) * 60.0;

        let degrees = value.trunc() as i64;
        let minutes = minutes.trunc() as i64;
        let seconds = (seconds * 100.0).round() / 100.0;

        let limit = axis.limit();
        let (positive, negative) = axis.hemispheres();
        let hemisphere = if degrees > 0 && degrees <= limit {
            Some(positive)
        } else if degrees < 0 && degrees >= -limit {
            Some(negative)
        } else {
            None
        };

        Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{}'{}\"",
            self.degrees.abs(),
            self.minutes.abs(),
            self.seconds.abs()
        )?;
        if let Some(hemisphere) = self.hemisphere {
            write!(f, "{hemisphere}")?;
        }
        Ok(())
    }
}

/// DMS rendering of both axes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DmsPair {
    pub longitude: Dms,
    pub latitude: Dms,
}

/// Position of the current GPS fix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub decimals: DecimalDegrees,
    pub dms: DmsPair,
}

impl Position {
    /// Build both renderings from the numeric longitude and latitude.
    pub fn from_raw(longitude: u32, latitude: u32) -> Self {
        Self {
            decimals: DecimalDegrees {
                longitude: longitude_degrees(longitude),
                latitude: latitude_degrees(latitude),
            },
            dms: DmsPair {
                longitude: longitude_dms(longitude),
                latitude: latitude_dms(latitude),
            },
        }
    }

    /// Build both renderings from 8-character big-endian hex fields.
    pub fn from_hex(longitude: &str, latitude: &str) -> Result<Self, HexError> {
        Ok(Self::from_raw(
            coordinate_from_hex(longitude)?,
            coordinate_from_hex(latitude)?,
        ))
    }
}

fn coordinate_from_hex(hex_str: &str) -> Result<u32, HexError> {
    let value = hex_to_decimal(hex_str)?;
    u32::try_from(value).map_err(|_| HexError::Overflow(hex_str.to_string()))
}

/// True when the top nibble is `F`
#[inline]
pub fn is_negative(raw: u32) -> bool {
    raw >> 28 == 0xF
}

/// `-(!raw + 1)` for negative encodings
#[inline]
fn negative_magnitude(raw: u32) -> f64 {
    (f64::from(!raw) + 1.0) * -1.0
}

/// Longitude in signed decimal degrees.
pub fn longitude_degrees(raw: u32) -> f64 {
    if is_negative(raw) {
        negative_magnitude(raw) * RAD_TO_DEG * COORDINATE_SCALE
    } else {
        f64::from(raw) * RAD_TO_DEG * LONGITUDE_POSITIVE_SCALE
    }
}

/// Latitude in signed decimal degrees.
pub fn latitude_degrees(raw: u32) -> f64 {
    let value = if is_negative(raw) {
        negative_magnitude(raw)
    } else {
        f64::from(raw)
    };
    value * RAD_TO_DEG * COORDINATE_SCALE
}

/// Longitude as DMS, reading `raw` unsigned.
pub fn longitude_dms(raw: u32) -> Dms {
    let degrees = f64::from(raw) * RAD_TO_DEG * COORDINATE_SCALE;
    Dms::from_degrees(degrees, Axis::Longitude)
}

/// Latitude as DMS, reading `raw` unsigned.
pub fn latitude_dms(raw: u32) -> Dms {
    let degrees = ((f64::from(raw) * 180.0) / std::f64::consts::PI) * COORDINATE_SCALE;
    Dms::from_degrees(degrees, Axis::Latitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::hex::{binary_to_decimal, hex_to_binary, invert_bits};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_negative_magnitude_matches_inverted_bit_string() {
        for raw in [0xF84B_2159u32, 0xFFFF_FFFF, 0xF000_0000, 0xFFFF_FF9B] {
            let text = format!("{raw:08X}");
            let inverted = binary_to_decimal(&invert_bits(&hex_to_binary(&text).unwrap())).unwrap();
            assert_eq!(-(inverted as f64 + 1.0), negative_magnitude(raw));
        }
    }

    #[test]
    fn test_is_negative() {
        assert!(is_negative(0xF000_0000));
        assert!(is_negative(0xFFFF_FFFF));
        assert!(!is_negative(0xE000_0000));
        assert!(!is_negative(0x0000_0000));
    }

    #[test]
    fn test_longitude_negative_branch() {
        // -74.08 degrees, transmitted as 2^32 - 129293991
        let lng = longitude_degrees(0xF84B_2159);
        assert!(approx(lng, -74.0800000070245), "got {lng}");
    }

    #[test]
    fn test_latitude_both_branches() {
        assert!(approx(latitude_degrees(0x007A_8163), 4.600000252574741));
        assert!(approx(latitude_degrees(0xFF85_7E9D), -4.600000252574741));
        assert_eq!(latitude_degrees(0), 0.0);
    }

    #[test]
    fn test_dms_zero_has_no_hemisphere() {
        let dms = Dms::from_degrees(0.0, Axis::Latitude);
        assert_eq!(dms.hemisphere, None);
        assert_eq!(dms.to_string(), "0°0'0\"");

        let dms = Dms::from_degrees(0.75, Axis::Longitude);
        assert_eq!(dms.hemisphere, None);
        assert_eq!(dms.to_string(), "0°45'0\"");
    }

    #[test]
    fn test_dms_hemisphere_ranges() {
        assert_eq!(Dms::from_degrees(180.5, Axis::Longitude).hemisphere, Some(Hemisphere::East));
        assert_eq!(Dms::from_degrees(181.0, Axis::Longitude).hemisphere, None);
        assert_eq!(Dms::from_degrees(-12.5, Axis::Longitude).hemisphere, Some(Hemisphere::West));
        assert_eq!(Dms::from_degrees(90.0, Axis::Latitude).hemisphere, Some(Hemisphere::North));
        assert_eq!(Dms::from_degrees(-90.9, Axis::Latitude).hemisphere, Some(Hemisphere::South));
        assert_eq!(Dms::from_degrees(-91.0, Axis::Latitude).hemisphere, None);
    }

    #[test]
    fn test_dms_negative_uses_absolute_components() {
        let dms = Dms::from_degrees(-12.5, Axis::Longitude);
        assert_eq!(dms.degrees, -12);
        assert_eq!(dms.minutes, -30);
        assert_eq!(dms.to_string(), "12°30'0\"W");
    }

    #[test]
    fn test_position_from_hex() {
        let position = Position::from_hex("F84B2159", "007A8163").unwrap();
        assert_eq!(position, Position::from_raw(0xF84B_2159, 0x007A_8163));
        assert_eq!(position.dms.longitude.to_string(), "2386°45'17.97\"");
        assert_eq!(position.dms.latitude.to_string(), "4°36'0\"N");
        assert!(Position::from_hex("1FFFFFFFF", "00").is_err());
    }
}
