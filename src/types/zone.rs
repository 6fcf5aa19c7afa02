// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone addressing types.
//!
//! A gateway drives up to 16 zones. Commands address them through a 16-bit
//! little-endian bitmask where bit `zone - 1` selects a zone.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, ValueError};
use crate::validate;

/// A zone number (1-16).
///
/// # Examples
///
/// ```
/// use skydance::types::Zone;
///
/// let zone = Zone::new(2).unwrap();
/// assert_eq!(zone.number(), 2);
/// assert_eq!(zone.mask().to_le_bytes(), [0x02, 0x00]);
///
/// assert!(Zone::new(0).is_err());
/// assert!(Zone::new(17).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Zone(u8);

impl Zone {
    /// The first zone.
    pub const MIN: Self = Self(1);

    /// The last zone.
    pub const MAX: Self = Self(16);

    /// Creates a zone.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `number` is not in 1-16.
    pub fn new(number: u8) -> Result<Self, ValueError> {
        validate::zone_number(i64::from(number)).map(Self)
    }

    /// Returns the zone number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.0
    }

    /// Returns the single-zone bitmask addressing this zone.
    #[must_use]
    pub const fn mask(&self) -> ZoneMask {
        ZoneMask(1 << (self.0 - 1))
    }

    /// Iterates over every zone, 1 to 16.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl TryFrom<i64> for Zone {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        validate::zone_number(value).map(Self)
    }
}

impl From<Zone> for u8 {
    fn from(zone: Zone) -> Self {
        zone.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone {}", self.0)
    }
}

/// The 16-bit target field of a payload.
///
/// Single-zone commands set one bit; broadcast and discovery commands use
/// the fixed values [`ZoneMask::MASTER`] and [`ZoneMask::RESERVED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ZoneMask(u16);

impl ZoneMask {
    /// Target value of ping and zone-count queries.
    pub const RESERVED: Self = Self(0x0001);

    /// Broadcast target used by master power commands (`0f ff` on the wire).
    pub const MASTER: Self = Self(0xFF0F);

    /// Wraps raw mask bits.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Reads a mask from its wire form.
    #[must_use]
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Returns the wire form.
    #[must_use]
    pub const fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Returns the zone if exactly one bit is set.
    #[must_use]
    pub fn single_zone(&self) -> Option<Zone> {
        if self.0.count_ones() != 1 {
            return None;
        }
        // trailing_zeros() < 16 here, so the zone number is 1-16
        u8::try_from(self.0.trailing_zeros() + 1).ok().map(Zone)
    }
}

impl From<Zone> for ZoneMask {
    fn from(zone: Zone) -> Self {
        zone.mask()
    }
}

/// The kind of fixture configured on a zone.
///
/// # Examples
///
/// ```
/// use skydance::types::ZoneType;
///
/// let kind = ZoneType::try_from(0x21_u8).unwrap();
/// assert_eq!(kind, ZoneType::Cct);
/// assert!(kind.supports_temperature());
/// assert!(ZoneType::try_from(0x22_u8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneType {
    /// On/off only.
    Switch,
    /// Single-channel dimmer.
    Dimmer,
    /// Tunable white.
    #[serde(rename = "CCT")]
    Cct,
    /// Red, green, blue.
    #[serde(rename = "RGB")]
    Rgb,
    /// Red, green, blue, white.
    #[serde(rename = "RGBW")]
    Rgbw,
    /// Red, green, blue plus tunable white.
    #[serde(rename = "RGBCCT")]
    RgbCct,
}

impl ZoneType {
    /// Returns the byte code the gateway uses for this type.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Switch => 0x01,
            Self::Dimmer => 0x11,
            Self::Cct => 0x21,
            Self::Rgb => 0x31,
            Self::Rgbw => 0x41,
            Self::RgbCct => 0x51,
        }
    }

    /// Returns the display name used by the gateway's own app.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Switch => "Switch",
            Self::Dimmer => "Dimmer",
            Self::Cct => "CCT",
            Self::Rgb => "RGB",
            Self::Rgbw => "RGBW",
            Self::RgbCct => "RGB+CCT",
        }
    }

    /// Returns `true` if brightness commands apply to this zone.
    #[must_use]
    pub const fn supports_brightness(&self) -> bool {
        !matches!(self, Self::Switch)
    }

    /// Returns `true` if temperature commands apply to this zone.
    #[must_use]
    pub const fn supports_temperature(&self) -> bool {
        matches!(self, Self::Cct | Self::RgbCct)
    }

    /// Returns `true` if color commands apply to this zone.
    #[must_use]
    pub const fn supports_color(&self) -> bool {
        matches!(self, Self::Rgb | Self::Rgbw | Self::RgbCct)
    }
}

impl TryFrom<u8> for ZoneType {
    type Error = DecodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x01 => Ok(Self::Switch),
            0x11 => Ok(Self::Dimmer),
            0x21 => Ok(Self::Cct),
            0x31 => Ok(Self::Rgb),
            0x41 => Ok(Self::Rgbw),
            0x51 => Ok(Self::RgbCct),
            other => Err(DecodeError::UnknownZoneType(other)),
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
