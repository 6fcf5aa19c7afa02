// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color types for light control.
//!
//! This module provides the tunable-white temperature level and the
//! four-channel RGBW color sent to color zones.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::validate;

/// Color temperature level (0-255).
///
/// The gateway takes a raw byte and maps it onto the fixture's white range,
/// so every byte value is legal.
///
/// # Examples
///
/// ```
/// use skydance::types::Temperature;
///
/// let t = Temperature::new(200);
/// assert_eq!(t.value(), 200);
///
/// assert!(Temperature::try_from(256_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Temperature(u8);

impl Temperature {
    /// Lowest level.
    pub const MIN: Self = Self(0);

    /// Highest level.
    pub const MAX: Self = Self(255);

    /// Creates a temperature level.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw level.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Temperature {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        validate::temperature_value(value).map(Self)
    }
}

impl From<u8> for Temperature {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Temperature> for u8 {
    fn from(t: Temperature) -> Self {
        t.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Four-channel color: red, green, blue and white (0-255 each).
///
/// At least one channel must be non-zero; an all-dark color is not a color
/// command, it is a power off.
///
/// # Examples
///
/// ```
/// use skydance::types::Rgbw;
///
/// let warm = Rgbw::new(255, 128, 64, 1).unwrap();
/// assert_eq!(warm.channels(), [255, 128, 64, 1]);
///
/// assert!(Rgbw::new(0, 0, 0, 0).is_err());
/// assert!(Rgbw::new(0, 1, 0, 0).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRgbw")]
pub struct Rgbw {
    red: u8,
    green: u8,
    blue: u8,
    white: u8,
}

impl Rgbw {
    /// Full output on every channel.
    pub const FULL: Self = Self {
        red: 255,
        green: 255,
        blue: 255,
        white: 255,
    };

    /// Creates a color.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::AllChannelsZero` if every channel is 0.
    pub fn new(red: u8, green: u8, blue: u8, white: u8) -> Result<Self, ValueError> {
        if red == 0 && green == 0 && blue == 0 && white == 0 {
            return Err(ValueError::AllChannelsZero);
        }
        Ok(Self {
            red,
            green,
            blue,
            white,
        })
    }

    /// Creates a color from wide integers, validating each channel first.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` naming the first bad channel, or
    /// `ValueError::AllChannelsZero`.
    pub fn from_components(red: i64, green: i64, blue: i64, white: i64) -> Result<Self, ValueError> {
        Self::new(
            validate::component_value("red", red)?,
            validate::component_value("green", green)?,
            validate::component_value("blue", blue)?,
            validate::component_value("white", white)?,
        )
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the white channel.
    #[must_use]
    pub const fn white(&self) -> u8 {
        self.white
    }

    /// Returns the channels in wire order.
    #[must_use]
    pub const fn channels(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.white]
    }
}

impl fmt::Display for Rgbw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue, self.white
        )
    }
}

#[derive(Deserialize)]
struct RawRgbw {
    red: i64,
    green: i64,
    blue: i64,
    white: i64,
}

impl TryFrom<RawRgbw> for Rgbw {
    type Error = ValueError;

    fn try_from(raw: RawRgbw) -> Result<Self, Self::Error> {
        Self::from_components(raw.red, raw.green, raw.blue, raw.white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_bounds() {
        assert_eq!(Temperature::try_from(0_i64).unwrap(), Temperature::MIN);
        assert_eq!(Temperature::try_from(255_i64).unwrap(), Temperature::MAX);
        assert!(Temperature::try_from(256_i64).is_err());
        assert!(Temperature::try_from(-1_i64).is_err());
    }

    #[test]
    fn temperature_deserialize() {
        assert_eq!(
            serde_json::from_str::<Temperature>("0").unwrap(),
            Temperature::MIN
        );
        for bad in ["256", "-1", "\"foo\"", "null", "99999999999"] {
            assert!(serde_json::from_str::<Temperature>(bad).is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn rgbw_all_zero_rejected() {
        assert_eq!(Rgbw::new(0, 0, 0, 0).unwrap_err(), ValueError::AllChannelsZero);
        assert_eq!(
            Rgbw::from_components(0, 0, 0, 0).unwrap_err(),
            ValueError::AllChannelsZero
        );
    }

    #[test]
    fn rgbw_single_channel_accepted() {
        assert!(Rgbw::new(0, 1, 0, 0).is_ok());
        assert!(Rgbw::new(0, 0, 0, 255).is_ok());
        assert_eq!(Rgbw::new(255, 255, 255, 255).unwrap(), Rgbw::FULL);
    }

    #[test]
    fn rgbw_component_checked_before_zero_rule() {
        let err = Rgbw::from_components(0, 0, -1, 0).unwrap_err();
        assert_eq!(
            err,
            ValueError::OutOfRange {
                field: "blue",
                min: 0,
                max: 255,
                actual: -1,
            }
        );
    }

    #[test]
    fn rgbw_accessors() {
        let c = Rgbw::new(1, 2, 3, 4).unwrap();
        assert_eq!(
            (c.red(), c.green(), c.blue(), c.white()),
            (1, 2, 3, 4)
        );
        assert_eq!(c.to_string(), "#01020304");
    }

    #[test]
    fn rgbw_deserialize() {
        let c: Rgbw =
            serde_json::from_str(r#"{"red": 255, "green": 128, "blue": 64, "white": 1}"#).unwrap();
        assert_eq!(c.channels(), [255, 128, 64, 1]);

        assert!(
            serde_json::from_str::<Rgbw>(r#"{"red": 0, "green": 0, "blue": 0, "white": 0}"#)
                .is_err()
        );
        assert!(
            serde_json::from_str::<Rgbw>(r#"{"red": "foo", "green": 0, "blue": 0, "white": 1}"#)
                .is_err()
        );
        assert!(serde_json::from_str::<Rgbw>(r#"{"red": 1, "green": 0, "blue": 0}"#).is_err());
    }
}
