// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for dimming control.
//!
//! The gateway takes a raw byte level where 1 is the dimmest and 255 the
//! brightest. Level 0 is not a brightness: turning a zone off is a power
//! command.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::validate;

/// Brightness level (1-255).
///
/// # Examples
///
/// ```
/// use skydance::types::Brightness;
///
/// let level = Brightness::new(128).unwrap();
/// assert_eq!(level.value(), 128);
///
/// assert_eq!(Brightness::MIN.value(), 1);
/// assert_eq!(Brightness::MAX.value(), 255);
///
/// // Zero is rejected
/// assert!(Brightness::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Brightness(u8);

impl Brightness {
    /// Dimmest level.
    pub const MIN: Self = Self(1);

    /// Brightest level.
    pub const MAX: Self = Self(255);

    /// Creates a new brightness level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::ZeroBrightness` if `value` is 0.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        validate::brightness_level(i64::from(value)).map(Self)
    }

    /// Returns the raw level.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Brightness {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        validate::brightness_level(value).map(Self)
    }
}

impl From<Brightness> for u8 {
    fn from(level: Brightness) -> Self {
        level.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
