// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for gateway control.
//!
//! Each type checks its range at construction time, so a command built from
//! these values can always be encoded.
//!
//! # Types
//!
//! - [`Zone`] - Zone number (1-16)
//! - [`ZoneMask`] - 16-bit little-endian zone target
//! - [`ZoneType`] - Fixture kind configured on a zone
//! - [`PowerState`] - On/Off
//! - [`Brightness`] - Brightness level (1-255)
//! - [`Temperature`] - Tunable-white level (0-255)
//! - [`Rgbw`] - Four-channel color, not all zero

mod brightness;
mod color;
mod power;
mod zone;

pub use brightness::Brightness;
pub use color::{Rgbw, Temperature};
pub use power::PowerState;
pub use zone::{Zone, ZoneMask, ZoneType};
