// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gateway command definitions.
//!
//! A [`Command`] is built from already validated values, so building one
//! cannot fail and encoding one cannot produce a malformed frame. Loosely
//! typed input goes through [`crate::validate`] or the `TryFrom<i64>` impls
//! of the value types first.
//!
//! # Available Commands
//!
//! | Variant | Opcode | Target | Purpose |
//! |---------|--------|--------|---------|
//! | [`Command::Ping`] | `0x79` | reserved | Keep-alive |
//! | [`Command::Power`] | `0x0A` | zone | Zone on/off |
//! | [`Command::MasterPower`] | `0x0B` | broadcast | All zones on/off |
//! | [`Command::Brightness`] | `0x07` | zone | Brightness level |
//! | [`Command::Temperature`] | `0x0D` | zone | White temperature |
//! | [`Command::Rgbw`] | `0x01` | zone | Color |
//! | [`Command::GetNumberOfZones`] | `0x79` | reserved | Zone count query |
//! | [`Command::GetZoneInfo`] | `0x78` | zone | Zone type and name query |
//!
//! # Payload Structure
//!
//! ```text
//! [80 00 80 E1 80 00 00]  fixed header
//! [mask lo][mask hi]      target zone mask
//! [opcode]
//! [body...]               fixed length per opcode
//! ```
//!
//! # Examples
//!
//! ```
//! use skydance::command::Command;
//! use skydance::types::{Brightness, Zone};
//! use skydance::SequenceCounter;
//!
//! let mut seq = SequenceCounter::new();
//! let zone = Zone::new(2).unwrap();
//!
//! let cmd = Command::brightness(zone, Brightness::MAX);
//! assert_eq!(cmd.payload().len(), cmd.payload_len());
//!
//! // Building the frame stamps and advances the sequence
//! let frame = cmd.to_frame(&mut seq);
//! assert_eq!(frame[5], 0);
//! assert_eq!(seq.current(), 1);
//! ```

mod light;
mod power;
mod zone;

use serde::{Deserialize, Serialize};

use crate::frame::{self, layout};
use crate::sequence::SequenceCounter;
use crate::types::{self, PowerState, Rgbw, Zone, ZoneMask};

/// Operation codes understood by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Set RGBW color.
    Color = 0x01,
    /// Set brightness.
    Brightness = 0x07,
    /// Switch a zone.
    Power = 0x0A,
    /// Switch all zones.
    MasterPower = 0x0B,
    /// Set white temperature.
    Temperature = 0x0D,
    /// Query zone type and name.
    ZoneInfo = 0x78,
    /// Ping, and query configured zones.
    ZoneCount = 0x79,
}

impl Opcode {
    /// Returns the request byte.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the byte the gateway uses when replying to this opcode.
    #[must_use]
    pub const fn reply_code(self) -> u8 {
        self as u8 | layout::REPLY_FLAG
    }

    /// Returns the length of the body that follows this opcode in a request.
    #[must_use]
    pub const fn body_len(self) -> usize {
        match self {
            Self::ZoneInfo | Self::ZoneCount => zone::BODY_LEN,
            Self::Power => power::BODY_LEN,
            Self::MasterPower => power::MASTER_BODY_LEN,
            Self::Brightness | Self::Temperature => light::LEVEL_BODY_LEN,
            Self::Color => light::COLOR_BODY_LEN,
        }
    }
}

/// A command that can be sent to the gateway.
///
/// The enum is serializable, tagged by `command`, so command lists can live
/// in configuration files and are validated when loaded:
///
/// ```
/// use skydance::command::Command;
///
/// let cmd: Command =
///     serde_json::from_str(r#"{"command": "brightness", "zone": 3, "level": 200}"#).unwrap();
/// assert_eq!(cmd.zone().unwrap().number(), 3);
///
/// let bad = serde_json::from_str::<Command>(r#"{"command": "brightness", "zone": 3, "level": 0}"#);
/// assert!(bad.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Keep-alive.
    Ping,
    /// Switch one zone.
    Power {
        /// The zone to switch.
        zone: Zone,
        /// The desired state.
        state: PowerState,
    },
    /// Switch every zone at once.
    MasterPower {
        /// The desired state.
        state: PowerState,
    },
    /// Set the brightness of one zone.
    Brightness {
        /// The zone to dim.
        zone: Zone,
        /// The brightness level.
        level: types::Brightness,
    },
    /// Set the white temperature of one zone.
    Temperature {
        /// The zone to adjust.
        zone: Zone,
        /// The temperature level.
        temperature: types::Temperature,
    },
    /// Set the color of one zone.
    Rgbw {
        /// The zone to color.
        zone: Zone,
        /// The color.
        color: Rgbw,
    },
    /// Query which zones are configured.
    GetNumberOfZones,
    /// Query the type and name of one zone.
    GetZoneInfo {
        /// The zone to describe.
        zone: Zone,
    },
}

impl Command {
    /// Creates a ping.
    #[must_use]
    pub const fn ping() -> Self {
        Self::Ping
    }

    /// Creates a command turning `zone` on.
    #[must_use]
    pub const fn power_on(zone: Zone) -> Self {
        Self::Power {
            zone,
            state: PowerState::On,
        }
    }

    /// Creates a command turning `zone` off.
    #[must_use]
    pub const fn power_off(zone: Zone) -> Self {
        Self::Power {
            zone,
            state: PowerState::Off,
        }
    }

    /// Creates a command turning every zone on.
    #[must_use]
    pub const fn master_power_on() -> Self {
        Self::MasterPower {
            state: PowerState::On,
        }
    }

    /// Creates a command turning every zone off.
    #[must_use]
    pub const fn master_power_off() -> Self {
        Self::MasterPower {
            state: PowerState::Off,
        }
    }

    /// Creates a brightness command.
    #[must_use]
    pub const fn brightness(zone: Zone, level: types::Brightness) -> Self {
        Self::Brightness { zone, level }
    }

    /// Creates a temperature command.
    #[must_use]
    pub const fn temperature(zone: Zone, temperature: types::Temperature) -> Self {
        Self::Temperature { zone, temperature }
    }

    /// Creates a color command.
    #[must_use]
    pub const fn rgbw(zone: Zone, color: Rgbw) -> Self {
        Self::Rgbw { zone, color }
    }

    /// Creates a zone count query.
    #[must_use]
    pub const fn get_number_of_zones() -> Self {
        Self::GetNumberOfZones
    }

    /// Creates a zone info query.
    #[must_use]
    pub const fn get_zone_info(zone: Zone) -> Self {
        Self::GetZoneInfo { zone }
    }

    /// Returns the opcode of this command.
    #[must_use]
    pub const fn opcode(&self) -> Opcode {
        match self {
            Self::Ping | Self::GetNumberOfZones => Opcode::ZoneCount,
            Self::Power { .. } => Opcode::Power,
            Self::MasterPower { .. } => Opcode::MasterPower,
            Self::Brightness { .. } => Opcode::Brightness,
            Self::Temperature { .. } => Opcode::Temperature,
            Self::Rgbw { .. } => Opcode::Color,
            Self::GetZoneInfo { .. } => Opcode::ZoneInfo,
        }
    }

    /// Returns the zone this command addresses, if it addresses a single one.
    #[must_use]
    pub const fn zone(&self) -> Option<Zone> {
        match self {
            Self::Power { zone, .. }
            | Self::Brightness { zone, .. }
            | Self::Temperature { zone, .. }
            | Self::Rgbw { zone, .. }
            | Self::GetZoneInfo { zone } => Some(*zone),
            Self::Ping | Self::MasterPower { .. } | Self::GetNumberOfZones => None,
        }
    }

    /// Returns the target mask written into the payload.
    #[must_use]
    pub const fn target(&self) -> ZoneMask {
        match self {
            Self::Ping | Self::GetNumberOfZones => ZoneMask::RESERVED,
            Self::MasterPower { .. } => ZoneMask::MASTER,
            Self::Power { zone, .. }
            | Self::Brightness { zone, .. }
            | Self::Temperature { zone, .. }
            | Self::Rgbw { zone, .. }
            | Self::GetZoneInfo { zone } => zone.mask(),
        }
    }

    /// Returns the length of the payload this command produces.
    #[must_use]
    pub const fn payload_len(&self) -> usize {
        layout::BODY_OFFSET + self.opcode().body_len()
    }

    /// Builds the payload.
    ///
    /// The payload depends only on the command's arguments; the sequence
    /// counter is not involved.
    #[must_use]
    pub fn payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(self.payload_len());
        payload.extend_from_slice(&layout::REQUEST_HEADER);
        payload.extend_from_slice(&self.target().to_le_bytes());
        payload.push(self.opcode().code());

        match self {
            Self::Ping | Self::GetNumberOfZones | Self::GetZoneInfo { .. } => {
                zone::write_query_body(&mut payload);
            }
            Self::Power { state, .. } => power::write_body(&mut payload, *state),
            Self::MasterPower { state } => power::write_master_body(&mut payload, *state),
            Self::Brightness { level, .. } => light::write_level_body(&mut payload, level.value()),
            Self::Temperature { temperature, .. } => {
                light::write_level_body(&mut payload, temperature.value());
            }
            Self::Rgbw { color, .. } => light::write_color_body(&mut payload, *color),
        }

        debug_assert_eq!(payload.len(), self.payload_len());
        payload
    }

    /// Builds the complete frame, stamping the current sequence value and
    /// then advancing the counter once.
    #[must_use]
    pub fn to_frame(&self, sequence: &mut SequenceCounter) -> Vec<u8> {
        let frame = frame::encode(sequence.current(), &self.payload());
        sequence.advance();
        frame
    }
}
