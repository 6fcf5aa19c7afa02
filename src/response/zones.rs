// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone count response parsing.

use serde::Serialize;

use crate::command::Opcode;
use crate::error::DecodeError;
use crate::response::{Reply, Response};
use crate::types::Zone;

const SLOT_COUNT: usize = 16;

/// Reply to [`Command::GetNumberOfZones`](crate::command::Command::GetNumberOfZones).
///
/// The data holds one slot per zone, in zone order. A configured zone has a
/// non-zero slot.
///
/// # Examples
///
/// ```
/// use skydance::response::{GetNumberOfZonesResponse, Response};
///
/// let raw = [
///     0x55, 0xAA, 0x5A, 0xA5, 0x7E, 0x00,
///     0x80, 0x00, 0x80, 0xE1, 0x80, 0x26, 0x51, 0x01, 0x00, 0xF9, 0x10, 0x00,
///     0x81, 0x82, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
///     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
///     0x00, 0x7E,
/// ];
/// let response = GetNumberOfZonesResponse::parse(&raw).unwrap();
/// assert_eq!(response.number(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetNumberOfZonesResponse {
    slots: [u8; SLOT_COUNT],
}

impl GetNumberOfZonesResponse {
    /// Returns how many zones are configured (0-16).
    #[must_use]
    pub fn number(&self) -> u8 {
        // at most 16 slots
        u8::try_from(self.slots.iter().filter(|&&slot| slot != 0).count()).unwrap_or(u8::MAX)
    }

    /// Returns the configured zones in ascending order.
    #[must_use]
    pub fn zones(&self) -> Vec<Zone> {
        Zone::all()
            .zip(self.slots)
            .filter(|&(_, slot)| slot != 0)
            .map(|(zone, _)| zone)
            .collect()
    }

    /// Returns `true` if `zone` is configured.
    #[must_use]
    pub fn contains(&self, zone: Zone) -> bool {
        self.slots[usize::from(zone.number() - 1)] != 0
    }
}

impl Response for GetNumberOfZonesResponse {
    const OPCODE: Opcode = Opcode::ZoneCount;

    fn from_reply(reply: &Reply<'_>) -> Result<Self, DecodeError> {
        let mut slots = [0; SLOT_COUNT];
        slots.copy_from_slice(reply.data_of_len(SLOT_COUNT)?);
        Ok(Self { slots })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::hex;

    fn parse(raw: &str) -> Result<GetNumberOfZonesResponse, DecodeError> {
        GetNumberOfZonesResponse::parse(&hex(raw))
    }

    #[test]
    fn all_zones() {
        let response =
            parse("55aa5aa57e00800080e18026510100f910008182838485868788898a8b8c8d8e8f90007e")
                .unwrap();
        assert_eq!(response.number(), 16);
        assert_eq!(response.zones(), Zone::all().collect::<Vec<_>>());
    }

    #[test]
    fn half_zones() {
        let response =
            parse("55aa5aa57e00800080e18026510100f9100081828384858687880000000000000000007e")
                .unwrap();
        assert_eq!(response.number(), 8);
        assert!(response.contains(Zone::new(8).unwrap()));
        assert!(!response.contains(Zone::new(9).unwrap()));
        assert_eq!(response.zones().last(), Some(&Zone::new(8).unwrap()));
    }

    #[test]
    fn no_zones() {
        let response =
            parse("55aa5aa57e00800080e18026510100f9100000000000000000000000000000000000007e")
                .unwrap();
        assert_eq!(response.number(), 0);
        assert!(response.zones().is_empty());
    }

    #[test]
    fn zone_info_reply_rejected() {
        let err =
            parse("55aa5aa57e00800080e18026514000f8100051005a6f6e65205247422b4343540000007e")
                .unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedOpcode { .. }));
    }

    #[test]
    fn short_data_rejected() {
        // declares and carries 8 data bytes
        let err = parse("55aa5aa57e00800080e18026510100f908008182838485868788007e").unwrap_err();
        assert_eq!(
            err,
            DecodeError::TooShort {
                needed: 16,
                actual: 8
            }
        );
    }

    #[test]
    fn bad_checksum_rejected() {
        let err =
            parse("55aa5aa57e00800080e18026510100f910008182838485868788898a8b8c8d8e8f90017e")
                .unwrap_err();
        assert!(matches!(err, DecodeError::Checksum { .. }));
    }
}
