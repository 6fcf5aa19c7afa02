// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone info response parsing.

use std::ops::Range;

use serde::Serialize;

use crate::command::Opcode;
use crate::error::DecodeError;
use crate::response::{Reply, Response};
use crate::types::{Zone, ZoneMask, ZoneType};

const TYPE_OFFSET: usize = 0;
const NAME_RANGE: Range<usize> = 2..16;

/// Reply to [`Command::GetZoneInfo`](crate::command::Command::GetZoneInfo).
///
/// Carries the zone type code and a fixed-width name padded with null or
/// space bytes.
///
/// # Examples
///
/// ```
/// use skydance::response::{GetZoneInfoResponse, Response};
/// use skydance::types::ZoneType;
///
/// let mut raw = vec![
///     0x55, 0xAA, 0x5A, 0xA5, 0x7E, 0x00,
///     0x80, 0x00, 0x80, 0xE1, 0x80, 0x26, 0x51, 0x02, 0x00, 0xF8, 0x10, 0x00,
///     0x11, 0x00,
/// ];
/// raw.extend_from_slice(b"Desk\0\0\0\0\0\0\0\0\0\0");
/// raw.extend_from_slice(&[0x00, 0x7E]);
///
/// let info = GetZoneInfoResponse::parse(&raw).unwrap();
/// assert_eq!(info.zone_type(), ZoneType::Dimmer);
/// assert_eq!(info.name(), "Desk");
/// assert_eq!(info.zone().unwrap().number(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetZoneInfoResponse {
    mask: ZoneMask,
    zone_type: ZoneType,
    name: String,
}

impl GetZoneInfoResponse {
    /// Returns the zone the reply describes, when the gateway addresses
    /// exactly one.
    #[must_use]
    pub fn zone(&self) -> Option<Zone> {
        self.mask.single_zone()
    }

    /// Returns the raw zone mask of the reply.
    #[must_use]
    pub const fn mask(&self) -> ZoneMask {
        self.mask
    }

    /// Returns the fixture type of the zone.
    #[must_use]
    pub const fn zone_type(&self) -> ZoneType {
        self.zone_type
    }

    /// Returns the zone name without padding.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Response for GetZoneInfoResponse {
    const OPCODE: Opcode = Opcode::ZoneInfo;

    fn from_reply(reply: &Reply<'_>) -> Result<Self, DecodeError> {
        let data = reply.data_of_len(NAME_RANGE.end)?;
        let zone_type = ZoneType::try_from(data[TYPE_OFFSET])?;
        let name = std::str::from_utf8(trim_padding(&data[NAME_RANGE]))?.to_owned();

        Ok(Self {
            mask: reply.mask(),
            zone_type,
            name,
        })
    }
}

/// Strips trailing null and space bytes, in any mix.
fn trim_padding(mut name: &[u8]) -> &[u8] {
    while let [rest @ .., 0x00 | b' '] = name {
        name = rest;
    }
    name
}
