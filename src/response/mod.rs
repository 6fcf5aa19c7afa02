// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for gateway replies.
//!
//! A reply payload has a fixed prefix followed by opcode-specific data:
//!
//! ```text
//! 0..7    header (gateway-specific)
//! 7..9    zone mask, little-endian
//! 9       request opcode | 0x80
//! 10..12  data length, little-endian
//! 12..    data
//! ```
//!
//! Each response type reads its fields at fixed offsets inside the data and
//! fails closed: an unknown code or a short reply is an error, never a
//! default value.

mod zone_info;
mod zones;

pub use zone_info::GetZoneInfoResponse;
pub use zones::GetNumberOfZonesResponse;

use std::ops::Range;

use crate::command::Opcode;
use crate::error::DecodeError;
use crate::frame::{self, Frame, layout};
use crate::types::ZoneMask;

/// A typed reply to one command.
pub trait Response: Sized {
    /// The request opcode this response answers.
    const OPCODE: Opcode;

    /// Builds the response from a reply whose opcode has been checked.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if a field is missing or invalid.
    fn from_reply(reply: &Reply<'_>) -> Result<Self, DecodeError>;

    /// Parses a raw frame, envelope included.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if the envelope, the opcode or any field is
    /// invalid.
    fn parse(raw: &[u8]) -> Result<Self, DecodeError> {
        Self::from_frame(&frame::decode(raw)?)
    }

    /// Parses an already decoded frame.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if the opcode or any field is invalid.
    fn from_frame(frame: &Frame<'_>) -> Result<Self, DecodeError> {
        let reply = Reply::read(frame.payload(), Self::OPCODE)?;
        Self::from_reply(&reply)
    }
}

/// The fixed prefix of a reply payload and its data section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply<'a> {
    mask: ZoneMask,
    data: &'a [u8],
}

impl<'a> Reply<'a> {
    /// Reads the reply prefix, checking the opcode against `expected`.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::TooShort` if the payload ends before the
    /// declared data, `DecodeError::LengthMismatch` if bytes follow it, and
    /// `DecodeError::UnexpectedOpcode` for a reply to a different request.
    pub fn read(payload: &'a [u8], expected: Opcode) -> Result<Self, DecodeError> {
        require_len(payload, layout::DATA_OFFSET)?;

        let opcode = payload[layout::OPCODE_OFFSET];
        if opcode != expected.reply_code() {
            return Err(DecodeError::UnexpectedOpcode {
                expected: expected.reply_code(),
                actual: opcode,
            });
        }

        let mask = ZoneMask::from_le_bytes(read_le_pair(payload, layout::MASK_RANGE)?);
        let declared = usize::from(u16::from_le_bytes(read_le_pair(
            payload,
            layout::DATA_LENGTH_RANGE,
        )?));
        let end = layout::DATA_OFFSET + declared;
        require_len(payload, end)?;
        if payload.len() > end {
            return Err(DecodeError::LengthMismatch {
                declared,
                actual: payload.len() - layout::DATA_OFFSET,
            });
        }

        Ok(Self {
            mask,
            data: &payload[layout::DATA_OFFSET..end],
        })
    }

    /// Returns the zone mask of the reply.
    #[must_use]
    pub const fn mask(&self) -> ZoneMask {
        self.mask
    }

    /// Returns the data section.
    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the data section, failing if it is shorter than `len`.
    pub(crate) fn data_of_len(&self, len: usize) -> Result<&'a [u8], DecodeError> {
        require_len(self.data, len)?;
        Ok(&self.data[..len])
    }
}

fn require_len(bytes: &[u8], needed: usize) -> Result<(), DecodeError> {
    if bytes.len() < needed {
        return Err(DecodeError::TooShort {
            needed,
            actual: bytes.len(),
        });
    }
    Ok(())
}

fn read_le_pair(bytes: &[u8], range: Range<usize>) -> Result<[u8; 2], DecodeError> {
    let needed = range.end;
    bytes
        .get(range)
        .and_then(|pair| <[u8; 2]>::try_from(pair).ok())
        .ok_or(DecodeError::TooShort {
            needed,
            actual: bytes.len(),
        })
}
