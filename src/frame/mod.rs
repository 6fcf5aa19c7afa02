// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Frame envelope codec.
//!
//! Every message, in both directions, travels in the same envelope:
//!
//! ```text
//! [55 AA 5A A5 7E]  preamble
//! [sequence]        1 byte
//! [payload...]      opcode-determined length
//! [check]           1 byte
//! [7E]              terminator
//! ```
//!
//! The codec knows nothing about opcodes. It wraps and unwraps payloads and
//! verifies the envelope.
//!
//! # Examples
//!
//! ```
//! use skydance::frame;
//!
//! let raw = frame::encode(7, &[0x01, 0x02]);
//! assert_eq!(raw, [0x55, 0xAA, 0x5A, 0xA5, 0x7E, 0x07, 0x01, 0x02, 0x00, 0x7E]);
//!
//! let decoded = frame::decode(&raw).unwrap();
//! assert_eq!(decoded.sequence(), 7);
//! assert_eq!(decoded.payload(), &[0x01, 0x02]);
//! ```

pub mod layout;

use crate::error::DecodeError;

/// A decoded frame borrowing its payload from the raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    sequence: u8,
    payload: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Returns the sequence byte.
    #[must_use]
    pub const fn sequence(&self) -> u8 {
        self.sequence
    }

    /// Returns the payload between the sequence byte and the check byte.
    #[must_use]
    pub const fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

/// Wraps `payload` into a complete frame carrying `sequence`.
#[must_use]
pub fn encode(sequence: u8, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + layout::OVERHEAD);
    frame.extend_from_slice(&layout::PREAMBLE);
    frame.push(sequence);
    frame.extend_from_slice(payload);
    let check = checksum(&frame[layout::SEQUENCE_OFFSET..]);
    frame.push(check);
    frame.push(layout::TERMINATOR);

    tracing::trace!(sequence, len = frame.len(), "Encoded frame");
    frame
}

/// Verifies the envelope of `raw` and returns the enclosed frame.
///
/// # Errors
///
/// Returns `DecodeError` if the input is shorter than an empty frame, the
/// preamble or terminator is wrong, or the check byte does not match.
pub fn decode(raw: &[u8]) -> Result<Frame<'_>, DecodeError> {
    if raw.len() < layout::OVERHEAD {
        return Err(DecodeError::TooShort {
            needed: layout::OVERHEAD,
            actual: raw.len(),
        });
    }
    if raw[..layout::PREAMBLE.len()] != layout::PREAMBLE {
        return Err(DecodeError::BadPreamble);
    }

    let end = raw.len() - layout::TRAILER_LEN;
    let (check, terminator) = (raw[end], raw[end + 1]);
    if terminator != layout::TERMINATOR {
        return Err(DecodeError::BadTerminator(terminator));
    }

    let enclosed = &raw[layout::SEQUENCE_OFFSET..end];
    let expected = checksum(enclosed);
    if check != expected {
        return Err(DecodeError::Checksum {
            expected,
            actual: check,
        });
    }

    let frame = Frame {
        sequence: raw[layout::SEQUENCE_OFFSET],
        payload: &raw[layout::PAYLOAD_OFFSET..end],
    };
    tracing::trace!(
        sequence = frame.sequence,
        len = frame.payload.len(),
        "Decoded frame"
    );
    Ok(frame)
}

/// Check byte over the sequence byte and the payload.
///
/// The gateway writes zero here for every frame it sends and accepts,
/// whatever the enclosed content.
const fn checksum(_enclosed: &[u8]) -> u8 {
    layout::CHECK_BYTE
}
