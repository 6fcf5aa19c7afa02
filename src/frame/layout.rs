// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Byte offsets of the wire format.

use std::ops::Range;

// Envelope, offsets into the raw frame.

/// Fixed frame start.
pub const PREAMBLE: [u8; 5] = [0x55, 0xAA, 0x5A, 0xA5, 0x7E];
/// Fixed frame end.
pub const TERMINATOR: u8 = 0x7E;
/// Value of the check byte in every frame the gateway exchanges.
pub const CHECK_BYTE: u8 = 0x00;
pub const SEQUENCE_OFFSET: usize = 5;
pub const PAYLOAD_OFFSET: usize = 6;
/// Check byte plus terminator.
pub const TRAILER_LEN: usize = 2;
/// Bytes a frame adds around its payload.
pub const OVERHEAD: usize = PAYLOAD_OFFSET + TRAILER_LEN;

// Payload, offsets relative to the first payload byte.

/// Header of every payload sent to the gateway.
pub const REQUEST_HEADER: [u8; 7] = [0x80, 0x00, 0x80, 0xE1, 0x80, 0x00, 0x00];
pub const MASK_RANGE: Range<usize> = 7..9;
pub const OPCODE_OFFSET: usize = 9;
pub const BODY_OFFSET: usize = 10;

/// Set on the opcode of a reply.
pub const REPLY_FLAG: u8 = 0x80;
pub const DATA_LENGTH_RANGE: Range<usize> = 10..12;
pub const DATA_OFFSET: usize = 12;
