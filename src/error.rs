// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Skydance protocol library.
//!
//! Two kinds of failure come out of the codec itself: [`ValueError`] when a
//! command argument is illegal, and [`DecodeError`] when an inbound frame
//! cannot be trusted. [`ProtocolError`] covers the transport behind a
//! [`Controller`](crate::protocol::Controller).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A command argument failed validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// An inbound frame could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The transport failed to deliver or receive a frame.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors related to argument validation.
///
/// These are raised while building a command, before any byte is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// No value was given for a required field.
    #[error("missing value for {field}")]
    Missing {
        /// The field being validated.
        field: &'static str,
    },

    /// The value is not an integer (text, float, boolean, ...).
    #[error("{field} must be an integer, got {found}")]
    NotAnInteger {
        /// The field being validated.
        field: &'static str,
        /// A rendering of the rejected input.
        found: String,
    },

    /// A numeric value is outside the allowed range.
    #[error("{field} value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// The field being validated.
        field: &'static str,
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The value that was provided.
        actual: i64,
    },

    /// Brightness level 0 was requested; switching off is a power command.
    #[error("brightness 0 is not a level, use a power off command instead")]
    ZeroBrightness,

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// All four RGBW channels are zero.
    #[error("at least one of red, green, blue, white must be non-zero")]
    AllChannelsZero,
}

/// Errors related to decoding inbound frames.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ends before a required field.
    #[error("frame too short: need {needed} bytes, got {actual}")]
    TooShort {
        /// Bytes required.
        needed: usize,
        /// Bytes available.
        actual: usize,
    },

    /// The reply carries more data than its length field declares.
    #[error("declared {declared} data bytes, reply carries {actual}")]
    LengthMismatch {
        /// Data length from the reply header.
        declared: usize,
        /// Data bytes present in the payload.
        actual: usize,
    },

    /// The frame does not start with the protocol preamble.
    #[error("bad preamble")]
    BadPreamble,

    /// The frame does not end with the terminator byte.
    #[error("bad terminator: 0x{0:02x}")]
    BadTerminator(u8),

    /// The check byte does not match the enclosed content.
    #[error("checksum mismatch: expected 0x{expected:02x}, got 0x{actual:02x}")]
    Checksum {
        /// Check byte computed over the frame.
        expected: u8,
        /// Check byte carried by the frame.
        actual: u8,
    },

    /// The reply carries a different opcode than the one being parsed.
    #[error("unexpected opcode: expected 0x{expected:02x}, got 0x{actual:02x}")]
    UnexpectedOpcode {
        /// Opcode the response type accepts.
        expected: u8,
        /// Opcode found in the frame.
        actual: u8,
    },

    /// The reply describes a different zone than the one requested.
    #[error("reply addressed to zone mask 0x{actual:04x}, expected 0x{expected:04x}")]
    UnexpectedZone {
        /// Mask of the requested zone.
        expected: u16,
        /// Mask carried by the reply.
        actual: u16,
    },

    /// The zone type code is not one the gateway documents.
    #[error("unknown zone type code 0x{0:02x}")]
    UnknownZoneType(u8),

    /// The zone name is not valid UTF-8.
    #[error("zone name is not valid UTF-8: {0}")]
    InvalidName(#[from] std::str::Utf8Error),
}

/// Errors related to the transport behind a controller.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// I/O failure on the underlying channel.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The peer closed the channel.
    #[error("connection closed")]
    ConnectionClosed,

    /// Any other transport-specific failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
