// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sending commands through a caller-provided transport.
//!
//! The codec itself never touches the network. This module defines the
//! [`Transport`] seam a connection implements, and a [`Controller`] that owns
//! the sequence counter for that connection and pairs commands with replies.
//!
//! The controller does not open, close or reconnect the transport, and it
//! never retries.

mod config;
mod controller;

pub use config::ControllerConfig;
pub use controller::Controller;

use crate::error::ProtocolError;

/// A byte channel to one gateway.
///
/// Implementations deliver whole frames: `send` writes one encoded frame and
/// `receive` returns the next complete frame read from the gateway.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends one encoded frame.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the frame could not be written.
    async fn send(&mut self, frame: &[u8]) -> Result<(), ProtocolError>;

    /// Receives the next frame.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the channel fails or is closed.
    async fn receive(&mut self) -> Result<Vec<u8>, ProtocolError>;
}
