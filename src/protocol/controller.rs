// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command dispatch over a single gateway connection.

use tokio::sync::Mutex;

use crate::command::Command;
use crate::error::{DecodeError, Error};
use crate::protocol::{ControllerConfig, Transport};
use crate::response::{GetNumberOfZonesResponse, GetZoneInfoResponse, Response};
use crate::sequence::SequenceCounter;
use crate::types::{Brightness, Rgbw, Temperature, Zone};

/// Sends commands to one gateway and parses its replies.
///
/// The controller owns the sequence counter of its connection. The counter
/// and the transport share one lock, held from encoding a frame until its
/// reply (if any) has been read, so concurrent callers never interleave
/// frames or reuse a sequence value.
///
/// # Examples
///
/// ```no_run
/// use skydance::protocol::{Controller, Transport};
/// use skydance::types::{Brightness, Zone};
///
/// # async fn example<T: Transport>(transport: T) -> skydance::Result<()> {
/// let controller = Controller::new(transport);
///
/// let zones = controller.number_of_zones().await?;
/// for zone in zones.zones() {
///     let info = controller.zone_info(zone).await?;
///     if info.zone_type().supports_brightness() {
///         controller.set_brightness(zone, Brightness::MAX).await?;
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Controller<T> {
    inner: Mutex<Connection<T>>,
    config: ControllerConfig,
}

#[derive(Debug)]
struct Connection<T> {
    transport: T,
    sequence: SequenceCounter,
}

impl<T: Transport> Controller<T> {
    /// Creates a controller with the default configuration.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ControllerConfig::default())
    }

    /// Creates a controller with the given configuration.
    #[must_use]
    pub fn with_config(transport: T, config: ControllerConfig) -> Self {
        Self {
            inner: Mutex::new(Connection {
                transport,
                sequence: SequenceCounter::starting_at(config.initial_sequence()),
            }),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Returns the sequence value the next frame will carry.
    pub async fn sequence(&self) -> u8 {
        self.inner.lock().await.sequence.current()
    }

    /// Consumes the controller and returns the transport.
    pub fn into_transport(self) -> T {
        self.inner.into_inner().transport
    }

    /// Sends a command that has no reply.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the transport fails.
    pub async fn execute(&self, command: &Command) -> Result<(), Error> {
        let mut conn = self.inner.lock().await;
        conn.send(command).await
    }

    /// Sends a command and parses the reply as `R`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the transport fails and `Error::Decode`
    /// if the reply is not a valid `R`.
    pub async fn query<R: Response>(&self, command: &Command) -> Result<R, Error> {
        let mut conn = self.inner.lock().await;
        conn.send(command).await?;
        let raw = conn.transport.receive().await?;

        R::parse(&raw).map_err(|e| {
            tracing::warn!(opcode = ?command.opcode(), error = %e, "Failed to decode reply");
            Error::from(e)
        })
    }

    /// Sends a ping.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the transport fails.
    pub async fn ping(&self) -> Result<(), Error> {
        self.execute(&Command::ping()).await
    }

    /// Turns a zone on.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the transport fails.
    pub async fn power_on(&self, zone: Zone) -> Result<(), Error> {
        self.execute(&Command::power_on(zone)).await
    }

    /// Turns a zone off.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the transport fails.
    pub async fn power_off(&self, zone: Zone) -> Result<(), Error> {
        self.execute(&Command::power_off(zone)).await
    }

    /// Turns every zone on.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the transport fails.
    pub async fn master_power_on(&self) -> Result<(), Error> {
        self.execute(&Command::master_power_on()).await
    }

    /// Turns every zone off.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the transport fails.
    pub async fn master_power_off(&self) -> Result<(), Error> {
        self.execute(&Command::master_power_off()).await
    }

    /// Sets the brightness of a zone.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the transport fails.
    pub async fn set_brightness(&self, zone: Zone, level: Brightness) -> Result<(), Error> {
        self.execute(&Command::brightness(zone, level)).await
    }

    /// Sets the white temperature of a zone.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the transport fails.
    pub async fn set_temperature(&self, zone: Zone, temperature: Temperature) -> Result<(), Error> {
        self.execute(&Command::temperature(zone, temperature)).await
    }

    /// Sets the color of a zone.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the transport fails.
    pub async fn set_color(&self, zone: Zone, color: Rgbw) -> Result<(), Error> {
        self.execute(&Command::rgbw(zone, color)).await
    }

    /// Queries which zones are configured.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the transport fails and `Error::Decode`
    /// if the reply is invalid.
    pub async fn number_of_zones(&self) -> Result<GetNumberOfZonesResponse, Error> {
        self.query(&Command::get_number_of_zones()).await
    }

    /// Queries the type and name of a zone.
    ///
    /// With strict replies enabled (the default), a reply describing another
    /// zone is rejected.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the transport fails and `Error::Decode`
    /// if the reply is invalid or addressed to another zone.
    pub async fn zone_info(&self, zone: Zone) -> Result<GetZoneInfoResponse, Error> {
        let info: GetZoneInfoResponse = self.query(&Command::get_zone_info(zone)).await?;

        if self.config.strict_replies() && info.mask() != zone.mask() {
            return Err(DecodeError::UnexpectedZone {
                expected: zone.mask().bits(),
                actual: info.mask().bits(),
            }
            .into());
        }
        Ok(info)
    }
}

impl<T: Transport> Connection<T> {
    async fn send(&mut self, command: &Command) -> Result<(), Error> {
        let frame = command.to_frame(&mut self.sequence);
        tracing::debug!(
            opcode = ?command.opcode(),
            sequence = frame[crate::frame::layout::SEQUENCE_OFFSET],
            "Sending command"
        );
        self.transport.send(&frame).await?;
        Ok(())
    }
}
