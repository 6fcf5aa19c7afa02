// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Skydance - A Rust codec for the Skydance lighting gateway protocol.
//!
//! The gateway speaks a small binary protocol over TCP. This library turns
//! typed, validated commands into exact wire frames and parses the gateway's
//! replies into typed responses. It does not open connections; plug your own
//! channel in through [`protocol::Transport`].
//!
//! # Supported Features
//!
//! - **Power control**: Zone on/off, all zones on/off
//! - **Light control**: Brightness, white temperature, RGBW color
//! - **Discovery**: Configured zones, zone type and name
//!
//! # Quick Start
//!
//! ## Encoding a command
//!
//! ```
//! use skydance::command::Command;
//! use skydance::types::{Rgbw, Zone};
//! use skydance::SequenceCounter;
//!
//! # fn main() -> skydance::Result<()> {
//! let mut seq = SequenceCounter::new();
//!
//! let zone = Zone::new(2)?;
//! let color = Rgbw::new(255, 128, 64, 0)?;
//!
//! let frame = Command::rgbw(zone, color).to_frame(&mut seq);
//! assert_eq!(&frame[..5], &[0x55, 0xAA, 0x5A, 0xA5, 0x7E]);
//! assert_eq!(seq.current(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Parsing a reply
//!
//! ```
//! use skydance::response::{GetZoneInfoResponse, Response};
//!
//! # fn parse(raw: &[u8]) -> skydance::Result<()> {
//! let info = GetZoneInfoResponse::parse(raw)?;
//! println!("{}: {}", info.name(), info.zone_type());
//! # Ok(())
//! # }
//! ```
//!
//! ## Validating loose input
//!
//! ```
//! use serde_json::json;
//! use skydance::validate;
//!
//! assert!(validate::brightness(Some(&json!(0))).is_err());
//! assert!(validate::zone(Some(&json!("1"))).is_err());
//! assert_eq!(validate::temperature(Some(&json!(0))).unwrap(), 0);
//! ```

pub mod command;
pub mod error;
pub mod frame;
pub mod protocol;
pub mod response;
mod sequence;
pub mod types;
pub mod validate;

pub use command::{Command, Opcode};
pub use error::{DecodeError, Error, ProtocolError, Result, ValueError};
pub use protocol::{Controller, ControllerConfig, Transport};
pub use response::{GetNumberOfZonesResponse, GetZoneInfoResponse, Response};
pub use sequence::SequenceCounter;
pub use types::{Brightness, PowerState, Rgbw, Temperature, Zone, ZoneMask, ZoneType};
