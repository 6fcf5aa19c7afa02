// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the controller using an in-memory transport.

use std::collections::VecDeque;

use skydance::protocol::{Controller, ControllerConfig, Transport};
use skydance::types::{Brightness, Rgbw, Temperature, Zone, ZoneType};
use skydance::{DecodeError, Error, ProtocolError, frame};

const ZONE_COUNT_8: &str =
    "55aa5aa57e00800080e18026510100f9100081828384858687880000000000000000007e";
const ZONE_INFO_KUCHYN: &str =
    "55aa5aa57e02800080e18026510200f8100021004b75636879c58820746f70000000007e";

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

fn zone(n: u8) -> Zone {
    Zone::new(n).unwrap()
}

/// Records sent frames and replays scripted replies.
#[derive(Debug, Default)]
struct ScriptedTransport {
    sent: Vec<Vec<u8>>,
    replies: VecDeque<Vec<u8>>,
    fail_send: bool,
}

impl ScriptedTransport {
    fn with_replies(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|r| hex(r)).collect(),
            ..Self::default()
        }
    }
}

impl Transport for ScriptedTransport {
    async fn send(&mut self, frame: &[u8]) -> Result<(), ProtocolError> {
        if self.fail_send {
            return Err(ProtocolError::Transport("link down".to_string()));
        }
        self.sent.push(frame.to_vec());
        Ok(())
    }

    async fn receive(&mut self) -> Result<Vec<u8>, ProtocolError> {
        self.replies.pop_front().ok_or(ProtocolError::ConnectionClosed)
    }
}

// ============================================================================
// Commands without reply
// ============================================================================

mod execute {
    use super::*;

    #[tokio::test]
    async fn ping_sends_reference_frame() {
        let controller = Controller::new(ScriptedTransport::default());
        controller.ping().await.unwrap();

        let transport = controller.into_transport();
        assert_eq!(
            transport.sent,
            vec![hex("55aa5aa57e00800080e18000000100790000007e")]
        );
    }

    #[tokio::test]
    async fn sequence_advances_per_frame() {
        let controller = Controller::new(ScriptedTransport::default());
        controller.power_on(zone(2)).await.unwrap();
        controller
            .set_brightness(zone(2), Brightness::MAX)
            .await
            .unwrap();
        controller
            .set_temperature(zone(2), Temperature::new(10))
            .await
            .unwrap();
        controller
            .set_color(zone(2), Rgbw::new(0, 1, 0, 0).unwrap())
            .await
            .unwrap();
        controller.power_off(zone(2)).await.unwrap();
        assert_eq!(controller.sequence().await, 5);

        let transport = controller.into_transport();
        let sequences: Vec<u8> = transport
            .sent
            .iter()
            .map(|raw| frame::decode(raw).unwrap().sequence())
            .collect();
        assert_eq!(sequences, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn master_power_frames() {
        let controller = Controller::new(ScriptedTransport::default());
        controller.master_power_on().await.unwrap();
        controller.master_power_off().await.unwrap();

        let transport = controller.into_transport();
        let payloads: Vec<Vec<u8>> = transport
            .sent
            .iter()
            .map(|raw| frame::decode(raw).unwrap().payload().to_vec())
            .collect();
        assert_eq!(
            payloads,
            vec![
                hex("800080e18000000fff0b0300030001"),
                hex("800080e18000000fff0b0300000000"),
            ]
        );
    }

    #[tokio::test]
    async fn initial_sequence_from_config() {
        let config = ControllerConfig::new().with_initial_sequence(255);
        let controller = Controller::with_config(ScriptedTransport::default(), config);
        controller.ping().await.unwrap();
        controller.ping().await.unwrap();
        assert_eq!(controller.sequence().await, 1);

        let transport = controller.into_transport();
        assert_eq!(transport.sent[0][5], 255);
        assert_eq!(transport.sent[1][5], 0);
    }

    #[tokio::test]
    async fn transport_error_propagates() {
        let transport = ScriptedTransport {
            fail_send: true,
            ..ScriptedTransport::default()
        };
        let controller = Controller::new(transport);
        let err = controller.ping().await.unwrap_err();
        assert!(matches!(err, Error::Protocol(ProtocolError::Transport(_))));
    }

    #[tokio::test]
    async fn concurrent_callers_get_distinct_sequences() {
        let controller = Controller::new(ScriptedTransport::default());
        let (a, b, c) = tokio::join!(
            controller.power_on(zone(1)),
            controller.power_on(zone(2)),
            controller.master_power_off(),
        );
        a.unwrap();
        b.unwrap();
        c.unwrap();

        let mut sequences: Vec<u8> = controller
            .into_transport()
            .sent
            .iter()
            .map(|raw| raw[5])
            .collect();
        sequences.sort_unstable();
        assert_eq!(sequences, vec![0, 1, 2]);
    }
}

// ============================================================================
// Queries
// ============================================================================

mod query {
    use super::*;

    #[tokio::test]
    async fn number_of_zones() {
        let controller = Controller::new(ScriptedTransport::with_replies(&[ZONE_COUNT_8]));
        let response = controller.number_of_zones().await.unwrap();
        assert_eq!(response.number(), 8);
        assert_eq!(response.zones().len(), 8);

        let transport = controller.into_transport();
        assert_eq!(
            transport.sent,
            vec![hex("55aa5aa57e00800080e18000000100790000007e")]
        );
    }

    #[tokio::test]
    async fn zone_info() {
        let controller = Controller::new(ScriptedTransport::with_replies(&[ZONE_INFO_KUCHYN]));
        let info = controller.zone_info(zone(2)).await.unwrap();
        assert_eq!(info.name(), "Kuchyň top");
        assert_eq!(info.zone_type(), ZoneType::Cct);

        let transport = controller.into_transport();
        let sent = frame::decode(&transport.sent[0]).unwrap();
        assert_eq!(sent.payload(), hex("800080e18000000200780000").as_slice());
    }

    #[tokio::test]
    async fn zone_info_for_other_zone_rejected() {
        let controller = Controller::new(ScriptedTransport::with_replies(&[ZONE_INFO_KUCHYN]));
        let err = controller.zone_info(zone(3)).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Decode(DecodeError::UnexpectedZone {
                expected: 0x0004,
                actual: 0x0002
            })
        ));
    }

    #[tokio::test]
    async fn zone_info_for_other_zone_accepted_when_lenient() {
        let config = ControllerConfig::new().with_strict_replies(false);
        let controller =
            Controller::with_config(ScriptedTransport::with_replies(&[ZONE_INFO_KUCHYN]), config);
        let info = controller.zone_info(zone(3)).await.unwrap();
        assert_eq!(info.zone(), Some(zone(2)));
    }

    #[tokio::test]
    async fn mismatched_reply_is_decode_error() {
        let controller = Controller::new(ScriptedTransport::with_replies(&[ZONE_INFO_KUCHYN]));
        let err = controller.number_of_zones().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Decode(DecodeError::UnexpectedOpcode {
                expected: 0xF9,
                actual: 0xF8
            })
        ));
    }

    #[tokio::test]
    async fn closed_channel_is_protocol_error() {
        let controller = Controller::new(ScriptedTransport::default());
        let err = controller.number_of_zones().await.unwrap_err();
        assert!(matches!(err, Error::Protocol(ProtocolError::ConnectionClosed)));
        // the frame was still built and sent
        assert_eq!(controller.sequence().await, 1);
    }
}
