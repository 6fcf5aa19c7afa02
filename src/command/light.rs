// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light control command bodies: brightness, temperature and color.

use crate::types::Rgbw;

const LEVEL_SUB_OP: u8 = 0x02;
const COLOR_SUB_OP: u8 = 0x07;

pub(super) const LEVEL_BODY_LEN: usize = 4;
pub(super) const COLOR_BODY_LEN: usize = 9;

/// `[02] [00] [00] [level]`, shared by brightness and temperature.
pub(super) fn write_level_body(buf: &mut Vec<u8>, level: u8) {
    buf.extend_from_slice(&[LEVEL_SUB_OP, 0x00, 0x00, level]);
}

/// `[07] [00] [r] [g] [b] [w] [00 00 00]`
pub(super) fn write_color_body(buf: &mut Vec<u8>, color: Rgbw) {
    buf.extend_from_slice(&[COLOR_SUB_OP, 0x00]);
    buf.extend_from_slice(&color.channels());
    buf.resize(buf.len() + 3, 0x00);
}

#[cfg(test)]
mod tests {
    use crate::command::Command;
    use crate::test_util::hex;
    use crate::types::{Brightness, Rgbw, Temperature, Zone};

    fn zone2() -> Zone {
        Zone::new(2).unwrap()
    }

    fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Vec<u8> {
        Command::rgbw(zone2(), Rgbw::new(r, g, b, w).unwrap()).payload()
    }

    #[test]
    fn brightness_min() {
        let cmd = Command::brightness(zone2(), Brightness::MIN);
        assert_eq!(cmd.payload(), hex("800080e180000002000702000001"));
    }

    #[test]
    fn brightness_max() {
        let cmd = Command::brightness(zone2(), Brightness::MAX);
        assert_eq!(cmd.payload(), hex("800080e1800000020007020000ff"));
    }

    #[test]
    fn temperature_min() {
        let cmd = Command::temperature(zone2(), Temperature::new(0));
        assert_eq!(cmd.payload(), hex("800080e180000002000d02000000"));
    }

    #[test]
    fn temperature_max() {
        let cmd = Command::temperature(zone2(), Temperature::new(255));
        assert_eq!(cmd.payload(), hex("800080e180000002000d020000ff"));
    }

    #[test]
    fn rgbw_individual_components() {
        assert_eq!(rgbw(255, 0, 0, 0), hex("800080e18000000200010700ff000000000000"));
        assert_eq!(rgbw(0, 255, 0, 0), hex("800080e1800000020001070000ff0000000000"));
        assert_eq!(rgbw(0, 0, 255, 0), hex("800080e180000002000107000000ff00000000"));
        assert_eq!(rgbw(0, 0, 0, 255), hex("800080e18000000200010700000000ff000000"));
    }

    #[test]
    fn rgbw_mixed() {
        assert_eq!(rgbw(255, 128, 64, 1), hex("800080e18000000200010700ff804001000000"));
    }

    #[test]
    fn rgbw_min() {
        assert_eq!(rgbw(0, 1, 0, 0), hex("800080e1800000020001070000010000000000"));
    }

    #[test]
    fn rgbw_max() {
        assert_eq!(rgbw(255, 255, 255, 255), hex("800080e18000000200010700ffffffff000000"));
    }
}
