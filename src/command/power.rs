// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power command bodies.

use crate::types::PowerState;

const SUB_OP: u8 = 0x01;
const MASTER_SUB_OP: u8 = 0x03;
const MASTER_CHANNELS_ON: u8 = 0x03;

pub(super) const BODY_LEN: usize = 3;
pub(super) const MASTER_BODY_LEN: usize = 5;

/// `[01] [00] [state]`
pub(super) fn write_body(buf: &mut Vec<u8>, state: PowerState) {
    buf.extend_from_slice(&[SUB_OP, 0x00, state.as_byte()]);
}

/// `[03] [00] [channels] [00] [state]`
///
/// The gateway expects the channel byte set to `03` when switching on and
/// cleared when switching off.
pub(super) fn write_master_body(buf: &mut Vec<u8>, state: PowerState) {
    let channels = if state.is_on() { MASTER_CHANNELS_ON } else { 0x00 };
    buf.extend_from_slice(&[MASTER_SUB_OP, 0x00, channels, 0x00, state.as_byte()]);
}
