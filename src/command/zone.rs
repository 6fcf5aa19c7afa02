// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Query command bodies: ping, zone count and zone info.

pub(super) const BODY_LEN: usize = 2;

pub(super) fn write_query_body(buf: &mut Vec<u8>) {
    buf.extend_from_slice(&[0x00; BODY_LEN]);
}
