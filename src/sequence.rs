// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Frame sequence counter.

/// One-byte frame sequence number stamped into every outbound frame.
///
/// The counter belongs to whoever owns the connection. A command only
/// borrows it while building its frame, where it reads the current value and
/// then advances it once. Reading never advances.
///
/// Sharing one counter between concurrent encoders needs external locking.
///
/// # Examples
///
/// ```
/// use skydance::SequenceCounter;
///
/// let mut seq = SequenceCounter::new();
/// assert_eq!(seq.current(), 0);
/// seq.advance();
/// assert_eq!(seq.current(), 1);
///
/// let mut seq = SequenceCounter::starting_at(255);
/// seq.advance();
/// assert_eq!(seq.current(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceCounter(u8);

impl SequenceCounter {
    /// Creates a counter at 0.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a counter at an arbitrary value.
    #[must_use]
    pub const fn starting_at(value: u8) -> Self {
        Self(value)
    }

    /// Returns the value the next frame will carry.
    #[must_use]
    pub const fn current(&self) -> u8 {
        self.0
    }

    /// Moves to the next value, wrapping from 255 to 0.
    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(SequenceCounter::new().current(), 0);
        assert_eq!(SequenceCounter::default(), SequenceCounter::new());
    }

    #[test]
    fn wraps_after_256_advances() {
        let mut seq = SequenceCounter::new();
        for _ in 0..256 {
            seq.advance();
        }
        assert_eq!(seq.current(), 0);
    }

    #[test]
    fn reading_does_not_advance() {
        let seq = SequenceCounter::starting_at(42);
        assert_eq!(seq.current(), 42);
        assert_eq!(seq.current(), 42);
    }
}
