// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`Controller`](super::Controller).
///
/// Deserializable so it can sit inside an application's own config file;
/// missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use skydance::protocol::ControllerConfig;
///
/// // Defaults
/// let config = ControllerConfig::new();
/// assert_eq!(config.initial_sequence(), 0);
/// assert!(config.strict_replies());
///
/// // With all options
/// let config = ControllerConfig::new()
///     .with_initial_sequence(200)
///     .with_strict_replies(false);
///
/// // From JSON
/// let config: ControllerConfig = serde_json::from_str(r#"{"initial_sequence": 7}"#).unwrap();
/// assert_eq!(config.initial_sequence(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    initial_sequence: u8,
    strict_replies: bool,
}

impl ControllerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sequence value stamped into the first frame.
    #[must_use]
    pub fn with_initial_sequence(mut self, value: u8) -> Self {
        self.initial_sequence = value;
        self
    }

    /// Sets whether zone info replies must address the requested zone.
    #[must_use]
    pub fn with_strict_replies(mut self, strict: bool) -> Self {
        self.strict_replies = strict;
        self
    }

    /// Returns the sequence value stamped into the first frame.
    #[must_use]
    pub fn initial_sequence(&self) -> u8 {
        self.initial_sequence
    }

    /// Returns whether zone info replies must address the requested zone.
    #[must_use]
    pub fn strict_replies(&self) -> bool {
        self.strict_replies
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            initial_sequence: 0,
            strict_replies: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let config = ControllerConfig::new()
            .with_initial_sequence(9)
            .with_strict_replies(false);
        assert_eq!(config.initial_sequence(), 9);
        assert!(!config.strict_replies());
    }

    #[test]
    fn deserialize_partial() {
        let config: ControllerConfig =
            serde_json::from_str(r#"{"strict_replies": false}"#).unwrap();
        assert_eq!(config.initial_sequence(), 0);
        assert!(!config.strict_replies());

        let config: ControllerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ControllerConfig::default());
    }

    #[test]
    fn deserialize_rejects_wide_sequence() {
        assert!(serde_json::from_str::<ControllerConfig>(r#"{"initial_sequence": 256}"#).is_err());
    }
}
