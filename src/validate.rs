// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Argument validators.
//!
//! These functions check a single candidate value and hand it back narrowed
//! to the wire width, or fail with a [`ValueError`]. They accept loosely
//! typed input (`serde_json::Value`, possibly absent) so that values coming
//! from configuration files or user input are checked the same way as values
//! built in code.
//!
//! Non-integer input is rejected before any range check.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use skydance::validate;
//!
//! assert_eq!(validate::zone(Some(&json!(3))).unwrap(), 3);
//! assert!(validate::zone(Some(&json!("3"))).is_err());
//! assert!(validate::zone(None).is_err());
//! assert!(validate::brightness(Some(&json!(0))).is_err());
//! ```

use serde_json::Value;

use crate::error::ValueError;

/// Inclusive zone range.
pub const ZONE_RANGE: (i64, i64) = (1, 16);

/// Inclusive brightness range.
pub const BRIGHTNESS_RANGE: (i64, i64) = (1, 255);

/// Inclusive temperature range.
pub const TEMPERATURE_RANGE: (i64, i64) = (0, 255);

/// Inclusive color channel range.
pub const COMPONENT_RANGE: (i64, i64) = (0, 255);

/// Extracts an integer from a loosely typed value.
///
/// Integers wider than `i64` saturate to `i64::MAX`; they are outside every
/// range this protocol accepts.
///
/// # Errors
///
/// Returns `ValueError::Missing` for `None` or `null`, and
/// `ValueError::NotAnInteger` for any other non-integer.
pub fn integer(field: &'static str, value: Option<&Value>) -> Result<i64, ValueError> {
    let value = match value {
        None | Some(Value::Null) => return Err(ValueError::Missing { field }),
        Some(v) => v,
    };

    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    if let Some(n) = value.as_u64() {
        return Ok(i64::try_from(n).unwrap_or(i64::MAX));
    }

    Err(ValueError::NotAnInteger {
        field,
        found: value.to_string(),
    })
}

/// Checks that `value` lies in `[min, max]` and narrows it to a byte.
///
/// # Errors
///
/// Returns `ValueError::OutOfRange` when the value is outside the range.
pub fn in_range(field: &'static str, value: i64, (min, max): (i64, i64)) -> Result<u8, ValueError> {
    if value < min || value > max {
        return Err(ValueError::OutOfRange {
            field,
            min,
            max,
            actual: value,
        });
    }
    u8::try_from(value).map_err(|_| ValueError::OutOfRange {
        field,
        min,
        max,
        actual: value,
    })
}

/// Validates a zone number given as a plain integer.
///
/// # Errors
///
/// Returns `ValueError::OutOfRange` outside 1-16.
pub fn zone_number(value: i64) -> Result<u8, ValueError> {
    in_range("zone", value, ZONE_RANGE)
}

/// Validates a brightness level given as a plain integer.
///
/// # Errors
///
/// Returns `ValueError::ZeroBrightness` for 0 and `ValueError::OutOfRange`
/// outside 1-255.
pub fn brightness_level(value: i64) -> Result<u8, ValueError> {
    if value == 0 {
        return Err(ValueError::ZeroBrightness);
    }
    in_range("brightness", value, BRIGHTNESS_RANGE)
}

/// Validates a temperature value given as a plain integer.
///
/// # Errors
///
/// Returns `ValueError::OutOfRange` outside 0-255.
pub fn temperature_value(value: i64) -> Result<u8, ValueError> {
    in_range("temperature", value, TEMPERATURE_RANGE)
}

/// Validates one color channel given as a plain integer.
///
/// `label` only names the channel in the error.
///
/// # Errors
///
/// Returns `ValueError::OutOfRange` outside 0-255.
pub fn component_value(label: &'static str, value: i64) -> Result<u8, ValueError> {
    in_range(label, value, COMPONENT_RANGE)
}

/// Validates a zone number.
///
/// # Errors
///
/// Returns `ValueError` for absent, non-integer or out-of-range input.
pub fn zone(value: Option<&Value>) -> Result<u8, ValueError> {
    zone_number(integer("zone", value)?)
}

/// Validates a brightness level.
///
/// # Errors
///
/// Returns `ValueError` for absent, non-integer, zero or out-of-range input.
pub fn brightness(value: Option<&Value>) -> Result<u8, ValueError> {
    brightness_level(integer("brightness", value)?)
}

/// Validates a color temperature value.
///
/// # Errors
///
/// Returns `ValueError` for absent, non-integer or out-of-range input.
pub fn temperature(value: Option<&Value>) -> Result<u8, ValueError> {
    temperature_value(integer("temperature", value)?)
}

/// Validates one color channel.
///
/// # Errors
///
/// Returns `ValueError` for absent, non-integer or out-of-range input.
pub fn color_component(value: Option<&Value>, label: &'static str) -> Result<u8, ValueError> {
    component_value(label, integer(label, value)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn rejects(check: fn(Option<&Value>) -> Result<u8, ValueError>, inputs: &[Value]) {
        for input in inputs {
            assert!(check(Some(input)).is_err(), "accepted {input}");
        }
        assert!(matches!(check(None), Err(ValueError::Missing { .. })));
    }

    #[test]
    fn zone_invalid() {
        rejects(
            zone,
            &[
                json!(0),
                json!(17),
                json!(256),
                json!(-1),
                json!(99_999_999_999_i64),
                json!("foo"),
                json!(null),
                json!(2.0),
            ],
        );
    }

    #[test]
    fn zone_valid_bounds() {
        assert_eq!(zone(Some(&json!(1))).unwrap(), 1);
        assert_eq!(zone(Some(&json!(16))).unwrap(), 16);
    }

    #[test]
    fn non_integer_checked_before_range() {
        let err = zone(Some(&json!("99"))).unwrap_err();
        assert!(matches!(err, ValueError::NotAnInteger { field: "zone", .. }));

        let err = brightness(Some(&json!(0.5))).unwrap_err();
        assert!(matches!(err, ValueError::NotAnInteger { .. }));
    }

    #[test]
    fn null_is_missing() {
        assert_eq!(
            temperature(Some(&Value::Null)).unwrap_err(),
            ValueError::Missing {
                field: "temperature"
            }
        );
    }

    #[test]
    fn brightness_invalid() {
        rejects(
            brightness,
            &[
                json!(256),
                json!(-1),
                json!(99_999_999_999_i64),
                json!("foo"),
                json!(true),
            ],
        );
    }

    #[test]
    fn brightness_zero_is_distinct() {
        assert_eq!(
            brightness(Some(&json!(0))).unwrap_err(),
            ValueError::ZeroBrightness
        );
    }

    #[test]
    fn brightness_valid_bounds() {
        assert_eq!(brightness(Some(&json!(1))).unwrap(), 1);
        assert_eq!(brightness(Some(&json!(255))).unwrap(), 255);
    }

    #[test]
    fn temperature_bounds() {
        assert_eq!(temperature(Some(&json!(0))).unwrap(), 0);
        assert_eq!(temperature(Some(&json!(255))).unwrap(), 255);
        rejects(
            temperature,
            &[json!(256), json!(-1), json!(99_999_999_999_i64), json!("foo")],
        );
    }

    #[test]
    fn color_component_invalid() {
        for input in [json!(256), json!(-1), json!(99_999_999_999_i64), json!("foo")] {
            assert!(color_component(Some(&input), "foo").is_err());
        }
        assert!(color_component(None, "foo").is_err());
    }

    #[test]
    fn color_component_label_only_in_error() {
        assert_eq!(color_component(Some(&json!(0)), "red").unwrap(), 0);
        assert_eq!(
            color_component(Some(&json!(300)), "white").unwrap_err(),
            ValueError::OutOfRange {
                field: "white",
                min: 0,
                max: 255,
                actual: 300,
            }
        );
    }

    #[test]
    fn huge_unsigned_saturates() {
        let err = zone(Some(&json!(u64::MAX))).unwrap_err();
        assert!(matches!(
            err,
            ValueError::OutOfRange {
                actual: i64::MAX,
                ..
            }
        ));
    }
}
