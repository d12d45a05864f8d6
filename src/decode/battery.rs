// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Battery level and charging decoders.

use serde_json::Value;

use crate::dps::DataPoint;
use crate::state::{Reading, StateSnapshot};
use crate::types::BatteryLevel;

/// Work mode tokens on DPS 5 that indicate the vacuum is charging.
///
/// The capitalized `"Charging"` is reported by some firmware revisions.
const CHARGING_TOKENS: [&str; 3] = ["charge", "docked", "Charging"];

/// Decodes the battery level from the current snapshot.
///
/// Reads DPS 8 first and falls back to DPS 163 (older firmware); a
/// value counts only if it is an integer within 0-100. The reading is
/// available whenever either identifier is present in the snapshot,
/// even if its value fails validation — this lets a consumer
/// distinguish "no data" from "malformed data".
///
/// # Examples
///
/// ```
/// use rovac_lib::{DataPoint, StateSnapshot, decode_battery};
/// use serde_json::json;
///
/// let mut snapshot = StateSnapshot::new();
/// snapshot.set(DataPoint::Battery, json!(87));
///
/// let reading = decode_battery(Some(&snapshot));
/// assert_eq!(reading.value().map(|l| l.value()), Some(87));
/// assert!(reading.is_available());
/// ```
#[must_use]
pub fn decode_battery(snapshot: Option<&StateSnapshot>) -> Reading<BatteryLevel> {
    let Some(snapshot) = snapshot else {
        return Reading::unavailable();
    };

    let available =
        snapshot.contains(DataPoint::Battery) || snapshot.contains(DataPoint::BatteryLegacy);

    let level = level_at(snapshot, DataPoint::Battery)
        .or_else(|| level_at(snapshot, DataPoint::BatteryLegacy));

    Reading::new(level, available)
}

/// Decodes the charging indicator from the current snapshot.
///
/// Derived independently of the battery level: DPS 5 is checked for
/// membership in a small fixed set of charging-state tokens. The flag
/// only affects presentation (e.g. icon selection), never the numeric
/// value.
#[must_use]
pub fn decode_charging(snapshot: Option<&StateSnapshot>) -> bool {
    snapshot
        .and_then(|s| s.get(DataPoint::WorkMode))
        .and_then(Value::as_str)
        .is_some_and(|mode| CHARGING_TOKENS.contains(&mode))
}

/// Reads a validated battery level from one data point.
fn level_at(snapshot: &StateSnapshot, data_point: DataPoint) -> Option<BatteryLevel> {
    let raw = snapshot.get(data_point)?;
    let Some(value) = integer_value(raw) else {
        tracing::debug!(data_point = %data_point, raw = %raw, "battery value is not an integer");
        return None;
    };

    let level = u8::try_from(value)
        .ok()
        .and_then(|v| BatteryLevel::new(v).ok());
    if level.is_none() {
        tracing::debug!(data_point = %data_point, value, "battery value out of range");
    }
    level
}

/// Extracts an integer from a raw value.
///
/// Accepts JSON numbers and numeric strings, the two shapes Tuya
/// firmware emits for percentages.
fn integer_value(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot_with(pairs: &[(DataPoint, Value)]) -> StateSnapshot {
        let mut snapshot = StateSnapshot::new();
        for (dp, value) in pairs {
            snapshot.set(*dp, value.clone());
        }
        snapshot
    }

    #[test]
    fn primary_value_in_range() {
        for v in [0u8, 1, 50, 99, 100] {
            let snapshot = snapshot_with(&[(DataPoint::Battery, json!(v))]);
            let reading = decode_battery(Some(&snapshot));
            assert_eq!(reading.value().map(BatteryLevel::value), Some(v));
            assert!(reading.is_available());
        }
    }

    #[test]
    fn primary_as_numeric_string() {
        let snapshot = snapshot_with(&[(DataPoint::Battery, json!("87"))]);
        let reading = decode_battery(Some(&snapshot));
        assert_eq!(reading.value().map(BatteryLevel::value), Some(87));
    }

    #[test]
    fn primary_out_of_range_falls_back() {
        let snapshot = snapshot_with(&[
            (DataPoint::Battery, json!(150)),
            (DataPoint::BatteryLegacy, json!(90)),
        ]);
        let reading = decode_battery(Some(&snapshot));
        assert_eq!(reading.value().map(BatteryLevel::value), Some(90));
        assert!(reading.is_available());
    }

    #[test]
    fn primary_non_numeric_falls_back() {
        let snapshot = snapshot_with(&[
            (DataPoint::Battery, json!("full")),
            (DataPoint::BatteryLegacy, json!("73")),
        ]);
        let reading = decode_battery(Some(&snapshot));
        assert_eq!(reading.value().map(BatteryLevel::value), Some(73));
    }

    #[test]
    fn malformed_but_present_is_available() {
        let snapshot = snapshot_with(&[(DataPoint::Battery, json!("soon"))]);
        let reading = decode_battery(Some(&snapshot));
        assert!(reading.value().is_none());
        assert!(reading.is_available());
    }

    #[test]
    fn fallback_alone_is_available() {
        let snapshot = snapshot_with(&[(DataPoint::BatteryLegacy, json!(64))]);
        let reading = decode_battery(Some(&snapshot));
        assert_eq!(reading.value().map(BatteryLevel::value), Some(64));
        assert!(reading.is_available());
    }

    #[test]
    fn both_absent_is_unavailable() {
        let snapshot = snapshot_with(&[(DataPoint::WorkMode, json!("auto"))]);
        let reading = decode_battery(Some(&snapshot));
        assert!(reading.value().is_none());
        assert!(!reading.is_available());
    }

    #[test]
    fn no_snapshot_is_unavailable() {
        let reading = decode_battery(None);
        assert!(reading.value().is_none());
        assert!(!reading.is_available());
    }

    #[test]
    fn rejects_negative_and_wrong_types() {
        for raw in [json!(-1), json!(true), json!(12.5), json!([87]), Value::Null] {
            let snapshot = snapshot_with(&[(DataPoint::Battery, raw)]);
            let reading = decode_battery(Some(&snapshot));
            assert!(reading.value().is_none());
            assert!(reading.is_available());
        }
    }

    #[test]
    fn charging_tokens() {
        for token in ["charge", "docked", "Charging"] {
            let snapshot = snapshot_with(&[(DataPoint::WorkMode, json!(token))]);
            assert!(decode_charging(Some(&snapshot)));
        }
    }

    #[test]
    fn not_charging() {
        let snapshot = snapshot_with(&[(DataPoint::WorkMode, json!("auto"))]);
        assert!(!decode_charging(Some(&snapshot)));

        // Case matters: "charging" is not in the token set
        let snapshot = snapshot_with(&[(DataPoint::WorkMode, json!("charging"))]);
        assert!(!decode_charging(Some(&snapshot)));

        // Non-string mode value
        let snapshot = snapshot_with(&[(DataPoint::WorkMode, json!(5))]);
        assert!(!decode_charging(Some(&snapshot)));

        assert!(!decode_charging(Some(&StateSnapshot::new())));
        assert!(!decode_charging(None));
    }
}
