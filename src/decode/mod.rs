// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of raw data-point snapshots into sensor readings.
//!
//! Each decoder reads the current [`StateSnapshot`] and produces a
//! [`Reading`]: battery level, cleaning mode, fan speed, and running
//! status. Decoding is total — malformed or missing device data
//! degrades to unavailable or unknown readings, never to an error or a
//! panic.
//!
//! # Examples
//!
//! ```
//! use rovac_lib::{StateSnapshot, VacuumReadings};
//!
//! let payload = r#"{"dps":{
//!     "2": true,
//!     "8": 87,
//!     "9": "max_speed",
//!     "154": "FAoKCgASABoAIgIIAhIGCAEQASAB"
//! }}"#;
//! let snapshot = StateSnapshot::from_json(payload).unwrap();
//!
//! let readings = VacuumReadings::decode(Some(&snapshot));
//!
//! assert_eq!(readings.battery().value().map(|l| l.value()), Some(87));
//! assert_eq!(readings.cleaning_mode().value().unwrap().label(), "Vacuum Only");
//! assert_eq!(readings.fan_speed().value().unwrap().to_string(), "Max Speed");
//! assert_eq!(readings.running_status().value().unwrap().to_string(), "Running");
//! ```

mod battery;
mod cleaning_mode;
mod field;

pub use battery::{decode_battery, decode_charging};
pub use cleaning_mode::{ModeLabel, decode_cleaning_mode};
pub use field::{FieldRule, FieldValue, TranslateFn, decode_fan_speed, decode_running_status};

use serde_json::Value;

use crate::state::{Reading, StateSnapshot};
use crate::types::BatteryLevel;

/// All sensor readings decoded from one snapshot.
///
/// Convenience for hosts that refresh every entity of a device in one
/// read cycle. Each reading is decoded independently; one malformed
/// data point never affects the others.
#[derive(Debug, Clone, PartialEq)]
pub struct VacuumReadings {
    battery: Reading<BatteryLevel>,
    charging: bool,
    cleaning_mode: Reading<ModeLabel>,
    fan_speed: Reading<FieldValue>,
    running_status: Reading<FieldValue>,
}

impl VacuumReadings {
    /// Decodes all readings from the current snapshot.
    #[must_use]
    pub fn decode(snapshot: Option<&StateSnapshot>) -> Self {
        Self {
            battery: decode_battery(snapshot),
            charging: decode_charging(snapshot),
            cleaning_mode: decode_cleaning_mode(snapshot),
            fan_speed: decode_fan_speed(snapshot),
            running_status: decode_running_status(snapshot),
        }
    }

    /// Returns the battery level reading.
    #[must_use]
    pub const fn battery(&self) -> &Reading<BatteryLevel> {
        &self.battery
    }

    /// Returns `true` if the vacuum reports a charging state.
    ///
    /// Presentation hint only (e.g. icon selection); independent of the
    /// numeric battery level.
    #[must_use]
    pub const fn is_charging(&self) -> bool {
        self.charging
    }

    /// Returns the cleaning mode reading.
    #[must_use]
    pub const fn cleaning_mode(&self) -> &Reading<ModeLabel> {
        &self.cleaning_mode
    }

    /// Returns the fan speed reading.
    #[must_use]
    pub const fn fan_speed(&self) -> &Reading<FieldValue> {
        &self.fan_speed
    }

    /// Returns the running status reading.
    #[must_use]
    pub const fn running_status(&self) -> &Reading<FieldValue> {
        &self.running_status
    }
}

/// Python-style truthiness for raw device values.
///
/// Absent, `false`, `0`, `""`, and empty containers are falsy;
/// everything else is truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Renders a raw value the way a user would expect to read it.
///
/// Strings render without quotes; everything else renders as its JSON
/// form.
pub(crate) fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Normalizes a wire token for display: underscores become spaces and
/// every word is capitalized.
pub(crate) fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_alphabetic = false;
    for c in raw.chars() {
        if c == '_' {
            out.push(' ');
            prev_alphabetic = false;
        } else if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}
