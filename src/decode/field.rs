// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generic labeled-field decoder.
//!
//! Some readings are a single data point pushed through a small
//! per-field translation: fan speed and running status. The translation
//! is attempted first; if it rejects the raw value, the decoder keeps
//! the raw value instead of failing the read. Decoding errors are
//! non-fatal and never block the rest of a read cycle.

use std::fmt;

use serde_json::Value;

use crate::decode::{display_string, is_truthy, title_case};
use crate::dps::DataPoint;
use crate::error::ValueError;
use crate::state::{Reading, StateSnapshot};
use crate::types::RunningStatus;

/// Decoded value of a labeled field.
///
/// `Text` is a translated display label; `Raw` is the untranslated
/// device value, kept when the field's translation rejected it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Translated display label.
    Text(String),
    /// Raw device value the translation could not handle.
    Raw(Value),
}

impl FieldValue {
    /// Returns the translated label, if translation succeeded.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(label) => Some(label),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(label) => f.write_str(label),
            Self::Raw(value) => f.write_str(&display_string(value)),
        }
    }
}

/// Translation applied to a field's raw value.
///
/// Returning an error rejects the raw value; the decoder then degrades
/// to [`FieldValue::Raw`] instead of surfacing the error.
pub type TranslateFn = fn(&Value) -> Result<FieldValue, ValueError>;

/// Decoding rule for one labeled field: a data point and its
/// translation.
///
/// The built-in rules cover the fields the vacuum reports; hosts can
/// define further rules for device-specific data points.
///
/// # Examples
///
/// ```
/// use rovac_lib::{DataPoint, FieldRule, FieldValue, StateSnapshot};
/// use serde_json::json;
///
/// let mut snapshot = StateSnapshot::new();
/// snapshot.set(DataPoint::FanSpeed, json!("max_speed"));
///
/// let reading = FieldRule::FAN_SPEED.decode(Some(&snapshot));
/// assert_eq!(reading.value().and_then(FieldValue::as_text), Some("Max Speed"));
/// assert!(reading.is_available());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    data_point: DataPoint,
    translate: TranslateFn,
}

impl FieldRule {
    /// Fan speed (DPS 9): wire token normalized for display, `"Unknown"`
    /// when falsy or absent.
    pub const FAN_SPEED: Self = Self::new(DataPoint::FanSpeed, translate_fan_speed);

    /// Running status (DPS 2): boolean mapped to `"Running"` /
    /// `"Stopped"`, anything else `"Unknown"`.
    pub const RUNNING_STATUS: Self = Self::new(DataPoint::RunningStatus, translate_running_status);

    /// Creates a rule from a data point and a translation.
    #[must_use]
    pub const fn new(data_point: DataPoint, translate: TranslateFn) -> Self {
        Self {
            data_point,
            translate,
        }
    }

    /// Returns the data point this rule reads.
    #[must_use]
    pub const fn data_point(&self) -> DataPoint {
        self.data_point
    }

    /// Decodes the field from the current snapshot.
    ///
    /// Two-step pipeline: attempt the translation on the raw value
    /// (`null` when the key is missing); on any rejection, substitute
    /// the original raw value. The reading is available iff the data
    /// point's key exists in the snapshot, independent of whether the
    /// value was meaningful.
    #[must_use]
    pub fn decode(&self, snapshot: Option<&StateSnapshot>) -> Reading<FieldValue> {
        let Some(snapshot) = snapshot else {
            return Reading::unavailable();
        };

        let available = snapshot.contains(self.data_point);
        let raw = snapshot
            .get(self.data_point)
            .cloned()
            .unwrap_or(Value::Null);

        let value = match (self.translate)(&raw) {
            Ok(value) => value,
            Err(error) => {
                tracing::trace!(data_point = %self.data_point, %error, "translation rejected value, keeping raw");
                FieldValue::Raw(raw)
            }
        };

        Reading::new(Some(value), available)
    }
}

/// Decodes the fan speed from the current snapshot.
#[must_use]
pub fn decode_fan_speed(snapshot: Option<&StateSnapshot>) -> Reading<FieldValue> {
    FieldRule::FAN_SPEED.decode(snapshot)
}

/// Decodes the running status from the current snapshot.
#[must_use]
pub fn decode_running_status(snapshot: Option<&StateSnapshot>) -> Reading<FieldValue> {
    FieldRule::RUNNING_STATUS.decode(snapshot)
}

fn translate_fan_speed(raw: &Value) -> Result<FieldValue, ValueError> {
    if is_truthy(raw) {
        Ok(FieldValue::Text(title_case(&display_string(raw))))
    } else {
        Ok(FieldValue::Text("Unknown".to_string()))
    }
}

fn translate_running_status(raw: &Value) -> Result<FieldValue, ValueError> {
    let label = match raw {
        Value::Bool(running) => RunningStatus::from(*running).as_str(),
        _ => "Unknown",
    };
    Ok(FieldValue::Text(label.to_string()))
}
