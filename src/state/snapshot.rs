// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Snapshot of the raw data-point map reported by a device.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dps::DataPoint;
use crate::error::ParseError;

/// A read-only snapshot of a device's raw data-point state.
///
/// The snapshot maps DPS wire keys (e.g. `"8"`) to the raw JSON values
/// the device reported. It is produced and refreshed by an external
/// polling coordinator; this library only reads it. A snapshot may be
/// partially populated — decoders treat missing identifiers as
/// unavailable data, never as an error.
///
/// Values keep their wire types (`serde_json::Value`): integers,
/// strings, booleans, or whatever else the firmware sends.
///
/// # Examples
///
/// ```
/// use rovac_lib::{DataPoint, StateSnapshot};
/// use serde_json::json;
///
/// let mut snapshot = StateSnapshot::new();
/// snapshot.set(DataPoint::Battery, json!(87));
/// snapshot.set(DataPoint::RunningStatus, json!(true));
///
/// assert_eq!(snapshot.len(), 2);
/// assert!(snapshot.contains(DataPoint::Battery));
/// assert!(!snapshot.contains(DataPoint::FanSpeed));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Raw data points keyed by their wire key.
    #[serde(default)]
    dps: BTreeMap<String, Value>,

    /// When the coordinator fetched this snapshot, if it stamped it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fetched_at: Option<DateTime<Utc>>,
}

/// Payload wrapper used by Tuya status responses.
///
/// Device status payloads arrive as `{"dps": {"8": 87, ...}}`; some
/// coordinators strip the wrapper and cache the bare map. Parsing
/// accepts both forms.
#[derive(Deserialize)]
struct DpsEnvelope {
    dps: BTreeMap<String, Value>,
}

impl StateSnapshot {
    /// Creates a new empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a snapshot from a JSON payload.
    ///
    /// Accepts both the Tuya status envelope (`{"dps": {...}}`) and a
    /// bare data-point object (`{"8": 87, ...}`).
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the payload is not valid JSON or is not
    /// an object.
    ///
    /// # Examples
    ///
    /// ```
    /// use rovac_lib::{DataPoint, StateSnapshot};
    ///
    /// let enveloped = StateSnapshot::from_json(r#"{"dps":{"8":87}}"#).unwrap();
    /// let bare = StateSnapshot::from_json(r#"{"8":87}"#).unwrap();
    ///
    /// assert_eq!(enveloped, bare);
    /// ```
    pub fn from_json(payload: &str) -> Result<Self, ParseError> {
        if let Ok(envelope) = serde_json::from_str::<DpsEnvelope>(payload) {
            return Ok(Self {
                dps: envelope.dps,
                fetched_at: None,
            });
        }

        let value: Value = serde_json::from_str(payload)?;
        match value {
            Value::Object(map) => Ok(Self {
                dps: map.into_iter().collect(),
                fetched_at: None,
            }),
            other => Err(ParseError::UnexpectedFormat(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    /// Stamps the snapshot with the time it was fetched.
    #[must_use]
    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = Some(fetched_at);
        self
    }

    /// Sets the raw value for a data point.
    pub fn set(&mut self, data_point: DataPoint, value: Value) {
        self.dps.insert(data_point.key().to_string(), value);
    }

    /// Sets the raw value for an arbitrary wire key.
    ///
    /// Devices report many data points beyond the ones this library
    /// decodes; coordinators store them all.
    pub fn set_key(&mut self, key: impl Into<String>, value: Value) {
        self.dps.insert(key.into(), value);
    }

    /// Returns the raw value for a data point, if present.
    #[must_use]
    pub fn get(&self, data_point: DataPoint) -> Option<&Value> {
        self.dps.get(data_point.key())
    }

    /// Returns the raw value for a data point, or a default.
    #[must_use]
    pub fn get_or<'a>(&'a self, data_point: DataPoint, default: &'a Value) -> &'a Value {
        self.get(data_point).unwrap_or(default)
    }

    /// Returns the raw value for an arbitrary wire key, if present.
    #[must_use]
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        self.dps.get(key)
    }

    /// Returns `true` if the snapshot contains the data point.
    #[must_use]
    pub fn contains(&self, data_point: DataPoint) -> bool {
        self.dps.contains_key(data_point.key())
    }

    /// Returns `true` if the snapshot contains the wire key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.dps.contains_key(key)
    }

    /// Returns the number of data points in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dps.len()
    }

    /// Returns `true` if the snapshot holds no data points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dps.is_empty()
    }

    /// Iterates over all (wire key, raw value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.dps.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns when the coordinator fetched this snapshot, if stamped.
    #[must_use]
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Returns how long ago this snapshot was fetched.
    ///
    /// Returns `None` if the snapshot was never stamped. Consumers use
    /// this to treat stale coordinator data as unavailable.
    #[must_use]
    pub fn age(&self) -> Option<TimeDelta> {
        self.fetched_at.map(|at| Utc::now() - at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_snapshot_is_empty() {
        let snapshot = StateSnapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
        assert!(snapshot.get(DataPoint::Battery).is_none());
        assert!(snapshot.fetched_at().is_none());
        assert!(snapshot.age().is_none());
    }

    #[test]
    fn set_and_get() {
        let mut snapshot = StateSnapshot::new();
        snapshot.set(DataPoint::Battery, json!(87));

        assert!(snapshot.contains(DataPoint::Battery));
        assert_eq!(snapshot.get(DataPoint::Battery), Some(&json!(87)));
        assert_eq!(snapshot.get_key("8"), Some(&json!(87)));
    }

    #[test]
    fn get_or_default() {
        let snapshot = StateSnapshot::new();
        let default = json!("");

        assert_eq!(snapshot.get_or(DataPoint::CleaningParams, &default), &default);
    }

    #[test]
    fn arbitrary_keys() {
        let mut snapshot = StateSnapshot::new();
        snapshot.set_key("101", json!("edge_clean"));

        assert!(snapshot.contains_key("101"));
        assert_eq!(snapshot.get_key("101"), Some(&json!("edge_clean")));
        // Not part of the decoded vocabulary
        assert_eq!(DataPoint::from_key("101"), None);
    }

    #[test]
    fn parse_enveloped_payload() {
        let snapshot =
            StateSnapshot::from_json(r#"{"dps":{"2":true,"8":87,"9":"max_speed"}}"#).unwrap();

        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.get(DataPoint::RunningStatus), Some(&json!(true)));
        assert_eq!(snapshot.get(DataPoint::FanSpeed), Some(&json!("max_speed")));
    }

    #[test]
    fn parse_bare_payload() {
        let snapshot = StateSnapshot::from_json(r#"{"8":87,"163":90}"#).unwrap();

        assert_eq!(snapshot.get(DataPoint::Battery), Some(&json!(87)));
        assert_eq!(snapshot.get(DataPoint::BatteryLegacy), Some(&json!(90)));
    }

    #[test]
    fn parse_invalid_json() {
        assert!(StateSnapshot::from_json("not json").is_err());
    }

    #[test]
    fn parse_non_object_payload() {
        let err = StateSnapshot::from_json("[1,2,3]").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedFormat(_)));
    }

    #[test]
    fn fetched_at_stamp() {
        let at = Utc::now();
        let snapshot = StateSnapshot::new().with_fetched_at(at);

        assert_eq!(snapshot.fetched_at(), Some(at));
        assert!(snapshot.age().is_some());
    }

    #[test]
    fn serde_round_trip() {
        let mut snapshot = StateSnapshot::new();
        snapshot.set(DataPoint::Battery, json!(50));
        snapshot.set(DataPoint::WorkMode, json!("auto"));

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: StateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }

    #[test]
    fn iter_yields_all_pairs() {
        let mut snapshot = StateSnapshot::new();
        snapshot.set(DataPoint::RunningStatus, json!(false));
        snapshot.set(DataPoint::Battery, json!(12));

        let pairs: Vec<_> = snapshot.iter().collect();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&("2", &json!(false))));
        assert!(pairs.contains(&("8", &json!(12))));
    }
}
