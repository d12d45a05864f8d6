// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cleaning mode decoder.

use std::fmt;

use serde_json::Value;

use crate::decode::{display_string, is_truthy, title_case};
use crate::dps::DataPoint;
use crate::state::{Reading, StateSnapshot};
use crate::types::{CleaningMode, WaterLevel};

/// Decoded cleaning mode label.
///
/// `Known` carries a mode from the static definition table; `Legacy`
/// carries a normalized label from the free-text DPS 5 work mode on
/// firmware that predates the encoded DPS 154 parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeLabel {
    /// A mode matched in the definition table.
    Known(CleaningMode),
    /// A normalized legacy work-mode string.
    Legacy(String),
    /// Nothing matched.
    Unknown,
}

impl ModeLabel {
    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Known(mode) => mode.display_name(),
            Self::Legacy(label) => label,
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the table mode, if one matched.
    #[must_use]
    pub const fn mode(&self) -> Option<CleaningMode> {
        match self {
            Self::Known(mode) => Some(*mode),
            Self::Legacy(_) | Self::Unknown => None,
        }
    }
}

impl fmt::Display for ModeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Decodes the cleaning mode from the current snapshot.
///
/// Resolution order, first match wins:
///
/// 1. Exact (DPS 154 marker, DPS 10 water level) pair in the mode
///    table. The water level counts only when it is one of the fixed
///    tokens; anything else is treated as absent.
/// 2. Marker alone equals the vacuum-only marker. Covers snapshots
///    where DPS 10 holds something unexpected but the marker is
///    unambiguous.
/// 3. Legacy free-text work mode on DPS 5, normalized for display.
/// 4. [`ModeLabel::Unknown`].
///
/// The reading is available whenever DPS 154 is present, regardless of
/// whether its marker matches any known mode.
///
/// # Examples
///
/// ```
/// use rovac_lib::{DataPoint, StateSnapshot, decode_cleaning_mode};
/// use serde_json::json;
///
/// let mut snapshot = StateSnapshot::new();
/// snapshot.set(DataPoint::CleaningParams, json!("FAoKCgASABoAIgIIAhIGCAEQASAB"));
///
/// let reading = decode_cleaning_mode(Some(&snapshot));
/// assert_eq!(reading.value().unwrap().label(), "Vacuum Only");
/// ```
#[must_use]
pub fn decode_cleaning_mode(snapshot: Option<&StateSnapshot>) -> Reading<ModeLabel> {
    let Some(snapshot) = snapshot else {
        return Reading::new(Some(ModeLabel::Unknown), false);
    };

    let available = snapshot.contains(DataPoint::CleaningParams);

    let marker = snapshot
        .get(DataPoint::CleaningParams)
        .and_then(Value::as_str)
        .unwrap_or("");
    let water_level: Option<WaterLevel> = snapshot
        .get(DataPoint::WaterLevel)
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok());

    if let Some(mode) = CleaningMode::from_dps(marker, water_level) {
        return Reading::new(Some(ModeLabel::Known(mode)), available);
    }

    // The vacuum-only marker is unambiguous even when DPS 10 holds
    // something unexpected.
    if marker == CleaningMode::Vacuum.marker() {
        return Reading::new(Some(ModeLabel::Known(CleaningMode::Vacuum)), available);
    }

    if let Some(raw) = snapshot.get(DataPoint::WorkMode)
        && is_truthy(raw)
    {
        tracing::debug!(marker = %marker, "cleaning parameters unrecognized, using legacy work mode");
        let label = title_case(&display_string(raw));
        return Reading::new(Some(ModeLabel::Legacy(label)), available);
    }

    if !marker.is_empty() {
        tracing::debug!(marker = %marker, "unrecognized cleaning mode marker");
    }
    Reading::new(Some(ModeLabel::Unknown), available)
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
    fn vacuum_marker_without_water_level() {
        let snapshot = snapshot_with(&[(
            DataPoint::CleaningParams,
            json!("FAoKCgASABoAIgIIAhIGCAEQASAB"),
        )]);

        let reading = decode_cleaning_mode(Some(&snapshot));
        assert_eq!(reading.value().unwrap().label(), "Vacuum Only");
        assert_eq!(reading.value().unwrap().mode(), Some(CleaningMode::Vacuum));
        assert!(reading.is_available());
    }

    #[test]
    fn mop_marker_with_matching_water_level() {
        let snapshot = snapshot_with(&[
            (
                DataPoint::CleaningParams,
                json!("FgoMCgIIAhIAGgAiAggBEgYIARABIAE="),
            ),
            (DataPoint::WaterLevel, json!("middle")),
        ]);

        let reading = decode_cleaning_mode(Some(&snapshot));
        assert_eq!(
            reading.value().unwrap().label(),
            "Vacuum and Mop (Water Level: Medium)"
        );
    }

    #[test]
    fn mop_marker_with_wrong_water_level_is_unknown() {
        // MopMiddle's marker with a high water level matches nothing
        let snapshot = snapshot_with(&[
            (
                DataPoint::CleaningParams,
                json!("FgoMCgIIAhIAGgAiAggBEgYIARABIAE="),
            ),
            (DataPoint::WaterLevel, json!("high")),
        ]);

        let reading = decode_cleaning_mode(Some(&snapshot));
        assert_eq!(reading.value().unwrap().label(), "Unknown");
        assert!(reading.is_available());
    }

    #[test]
    fn vacuum_marker_with_unexpected_water_level() {
        // DPS 10 disagrees, but the vacuum-only marker is unambiguous
        let snapshot = snapshot_with(&[
            (
                DataPoint::CleaningParams,
                json!("FAoKCgASABoAIgIIAhIGCAEQASAB"),
            ),
            (DataPoint::WaterLevel, json!("low")),
        ]);

        let reading = decode_cleaning_mode(Some(&snapshot));
        assert_eq!(reading.value().unwrap().mode(), Some(CleaningMode::Vacuum));
    }

    #[test]
    fn non_vocabulary_water_level_treated_as_absent() {
        let snapshot = snapshot_with(&[
            (
                DataPoint::CleaningParams,
                json!("FAoKCgASABoAIgIIAhIGCAEQASAB"),
            ),
            (DataPoint::WaterLevel, json!(2)),
        ]);

        let reading = decode_cleaning_mode(Some(&snapshot));
        assert_eq!(reading.value().unwrap().mode(), Some(CleaningMode::Vacuum));
    }

    #[test]
    fn legacy_work_mode_fallback() {
        let snapshot = snapshot_with(&[
            (DataPoint::CleaningParams, json!("bm90LWEtcmVhbC1tb2Rl")),
            (DataPoint::WorkMode, json!("auto_clean")),
        ]);

        let reading = decode_cleaning_mode(Some(&snapshot));
        assert_eq!(
            reading.value().unwrap(),
            &ModeLabel::Legacy("Auto Clean".to_string())
        );
        assert!(reading.is_available());
    }

    #[test]
    fn legacy_fallback_without_marker() {
        // No DPS 154 at all: value still decodes, but unavailable
        let snapshot = snapshot_with(&[(DataPoint::WorkMode, json!("spot"))]);

        let reading = decode_cleaning_mode(Some(&snapshot));
        assert_eq!(reading.value().unwrap().label(), "Spot");
        assert!(!reading.is_available());
    }

    #[test]
    fn falsy_legacy_mode_is_unknown() {
        for falsy in [json!(""), json!(false), json!(0), Value::Null] {
            let snapshot = snapshot_with(&[
                (DataPoint::CleaningParams, json!("bm90LWEtcmVhbC1tb2Rl")),
                (DataPoint::WorkMode, falsy),
            ]);

            let reading = decode_cleaning_mode(Some(&snapshot));
            assert_eq!(reading.value().unwrap().label(), "Unknown");
        }
    }

    #[test]
    fn unrecognized_marker_without_legacy_is_unknown() {
        let snapshot = snapshot_with(&[(DataPoint::CleaningParams, json!("bm90LWEtcmVhbC1tb2Rl"))]);

        let reading = decode_cleaning_mode(Some(&snapshot));
        assert_eq!(reading.value().unwrap(), &ModeLabel::Unknown);
        assert!(reading.is_available());
    }

    #[test]
    fn non_string_marker_treated_as_empty() {
        let snapshot = snapshot_with(&[
            (DataPoint::CleaningParams, json!(154)),
            (DataPoint::WorkMode, json!("edge")),
        ]);

        let reading = decode_cleaning_mode(Some(&snapshot));
        assert_eq!(reading.value().unwrap().label(), "Edge");
        assert!(reading.is_available());
    }

    #[test]
    fn no_snapshot_is_unknown_and_unavailable() {
        let reading = decode_cleaning_mode(None);
        assert_eq!(reading.value().unwrap(), &ModeLabel::Unknown);
        assert!(!reading.is_available());
    }

    #[test]
    fn empty_snapshot_is_unknown_and_unavailable() {
        let snapshot = StateSnapshot::new();
        let reading = decode_cleaning_mode(Some(&snapshot));
        assert_eq!(reading.value().unwrap(), &ModeLabel::Unknown);
        assert!(!reading.is_available());
    }

    #[test]
    fn numeric_legacy_mode_is_stringified() {
        let snapshot = snapshot_with(&[(DataPoint::WorkMode, json!(3))]);

        let reading = decode_cleaning_mode(Some(&snapshot));
        assert_eq!(reading.value().unwrap().label(), "3");
    }
}
