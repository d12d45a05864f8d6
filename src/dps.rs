// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Data point identifiers for the `RoboVac` Tuya protocol.
//!
//! Tuya devices report state as numbered data points (DPS), keyed by the
//! string form of a small integer. The assignments below are dictated by
//! the device firmware and treated as opaque configuration constants.

use std::fmt;

/// A data point identifier in the device's state protocol.
///
/// Each variant corresponds to one numbered field the vacuum reports.
/// The wire key is the decimal string the device uses in its status
/// payloads.
///
/// # Examples
///
/// ```
/// use rovac_lib::DataPoint;
///
/// assert_eq!(DataPoint::Battery.key(), "8");
/// assert_eq!(DataPoint::from_key("154"), Some(DataPoint::CleaningParams));
/// assert_eq!(DataPoint::from_key("999"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataPoint {
    /// Whether the vacuum is currently running (DPS 2, boolean).
    RunningStatus,
    /// Legacy free-text work mode (DPS 5). Also carries the
    /// charging-state tokens used for the charging indicator.
    WorkMode,
    /// Battery percentage (DPS 8).
    Battery,
    /// Fan suction level (DPS 9, string token).
    FanSpeed,
    /// Mop water level (DPS 10, string token).
    WaterLevel,
    /// Encoded cleaning parameters blob (DPS 154). Opaque marker
    /// distinguishing cleaning modes.
    CleaningParams,
    /// Battery percentage on older firmware (DPS 163). Fallback for
    /// [`DataPoint::Battery`].
    BatteryLegacy,
}

impl DataPoint {
    /// All data points this library reads.
    pub const ALL: [Self; 7] = [
        Self::RunningStatus,
        Self::WorkMode,
        Self::Battery,
        Self::FanSpeed,
        Self::WaterLevel,
        Self::CleaningParams,
        Self::BatteryLegacy,
    ];

    /// Returns the wire key used in status payloads.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::RunningStatus => "2",
            Self::WorkMode => "5",
            Self::Battery => "8",
            Self::FanSpeed => "9",
            Self::WaterLevel => "10",
            Self::CleaningParams => "154",
            Self::BatteryLegacy => "163",
        }
    }

    /// Looks up a data point by its wire key.
    ///
    /// Returns `None` for keys this library does not read.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dp| dp.key() == key)
    }
}

impl fmt::Display for DataPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
