// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cleaning mode type and its static definition table.
//!
//! The vacuum encodes its cleaning mode as an opaque blob on DPS 154,
//! disambiguated for the mopping variants by the water level on DPS 10.
//! The blobs are not human-meaningful, so decoding is an exact-match
//! lookup against the fixed table below. The same table drives the
//! reverse direction: a host presenting mode choices maps a canonical
//! key back to the DPS values to write.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;
use crate::types::WaterLevel;

/// A cleaning mode of the vacuum.
///
/// Each mode carries its canonical key, display name, DPS 154 marker,
/// and optional DPS 10 water level. The set is fixed by the device
/// firmware.
///
/// # Examples
///
/// ```
/// use rovac_lib::{CleaningMode, WaterLevel};
///
/// let mode = CleaningMode::from_dps(
///     "FgoMCgIIAhIAGgAiAggBEgYIARABIAE=",
///     Some(WaterLevel::Middle),
/// );
/// assert_eq!(mode, Some(CleaningMode::MopMiddle));
/// assert_eq!(
///     mode.unwrap().display_name(),
///     "Vacuum and Mop (Water Level: Medium)"
/// );
///
/// // Canonical keys parse back to modes
/// let mode: CleaningMode = "mop_low".parse().unwrap();
/// assert_eq!(mode.water_level(), Some(WaterLevel::Low));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CleaningMode {
    /// Vacuum only, no mopping.
    Vacuum,
    /// Vacuum and mop with low water flow.
    MopLow,
    /// Vacuum and mop with medium water flow.
    MopMiddle,
    /// Vacuum and mop with high water flow.
    MopHigh,
}

impl CleaningMode {
    /// All cleaning modes, table order.
    pub const ALL: [Self; 4] = [Self::Vacuum, Self::MopLow, Self::MopMiddle, Self::MopHigh];

    /// Returns the canonical key for this mode.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Vacuum => "vacuum",
            Self::MopLow => "mop_low",
            Self::MopMiddle => "mop_middle",
            Self::MopHigh => "mop_high",
        }
    }

    /// Returns the human-readable mode name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Vacuum => "Vacuum Only",
            Self::MopLow => "Vacuum and Mop (Water Level: Low)",
            Self::MopMiddle => "Vacuum and Mop (Water Level: Medium)",
            Self::MopHigh => "Vacuum and Mop (Water Level: High)",
        }
    }

    /// Returns the encoded DPS 154 marker for this mode.
    ///
    /// The markers are opaque blobs from the device protocol and are
    /// only ever compared for exact equality.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Vacuum => "FAoKCgASABoAIgIIAhIGCAEQASAB",
            Self::MopLow => "FAoKCgIIAhIAGgAiABIGCAEQASAB",
            Self::MopMiddle => "FgoMCgIIAhIAGgAiAggBEgYIARABIAE=",
            Self::MopHigh => "FgoMCgIIAhIAGgAiAggCEgYIARABIAE=",
        }
    }

    /// Returns the DPS 10 water level for this mode, if it mops.
    #[must_use]
    pub const fn water_level(self) -> Option<WaterLevel> {
        match self {
            Self::Vacuum => None,
            Self::MopLow => Some(WaterLevel::Low),
            Self::MopMiddle => Some(WaterLevel::Middle),
            Self::MopHigh => Some(WaterLevel::High),
        }
    }

    /// Looks up a mode by its (marker, water level) pair.
    ///
    /// This is an exact match against the definition table. A marker
    /// with the wrong water level does not match; see the decoder for
    /// the documented fallback order.
    #[must_use]
    pub fn from_dps(marker: &str, water_level: Option<WaterLevel>) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.marker() == marker && mode.water_level() == water_level)
    }
}

impl fmt::Display for CleaningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for CleaningMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.key() == s)
            .ok_or_else(|| ValueError::InvalidModeKey(s.to_string()))
    }
}
