// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mop water level type.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Water level for mopping modes.
///
/// The device reports the level on DPS 10 as one of the fixed tokens
/// `"low"`, `"middle"`, `"high"`. Anything outside this vocabulary is
/// treated as no water level by the decoders.
///
/// # Examples
///
/// ```
/// use rovac_lib::WaterLevel;
///
/// let level: WaterLevel = "middle".parse().unwrap();
/// assert_eq!(level, WaterLevel::Middle);
/// assert_eq!(level.as_str(), "middle");
/// assert_eq!(level.display_name(), "Medium");
///
/// assert!("soaking".parse::<WaterLevel>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaterLevel {
    /// Low water flow.
    Low,
    /// Medium water flow (wire token `"middle"`).
    Middle,
    /// High water flow.
    High,
}

impl WaterLevel {
    /// All water levels, in increasing flow order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Middle, Self::High];

    /// Returns the wire token reported by the device.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Middle => "middle",
            Self::High => "high",
        }
    }

    /// Returns the human-readable name.
    ///
    /// Note the asymmetry: the `"middle"` wire token displays as
    /// "Medium".
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Middle => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for WaterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for WaterLevel {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "middle" => Ok(Self::Middle),
            "high" => Ok(Self::High),
            _ => Err(ValueError::InvalidWaterLevel(s.to_string())),
        }
    }
}
