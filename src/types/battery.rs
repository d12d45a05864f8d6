// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Battery level type.

use std::fmt;

use crate::error::ValueError;

/// Battery charge level as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use rovac_lib::BatteryLevel;
///
/// let level = BatteryLevel::new(87).unwrap();
/// assert_eq!(level.value(), 87);
/// assert_eq!(level.to_string(), "87%");
///
/// // Out-of-range values are rejected
/// assert!(BatteryLevel::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BatteryLevel(u8);

impl BatteryLevel {
    /// Minimum level value.
    pub const MIN: u8 = 0;

    /// Maximum level value.
    pub const MAX: u8 = 100;

    /// Fully charged.
    pub const FULL: Self = Self(100);

    /// Creates a new battery level.
    ///
    /// # Arguments
    ///
    /// * `value` - The charge percentage (0-100)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is greater than 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > Self::MAX {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a battery level, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Returns the charge percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns whether the battery is low (below 20%).
    #[must_use]
    pub const fn is_low(&self) -> bool {
        self.0 < 20
    }

    /// Returns whether the battery is fully charged.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.0 == Self::MAX
    }
}

impl fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for BatteryLevel {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
