// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Running status type.

use std::fmt;

/// Whether the vacuum is currently running.
///
/// The device reports this as a plain boolean on DPS 2. Any non-boolean
/// value decodes to "Unknown" at the decoder level; this type only
/// represents the two meaningful states.
///
/// # Examples
///
/// ```
/// use rovac_lib::RunningStatus;
///
/// assert_eq!(RunningStatus::from(true), RunningStatus::Running);
/// assert_eq!(RunningStatus::Stopped.as_str(), "Stopped");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunningStatus {
    /// The vacuum is cleaning.
    Running,
    /// The vacuum is idle or docked.
    Stopped,
}

impl RunningStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Stopped => "Stopped",
        }
    }

    /// Returns `true` if the vacuum is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl fmt::Display for RunningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<bool> for RunningStatus {
    fn from(value: bool) -> Self {
        if value { Self::Running } else { Self::Stopped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bool() {
        assert_eq!(RunningStatus::from(true), RunningStatus::Running);
        assert_eq!(RunningStatus::from(false), RunningStatus::Stopped);
    }

    #[test]
    fn labels() {
        assert_eq!(RunningStatus::Running.to_string(), "Running");
        assert_eq!(RunningStatus::Stopped.to_string(), "Stopped");
    }

    #[test]
    fn is_running() {
        assert!(RunningStatus::Running.is_running());
        assert!(!RunningStatus::Stopped.is_running());
    }
}
