// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for decoded `RoboVac` state.
//!
//! This module provides type-safe representations of the values the
//! decoders produce. Constrained types validate at construction time;
//! enum vocabularies carry both their wire token and their display form.
//!
//! # Types
//!
//! - [`BatteryLevel`] - Battery charge percentage (0-100)
//! - [`CleaningMode`] - Cleaning mode with its static definition table
//! - [`RunningStatus`] - Running/Stopped status
//! - [`WaterLevel`] - Mop water level (low/middle/high)

mod battery;
mod cleaning_mode;
mod running;
mod water_level;

pub use battery::BatteryLevel;
pub use cleaning_mode::CleaningMode;
pub use running::RunningStatus;
pub use water_level::WaterLevel;
