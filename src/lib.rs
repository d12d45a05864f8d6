// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `RoVac` Lib - A Rust library to decode Eufy `RoboVac` device state.
//!
//! Eufy `RoboVac` vacuums report state over the Tuya protocol as a map
//! of numbered data points (DPS) carrying raw JSON values. This library
//! turns a snapshot of that map — as cached by whatever polling
//! coordinator talks to the device — into typed, human-readable sensor
//! readings. It owns no I/O: fetching and refreshing the snapshot is the
//! coordinator's job.
//!
//! # Supported Readings
//!
//! - **Battery level**: validated percentage with firmware fallback
//!   (DPS 8, then 163) and an independent charging indicator
//! - **Cleaning mode**: exact-match lookup of the encoded DPS 154
//!   marker plus DPS 10 water level, with a legacy DPS 5 fallback
//! - **Fan speed**: display-normalized wire token (DPS 9)
//! - **Running status**: Running/Stopped/Unknown (DPS 2)
//!
//! Every decode is total: malformed or missing device data degrades to
//! an unavailable or unknown reading. No decode path returns an error
//! or panics, whatever the device sends.
//!
//! # Quick Start
//!
//! ```
//! use rovac_lib::{StateSnapshot, VacuumReadings};
//!
//! // Snapshot as cached by the polling coordinator
//! let snapshot = StateSnapshot::from_json(
//!     r#"{"dps":{"2":true,"8":87,"9":"max_speed"}}"#,
//! )?;
//!
//! let readings = VacuumReadings::decode(Some(&snapshot));
//!
//! assert_eq!(readings.battery().value().map(|l| l.value()), Some(87));
//! assert_eq!(readings.running_status().value().unwrap().to_string(), "Running");
//! assert_eq!(readings.fan_speed().value().unwrap().to_string(), "Max Speed");
//! # Ok::<(), rovac_lib::error::ParseError>(())
//! ```
//!
//! ## Individual Readings
//!
//! Each decoder can also be called on its own; availability tells a
//! consumer whether the device reported the identifier at all:
//!
//! ```
//! use rovac_lib::{DataPoint, StateSnapshot, decode_battery};
//! use serde_json::json;
//!
//! let mut snapshot = StateSnapshot::new();
//! snapshot.set(DataPoint::Battery, json!("not-a-number"));
//!
//! let reading = decode_battery(Some(&snapshot));
//! assert!(reading.value().is_none());  // malformed value
//! assert!(reading.is_available());     // but the data point exists
//! ```

pub mod decode;
mod dps;
pub mod error;
pub mod state;
pub mod types;

pub use decode::{
    FieldRule, FieldValue, ModeLabel, TranslateFn, VacuumReadings, decode_battery,
    decode_charging, decode_cleaning_mode, decode_fan_speed, decode_running_status,
};
pub use dps::DataPoint;
pub use error::{Error, ParseError, Result, ValueError};
pub use state::{Reading, StateSnapshot};
pub use types::{BatteryLevel, CleaningMode, RunningStatus, WaterLevel};
