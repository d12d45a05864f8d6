// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw device state and reading types.
//!
//! This module provides [`StateSnapshot`], the raw data-point map an
//! external polling coordinator maintains for a device, and
//! [`Reading`], the (value, availability) pair every decoder produces.
//!
//! # Examples
//!
//! ```
//! use rovac_lib::{DataPoint, StateSnapshot};
//!
//! let snapshot = StateSnapshot::from_json(r#"{"dps":{"8":87,"2":true}}"#).unwrap();
//!
//! assert!(snapshot.contains(DataPoint::Battery));
//! assert_eq!(snapshot.get(DataPoint::Battery).and_then(|v| v.as_i64()), Some(87));
//! ```

mod reading;
mod snapshot;

pub use reading::Reading;
pub use snapshot::StateSnapshot;
