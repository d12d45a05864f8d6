// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `RoVac` library.
//!
//! This module provides the error hierarchy for the library edges: value
//! validation when constructing constrained types, and JSON parsing of
//! state snapshots. Decode operations themselves are total and never
//! return these errors; malformed device data degrades to unavailable or
//! unknown readings instead.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing a state snapshot.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },

    /// An invalid water level string was provided.
    #[error("invalid water level: {0}")]
    InvalidWaterLevel(String),

    /// An invalid cleaning mode key was provided.
    #[error("invalid cleaning mode key: {0}")]
    InvalidModeKey(String),

    /// A raw value had an unexpected JSON type.
    ///
    /// Used by field translation rules to reject a raw value; the field
    /// decoder converts this into a raw-value fallback, never a failure.
    #[error("unexpected value type: expected {expected}")]
    UnexpectedType {
        /// Description of the expected type.
        expected: &'static str,
    },
}

/// Errors related to parsing raw state payloads.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unexpected payload format.
    #[error("unexpected payload format: {0}")]
    UnexpectedFormat(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
