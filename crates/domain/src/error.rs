// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Airport name is empty or invalid.
    InvalidName(String),
    /// Inauguration year is outside the accepted range.
    InvalidInaugurationYear(i32),
    /// Capacity must be a positive number.
    InvalidCapacity(i32),
    /// An address field is empty or invalid.
    InvalidAddressField {
        /// The offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
    /// Funding amount must not be negative.
    InvalidFunding(f64),
    /// Worker count must not be negative.
    InvalidWorkerCount(i32),
    /// Partner count must not be negative.
    InvalidPartnerCount(i32),
    /// Aircraft model is empty or invalid.
    InvalidModel(String),
    /// Seat count must be a positive number.
    InvalidSeatCount(i32),
    /// Maximum speed must be a positive number.
    InvalidMaxSpeed(i32),
    /// Login credentials are missing a field.
    MissingCredential(&'static str),
    /// Airport kind string is not recognized.
    InvalidAirportKind(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "Invalid airport name: '{name}'"),
            Self::InvalidInaugurationYear(year) => {
                write!(f, "Invalid inauguration year: {year}")
            }
            Self::InvalidCapacity(capacity) => {
                write!(f, "Capacity must be positive, got {capacity}")
            }
            Self::InvalidAddressField { field, reason } => {
                write!(f, "Invalid address {field}: {reason}")
            }
            Self::InvalidFunding(funding) => {
                write!(f, "Funding must not be negative, got {funding}")
            }
            Self::InvalidWorkerCount(count) => {
                write!(f, "Worker count must not be negative, got {count}")
            }
            Self::InvalidPartnerCount(count) => {
                write!(f, "Partner count must not be negative, got {count}")
            }
            Self::InvalidModel(model) => write!(f, "Invalid aircraft model: '{model}'"),
            Self::InvalidSeatCount(count) => {
                write!(f, "Seat count must be positive, got {count}")
            }
            Self::InvalidMaxSpeed(speed) => {
                write!(f, "Maximum speed must be positive, got {speed}")
            }
            Self::MissingCredential(field) => write!(f, "Missing credential: {field}"),
            Self::InvalidAirportKind(kind) => write!(f, "Invalid airport kind: '{kind}'"),
        }
    }
}

impl std::error::Error for DomainError {}
