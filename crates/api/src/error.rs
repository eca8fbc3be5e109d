// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use skyport_domain::DomainError;
use skyport_persistence::PersistenceError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName(name) => ApiError::InvalidInput {
            field: String::from("name"),
            message: format!("'{name}' is not a valid airport name"),
        },
        DomainError::InvalidInaugurationYear(year) => ApiError::InvalidInput {
            field: String::from("inauguration_year"),
            message: format!("Inauguration year {year} is outside the accepted range"),
        },
        DomainError::InvalidCapacity(capacity) => ApiError::InvalidInput {
            field: String::from("capacity"),
            message: format!("Capacity must be positive, got {capacity}"),
        },
        DomainError::InvalidAddressField { field, reason } => ApiError::InvalidInput {
            field: format!("address.{field}"),
            message: reason,
        },
        DomainError::InvalidFunding(funding) => ApiError::InvalidInput {
            field: String::from("funding"),
            message: format!("Funding must not be negative, got {funding}"),
        },
        DomainError::InvalidWorkerCount(count) => ApiError::InvalidInput {
            field: String::from("worker_count"),
            message: format!("Worker count must not be negative, got {count}"),
        },
        DomainError::InvalidPartnerCount(count) => ApiError::InvalidInput {
            field: String::from("partner_count"),
            message: format!("Partner count must not be negative, got {count}"),
        },
        DomainError::InvalidModel(model) => ApiError::InvalidInput {
            field: String::from("model"),
            message: format!("'{model}' is not a valid aircraft model"),
        },
        DomainError::InvalidSeatCount(count) => ApiError::InvalidInput {
            field: String::from("seat_count"),
            message: format!("Seat count must be positive, got {count}"),
        },
        DomainError::InvalidMaxSpeed(speed) => ApiError::InvalidInput {
            field: String::from("max_speed"),
            message: format!("Maximum speed must be positive, got {speed}"),
        },
        DomainError::MissingCredential(field) => ApiError::InvalidInput {
            field: String::from(field),
            message: format!("{field} must not be empty"),
        },
        DomainError::InvalidAirportKind(kind) => ApiError::InvalidInput {
            field: String::from("kind"),
            message: format!("'{kind}' is not a valid airport kind"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Missing-row errors become resource-not-found responses; everything else
/// is an internal error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::AirportNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Airport"),
            message: format!("Airport {id} does not exist"),
        },
        PersistenceError::AddressNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Address"),
            message: format!("Address {id} does not exist"),
        },
        PersistenceError::AircraftNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Aircraft"),
            message: format!("Aircraft {id} does not exist"),
        },
        PersistenceError::UserNotFound(username) => ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: format!("User '{username}' does not exist"),
        },
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
