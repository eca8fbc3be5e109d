// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field validation applied before anything reaches the database.

use crate::error::DomainError;
use crate::types::{NewAddress, NewAircraft, NewAirport};

/// Earliest inauguration year accepted. Powered flight starts in 1903.
const MIN_INAUGURATION_YEAR: i32 = 1903;

/// Latest inauguration year accepted; generous headroom for planned sites.
const MAX_INAUGURATION_YEAR: i32 = 2100;

/// Validates the base airport fields, including its owned address.
///
/// # Errors
///
/// Returns an error if the name is blank, the inauguration year is outside
/// the accepted range, the capacity is not positive, or the address is
/// invalid.
pub fn validate_airport_fields(airport: &NewAirport) -> Result<(), DomainError> {
    if airport.name.trim().is_empty() {
        return Err(DomainError::InvalidName(airport.name.clone()));
    }
    if !(MIN_INAUGURATION_YEAR..=MAX_INAUGURATION_YEAR).contains(&airport.inauguration_year) {
        return Err(DomainError::InvalidInaugurationYear(
            airport.inauguration_year,
        ));
    }
    if airport.capacity <= 0 {
        return Err(DomainError::InvalidCapacity(airport.capacity));
    }
    validate_address_fields(&airport.address)
}

/// Validates an address.
///
/// # Errors
///
/// Returns an error if country, city, or street is blank, or if the street
/// number is not positive.
pub fn validate_address_fields(address: &NewAddress) -> Result<(), DomainError> {
    if address.country.trim().is_empty() {
        return Err(DomainError::InvalidAddressField {
            field: "country",
            reason: String::from("must not be empty"),
        });
    }
    if address.city.trim().is_empty() {
        return Err(DomainError::InvalidAddressField {
            field: "city",
            reason: String::from("must not be empty"),
        });
    }
    if address.street.trim().is_empty() {
        return Err(DomainError::InvalidAddressField {
            field: "street",
            reason: String::from("must not be empty"),
        });
    }
    if address.street_number <= 0 {
        return Err(DomainError::InvalidAddressField {
            field: "street number",
            reason: format!("must be positive, got {}", address.street_number),
        });
    }
    Ok(())
}

/// Validates the public-airport extension fields.
///
/// # Errors
///
/// Returns an error if funding or worker count is negative.
pub fn validate_public_details(funding: f64, worker_count: i32) -> Result<(), DomainError> {
    if funding.is_nan() || funding < 0.0 {
        return Err(DomainError::InvalidFunding(funding));
    }
    if worker_count < 0 {
        return Err(DomainError::InvalidWorkerCount(worker_count));
    }
    Ok(())
}

/// Validates the private-airport extension fields.
///
/// # Errors
///
/// Returns an error if the partner count is negative.
pub const fn validate_private_details(partner_count: i32) -> Result<(), DomainError> {
    if partner_count < 0 {
        return Err(DomainError::InvalidPartnerCount(partner_count));
    }
    Ok(())
}

/// Validates an aircraft.
///
/// # Errors
///
/// Returns an error if the model is blank or the seat count or maximum
/// speed is not positive.
pub fn validate_aircraft_fields(aircraft: &NewAircraft) -> Result<(), DomainError> {
    if aircraft.model.trim().is_empty() {
        return Err(DomainError::InvalidModel(aircraft.model.clone()));
    }
    if aircraft.seat_count <= 0 {
        return Err(DomainError::InvalidSeatCount(aircraft.seat_count));
    }
    if aircraft.max_speed <= 0 {
        return Err(DomainError::InvalidMaxSpeed(aircraft.max_speed));
    }
    Ok(())
}

/// Checks that both login fields are present before the database is
/// consulted.
///
/// # Errors
///
/// Returns an error naming the first missing field.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), DomainError> {
    if username.trim().is_empty() {
        return Err(DomainError::MissingCredential("username"));
    }
    if password.is_empty() {
        return Err(DomainError::MissingCredential("password"));
    }
    Ok(())
}
