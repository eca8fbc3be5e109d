// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers: validate requests, translate them into domain values,
//! invoke the persistence adapter, and translate errors.

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    AddressPayload, AirportKindResponse, CreateAircraftRequest, CreateAircraftResponse,
    CreateAirportResponse, CreatePrivateAirportRequest, CreatePublicAirportRequest,
    CreateUserRequest, CreateUserResponse, DeleteAircraftResponse, DeleteAirportResponse,
    ListAircraftResponse, ListAirportsResponse, ListPrivateAirportsResponse,
    ListPublicAirportsResponse, LoginRequest, LoginResponse, SetAircraftActiveRequest,
    SetAircraftActiveResponse, UpdateAircraftRequest, UpdateAircraftResponse,
    UpdateAirportResponse, UpdatePrivateAirportRequest, UpdatePublicAirportRequest,
};
use skyport_domain::{
    Address, Aircraft, Airport, AirportKind, NewAddress, NewAircraft, NewAirport,
    NewPrivateAirport, NewPublicAirport, PrivateAirport, PublicAirport, User,
    validate_aircraft_fields, validate_airport_fields, validate_credentials,
    validate_private_details, validate_public_details,
};
use skyport_persistence::Persistence;
use tracing::{debug, info};

fn new_address(payload: &AddressPayload) -> NewAddress {
    NewAddress {
        country: payload.country.clone(),
        city: payload.city.clone(),
        street: payload.street.clone(),
        street_number: payload.street_number,
    }
}

fn airport_not_found(airport_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Airport"),
        message: format!("Airport {airport_id} does not exist"),
    }
}

fn aircraft_not_found(aircraft_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Aircraft"),
        message: format!("Aircraft {aircraft_id} does not exist"),
    }
}

/// Checks submitted credentials against the stored user record.
///
/// An unknown username and a wrong password are distinguishable in the
/// logs, but the client receives the same generic failure for both.
///
/// # Errors
///
/// Returns an error if a credential field is empty or the credentials do
/// not match a stored user.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    validate_credentials(&request.username, &request.password).map_err(translate_domain_error)?;

    let user: Option<User> = persistence
        .get_user(&request.username)
        .map_err(translate_persistence_error)?;

    match user {
        Some(user) if user.password == request.password => {
            info!("login succeeded for '{}'", request.username);
            Ok(LoginResponse {
                username: request.username.clone(),
                message: format!("Welcome, {}", request.username),
            })
        }
        Some(_) => {
            debug!("login rejected for '{}': wrong password", request.username);
            Err(ApiError::AuthenticationFailed {
                reason: String::from("invalid username or password"),
            })
        }
        None => {
            debug!("login rejected for '{}': unknown user", request.username);
            Err(ApiError::AuthenticationFailed {
                reason: String::from("invalid username or password"),
            })
        }
    }
}

/// Creates a login user.
///
/// # Errors
///
/// Returns an error if a credential field is empty or the username is
/// already taken.
pub fn create_user(
    persistence: &mut Persistence,
    request: &CreateUserRequest,
) -> Result<CreateUserResponse, ApiError> {
    validate_credentials(&request.username, &request.password).map_err(translate_domain_error)?;

    let existing: Option<User> = persistence
        .get_user(&request.username)
        .map_err(translate_persistence_error)?;
    if existing.is_some() {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("unique_username"),
            message: format!("User '{}' already exists", request.username),
        });
    }

    let user: User = User {
        username: request.username.clone(),
        password: request.password.clone(),
    };
    persistence
        .create_user(&user)
        .map_err(translate_persistence_error)?;

    info!("created user '{}'", request.username);
    Ok(CreateUserResponse {
        username: request.username.clone(),
        message: format!("Created user '{}'", request.username),
    })
}

/// Creates a public airport: address row, base row, then extension row.
///
/// # Errors
///
/// Returns an error if a field fails validation or a statement fails.
pub fn create_public_airport(
    persistence: &mut Persistence,
    request: &CreatePublicAirportRequest,
) -> Result<CreateAirportResponse, ApiError> {
    let new_airport: NewPublicAirport = NewPublicAirport {
        airport: NewAirport {
            name: request.name.clone(),
            inauguration_year: request.inauguration_year,
            capacity: request.capacity,
            address: new_address(&request.address),
            image: request.image.clone(),
        },
        funding: request.funding,
        worker_count: request.worker_count,
    };
    validate_airport_fields(&new_airport.airport).map_err(translate_domain_error)?;
    validate_public_details(new_airport.funding, new_airport.worker_count)
        .map_err(translate_domain_error)?;

    let airport_id: i64 = persistence
        .create_public_airport(&new_airport)
        .map_err(translate_persistence_error)?;

    info!("created public airport '{}' with id {airport_id}", request.name);
    Ok(CreateAirportResponse {
        airport_id,
        kind: AirportKind::Public.to_string(),
        message: format!("Created public airport '{}'", request.name),
    })
}

/// Creates a private airport: address row, base row, then extension row.
///
/// # Errors
///
/// Returns an error if a field fails validation or a statement fails.
pub fn create_private_airport(
    persistence: &mut Persistence,
    request: &CreatePrivateAirportRequest,
) -> Result<CreateAirportResponse, ApiError> {
    let new_airport: NewPrivateAirport = NewPrivateAirport {
        airport: NewAirport {
            name: request.name.clone(),
            inauguration_year: request.inauguration_year,
            capacity: request.capacity,
            address: new_address(&request.address),
            image: request.image.clone(),
        },
        partner_count: request.partner_count,
    };
    validate_airport_fields(&new_airport.airport).map_err(translate_domain_error)?;
    validate_private_details(new_airport.partner_count).map_err(translate_domain_error)?;

    let airport_id: i64 = persistence
        .create_private_airport(&new_airport)
        .map_err(translate_persistence_error)?;

    info!("created private airport '{}' with id {airport_id}", request.name);
    Ok(CreateAirportResponse {
        airport_id,
        kind: AirportKind::Private.to_string(),
        message: format!("Created private airport '{}'", request.name),
    })
}

/// Fetches a base airport record with its embedded address.
///
/// # Errors
///
/// Returns an error if no airport has this id or the query fails.
pub fn get_airport(persistence: &mut Persistence, airport_id: i64) -> Result<Airport, ApiError> {
    persistence
        .get_airport(airport_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| airport_not_found(airport_id))
}

/// Lists the base records of all airports, both kinds.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_airports(persistence: &mut Persistence) -> Result<ListAirportsResponse, ApiError> {
    let airports: Vec<Airport> = persistence
        .list_airports()
        .map_err(translate_persistence_error)?;
    Ok(ListAirportsResponse { airports })
}

/// Fetches a public airport, base row joined with its extension row.
///
/// # Errors
///
/// Returns an error if no public airport has this id or the query fails.
pub fn get_public_airport(
    persistence: &mut Persistence,
    airport_id: i64,
) -> Result<PublicAirport, ApiError> {
    persistence
        .get_public_airport(airport_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| airport_not_found(airport_id))
}

/// Lists all public airports.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_public_airports(
    persistence: &mut Persistence,
) -> Result<ListPublicAirportsResponse, ApiError> {
    let airports: Vec<PublicAirport> = persistence
        .list_public_airports()
        .map_err(translate_persistence_error)?;
    Ok(ListPublicAirportsResponse { airports })
}

/// Fetches a private airport, base row joined with its extension row.
///
/// # Errors
///
/// Returns an error if no private airport has this id or the query fails.
pub fn get_private_airport(
    persistence: &mut Persistence,
    airport_id: i64,
) -> Result<PrivateAirport, ApiError> {
    persistence
        .get_private_airport(airport_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| airport_not_found(airport_id))
}

/// Lists all private airports.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_private_airports(
    persistence: &mut Persistence,
) -> Result<ListPrivateAirportsResponse, ApiError> {
    let airports: Vec<PrivateAirport> = persistence
        .list_private_airports()
        .map_err(translate_persistence_error)?;
    Ok(ListPrivateAirportsResponse { airports })
}

/// Reports whether an airport is public or private by probing the
/// extension tables.
///
/// # Errors
///
/// Returns an error if no airport has this id or the query fails.
pub fn airport_kind(
    persistence: &mut Persistence,
    airport_id: i64,
) -> Result<AirportKindResponse, ApiError> {
    let kind: AirportKind = persistence
        .airport_kind(airport_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| airport_not_found(airport_id))?;
    Ok(AirportKindResponse {
        airport_id,
        kind: kind.to_string(),
    })
}

/// Updates a public airport: address, base row, then extension row.
///
/// The owned address keeps its row; its fields are overwritten.
///
/// # Errors
///
/// Returns an error if the airport is unknown, a field fails validation,
/// or a statement fails.
pub fn update_public_airport(
    persistence: &mut Persistence,
    airport_id: i64,
    request: &UpdatePublicAirportRequest,
) -> Result<UpdateAirportResponse, ApiError> {
    let existing: PublicAirport = get_public_airport(persistence, airport_id)?;

    let fields: NewAirport = NewAirport {
        name: request.name.clone(),
        inauguration_year: request.inauguration_year,
        capacity: request.capacity,
        address: new_address(&request.address),
        image: request.image.clone(),
    };
    validate_airport_fields(&fields).map_err(translate_domain_error)?;
    validate_public_details(request.funding, request.worker_count)
        .map_err(translate_domain_error)?;

    let updated: PublicAirport = PublicAirport {
        airport: Airport {
            id: airport_id,
            name: fields.name,
            inauguration_year: fields.inauguration_year,
            capacity: fields.capacity,
            address: Address {
                id: existing.airport.address.id,
                country: fields.address.country,
                city: fields.address.city,
                street: fields.address.street,
                street_number: fields.address.street_number,
            },
            image: fields.image,
        },
        funding: request.funding,
        worker_count: request.worker_count,
    };
    persistence
        .update_public_airport(&updated)
        .map_err(translate_persistence_error)?;

    info!("updated public airport {airport_id}");
    Ok(UpdateAirportResponse {
        airport_id,
        message: format!("Updated public airport '{}'", request.name),
    })
}

/// Updates a private airport: address, base row, then extension row.
///
/// # Errors
///
/// Returns an error if the airport is unknown, a field fails validation,
/// or a statement fails.
pub fn update_private_airport(
    persistence: &mut Persistence,
    airport_id: i64,
    request: &UpdatePrivateAirportRequest,
) -> Result<UpdateAirportResponse, ApiError> {
    let existing: PrivateAirport = get_private_airport(persistence, airport_id)?;

    let fields: NewAirport = NewAirport {
        name: request.name.clone(),
        inauguration_year: request.inauguration_year,
        capacity: request.capacity,
        address: new_address(&request.address),
        image: request.image.clone(),
    };
    validate_airport_fields(&fields).map_err(translate_domain_error)?;
    validate_private_details(request.partner_count).map_err(translate_domain_error)?;

    let updated: PrivateAirport = PrivateAirport {
        airport: Airport {
            id: airport_id,
            name: fields.name,
            inauguration_year: fields.inauguration_year,
            capacity: fields.capacity,
            address: Address {
                id: existing.airport.address.id,
                country: fields.address.country,
                city: fields.address.city,
                street: fields.address.street,
                street_number: fields.address.street_number,
            },
            image: fields.image,
        },
        partner_count: request.partner_count,
    };
    persistence
        .update_private_airport(&updated)
        .map_err(translate_persistence_error)?;

    info!("updated private airport {airport_id}");
    Ok(UpdateAirportResponse {
        airport_id,
        message: format!("Updated private airport '{}'", request.name),
    })
}

/// Deletes an airport: its aircraft, then its extension row, then the
/// base row. The owned address row is left behind.
///
/// # Errors
///
/// Returns an error if no airport has this id or a statement fails.
pub fn delete_airport(
    persistence: &mut Persistence,
    airport_id: i64,
) -> Result<DeleteAirportResponse, ApiError> {
    persistence
        .delete_airport(airport_id)
        .map_err(translate_persistence_error)?;

    info!("deleted airport {airport_id}");
    Ok(DeleteAirportResponse {
        airport_id,
        message: format!("Deleted airport {airport_id}"),
    })
}

/// Creates an aircraft at an existing airport.
///
/// # Errors
///
/// Returns an error if a field fails validation, the airport is unknown,
/// or the insert fails.
pub fn create_aircraft(
    persistence: &mut Persistence,
    request: &CreateAircraftRequest,
) -> Result<CreateAircraftResponse, ApiError> {
    let new_aircraft: NewAircraft = NewAircraft {
        model: request.model.clone(),
        seat_count: request.seat_count,
        max_speed: request.max_speed,
        is_active: request.is_active,
        airport_id: request.airport_id,
    };
    validate_aircraft_fields(&new_aircraft).map_err(translate_domain_error)?;

    // Resolve the airport before inserting so an unknown id reads as a
    // not-found rather than a foreign key failure.
    get_airport(persistence, request.airport_id)?;

    let aircraft_id: i64 = persistence
        .create_aircraft(&new_aircraft)
        .map_err(translate_persistence_error)?;

    info!(
        "created aircraft '{}' with id {aircraft_id} at airport {}",
        request.model, request.airport_id
    );
    Ok(CreateAircraftResponse {
        aircraft_id,
        message: format!("Created aircraft '{}'", request.model),
    })
}

/// Fetches an aircraft.
///
/// # Errors
///
/// Returns an error if no aircraft has this id or the query fails.
pub fn get_aircraft(
    persistence: &mut Persistence,
    aircraft_id: i64,
) -> Result<Aircraft, ApiError> {
    persistence
        .get_aircraft(aircraft_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| aircraft_not_found(aircraft_id))
}

/// Lists aircraft, optionally restricted to one airport.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_aircraft(
    persistence: &mut Persistence,
    airport_id: Option<i64>,
) -> Result<ListAircraftResponse, ApiError> {
    let aircraft: Vec<Aircraft> = match airport_id {
        Some(id) => persistence
            .list_aircraft_by_airport(id)
            .map_err(translate_persistence_error)?,
        None => persistence
            .list_aircraft()
            .map_err(translate_persistence_error)?,
    };
    Ok(ListAircraftResponse { aircraft })
}

/// Updates an aircraft. A changed airport id relocates it.
///
/// # Errors
///
/// Returns an error if the aircraft or the target airport is unknown, a
/// field fails validation, or the update fails.
pub fn update_aircraft(
    persistence: &mut Persistence,
    aircraft_id: i64,
    request: &UpdateAircraftRequest,
) -> Result<UpdateAircraftResponse, ApiError> {
    let existing: Aircraft = get_aircraft(persistence, aircraft_id)?;

    let fields: NewAircraft = NewAircraft {
        model: request.model.clone(),
        seat_count: request.seat_count,
        max_speed: request.max_speed,
        is_active: request.is_active,
        airport_id: request.airport_id,
    };
    validate_aircraft_fields(&fields).map_err(translate_domain_error)?;
    if request.airport_id != existing.airport_id {
        get_airport(persistence, request.airport_id)?;
    }

    let updated: Aircraft = Aircraft {
        id: aircraft_id,
        model: fields.model,
        seat_count: fields.seat_count,
        max_speed: fields.max_speed,
        is_active: fields.is_active,
        airport_id: fields.airport_id,
    };
    persistence
        .update_aircraft(&updated)
        .map_err(translate_persistence_error)?;

    info!("updated aircraft {aircraft_id}");
    Ok(UpdateAircraftResponse {
        aircraft_id,
        message: format!("Updated aircraft '{}'", request.model),
    })
}

/// Sets the active flag of an aircraft, touching nothing else.
///
/// # Errors
///
/// Returns an error if no aircraft has this id or the update fails.
pub fn set_aircraft_active(
    persistence: &mut Persistence,
    aircraft_id: i64,
    request: &SetAircraftActiveRequest,
) -> Result<SetAircraftActiveResponse, ApiError> {
    persistence
        .set_aircraft_active(aircraft_id, request.is_active)
        .map_err(translate_persistence_error)?;

    info!(
        "set aircraft {aircraft_id} active flag to {}",
        request.is_active
    );
    Ok(SetAircraftActiveResponse {
        aircraft_id,
        is_active: request.is_active,
        message: format!(
            "Aircraft {aircraft_id} is now {}",
            if request.is_active { "active" } else { "inactive" }
        ),
    })
}

/// Deletes an aircraft.
///
/// # Errors
///
/// Returns an error if no aircraft has this id or the delete fails.
pub fn delete_aircraft(
    persistence: &mut Persistence,
    aircraft_id: i64,
) -> Result<DeleteAircraftResponse, ApiError> {
    persistence
        .delete_aircraft(aircraft_id)
        .map_err(translate_persistence_error)?;

    info!("deleted aircraft {aircraft_id}");
    Ok(DeleteAircraftResponse {
        aircraft_id,
        message: format!("Deleted aircraft {aircraft_id}"),
    })
}
