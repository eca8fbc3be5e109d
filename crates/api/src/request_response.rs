// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API layer.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. Read operations return the domain records directly since
//! they already carry serde derives.

use serde::{Deserialize, Serialize};
use skyport_domain::{Aircraft, Airport, PrivateAirport, PublicAirport};

/// Address fields as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPayload {
    pub country: String,
    pub city: String,
    pub street: String,
    pub street_number: i32,
}

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    /// A success message.
    pub message: String,
}

/// API request to create a login user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

/// API response for a successful user creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub username: String,
    /// A success message.
    pub message: String,
}

/// API request to create a public airport.
///
/// Carries the base airport fields, the owned address, and the
/// public-only extension fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePublicAirportRequest {
    pub name: String,
    pub inauguration_year: i32,
    pub capacity: i32,
    pub address: AddressPayload,
    pub image: Option<Vec<u8>>,
    pub funding: f64,
    pub worker_count: i32,
}

/// API request to create a private airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePrivateAirportRequest {
    pub name: String,
    pub inauguration_year: i32,
    pub capacity: i32,
    pub address: AddressPayload,
    pub image: Option<Vec<u8>>,
    pub partner_count: i32,
}

/// API response for a successful airport creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAirportResponse {
    /// The database-generated airport identifier.
    pub airport_id: i64,
    /// The airport kind, `"public"` or `"private"`.
    pub kind: String,
    /// A success message.
    pub message: String,
}

/// API request to update a public airport.
///
/// The airport id arrives separately; the owned address keeps its row and
/// has its fields overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePublicAirportRequest {
    pub name: String,
    pub inauguration_year: i32,
    pub capacity: i32,
    pub address: AddressPayload,
    pub image: Option<Vec<u8>>,
    pub funding: f64,
    pub worker_count: i32,
}

/// API request to update a private airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePrivateAirportRequest {
    pub name: String,
    pub inauguration_year: i32,
    pub capacity: i32,
    pub address: AddressPayload,
    pub image: Option<Vec<u8>>,
    pub partner_count: i32,
}

/// API response for a successful airport update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAirportResponse {
    pub airport_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for a successful airport deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAirportResponse {
    pub airport_id: i64,
    /// A success message.
    pub message: String,
}

/// API response naming the kind of an airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportKindResponse {
    pub airport_id: i64,
    /// The airport kind, `"public"` or `"private"`.
    pub kind: String,
}

/// API response listing base airport records of both kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAirportsResponse {
    pub airports: Vec<Airport>,
}

/// API response listing public airports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPublicAirportsResponse {
    pub airports: Vec<PublicAirport>,
}

/// API response listing private airports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPrivateAirportsResponse {
    pub airports: Vec<PrivateAirport>,
}

/// API request to create an aircraft at an airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAircraftRequest {
    pub model: String,
    pub seat_count: i32,
    pub max_speed: i32,
    pub is_active: bool,
    pub airport_id: i64,
}

/// API response for a successful aircraft creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAircraftResponse {
    /// The database-generated aircraft identifier.
    pub aircraft_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to update an aircraft.
///
/// A changed `airport_id` relocates the aircraft to another airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAircraftRequest {
    pub model: String,
    pub seat_count: i32,
    pub max_speed: i32,
    pub is_active: bool,
    pub airport_id: i64,
}

/// API response for a successful aircraft update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAircraftResponse {
    pub aircraft_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to set the active flag of an aircraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAircraftActiveRequest {
    pub is_active: bool,
}

/// API response for a successful active-flag change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAircraftActiveResponse {
    pub aircraft_id: i64,
    pub is_active: bool,
    /// A success message.
    pub message: String,
}

/// API response listing aircraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAircraftResponse {
    pub aircraft: Vec<Aircraft>,
}

/// API response for a successful aircraft deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAircraftResponse {
    pub aircraft_id: i64,
    /// A success message.
    pub message: String,
}
