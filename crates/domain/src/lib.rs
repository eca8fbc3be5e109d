// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and field validation for Skyport.
//!
//! This crate defines the plain data types for airports (public and
//! private), addresses, aircraft, and login users, together with the
//! validation rules applied before anything reaches the database.
//! It has no persistence or transport concerns.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use types::{
    Address, Aircraft, Airport, AirportKind, NewAddress, NewAircraft, NewAirport,
    NewPrivateAirport, NewPublicAirport, PrivateAirport, PublicAirport, User,
};
pub use validation::{
    validate_address_fields, validate_aircraft_fields, validate_airport_fields,
    validate_credentials, validate_private_details, validate_public_details,
};
