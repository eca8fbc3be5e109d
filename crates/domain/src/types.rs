// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Distinguishes the two airport subtypes.
///
/// Every persisted airport has a base row plus exactly one extension row;
/// the kind selects which extension table that row lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirportKind {
    /// Publicly funded airport with a worker count.
    Public,
    /// Privately held airport with a partner count.
    Private,
}

impl AirportKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl FromStr for AirportKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            _ => Err(DomainError::InvalidAirportKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for AirportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A postal address, owned exclusively by one airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// The database-generated identifier.
    pub id: i64,
    pub country: String,
    pub city: String,
    pub street: String,
    pub street_number: i32,
}

/// Input data for a new address (no id yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAddress {
    pub country: String,
    pub city: String,
    pub street: String,
    pub street_number: i32,
}

/// The base airport record shared by both subtypes.
///
/// The owned address is embedded; the optional image is an opaque blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// The database-generated identifier.
    pub id: i64,
    pub name: String,
    pub inauguration_year: i32,
    pub capacity: i32,
    pub address: Address,
    pub image: Option<Vec<u8>>,
}

/// Input data for a new base airport row.
///
/// The address is created alongside the airport, so it carries a
/// `NewAddress` rather than an address id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAirport {
    pub name: String,
    pub inauguration_year: i32,
    pub capacity: i32,
    pub address: NewAddress,
    pub image: Option<Vec<u8>>,
}

/// A public airport: base record plus funding and staffing details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicAirport {
    pub airport: Airport,
    pub funding: f64,
    pub worker_count: i32,
}

/// Input data for a new public airport (base row plus extension row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPublicAirport {
    pub airport: NewAirport,
    pub funding: f64,
    pub worker_count: i32,
}

/// A private airport: base record plus partner count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateAirport {
    pub airport: Airport,
    pub partner_count: i32,
}

/// Input data for a new private airport (base row plus extension row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPrivateAirport {
    pub airport: NewAirport,
    pub partner_count: i32,
}

/// An aircraft stationed at an airport.
///
/// The owning airport is referenced by id; callers that need the full
/// airport record fetch it separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    /// The database-generated identifier.
    pub id: i64,
    pub model: String,
    pub seat_count: i32,
    pub max_speed: i32,
    pub is_active: bool,
    pub airport_id: i64,
}

/// Input data for a new aircraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAircraft {
    pub model: String,
    pub seat_count: i32,
    pub max_speed: i32,
    pub is_active: bool,
    pub airport_id: i64,
}

/// A login user. Passwords are stored and compared in plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
}

// Two users are the same user if their usernames match.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl Eq for User {}

impl std::hash::Hash for User {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.username.hash(state);
    }
}
