// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aircraft queries.
//!
//! Backend-agnostic queries for retrieving aircraft. All queries use
//! Diesel DSL and work across all supported database backends.

use diesel::prelude::*;
use skyport_domain::Aircraft;
use tracing::debug;

use crate::diesel_schema::aircraft;
use crate::error::PersistenceError;

/// Diesel Queryable struct for aircraft rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = aircraft)]
struct AircraftRow {
    id: i64,
    model: String,
    seat_count: i32,
    max_speed: i32,
    is_active: i32,
    airport_id: i64,
}

impl From<AircraftRow> for Aircraft {
    fn from(row: AircraftRow) -> Self {
        Self {
            id: row.id,
            model: row.model,
            seat_count: row.seat_count,
            max_speed: row.max_speed,
            is_active: row.is_active != 0,
            airport_id: row.airport_id,
        }
    }
}

backend_fn! {
/// Retrieves an aircraft by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `aircraft_id` - The aircraft ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the aircraft is not found.
pub fn get_aircraft(
    conn: &mut _,
    aircraft_id: i64,
) -> Result<Option<Aircraft>, PersistenceError> {
    debug!("Looking up aircraft by ID: {}", aircraft_id);

    let result: Result<AircraftRow, diesel::result::Error> = aircraft::table
        .filter(aircraft::id.eq(aircraft_id))
        .select(AircraftRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all aircraft, ordered by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_aircraft(conn: &mut _) -> Result<Vec<Aircraft>, PersistenceError> {
    debug!("Listing all aircraft");

    let rows: Vec<AircraftRow> = aircraft::table
        .select(AircraftRow::as_select())
        .order_by(aircraft::id.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}
}

backend_fn! {
/// Lists all aircraft stationed at the given airport, ordered by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The owning airport ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_aircraft_by_airport(
    conn: &mut _,
    airport_id: i64,
) -> Result<Vec<Aircraft>, PersistenceError> {
    debug!("Listing aircraft for airport ID: {}", airport_id);

    let rows: Vec<AircraftRow> = aircraft::table
        .filter(aircraft::airport_id.eq(airport_id))
        .select(AircraftRow::as_select())
        .order_by(aircraft::id.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}
}
