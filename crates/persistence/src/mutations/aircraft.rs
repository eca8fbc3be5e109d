// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aircraft mutations.

use diesel::prelude::*;
use skyport_domain::{Aircraft, NewAircraft};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::aircraft;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a new aircraft and returns its generated ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `new_aircraft` - The aircraft to insert
///
/// # Errors
///
/// Returns an error if the insert fails, including when the owning
/// airport does not exist.
pub fn create_aircraft(
    conn: &mut _,
    new_aircraft: &NewAircraft,
) -> Result<i64, PersistenceError> {
    info!(
        "Creating aircraft {} at airport ID: {}",
        new_aircraft.model, new_aircraft.airport_id
    );

    diesel::insert_into(aircraft::table)
        .values((
            aircraft::model.eq(&new_aircraft.model),
            aircraft::seat_count.eq(new_aircraft.seat_count),
            aircraft::max_speed.eq(new_aircraft.max_speed),
            aircraft::is_active.eq(i32::from(new_aircraft.is_active)),
            aircraft::airport_id.eq(new_aircraft.airport_id),
        ))
        .execute(conn)?;

    let aircraft_id: i64 = conn.get_last_insert_rowid()?;

    info!("Created aircraft with ID: {}", aircraft_id);
    Ok(aircraft_id)
}
}

backend_fn! {
/// Updates all fields of an existing aircraft.
///
/// This includes the owning `airport_id`, so an aircraft can be
/// relocated to another airport.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `updated` - The aircraft carrying the new field values
///
/// # Errors
///
/// Returns an error if the aircraft doesn't exist or the update fails.
pub fn update_aircraft(conn: &mut _, updated: &Aircraft) -> Result<(), PersistenceError> {
    debug!("Updating aircraft ID: {}", updated.id);

    let rows_affected: usize = diesel::update(aircraft::table)
        .filter(aircraft::id.eq(updated.id))
        .set((
            aircraft::model.eq(&updated.model),
            aircraft::seat_count.eq(updated.seat_count),
            aircraft::max_speed.eq(updated.max_speed),
            aircraft::is_active.eq(i32::from(updated.is_active)),
            aircraft::airport_id.eq(updated.airport_id),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::AircraftNotFound(updated.id));
    }

    Ok(())
}
}

backend_fn! {
/// Sets the active flag of an aircraft.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `aircraft_id` - The aircraft ID
/// * `active` - The new active state
///
/// # Errors
///
/// Returns an error if the aircraft doesn't exist or the update fails.
pub fn set_aircraft_active(
    conn: &mut _,
    aircraft_id: i64,
    active: bool,
) -> Result<(), PersistenceError> {
    debug!("Setting aircraft ID {} active = {}", aircraft_id, active);

    let rows_affected: usize = diesel::update(aircraft::table)
        .filter(aircraft::id.eq(aircraft_id))
        .set(aircraft::is_active.eq(i32::from(active)))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::AircraftNotFound(aircraft_id));
    }

    Ok(())
}
}

backend_fn! {
/// Deletes an aircraft by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `aircraft_id` - The aircraft ID
///
/// # Errors
///
/// Returns an error if the aircraft doesn't exist or the delete fails.
pub fn delete_aircraft(conn: &mut _, aircraft_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting aircraft ID: {}", aircraft_id);

    let rows_affected: usize = diesel::delete(aircraft::table)
        .filter(aircraft::id.eq(aircraft_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::AircraftNotFound(aircraft_id));
    }

    Ok(())
}
}

backend_fn! {
/// Deletes every aircraft stationed at the given airport.
///
/// Used by the airport delete cascade; returns the number of rows
/// removed, which may be zero.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The owning airport ID
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_aircraft_by_airport(
    conn: &mut _,
    airport_id: i64,
) -> Result<usize, PersistenceError> {
    debug!("Deleting all aircraft for airport ID: {}", airport_id);

    let rows_affected: usize = diesel::delete(aircraft::table)
        .filter(aircraft::airport_id.eq(airport_id))
        .execute(conn)?;

    info!(
        "Deleted {} aircraft for airport ID: {}",
        rows_affected, airport_id
    );
    Ok(rows_affected)
}
}
