// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Base airport and extension row mutations.
//!
//! Each function here touches exactly one table. The `Persistence` adapter
//! sequences them into the composite create, update, and delete operations.

use diesel::prelude::*;
use skyport_domain::{Airport, NewAirport};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{airports, private_airports, public_airports};
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a new base airport row and returns its generated ID.
///
/// The owned address must already exist; its ID is passed separately
/// because the address row is inserted first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport` - The base airport fields
/// * `address_id` - The ID of the already-inserted address row
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_airport(
    conn: &mut _,
    airport: &NewAirport,
    address_id: i64,
) -> Result<i64, PersistenceError> {
    info!("Creating airport: {}", airport.name);

    diesel::insert_into(airports::table)
        .values((
            airports::name.eq(&airport.name),
            airports::inauguration_year.eq(airport.inauguration_year),
            airports::capacity.eq(airport.capacity),
            airports::address_id.eq(address_id),
            airports::image.eq(airport.image.as_deref()),
        ))
        .execute(conn)?;

    let airport_id: i64 = conn.get_last_insert_rowid()?;

    info!("Created airport with ID: {}", airport_id);
    Ok(airport_id)
}
}

backend_fn! {
/// Inserts the public extension row for an airport.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The base airport ID
/// * `funding` - Public funding amount
/// * `worker_count` - Number of workers
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_public_details(
    conn: &mut _,
    airport_id: i64,
    funding: f64,
    worker_count: i32,
) -> Result<(), PersistenceError> {
    debug!("Inserting public details for airport ID: {}", airport_id);

    diesel::insert_into(public_airports::table)
        .values((
            public_airports::airport_id.eq(airport_id),
            public_airports::funding.eq(funding),
            public_airports::worker_count.eq(worker_count),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Inserts the private extension row for an airport.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The base airport ID
/// * `partner_count` - Number of partners
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_private_details(
    conn: &mut _,
    airport_id: i64,
    partner_count: i32,
) -> Result<(), PersistenceError> {
    debug!("Inserting private details for airport ID: {}", airport_id);

    diesel::insert_into(private_airports::table)
        .values((
            private_airports::airport_id.eq(airport_id),
            private_airports::partner_count.eq(partner_count),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Updates the base fields of an existing airport.
///
/// The address is owned by the airport and never reassigned, so
/// `address_id` is left untouched; the address row itself is updated
/// separately.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport` - The airport carrying the new field values
///
/// # Errors
///
/// Returns an error if the airport doesn't exist or the update fails.
pub fn update_airport(conn: &mut _, airport: &Airport) -> Result<(), PersistenceError> {
    debug!("Updating airport ID: {}", airport.id);

    let rows_affected: usize = diesel::update(airports::table)
        .filter(airports::id.eq(airport.id))
        .set((
            airports::name.eq(&airport.name),
            airports::inauguration_year.eq(airport.inauguration_year),
            airports::capacity.eq(airport.capacity),
            airports::image.eq(airport.image.as_deref()),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::AirportNotFound(airport.id));
    }

    Ok(())
}
}

backend_fn! {
/// Updates the public extension row for an airport.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The base airport ID
/// * `funding` - Public funding amount
/// * `worker_count` - Number of workers
///
/// # Errors
///
/// Returns an error if no public extension row exists for the airport.
pub fn update_public_details(
    conn: &mut _,
    airport_id: i64,
    funding: f64,
    worker_count: i32,
) -> Result<(), PersistenceError> {
    debug!("Updating public details for airport ID: {}", airport_id);

    let rows_affected: usize = diesel::update(public_airports::table)
        .filter(public_airports::airport_id.eq(airport_id))
        .set((
            public_airports::funding.eq(funding),
            public_airports::worker_count.eq(worker_count),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::AirportNotFound(airport_id));
    }

    Ok(())
}
}

backend_fn! {
/// Updates the private extension row for an airport.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The base airport ID
/// * `partner_count` - Number of partners
///
/// # Errors
///
/// Returns an error if no private extension row exists for the airport.
pub fn update_private_details(
    conn: &mut _,
    airport_id: i64,
    partner_count: i32,
) -> Result<(), PersistenceError> {
    debug!("Updating private details for airport ID: {}", airport_id);

    let rows_affected: usize = diesel::update(private_airports::table)
        .filter(private_airports::airport_id.eq(airport_id))
        .set(private_airports::partner_count.eq(partner_count))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::AirportNotFound(airport_id));
    }

    Ok(())
}
}

backend_fn! {
/// Deletes the public extension row for an airport, if present.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The base airport ID
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_public_details(conn: &mut _, airport_id: i64) -> Result<usize, PersistenceError> {
    debug!("Deleting public details for airport ID: {}", airport_id);

    Ok(diesel::delete(public_airports::table)
        .filter(public_airports::airport_id.eq(airport_id))
        .execute(conn)?)
}
}

backend_fn! {
/// Deletes the private extension row for an airport, if present.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The base airport ID
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_private_details(conn: &mut _, airport_id: i64) -> Result<usize, PersistenceError> {
    debug!("Deleting private details for airport ID: {}", airport_id);

    Ok(diesel::delete(private_airports::table)
        .filter(private_airports::airport_id.eq(airport_id))
        .execute(conn)?)
}
}

backend_fn! {
/// Deletes the base airport row.
///
/// Extension rows and aircraft must already be gone or the foreign key
/// constraints reject the delete.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The base airport ID
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_airport_row(conn: &mut _, airport_id: i64) -> Result<usize, PersistenceError> {
    info!("Deleting airport ID: {}", airport_id);

    Ok(diesel::delete(airports::table)
        .filter(airports::id.eq(airport_id))
        .execute(conn)?)
}
}
