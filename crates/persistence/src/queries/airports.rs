// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Airport queries.
//!
//! Airports are stored table-per-subtype: a base `airports` row plus one
//! extension row in either `public_airports` or `private_airports`. Subtype
//! reads inner-join the base table (and its owned address) with the
//! extension table, so an airport whose extension row is missing never
//! appears in subtype results.

use diesel::prelude::*;
use skyport_domain::{Airport, AirportKind, PrivateAirport, PublicAirport};
use tracing::debug;

use crate::diesel_schema::{addresses, airports, private_airports, public_airports};
use crate::error::PersistenceError;
use crate::queries::addresses::AddressRow;

/// Diesel Queryable struct for base airport rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = airports)]
struct AirportRow {
    id: i64,
    name: String,
    inauguration_year: i32,
    capacity: i32,
    image: Option<Vec<u8>>,
}

/// Diesel Queryable struct for public extension rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = public_airports)]
struct PublicDetailsRow {
    funding: f64,
    worker_count: i32,
}

/// Diesel Queryable struct for private extension rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = private_airports)]
struct PrivateDetailsRow {
    partner_count: i32,
}

fn assemble_airport(airport: AirportRow, address: AddressRow) -> Airport {
    Airport {
        id: airport.id,
        name: airport.name,
        inauguration_year: airport.inauguration_year,
        capacity: airport.capacity,
        address: address.into(),
        image: airport.image,
    }
}

backend_fn! {
/// Retrieves a base airport by ID, with its owned address embedded.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The airport ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the airport is not found.
pub fn get_airport(
    conn: &mut _,
    airport_id: i64,
) -> Result<Option<Airport>, PersistenceError> {
    debug!("Looking up airport by ID: {}", airport_id);

    let result: Result<(AirportRow, AddressRow), diesel::result::Error> = airports::table
        .inner_join(addresses::table)
        .filter(airports::id.eq(airport_id))
        .select((AirportRow::as_select(), AddressRow::as_select()))
        .first(conn);

    match result {
        Ok((airport, address)) => Ok(Some(assemble_airport(airport, address))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all base airports, ordered by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_airports(conn: &mut _) -> Result<Vec<Airport>, PersistenceError> {
    debug!("Listing all airports");

    let rows: Vec<(AirportRow, AddressRow)> = airports::table
        .inner_join(addresses::table)
        .select((AirportRow::as_select(), AddressRow::as_select()))
        .order_by(airports::id.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(airport, address)| assemble_airport(airport, address))
        .collect())
}
}

backend_fn! {
/// Retrieves a public airport by ID.
///
/// Inner-joins the extension table, so a base airport without a public
/// extension row yields `Ok(None)`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The airport ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_public_airport(
    conn: &mut _,
    airport_id: i64,
) -> Result<Option<PublicAirport>, PersistenceError> {
    debug!("Looking up public airport by ID: {}", airport_id);

    let result: Result<(PublicDetailsRow, (AirportRow, AddressRow)), diesel::result::Error> =
        public_airports::table
            .inner_join(airports::table.inner_join(addresses::table))
            .filter(public_airports::airport_id.eq(airport_id))
            .select((
                PublicDetailsRow::as_select(),
                (AirportRow::as_select(), AddressRow::as_select()),
            ))
            .first(conn);

    match result {
        Ok((details, (airport, address))) => Ok(Some(PublicAirport {
            airport: assemble_airport(airport, address),
            funding: details.funding,
            worker_count: details.worker_count,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all public airports, ordered by airport ID.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_public_airports(conn: &mut _) -> Result<Vec<PublicAirport>, PersistenceError> {
    debug!("Listing all public airports");

    let rows: Vec<(PublicDetailsRow, (AirportRow, AddressRow))> = public_airports::table
        .inner_join(airports::table.inner_join(addresses::table))
        .select((
            PublicDetailsRow::as_select(),
            (AirportRow::as_select(), AddressRow::as_select()),
        ))
        .order_by(public_airports::airport_id.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(details, (airport, address))| PublicAirport {
            airport: assemble_airport(airport, address),
            funding: details.funding,
            worker_count: details.worker_count,
        })
        .collect())
}
}

backend_fn! {
/// Retrieves a private airport by ID.
///
/// Inner-joins the extension table, so a base airport without a private
/// extension row yields `Ok(None)`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The airport ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_private_airport(
    conn: &mut _,
    airport_id: i64,
) -> Result<Option<PrivateAirport>, PersistenceError> {
    debug!("Looking up private airport by ID: {}", airport_id);

    let result: Result<(PrivateDetailsRow, (AirportRow, AddressRow)), diesel::result::Error> =
        private_airports::table
            .inner_join(airports::table.inner_join(addresses::table))
            .filter(private_airports::airport_id.eq(airport_id))
            .select((
                PrivateDetailsRow::as_select(),
                (AirportRow::as_select(), AddressRow::as_select()),
            ))
            .first(conn);

    match result {
        Ok((details, (airport, address))) => Ok(Some(PrivateAirport {
            airport: assemble_airport(airport, address),
            partner_count: details.partner_count,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all private airports, ordered by airport ID.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_private_airports(conn: &mut _) -> Result<Vec<PrivateAirport>, PersistenceError> {
    debug!("Listing all private airports");

    let rows: Vec<(PrivateDetailsRow, (AirportRow, AddressRow))> = private_airports::table
        .inner_join(airports::table.inner_join(addresses::table))
        .select((
            PrivateDetailsRow::as_select(),
            (AirportRow::as_select(), AddressRow::as_select()),
        ))
        .order_by(private_airports::airport_id.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(details, (airport, address))| PrivateAirport {
            airport: assemble_airport(airport, address),
            partner_count: details.partner_count,
        })
        .collect())
}
}

backend_fn! {
/// Determines which subtype an airport belongs to by probing the
/// extension tables, public first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The airport ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the airport has no extension row.
pub fn airport_kind(
    conn: &mut _,
    airport_id: i64,
) -> Result<Option<AirportKind>, PersistenceError> {
    use diesel::dsl::count;

    debug!("Determining kind of airport ID: {}", airport_id);

    let public_rows: i64 = public_airports::table
        .filter(public_airports::airport_id.eq(airport_id))
        .select(count(public_airports::airport_id))
        .first(conn)?;
    if public_rows > 0 {
        return Ok(Some(AirportKind::Public));
    }

    let private_rows: i64 = private_airports::table
        .filter(private_airports::airport_id.eq(airport_id))
        .select(count(private_airports::airport_id))
        .first(conn)?;
    if private_rows > 0 {
        return Ok(Some(AirportKind::Private));
    }

    Ok(None)
}
}
