// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Address queries.
//!
//! Backend-agnostic queries for retrieving addresses. All queries use
//! Diesel DSL and work across all supported database backends.

use diesel::prelude::*;
use skyport_domain::Address;
use tracing::debug;

use crate::diesel_schema::addresses;
use crate::error::PersistenceError;

/// Diesel Queryable struct for address rows.
///
/// Shared with the airport queries, which join against this table.
#[derive(Queryable, Selectable)]
#[diesel(table_name = addresses)]
pub(crate) struct AddressRow {
    pub(crate) id: i64,
    pub(crate) country: String,
    pub(crate) city: String,
    pub(crate) street: String,
    pub(crate) street_number: i32,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Self {
            id: row.id,
            country: row.country,
            city: row.city,
            street: row.street,
            street_number: row.street_number,
        }
    }
}

backend_fn! {
/// Retrieves an address by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `address_id` - The address ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the address is not found.
pub fn get_address(
    conn: &mut _,
    address_id: i64,
) -> Result<Option<Address>, PersistenceError> {
    debug!("Looking up address by ID: {}", address_id);

    let result: Result<AddressRow, diesel::result::Error> = addresses::table
        .filter(addresses::id.eq(address_id))
        .select(AddressRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}
