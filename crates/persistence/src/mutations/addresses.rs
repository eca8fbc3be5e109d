// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Address mutations.

use diesel::prelude::*;
use skyport_domain::{Address, NewAddress};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::addresses;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a new address and returns its generated ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `address` - The address to insert
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_address(conn: &mut _, address: &NewAddress) -> Result<i64, PersistenceError> {
    debug!(
        "Creating address: {}, {} {}, {}",
        address.street, address.street_number, address.city, address.country
    );

    diesel::insert_into(addresses::table)
        .values((
            addresses::country.eq(&address.country),
            addresses::city.eq(&address.city),
            addresses::street.eq(&address.street),
            addresses::street_number.eq(address.street_number),
        ))
        .execute(conn)?;

    let address_id: i64 = conn.get_last_insert_rowid()?;

    debug!("Created address with ID: {}", address_id);
    Ok(address_id)
}
}

backend_fn! {
/// Updates all fields of an existing address.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `address` - The address carrying the new field values
///
/// # Errors
///
/// Returns an error if the address doesn't exist or the update fails.
pub fn update_address(conn: &mut _, address: &Address) -> Result<(), PersistenceError> {
    debug!("Updating address ID: {}", address.id);

    let rows_affected: usize = diesel::update(addresses::table)
        .filter(addresses::id.eq(address.id))
        .set((
            addresses::country.eq(&address.country),
            addresses::city.eq(&address.city),
            addresses::street.eq(&address.street),
            addresses::street_number.eq(address.street_number),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::AddressNotFound(address.id));
    }

    Ok(())
}
}

backend_fn! {
/// Deletes an address by ID.
///
/// Airport deletion leaves its address row behind; this is the cleanup
/// operation for those orphaned rows.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `address_id` - The address ID
///
/// # Errors
///
/// Returns an error if the address doesn't exist or the delete fails.
pub fn delete_address(conn: &mut _, address_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting address ID: {}", address_id);

    let rows_affected: usize = diesel::delete(addresses::table)
        .filter(addresses::id.eq(address_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::AddressNotFound(address_id));
    }

    Ok(())
}
}
